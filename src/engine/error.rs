// ==========================================
// 订单利润分析 - 引擎层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("无真实单，无法计算每单平均利润 (订单总数 {total_orders})")]
    DivisionByZero { total_orders: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
