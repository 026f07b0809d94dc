// ==========================================
// 订单利润分析 - 订单簿汇总引擎
// ==========================================
// 流程: 稳定划分（真实单 / 刷单）→ 三项独立汇总
// 口径:
// - total_income  = Σ真实单实收 - Σ刷单(美团推广 + 地推)
// - average_income = total_income / 真实单量（真实单量为 0 时失败）
// - reback_income = Σ刷单总部抽成
// ==========================================

use crate::domain::order::OrderRecord;
use crate::domain::order_book::{OrderBook, OrderSummary};
use crate::engine::error::{EngineError, EngineResult};
use tracing::{info, instrument};

pub struct OrderBookAggregator;

impl OrderBookAggregator {
    pub fn new() -> Self {
        Self
    }

    /// 构造订单簿
    ///
    /// # 返回
    /// - Err(EngineError::DivisionByZero): 无真实单，无法计算平均利润
    #[instrument(skip(self, records), fields(count = records.len()))]
    pub fn aggregate(&self, records: Vec<OrderRecord>) -> EngineResult<OrderBook> {
        let total = records.len();
        let (real_table, promoter_table) = Self::partition(records);

        let real_orders = real_table.len();
        let fake_orders = total - real_orders;

        let total_income = Self::total_income(&real_table, &promoter_table);
        if real_orders == 0 {
            return Err(EngineError::DivisionByZero {
                total_orders: total,
            });
        }
        let average_income = total_income / real_orders as f64;
        let reback_income = Self::reback_income(&promoter_table);

        let summary = OrderSummary {
            real_orders,
            fake_orders,
            total_income,
            average_income,
            reback_income,
        };
        info!(%summary, "订单簿汇总完成");

        Ok(OrderBook::new(summary, real_table, promoter_table))
    }

    /// 按配送费稳定划分
    fn partition(records: Vec<OrderRecord>) -> (Vec<OrderRecord>, Vec<OrderRecord>) {
        records
            .into_iter()
            .partition(|record| record.postage_fee() != 0.0)
    }

    fn total_income(real_table: &[OrderRecord], promoter_table: &[OrderRecord]) -> f64 {
        let income: f64 = real_table.iter().map(|r| r.real_income()).sum();
        let promoter_cost: f64 = promoter_table.iter().map(|r| r.carried_cost()).sum();
        income - promoter_cost
    }

    fn reback_income(promoter_table: &[OrderRecord]) -> f64 {
        promoter_table.iter().map(|r| r.commission()).sum()
    }
}

impl Default for OrderBookAggregator {
    fn default() -> Self {
        Self::new()
    }
}
