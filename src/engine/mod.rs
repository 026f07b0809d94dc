// ==========================================
// 订单利润分析 - 引擎层
// ==========================================
// 职责: 订单分类、利润派生、订单簿汇总
// 红线: 纯计算，不读写文件
// ==========================================

pub mod aggregator;
pub mod classifier;
pub mod error;

// 重导出核心引擎
pub use aggregator::OrderBookAggregator;
pub use classifier::{classify_order_kind, derive_commission, derive_single_profit, OrderClassifier};
pub use error::{EngineError, EngineResult};
