// ==========================================
// 订单利润分析 - 领域模型层
// ==========================================
// 职责: 订单实体、订单簿、表头映射
// 红线: 不含文件读写逻辑，不含计算规则
// ==========================================

pub mod fields;
pub mod order;
pub mod order_book;

// 重导出核心类型
pub use fields::{OrderField, SUMMARY_HEADERS};
pub use order::{parse_postage_fee, OrderKind, OrderRecord, RawOrderRecord};
pub use order_book::{OrderBook, OrderSummary};
