// ==========================================
// 订单利润分析 - API 层
// ==========================================
// 职责: 串联 导入 → 分类 → 汇总 → 报表，供 main 调用
// ==========================================

pub mod error;
pub mod order_analysis_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use order_analysis_api::{BatchReport, FileAnalysis, OrderAnalysisApi};
