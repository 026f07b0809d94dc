// ==========================================
// 订单利润分析 - 报表层
// ==========================================
// 职责: 输出文件命名 + 三表工作簿写入（真实单 / 刷单 / 统计）
// ==========================================

pub mod error;
pub mod naming;
pub mod report_builder;

pub use error::{ReportError, ReportResult};
pub use naming::derive_output_name;
pub use report_builder::{ReportBuilder, SUMMARY_SHEET};
