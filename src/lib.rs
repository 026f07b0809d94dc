// ==========================================
// 订单利润分析 - 核心库
// ==========================================
// 输入: 商家后台导出的订单表（SpreadsheetML .xls）
// 输出: 每个输入文件一份分析报表（真实单 / 刷单 / 统计）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与表头映射
pub mod domain;

// 引擎层 - 分类与汇总规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 报表层 - 工作簿输出
pub mod report;

// 配置层 - 规则参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 流程编排
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

pub use domain::{OrderBook, OrderField, OrderKind, OrderRecord, OrderSummary, RawOrderRecord};

pub use engine::{OrderBookAggregator, OrderClassifier};

pub use config::{AnalysisConfig, ConfigManager, ProfitConfig};

pub use api::{ApiError, BatchReport, FileAnalysis, OrderAnalysisApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "订单利润分析";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
