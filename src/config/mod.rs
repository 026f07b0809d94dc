// ==========================================
// 订单利润分析 - 配置层
// ==========================================
// 职责: 规则常量与运行参数，支持 JSON 文件覆写
// 存储: 工作目录下 order_analysis.json（可选）
// ==========================================

pub mod config_manager;
pub mod error;
pub mod profit_config;

pub use config_manager::{ConfigManager, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult};
pub use profit_config::{AnalysisConfig, DiscoveryConfig, LogConfig, LogFormat, ProfitConfig};
