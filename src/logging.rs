// ==========================================
// 订单利润分析 - 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 级别优先级: RUST_LOG > 配置文件 log.level > info
// ==========================================

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日志系统
///
/// # 环境变量
/// - RUST_LOG: 日志级别过滤器，优先于配置文件
///   例如: RUST_LOG=debug 或 RUST_LOG=order_profit_analyzer=trace
///
/// # 示例
/// ```no_run
/// use order_profit_analyzer::config::LogConfig;
/// use order_profit_analyzer::logging;
/// logging::init(&LogConfig::default());
/// ```
pub fn init(log_config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_config.level.as_str()));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true);

    match log_config.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// 初始化测试环境的日志系统
///
/// 使用 debug 级别，可重复调用
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
