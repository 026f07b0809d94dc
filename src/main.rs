// ==========================================
// 订单利润分析 - 命令行入口
// ==========================================
// 无参数: 分析当前目录（或配置 discovery.input_dir）下所有订单文件
// ==========================================

use anyhow::{bail, Context, Result};
use order_profit_analyzer::config::ConfigManager;
use order_profit_analyzer::{logging, OrderAnalysisApi};
use std::path::Path;

fn main() -> Result<()> {
    let api = OrderAnalysisApi::from_config_dir(Path::new(".")).context("无法加载配置")?;
    let config = api.config();

    logging::init(&config.log);

    tracing::info!("==================================================");
    tracing::info!("{}", order_profit_analyzer::APP_NAME);
    tracing::info!("系统版本: {}", order_profit_analyzer::VERSION);
    tracing::info!("==================================================");
    tracing::debug!(config = %ConfigManager::snapshot(config), "配置已加载");

    let report = api
        .analyze_directory(Path::new(&config.discovery.input_dir))
        .context("目录分析失败")?;

    for analysis in &report.succeeded {
        tracing::info!(
            input = %analysis.input.display(),
            output = %analysis.output.display(),
            "{}",
            analysis.summary
        );
    }

    if report.has_failures() {
        for err in &report.failed {
            tracing::error!("{}", err);
        }
        bail!("{}/{} 个文件处理失败", report.failed.len(), report.total());
    }

    Ok(())
}
