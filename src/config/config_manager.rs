// ==========================================
// 订单利润分析 - 配置管理器
// ==========================================
// 职责: 配置加载（文件不存在则使用默认值）
// 存储: <dir>/order_analysis.json
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::profit_config::AnalysisConfig;
use std::fs;
use std::path::Path;

/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "order_analysis.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// 从目录加载配置
    ///
    /// # 参数
    /// - dir: 查找 order_analysis.json 的目录
    ///
    /// # 返回
    /// - Ok(AnalysisConfig): 文件存在时为覆写后的配置，否则为默认配置
    /// - Err(ConfigError): 文件存在但无法读取或解析
    pub fn load(dir: &Path) -> ConfigResult<AnalysisConfig> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(AnalysisConfig::default());
        }
        Self::load_file(&path)
    }

    /// 从指定文件加载配置
    pub fn load_file(path: &Path) -> ConfigResult<AnalysisConfig> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&raw).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 获取配置快照（JSON格式）
    ///
    /// 用于启动时记录实际生效的规则参数
    pub fn snapshot(config: &AnalysisConfig) -> String {
        serde_json::to_string(config).unwrap_or_else(|_| "{}".to_string())
    }
}
