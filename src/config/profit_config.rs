// ==========================================
// 订单利润分析 - 配置项定义
// ==========================================
// 职责: 分类/利润规则常量、输入发现参数、日志参数
// 说明: 所有字段带默认值，配置文件可只覆写部分键
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ProfitConfig - 利润规则参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfitConfig {
    /// 美团推广成本（每单）
    pub meituan_fee: f64,
    /// 刷单的地推成本（配送费为 0 时强制使用）
    pub promoter_cost: f64,
    /// 真实单的默认地推成本
    pub default_street_promoter: f64,
    /// 总部抽成基数比例: commission = real_income / base_ratio * rate
    pub commission_base_ratio: f64,
    /// 总部抽成比例
    pub commission_rate: f64,
}

impl Default for ProfitConfig {
    fn default() -> Self {
        Self {
            meituan_fee: 2.5,
            promoter_cost: 15.0,
            default_street_promoter: 0.0,
            commission_base_ratio: 0.9,
            commission_rate: 0.1,
        }
    }
}

// ==========================================
// DiscoveryConfig - 输入文件发现参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// 扫描目录（不递归）
    pub input_dir: String,
    /// 扩展名列表（不含点，区分大小写）
    pub extensions: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            input_dir: ".".to_string(),
            extensions: vec!["xls".to_string()],
        }
    }
}

// ==========================================
// LogConfig - 日志参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// EnvFilter 语法，RUST_LOG 存在时被覆盖
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

// ==========================================
// AnalysisConfig - 完整配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub discovery: DiscoveryConfig,
    pub profit: ProfitConfig,
    pub log: LogConfig,
}
