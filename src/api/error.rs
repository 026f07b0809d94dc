// ==========================================
// 订单利润分析 - API层错误类型
// ==========================================
// 职责: 为各层错误附加输入文件路径（每个致命错误需可定位到文件）
// ==========================================

use crate::config::ConfigError;
use crate::engine::EngineError;
use crate::importer::ImportError;
use crate::report::ReportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置加载失败: {0}")]
    Config(#[from] ConfigError),

    #[error("输入文件发现失败: {0}")]
    Discovery(#[source] ImportError),

    #[error("文件导入失败 [{file}]: {source}")]
    Import { file: String, source: ImportError },

    #[error("订单汇总失败 [{file}]: {source}")]
    Engine { file: String, source: EngineError },

    #[error("报表生成失败 [{file}]: {source}")]
    Report { file: String, source: ReportError },
}

impl ApiError {
    /// 出错的输入文件（文件级错误才有）
    pub fn file(&self) -> Option<&str> {
        match self {
            ApiError::Import { file, .. }
            | ApiError::Engine { file, .. }
            | ApiError::Report { file, .. } => Some(file),
            ApiError::Config(_) | ApiError::Discovery(_) => None,
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
