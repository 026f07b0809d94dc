// ==========================================
// 订单利润分析 - 报表层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("无法从文件名推导输出文件名 (需匹配 订单数据...-全部门店): {0}")]
    NamingPattern(String),

    #[error("报表写入失败: {0}")]
    WriteError(String),
}

impl From<rust_xlsxwriter::XlsxError> for ReportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::WriteError(err.to_string())
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
