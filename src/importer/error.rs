// ==========================================
// 订单利润分析 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 行号均为数据行号（从 1 开始，不含表头）
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 SpreadsheetML .xls / Excel .xls/.xlsx）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("XML 表格解析失败: {0}")]
    XmlParseError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表无表头行")]
    EmptySheet,

    // ===== 数据映射错误 =====
    #[error("缺少必需列: {column}")]
    SchemaError { column: String },

    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析为数值: {value:?}")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

impl From<quick_xml::Error> for ImportError {
    fn from(err: quick_xml::Error) -> Self {
        ImportError::XmlParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
