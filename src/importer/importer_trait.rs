// ==========================================
// 订单利润分析 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::order::RawOrderRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

/// 原始行记录（列名 → 单元格文本）
pub type RawRow = HashMap<String, String>;

/// 带源行号的数据行
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    /// 数据行号（从 1 开始，不含表头，跳过的空行也计数）
    pub row_number: usize,
    pub values: RawRow,
}

/// 解析后的工作表
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSheet {
    /// 表头（已 trim），即使没有数据行也保留
    pub headers: Vec<String>,
    /// 数据行，按文件顺序，空行已剔除
    pub rows: Vec<SheetRow>,
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 1）
// 实现者: SpreadsheetMlParser, ExcelParser, UniversalFileParser
pub trait FileParser: Send + Sync {
    /// 解析文件为表头 + 数据行
    ///
    /// # 返回
    /// - Ok(ParsedSheet): 表头与数据行（行号保留源文件位置）
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedSheet>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 2）
// 实现者: importer::field_mapper::FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 检查表头是否包含全部必需列
    ///
    /// # 返回
    /// - Err(SchemaError): 第一个缺失的必需列
    fn check_headers(&self, headers: &[String]) -> ImportResult<()>;

    /// 将原始行记录映射为 RawOrderRecord
    ///
    /// # 参数
    /// - row: 原始行记录
    /// - row_number: 数据行号（用于错误定位）
    ///
    /// # 返回
    /// - Err(SchemaError): 缺少必需列
    /// - Err(TypeConversionError): 实收金额/配送费无法解析为数值
    fn map_to_raw_order(&self, row: &RawRow, row_number: usize) -> ImportResult<RawOrderRecord>;
}
