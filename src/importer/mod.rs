// ==========================================
// 订单利润分析 - 导入层
// ==========================================
// 职责: 源文件发现、解析、表头映射
// 支持: SpreadsheetML 2003 (.xls 导出), Excel (.xls/.xlsx)
// ==========================================

pub mod error;
pub mod field_mapper;
pub mod file_discovery;
pub mod file_parser;
pub mod importer_trait;
pub mod order_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_discovery::find_order_files;
pub use file_parser::{ExcelParser, SpreadsheetMlParser, UniversalFileParser};
pub use order_importer::OrderImporter;

// 重导出 Trait 接口
pub use importer_trait::{FieldMapper, FileParser, ParsedSheet, RawRow, SheetRow};
