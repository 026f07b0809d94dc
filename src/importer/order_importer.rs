// ==========================================
// 订单利润分析 - 订单导入器
// ==========================================
// 流程: 解析 → 表头校验 → 字段映射
// 口径: 任一行映射失败即中止该文件（不做行级恢复）
// ==========================================

use crate::domain::order::RawOrderRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::importer_trait::{FieldMapper, FileParser};
use std::path::Path;
use tracing::{debug, error, info, instrument};

pub struct OrderImporter {
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapper>,
}

impl OrderImporter {
    pub fn new(file_parser: Box<dyn FileParser>, field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser,
            field_mapper,
        }
    }

    /// 从文件导入原始订单
    #[instrument(skip(self, file_path), fields(file = %file_path.display()))]
    pub fn import_from_file(&self, file_path: &Path) -> ImportResult<Vec<RawOrderRecord>> {
        // === 步骤 1: 解析文件 ===
        debug!("步骤 1: 解析文件");
        let sheet = self
            .file_parser
            .parse_to_raw_records(file_path)
            .inspect_err(|e| error!(error = %e, "文件解析失败"))?;
        info!(total_rows = sheet.rows.len(), "文件解析完成");

        // === 步骤 2: 表头校验（无数据行时同样校验） ===
        self.field_mapper
            .check_headers(&sheet.headers)
            .inspect_err(|e| error!(error = %e, "表头校验失败"))?;

        // === 步骤 3: 字段映射 ===
        debug!("步骤 3: 字段映射");
        let records = sheet
            .rows
            .iter()
            .map(|row| self.field_mapper.map_to_raw_order(&row.values, row.row_number))
            .collect::<ImportResult<Vec<_>>>()
            .inspect_err(|e| error!(error = %e, "字段映射失败"))?;
        info!(count = records.len(), "字段映射完成");

        Ok(records)
    }
}

impl Default for OrderImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), Box::new(FieldMapperImpl))
    }
}
