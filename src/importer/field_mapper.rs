// ==========================================
// 订单利润分析 - 字段映射器实现
// ==========================================
// 职责: 中文列名 → RawOrderRecord + 数值转换
// 口径:
// - 商家实收金额: 必须可解析为数值
// - 总配送费: 空字符串视为 0
// ==========================================

use crate::domain::fields::OrderField;
use crate::domain::order::{parse_postage_fee, RawOrderRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FieldMapper as FieldMapperTrait, RawRow};

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn check_headers(&self, headers: &[String]) -> ImportResult<()> {
        for field in OrderField::INPUT {
            if !headers.iter().any(|h| h == field.header()) {
                return Err(ImportError::SchemaError {
                    column: field.header().to_string(),
                });
            }
        }
        Ok(())
    }

    fn map_to_raw_order(&self, row: &RawRow, row_number: usize) -> ImportResult<RawOrderRecord> {
        let order_id = self.get_string(row, OrderField::OrderId)?;
        let order_time = self.get_string(row, OrderField::OrderTime)?;
        let order_source = self.get_string(row, OrderField::OrderSource)?;
        let real_income = self.parse_f64(row, OrderField::RealIncome, row_number)?;
        let postage_fee = self.parse_postage(row, row_number)?;

        Ok(RawOrderRecord::new(
            order_id,
            order_time,
            order_source,
            real_income,
            postage_fee,
        )
        .with_row_number(row_number))
    }
}

impl FieldMapper {
    /// 提取字段原文（已 trim）
    fn get_string(&self, row: &RawRow, field: OrderField) -> ImportResult<String> {
        row.get(field.header())
            .map(|v| v.trim().to_string())
            .ok_or_else(|| ImportError::SchemaError {
                column: field.header().to_string(),
            })
    }

    /// 解析浮点数
    fn parse_f64(&self, row: &RawRow, field: OrderField, row_number: usize) -> ImportResult<f64> {
        let value = self.get_string(row, field)?;
        value
            .parse::<f64>()
            .map_err(|_| ImportError::TypeConversionError {
                row: row_number,
                field: field.header().to_string(),
                value,
            })
    }

    /// 解析配送费（空 → 0）
    fn parse_postage(&self, row: &RawRow, row_number: usize) -> ImportResult<f64> {
        let field = OrderField::PostageFee;
        let value = self.get_string(row, field)?;
        parse_postage_fee(&value).ok_or_else(|| ImportError::TypeConversionError {
            row: row_number,
            field: field.header().to_string(),
            value,
        })
    }
}
