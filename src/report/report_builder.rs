// ==========================================
// 订单利润分析 - 报表生成器
// ==========================================
// 输出 .xlsx 三张表:
// - 真实单: 9 列，按 OrderRecord 字段顺序
// - 刷单:   同上
// - 统计:   一行五列汇总
// ==========================================

use crate::domain::fields::{OrderField, SUMMARY_HEADERS};
use crate::domain::order::{OrderKind, OrderRecord};
use crate::domain::order_book::{OrderBook, OrderSummary};
use crate::report::error::ReportResult;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use tracing::{info, instrument};

/// 统计表 sheet 名
pub const SUMMARY_SHEET: &str = "统计";

const COLUMN_WIDTH: f64 = 16.0;

pub struct ReportBuilder {
    header_format: Format,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self {
            header_format: Format::new().set_bold(),
        }
    }

    /// 写出订单簿报表
    #[instrument(skip(self, book, output_path), fields(output = %output_path.display()))]
    pub fn build(&self, book: &OrderBook, output_path: &Path) -> ReportResult<()> {
        let mut workbook = Workbook::new();

        let sheet = workbook.add_worksheet();
        self.write_order_sheet(sheet, OrderKind::Genuine.label(), book.real_table())?;

        let sheet = workbook.add_worksheet();
        self.write_order_sheet(sheet, OrderKind::Promotional.label(), book.promoter_table())?;

        let sheet = workbook.add_worksheet();
        self.write_summary_sheet(sheet, &book.summary())?;

        workbook.save(output_path)?;
        info!(
            real_rows = book.real_table().len(),
            promoter_rows = book.promoter_table().len(),
            "报表已写出"
        );
        Ok(())
    }

    fn write_order_sheet(
        &self,
        sheet: &mut Worksheet,
        name: &str,
        records: &[OrderRecord],
    ) -> ReportResult<()> {
        sheet.set_name(name)?;

        for (col, field) in OrderField::ALL.iter().enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(0, col, field.header(), &self.header_format)?;
            sheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        for (idx, record) in records.iter().enumerate() {
            let row = (idx + 1) as u32;
            for (col, field) in OrderField::ALL.iter().enumerate() {
                let col = col as u16;
                if let Some(text) = record.text_value(*field) {
                    sheet.write_string(row, col, text)?;
                } else if let Some(value) = record.numeric_value(*field) {
                    sheet.write_number(row, col, value)?;
                }
            }
        }

        sheet.set_freeze_panes(1, 0)?;
        Ok(())
    }

    fn write_summary_sheet(&self, sheet: &mut Worksheet, summary: &OrderSummary) -> ReportResult<()> {
        sheet.set_name(SUMMARY_SHEET)?;

        for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
            let col = col as u16;
            sheet.write_string_with_format(0, col, *header, &self.header_format)?;
            sheet.set_column_width(col, COLUMN_WIDTH)?;
        }

        let values = [
            summary.real_orders as f64,
            summary.fake_orders as f64,
            summary.total_income,
            summary.average_income,
            summary.reback_income,
        ];
        for (col, value) in values.iter().enumerate() {
            sheet.write_number(1, col as u16, *value)?;
        }

        Ok(())
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new()
    }
}
