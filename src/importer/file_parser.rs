// ==========================================
// 订单利润分析 - 文件解析器实现
// ==========================================
// 支持:
// - SpreadsheetML 2003 (Workbook/Worksheet/Table/Row/Cell/Data)
//   商家后台导出的 .xls 实为此 XML 格式
// - Excel 二进制/OOXML (.xls/.xlsx)，经 calamine 读取
// 口径: 无文本的单元格取 "0"；只读第一个工作表
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{FileParser, ParsedSheet, RawRow, SheetRow};
use calamine::{open_workbook_auto, Data, Reader};
use quick_xml::events::{BytesStart, Event};
use std::fs;
use std::path::Path;
use tracing::debug;

/// 缺失单元格的取值
const MISSING_CELL: &str = "0";

const UTF8_BOM: char = '\u{feff}';

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.is_file() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

/// 表格 → 表头 + 数据行
///
/// 第一行为表头；数据行不足表头宽度时以 "0" 补齐。
/// 无单元格或全部为空白的行跳过，但仍占用行号
fn rows_to_records(table: Vec<Vec<String>>) -> ImportResult<ParsedSheet> {
    let mut rows = table.into_iter();
    let headers: Vec<String> = rows
        .next()
        .ok_or(ImportError::EmptySheet)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (idx, mut data_row) in rows.enumerate() {
        if data_row.is_empty() || data_row.iter().all(|v| v.trim().is_empty()) {
            continue;
        }
        if data_row.len() < headers.len() {
            data_row.resize(headers.len(), MISSING_CELL.to_string());
        }

        let values: RawRow = headers
            .iter()
            .zip(data_row)
            .map(|(header, value)| (header.clone(), value.trim().to_string()))
            .collect();
        records.push(SheetRow {
            row_number: idx + 1,
            values,
        });
    }

    Ok(ParsedSheet {
        headers,
        rows: records,
    })
}

// ==========================================
// SpreadsheetML Parser 实现
// ==========================================
pub struct SpreadsheetMlParser;

impl SpreadsheetMlParser {
    /// 解析 XML 文本
    pub fn parse_str(&self, xml: &str) -> ImportResult<ParsedSheet> {
        let table = read_first_table(xml.trim_start_matches(UTF8_BOM))?;
        debug!(rows = table.len(), "SpreadsheetML 表格读取完成");
        rows_to_records(table)
    }
}

impl FileParser for SpreadsheetMlParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;
        let xml = fs::read_to_string(file_path)?;
        self.parse_str(&xml)
    }
}

/// 读取 Cell 的 ss:Index（从 1 开始的列号）
fn cell_index(start: &BytesStart<'_>) -> ImportResult<Option<usize>> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| ImportError::XmlParseError(e.to_string()))?;
        if attr.key.local_name().as_ref() == b"Index" {
            let value = attr.unescape_value()?;
            return value
                .trim()
                .parse::<usize>()
                .map(Some)
                .map_err(|_| ImportError::XmlParseError(format!("非法的 ss:Index: {}", value)));
        }
    }
    Ok(None)
}

/// 按 ss:Index 跳列，被跳过的列补 "0"
fn pad_to_index(row: &mut Vec<String>, index: Option<usize>) {
    if let Some(index) = index {
        let target = index.saturating_sub(1);
        if row.len() < target {
            row.resize(target, MISSING_CELL.to_string());
        }
    }
}

/// 读取第一个 Worksheet 的所有行
fn read_first_table(xml: &str) -> ImportResult<Vec<Vec<String>>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut table: Vec<Vec<String>> = Vec::new();
    let mut in_worksheet = false;
    let mut current_row: Option<Vec<String>> = None;
    // Some(None): 进入 Cell 但尚无文本
    let mut current_cell: Option<Option<String>> = None;
    let mut in_data = false;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                return Err(ImportError::XmlParseError(format!(
                    "位置 {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
        };

        match event {
            Event::Start(start) => match start.local_name().as_ref() {
                b"Worksheet" => in_worksheet = true,
                b"Row" if in_worksheet => current_row = Some(Vec::new()),
                b"Cell" => {
                    if let Some(row) = current_row.as_mut() {
                        pad_to_index(row, cell_index(&start)?);
                        current_cell = Some(None);
                    }
                }
                b"Data" if current_cell.is_some() => in_data = true,
                _ => {}
            },
            Event::Empty(start) => match start.local_name().as_ref() {
                b"Row" if in_worksheet => table.push(Vec::new()),
                b"Cell" => {
                    if let Some(row) = current_row.as_mut() {
                        pad_to_index(row, cell_index(&start)?);
                        row.push(MISSING_CELL.to_string());
                    }
                }
                _ => {}
            },
            Event::Text(text) if in_data => {
                let text = text.unescape()?;
                if let Some(cell) = current_cell.as_mut() {
                    cell.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::CData(data) if in_data => {
                let text = String::from_utf8_lossy(&data.into_inner()).into_owned();
                if let Some(cell) = current_cell.as_mut() {
                    cell.get_or_insert_with(String::new).push_str(&text);
                }
            }
            Event::End(end) => match end.local_name().as_ref() {
                b"Data" => in_data = false,
                b"Cell" => {
                    if let (Some(row), Some(cell)) = (current_row.as_mut(), current_cell.take()) {
                        row.push(cell.unwrap_or_else(|| MISSING_CELL.to_string()));
                    }
                }
                b"Row" => {
                    if let Some(row) = current_row.take() {
                        table.push(row);
                    }
                }
                b"Worksheet" if in_worksheet => break,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    if !in_worksheet {
        return Err(ImportError::XmlParseError(
            "未找到 Worksheet 元素".to_string(),
        ));
    }

    Ok(table)
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook.worksheet_range(&sheet_name)?;

        // 整行为空的行置为空行（保留行号），避免被 "0" 补齐成订单
        let table: Vec<Vec<String>> = range
            .rows()
            .map(|row| -> Vec<String> {
                if row.iter().all(|cell| matches!(cell, Data::Empty)) {
                    return Vec::new();
                }
                row.iter()
                    .map(|cell| match cell {
                        Data::Empty => MISSING_CELL.to_string(),
                        other => other.to_string(),
                    })
                    .collect()
            })
            .collect();
        debug!(sheet = %sheet_name, rows = table.len(), "Excel 工作表读取完成");

        rows_to_records(table)
    }
}

// ==========================================
// 通用文件解析器（按文件内容自动选择）
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// 文件内容是否为 XML 文本
    fn looks_like_xml(bytes: &[u8]) -> bool {
        let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
        bytes
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|b| *b == b'<')
    }
}

impl FileParser for UniversalFileParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ImportResult<ParsedSheet> {
        ensure_exists(file_path)?;

        let bytes = fs::read(file_path)?;
        if Self::looks_like_xml(&bytes) {
            debug!(file = %file_path.display(), "按 SpreadsheetML 解析");
            let xml = String::from_utf8(bytes).map_err(|e| {
                ImportError::FileReadError(format!("{}: 非 UTF-8 编码 ({})", file_path.display(), e))
            })?;
            return SpreadsheetMlParser.parse_str(&xml);
        }

        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "xls" | "xlsx" | "xlsm" | "xlsb" | "ods" => {
                debug!(file = %file_path.display(), "按 Excel 工作簿解析");
                ExcelParser.parse_to_raw_records(file_path)
            }
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
