// ==========================================
// 订单利润分析 - 输出文件命名
// ==========================================
// 规则: 订单数据<任意>-全部门店<任意>.xls → 订单数据<任意>分析.xlsx
// 输出与输入位于同一目录
// ==========================================

use crate::report::error::{ReportError, ReportResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

const OUTPUT_SUFFIX: &str = "分析.xlsx";

// 输入文件名中的报表前缀
static OUTPUT_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new("(订单数据.*)-全部门店").expect("invalid output name pattern"));

/// 由输入文件路径推导报表路径
pub fn derive_output_name(input: &Path) -> ReportResult<PathBuf> {
    let file_name = input
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ReportError::NamingPattern(input.display().to_string()))?;

    let prefix = OUTPUT_NAME_PATTERN
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ReportError::NamingPattern(file_name.to_string()))?;

    let output_name = format!("{}{}", prefix, OUTPUT_SUFFIX);
    Ok(match input.parent() {
        Some(parent) => parent.join(output_name),
        None => PathBuf::from(output_name),
    })
}
