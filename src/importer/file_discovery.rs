// ==========================================
// 订单利润分析 - 源文件发现
// ==========================================
// 规则: 只扫描目录第一层的普通文件，扩展名区分大小写
// 输出按路径排序，保证处理顺序稳定
// ==========================================

use crate::config::DiscoveryConfig;
use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// 查找目录下待分析的订单文件
///
/// # 参数
/// - dir: 扫描目录
/// - config: 扩展名列表（不含点）
pub fn find_order_files(dir: &Path, config: &DiscoveryConfig) -> ImportResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ImportError::FileNotFound(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matched = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| config.extensions.iter().any(|wanted| wanted == ext));
        if matched {
            files.push(path);
        }
    }
    files.sort();

    info!(dir = %dir.display(), count = files.len(), "目录下共有 {} 个待分析文件", files.len());
    for file in &files {
        info!(file = %file.display(), "待分析文件");
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_find_xls_files_only() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "订单数据0102-全部门店.xls");
        touch(dir.path(), "订单数据0101-全部门店.xls");
        touch(dir.path(), "订单数据0101分析.xlsx");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "upper.XLS");
        fs::create_dir(dir.path().join("nested.xls")).unwrap();

        let files = find_order_files(dir.path(), &DiscoveryConfig::default()).unwrap();

        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["订单数据0101-全部门店.xls", "订单数据0102-全部门店.xls"]
        );
    }

    #[test]
    fn test_custom_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.xml");
        touch(dir.path(), "b.xls");

        let config = DiscoveryConfig {
            extensions: vec!["xml".to_string()],
            ..DiscoveryConfig::default()
        };
        let files = find_order_files(dir.path(), &config).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.xml"));
    }

    #[test]
    fn test_missing_directory() {
        let result = find_order_files(Path::new("no/such/dir"), &DiscoveryConfig::default());
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }
}
