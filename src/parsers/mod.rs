//! # 解析器模块
//!
//! 读取密码表（电子表格或 CSV），构建 `PasswordTable`。
//!
//! 只读取两列：表头归一化（去空白、转小写）后名为 `filename` 和
//! `password` 的列，其他列忽略。首行为表头。
//!
//! ## 依赖关系
//! - 被 `batch/workflow.rs` 和 `commands/` 使用
//! - 使用 `models/password.rs`
//! - 子模块: csv_table, spreadsheet

pub mod csv_table;
pub mod spreadsheet;

use crate::error::{PdfSealError, Result};
use crate::models::PasswordTable;
use std::path::Path;

/// 文件名列的归一化表头
pub const FILENAME_COLUMN: &str = "filename";
/// 密码列的归一化表头
pub const PASSWORD_COLUMN: &str = "password";

/// 从文件路径推断格式并加载密码表
pub fn load_password_table(path: &Path, sheet: Option<&str>) -> Result<PasswordTable> {
    if !path.is_file() {
        return Err(PdfSealError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default();

    let table = match ext.as_str() {
        "csv" => csv_table::load_csv_table(path)?,
        "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => {
            spreadsheet::load_spreadsheet_table(path, sheet)?
        }
        _ => {
            return Err(PdfSealError::UnsupportedFormat(format!(
                "Cannot determine format for: {}",
                path.display()
            )))
        }
    };

    for rejected in table.rejected() {
        log::warn!("{}: ignoring {}", table.source_name(), rejected);
    }
    if table.is_empty() {
        log::warn!("{}: no usable password rows", table.source_name());
    }
    log::info!(
        "Loaded {} password entries from {}",
        table.len(),
        path.display()
    );

    Ok(table)
}

/// 在表头中定位 (filename, password) 两列的索引
pub fn locate_columns<S: AsRef<str>>(headers: &[S]) -> Option<(usize, usize)> {
    let normalized: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref().trim().to_lowercase())
        .collect();

    let filename = normalized.iter().position(|h| h == FILENAME_COLUMN)?;
    let password = normalized.iter().position(|h| h == PASSWORD_COLUMN)?;
    Some((filename, password))
}

/// 取路径的基础文件名，用作密码表来源名称
pub(crate) fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_locate_columns_normalizes_headers() {
        let headers = vec!["  Password ", "Notes", "FILENAME"];
        assert_eq!(locate_columns(&headers), Some((2, 0)));
    }

    #[test]
    fn test_locate_columns_missing() {
        assert_eq!(locate_columns(&["filename", "pass"]), None);
        assert_eq!(locate_columns(&["file name", "password"]), None);
        assert_eq!(locate_columns::<&str>(&[]), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "filename,password\n").unwrap();
        let err = load_password_table(&path, None).unwrap_err();
        assert!(matches!(err, PdfSealError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_password_table(&dir.path().join("nope.xlsx"), None).unwrap_err();
        assert!(matches!(err, PdfSealError::FileNotFound { .. }));
    }
}
