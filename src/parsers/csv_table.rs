//! # CSV 密码表读取
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 调用
//! - 使用 `csv` crate

use super::{locate_columns, source_name};
use crate::error::{PdfSealError, Result};
use crate::models::PasswordTable;
use std::path::Path;

/// 读取 CSV 密码表（首行为表头，值按原样保留）
pub fn load_csv_table(path: &Path) -> Result<PasswordTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let header_cells: Vec<&str> = headers.iter().collect();
    let (file_col, pwd_col) =
        locate_columns(&header_cells).ok_or_else(|| PdfSealError::MissingColumns {
            path: path.display().to_string(),
        })?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let filename = record.get(file_col).unwrap_or("").to_string();
        let password = record.get(pwd_col).unwrap_or("").to_string();
        rows.push((filename, password));
    }

    Ok(PasswordTable::from_rows(source_name(path), rows))
}
