//! # 电子表格密码表读取
//!
//! 支持 .xlsx / .xlsm / .xlsb / .xls / .ods，默认读取第一个工作表。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 调用
//! - 使用 `calamine` crate

use super::{locate_columns, source_name};
use crate::error::{PdfSealError, Result};
use crate::models::PasswordTable;

use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// 读取电子表格密码表
pub fn load_spreadsheet_table(path: &Path, sheet: Option<&str>) -> Result<PasswordTable> {
    let spreadsheet_err = |reason: String| PdfSealError::SpreadsheetError {
        path: path.display().to_string(),
        reason,
    };

    let mut workbook = open_workbook_auto(path).map_err(|e| spreadsheet_err(e.to_string()))?;

    let sheet_name = match sheet {
        Some(name) => name.to_string(),
        None => workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| spreadsheet_err("No sheets found in workbook".to_string()))?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| spreadsheet_err(format!("sheet '{}': {}", sheet_name, e)))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| cells.iter().map(cell_to_string).collect())
        .unwrap_or_default();

    let (file_col, pwd_col) = locate_columns(&header).ok_or_else(|| PdfSealError::MissingColumns {
        path: path.display().to_string(),
    })?;

    let entries = rows.map(|cells| {
        let filename = cells.get(file_col).map(cell_to_string).unwrap_or_default();
        let password = cells.get(pwd_col).map(cell_to_string).unwrap_or_default();
        (filename, password)
    });

    log::debug!("Reading password table from sheet '{}'", sheet_name);
    Ok(PasswordTable::from_rows(source_name(path), entries.collect::<Vec<_>>()))
}

/// 单元格转字符串；整数值的浮点数不带小数部分
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => (if *b { "True" } else { "False" }).to_string(),
        other => other.to_string(),
    }
}
