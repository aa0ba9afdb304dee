//! # 密码表数据模型
//!
//! 文件名 → 密码 的只读映射，以及按文件名查找密码的解析规则。
//!
//! ## 规则
//! - 精确匹配：区分大小写，不做路径或扩展名归一化
//! - 重复文件名：表中第一行优先（即使第一行因密码为空被忽略）
//! - 未找到时返回 `Resolution::NotFound`，渲染为保留哨兵 `(NOT FOUND)`
//!
//! ## 依赖关系
//! - 被 `parsers/csv_table.rs`, `parsers/spreadsheet.rs` 构建
//! - 被 `batch/workflow.rs`, `batch/runner.rs` 使用

use std::collections::{HashMap, HashSet};
use std::fmt;

/// 未找到密码时的保留哨兵文本
pub const NOT_FOUND: &str = "(NOT FOUND)";

/// 单个文件的密码解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 在密码表中找到的密码
    Password(String),
    /// 密码表中没有该文件名
    NotFound,
}

impl Resolution {
    /// 取出密码（未找到时为 `None`）
    pub fn password(&self) -> Option<&str> {
        match self {
            Resolution::Password(p) => Some(p.as_str()),
            Resolution::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Password(_))
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Password(p) => write!(f, "{}", p),
            Resolution::NotFound => write!(f, "{}", NOT_FOUND),
        }
    }
}

/// 加载期间被忽略的行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedRow {
    /// 文件名为空
    EmptyFilename { row: usize },
    /// 密码为空
    EmptyPassword { row: usize, filename: String },
    /// 密码与保留哨兵相同
    ReservedPassword { row: usize, filename: String },
    /// 文件名已在更早的行出现
    Duplicate { row: usize, filename: String },
}

impl fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectedRow::EmptyFilename { row } => write!(f, "row {}: empty filename", row),
            RejectedRow::EmptyPassword { row, filename } => {
                write!(f, "row {}: empty password for '{}'", row, filename)
            }
            RejectedRow::ReservedPassword { row, filename } => write!(
                f,
                "row {}: password for '{}' equals reserved marker {}",
                row, filename, NOT_FOUND
            ),
            RejectedRow::Duplicate { row, filename } => write!(
                f,
                "row {}: duplicate filename '{}' (earlier row wins)",
                row, filename
            ),
        }
    }
}

/// 文件名 → 密码 映射（加载后不可变）
#[derive(Debug, Clone, Default)]
pub struct PasswordTable {
    /// 来源表格的文件名（用于预览元信息）
    source_name: String,
    entries: HashMap<String, String>,
    rejected: Vec<RejectedRow>,
}

impl PasswordTable {
    /// 从 (文件名, 密码) 行构建映射，行号从 1 开始按数据行计数
    pub fn from_rows<I>(source_name: impl Into<String>, rows: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut entries = HashMap::new();
        let mut claimed = HashSet::new();
        let mut rejected = Vec::new();

        for (idx, (filename, password)) in rows.into_iter().enumerate() {
            let row = idx + 1;

            if filename.is_empty() {
                rejected.push(RejectedRow::EmptyFilename { row });
                continue;
            }
            if !claimed.insert(filename.clone()) {
                rejected.push(RejectedRow::Duplicate { row, filename });
                continue;
            }
            if password.is_empty() {
                rejected.push(RejectedRow::EmptyPassword { row, filename });
                continue;
            }
            if password == NOT_FOUND {
                rejected.push(RejectedRow::ReservedPassword { row, filename });
                continue;
            }
            entries.insert(filename, password);
        }

        Self {
            source_name: source_name.into(),
            entries,
            rejected,
        }
    }

    /// 按基础文件名查找密码
    pub fn resolve(&self, base_name: &str) -> Resolution {
        match self.entries.get(base_name) {
            Some(p) => Resolution::Password(p.clone()),
            None => Resolution::NotFound,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 加载时被忽略的行
    pub fn rejected(&self) -> &[RejectedRow] {
        &self.rejected
    }
}
