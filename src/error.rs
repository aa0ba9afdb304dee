//! # 统一错误处理模块
//!
//! 定义 pdfseal 的所有错误类型，使用 `thiserror` 派生。
//!
//! 单个 PDF 的加密失败不在这里：它们由 `pdf::EncryptError` 表示，
//! 并在批处理中被记录为该文件的结果，不会中断整个运行。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// pdfseal 统一错误类型
#[derive(Error, Debug)]
pub enum PdfSealError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 密码表错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read spreadsheet: {path}\nReason: {reason}")]
    SpreadsheetError { path: String, reason: String },

    #[error("Password table must contain 'filename' and 'password' columns: {path}")]
    MissingColumns { path: String },

    #[error("Unsupported password table format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 交互错误
    // ─────────────────────────────────────────────────────────────
    #[error("Prompt failed: {0}")]
    PromptError(#[from] dialoguer::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PdfSealError>;
