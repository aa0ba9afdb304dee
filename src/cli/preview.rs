//! # preview 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/preview.rs`

use crate::batch::collector::DEFAULT_PATTERN;

use clap::Args;
use std::path::PathBuf;

/// preview 子命令参数
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// PDF files, folders or glob patterns
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Password table (.xlsx/.xls/.xlsb/.ods/.csv) with 'filename' and 'password' columns
    #[arg(short, long, env = "PDFSEAL_PASSWORDS")]
    pub passwords: PathBuf,

    /// Worksheet to read from a spreadsheet (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output folder to show in the preview header
    #[arg(short, long, env = "PDFSEAL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Recurse into subdirectories of folder inputs
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// File name pattern used inside folder inputs
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,
}
