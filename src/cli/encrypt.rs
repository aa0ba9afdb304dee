//! # encrypt 子命令 CLI 定义
//!
//! 未给出的路径参数在终端中会交互式询问。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/encrypt.rs`

use crate::batch::collector::DEFAULT_PATTERN;
use crate::models::OutputPolicy;

use clap::Args;
use std::path::PathBuf;

/// encrypt 子命令参数
#[derive(Args, Debug)]
pub struct EncryptArgs {
    /// PDF files, folders or glob patterns to encrypt (prompted if omitted)
    pub files: Vec<PathBuf>,

    /// Password table (.xlsx/.xls/.xlsb/.ods/.csv) with 'filename' and 'password' columns
    #[arg(short, long, env = "PDFSEAL_PASSWORDS")]
    pub passwords: Option<PathBuf>,

    /// Worksheet to read from a spreadsheet (defaults to the first sheet)
    #[arg(long)]
    pub sheet: Option<String>,

    /// Output folder for encrypted files and password_list.txt
    #[arg(short, long, env = "PDFSEAL_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Keep original file names in the output folder
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Do not append "_encrypted" to output file names
    #[arg(long, default_value_t = false)]
    pub no_suffix: bool,

    // ─────────────────────────────────────────────────────────────
    // Input selection
    // ─────────────────────────────────────────────────────────────
    /// Recurse into subdirectories of folder inputs
    #[arg(short, long, default_value_t = false)]
    pub recursive: bool,

    /// File name pattern used inside folder inputs
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub pattern: String,

    // ─────────────────────────────────────────────────────────────
    // Execution control
    // ─────────────────────────────────────────────────────────────
    /// Skip the confirmation prompt and use the options given on the command line
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}

impl EncryptArgs {
    /// 命令行给出的输出选项（确认阶段的默认值）
    pub fn output_policy(&self) -> OutputPolicy {
        OutputPolicy {
            overwrite_originals: self.overwrite,
            append_suffix: !self.no_suffix,
        }
    }
}
