//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `encrypt`: 预览、确认并批量加密
//! - `preview`: 只渲染预览表格，不写任何文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: encrypt, preview

pub mod encrypt;
pub mod preview;

use clap::{ArgAction, Parser, Subcommand};

/// pdfseal - 用电子表格中的密码批量加密 PDF
#[derive(Parser)]
#[command(name = "pdfseal")]
#[command(version)]
#[command(
    about = "Batch-encrypt PDF files with per-file passwords from a spreadsheet",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase diagnostic output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// 根据 `-v` 次数得到默认日志级别
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Preview, confirm and encrypt PDF files using passwords from a table
    Encrypt(encrypt::EncryptArgs),

    /// Show which password each PDF would get, without writing anything
    Preview(preview::PreviewArgs),
}
