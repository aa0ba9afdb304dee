//! # pdfseal - 用电子表格中的密码批量加密 PDF
//!
//! 从密码表（filename / password 两列）为每个选中的 PDF 查找密码，
//! 预览并确认后逐个加密，最后在输出目录写出 `password_list.txt`。
//!
//! ## 子命令
//! - `encrypt` - 预览、确认并批量加密
//! - `preview` - 只显示匹配结果，不写文件
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集、工作流、批量执行)
//!   │     ├── parsers/   (密码表读取)
//!   │     ├── pdf/       (加密后端)
//!   │     ├── ui/        (终端交互)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (输出、进度条、预览表格)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod pdf;
mod ui;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
