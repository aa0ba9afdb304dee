//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `batch/`, `parsers/`, `pdf/`, `ui/`, `utils/`
//! - 子模块: encrypt, preview

pub mod encrypt;
pub mod preview;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Encrypt(args) => encrypt::execute(args),
        Commands::Preview(args) => preview::execute(args),
    }
}
