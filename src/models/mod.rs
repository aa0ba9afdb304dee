//! # 数据模型模块
//!
//! 定义密码表和批量加密运行过程中的数据模型。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `batch/` 和 `ui/` 使用
//! - 子模块: password, run

pub mod password;
pub mod run;

pub use password::PasswordTable;
pub use run::{FileEntry, Outcome, OutputPolicy, ResolvedPair, RunResult};
