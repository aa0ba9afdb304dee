//! # 界面模块
//!
//! 工作流的终端前端。
//!
//! ## 依赖关系
//! - 被 `commands/encrypt.rs` 使用
//! - 子模块: terminal

pub mod terminal;

pub use terminal::TerminalInteraction;
