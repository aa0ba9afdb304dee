//! # 工具函数模块
//!
//! 提供美化输出、进度条和预览表格渲染。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `ui/` 模块使用
//! - 子模块: output, progress, table

pub mod output;
pub mod progress;
pub mod table;
