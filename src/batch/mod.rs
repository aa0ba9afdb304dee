//! # 批量处理模块
//!
//! 批量加密的完整流程。
//!
//! ## 功能
//! - 展开输入文件列表
//! - 顺序执行加密并统计结果
//! - 工作流状态机（选择、预览确认、执行、写清单、汇总）
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `parsers/`, `pdf/`, `utils/`
//! - 子模块: collector, runner, workflow

pub mod collector;
pub mod runner;
pub mod workflow;

pub use collector::FileCollector;
pub use workflow::{
    build_preview, resolve_pairs, BatchWorkflow, Confirmation, Interaction, Preview, RunOutcome,
    RunSummary,
};
