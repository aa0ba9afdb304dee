//! # encrypt 命令实现
//!
//! 用终端交互驱动批量加密工作流。
//!
//! ## 依赖关系
//! - 使用 `cli/encrypt.rs` 定义的参数
//! - 使用 `batch/workflow.rs`, `ui/terminal.rs`, `pdf/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchWorkflow, FileCollector, RunOutcome};
use crate::cli::encrypt::EncryptArgs;
use crate::error::Result;
use crate::pdf::LopdfEncryptor;
use crate::ui::TerminalInteraction;
use crate::utils::output;

/// 执行 encrypt 命令
pub fn execute(args: EncryptArgs) -> Result<()> {
    output::print_header("Batch PDF Encryption");

    let defaults = args.output_policy();
    let collector = FileCollector::new()
        .with_pattern(&args.pattern)?
        .recursive(args.recursive);

    let mut interaction = TerminalInteraction::new(collector)
        .with_passwords(args.passwords)
        .with_inputs(args.files)
        .with_output(args.output)
        .assume_yes(args.yes);

    let encryptor = LopdfEncryptor;
    let outcome = BatchWorkflow::new(&mut interaction, &encryptor)
        .with_sheet(args.sheet)
        .with_defaults(defaults)
        .run()?;

    match outcome {
        RunOutcome::Completed(summary) => {
            log::info!(
                "Run finished: {} encrypted, {} skipped, {} errors",
                summary.batch.success_count,
                summary.batch.skipped_count,
                summary.batch.error_count
            );
        }
        RunOutcome::Cancelled(reason) => output::print_cancelled(&reason.to_string()),
    }

    Ok(())
}
