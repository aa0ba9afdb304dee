//! # 终端交互实现
//!
//! 用命令行参数 + `dialoguer` 提示实现 `Interaction`。
//!
//! ## 行为
//! - 参数已给出时直接使用，不提示
//! - 参数缺失且在终端中运行时提示输入，空回答视为放弃
//! - 非交互运行且未指定 `--yes` 时，确认阶段视为放弃
//! - 批处理期间显示 `indicatif` 进度条
//!
//! ## 依赖关系
//! - 被 `commands/encrypt.rs` 使用
//! - 实现 `batch/workflow.rs` 的 `Interaction`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{Confirmation, FileCollector, Interaction, Preview, RunSummary};
use crate::error::Result;
use crate::models::run::ENCRYPTED_SUFFIX;
use crate::models::{Outcome, OutputPolicy, RunResult};
use crate::utils::{output, progress};

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, MultiSelect};
use indicatif::ProgressBar;
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 汇总表中的一行
#[derive(Debug, Clone, Tabled)]
struct SummaryRow {
    #[tabled(rename = "No")]
    index: usize,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "File Name")]
    file: String,
    #[tabled(rename = "Output / Error")]
    detail: String,
}

/// 终端交互
pub struct TerminalInteraction {
    passwords: Option<PathBuf>,
    inputs: Vec<PathBuf>,
    output: Option<PathBuf>,
    collector: FileCollector,
    assume_yes: bool,
    interactive: bool,
    theme: ColorfulTheme,
    progress: Option<ProgressBar>,
}

impl TerminalInteraction {
    pub fn new(collector: FileCollector) -> Self {
        Self {
            passwords: None,
            inputs: Vec::new(),
            output: None,
            collector,
            assume_yes: false,
            interactive: Term::stderr().is_term(),
            theme: ColorfulTheme::default(),
            progress: None,
        }
    }

    pub fn with_passwords(mut self, passwords: Option<PathBuf>) -> Self {
        self.passwords = passwords;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PathBuf>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// 提示输入一个路径；空回答返回 `None`
    fn prompt_path(&self, prompt: &str) -> Result<Option<PathBuf>> {
        if !self.interactive {
            return Ok(None);
        }

        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        let answer = answer.trim();

        Ok((!answer.is_empty()).then(|| PathBuf::from(answer)))
    }

    fn ask_policy(&self, defaults: OutputPolicy) -> Result<OutputPolicy> {
        let suffix_label = format!(
            "Add \"{}\" to file names (applies only when not keeping original names)",
            ENCRYPTED_SUFFIX
        );
        let items = [
            "Keep original file names in the output folder".to_string(),
            suffix_label,
        ];

        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt("Output options (space to toggle, enter to accept)")
            .items(&items)
            .defaults(&[defaults.overwrite_originals, defaults.append_suffix])
            .interact()?;

        Ok(OutputPolicy {
            overwrite_originals: chosen.contains(&0),
            append_suffix: chosen.contains(&1),
        })
    }
}

impl Interaction for TerminalInteraction {
    fn select_password_table(&mut self) -> Result<Option<PathBuf>> {
        if let Some(path) = self.passwords.take() {
            return Ok(Some(path));
        }
        self.prompt_path(
            "Password table (.xlsx/.xls/.ods/.csv with 'filename' and 'password' columns)",
        )
    }

    fn select_input_files(&mut self) -> Result<Vec<PathBuf>> {
        let mut inputs = std::mem::take(&mut self.inputs);

        if inputs.is_empty() {
            let prompt = "PDF file, folder or pattern (empty to finish)";
            while let Some(path) = self.prompt_path(prompt)? {
                inputs.push(path);
            }
        }

        let files = self.collector.collect(&inputs)?;
        if !files.is_empty() {
            output::print_info(&format!("Selected {} PDF files", files.len()));
        }
        Ok(files)
    }

    fn select_output_dir(&mut self) -> Result<Option<PathBuf>> {
        if let Some(path) = self.output.take() {
            return Ok(Some(path));
        }
        self.prompt_path("Output folder")
    }

    fn confirm(&mut self, preview: &Preview, defaults: OutputPolicy) -> Result<Confirmation> {
        println!("\n{}", preview);

        if self.assume_yes {
            output::print_info("Proceeding without confirmation (--yes)");
            return Ok(Confirmation {
                confirmed: true,
                policy: defaults,
            });
        }

        if !self.interactive {
            output::print_warning(
                "Confirmation required; re-run with --yes to proceed non-interactively",
            );
            return Ok(Confirmation {
                confirmed: false,
                policy: defaults,
            });
        }

        let policy = self.ask_policy(defaults)?;
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt(format!("Encrypt {} file(s) now?", preview.file_count))
            .default(false)
            .interact()?;

        Ok(Confirmation { confirmed, policy })
    }

    fn on_progress(&mut self, current: usize, total: usize, result: &RunResult) {
        let pb = self
            .progress
            .get_or_insert_with(|| progress::create_progress_bar(total as u64, "Encrypting"));

        match &result.outcome {
            Outcome::Encrypted => {}
            Outcome::SkippedNoPassword => pb.suspend(|| {
                output::print_skip(&format!("{}: no password found", result.entry.name))
            }),
            Outcome::Error(msg) => pb.suspend(|| {
                output::print_warning(&format!("{}: {}", result.entry.name, msg))
            }),
        }

        pb.set_position(current as u64);
        if current == total {
            pb.finish_and_clear();
            self.progress = None;
        }
    }

    fn present_summary(&mut self, summary: &RunSummary) {
        output::print_header("Encryption complete!");

        let rows: Vec<SummaryRow> = summary
            .batch
            .results
            .iter()
            .enumerate()
            .map(|(i, r)| SummaryRow {
                index: i + 1,
                status: r.outcome.to_string(),
                file: r.entry.name.clone(),
                detail: match &r.outcome {
                    Outcome::Encrypted => r.output_path.display().to_string(),
                    Outcome::SkippedNoPassword => "-".to_string(),
                    Outcome::Error(msg) => msg.clone(),
                },
            })
            .collect();
        println!("{}", Table::new(rows));

        output::print_separator();
        output::print_success(&format!("Encrypted: {}", summary.batch.success_count));
        output::print_skip(&format!(
            "Skipped (no password): {}",
            summary.batch.skipped_count
        ));
        if summary.batch.error_count > 0 {
            output::print_error(&format!("Errors: {}", summary.batch.error_count));
        } else {
            output::print_info("Errors: 0");
        }
        output::print_done(&format!(
            "Saved password list to: {}",
            summary.log_path.display()
        ));
    }
}
