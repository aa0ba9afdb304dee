//! # 批量加密工作流
//!
//! 顺序状态机：选择密码表 → 加载 → 选择 PDF → 选择输出目录 →
//! 解析密码 → 预览并确认 → 批量加密 → 写密码清单 → 展示汇总。
//!
//! 每个阶段都是硬停止点：前置条件不满足时整个运行中止。
//! 用户在选择阶段放弃时返回 `RunOutcome::Cancelled`，
//! 读写失败等硬错误以 `Err` 返回。只有确认阶段之后才会产生副作用。
//!
//! 界面通过 `Interaction` trait 接入，所有调用都是阻塞的请求/响应。
//!
//! ## 依赖关系
//! - 被 `commands/encrypt.rs` 调用
//! - 使用 `parsers/`, `utils/table.rs`, `batch/runner.rs`, `pdf/`

use super::runner::{BatchResult, BatchRunner};
use crate::error::{PdfSealError, Result};
use crate::models::{FileEntry, OutputPolicy, PasswordTable, ResolvedPair, RunResult};
use crate::parsers;
use crate::pdf::Encryptor;
use crate::utils::table::{render_preview_table, PreviewRow};

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// 密码清单文件名（写在输出目录中）
pub const RUN_LOG_FILENAME: &str = "password_list.txt";

/// 工作流阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SelectPasswordTable,
    LoadPasswordTable,
    SelectInputFiles,
    SelectOutputTarget,
    ResolvePairs,
    PresentPreviewAndConfirm,
    ExecuteBatch,
    PersistLog,
    PresentSummary,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SelectPasswordTable => "select password table",
            Stage::LoadPasswordTable => "load password table",
            Stage::SelectInputFiles => "select input files",
            Stage::SelectOutputTarget => "select output folder",
            Stage::ResolvePairs => "resolve passwords",
            Stage::PresentPreviewAndConfirm => "preview and confirm",
            Stage::ExecuteBatch => "encrypt files",
            Stage::PersistLog => "write password list",
            Stage::PresentSummary => "present summary",
        };
        write!(f, "{}", name)
    }
}

/// 用户放弃运行的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    NoPasswordTable,
    NoInputFiles,
    NoOutputDir,
    Declined,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CancelReason::NoPasswordTable => write!(f, "No password table selected."),
            CancelReason::NoInputFiles => write!(f, "No PDF files selected."),
            CancelReason::NoOutputDir => write!(f, "No output folder selected."),
            CancelReason::Declined => write!(f, "Encryption cancelled."),
        }
    }
}

/// 确认阶段展示给用户的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub output_dir: Option<PathBuf>,
    /// 密码表来源文件名
    pub table_name: String,
    pub file_count: usize,
    /// 渲染好的固定宽度表格
    pub table: String,
}

impl Preview {
    /// 运行元信息（输出目录、密码表、文件数）
    pub fn header_text(&self) -> String {
        let output = self
            .output_dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_else(|| "(not selected)".to_string());
        format!(
            "Output folder: {}\nPassword table: {}\nTotal selected PDF: {}\n",
            output, self.table_name, self.file_count
        )
    }
}

impl fmt::Display for Preview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.header_text(), self.table)
    }
}

/// 确认阶段的用户答复
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub confirmed: bool,
    pub policy: OutputPolicy,
}

/// 一次完整运行的汇总
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_dir: PathBuf,
    pub log_path: PathBuf,
    pub policy: OutputPolicy,
    pub batch: BatchResult,
}

/// 工作流的终止状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(RunSummary),
    Cancelled(CancelReason),
}

/// 界面协作方
pub trait Interaction {
    /// 选择密码表；`None` 表示用户放弃
    fn select_password_table(&mut self) -> Result<Option<PathBuf>>;

    /// 选择待加密的 PDF；空列表表示用户放弃
    fn select_input_files(&mut self) -> Result<Vec<PathBuf>>;

    /// 选择输出目录；`None` 表示用户放弃
    fn select_output_dir(&mut self) -> Result<Option<PathBuf>>;

    /// 展示预览并阻塞等待确认及输出选项
    fn confirm(&mut self, preview: &Preview, defaults: OutputPolicy) -> Result<Confirmation>;

    /// 每处理完一个文件调用一次，仅用于展示
    fn on_progress(&mut self, current: usize, total: usize, result: &RunResult);

    /// 展示最终汇总
    fn present_summary(&mut self, summary: &RunSummary);
}

/// 为每个选中文件解析密码（顺序与选择顺序一致）
pub fn resolve_pairs(table: &PasswordTable, files: &[PathBuf]) -> Vec<ResolvedPair> {
    files
        .iter()
        .map(|path| {
            let entry = FileEntry::new(path);
            let resolution = table.resolve(&entry.name);
            ResolvedPair { entry, resolution }
        })
        .collect()
}

/// 构建预览（元信息 + 固定宽度表格）
pub fn build_preview(
    output_dir: Option<&Path>,
    table: &PasswordTable,
    pairs: &[ResolvedPair],
) -> Preview {
    let rows: Vec<PreviewRow> = pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| PreviewRow {
            index: i + 1,
            filename: pair.entry.name.clone(),
            password: pair.resolution.to_string(),
        })
        .collect();

    Preview {
        output_dir: output_dir.map(Path::to_path_buf),
        table_name: table.source_name().to_string(),
        file_count: pairs.len(),
        table: render_preview_table(&rows),
    }
}

/// 把密码清单写到输出目录
pub fn write_run_log(output_dir: &Path, batch: &BatchResult) -> Result<PathBuf> {
    let log_path = output_dir.join(RUN_LOG_FILENAME);
    fs::write(&log_path, batch.log_text()).map_err(|e| PdfSealError::FileWriteError {
        path: log_path.display().to_string(),
        source: e,
    })?;
    Ok(log_path)
}

/// 批量加密工作流
pub struct BatchWorkflow<'a, I: Interaction, E: Encryptor> {
    interaction: &'a mut I,
    encryptor: &'a E,
    /// 电子表格中要读取的工作表（默认第一个）
    sheet: Option<String>,
    /// 确认阶段展示的默认输出选项
    defaults: OutputPolicy,
}

impl<'a, I: Interaction, E: Encryptor> BatchWorkflow<'a, I, E> {
    pub fn new(interaction: &'a mut I, encryptor: &'a E) -> Self {
        Self {
            interaction,
            encryptor,
            sheet: None,
            defaults: OutputPolicy::default(),
        }
    }

    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn with_defaults(mut self, defaults: OutputPolicy) -> Self {
        self.defaults = defaults;
        self
    }

    /// 从头到尾执行一次运行
    pub fn run(&mut self) -> Result<RunOutcome> {
        enter(Stage::SelectPasswordTable);
        let Some(table_path) = self.interaction.select_password_table()? else {
            return Ok(RunOutcome::Cancelled(CancelReason::NoPasswordTable));
        };

        enter(Stage::LoadPasswordTable);
        let table = parsers::load_password_table(&table_path, self.sheet.as_deref())?;

        enter(Stage::SelectInputFiles);
        let files = self.interaction.select_input_files()?;
        if files.is_empty() {
            return Ok(RunOutcome::Cancelled(CancelReason::NoInputFiles));
        }

        enter(Stage::SelectOutputTarget);
        let Some(output_dir) = self.interaction.select_output_dir()? else {
            return Ok(RunOutcome::Cancelled(CancelReason::NoOutputDir));
        };

        enter(Stage::ResolvePairs);
        let pairs = resolve_pairs(&table, &files);

        enter(Stage::PresentPreviewAndConfirm);
        let preview = build_preview(Some(&output_dir), &table, &pairs);
        let confirmation = self.interaction.confirm(&preview, self.defaults)?;
        if !confirmation.confirmed {
            return Ok(RunOutcome::Cancelled(CancelReason::Declined));
        }

        enter(Stage::ExecuteBatch);
        fs::create_dir_all(&output_dir).map_err(|e| PdfSealError::FileWriteError {
            path: output_dir.display().to_string(),
            source: e,
        })?;
        let runner = BatchRunner::new(self.encryptor, &output_dir, confirmation.policy);
        let interaction = &mut *self.interaction;
        let batch = runner.run(&pairs, |current, total, result| {
            interaction.on_progress(current, total, result)
        });
        debug_assert_eq!(batch.total(), pairs.len());

        enter(Stage::PersistLog);
        let log_path = write_run_log(&output_dir, &batch)?;

        enter(Stage::PresentSummary);
        let summary = RunSummary {
            output_dir,
            log_path,
            policy: confirmation.policy,
            batch,
        };
        self.interaction.present_summary(&summary);

        Ok(RunOutcome::Completed(summary))
    }
}

fn enter(stage: Stage) {
    log::debug!("Workflow stage: {}", stage);
}
