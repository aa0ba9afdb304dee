//! # 输入文件收集器
//!
//! 把命令行给出的输入展开为待加密的 PDF 文件列表。
//!
//! ## 功能
//! - 普通路径原样保留（即使不存在，由加密步骤报告错误）
//! - 目录展开为其中匹配模式的文件（按名称排序）
//! - 含通配符的输入按 glob 展开
//! - 保持输入顺序，去掉完全相同的重复路径
//!
//! ## 依赖关系
//! - 被 `ui/terminal.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 展开模式

use crate::error::{PdfSealError, Result};

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 默认的目录内文件模式
pub const DEFAULT_PATTERN: &str = "*.pdf";

/// 输入文件收集器
pub struct FileCollector {
    /// 目录内匹配模式（不区分大小写）
    pattern: String,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
            recursive: false,
        }
    }

    /// 设置目录内匹配模式
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self> {
        self.pattern = pattern.to_string();
        self.compile_pattern()?;
        Ok(self)
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 展开所有输入
    pub fn collect(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let pattern = self.compile_pattern()?;
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for input in inputs {
            for path in self.expand(input, &pattern)? {
                if seen.insert(path.clone()) {
                    files.push(path);
                } else {
                    log::debug!("Dropping duplicate input {}", path.display());
                }
            }
        }

        Ok(files)
    }

    fn expand(&self, input: &Path, pattern: &glob::Pattern) -> Result<Vec<PathBuf>> {
        if input.is_dir() {
            return Ok(self.walk_dir(input, pattern));
        }

        let text = input.to_string_lossy();
        if !input.exists() && text.contains(['*', '?', '[']) {
            let entries = glob::glob(&text).map_err(|e| {
                PdfSealError::InvalidArgument(format!("Invalid pattern '{}': {}", text, e))
            })?;
            let mut matched: Vec<PathBuf> = entries
                .filter_map(|e| e.ok())
                .filter(|p| p.is_file())
                .collect();
            matched.sort();
            if matched.is_empty() {
                log::warn!("No files matched pattern '{}'", text);
            }
            return Ok(matched);
        }

        Ok(vec![input.to_path_buf()])
    }

    fn walk_dir(&self, dir: &Path, pattern: &glob::Pattern) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|name| pattern.matches_with(name, Self::match_options()))
                    .unwrap_or(false)
            })
            .map(|e| e.path().to_path_buf())
            .collect();

        files.sort();
        files
    }

    fn compile_pattern(&self) -> Result<glob::Pattern> {
        glob::Pattern::new(&self.pattern).map_err(|e| {
            PdfSealError::InvalidArgument(format!("Invalid pattern '{}': {}", self.pattern, e))
        })
    }

    fn match_options() -> glob::MatchOptions {
        glob::MatchOptions {
            case_sensitive: false,
            require_literal_separator: false,
            require_literal_leading_dot: false,
        }
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}
