//! # 批处理运行数据模型
//!
//! 选中文件、解析后的文件/密码对、输出命名策略和单文件结果。
//!
//! ## 依赖关系
//! - 使用 `models/password.rs` 的 `Resolution`
//! - 被 `batch/` 和 `ui/` 使用

use super::password::{Resolution, NOT_FOUND};

use std::fmt;
use std::path::{Path, PathBuf};

/// 不覆盖原文件名时追加的后缀
pub const ENCRYPTED_SUFFIX: &str = "_encrypted";

/// 选中的输入文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// 输入路径
    pub path: PathBuf,
    /// 基础文件名（不含目录，保留扩展名）
    pub name: String,
}

impl FileEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, name }
    }

    /// 拆分为 (主名, 扩展名)，扩展名包含前导点；无扩展名时为空串
    pub fn split_name(&self) -> (&str, &str) {
        match Path::new(&self.name).extension() {
            Some(ext) => {
                let cut = self.name.len() - ext.len() - 1;
                self.name.split_at(cut)
            }
            None => (self.name.as_str(), ""),
        }
    }
}

/// 文件与其解析出的密码（预览和执行共用同一份）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPair {
    pub entry: FileEntry,
    pub resolution: Resolution,
}

/// 输出命名策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputPolicy {
    /// 在输出目录中使用原文件名
    pub overwrite_originals: bool,
    /// 不使用原文件名时追加 `_encrypted` 后缀
    pub append_suffix: bool,
}

impl Default for OutputPolicy {
    fn default() -> Self {
        Self {
            overwrite_originals: false,
            append_suffix: true,
        }
    }
}

impl OutputPolicy {
    /// 计算输出路径（纯函数，同样的输入总是同样的路径）
    pub fn output_path(&self, output_dir: &Path, entry: &FileEntry) -> PathBuf {
        if self.overwrite_originals {
            return output_dir.join(&entry.name);
        }

        let (stem, ext) = entry.split_name();
        if self.append_suffix {
            output_dir.join(format!("{}{}{}", stem, ENCRYPTED_SUFFIX, ext))
        } else {
            output_dir.join(format!("{}{}", stem, ext))
        }
    }
}

/// 单个文件的处理结果标签
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Encrypted,
    SkippedNoPassword,
    Error(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Encrypted => write!(f, "encrypted"),
            Outcome::SkippedNoPassword => write!(f, "skipped"),
            Outcome::Error(_) => write!(f, "error"),
        }
    }
}

/// 单个文件的完整处理记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub entry: FileEntry,
    /// 按策略计算出的输出路径
    pub output_path: PathBuf,
    pub resolution: Resolution,
    pub outcome: Outcome,
}

impl RunResult {
    /// 密码清单中的一行（制表符分隔）
    pub fn log_line(&self) -> String {
        match &self.outcome {
            Outcome::Encrypted => {
                let out_name = self
                    .output_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| self.entry.name.clone());
                format!("{}\t{}", out_name, self.resolution)
            }
            Outcome::SkippedNoPassword => format!("{}\t{}", self.entry.name, NOT_FOUND),
            Outcome::Error(msg) => format!("{}\tERROR: {}", self.entry.name, msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(overwrite: bool, suffix: bool) -> OutputPolicy {
        OutputPolicy {
            overwrite_originals: overwrite,
            append_suffix: suffix,
        }
    }

    #[test]
    fn test_file_entry_base_name() {
        let entry = FileEntry::new("/data/in/report.pdf");
        assert_eq!(entry.name, "report.pdf");
        assert_eq!(entry.split_name(), ("report", ".pdf"));
    }

    #[test]
    fn test_split_name_edge_cases() {
        assert_eq!(FileEntry::new("a.tar.gz").split_name(), ("a.tar", ".gz"));
        assert_eq!(FileEntry::new("README").split_name(), ("README", ""));
        assert_eq!(FileEntry::new(".hidden").split_name(), (".hidden", ""));
        assert_eq!(FileEntry::new("résumé.pdf").split_name(), ("résumé", ".pdf"));
    }

    #[test]
    fn test_output_path_overwrite() {
        let entry = FileEntry::new("/src/a.pdf");
        let out = policy(true, true).output_path(Path::new("/out"), &entry);
        assert_eq!(out, PathBuf::from("/out/a.pdf"));
        // 覆盖模式下后缀选项不起作用
        let out = policy(true, false).output_path(Path::new("/out"), &entry);
        assert_eq!(out, PathBuf::from("/out/a.pdf"));
    }

    #[test]
    fn test_output_path_suffix() {
        let entry = FileEntry::new("/src/a.pdf");
        let out = policy(false, true).output_path(Path::new("/out"), &entry);
        assert_eq!(out, PathBuf::from("/out/a_encrypted.pdf"));
    }

    #[test]
    fn test_output_path_plain() {
        let entry = FileEntry::new("/src/a.pdf");
        let out = policy(false, false).output_path(Path::new("/out"), &entry);
        assert_eq!(out, PathBuf::from("/out/a.pdf"));
    }

    #[test]
    fn test_output_path_deterministic() {
        let entry = FileEntry::new("/src/Quarterly Report.PDF");
        let p = OutputPolicy::default();
        let first = p.output_path(Path::new("/out"), &entry);
        let second = p.output_path(Path::new("/out"), &entry);
        assert_eq!(first, second);
        assert_eq!(first, PathBuf::from("/out/Quarterly Report_encrypted.PDF"));
    }

    #[test]
    fn test_log_lines() {
        let entry = FileEntry::new("/src/a.pdf");
        let mut result = RunResult {
            entry: entry.clone(),
            output_path: PathBuf::from("/out/a_encrypted.pdf"),
            resolution: Resolution::Password("pw1".into()),
            outcome: Outcome::Encrypted,
        };
        assert_eq!(result.log_line(), "a_encrypted.pdf\tpw1");

        result.outcome = Outcome::Error("bad xref".into());
        assert_eq!(result.log_line(), "a.pdf\tERROR: bad xref");

        result.resolution = Resolution::NotFound;
        result.outcome = Outcome::SkippedNoPassword;
        assert_eq!(result.log_line(), "a.pdf\t(NOT FOUND)");
    }
}
