//! # 批量执行器
//!
//! 按选择顺序逐个加密文件，并汇总结果。
//!
//! ## 功能
//! - 单线程顺序执行，每个文件只尝试一次
//! - 无密码的文件直接跳过，不调用加密后端
//! - 单个文件失败只记录，不中断批处理
//! - 每处理完一个文件回调一次进度
//!
//! ## 依赖关系
//! - 被 `batch/workflow.rs` 调用
//! - 使用 `pdf/encryptor.rs` 的 `Encryptor` trait

use crate::models::{Outcome, OutputPolicy, ResolvedPair, RunResult};
use crate::pdf::Encryptor;

use std::path::Path;

/// 密码清单的表头行
pub const RUN_LOG_HEADER: &str = "File Name\tPassword";

/// 批量处理结果统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchResult {
    /// 成功加密数量
    pub success_count: usize,
    /// 因无密码跳过的数量
    pub skipped_count: usize,
    /// 出错数量
    pub error_count: usize,
    /// 按选择顺序排列的单文件结果
    pub results: Vec<RunResult>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: RunResult) {
        match result.outcome {
            Outcome::Encrypted => self.success_count += 1,
            Outcome::SkippedNoPassword => self.skipped_count += 1,
            Outcome::Error(_) => self.error_count += 1,
        }
        self.results.push(result);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success_count + self.skipped_count + self.error_count
    }

    /// 渲染密码清单（制表符分隔，末行无换行）
    pub fn log_text(&self) -> String {
        let mut text = String::from(RUN_LOG_HEADER);
        text.push('\n');
        let lines: Vec<String> = self.results.iter().map(RunResult::log_line).collect();
        text.push_str(&lines.join("\n"));
        text
    }
}

/// 批量执行器
pub struct BatchRunner<'a, E: Encryptor> {
    encryptor: &'a E,
    output_dir: &'a Path,
    policy: OutputPolicy,
}

impl<'a, E: Encryptor> BatchRunner<'a, E> {
    /// 创建新的批量执行器
    pub fn new(encryptor: &'a E, output_dir: &'a Path, policy: OutputPolicy) -> Self {
        Self {
            encryptor,
            output_dir,
            policy,
        }
    }

    /// 顺序处理所有文件/密码对，每处理一个调用一次 `on_progress(当前序号, 总数, 结果)`
    pub fn run<F>(&self, pairs: &[ResolvedPair], mut on_progress: F) -> BatchResult
    where
        F: FnMut(usize, usize, &RunResult),
    {
        let total = pairs.len();
        let mut batch_result = BatchResult::default();

        for (i, pair) in pairs.iter().enumerate() {
            let result = self.process(pair);
            on_progress(i + 1, total, &result);
            batch_result.merge(result);
        }

        batch_result
    }

    fn process(&self, pair: &ResolvedPair) -> RunResult {
        let output_path = self.policy.output_path(self.output_dir, &pair.entry);

        let outcome = match pair.resolution.password() {
            None => Outcome::SkippedNoPassword,
            Some(password) => {
                match self
                    .encryptor
                    .encrypt(&pair.entry.path, &output_path, password)
                {
                    Ok(()) => Outcome::Encrypted,
                    Err(e) => {
                        log::warn!("{}: {}", pair.entry.path.display(), e);
                        Outcome::Error(e.to_string())
                    }
                }
            }
        };

        RunResult {
            entry: pair.entry.clone(),
            output_path,
            resolution: pair.resolution.clone(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::password::Resolution;
    use crate::models::FileEntry;
    use crate::pdf::encryptor::EncryptError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// 记录调用并对指定文件名返回失败的假后端
    #[derive(Default)]
    struct FakeEncryptor {
        fail_on: Option<String>,
        calls: RefCell<Vec<(PathBuf, PathBuf, String)>>,
    }

    impl Encryptor for FakeEncryptor {
        fn encrypt(&self, input: &Path, output: &Path, password: &str) -> Result<(), EncryptError> {
            self.calls.borrow_mut().push((
                input.to_path_buf(),
                output.to_path_buf(),
                password.to_string(),
            ));
            match &self.fail_on {
                Some(name) if input.ends_with(name) => {
                    Err(EncryptError::Open("unexpected end of file".to_string()))
                }
                _ => Ok(()),
            }
        }
    }

    fn pair(path: &str, pw: Option<&str>) -> ResolvedPair {
        ResolvedPair {
            entry: FileEntry::new(path),
            resolution: match pw {
                Some(p) => Resolution::Password(p.to_string()),
                None => Resolution::NotFound,
            },
        }
    }

    #[test]
    fn test_skipped_files_do_not_reach_backend() {
        let encryptor = FakeEncryptor::default();
        let runner = BatchRunner::new(&encryptor, Path::new("/out"), OutputPolicy::default());

        let result = runner.run(
            &[pair("/in/report.pdf", Some("abc123")), pair("/in/other.pdf", None)],
            |_, _, _| {},
        );

        assert_eq!(result.success_count, 1);
        assert_eq!(result.skipped_count, 1);
        assert_eq!(result.error_count, 0);
        let calls = encryptor.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, PathBuf::from("/out/report_encrypted.pdf"));
        assert_eq!(calls[0].2, "abc123");
    }

    #[test]
    fn test_failure_is_isolated() {
        let encryptor = FakeEncryptor {
            fail_on: Some("b.pdf".to_string()),
            ..Default::default()
        };
        let runner = BatchRunner::new(&encryptor, Path::new("/out"), OutputPolicy::default());
        let pairs = vec![
            pair("/in/a.pdf", Some("1")),
            pair("/in/b.pdf", Some("2")),
            pair("/in/c.pdf", Some("3")),
        ];

        let mut progress = Vec::new();
        let result = runner.run(&pairs, |cur, total, _| progress.push((cur, total)));

        assert_eq!(progress, vec![(1, 3), (2, 3), (3, 3)]);
        assert_eq!(result.success_count, 2);
        assert_eq!(result.error_count, 1);
        assert_eq!(result.total(), pairs.len());
        assert_eq!(
            result.results[1].outcome,
            Outcome::Error("failed to open PDF: unexpected end of file".to_string())
        );
        assert_eq!(encryptor.calls.borrow().len(), 3);
    }

    #[test]
    fn test_log_text_format() {
        let encryptor = FakeEncryptor {
            fail_on: Some("c.pdf".to_string()),
            ..Default::default()
        };
        let runner = BatchRunner::new(&encryptor, Path::new("/out"), OutputPolicy::default());
        let result = runner.run(
            &[
                pair("/in/a.pdf", Some("pw-a")),
                pair("/in/b.pdf", None),
                pair("/in/c.pdf", Some("pw-c")),
            ],
            |_, _, _| {},
        );

        assert_eq!(
            result.log_text(),
            "File Name\tPassword\n\
             a_encrypted.pdf\tpw-a\n\
             b.pdf\t(NOT FOUND)\n\
             c.pdf\tERROR: failed to open PDF: unexpected end of file"
        );
    }

    #[test]
    fn test_empty_batch() {
        let encryptor = FakeEncryptor::default();
        let runner = BatchRunner::new(&encryptor, Path::new("/out"), OutputPolicy::default());
        let result = runner.run(&[], |_, _, _| {});
        assert_eq!(result.total(), 0);
        assert_eq!(result.log_text(), "File Name\tPassword\n");
    }
}
