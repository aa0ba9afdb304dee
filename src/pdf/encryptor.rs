//! # PDF 加密调用
//!
//! 打开一个 PDF，设置用户/所有者密码后另存到目标路径。
//! 使用 `lopdf` 的标准安全处理器 R6（AES-256），这是该库提供的最强档位。
//!
//! 所有失败（包括 PDF 库内部的 panic）都转换为 `EncryptError`，
//! 不会向调用方传播。文档对象只在一次调用内存在，调用结束即释放。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 通过 `Encryptor` trait 调用
//! - 使用 `lopdf` 处理 PDF，`getrandom` 生成文件密钥

use lopdf::encryption::crypt_filters::{Aes256CryptFilter, CryptFilter};
use lopdf::{Document, EncryptionState, EncryptionVersion, Permissions};

use std::any::Any;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// 标准加密过滤器名称
const CRYPT_FILTER_NAME: &[u8] = b"StdCF";
/// AES-256 文件密钥长度（字节）
const FILE_KEY_LEN: usize = 32;

/// 单个文件的加密失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncryptError {
    #[error("failed to open PDF: {0}")]
    Open(String),

    #[error("failed to generate encryption key: {0}")]
    KeyGeneration(String),

    #[error("failed to encrypt PDF: {0}")]
    Encrypt(String),

    #[error("failed to save PDF: {0}")]
    Save(String),

    #[error("PDF backend panicked: {0}")]
    Panic(String),
}

/// 加密后端
pub trait Encryptor {
    /// 用 `password` 作为用户和所有者密码加密 `input`，写到 `output`
    fn encrypt(&self, input: &Path, output: &Path, password: &str) -> Result<(), EncryptError>;
}

/// 基于 lopdf 的加密后端
#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfEncryptor;

impl Encryptor for LopdfEncryptor {
    fn encrypt(&self, input: &Path, output: &Path, password: &str) -> Result<(), EncryptError> {
        log::debug!("Encrypting {} -> {}", input.display(), output.display());
        guard_backend(|| encrypt_with_lopdf(input, output, password))
    }
}

fn encrypt_with_lopdf(input: &Path, output: &Path, password: &str) -> Result<(), EncryptError> {
    let mut doc = Document::load(input).map_err(|e| EncryptError::Open(e.to_string()))?;

    let mut file_key = [0u8; FILE_KEY_LEN];
    getrandom::getrandom(&mut file_key).map_err(|e| EncryptError::KeyGeneration(e.to_string()))?;

    let crypt_filter: Arc<dyn CryptFilter> = Arc::new(Aes256CryptFilter);
    let version = EncryptionVersion::V5 {
        encrypt_metadata: true,
        crypt_filters: BTreeMap::from([(CRYPT_FILTER_NAME.to_vec(), crypt_filter)]),
        file_encryption_key: &file_key,
        stream_filter: CRYPT_FILTER_NAME.to_vec(),
        string_filter: CRYPT_FILTER_NAME.to_vec(),
        owner_password: password,
        user_password: password,
        permissions: Permissions::all(),
    };

    let state =
        EncryptionState::try_from(version).map_err(|e| EncryptError::Encrypt(e.to_string()))?;
    doc.encrypt(&state)
        .map_err(|e| EncryptError::Encrypt(e.to_string()))?;

    doc.save(output)
        .map_err(|e| EncryptError::Save(e.to_string()))?;

    Ok(())
}

/// 执行后端调用，把 panic 转换为 `EncryptError::Panic`
fn guard_backend<F>(f: F) -> Result<(), EncryptError>
where
    F: FnOnce() -> Result<(), EncryptError>,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(EncryptError::Panic(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use lopdf::{dictionary, Object, Stream};
    use std::fs;
    use tempfile::tempdir;

    /// 生成一个单页的最小 PDF
    pub(crate) fn write_sample_pdf(path: &Path) {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content = Stream::new(
            dictionary! {},
            b"BT /F1 24 Tf 72 720 Td (Hello) Tj ET".to_vec(),
        );
        let content_id = doc.add_object(content);
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path).unwrap();
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_encrypt_sample_pdf() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        let output = dir.path().join("out.pdf");
        write_sample_pdf(&input);

        LopdfEncryptor.encrypt(&input, &output, "s3cret").unwrap();

        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(contains(&bytes, b"/Encrypt"));
        assert!(contains(&bytes, b"AESV3"));
        // 明文内容流不应再出现
        assert!(!contains(&bytes, b"(Hello) Tj"));
    }

    #[test]
    fn test_encrypt_malformed_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.pdf");
        let output = dir.path().join("out.pdf");
        fs::write(&input, b"this is not a pdf").unwrap();

        let err = LopdfEncryptor.encrypt(&input, &output, "pw").unwrap_err();
        assert!(matches!(err, EncryptError::Open(_)));
        assert!(!err.to_string().is_empty());
        assert!(!output.exists());
    }

    #[test]
    fn test_encrypt_missing_input() {
        let dir = tempdir().unwrap();
        let err = LopdfEncryptor
            .encrypt(&dir.path().join("nope.pdf"), &dir.path().join("o.pdf"), "pw")
            .unwrap_err();
        assert!(matches!(err, EncryptError::Open(_)));
    }

    #[test]
    fn test_encrypt_unwritable_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.pdf");
        write_sample_pdf(&input);

        let output = dir.path().join("missing-dir").join("out.pdf");
        let err = LopdfEncryptor.encrypt(&input, &output, "pw").unwrap_err();
        assert!(matches!(err, EncryptError::Save(_)));
    }

    #[test]
    fn test_guard_backend_converts_panic() {
        let result = guard_backend(|| panic!("xref stream corrupted"));
        assert_eq!(
            result,
            Err(EncryptError::Panic("xref stream corrupted".to_string()))
        );
    }
}
