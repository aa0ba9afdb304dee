//! # PDF 模块
//!
//! 封装外部 PDF 库的加密调用。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `commands/` 使用
//! - 子模块: encryptor

pub mod encryptor;

pub use encryptor::{Encryptor, LopdfEncryptor};
