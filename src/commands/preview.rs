//! # preview 命令实现
//!
//! 加载密码表、展开输入并打印预览表格。不写任何文件。
//!
//! ## 依赖关系
//! - 使用 `cli/preview.rs` 定义的参数
//! - 使用 `parsers/`, `batch/`
//! - 使用 `utils/output.rs`

use crate::batch::{build_preview, resolve_pairs, FileCollector};
use crate::cli::preview::PreviewArgs;
use crate::error::Result;
use crate::parsers;
use crate::utils::output;

/// 执行 preview 命令
pub fn execute(args: PreviewArgs) -> Result<()> {
    output::print_header("Encryption Preview");

    let table = parsers::load_password_table(&args.passwords, args.sheet.as_deref())?;
    output::print_info(&format!(
        "Loaded {} password entries from {}",
        table.len(),
        table.source_name()
    ));

    let files = FileCollector::new()
        .with_pattern(&args.pattern)?
        .recursive(args.recursive)
        .collect(&args.files)?;

    if files.is_empty() {
        output::print_warning("No PDF files matched the given inputs.");
        return Ok(());
    }

    let pairs = resolve_pairs(&table, &files);
    let preview = build_preview(args.output.as_deref(), &table, &pairs);
    println!("\n{}", preview);

    let found = pairs.iter().filter(|p| p.resolution.is_found()).count();
    output::print_separator();
    output::print_field("Password found", &found.to_string());
    output::print_field("Not found", &(pairs.len() - found).to_string());
    if !table.rejected().is_empty() {
        output::print_field("Ignored rows", &table.rejected().len().to_string());
    }

    Ok(())
}
