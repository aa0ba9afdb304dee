//! # 预览表格渲染
//!
//! 把 (序号, 文件名, 密码) 渲染成固定宽度的 ASCII 框线表格。
//! 超长单元格截断为 `width-1` 个字符加 `…`，短的右侧补空格，
//! 因此每一行的字符数完全相同。宽度按字符计数，不按字节。
//!
//! ## 依赖关系
//! - 被 `batch/workflow.rs` 调用
//! - 无外部依赖

/// 序号列宽
pub const INDEX_WIDTH: usize = 4;
/// 文件名列宽
pub const FILENAME_WIDTH: usize = 52;
/// 密码列宽
pub const PASSWORD_WIDTH: usize = 28;

/// 每一行（含分隔线）的字符数
pub const LINE_WIDTH: usize =
    (INDEX_WIDTH + 2) + (FILENAME_WIDTH + 2) + (PASSWORD_WIDTH + 2) + 4;

const ELLIPSIS: char = '…';
const WIDTHS: [usize; 3] = [INDEX_WIDTH, FILENAME_WIDTH, PASSWORD_WIDTH];

/// 预览表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewRow {
    pub index: usize,
    pub filename: String,
    pub password: String,
}

/// 把单元格文本调整为恰好 `width` 个字符
pub fn fit_cell(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let mut cell: String = text.chars().take(width.saturating_sub(1)).collect();
        cell.push(ELLIPSIS);
        cell
    } else {
        let mut cell = String::with_capacity(text.len() + width - len);
        cell.push_str(text);
        cell.extend(std::iter::repeat(' ').take(width - len));
        cell
    }
}

fn separator() -> String {
    let mut line = String::with_capacity(LINE_WIDTH + 1);
    line.push('+');
    for w in WIDTHS {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn render_row(cells: [&str; 3]) -> String {
    let fitted: Vec<String> = cells
        .iter()
        .zip(WIDTHS)
        .map(|(text, w)| fit_cell(text, w))
        .collect();
    format!("| {} |\n", fitted.join(" | "))
}

/// 渲染完整的预览表格（每行以换行结尾）
pub fn render_preview_table(rows: &[PreviewRow]) -> String {
    let sep = separator();
    let mut out = String::new();

    out.push_str(&sep);
    out.push_str(&render_row(["No", "File Name", "Password"]));
    out.push_str(&sep);
    for row in rows {
        let index = row.index.to_string();
        out.push_str(&render_row([
            index.as_str(),
            row.filename.as_str(),
            row.password.as_str(),
        ]));
    }
    out.push_str(&sep);

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(index: usize, filename: &str, password: &str) -> PreviewRow {
        PreviewRow {
            index,
            filename: filename.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_fit_cell_pad() {
        assert_eq!(fit_cell("No", 4), "No  ");
        assert_eq!(fit_cell("", 4), "    ");
        assert_eq!(fit_cell("abcd", 4), "abcd");
    }

    #[test]
    fn test_fit_cell_truncate() {
        assert_eq!(fit_cell("abcde", 4), "abc…");
        let long = "x".repeat(60);
        let cell = fit_cell(&long, FILENAME_WIDTH);
        assert_eq!(cell.chars().count(), FILENAME_WIDTH);
        assert!(cell.starts_with(&"x".repeat(FILENAME_WIDTH - 1)));
        assert!(cell.ends_with('…'));
    }

    #[test]
    fn test_fit_cell_multibyte() {
        let text = "報告書ファイル名前が長いです";
        let cell = fit_cell(text, 10);
        assert_eq!(cell.chars().count(), 10);
        assert_eq!(cell, "報告書ファイル名前…");
        assert_eq!(fit_cell("é", 3), "é  ");
    }

    #[test]
    fn test_render_layout() {
        let table = render_preview_table(&[row(1, "report.pdf", "abc123")]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(table.ends_with('\n'));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[4]);
        assert!(lines[0].starts_with("+------+----"));
        assert!(lines[1].starts_with("| No   | File Name "));
        assert!(lines[3].starts_with("| 1    | report.pdf "));
        assert!(lines[3].ends_with(&format!("| {} |", fit_cell("abc123", PASSWORD_WIDTH))));
    }

    #[test]
    fn test_every_line_same_width() {
        let rows = vec![
            row(1, "", ""),
            row(2, &"a".repeat(200), &"p".repeat(200)),
            row(3, "日本語のファイル名.pdf", "pässwörd"),
            row(12345, "emoji 📄.pdf", "(NOT FOUND)"),
        ];
        let table = render_preview_table(&rows);
        for line in table.lines() {
            assert_eq!(line.chars().count(), LINE_WIDTH, "line: {}", line);
        }
        assert_eq!(LINE_WIDTH, 94);
    }

    #[test]
    fn test_empty_rows() {
        let table = render_preview_table(&[]);
        assert_eq!(table.lines().count(), 4);
    }
}
