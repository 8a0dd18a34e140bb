//! 源文件行语法：`<U+XXXX> <kKey> <value...>`。
//!
//! - 先 trim；空行、`#` 注释行跳过
//! - 形状不符、码位无法解码的行静默跳过（Unihan 文件头和杂行很常见）
use std::{fs, io, path::Path, sync::LazyLock};

use regex::Regex;
use tracing::trace;
use unihan_core::{Entry, codepoint::parse_unicode};

static LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(U\+\S+)\s+(k\S+)\s+(.+)$").expect("line grammar is valid")
});

/// 解析一行；不是数据行时返回 `None`。
pub fn parse_line(line: &str) -> Option<Entry> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let caps = LINE.captures(line)?;
    let code_point = parse_unicode(&caps[1])?;
    Some(Entry {
        code_point,
        unicode: caps[1].to_string(),
        key: caps[2].to_string(),
        value: caps[3].to_string(),
    })
}

pub fn parse_str(text: &str) -> Vec<Entry> {
    let mut skipped = 0usize;
    let entries: Vec<Entry> = text
        .lines()
        .filter_map(|line| {
            let entry = parse_line(line);
            if entry.is_none() && !is_ignorable(line) {
                skipped += 1;
                trace!(line, "跳过无法识别的行");
            }
            entry
        })
        .collect();
    if skipped > 0 {
        trace!(skipped, "本段文本含无法识别的行");
    }
    entries
}

pub fn parse_file(path: impl AsRef<Path>) -> io::Result<Vec<Entry>> {
    let text = fs::read_to_string(path)?;
    Ok(parse_str(&text))
}

fn is_ignorable(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_data_lines() {
        let entry = parse_line("U+53D1\tkMandarin\tfā").expect("data line");
        assert_eq!(
            entry,
            Entry {
                code_point: '发',
                unicode: "U+53D1".into(),
                key: "kMandarin".into(),
                value: "fā".into(),
            }
        );
    }

    #[test]
    fn keeps_the_whole_value_remainder() {
        let entry = parse_line("  U+767C kDefinition issue, dispatch;  send out \r").expect("data line");
        assert_eq!(entry.key, "kDefinition");
        assert_eq!(entry.value, "issue, dispatch;  send out");
    }

    #[test]
    fn skips_comments_blanks_and_malformed_lines() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   "), None);
        assert_eq!(parse_line("# U+53D1 kMandarin fā"), None);
        assert_eq!(parse_line("this is not a data line"), None);
        assert_eq!(parse_line("U+53D1 kMandarin"), None);
        assert_eq!(parse_line("U+53D1 Mandarin fā"), None);
        assert_eq!(parse_line("X U+53D1 kMandarin fā"), None);
    }

    #[test]
    fn skips_undecodable_escapes() {
        assert_eq!(parse_line("U+XYZ kMandarin fā"), None);
        assert_eq!(parse_line("U+D800 kMandarin fā"), None);
        assert_eq!(parse_line("U+0 kMandarin fā"), None);
    }

    #[test]
    fn parse_str_collects_in_order() {
        let text = "# header\n\nU+53D1\tkMandarin\tfā\ngarbage\nU+767C\tkMandarin\tfā\n";
        let labels: Vec<String> = parse_str(text).into_iter().map(|e| e.unicode).collect();
        assert_eq!(labels, vec!["U+53D1", "U+767C"]);
    }
}
