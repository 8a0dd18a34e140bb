//! `U+XXXX` 形式的码位标签。

/// 解析 `U+4E00` 形式的标签。
///
/// 缺少 `U+` 前缀、含非十六进制字符、值为 0 或不是合法标量值（代理区、超出 U+10FFFF）时返回 `None`。
pub fn parse_unicode(label: &str) -> Option<char> {
    let hex = label.strip_prefix("U+")?;
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;
    if value == 0 {
        return None;
    }
    char::from_u32(value)
}

/// 生成标签，至少四位大写十六进制。
pub fn format_unicode(ch: char) -> String {
    format!("U+{:04X}", ch as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bmp_and_supplementary_labels() {
        assert_eq!(parse_unicode("U+53D1"), Some('发'));
        assert_eq!(parse_unicode("U+20000"), Some('\u{20000}'));
        assert_eq!(parse_unicode("U+53d1"), Some('发'));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert_eq!(parse_unicode(""), None);
        assert_eq!(parse_unicode("U+"), None);
        assert_eq!(parse_unicode("53D1"), None);
        assert_eq!(parse_unicode("U+53G1"), None);
        assert_eq!(parse_unicode("U++53D1"), None);
        assert_eq!(parse_unicode("U+0"), None);
        assert_eq!(parse_unicode("U+D800"), None);
        assert_eq!(parse_unicode("U+110000"), None);
        assert_eq!(parse_unicode("U+FFFFFFFFFF"), None);
    }

    #[test]
    fn formats_with_minimum_width() {
        assert_eq!(format_unicode('A'), "U+0041");
        assert_eq!(format_unicode('發'), "U+767C");
        assert_eq!(format_unicode('\u{2A6D6}'), "U+2A6D6");
    }
}
