//! 按显示宽度处理文本（中日韩字符占两列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到指定显示宽度，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        result.push(c);
        used += w;
    }
    result.push('…');
    result
}

/// 截断并用空格补齐到指定显示宽度
pub fn pad_to_width(text: &str, width: usize) -> String {
    let mut result = truncate_to_width(text, width);
    let padding = width.saturating_sub(result.width());
    result.push_str(&" ".repeat(padding));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("联系表单", 5), "联系…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn pads_wide_characters() {
        assert_eq!(pad_to_width("姓名", 6), "姓名  ");
        assert_eq!(pad_to_width("Name", 6), "Name  ");
        assert_eq!(pad_to_width("Address", 4).width(), 4);
    }
}
