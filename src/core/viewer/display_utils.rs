//! 显示工具函数

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断时使用的省略符
const ELLIPSIS: char = '…';

/// 文本在终端中占用的列数（中文字符占两列）
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// 把文本截断到不超过 `width` 列，超出时以省略符结尾
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut output = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        output.push(ch);
        used += w;
    }
    output.push(ELLIPSIS);
    output
}

/// 截断并在右侧补空格到正好 `width` 列
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut output = truncate_to_width(text, width);
    let padding = width.saturating_sub(display_width(&output));
    output.extend(std::iter::repeat(' ').take(padding));
    output
}

/// 在 `width` 列内居中
pub fn center_in_width(text: &str, width: usize) -> String {
    let text = truncate_to_width(text, width);
    let free = width.saturating_sub(display_width(&text));
    let left = free / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(free - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_characters_count_twice() {
        assert_eq!(display_width("abc"), 3);
        assert_eq!(display_width("员工"), 4);
        assert_eq!(display_width("Анна"), 4);
    }

    #[test]
    fn truncation_keeps_width_budget() {
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 4), "abc");
        assert_eq!(truncate_to_width("员工列表", 5), "员工…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn fit_pads_to_exact_width() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(fit_to_width("员工列表", 6), "员工… ");
        assert_eq!(display_width(&fit_to_width("Иван Смирнов", 8)), 8);
    }

    #[test]
    fn centering() {
        assert_eq!(center_in_width("ab", 6), "  ab  ");
        assert_eq!(center_in_width("ab", 5), " ab  ");
    }
}
