//! Shared utility functions

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut a string to at most `max_width` display columns, ending in `…` when shortened.
///
/// Wide characters (CJK, most emoji) count as two columns. The ellipsis
/// takes one of the `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > limit {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_shorter_than_max() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hello world", 6).width(), 6);
    }

    #[test]
    fn test_truncate_wide_chars_by_columns() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語テキスト", 3), "日…");
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
        assert!(truncate_to_width("日本語テキスト", 6).width() <= 6);
    }

    #[test]
    fn test_truncate_never_splits_wide_char_to_fit() {
        // Budget of 4 leaves 3 columns for text: one wide char, not two
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("日本語", 6), "日本語");
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("hello", 0), "");
        assert_eq!(truncate_to_width("", 0), "");
    }
}
