//! String utilities for the domain layer.

/// Take at most `max_chars` characters from the start of `s`.
///
/// Counts Unicode scalar values, so multi-byte text is never split.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Shorten a string for log lines, appending an ellipsis when cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let head = take_chars(s, max_chars);
    if head.len() == s.len() {
        s.to_string()
    } else {
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_chars_ascii() {
        assert_eq!(take_chars("hello world", 5), "hello");
        assert_eq!(take_chars("hi", 10), "hi");
        assert_eq!(take_chars("", 3), "");
    }

    #[test]
    fn test_take_chars_multibyte() {
        // Each of these characters is 3 bytes in UTF-8
        assert_eq!(take_chars("あのね", 2), "あの");
        assert_eq!(take_chars("日本語のテスト", 3), "日本語");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("a longer sentence", 8), "a longer...");
        assert_eq!(preview("exact", 5), "exact");
    }
}
