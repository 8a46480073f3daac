//! Free text functions used as function-item callables

/// Concatenate two strings
#[must_use]
pub fn string_sum(left: String, right: String) -> String {
    left + &right
}

/// Length of `text` in bytes, identical to [`str::len`]
#[must_use]
pub fn text_length(text: &str) -> usize {
    text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_sum() {
        assert_eq!(string_sum("a".to_owned(), "b".to_owned()), "ab");
        assert_eq!(string_sum(String::new(), "b".to_owned()), "b");
    }

    #[test]
    fn test_text_length() {
        assert_eq!(text_length("1234"), 4);
        assert_eq!(text_length(""), 0);
        // bytes, not characters
        assert_eq!(text_length("é"), 2);
    }
}
