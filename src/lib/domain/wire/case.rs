//! Key name conversion

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    static ref WORD_BOUNDARY_REGEX: Regex = Regex::new(r"(\s*-*\b\w|[A-Z])").unwrap();
}

/// Convert a lower-camel (or dashed / spaced) key to lower-snake.
///
/// Every word start and every capital letter becomes `_` followed by the
/// lowercased character, then the leading separator is dropped.
pub fn snake_case(key: &str) -> String {
    let replaced = WORD_BOUNDARY_REGEX.replace_all(key.trim(), |caps: &Captures<'_>| {
        let part = caps[0].trim().to_lowercase().replacen('-', "", 1);

        if part.starts_with('_') {
            part
        } else {
            format!("_{}", part)
        }
    });

    replaced.chars().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_key_is_snake_cased() {
        assert_eq!(snake_case("someField"), "some_field");
        assert_eq!(snake_case("replyTo"), "reply_to");
        assert_eq!(snake_case("sendAt"), "send_at");
    }

    #[test]
    fn test_already_snake_cased_key_is_unchanged() {
        assert_eq!(snake_case("reply_to"), "reply_to");
        assert_eq!(snake_case("personalizations"), "personalizations");
    }

    #[test]
    fn test_dashed_key_is_snake_cased() {
        assert_eq!(snake_case("X-Mailer-Id"), "x_mailer_id");
    }

    #[test]
    fn test_spaced_key_is_snake_cased() {
        assert_eq!(snake_case("  some field "), "some_field");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(snake_case(""), "");
    }
}
