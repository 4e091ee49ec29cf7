//! String and identifier helpers

use uuid::Uuid;

/// True if a stream name is an opaque machine-generated unique token
/// (UUIDv4, hyphenated or not) rather than a human-chosen label
pub fn is_generated_name(name: &str) -> bool {
    Uuid::parse_str(name)
        .map(|u| u.get_version_num() == 4)
        .unwrap_or(false)
}

/// Sanitize a string into a safe source-code identifier
///
/// Every character outside letters, digits and `_` is replaced with `_`,
/// and a leading digit gets a `_` prefix.
pub fn sanitize_identifier(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    if s.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        out.push('_');
    }
    for c in s.chars() {
        if c.is_alphanumeric() || c == '_' {
            out.push(c);
        } else {
            out.push('_');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uuid4_names_are_generated() {
        assert!(is_generated_name("0b2d1b6e-3a9a-4f5c-9d1e-8c2f6a7b9c0d"));
        // Simple (non-hyphenated) form parses too
        assert!(is_generated_name("0b2d1b6e3a9a4f5c9d1e8c2f6a7b9c0d"));
        // Fresh v4 uuids always qualify
        assert!(is_generated_name(&Uuid::new_v4().to_string()));
    }

    #[test]
    fn test_human_names_are_not_generated() {
        assert!(!is_generated_name("loss"));
        assert!(!is_generated_name("errorRate"));
        assert!(!is_generated_name(""));
        // Valid uuid but not version 4
        assert!(!is_generated_name("0b2d1b6e-3a9a-1f5c-9d1e-8c2f6a7b9c0d"));
    }

    #[test]
    fn test_sanitize_replaces_punctuation() {
        assert_eq!(sanitize_identifier("errorRate"), "errorRate");
        assert_eq!(sanitize_identifier("my-stream.2"), "my_stream_2");
        assert_eq!(sanitize_identifier("a b"), "a_b");
    }

    #[test]
    fn test_sanitize_prefixes_leading_digit() {
        assert_eq!(sanitize_identifier("2epoch"), "_2epoch");
        assert_eq!(sanitize_identifier(""), "");
    }
}
