//! Sanitization rule for the free-form `input` query parameter.

const SCRIPT_MARKER: &str = "<script>";

/// Returns `true` when `input` is acceptable.
///
/// Absent or empty input is accepted. Anything else must be made only of
/// ASCII letters and digits and must not contain `<script>` in any case.
/// Whitespace counts as a rejected character.
///
/// ```rust
/// use axum_helpers::validation::is_valid_input;
///
/// assert!(is_valid_input(None));
/// assert!(is_valid_input(Some("Engineering42")));
/// assert!(!is_valid_input(Some("Robert'); DROP TABLE")));
/// ```
pub fn is_valid_input(input: Option<&str>) -> bool {
    let Some(value) = input else {
        return true;
    };

    if value.is_empty() {
        return true;
    }

    !value.to_lowercase().contains(SCRIPT_MARKER)
        && value.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_and_empty_are_valid() {
        assert!(is_valid_input(None));
        assert!(is_valid_input(Some("")));
    }

    #[test]
    fn test_letters_and_digits_are_valid() {
        assert!(is_valid_input(Some("abc123")));
        assert!(is_valid_input(Some("ABC")));
        assert!(is_valid_input(Some("2024")));
    }

    #[test]
    fn test_non_ascii_is_invalid() {
        for s in ["Müller", "東京", "½", "²", "Ⅻ", "a\u{345}", "٣"] {
            assert!(!is_valid_input(Some(s)), "{s} should be rejected");
        }
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        assert!(!is_valid_input(Some(" ")));
        assert!(!is_valid_input(Some("\t\n")));
    }

    #[test]
    fn test_inner_space_is_invalid() {
        assert!(!is_valid_input(Some("John Smith")));
    }

    #[test]
    fn test_punctuation_and_symbols_are_invalid() {
        for s in ["a-b", "a_b", "a.b", "100%", "x=y", "O'Brien"] {
            assert!(!is_valid_input(Some(s)), "{s} should be rejected");
        }
    }

    #[test]
    fn test_script_marker_is_invalid_in_any_case() {
        assert!(!is_valid_input(Some("<script>alert(1)</script>")));
        assert!(!is_valid_input(Some("<SCRIPT>")));
        assert!(!is_valid_input(Some("x<ScRiPt>y")));
    }
}
