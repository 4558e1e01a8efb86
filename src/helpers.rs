use crate::character_sets::{is_ascii_tab_or_newline, is_c0_control_or_space};
use crate::compat::Cow;
use crate::error::{ValidationError, ValidationErrorHandler, report};

/// Fast check if string contains tabs or newlines
pub fn has_tabs_or_newline(input: &str) -> bool {
    memchr::memchr3(b'\t', b'\n', b'\r', input.as_bytes()).is_some()
}

/// Strip leading and trailing C0 controls and spaces.
/// Only applied to fresh parses, never to setter input.
pub fn trim_c0_control_or_space<'a>(
    input: &'a str,
    handler: Option<&dyn ValidationErrorHandler>,
) -> &'a str {
    let trimmed = input.trim_matches(is_c0_control_or_space);
    if trimmed.len() != input.len() {
        report(handler, ValidationError::LeadingOrTrailingControlOrSpace);
    }
    trimmed
}

/// Remove every ASCII tab and newline.
/// Returns a Cow to avoid allocation when there is nothing to remove.
pub fn remove_tabs_and_newlines<'a>(
    input: &'a str,
    handler: Option<&dyn ValidationErrorHandler>,
) -> Cow<'a, str> {
    if !has_tabs_or_newline(input) {
        return Cow::Borrowed(input);
    }

    report(handler, ValidationError::TabOrNewline);
    Cow::Owned(
        input
            .chars()
            .filter(|&c| !is_ascii_tab_or_newline(c))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_trim_c0_control_or_space() {
        assert_eq!(trim_c0_control_or_space("\t\nhello\r\n", None), "hello");
        assert_eq!(trim_c0_control_or_space("hello", None), "hello");
        assert_eq!(trim_c0_control_or_space("\u{0}\u{1F} ", None), "");

        // Spaces are trimmed from edges but kept internally
        assert_eq!(trim_c0_control_or_space("  hello world  ", None), "hello world");
    }

    #[test]
    fn test_remove_tabs_and_newlines() {
        assert_eq!(remove_tabs_and_newlines("hel\tlo\nworld", None), "helloworld");
        assert!(matches!(
            remove_tabs_and_newlines("hello world", None),
            Cow::Borrowed("hello world")
        ));
    }

    #[test]
    fn test_reports_once_per_pass() {
        let count = Cell::new(0);
        let handler = |_: ValidationError| count.set(count.get() + 1);
        let trimmed = trim_c0_control_or_space(" a\tb\n ", Some(&handler));
        let cleaned = remove_tabs_and_newlines(trimmed, Some(&handler));
        assert_eq!(cleaned, "ab");
        assert_eq!(count.get(), 2);
    }
}
