use crate::ipv4::parse_ipv4_number;

/// Whether a host string should be handed to the IPv4 parser.
///
/// True when the last dot-separated part (ignoring one trailing empty part)
/// is all ASCII digits or parses as a hex/octal IPv4 number.
pub fn ends_in_a_number(input: &str) -> bool {
    let mut parts = input.rsplit('.');
    let mut last = parts.next().unwrap_or_default();

    if last.is_empty() {
        // "" has a single part; "foo." drops its trailing empty part
        let Some(previous) = parts.next() else {
            return false;
        };
        last = previous;
    }

    if !last.is_empty() && last.bytes().all(|b| b.is_ascii_digit()) {
        return true;
    }

    parse_ipv4_number(last).is_some()
}

/// A Windows drive letter: an ASCII alpha followed by `:` or `|`
pub fn is_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

/// A normalized Windows drive letter: an ASCII alpha followed by `:`
pub fn is_normalized_windows_drive_letter(segment: &str) -> bool {
    is_windows_drive_letter(segment) && segment.as_bytes()[1] == b':'
}

/// Whether `input` starts with a Windows drive letter that is followed by
/// end of input or one of `/`, `\`, `?`, `#`
pub fn starts_with_windows_drive_letter(input: &[char]) -> bool {
    if input.len() < 2 || !input[0].is_ascii_alphabetic() || !matches!(input[1], ':' | '|') {
        return false;
    }
    input.len() == 2 || matches!(input[2], '/' | '\\' | '?' | '#')
}

/// `.` or `%2e`, ASCII case-insensitive
pub fn is_single_dot_segment(segment: &str) -> bool {
    segment == "." || segment.eq_ignore_ascii_case("%2e")
}

/// `..`, `.%2e`, `%2e.` or `%2e%2e`, ASCII case-insensitive
pub fn is_double_dot_segment(segment: &str) -> bool {
    let b = segment.as_bytes();
    match b.len() {
        2 => b == b"..",
        4 => (b[0] == b'.' && is_percent_2e(&b[1..])) || (b[3] == b'.' && is_percent_2e(&b[..3])),
        6 => is_percent_2e(&b[..3]) && is_percent_2e(&b[3..]),
        _ => false,
    }
}

fn is_percent_2e(bytes: &[u8]) -> bool {
    bytes.eq_ignore_ascii_case(b"%2e")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::Vec;

    #[test]
    fn test_ends_in_a_number() {
        assert!(ends_in_a_number("192.168.1.1"));
        assert!(ends_in_a_number("192.168.1.1."));
        assert!(ends_in_a_number("0xC0A80101"));
        assert!(ends_in_a_number("foo.0x"));
        assert!(ends_in_a_number("foo.09"));
        assert!(ends_in_a_number("0"));

        assert!(!ends_in_a_number(""));
        assert!(!ends_in_a_number("."));
        assert!(!ends_in_a_number("example.com"));
        assert!(!ends_in_a_number("1.2.3.4.com"));
        assert!(!ends_in_a_number("192.168.1.g"));
        assert!(!ends_in_a_number("foo.0xg"));
        assert!(!ends_in_a_number("1.2.3.4.."));
    }

    #[test]
    fn test_windows_drive_letters() {
        assert!(is_windows_drive_letter("c:"));
        assert!(is_windows_drive_letter("C|"));
        assert!(!is_windows_drive_letter("c"));
        assert!(!is_windows_drive_letter("1:"));
        assert!(is_normalized_windows_drive_letter("c:"));
        assert!(!is_normalized_windows_drive_letter("c|"));

        let chars = |s: &str| s.chars().collect::<Vec<_>>();
        assert!(starts_with_windows_drive_letter(&chars("c:")));
        assert!(starts_with_windows_drive_letter(&chars("c|/foo")));
        assert!(starts_with_windows_drive_letter(&chars("c:?x")));
        assert!(!starts_with_windows_drive_letter(&chars("c:x")));
        assert!(!starts_with_windows_drive_letter(&chars("c")));
    }

    #[test]
    fn test_dot_segments() {
        assert!(is_single_dot_segment("."));
        assert!(is_single_dot_segment("%2E"));
        assert!(!is_single_dot_segment(".."));

        for segment in ["..", ".%2e", ".%2E", "%2e.", "%2E%2e"] {
            assert!(is_double_dot_segment(segment), "{segment}");
        }
        for segment in [".", "...", "%2e", "%2e%2f", "a."] {
            assert!(!is_double_dot_segment(segment), "{segment}");
        }
    }
}
