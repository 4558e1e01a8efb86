/// Check if a character is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r')
}

/// C0 control (U+0000 to U+001F) or U+0020 SPACE
pub fn is_c0_control_or_space(c: char) -> bool {
    c <= '\u{20}'
}

/// Host code point classification
/// 0 = allowed, 1 = forbidden host code point, 2 = forbidden in domains only
const HOST_CHAR_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];

    // C0 controls are forbidden in domains; a handful are forbidden in every host
    let mut i = 0;
    while i < 0x20 {
        table[i] = 2;
        i += 1;
    }
    table[0x7F] = 2;
    table[b'%' as usize] = 2;

    table[0x00] = 1;
    table[b'\t' as usize] = 1;
    table[b'\n' as usize] = 1;
    table[b'\r' as usize] = 1;
    table[b' ' as usize] = 1;
    table[b'#' as usize] = 1;
    table[b'/' as usize] = 1;
    table[b':' as usize] = 1;
    table[b'<' as usize] = 1;
    table[b'>' as usize] = 1;
    table[b'?' as usize] = 1;
    table[b'@' as usize] = 1;
    table[b'[' as usize] = 1;
    table[b'\\' as usize] = 1;
    table[b']' as usize] = 1;
    table[b'^' as usize] = 1;
    table[b'|' as usize] = 1;

    table
};

/// <https://url.spec.whatwg.org/#forbidden-host-code-point>
pub fn is_forbidden_host_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] == 1
}

/// <https://url.spec.whatwg.org/#forbidden-domain-code-point>
pub fn is_forbidden_domain_code_point(c: char) -> bool {
    c.is_ascii() && HOST_CHAR_TABLE[c as usize] != 0
}

/// Check whether any byte of an ASCII domain is a forbidden domain code point
pub fn contains_forbidden_domain_code_point(domain: &str) -> bool {
    domain.chars().any(is_forbidden_domain_code_point)
}

/// <https://url.spec.whatwg.org/#url-code-points>
///
/// ASCII alphanumerics, `!$&'()*+,-./:;=?@_~`, and code points in the range
/// U+00A0 to U+10FFFD excluding surrogates and noncharacters.
pub fn is_url_code_point(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric()
            || matches!(
                c,
                '!' | '$'
                    | '&'
                    | '\''
                    | '('
                    | ')'
                    | '*'
                    | '+'
                    | ','
                    | '-'
                    | '.'
                    | '/'
                    | ':'
                    | ';'
                    | '='
                    | '?'
                    | '@'
                    | '_'
                    | '~'
            );
    }

    let cp = c as u32;
    if !(0xA0..=0x10_FFFD).contains(&cp) {
        return false;
    }
    // Noncharacters: U+FDD0..U+FDEF and the last two code points of every plane
    !((0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_host_code_points() {
        for c in [' ', '#', '/', ':', '<', '>', '?', '@', '[', '\\', ']', '^', '|', '\0'] {
            assert!(is_forbidden_host_code_point(c), "{c:?}");
            assert!(is_forbidden_domain_code_point(c), "{c:?}");
        }
        assert!(!is_forbidden_host_code_point('%'));
        assert!(is_forbidden_domain_code_point('%'));
        assert!(!is_forbidden_host_code_point('\u{1}'));
        assert!(is_forbidden_domain_code_point('\u{1}'));
        assert!(is_forbidden_domain_code_point('\u{7F}'));
        assert!(!is_forbidden_domain_code_point('a'));
        assert!(!is_forbidden_domain_code_point('é'));
    }

    #[test]
    fn test_url_code_points() {
        assert!(is_url_code_point('a'));
        assert!(is_url_code_point('~'));
        assert!(!is_url_code_point('%'));
        assert!(!is_url_code_point(' '));
        assert!(!is_url_code_point('\u{9F}'));
        assert!(is_url_code_point('\u{A0}'));
        assert!(!is_url_code_point('\u{FDD0}'));
        assert!(!is_url_code_point('\u{FFFF}'));
        assert!(!is_url_code_point('\u{1FFFE}'));
        assert!(is_url_code_point('日'));
    }

    #[test]
    fn test_c0_control_or_space() {
        assert!(is_c0_control_or_space('\u{0}'));
        assert!(is_c0_control_or_space(' '));
        assert!(!is_c0_control_or_space('!'));
        assert!(is_ascii_tab_or_newline('\r'));
        assert!(!is_ascii_tab_or_newline(' '));
    }
}
