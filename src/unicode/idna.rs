use crate::compat::{Cow, String};
use crate::error::{ParseError, Result};
use idna::AsciiDenyList;

/// Check if 4 bytes match "xn--" (case insensitive)
fn is_punycode_prefix(slice: &[u8]) -> bool {
    slice.len() >= 4
        && matches!(slice[0], b'x' | b'X')
        && matches!(slice[1], b'n' | b'N')
        && slice[2] == b'-'
        && slice[3] == b'-'
}

/// Check if domain contains Punycode (xn-- label prefix, case insensitive)
pub fn has_punycode(domain: &str) -> bool {
    let bytes = domain.as_bytes();
    if bytes.len() < 4 {
        return false;
    }

    if is_punycode_prefix(bytes) {
        return true;
    }

    // Check for .xn-- patterns using memchr for faster scanning
    memchr::memchr_iter(b'.', bytes).any(|pos| is_punycode_prefix(&bytes[pos + 1..]))
}

/// UTS #46 `ToASCII` with the URL Standard's flags: no STD3 rules, no hyphen
/// checks, bidi and joiner checks on, nontransitional, no DNS length check.
///
/// An empty result is a failure.
pub fn domain_to_ascii(domain: &str) -> Result<String> {
    // Fast path: ASCII labels without Punycode only need lowercasing.
    // Forbidden code points are left for the host parser to reject.
    if domain.is_ascii() && !has_punycode(domain) {
        if domain.is_empty() {
            return Err(ParseError::IdnaError);
        }
        return Ok(domain.to_ascii_lowercase());
    }

    let ascii = idna::domain_to_ascii_cow(domain.as_bytes(), AsciiDenyList::URL)
        .map_err(|_| ParseError::IdnaError)?;
    if ascii.is_empty() {
        return Err(ParseError::IdnaError);
    }
    Ok(match ascii {
        Cow::Borrowed(s) => String::from(s),
        Cow::Owned(s) => s,
    })
}

/// UTS #46 `ToUnicode`. Labels that fail to decode are kept as given, so
/// this never fails.
pub fn domain_to_unicode(domain: &str) -> String {
    if domain.is_ascii() && !has_punycode(domain) {
        return domain.to_ascii_lowercase();
    }
    let (unicode, _errors) = idna::domain_to_unicode(domain);
    unicode
}
