use crate::compat::{String, Vec};
use percent_encoding::{AsciiSet, CONTROLS, percent_decode, percent_encode, utf8_percent_encode};

// Encode sets from the WHATWG URL Standard
// Based on https://url.spec.whatwg.org/#percent-encoded-bytes
//
// Each set widens the one it is built from. Bytes above 0x7E are always
// encoded by `percent_encoding`, so every set includes them implicitly.

/// C0 control percent-encode set
pub const C0_CONTROL_SET: &AsciiSet = CONTROLS;

/// Fragment percent-encode set
/// C0 control + space, ", <, >, \`
pub const FRAGMENT_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`');

/// Query percent-encode set (for non-special URLs)
/// C0 control + space, ", #, <, >
pub const QUERY_SET: &AsciiSet = &C0_CONTROL_SET
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>');

/// Special query percent-encode set (for special URLs, ws/wss included)
/// Query + '
pub const SPECIAL_QUERY_SET: &AsciiSet = &QUERY_SET.add(b'\'');

/// Path percent-encode set
/// Query + ?, \`, {, }
pub const PATH_SET: &AsciiSet = &QUERY_SET.add(b'?').add(b'`').add(b'{').add(b'}');

/// Userinfo percent-encode set
/// Path + /, :, ;, =, @, [, \, ], ^, |
pub const USERINFO_SET: &AsciiSet = &PATH_SET
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// Component percent-encode set
/// Userinfo + $, %, &, +, ,
pub const COMPONENT_SET: &AsciiSet = &USERINFO_SET
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b',');

/// application/x-www-form-urlencoded percent-encode set
/// Component + !, ', (, ), ~
pub const URLENCODED_SET: &AsciiSet = &COMPONENT_SET
    .add(b'!')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'~');

/// Byte membership tables mirroring the `AsciiSet` constants above, for the
/// single-byte predicates.
const fn with_bytes(mut table: [bool; 256], bytes: &[u8]) -> [bool; 256] {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] = true;
        i += 1;
    }
    table
}

const C0_CONTROL_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = i <= 0x1F || i > 0x7E;
        i += 1;
    }
    table
};
const FRAGMENT_TABLE: [bool; 256] = with_bytes(C0_CONTROL_TABLE, b" \"<>`");
const QUERY_TABLE: [bool; 256] = with_bytes(C0_CONTROL_TABLE, b" \"#<>");
const SPECIAL_QUERY_TABLE: [bool; 256] = with_bytes(QUERY_TABLE, b"'");
const PATH_TABLE: [bool; 256] = with_bytes(QUERY_TABLE, b"?`{}");
const USERINFO_TABLE: [bool; 256] = with_bytes(PATH_TABLE, b"/:;=@[\\]^|");
const COMPONENT_TABLE: [bool; 256] = with_bytes(USERINFO_TABLE, b"$%&+,");
const URLENCODED_TABLE: [bool; 256] = with_bytes(COMPONENT_TABLE, b"!'()~");

/// Set membership by byte, one predicate per encode set
pub fn is_c0_control_percent_encode(byte: u8) -> bool {
    C0_CONTROL_TABLE[byte as usize]
}

pub fn is_fragment_percent_encode(byte: u8) -> bool {
    FRAGMENT_TABLE[byte as usize]
}

pub fn is_query_percent_encode(byte: u8) -> bool {
    QUERY_TABLE[byte as usize]
}

pub fn is_special_query_percent_encode(byte: u8) -> bool {
    SPECIAL_QUERY_TABLE[byte as usize]
}

pub fn is_path_percent_encode(byte: u8) -> bool {
    PATH_TABLE[byte as usize]
}

pub fn is_userinfo_percent_encode(byte: u8) -> bool {
    USERINFO_TABLE[byte as usize]
}

pub fn is_component_percent_encode(byte: u8) -> bool {
    COMPONENT_TABLE[byte as usize]
}

pub fn is_urlencoded_percent_encode(byte: u8) -> bool {
    URLENCODED_TABLE[byte as usize]
}

/// Percent-encode a single byte as `%XX` (uppercase hex)
pub fn percent_encode_byte(byte: u8) -> &'static str {
    percent_encoding::percent_encode_byte(byte)
}

/// Percent-decode a byte sequence. Malformed `%` sequences pass through.
pub fn percent_decode_bytes(input: &[u8]) -> Vec<u8> {
    percent_decode(input).collect()
}

/// UTF-8 encode a string, then percent-decode the bytes.
/// The result is not necessarily valid UTF-8.
pub fn percent_decode_string(input: &str) -> Vec<u8> {
    percent_decode_bytes(input.as_bytes())
}

/// UTF-8 percent-encode a single code point
pub fn utf8_percent_encode_code_point(c: char, encode_set: &'static AsciiSet) -> String {
    let mut buffer = String::new();
    push_utf8_percent_encoded(&mut buffer, c, encode_set);
    buffer
}

/// Append the UTF-8 percent-encoding of `c` to `buffer`
pub fn push_utf8_percent_encoded(buffer: &mut String, c: char, encode_set: &'static AsciiSet) {
    let mut utf8 = [0u8; 4];
    for chunk in percent_encode(c.encode_utf8(&mut utf8).as_bytes(), encode_set) {
        buffer.push_str(chunk);
    }
}

/// UTF-8 percent-encode a string, optionally writing spaces as `+`
pub fn utf8_percent_encode_string(
    input: &str,
    encode_set: &'static AsciiSet,
    space_as_plus: bool,
) -> String {
    let mut buffer = String::with_capacity(input.len());
    if space_as_plus {
        for (i, part) in input.split(' ').enumerate() {
            if i > 0 {
                buffer.push('+');
            }
            percent_encode_into(&mut buffer, part, encode_set);
        }
    } else {
        percent_encode_into(&mut buffer, input, encode_set);
    }
    buffer
}

/// Write percent-encoded string directly to buffer
/// Manually iterates to avoid write! macro overhead
pub fn percent_encode_into(buffer: &mut String, input: &str, encode_set: &'static AsciiSet) {
    // Reserve space to reduce reallocations
    buffer.reserve(input.len());

    for chunk in utf8_percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Percent-encode already-encoded bytes (non-UTF-8 query encodings)
pub fn percent_encode_bytes_into(buffer: &mut String, input: &[u8], encode_set: &'static AsciiSet) {
    buffer.reserve(input.len());

    for chunk in percent_encode(input, encode_set) {
        buffer.push_str(chunk);
    }
}

/// Whether `input[index..]` starts with `%` followed by two ASCII hex digits
pub fn is_percent_escape(input: &[char], index: usize) -> bool {
    input.get(index) == Some(&'%')
        && input.get(index + 1).is_some_and(char::is_ascii_hexdigit)
        && input.get(index + 2).is_some_and(char::is_ascii_hexdigit)
}
