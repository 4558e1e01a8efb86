//! `application/x-www-form-urlencoded` parsing and serialization.
//!
//! <https://url.spec.whatwg.org/#application/x-www-form-urlencoded>

use crate::compat::{String, Vec};
use crate::unicode::percent_encode::{URLENCODED_SET, percent_decode_bytes, percent_encode_into};

/// Parse a urlencoded byte string into name/value pairs.
///
/// Empty sequences between `&` are skipped, `+` decodes to a space, and the
/// percent-decoded bytes are decoded as UTF-8 with replacement characters.
pub fn parse(input: &[u8]) -> Vec<(String, String)> {
    input
        .split(|&b| b == b'&')
        .filter(|sequence| !sequence.is_empty())
        .map(|sequence| {
            let (name, value) = match memchr::memchr(b'=', sequence) {
                Some(pos) => (&sequence[..pos], &sequence[pos + 1..]),
                None => (sequence, &[][..]),
            };
            (decode(name), decode(value))
        })
        .collect()
}

fn decode(input: &[u8]) -> String {
    let replaced: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    let bytes = percent_decode_bytes(&replaced);
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Serialize name/value pairs, writing spaces as `+`
pub fn serialize<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut output = String::new();
    for (i, (name, value)) in pairs.into_iter().enumerate() {
        if i > 0 {
            output.push('&');
        }
        encode_into(&mut output, name);
        output.push('=');
        encode_into(&mut output, value);
    }
    output
}

fn encode_into(output: &mut String, input: &str) {
    for (i, part) in input.split(' ').enumerate() {
        if i > 0 {
            output.push('+');
        }
        percent_encode_into(output, part, URLENCODED_SET);
    }
}
