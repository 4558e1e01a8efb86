//! Query string encodings.
//!
//! Special URLs other than `ws:`/`wss:` encode their query with the
//! document's encoding before percent-encoding. Everything else is UTF-8.

use crate::compat::Cow;

/// A text encoder for the query component.
pub trait QueryEncoding {
    /// Encode `input`. Unmappable characters become HTML decimal numeric
    /// character references (`&#NNNN;`).
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, [u8]>;

    /// Whether this encoding is UTF-8, which lets the parser skip encoding.
    fn is_utf8(&self) -> bool {
        false
    }
}

/// The default query encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl QueryEncoding for Utf8 {
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, [u8]> {
        Cow::Borrowed(input.as_bytes())
    }

    fn is_utf8(&self) -> bool {
        true
    }
}

#[cfg(feature = "query_encoding")]
impl QueryEncoding for &'static encoding_rs::Encoding {
    fn encode<'a>(&self, input: &'a str) -> Cow<'a, [u8]> {
        // `encode` maps UTF-16 and replacement to UTF-8 and writes NCRs
        let (bytes, _actual, _had_unmappable) = encoding_rs::Encoding::encode(*self, input);
        bytes
    }

    fn is_utf8(&self) -> bool {
        self.output_encoding() == encoding_rs::UTF_8
    }
}
