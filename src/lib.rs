//! WHATWG URL Standard parsing, serialization and component setters.
//!
//! ```
//! use weburl::Url;
//!
//! let mut url = Url::parse("https://user@EXAMPLE.com:443/a/./b/../c?x=1#top", None).unwrap();
//! assert_eq!(url.href(), "https://user@example.com/a/c?x=1#top");
//!
//! url.set_port("8443");
//! assert_eq!(url.host(), "example.com:8443");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod helpers;
mod ipv4;
mod ipv6;
mod scheme;
mod unicode;
mod url_components;

mod encoding;
mod error;
pub mod form_urlencoded;
mod host;
mod origin;
mod parser;
mod types;
mod url;
mod url_record;
mod url_search_params;

// Public API
pub use encoding::{QueryEncoding, Utf8};
pub use error::{ParseError, Result, ValidationError, ValidationErrorHandler};
pub use host::{Host, parse_host, parse_host_unicode, serialize_host, url_to_ascii, url_to_unicode};
pub use origin::{Origin, serialize_origin};
pub use parser::{Parseable, State, basic_url_parse, basic_url_parse_with_override, parse};
pub use types::SchemeType;
pub use self::url::{ParseOptions, Url};
pub use url_record::{UrlPath, UrlRecord, serialize_integer};
pub use url_search_params::UrlSearchParams;

/// Percent-encoding primitives and the URL Standard's encode sets
pub mod percent_encode {
    pub use crate::unicode::percent_encode::{
        C0_CONTROL_SET, COMPONENT_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET,
        URLENCODED_SET, USERINFO_SET, is_c0_control_percent_encode, is_component_percent_encode,
        is_fragment_percent_encode, is_path_percent_encode, is_query_percent_encode,
        is_special_query_percent_encode, is_urlencoded_percent_encode,
        is_userinfo_percent_encode, percent_decode_bytes, percent_decode_string,
        percent_encode_byte, utf8_percent_encode_code_point, utf8_percent_encode_string,
    };
}
