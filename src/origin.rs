//! <https://url.spec.whatwg.org/#origin>

use crate::compat::{String, format};
use crate::host::Host;
use crate::parser::basic_url_parse;
use crate::types::SchemeType;
use crate::unicode::idna::domain_to_unicode;
use crate::url_record::UrlRecord;

/// The origin of a URL.
///
/// Opaque origins are never the same origin as anything, including
/// themselves; use [`Origin::same_origin`] rather than `==` for that check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Origin {
    Opaque,
    Tuple {
        scheme: String,
        host: Host,
        port: Option<u16>,
    },
}

impl Origin {
    /// Compute the origin of a URL record
    pub fn of(url: &UrlRecord) -> Self {
        match url.scheme_type() {
            SchemeType::Ftp
            | SchemeType::Http
            | SchemeType::Https
            | SchemeType::Ws
            | SchemeType::Wss => match &url.host {
                Some(host) => Self::Tuple {
                    scheme: url.scheme.clone(),
                    host: host.clone(),
                    port: url.port,
                },
                None => Self::Opaque,
            },
            SchemeType::File => Self::Opaque,
            SchemeType::NotSpecial if url.scheme == "blob" => {
                // The origin of the URL the blob was created from
                match basic_url_parse(&url.serialize_path(), None, None) {
                    Ok(inner) if matches!(inner.scheme_type(), SchemeType::Http | SchemeType::Https) => {
                        Self::of(&inner)
                    }
                    _ => Self::Opaque,
                }
            }
            SchemeType::NotSpecial => Self::Opaque,
        }
    }

    pub fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple { .. })
    }

    /// Same-origin check: tuple origins compare by value, opaque origins
    /// never match
    pub fn same_origin(&self, other: &Self) -> bool {
        self.is_tuple() && self == other
    }

    /// `scheme://host[:port]`, or `null` for an opaque origin
    pub fn ascii_serialization(&self) -> String {
        match self {
            Self::Opaque => String::from("null"),
            Self::Tuple { scheme, host, port } => serialize_origin(scheme, host, *port),
        }
    }

    /// Like [`Origin::ascii_serialization`] with domains converted to Unicode
    pub fn unicode_serialization(&self) -> String {
        match self {
            Self::Tuple {
                scheme,
                host: Host::Domain(domain),
                port,
            } => serialize_origin(scheme, &Host::Domain(domain_to_unicode(domain)), *port),
            _ => self.ascii_serialization(),
        }
    }
}

impl core::fmt::Display for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.ascii_serialization())
    }
}

/// Serialize a tuple origin from its parts
pub fn serialize_origin(scheme: &str, host: &Host, port: Option<u16>) -> String {
    match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    }
}
