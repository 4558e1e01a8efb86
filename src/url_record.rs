/// The URL record: the parsed, normalized components of a URL.
///
/// <https://url.spec.whatwg.org/#concept-url>
use crate::compat::{String, ToString, Vec};
use crate::host::Host;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_components::UrlComponents;

/// A URL path: a list of segments, or a single opaque string for URLs such
/// as `mailto:x` or `data:text/plain,hi`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UrlPath {
    Segments(Vec<String>),
    Opaque(String),
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::Segments(Vec::new())
    }
}

/// All components of a parsed URL.
///
/// `password` is `None` when the URL has no password component and
/// `Some("")` when it has an empty one (`http://user:@host/`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UrlRecord {
    pub scheme: String,
    pub username: String,
    pub password: Option<String>,
    pub host: Option<Host>,
    pub port: Option<u16>,
    pub path: UrlPath,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl UrlRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(&self.scheme)
    }

    pub fn is_special(&self) -> bool {
        self.scheme_type().is_special()
    }

    pub fn has_opaque_path(&self) -> bool {
        matches!(self.path, UrlPath::Opaque(_))
    }

    pub fn includes_credentials(&self) -> bool {
        !self.username.is_empty() || self.password.is_some()
    }

    /// A null or empty host, or the `file` scheme
    pub fn cannot_have_username_password_port(&self) -> bool {
        self.host.as_ref().is_none_or(Host::is_empty) || self.scheme_type().is_file()
    }

    /// Drop the last path segment, drive letters included
    pub fn shorten_path(&mut self) {
        if let UrlPath::Segments(segments) = &mut self.path {
            segments.pop();
        }
    }

    pub(crate) fn push_segment(&mut self, segment: String) {
        if let UrlPath::Segments(segments) = &mut self.path {
            segments.push(segment);
        }
    }

    pub(crate) fn path_segments(&self) -> &[String] {
        match &self.path {
            UrlPath::Segments(segments) => segments,
            UrlPath::Opaque(_) => &[],
        }
    }

    /// Serialize the URL, optionally without its fragment
    pub fn serialize(&self, exclude_fragment: bool) -> String {
        let (mut output, components) = UrlComponents::serialize(self);
        if exclude_fragment {
            output.truncate(components.hash_start as usize);
        }
        output
    }

    /// The opaque path, or each segment prefixed with `/`
    pub fn serialize_path(&self) -> String {
        match &self.path {
            UrlPath::Opaque(path) => path.clone(),
            UrlPath::Segments(segments) => {
                let mut output = String::new();
                for segment in segments {
                    output.push('/');
                    output.push_str(segment);
                }
                output
            }
        }
    }
}

impl core::fmt::Display for UrlRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize(false))
    }
}

/// Shortest decimal representation of an integer
pub fn serialize_integer(value: u32) -> String {
    value.to_string()
}
