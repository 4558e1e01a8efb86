use crate::compat::{String, Vec, format};
use crate::encoding::QueryEncoding;
use crate::error::{ParseError, Result, ValidationError, ValidationErrorHandler};
use crate::origin::Origin;
use crate::parser::{Parseable, State, basic_url_parse_with_override, parse_record, parse_record_collecting};
use crate::types::SchemeType;
use crate::unicode::percent_encode::{USERINFO_SET, utf8_percent_encode_string};
use crate::url_components::UrlComponents;
use crate::url_record::{UrlPath, UrlRecord};
use crate::url_search_params::UrlSearchParams;

/// A parsed URL together with its serialization.
///
/// The record is the source of truth; `serialization` and `components` are
/// rebuilt after every mutation so the getters can return slices of the href
/// without allocating.
///
/// ```
/// use weburl::Url;
///
/// let url = Url::parse("HTTP://EXAMPLE.com:80/a/../b?q#f", None).unwrap();
/// assert_eq!(url.href(), "http://example.com/b?q#f");
/// assert_eq!(url.host(), "example.com");
/// assert_eq!(url.search(), "?q");
/// ```
#[derive(Debug, Clone)]
pub struct Url {
    record: UrlRecord,
    serialization: String,
    components: UrlComponents,
}

impl Url {
    fn from_record(record: UrlRecord) -> Self {
        let (serialization, components) = UrlComponents::serialize(&record);
        Self {
            record,
            serialization,
            components,
        }
    }

    /// Parse `input`, resolving it against `base` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidBase`] if `base` does not parse, otherwise
    /// the first fatal error hit while parsing `input`.
    pub fn parse(input: &str, base: Option<&str>) -> Result<Self> {
        let base = match base {
            Some(base) => {
                Some(parse_record(base, None, None, None).map_err(|_| ParseError::InvalidBase)?)
            }
            None => None,
        };
        parse_record(input, base.as_ref(), None, None).map(Self::from_record)
    }

    /// Parse `input` relative to an already parsed URL
    ///
    /// # Errors
    ///
    /// Returns the first fatal error hit while parsing `input`.
    pub fn parse_with_base(input: &str, base: &Url) -> Result<Self> {
        parse_record(input, Some(&base.record), None, None).map(Self::from_record)
    }

    /// Parse and return every validation error reported along the way.
    ///
    /// Validation errors never change the result; a URL can be both valid
    /// to parse and carry a list of them.
    pub fn parse_with_validation(
        input: &str,
        base: Option<&Url>,
    ) -> (Result<Self>, Vec<ValidationError>) {
        let (result, errors) = parse_record_collecting(input, base.map(|base| &base.record));
        (result.map(Self::from_record), errors)
    }

    /// Check if a URL string can be parsed
    ///
    /// ```
    /// use weburl::Url;
    ///
    /// assert!(Url::can_parse("http://example.com", None));
    /// assert!(Url::can_parse("/path", Some("http://example.com")));
    /// assert!(!Url::can_parse("not a url", None));
    /// ```
    pub fn can_parse(input: &str, base: Option<&str>) -> bool {
        Self::parse(input, base).is_ok()
    }

    /// Start building a parse with a base, a query encoding or a validation
    /// error handler.
    pub fn options<'a>() -> ParseOptions<'a> {
        ParseOptions::default()
    }

    /// The underlying URL record
    pub fn record(&self) -> &UrlRecord {
        &self.record
    }

    pub fn into_record(self) -> UrlRecord {
        self.record
    }

    pub fn scheme_type(&self) -> SchemeType {
        self.record.scheme_type()
    }

    /// Rebuild the serialization and report whether the href changed
    fn refresh(&mut self) -> bool {
        let (serialization, components) = UrlComponents::serialize(&self.record);
        let changed = serialization != self.serialization;
        self.serialization = serialization;
        self.components = components;
        changed
    }

    fn reparse(&mut self, input: &str, state: State) -> bool {
        self.reparse_with(input, state, |_| {})
    }

    /// Re-run the parser from `state` over a copy of the record.
    ///
    /// `prepare` runs on the copy first. The copy replaces the record only
    /// if the parser accepts the whole value, so a rejected value leaves the
    /// URL exactly as it was.
    fn reparse_with(
        &mut self,
        input: &str,
        state: State,
        prepare: impl FnOnce(&mut UrlRecord),
    ) -> bool {
        let mut scratch = self.record.clone();
        prepare(&mut scratch);
        match basic_url_parse_with_override(input, &mut scratch, state) {
            Ok(()) => {
                self.record = scratch;
                self.refresh()
            }
            Err(error) => {
                log::debug!(target: "weburl::url", "{state:?} setter rejected {input:?}: {error}");
                false
            }
        }
    }

    /// Drop trailing spaces from an opaque path once nothing follows it
    fn strip_trailing_spaces_from_opaque_path(&mut self) {
        if self.record.fragment.is_some() || self.record.query.is_some() {
            return;
        }
        if let UrlPath::Opaque(path) = &mut self.record.path {
            let trimmed = path.trim_end_matches(' ').len();
            path.truncate(trimmed);
        }
    }

    fn component(&self, start: u32, end: u32) -> &str {
        self.serialization
            .get(start as usize..end as usize)
            .unwrap_or("")
    }

    pub fn href(&self) -> &str {
        &self.serialization
    }

    /// Get the protocol (e.g., "http:")
    pub fn protocol(&self) -> &str {
        self.component(0, self.components.protocol_end)
    }

    pub fn username(&self) -> &str {
        &self.record.username
    }

    pub fn password(&self) -> &str {
        self.record.password.as_deref().unwrap_or("")
    }

    /// Get the host including port (e.g., "example.com:8080")
    pub fn host(&self) -> &str {
        if self.record.host.is_none() {
            return "";
        }
        self.component(self.components.host_start, self.components.port_end)
    }

    /// Get the hostname without port (e.g., "example.com", "[::1]")
    pub fn hostname(&self) -> &str {
        self.component(self.components.host_start, self.components.host_end)
    }

    /// Get the port as string, or empty string if there is none
    pub fn port(&self) -> &str {
        self.component(self.components.port_start(), self.components.port_end)
    }

    /// Get the pathname (e.g., "/path/to/page")
    pub fn pathname(&self) -> &str {
        self.component(self.components.pathname_start, self.components.search_start)
    }

    /// Get the search string with its `?`, or empty string for a null or
    /// empty query
    pub fn search(&self) -> &str {
        match self.record.query.as_deref() {
            None | Some("") => "",
            Some(_) => self.component(self.components.search_start, self.components.hash_start),
        }
    }

    /// Get the hash with its `#`, or empty string for a null or empty fragment
    pub fn hash(&self) -> &str {
        match self.record.fragment.as_deref() {
            None | Some("") => "",
            Some(_) => self.component(self.components.hash_start, self.components.end),
        }
    }

    /// ASCII serialization of the origin, "null" when opaque
    pub fn origin(&self) -> String {
        Origin::of(&self.record).ascii_serialization()
    }

    /// Replace the whole URL
    ///
    /// # Errors
    ///
    /// Returns the parse error and leaves the URL untouched if `href` does
    /// not parse.
    pub fn set_href(&mut self, href: &str) -> Result<()> {
        *self = Self::from_record(parse_record(href, None, None, None)?);
        Ok(())
    }

    /// Set the scheme. Switching between special and non-special schemes,
    /// or giving a URL with credentials or a port the `file` scheme, is
    /// rejected.
    pub fn set_protocol(&mut self, protocol: &str) -> bool {
        self.reparse(&format!("{protocol}:"), State::SchemeStart)
    }

    pub fn set_username(&mut self, username: &str) -> bool {
        if self.record.cannot_have_username_password_port() {
            return false;
        }
        self.record.username = utf8_percent_encode_string(username, USERINFO_SET, false);
        self.refresh()
    }

    /// Set the password. The empty string leaves an empty password in
    /// place, serialized as `user:@host`.
    pub fn set_password(&mut self, password: &str) -> bool {
        if self.record.cannot_have_username_password_port() {
            return false;
        }
        self.record.password = Some(utf8_percent_encode_string(password, USERINFO_SET, false));
        self.refresh()
    }

    /// Set the host and, when the value carries one, the port
    pub fn set_host(&mut self, host: &str) -> bool {
        if self.record.has_opaque_path() {
            return false;
        }
        self.reparse(host, State::Host)
    }

    pub fn set_hostname(&mut self, hostname: &str) -> bool {
        if self.record.has_opaque_path() {
            return false;
        }
        self.reparse(hostname, State::Hostname)
    }

    /// Set the port; the empty string removes it
    pub fn set_port(&mut self, port: &str) -> bool {
        if self.record.cannot_have_username_password_port() {
            return false;
        }
        if port.is_empty() {
            self.record.port = None;
            return self.refresh();
        }
        self.reparse(port, State::Port)
    }

    pub fn set_pathname(&mut self, pathname: &str) -> bool {
        if self.record.has_opaque_path() {
            return false;
        }
        self.reparse_with(pathname, State::PathStart, |record| {
            record.path = UrlPath::default();
        })
    }

    /// Set the query. A leading `?` is ignored; the empty string removes the
    /// query.
    pub fn set_search(&mut self, search: &str) {
        if search.is_empty() {
            self.record.query = None;
            self.strip_trailing_spaces_from_opaque_path();
            self.refresh();
            return;
        }
        let input = search.strip_prefix('?').unwrap_or(search);
        self.reparse_with(input, State::Query, |record| {
            record.query = Some(String::new());
        });
    }

    /// Set the fragment. A leading `#` is ignored; the empty string removes
    /// the fragment.
    pub fn set_hash(&mut self, hash: &str) {
        if hash.is_empty() {
            self.record.fragment = None;
            self.strip_trailing_spaces_from_opaque_path();
            self.refresh();
            return;
        }
        let input = hash.strip_prefix('#').unwrap_or(hash);
        self.reparse_with(input, State::Fragment, |record| {
            record.fragment = Some(String::new());
        });
    }

    /// Snapshot of the query as name/value pairs
    pub fn search_params(&self) -> UrlSearchParams {
        UrlSearchParams::parse(self.record.query.as_deref().unwrap_or(""))
    }

    /// Replace the query with the serialization of `params`.
    /// An empty list removes the query altogether.
    pub fn set_search_params(&mut self, params: &UrlSearchParams) {
        let query = params.to_string();
        if query.is_empty() {
            self.record.query = None;
            self.strip_trailing_spaces_from_opaque_path();
        } else {
            self.record.query = Some(query);
        }
        self.refresh();
    }

    pub fn has_credentials(&self) -> bool {
        self.record.includes_credentials()
    }

    pub fn has_hostname(&self) -> bool {
        self.record.host.is_some()
    }

    pub fn has_empty_hostname(&self) -> bool {
        self.record.host.as_ref().is_some_and(|host| host.is_empty())
    }

    pub fn has_port(&self) -> bool {
        self.record.port.is_some()
    }

    pub fn has_search(&self) -> bool {
        self.record.query.is_some()
    }

    pub fn has_hash(&self) -> bool {
        self.record.fragment.is_some()
    }

    pub fn has_opaque_path(&self) -> bool {
        self.record.has_opaque_path()
    }

    /// The JSON form of a URL is its href
    pub fn to_json(&self) -> String {
        self.serialization.clone()
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.serialization == other.serialization
    }
}

impl Eq for Url {}

impl core::hash::Hash for Url {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.serialization.hash(state);
    }
}

impl core::fmt::Display for Url {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialization)
    }
}

impl core::str::FromStr for Url {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, None)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.serialization
    }
}

impl From<UrlRecord> for Url {
    fn from(record: UrlRecord) -> Self {
        Self::from_record(record)
    }
}

impl Parseable for Url {
    fn parse(input: &str, base: Option<&str>) -> Result<Self> {
        Self::parse(input, base)
    }
}

/// Full control over a parse.
///
/// ```
/// use weburl::{Url, ValidationError};
/// use std::cell::RefCell;
///
/// let base = Url::parse("https://example.org/dir/", None).unwrap();
/// let errors = RefCell::new(Vec::new());
/// let report = |e: ValidationError| errors.borrow_mut().push(e);
/// let url = Url::options()
///     .base_url(Some(&base))
///     .validation_error_handler(Some(&report))
///     .parse("..\\file")
///     .unwrap();
/// assert_eq!(url.href(), "https://example.org/file");
/// assert_eq!(errors.into_inner(), [ValidationError::InvalidReverseSolidus]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    base_url: Option<&'a Url>,
    encoding_override: Option<&'a dyn QueryEncoding>,
    validation_error_handler: Option<&'a dyn ValidationErrorHandler>,
}

impl<'a> ParseOptions<'a> {
    /// Resolve relative input against this URL
    #[must_use]
    pub fn base_url(mut self, base: Option<&'a Url>) -> Self {
        self.base_url = base;
        self
    }

    /// Encode the query of special URLs with this encoding instead of UTF-8
    #[must_use]
    pub fn encoding_override(mut self, encoding: Option<&'a dyn QueryEncoding>) -> Self {
        self.encoding_override = encoding;
        self
    }

    /// Receive every validation error the parser reports
    #[must_use]
    pub fn validation_error_handler(
        mut self,
        handler: Option<&'a dyn ValidationErrorHandler>,
    ) -> Self {
        self.validation_error_handler = handler;
        self
    }

    /// Parse `input` with these options
    ///
    /// # Errors
    ///
    /// Returns the first fatal error hit while parsing `input`.
    pub fn parse(self, input: &str) -> Result<Url> {
        parse_record(
            input,
            self.base_url.map(|base| &base.record),
            self.encoding_override,
            self.validation_error_handler,
        )
        .map(Url::from_record)
    }
}

impl core::fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParseOptions")
            .field("base_url", &self.base_url)
            .field("encoding_override", &self.encoding_override.is_some())
            .field(
                "validation_error_handler",
                &self.validation_error_handler.is_some(),
            )
            .finish()
    }
}
