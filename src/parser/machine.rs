//! The basic URL parser.
//!
//! <https://url.spec.whatwg.org/#concept-basic-url-parser>
//!
//! The input is decoded to code points and walked with a signed pointer.
//! Handlers may move the pointer backwards (`pointer -= 1` re-reads the
//! current code point in the next state), skip ahead, or reset it to -1 to
//! restart from the first code point. The driver re-reads the pointer after
//! every handler, so all of these compose.

use super::state::State;
use crate::character_sets::is_url_code_point;
use crate::checkers::{
    is_double_dot_segment, is_normalized_windows_drive_letter, is_single_dot_segment,
    is_windows_drive_letter, starts_with_windows_drive_letter,
};
use crate::compat::{String, Vec};
use crate::encoding::QueryEncoding;
use crate::error::{ParseError, Result, ValidationError, ValidationErrorHandler, report};
use crate::host::{Host, parse_host_with};
use crate::scheme::{default_port, is_special_scheme};
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, FRAGMENT_SET, PATH_SET, QUERY_SET, SPECIAL_QUERY_SET, USERINFO_SET,
    is_percent_escape, percent_encode_bytes_into, percent_encode_into, push_utf8_percent_encoded,
};
use crate::url_record::{UrlPath, UrlRecord};

/// What the driver does after a handler returns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Continue,
    /// Stop parsing; the record keeps what has been written so far
    Terminate,
}

pub(crate) struct Machine<'a> {
    input: Vec<char>,
    pointer: isize,
    state: State,
    state_override: Option<State>,
    buffer: String,
    at_sign_seen: bool,
    inside_brackets: bool,
    base: Option<&'a UrlRecord>,
    encoding: Option<&'a dyn QueryEncoding>,
    handler: Option<&'a dyn ValidationErrorHandler>,
    url: &'a mut UrlRecord,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(
        input: &str,
        url: &'a mut UrlRecord,
        base: Option<&'a UrlRecord>,
        encoding: Option<&'a dyn QueryEncoding>,
        handler: Option<&'a dyn ValidationErrorHandler>,
        state_override: Option<State>,
    ) -> Self {
        Self {
            input: input.chars().collect(),
            pointer: 0,
            state: state_override.unwrap_or(State::SchemeStart),
            state_override,
            buffer: String::new(),
            at_sign_seen: false,
            inside_brackets: false,
            base,
            encoding,
            handler,
            url,
        }
    }

    /// Run the state machine until end of input, early termination or failure
    pub(crate) fn run(mut self) -> Result<()> {
        let len = self.input.len() as isize;
        loop {
            let c = self.current();
            match self.step(c) {
                Ok(Step::Continue) => {}
                Ok(Step::Terminate) => return Ok(()),
                Err(error) => {
                    log::debug!(
                        target: "weburl::parser",
                        "parse failed in {:?} at code point {}: {error}",
                        self.state,
                        self.pointer
                    );
                    return Err(error);
                }
            }
            if self.pointer >= len {
                return Ok(());
            }
            self.pointer += 1;
        }
    }

    fn step(&mut self, c: Option<char>) -> Result<Step> {
        match self.state {
            State::SchemeStart => self.scheme_start(c),
            State::Scheme => self.scheme(c),
            State::NoScheme => self.no_scheme(c),
            State::SpecialRelativeOrAuthority => Ok(self.special_relative_or_authority(c)),
            State::PathOrAuthority => Ok(self.path_or_authority(c)),
            State::Relative => Ok(self.relative(c)),
            State::RelativeSlash => Ok(self.relative_slash(c)),
            State::SpecialAuthoritySlashes => Ok(self.special_authority_slashes(c)),
            State::SpecialAuthorityIgnoreSlashes => Ok(self.special_authority_ignore_slashes(c)),
            State::Authority => self.authority(c),
            State::Host | State::Hostname => self.host(c),
            State::Port => self.port(c),
            State::File => Ok(self.file(c)),
            State::FileSlash => Ok(self.file_slash(c)),
            State::FileHost => self.file_host(c),
            State::PathStart => Ok(self.path_start(c)),
            State::Path => Ok(self.path(c)),
            State::OpaquePath => Ok(self.opaque_path(c)),
            State::Query => Ok(self.query(c)),
            State::Fragment => Ok(self.fragment(c)),
        }
    }

    fn current(&self) -> Option<char> {
        usize::try_from(self.pointer)
            .ok()
            .and_then(|i| self.input.get(i).copied())
    }

    /// Code points after the current one
    fn remaining(&self) -> &[char] {
        let start = usize::try_from(self.pointer + 1).unwrap_or(0);
        self.input.get(start..).unwrap_or(&[])
    }

    /// Code points from the current one to the end
    fn from_pointer(&self) -> &[char] {
        let start = usize::try_from(self.pointer).unwrap_or(0);
        self.input.get(start..).unwrap_or(&[])
    }

    fn remaining_starts_with(&self, c: char) -> bool {
        self.remaining().first() == Some(&c)
    }

    fn validation(&self, error: ValidationError) {
        report(self.handler, error);
    }

    fn is_special(&self) -> bool {
        is_special_scheme(&self.url.scheme)
    }

    fn is_special_backslash(&self, c: Option<char>) -> bool {
        c == Some('\\') && self.is_special()
    }

    fn base_has_scheme(&self, scheme: &str) -> bool {
        self.base.is_some_and(|base| base.scheme == scheme)
    }

    /// Report stray `%` and non-URL code points. Never changes the result.
    fn check_url_unit(&self, c: char) {
        if self.handler.is_none() && !log::log_enabled!(target: "weburl::parser", log::Level::Trace)
        {
            return;
        }
        if c == '%' {
            let at = usize::try_from(self.pointer).unwrap_or(0);
            if !is_percent_escape(&self.input, at) {
                self.validation(ValidationError::PercentEncodingInvalid);
            }
        } else if !is_url_code_point(c) {
            self.validation(ValidationError::InvalidUrlUnit);
        }
    }

    fn parse_host(&self, input: &str) -> Result<Host> {
        parse_host_with(input, !self.is_special(), self.handler)
    }

    fn scheme_start(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_alphabetic() => {
                self.buffer.push(c.to_ascii_lowercase());
                self.state = State::Scheme;
            }
            _ if self.state_override.is_none() => {
                self.state = State::NoScheme;
                self.pointer -= 1;
            }
            _ => return Err(ParseError::InvalidScheme),
        }
        Ok(Step::Continue)
    }

    fn scheme(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some(c) if c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.') => {
                self.buffer.push(c.to_ascii_lowercase());
            }
            Some(':') => {
                if self.state_override.is_some() {
                    if self.is_special() != is_special_scheme(&self.buffer) {
                        return Ok(Step::Terminate);
                    }
                    if (self.url.includes_credentials() || self.url.port.is_some())
                        && self.buffer == "file"
                    {
                        return Ok(Step::Terminate);
                    }
                    if self.url.scheme == "file" && self.url.host.as_ref().is_some_and(Host::is_empty)
                    {
                        return Ok(Step::Terminate);
                    }
                }

                self.url.scheme = core::mem::take(&mut self.buffer);

                if self.state_override.is_some() {
                    if self.url.port.is_some() && self.url.port == default_port(&self.url.scheme) {
                        self.url.port = None;
                    }
                    return Ok(Step::Terminate);
                }

                if self.url.scheme == "file" {
                    if !self.remaining().starts_with(&['/', '/']) {
                        self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
                    }
                    self.state = State::File;
                } else if self.is_special() && self.base_has_scheme(&self.url.scheme) {
                    self.state = State::SpecialRelativeOrAuthority;
                } else if self.is_special() {
                    self.state = State::SpecialAuthoritySlashes;
                } else if self.remaining_starts_with('/') {
                    self.state = State::PathOrAuthority;
                    self.pointer += 1;
                } else {
                    self.url.path = UrlPath::Opaque(String::new());
                    self.state = State::OpaquePath;
                }
            }
            _ if self.state_override.is_none() => {
                // Not a scheme after all: start over without one
                self.buffer.clear();
                self.state = State::NoScheme;
                self.pointer = -1;
            }
            _ => return Err(ParseError::InvalidScheme),
        }
        Ok(Step::Continue)
    }

    fn no_scheme(&mut self, c: Option<char>) -> Result<Step> {
        let Some(base) = self.base else {
            self.validation(ValidationError::MissingSchemeNonRelativeUrl);
            return Err(if self.input.is_empty() {
                ParseError::EmptyInput
            } else {
                ParseError::RelativeUrlWithoutBase
            });
        };

        if base.has_opaque_path() {
            if c != Some('#') {
                self.validation(ValidationError::MissingSchemeNonRelativeUrl);
                return Err(ParseError::RelativeUrlWithOpaqueBase);
            }
            self.url.scheme.clone_from(&base.scheme);
            self.url.path = base.path.clone();
            self.url.query.clone_from(&base.query);
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        } else if base.scheme != "file" {
            self.state = State::Relative;
            self.pointer -= 1;
        } else {
            self.state = State::File;
            self.pointer -= 1;
        }
        Ok(Step::Continue)
    }

    fn special_relative_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') && self.remaining_starts_with('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer += 1;
        } else {
            self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
            self.state = State::Relative;
            self.pointer -= 1;
        }
        Step::Continue
    }

    fn path_or_authority(&mut self, c: Option<char>) -> Step {
        if c == Some('/') {
            self.state = State::Authority;
        } else {
            self.state = State::Path;
            self.pointer -= 1;
        }
        Step::Continue
    }

    fn copy_base_authority(&mut self) {
        if let Some(base) = self.base {
            self.url.username.clone_from(&base.username);
            self.url.password.clone_from(&base.password);
            self.url.host.clone_from(&base.host);
            self.url.port = base.port;
        }
    }

    fn relative(&mut self, c: Option<char>) -> Step {
        let Some(base) = self.base else {
            return Step::Continue;
        };
        self.url.scheme.clone_from(&base.scheme);

        if c == Some('/') {
            self.state = State::RelativeSlash;
        } else if self.is_special_backslash(c) {
            self.validation(ValidationError::InvalidReverseSolidus);
            self.state = State::RelativeSlash;
        } else {
            self.copy_base_authority();
            self.url.path = base.path.clone();
            self.url.query.clone_from(&base.query);
            match c {
                Some('?') => {
                    self.url.query = Some(String::new());
                    self.state = State::Query;
                }
                Some('#') => {
                    self.url.fragment = Some(String::new());
                    self.state = State::Fragment;
                }
                Some(_) => {
                    self.url.query = None;
                    self.url.shorten_path();
                    self.state = State::Path;
                    self.pointer -= 1;
                }
                None => {}
            }
        }
        Step::Continue
    }

    fn relative_slash(&mut self, c: Option<char>) -> Step {
        if self.is_special() && matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::SpecialAuthorityIgnoreSlashes;
        } else if c == Some('/') {
            self.state = State::Authority;
        } else {
            self.copy_base_authority();
            self.state = State::Path;
            self.pointer -= 1;
        }
        Step::Continue
    }

    fn special_authority_slashes(&mut self, c: Option<char>) -> Step {
        if c == Some('/') && self.remaining_starts_with('/') {
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer += 1;
        } else {
            self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
            self.state = State::SpecialAuthorityIgnoreSlashes;
            self.pointer -= 1;
        }
        Step::Continue
    }

    fn special_authority_ignore_slashes(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            self.validation(ValidationError::SpecialSchemeMissingFollowingSolidus);
        } else {
            self.state = State::Authority;
            self.pointer -= 1;
        }
        Step::Continue
    }

    fn authority(&mut self, c: Option<char>) -> Result<Step> {
        match c {
            Some('@') => {
                self.validation(ValidationError::InvalidCredentials);
                if self.at_sign_seen {
                    self.buffer.insert_str(0, "%40");
                }
                self.at_sign_seen = true;

                let buffer = core::mem::take(&mut self.buffer);
                for code_point in buffer.chars() {
                    if let Some(password) = &mut self.url.password {
                        push_utf8_percent_encoded(password, code_point, USERINFO_SET);
                    } else if code_point == ':' {
                        // The first ':' starts a password, even an empty one
                        self.url.password = Some(String::new());
                    } else {
                        push_utf8_percent_encoded(&mut self.url.username, code_point, USERINFO_SET);
                    }
                }
            }
            None | Some('/' | '?' | '#') => return Ok(self.end_authority()),
            Some('\\') if self.is_special() => return Ok(self.end_authority()),
            Some(c) => self.buffer.push(c),
        }
        Ok(Step::Continue)
    }

    fn end_authority(&mut self) -> Step {
        // Rewind to the first code point of the host
        self.pointer -= self.buffer.chars().count() as isize + 1;
        self.buffer.clear();
        self.state = State::Host;
        Step::Continue
    }

    fn host(&mut self, c: Option<char>) -> Result<Step> {
        if self.state_override.is_some() && self.url.scheme == "file" {
            self.pointer -= 1;
            self.state = State::FileHost;
            return Ok(Step::Continue);
        }

        let at_end =
            matches!(c, None | Some('/' | '?' | '#')) || self.is_special_backslash(c);

        if c == Some(':') && !self.inside_brackets {
            if self.is_special() && self.buffer.is_empty() {
                self.validation(ValidationError::HostMissing);
                return Err(ParseError::HostMissing);
            }
            let host = self.parse_host(&self.buffer)?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::Port;
            // The hostname setter stops before the port
            if self.state_override == Some(State::Hostname) {
                return Ok(Step::Terminate);
            }
        } else if at_end {
            self.pointer -= 1;
            if self.is_special() && self.buffer.is_empty() {
                self.validation(ValidationError::HostMissing);
                return Err(ParseError::EmptyHost);
            }
            let host = self.parse_host(&self.buffer)?;
            self.url.host = Some(host);
            self.buffer.clear();
            self.state = State::PathStart;
            if self.state_override.is_some() {
                return Ok(Step::Terminate);
            }
        } else if let Some(c) = c {
            match c {
                '[' => self.inside_brackets = true,
                ']' => self.inside_brackets = false,
                _ => {}
            }
            self.buffer.push(c);
        }
        Ok(Step::Continue)
    }

    fn port(&mut self, c: Option<char>) -> Result<Step> {
        let at_end =
            matches!(c, None | Some('/' | '?' | '#')) || self.is_special_backslash(c);

        match c {
            Some(digit) if digit.is_ascii_digit() => self.buffer.push(digit),
            _ if at_end || self.state_override.is_some() => {
                if !self.buffer.is_empty() {
                    let port = self.buffer.bytes().fold(0u32, |acc, b| {
                        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
                    });
                    let Ok(port) = u16::try_from(port) else {
                        self.validation(ValidationError::PortOutOfRange);
                        return Err(ParseError::InvalidPort);
                    };
                    self.url.port = if default_port(&self.url.scheme) == Some(port) {
                        None
                    } else {
                        Some(port)
                    };
                    self.buffer.clear();
                }
                if self.state_override.is_some() {
                    return Ok(Step::Terminate);
                }
                self.state = State::PathStart;
                self.pointer -= 1;
            }
            _ => {
                self.validation(ValidationError::PortInvalid);
                return Err(ParseError::InvalidPort);
            }
        }
        Ok(Step::Continue)
    }

    fn file(&mut self, c: Option<char>) -> Step {
        self.url.scheme = String::from("file");
        self.url.host = Some(Host::empty());

        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileSlash;
            return Step::Continue;
        }

        match self.base.filter(|base| base.scheme == "file") {
            Some(base) => {
                self.url.host.clone_from(&base.host);
                self.url.path = base.path.clone();
                self.url.query.clone_from(&base.query);
                match c {
                    Some('?') => {
                        self.url.query = Some(String::new());
                        self.state = State::Query;
                    }
                    Some('#') => {
                        self.url.fragment = Some(String::new());
                        self.state = State::Fragment;
                    }
                    Some(_) => {
                        self.url.query = None;
                        if starts_with_windows_drive_letter(self.from_pointer()) {
                            self.validation(ValidationError::FileInvalidWindowsDriveLetter);
                            self.url.path = UrlPath::default();
                        } else {
                            self.url.shorten_path();
                        }
                        self.state = State::Path;
                        self.pointer -= 1;
                    }
                    None => {}
                }
            }
            None => {
                self.state = State::Path;
                self.pointer -= 1;
            }
        }
        Step::Continue
    }

    fn file_slash(&mut self, c: Option<char>) -> Step {
        if matches!(c, Some('/' | '\\')) {
            if c == Some('\\') {
                self.validation(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::FileHost;
            return Step::Continue;
        }

        if let Some(base) = self.base.filter(|base| base.scheme == "file") {
            self.url.host.clone_from(&base.host);
            if !starts_with_windows_drive_letter(self.from_pointer())
                && let Some(first) = base.path_segments().first()
                && is_normalized_windows_drive_letter(first)
            {
                self.url.push_segment(first.clone());
            }
        }
        self.state = State::Path;
        self.pointer -= 1;
        Step::Continue
    }

    fn file_host(&mut self, c: Option<char>) -> Result<Step> {
        let Some(c) = c.filter(|&c| !matches!(c, '/' | '\\' | '?' | '#')) else {
            self.pointer -= 1;

            if self.state_override.is_none() && is_windows_drive_letter(&self.buffer) {
                // The buffer is kept and becomes the first path segment
                self.validation(ValidationError::FileInvalidWindowsDriveLetterHost);
                self.state = State::Path;
            } else if self.buffer.is_empty() {
                self.url.host = Some(Host::empty());
                if self.state_override.is_some() {
                    return Ok(Step::Terminate);
                }
                self.state = State::PathStart;
            } else {
                let mut host = self.parse_host(&self.buffer)?;
                if host == Host::Domain(String::from("localhost")) {
                    host = Host::empty();
                }
                self.url.host = Some(host);
                if self.state_override.is_some() {
                    return Ok(Step::Terminate);
                }
                self.buffer.clear();
                self.state = State::PathStart;
            }
            return Ok(Step::Continue);
        };

        self.buffer.push(c);
        Ok(Step::Continue)
    }

    fn path_start(&mut self, c: Option<char>) -> Step {
        if self.is_special() {
            if c == Some('\\') {
                self.validation(ValidationError::InvalidReverseSolidus);
            }
            self.state = State::Path;
            if !matches!(c, Some('/' | '\\')) {
                self.pointer -= 1;
            }
        } else if self.state_override.is_none() && c == Some('?') {
            self.url.query = Some(String::new());
            self.state = State::Query;
        } else if self.state_override.is_none() && c == Some('#') {
            self.url.fragment = Some(String::new());
            self.state = State::Fragment;
        } else if let Some(c) = c {
            self.state = State::Path;
            if c != '/' {
                self.pointer -= 1;
            }
        } else if self.state_override.is_some() && self.url.host.is_none() {
            self.url.push_segment(String::new());
        }
        Step::Continue
    }

    fn path(&mut self, c: Option<char>) -> Step {
        let special_backslash = self.is_special_backslash(c);
        let is_separator = c == Some('/') || special_backslash;
        let at_end = c.is_none()
            || is_separator
            || (self.state_override.is_none() && matches!(c, Some('?' | '#')));

        let Some(code_point) = c.filter(|_| !at_end) else {
            if special_backslash {
                self.validation(ValidationError::InvalidReverseSolidus);
            }

            if is_double_dot_segment(&self.buffer) {
                self.url.shorten_path();
                if !is_separator {
                    self.url.push_segment(String::new());
                }
            } else if is_single_dot_segment(&self.buffer) {
                if !is_separator {
                    self.url.push_segment(String::new());
                }
            } else {
                if self.url.scheme == "file"
                    && self.url.path_segments().is_empty()
                    && is_windows_drive_letter(&self.buffer)
                    && !is_normalized_windows_drive_letter(&self.buffer)
                {
                    // "c|" becomes "c:" and the drive letter replaces any host
                    if self.url.host.take().is_some() {
                        self.validation(ValidationError::FileInvalidWindowsDriveLetterHost);
                    }
                    self.buffer.replace_range(1..2, ":");
                }
                let segment = core::mem::take(&mut self.buffer);
                self.url.push_segment(segment);
            }
            self.buffer.clear();

            match c {
                Some('?') => {
                    self.url.query = Some(String::new());
                    self.state = State::Query;
                }
                Some('#') => {
                    self.url.fragment = Some(String::new());
                    self.state = State::Fragment;
                }
                _ => {}
            }
            return Step::Continue;
        };

        self.check_url_unit(code_point);
        push_utf8_percent_encoded(&mut self.buffer, code_point, PATH_SET);
        Step::Continue
    }

    fn opaque_path(&mut self, c: Option<char>) -> Step {
        match c {
            Some('?') => {
                self.url.query = Some(String::new());
                self.state = State::Query;
            }
            Some('#') => {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
            Some(c) => {
                self.check_url_unit(c);
                if let UrlPath::Opaque(path) = &mut self.url.path {
                    push_utf8_percent_encoded(path, c, C0_CONTROL_SET);
                }
            }
            None => {}
        }
        Step::Continue
    }

    fn query(&mut self, c: Option<char>) -> Step {
        if c.is_none() || (self.state_override.is_none() && c == Some('#')) {
            self.flush_query();
            if c == Some('#') {
                self.url.fragment = Some(String::new());
                self.state = State::Fragment;
            }
        } else if let Some(c) = c {
            self.check_url_unit(c);
            self.buffer.push(c);
        }
        Step::Continue
    }

    fn flush_query(&mut self) {
        let scheme_type = self.url.scheme_type();
        let encode_set = if scheme_type.is_special() {
            SPECIAL_QUERY_SET
        } else {
            QUERY_SET
        };

        // Non-special and WebSocket URLs always use UTF-8
        let encoding = self
            .encoding
            .filter(|encoding| !encoding.is_utf8() && scheme_type.honours_query_encoding());

        let query = self.url.query.get_or_insert_with(String::new);
        match encoding {
            Some(encoding) => {
                let bytes = encoding.encode(&self.buffer);
                percent_encode_bytes_into(query, &bytes, encode_set);
            }
            None => percent_encode_into(query, &self.buffer, encode_set),
        }
        self.buffer.clear();
    }

    fn fragment(&mut self, c: Option<char>) -> Step {
        match c {
            // NUL is reported and left out
            Some('\0') => self.validation(ValidationError::InvalidUrlUnit),
            Some(c) => {
                self.check_url_unit(c);
                let fragment = self.url.fragment.get_or_insert_with(String::new);
                push_utf8_percent_encoded(fragment, c, FRAGMENT_SET);
            }
            None => {}
        }
        Step::Continue
    }
}
