//! Host parsing and serialization.
//!
//! <https://url.spec.whatwg.org/#host-parsing>

use crate::character_sets::{
    contains_forbidden_domain_code_point, is_forbidden_host_code_point, is_url_code_point,
};
use crate::checkers::ends_in_a_number;
use crate::compat::{String, ToString, Vec};
use crate::error::{ParseError, Result, ValidationError, ValidationErrorHandler, report};
use crate::ipv4::{parse_ipv4, serialize_ipv4};
use crate::ipv6::{parse_ipv6, write_ipv6};
use crate::unicode::idna::{domain_to_ascii, domain_to_unicode};
use crate::unicode::percent_encode::{
    C0_CONTROL_SET, is_percent_escape, percent_decode_string, percent_encode_into,
};

/// A parsed host.
///
/// The empty host (`file:///x`) is `Domain("")`, which is distinct from
/// having no host at all (`Option::None` on the URL record).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Host {
    /// An ASCII (or, from [`parse_host_unicode`], Unicode) domain
    Domain(String),
    /// An IPv4 address as a 32-bit number
    Ipv4(u32),
    /// The eight 16-bit pieces of an IPv6 address
    Ipv6([u16; 8]),
    /// A percent-encoded host of a non-special URL
    Opaque(String),
}

impl Host {
    /// The empty host
    pub fn empty() -> Self {
        Self::Domain(String::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Domain(s) | Self::Opaque(s) if s.is_empty())
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

impl core::fmt::Display for Host {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Domain(s) | Self::Opaque(s) => f.write_str(s),
            Self::Ipv4(address) => f.write_str(&serialize_ipv4(*address)),
            Self::Ipv6(pieces) => {
                f.write_str("[")?;
                write_ipv6(f, pieces);
                f.write_str("]")
            }
        }
    }
}

/// Serialize a host: IPv4 dotted decimal, IPv6 in brackets, other hosts as-is
pub fn serialize_host(host: &Host) -> String {
    host.to_string()
}

/// Parse a host string.
///
/// `is_opaque` selects the opaque-host rules used by non-special URLs.
pub fn parse_host(input: &str, is_opaque: bool) -> Result<Host> {
    parse_host_with(input, is_opaque, None)
}

/// Like [`parse_host`], but converts domains back to Unicode.
pub fn parse_host_unicode(input: &str, is_opaque: bool) -> Result<Host> {
    match parse_host_with(input, is_opaque, None)? {
        Host::Domain(ascii) => Ok(Host::Domain(domain_to_unicode(&ascii))),
        host => Ok(host),
    }
}

pub(crate) fn parse_host_with(
    input: &str,
    is_opaque: bool,
    handler: Option<&dyn ValidationErrorHandler>,
) -> Result<Host> {
    if let Some(rest) = input.strip_prefix('[') {
        let Some(address) = rest.strip_suffix(']') else {
            report(handler, ValidationError::Ipv6Unclosed);
            return Err(ParseError::InvalidIpv6);
        };
        return parse_ipv6(address, handler).map(Host::Ipv6);
    }

    if is_opaque {
        return parse_opaque_host(input, handler);
    }

    // Percent-decode, then lossy UTF-8 decode (a BOM is kept)
    let decoded = percent_decode_string(input);
    let domain = String::from_utf8_lossy(&decoded);

    let ascii_domain = domain_to_ascii(&domain).inspect_err(|_| {
        report(handler, ValidationError::DomainToAscii);
    })?;

    if contains_forbidden_domain_code_point(&ascii_domain) {
        report(handler, ValidationError::DomainInvalidCodePoint);
        return Err(ParseError::InvalidDomainCharacter);
    }

    if ends_in_a_number(&ascii_domain)
        && let Some(address) = parse_ipv4(&ascii_domain, handler)?
    {
        return Ok(Host::Ipv4(address));
    }

    Ok(Host::Domain(ascii_domain))
}

/// <https://url.spec.whatwg.org/#concept-opaque-host-parser>
pub(crate) fn parse_opaque_host(
    input: &str,
    handler: Option<&dyn ValidationErrorHandler>,
) -> Result<Host> {
    if input.chars().any(is_forbidden_host_code_point) {
        report(handler, ValidationError::HostInvalidCodePoint);
        return Err(ParseError::InvalidHost);
    }

    if handler.is_some() || log::log_enabled!(target: "weburl::parser", log::Level::Trace) {
        let chars: Vec<char> = input.chars().collect();
        for (i, &c) in chars.iter().enumerate() {
            if c == '%' {
                if !is_percent_escape(&chars, i) {
                    report(handler, ValidationError::PercentEncodingInvalid);
                }
            } else if !is_url_code_point(c) {
                report(handler, ValidationError::InvalidUrlUnit);
            }
        }
    }

    let mut encoded = String::with_capacity(input.len());
    percent_encode_into(&mut encoded, input, C0_CONTROL_SET);
    Ok(Host::Opaque(encoded))
}

/// Host-parse `domain` and return the ASCII domain, or `""` when parsing
/// fails or the host is not a domain.
pub fn url_to_ascii(domain: &str) -> String {
    match parse_host(domain, false) {
        Ok(Host::Domain(ascii)) => ascii,
        _ => String::new(),
    }
}

/// Host-parse `domain` and return the Unicode domain, or `""` when parsing
/// fails or the host is not a domain.
pub fn url_to_unicode(domain: &str) -> String {
    match parse_host_unicode(domain, false) {
        Ok(Host::Domain(unicode)) => unicode,
        _ => String::new(),
    }
}
