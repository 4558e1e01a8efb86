/// Fatal errors: the input cannot produce a URL record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input was empty (after trimming) and no base was given
    EmptyInput,
    /// Invalid scheme, or a scheme setter value that is not a scheme
    InvalidScheme,
    /// Relative URL without base
    RelativeUrlWithoutBase,
    /// Relative URL against a base with an opaque path
    RelativeUrlWithOpaqueBase,
    /// Special URL with an empty host
    EmptyHost,
    /// Credentials were given but the host is missing
    HostMissing,
    /// Opaque host contains a forbidden host code point
    InvalidHost,
    /// Domain contains a forbidden domain code point
    InvalidDomainCharacter,
    /// IDNA processing error
    IdnaError,
    /// Invalid IPv4 address
    InvalidIpv4,
    /// Invalid IPv6 address
    InvalidIpv6,
    /// Port is out of range or contains a non-digit
    InvalidPort,
    /// The base URL itself failed to parse
    InvalidBase,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::RelativeUrlWithoutBase => "Relative URL without base",
            Self::RelativeUrlWithOpaqueBase => "Relative URL with a base that has an opaque path",
            Self::EmptyHost => "Empty host",
            Self::HostMissing => "Host missing after credentials",
            Self::InvalidHost => "Invalid host",
            Self::InvalidDomainCharacter => "Invalid domain character",
            Self::IdnaError => "IDNA processing error",
            Self::InvalidIpv4 => "Invalid IPv4 address",
            Self::InvalidIpv6 => "Invalid IPv6 address",
            Self::InvalidPort => "Invalid port",
            Self::InvalidBase => "Invalid base URL",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URL parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;

/// Non-fatal deviations from the URL grammar.
///
/// These never change the parse result. They are reported through
/// [`ValidationErrorHandler`] and logged at trace level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    LeadingOrTrailingControlOrSpace,
    TabOrNewline,
    InvalidUrlUnit,
    PercentEncodingInvalid,
    SpecialSchemeMissingFollowingSolidus,
    MissingSchemeNonRelativeUrl,
    InvalidReverseSolidus,
    InvalidCredentials,
    HostMissing,
    PortOutOfRange,
    PortInvalid,
    FileInvalidWindowsDriveLetter,
    FileInvalidWindowsDriveLetterHost,
    DomainToAscii,
    DomainInvalidCodePoint,
    HostInvalidCodePoint,
    Ipv4EmptyPart,
    Ipv4TooManyParts,
    Ipv4NonNumericPart,
    Ipv4NonDecimalPart,
    Ipv4OutOfRangePart,
    Ipv6Unclosed,
    Ipv6InvalidCompression,
    Ipv6TooManyPieces,
    Ipv6MultipleCompression,
    Ipv6InvalidCodePoint,
    Ipv6TooFewPieces,
    Ipv4InIpv6TooManyPieces,
    Ipv4InIpv6InvalidCodePoint,
    Ipv4InIpv6OutOfRangePart,
    Ipv4InIpv6TooFewParts,
}

impl ValidationError {
    /// The name the URL Standard uses for this validation error
    pub fn name(self) -> &'static str {
        match self {
            Self::LeadingOrTrailingControlOrSpace => "leading-or-trailing-c0-control-or-space",
            Self::TabOrNewline => "tab-or-newline",
            Self::InvalidUrlUnit => "invalid-URL-unit",
            Self::PercentEncodingInvalid => "percent-encoding-invalid",
            Self::SpecialSchemeMissingFollowingSolidus => {
                "special-scheme-missing-following-solidus"
            }
            Self::MissingSchemeNonRelativeUrl => "missing-scheme-non-relative-URL",
            Self::InvalidReverseSolidus => "invalid-reverse-solidus",
            Self::InvalidCredentials => "invalid-credentials",
            Self::HostMissing => "host-missing",
            Self::PortOutOfRange => "port-out-of-range",
            Self::PortInvalid => "port-invalid",
            Self::FileInvalidWindowsDriveLetter => "file-invalid-Windows-drive-letter",
            Self::FileInvalidWindowsDriveLetterHost => "file-invalid-Windows-drive-letter-host",
            Self::DomainToAscii => "domain-to-ASCII",
            Self::DomainInvalidCodePoint => "domain-invalid-code-point",
            Self::HostInvalidCodePoint => "host-invalid-code-point",
            Self::Ipv4EmptyPart => "IPv4-empty-part",
            Self::Ipv4TooManyParts => "IPv4-too-many-parts",
            Self::Ipv4NonNumericPart => "IPv4-non-numeric-part",
            Self::Ipv4NonDecimalPart => "IPv4-non-decimal-part",
            Self::Ipv4OutOfRangePart => "IPv4-out-of-range-part",
            Self::Ipv6Unclosed => "IPv6-unclosed",
            Self::Ipv6InvalidCompression => "IPv6-invalid-compression",
            Self::Ipv6TooManyPieces => "IPv6-too-many-pieces",
            Self::Ipv6MultipleCompression => "IPv6-multiple-compression",
            Self::Ipv6InvalidCodePoint => "IPv6-invalid-code-point",
            Self::Ipv6TooFewPieces => "IPv6-too-few-pieces",
            Self::Ipv4InIpv6TooManyPieces => "IPv4-in-IPv6-too-many-pieces",
            Self::Ipv4InIpv6InvalidCodePoint => "IPv4-in-IPv6-invalid-code-point",
            Self::Ipv4InIpv6OutOfRangePart => "IPv4-in-IPv6-out-of-range-part",
            Self::Ipv4InIpv6TooFewParts => "IPv4-in-IPv6-too-few-parts",
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Receiver for non-fatal validation errors.
///
/// Implemented for any `Fn(ValidationError)` closure, so a handler can be as
/// small as `&|e| eprintln!("{e}")`.
pub trait ValidationErrorHandler {
    fn report(&self, error: ValidationError);
}

impl<F> ValidationErrorHandler for F
where
    F: Fn(ValidationError),
{
    fn report(&self, error: ValidationError) {
        self(error);
    }
}

/// Forward a validation error to the log and, if present, to a handler.
pub(crate) fn report(handler: Option<&dyn ValidationErrorHandler>, error: ValidationError) {
    log::trace!(target: "weburl::parser", "validation error: {error}");
    if let Some(handler) = handler {
        handler.report(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    #[test]
    fn test_display() {
        assert_eq!(ParseError::InvalidPort.to_string(), "Invalid port");
        assert_eq!(
            ValidationError::Ipv4EmptyPart.to_string(),
            "IPv4-empty-part"
        );
    }

    #[test]
    fn test_closure_handler() {
        let count = Cell::new(0);
        let handler = |_: ValidationError| count.set(count.get() + 1);
        report(Some(&handler), ValidationError::TabOrNewline);
        report(None, ValidationError::TabOrNewline);
        assert_eq!(count.get(), 1);
    }
}
