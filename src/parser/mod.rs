mod machine;
mod state;

pub use state::State;

use crate::compat::Vec;
use crate::encoding::QueryEncoding;
use crate::error::{Result, ValidationError, ValidationErrorHandler};
use crate::helpers::{remove_tabs_and_newlines, trim_c0_control_or_space};
use crate::url_record::UrlRecord;
use machine::Machine;

/// Trait for types that can be parsed from URL strings
pub trait Parseable: Sized {
    /// Parse from input string with optional base URL
    fn parse(input: &str, base: Option<&str>) -> Result<Self>;
}

/// Parse a URL string into a URL type
pub fn parse<T: Parseable>(input: &str, base: Option<&str>) -> Result<T> {
    T::parse(input, base)
}

/// Run the basic URL parser on `input` and return a fresh record.
///
/// `encoding` is only honoured for the query of special, non-WebSocket URLs.
///
/// # Errors
///
/// Returns the first fatal error the parser hits.
pub fn basic_url_parse(
    input: &str,
    base: Option<&UrlRecord>,
    encoding: Option<&dyn QueryEncoding>,
) -> Result<UrlRecord> {
    parse_record(input, base, encoding, None)
}

/// Re-run part of the parser over an existing record, starting in
/// `state_override`. This is how the component setters work: the record is
/// edited in place and parsing stops at the end of the overridden component.
///
/// Leading and trailing C0 controls and spaces are kept; tabs and newlines
/// are still removed.
///
/// # Errors
///
/// Returns an error when the value is rejected. Components written before
/// the failure point stay written, so the `Url` setters run this on a copy.
pub fn basic_url_parse_with_override(
    input: &str,
    url: &mut UrlRecord,
    state_override: State,
) -> Result<()> {
    let input = remove_tabs_and_newlines(input, None);
    Machine::new(&input, url, None, None, None, Some(state_override)).run()
}

pub(crate) fn parse_record(
    input: &str,
    base: Option<&UrlRecord>,
    encoding: Option<&dyn QueryEncoding>,
    handler: Option<&dyn ValidationErrorHandler>,
) -> Result<UrlRecord> {
    let trimmed = trim_c0_control_or_space(input, handler);
    let input = remove_tabs_and_newlines(trimmed, handler);
    let mut url = UrlRecord::new();
    Machine::new(&input, &mut url, base, encoding, handler, None).run()?;
    Ok(url)
}

/// Parse and collect every validation error along the way
pub(crate) fn parse_record_collecting(
    input: &str,
    base: Option<&UrlRecord>,
) -> (Result<UrlRecord>, Vec<ValidationError>) {
    let errors = core::cell::RefCell::new(Vec::new());
    let handler = |error: ValidationError| errors.borrow_mut().push(error);
    let result = parse_record(input, base, None, Some(&handler));
    (result, errors.into_inner())
}
