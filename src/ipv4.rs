/// IPv4 address parser supporting decimal, octal, and hexadecimal notation
/// Follows the WHATWG URL Standard
use crate::compat::{String, Vec, format};
use crate::error::{ParseError, Result, ValidationError, ValidationErrorHandler, report};

/// Parse an IPv4 address string into a u32.
/// Supports:
/// - Decimal: 192.168.1.1
/// - Hex: 0xC0A80101
/// - Octal: 0300.0250.01.01
/// - Mixed: 192.0x00A80001
/// - Shortened forms: 127.1, 0x7f000001
///
/// Only called on input that ends in a number. More than four parts is not
/// an address at all: `Ok(None)` tells the host parser to keep the domain.
pub fn parse_ipv4(
    input: &str,
    handler: Option<&dyn ValidationErrorHandler>,
) -> Result<Option<u32>> {
    let mut parts: Vec<&str> = input.split('.').collect();

    // A single trailing dot is allowed
    if parts.last().is_some_and(|last| last.is_empty()) {
        report(handler, ValidationError::Ipv4EmptyPart);
        if parts.len() > 1 {
            parts.pop();
        }
    }

    if parts.len() > 4 {
        report(handler, ValidationError::Ipv4TooManyParts);
        return Ok(None);
    }

    let mut numbers: Vec<u64> = Vec::with_capacity(parts.len());
    for part in &parts {
        // An empty label between dots counts as zero
        if part.is_empty() {
            report(handler, ValidationError::Ipv4EmptyPart);
            numbers.push(0);
            continue;
        }
        let Some((number, non_decimal)) = parse_ipv4_number(part) else {
            report(handler, ValidationError::Ipv4NonNumericPart);
            return Err(ParseError::InvalidIpv4);
        };
        if non_decimal {
            report(handler, ValidationError::Ipv4NonDecimalPart);
        }
        numbers.push(number);
    }

    if numbers.iter().any(|&n| n > 255) {
        report(handler, ValidationError::Ipv4OutOfRangePart);
    }

    let Some((&last, init)) = numbers.split_last() else {
        return Err(ParseError::InvalidIpv4);
    };

    // All but the last number must fit in a byte
    if init.iter().any(|&n| n > 255) {
        return Err(ParseError::InvalidIpv4);
    }

    // The last number fills the remaining 5 - n bytes
    if last >= 256u64.pow((5 - numbers.len()) as u32) {
        return Err(ParseError::InvalidIpv4);
    }

    let mut ipv4 = last as u32;
    for (i, &number) in init.iter().enumerate() {
        ipv4 += (number as u32) << (8 * (3 - i));
    }

    Ok(Some(ipv4))
}

/// Parse a single IPv4 number component (supports decimal, hex, octal).
///
/// Returns the value and whether a non-decimal radix was used, or `None`
/// if the part is not a number. Values saturate instead of overflowing.
pub fn parse_ipv4_number(input: &str) -> Option<(u64, bool)> {
    if input.is_empty() {
        return None;
    }

    let (digits, radix, non_decimal) = if let Some(hex) = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
    {
        (hex, 16, true)
    } else if input.len() >= 2 && input.starts_with('0') {
        (&input[1..], 8, true)
    } else {
        (input, 10, false)
    };

    // "0x" and "0" followed by nothing are zero
    if digits.is_empty() {
        return Some((0, true));
    }

    let mut value: u64 = 0;
    for c in digits.chars() {
        let digit = c.to_digit(radix)?;
        value = value
            .saturating_mul(u64::from(radix))
            .saturating_add(u64::from(digit));
    }

    Some((value, non_decimal))
}

/// Serialize an IPv4 address (u32) to dotted decimal notation
pub fn serialize_ipv4(ipv4: u32) -> String {
    format!(
        "{}.{}.{}.{}",
        (ipv4 >> 24) & 0xFF,
        (ipv4 >> 16) & 0xFF,
        (ipv4 >> 8) & 0xFF,
        ipv4 & 0xFF
    )
}
