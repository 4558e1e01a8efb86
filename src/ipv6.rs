/// IPv6 address parsing and serialization
/// IPv6 address parsing from the WHATWG URL Standard
use crate::error::{ParseError, Result, ValidationError, ValidationErrorHandler, report};
use core::fmt::Write;

/// Parse the text between the brackets of an IPv6 host (e.g. `::1` or
/// `2001:db8::1` or `::ffff:192.168.1.1`) into its 8 pieces.
pub fn parse_ipv6(input: &str, handler: Option<&dyn ValidationErrorHandler>) -> Result<[u16; 8]> {
    let fail = |error: ValidationError| {
        report(handler, error);
        Err(ParseError::InvalidIpv6)
    };

    let input = input.as_bytes();
    let at = |i: usize| input.get(i).copied();

    let mut address = [0u16; 8];
    let mut piece_index = 0usize;
    let mut compress: Option<usize> = None;
    let mut pointer = 0usize;

    if at(pointer) == Some(b':') {
        if at(pointer + 1) != Some(b':') {
            return fail(ValidationError::Ipv6InvalidCompression);
        }
        pointer += 2;
        piece_index += 1;
        compress = Some(piece_index);
    }

    while let Some(c) = at(pointer) {
        if piece_index == 8 {
            return fail(ValidationError::Ipv6TooManyPieces);
        }

        if c == b':' {
            if compress.is_some() {
                return fail(ValidationError::Ipv6MultipleCompression);
            }
            pointer += 1;
            piece_index += 1;
            compress = Some(piece_index);
            continue;
        }

        let mut value: u16 = 0;
        let mut length = 0;
        while length < 4 {
            let Some(digit) = at(pointer).and_then(|b| (b as char).to_digit(16)) else {
                break;
            };
            value = value * 0x10 + digit as u16;
            pointer += 1;
            length += 1;
        }

        match at(pointer) {
            Some(b'.') => {
                if length == 0 {
                    return fail(ValidationError::Ipv4InIpv6InvalidCodePoint);
                }
                pointer -= length;

                if piece_index > 6 {
                    return fail(ValidationError::Ipv4InIpv6TooManyPieces);
                }

                let mut numbers_seen = 0;
                while let Some(c) = at(pointer) {
                    if numbers_seen > 0 {
                        if c == b'.' && numbers_seen < 4 {
                            pointer += 1;
                        } else {
                            return fail(ValidationError::Ipv4InIpv6InvalidCodePoint);
                        }
                    }

                    if !at(pointer).is_some_and(|b| b.is_ascii_digit()) {
                        return fail(ValidationError::Ipv4InIpv6InvalidCodePoint);
                    }

                    let mut ipv4_piece: Option<u16> = None;
                    while let Some(digit @ b'0'..=b'9') = at(pointer) {
                        let number = u16::from(digit - b'0');
                        ipv4_piece = match ipv4_piece {
                            None => Some(number),
                            // Leading zeros are not allowed
                            Some(0) => return fail(ValidationError::Ipv4InIpv6InvalidCodePoint),
                            Some(piece) => Some(piece * 10 + number),
                        };
                        if ipv4_piece.is_some_and(|piece| piece > 255) {
                            return fail(ValidationError::Ipv4InIpv6OutOfRangePart);
                        }
                        pointer += 1;
                    }

                    address[piece_index] =
                        address[piece_index] * 0x100 + ipv4_piece.unwrap_or_default();
                    numbers_seen += 1;
                    if numbers_seen == 2 || numbers_seen == 4 {
                        piece_index += 1;
                    }
                }

                if numbers_seen != 4 {
                    return fail(ValidationError::Ipv4InIpv6TooFewParts);
                }
                break;
            }
            Some(b':') => {
                pointer += 1;
                if at(pointer).is_none() {
                    return fail(ValidationError::Ipv6InvalidCodePoint);
                }
            }
            Some(_) => return fail(ValidationError::Ipv6InvalidCodePoint),
            None => {}
        }

        address[piece_index] = value;
        piece_index += 1;
    }

    if let Some(compress) = compress {
        // Move the pieces after the compression point to the end
        let mut swaps = piece_index - compress;
        piece_index = 7;
        while piece_index != 0 && swaps > 0 {
            address.swap(piece_index, compress + swaps - 1);
            piece_index -= 1;
            swaps -= 1;
        }
    } else if piece_index != 8 {
        return fail(ValidationError::Ipv6TooFewPieces);
    }

    Ok(address)
}

/// Write the compressed form of an IPv6 address to any `fmt::Write` sink
pub fn write_ipv6<W: Write>(out: &mut W, segments: &[u16; 8]) {
    let (compress_start, compress_len) = find_longest_zero_sequence(segments);

    // Only compress sequences of 2+ zeros
    let compress = compress_start.filter(|_| compress_len > 1);

    let mut ignore_zero = false;
    for (i, &segment) in segments.iter().enumerate() {
        if ignore_zero && segment == 0 {
            continue;
        }
        ignore_zero = false;

        if compress == Some(i) {
            let _ = out.write_str(if i == 0 { "::" } else { ":" });
            ignore_zero = true;
            continue;
        }

        let _ = write!(out, "{segment:x}");
        if i != 7 {
            let _ = out.write_char(':');
        }
    }
}

/// Find the first longest sequence of consecutive zeros in IPv6 segments.
fn find_longest_zero_sequence(segments: &[u16; 8]) -> (Option<usize>, usize) {
    let mut best_start: Option<usize> = None;
    let mut best_len = 0;
    let mut current_start: Option<usize> = None;
    let mut current_len = 0;

    for (i, &segment) in segments.iter().enumerate() {
        if segment == 0 {
            if current_start.is_none() {
                current_start = Some(i);
                current_len = 1;
            } else {
                current_len += 1;
            }
            if current_len > best_len {
                best_start = current_start;
                best_len = current_len;
            }
        } else {
            current_start = None;
            current_len = 0;
        }
    }

    (best_start, best_len)
}
