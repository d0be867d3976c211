//! Decoding of textual event records.
//!
//! The inverse of [`encode`](crate::encode): fixed fields are consumed from
//! the left and the line number from the right, so a file path containing
//! the delimiter still decodes losslessly.

use crate::error::DecodeError;
use pmemtrace_core::{Event, EventKind, Origin};

/// Decode one record line back into an [`Event`].
pub fn decode(input: &str) -> Result<Event, DecodeError> {
    let (tag, rest) = input
        .split_once(':')
        .ok_or(DecodeError::MissingField("tag"))?;
    let kind = EventKind::from_tag(tag).ok_or_else(|| DecodeError::UnknownTag(tag.to_string()))?;

    let (body, line_field) = rest
        .rsplit_once(':')
        .ok_or(DecodeError::MissingField("line"))?;
    let line: u32 = line_field
        .parse()
        .map_err(|_| DecodeError::InvalidLine(line_field.to_string()))?;

    if kind.is_boundary() {
        return Ok(Event::boundary(kind, Origin::new(body.to_owned(), line)));
    }

    let (address_field, rest) = body
        .split_once(':')
        .ok_or(DecodeError::MissingField("size"))?;
    let address = parse_address(address_field)?;

    if kind.has_completion() {
        let (completed_field, rest) = rest
            .split_once(':')
            .ok_or(DecodeError::MissingField("requested size"))?;
        let (requested_field, file) = rest
            .split_once(':')
            .ok_or(DecodeError::MissingField("file"))?;
        let completed = parse_size(completed_field)?;
        let requested = parse_size(requested_field)?;
        Ok(Event::completion(
            kind,
            address,
            requested,
            completed,
            Origin::new(file.to_owned(), line),
        ))
    } else {
        let (size_field, file) = rest
            .split_once(':')
            .ok_or(DecodeError::MissingField("file"))?;
        let size = parse_size(size_field)?;
        Ok(Event::access(
            kind,
            address,
            size,
            Origin::new(file.to_owned(), line),
        ))
    }
}

fn parse_address(field: &str) -> Result<usize, DecodeError> {
    let hex = field
        .strip_prefix("0x")
        .ok_or_else(|| DecodeError::InvalidAddress(field.to_string()))?;
    usize::from_str_radix(hex, 16).map_err(|_| DecodeError::InvalidAddress(field.to_string()))
}

fn parse_size(field: &str) -> Result<usize, DecodeError> {
    field
        .parse()
        .map_err(|_| DecodeError::InvalidSize(field.to_string()))
}
