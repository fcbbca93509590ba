use bytes::Bytes;

use crate::protocol::{HeaderFields, ParseError};
use crate::utils::find;

const CRLF: &[u8] = b"\r\n";
const SEPARATOR: &[u8] = b": ";

/// Splits a raw header block into fields.
///
/// `block` holds header lines joined by CRLF, without a trailing CRLF. Each line
/// is cut at its first `": "`: the bytes before are the name, the bytes after are
/// the value, untouched. Names and values are slices of `block`, nothing is copied.
///
/// An empty block means the head had no header lines.
///
/// # Errors
///
/// Returns [`ParseError::InvalidHeaders`] as soon as one line lacks the separator;
/// the lines before it are discarded with the rest.
pub(crate) fn split_header_lines(block: &Bytes) -> Result<HeaderFields, ParseError> {
    let mut fields = HeaderFields::new();
    if block.is_empty() {
        return Ok(fields);
    }

    let mut line_start = 0;
    loop {
        let line_end = find(&block[line_start..], CRLF).map_or(block.len(), |pos| line_start + pos);
        let separator = find(&block[line_start..line_end], SEPARATOR).ok_or(ParseError::InvalidHeaders)?;

        let name = block.slice(line_start..line_start + separator);
        let value = block.slice(line_start + separator + SEPARATOR.len()..line_end);
        fields.insert_if_absent(name, value);

        if line_end == block.len() {
            return Ok(fields);
        }
        line_start = line_end + CRLF.len();
    }
}
