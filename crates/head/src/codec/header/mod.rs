//! Header block processing.
//!
//! The parser only frames the header block; turning the block into
//! name/value pairs happens here, in one pass over the lines once the
//! terminating blank line has been seen.

mod line_splitter;

pub(crate) use line_splitter::split_header_lines;
