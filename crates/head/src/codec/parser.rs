//! Single pass request head parser.
//!
//! The parser walks the buffer once, byte by byte, through four states:
//!
//! ```text
//!  Method --SP--> Url --SP--> Version --CRLF--> Headers --CRLF CRLF--> done
//! ```
//!
//! The request-line tokens and the header block are contiguous in the input, so
//! the walk only records their byte ranges. Once the terminating blank line is
//! found, the head is copied out once and every field is a [`Bytes::slice`] of that
//! copy. The header block is split into lines afterwards, see
//! [`split_header_lines`](super::header::split_header_lines).
//!
//! # Termination
//!
//! The header block ends at the first CRLF that is directly followed by another
//! CRLF, or at a CRLF right after the request-line when there are no header lines.
//! Running out of input anywhere before that point is [`ParseError::InvalidFormat`],
//! including a buffer that ends exactly on a header line's CRLF: without the next
//! two bytes the blank line can't be confirmed.

use std::ops::Range;

use bytes::Bytes;

use crate::codec::header::split_header_lines;
use crate::ensure;
use crate::protocol::{ParseError, ParsedRequest, ParserConfig};

const SP: u8 = b' ';
const CR: u8 = b'\r';
const LF: u8 = b'\n';
const CRLF: &[u8] = b"\r\n";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    Method,
    Url,
    Version,
    Headers,
}

/// Byte ranges of a complete head within the scanned buffer.
#[derive(Debug)]
struct HeadLayout {
    method: Range<usize>,
    target: Range<usize>,
    version: Range<usize>,
    /// Header lines joined by CRLF, without the final line's CRLF and the blank line.
    headers: Range<usize>,
}

/// Parses the request-line and header block of an HTTP/1.x request.
///
/// The parser holds only its [`ParserConfig`]; every call starts from a clean
/// state, so one instance can be shared freely between threads.
///
/// ```
/// use micro_head::codec::HeadParser;
///
/// let buf = b"GET /x HTTP/1.1\r\nHost: example.com\r\n\r\n";
/// let request = HeadParser::new().parse(buf, buf.len()).unwrap();
///
/// assert_eq!(request.method(), "GET");
/// assert_eq!(request.target(), "/x");
/// assert_eq!(request.version(), "HTTP/1.1");
/// assert_eq!(request.header("Host").unwrap(), "example.com");
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct HeadParser {
    config: ParserConfig,
}

impl HeadParser {
    /// Creates a parser with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the limits of `config`.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the limits this parser applies.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the first `len` bytes of `buf`.
    ///
    /// Bytes past `len` are never read; a `len` larger than the buffer is
    /// clamped to the buffer size. Bytes after the terminating blank line
    /// (a body, or the next request) are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first violation met while walking the input, see [`ParseError`].
    pub fn parse(&self, buf: &[u8], len: usize) -> Result<ParsedRequest, ParseError> {
        let buf = &buf[..len.min(buf.len())];
        let layout = self.scan(buf)?;

        let head = Bytes::copy_from_slice(&buf[..layout.headers.end]);
        Self::assemble(&head, layout)
    }

    /// Parses a head held in shared memory, slicing fields out of `src` without copying.
    ///
    /// # Errors
    ///
    /// Same as [`HeadParser::parse`].
    pub fn parse_bytes(&self, src: &Bytes) -> Result<ParsedRequest, ParseError> {
        let layout = self.scan(src)?;
        Self::assemble(src, layout)
    }

    fn assemble(head: &Bytes, layout: HeadLayout) -> Result<ParsedRequest, ParseError> {
        let headers = split_header_lines(&head.slice(layout.headers))?;

        Ok(ParsedRequest::new(head.slice(layout.method), head.slice(layout.target), head.slice(layout.version), headers))
    }

    fn scan(&self, buf: &[u8]) -> Result<HeadLayout, ParseError> {
        let mut state = State::Method;
        // first byte of the token being read
        let mut start = 0;
        let mut i = 0;

        let mut method = 0..0;
        let mut target = 0..0;
        let mut version = 0..0;

        let headers = loop {
            let Some(&c) = buf.get(i) else {
                return Err(ParseError::InvalidFormat);
            };

            match state {
                State::Method => {
                    match c {
                        SP => {
                            ensure!(i > start, ParseError::InvalidMethod);
                            method = start..i;
                            start = i + 1;
                            state = State::Url;
                        }
                        CR | LF => return Err(ParseError::InvalidFormat),
                        _ => ensure!(i - start < self.config.max_method_len(), ParseError::MethodTooLong),
                    }
                    i += 1;
                }

                State::Url => {
                    match c {
                        SP => {
                            ensure!(i > start, ParseError::InvalidUrl);
                            target = start..i;
                            start = i + 1;
                            state = State::Version;
                        }
                        CR | LF => return Err(ParseError::InvalidFormat),
                        _ => ensure!(i - start < self.config.max_url_len(), ParseError::UrlTooLong),
                    }
                    i += 1;
                }

                State::Version => match c {
                    CR => {
                        ensure!(i > start, ParseError::InvalidFormat);
                        match buf.get(i + 1) {
                            Some(&LF) => {}
                            Some(_) => return Err(ParseError::InvalidCrlf),
                            None => return Err(ParseError::InvalidFormat),
                        }

                        version = start..i;
                        ensure!(
                            !self.config.strict_version() || is_http_version(&buf[version.clone()]),
                            ParseError::InvalidVersion
                        );

                        i += 2;
                        start = i;
                        state = State::Headers;
                    }
                    // a bare LF can't end the request-line
                    LF => return Err(ParseError::InvalidCrlf),
                    _ => {
                        ensure!(i - start < self.config.max_version_len(), ParseError::VersionTooLong);
                        i += 1;
                    }
                },

                State::Headers => match c {
                    CR => {
                        ensure!(buf.get(i + 1) == Some(&LF), ParseError::InvalidFormat);

                        if i == start || buf.get(i + 2..i + 4) == Some(CRLF) {
                            break start..i;
                        }

                        i += 2;
                    }
                    LF => return Err(ParseError::InvalidHeaders),
                    _ => i += 1,
                },
            }
        };

        Ok(HeadLayout { method, target, version, headers })
    }
}

/// `HTTP/<digit>.<digit>`
fn is_http_version(version: &[u8]) -> bool {
    matches!(version, [b'H', b'T', b'T', b'P', b'/', major, b'.', minor] if major.is_ascii_digit() && minor.is_ascii_digit())
}

/// Parses the first `len` bytes of `buf` with the default limits.
///
/// See [`HeadParser::parse`].
///
/// # Errors
///
/// Returns the first violation met while walking the input, see [`ParseError`].
pub fn parse(buf: &[u8], len: usize) -> Result<ParsedRequest, ParseError> {
    HeadParser::new().parse(buf, len)
}
