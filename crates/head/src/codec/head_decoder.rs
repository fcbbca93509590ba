//! Framing of request heads out of a connection buffer.
//!
//! [`HeadParser`] needs the whole head in memory. [`HeadDecoder`] sits between a
//! socket reader and the parser: it waits until the buffer holds a complete head,
//! splits exactly that head off the buffer and parses it. Whatever follows the
//! blank line (a body, or the next pipelined request) stays in the buffer.
//!
//! # Limits
//!
//! The parser leaves the header block unbounded, so the decoder caps the whole
//! head at [`ParserConfig::max_head_bytes`] (8KB by default), both while waiting
//! for the blank line and once it has been found.
//!
//! # Example
//!
//! ```
//! use bytes::BytesMut;
//! use micro_head::codec::HeadDecoder;
//! use tokio_util::codec::Decoder;
//!
//! let mut decoder = HeadDecoder::new();
//! let mut buffer = BytesMut::from("GET / HTTP/1.1\r\nHost: a\r\n");
//! assert!(decoder.decode(&mut buffer).unwrap().is_none());
//!
//! buffer.extend_from_slice(b"\r\nhello");
//! let request = decoder.decode(&mut buffer).unwrap().unwrap();
//! assert_eq!(request.header("Host").unwrap(), "a");
//! assert_eq!(&buffer[..], b"hello");
//! ```

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{debug, trace};

use crate::codec::HeadParser;
use crate::ensure;
use crate::protocol::{DecodeError, ParsedRequest, ParserConfig};
use crate::utils::find;

const BLANK_LINE: &[u8] = b"\r\n\r\n";

/// Decoder for HTTP request heads implementing the [`Decoder`] trait.
#[derive(Debug, Default)]
pub struct HeadDecoder {
    parser: HeadParser,
    /// How much of the buffer is known not to contain a blank line yet
    scanned: usize,
}

impl HeadDecoder {
    /// Creates a decoder with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder whose parser and head cap follow `config`.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { parser: HeadParser::with_config(config), scanned: 0 }
    }

    /// Returns the limits this decoder applies.
    pub fn config(&self) -> &ParserConfig {
        self.parser.config()
    }
}

impl Decoder for HeadDecoder {
    type Item = ParsedRequest;
    type Error = DecodeError;

    /// Attempts to decode one request head from the provided buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(request))` if a complete head was split off and parsed
    /// - `Ok(None)` if more data is needed
    /// - `Err(DecodeError)` if the head is too large or was rejected by the parser
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let max_head_bytes = self.parser.config().max_head_bytes();

        // step back so a blank line split across two reads is still found
        let from = self.scanned.saturating_sub(BLANK_LINE.len() - 1).min(src.len());

        let Some(blank_line) = find(&src[from..], BLANK_LINE).map(|pos| from + pos) else {
            self.scanned = src.len();
            ensure!(src.len() <= max_head_bytes, DecodeError::too_large_head(src.len(), max_head_bytes));
            return Ok(None);
        };

        self.scanned = 0;
        let head_size = blank_line + BLANK_LINE.len();
        ensure!(head_size <= max_head_bytes, DecodeError::too_large_head(head_size, max_head_bytes));

        let head = src.split_to(head_size).freeze();
        trace!(head_size, remaining = src.len(), "split request head");

        match self.parser.parse_bytes(&head) {
            Ok(request) => Ok(Some(request)),
            Err(e) => {
                debug!(cause = %e, head_size, "request head rejected");
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::ParseError;
    use crate::utils::crlf;
    use futures::StreamExt;
    use indoc::indoc;
    use tokio_util::codec::FramedRead;

    #[test]
    fn waits_for_blank_line() {
        let mut decoder = HeadDecoder::new();
        let mut buffer = BytesMut::from("GET /index.html HTTP/1.1\r\nHost: 127.0.0.1:8080\r\n");

        assert!(decoder.decode(&mut buffer).unwrap().is_none());
        assert_eq!(buffer.len(), 48);

        buffer.extend_from_slice(b"\r\n123");
        let request = decoder.decode(&mut buffer).unwrap().unwrap();

        assert_eq!(request.target(), "/index.html");
        assert_eq!(request.header("Host").unwrap(), "127.0.0.1:8080");
        assert_eq!(&buffer[..], &b"123"[..]);
    }

    #[test]
    fn blank_line_split_across_reads() {
        let mut decoder = HeadDecoder::new();
        let mut buffer = BytesMut::from("GET / HTTP/1.1\r\nHost: a\r\n\r");

        assert!(decoder.decode(&mut buffer).unwrap().is_none());

        buffer.extend_from_slice(b"\n");
        let request = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(request.header("Host").unwrap(), "a");
        assert!(buffer.is_empty());
    }

    #[test]
    fn byte_by_byte() {
        let str = crlf(indoc! {r##"
        GET /index.html HTTP/1.1
        Host: 127.0.0.1:8080
        User-Agent: curl/7.79.1
        Accept: */*

        "##});

        let mut decoder = HeadDecoder::new();
        let mut buffer = BytesMut::new();
        let mut decoded = None;

        for &byte in str.as_bytes() {
            assert!(decoded.is_none());
            buffer.extend_from_slice(&[byte]);
            decoded = decoder.decode(&mut buffer).unwrap();
        }

        let request = decoded.unwrap();
        assert_eq!(request.headers().len(), 3);
        assert_eq!(request.header("User-Agent").unwrap(), "curl/7.79.1");
    }

    #[test]
    fn request_without_headers() {
        let mut buffer = BytesMut::from("GET / HTTP/1.1\r\n\r\n");
        let request = HeadDecoder::new().decode(&mut buffer).unwrap().unwrap();

        assert!(request.headers().is_empty());
        assert!(buffer.is_empty());
    }

    #[test]
    fn pipelined_heads() {
        let mut decoder = HeadDecoder::new();
        let mut buffer = BytesMut::from("GET /a HTTP/1.1\r\nHost: a\r\n\r\nGET /b HTTP/1.1\r\nHost: b\r\n\r\n");

        let first = decoder.decode(&mut buffer).unwrap().unwrap();
        let second = decoder.decode(&mut buffer).unwrap().unwrap();

        assert_eq!(first.target(), "/a");
        assert_eq!(second.target(), "/b");
        assert!(decoder.decode(&mut buffer).unwrap().is_none());
    }

    #[test]
    fn rejects_oversized_partial_head() {
        let config = ParserConfig::builder().max_head_bytes(32).build();
        let mut decoder = HeadDecoder::with_config(config);
        let mut buffer = BytesMut::from("GET / HTTP/1.1\r\nUser-Agent: curl/7.79.1\r\n");

        let err = decoder.decode(&mut buffer).unwrap_err();
        assert!(matches!(err, DecodeError::TooLargeHead { current_size: 41, max_size: 32 }));
    }

    #[test]
    fn rejects_oversized_complete_head() {
        let config = ParserConfig::builder().max_head_bytes(32).build();
        let mut decoder = HeadDecoder::with_config(config);
        let mut buffer = BytesMut::from("GET / HTTP/1.1\r\nHost: a\r\nAccept: */*\r\n\r\n");

        let err = decoder.decode(&mut buffer).unwrap_err();
        assert!(matches!(err, DecodeError::TooLargeHead { current_size: 40, max_size: 32 }));
    }

    #[test]
    fn surfaces_parse_errors() {
        let mut decoder = HeadDecoder::new();
        let mut buffer = BytesMut::from("GET /x HTTP/1.1\r\nHost example.com\r\n\r\n");

        let err = decoder.decode(&mut buffer).unwrap_err();
        assert_eq!(err.parse_error(), Some(ParseError::InvalidHeaders));
    }

    #[test]
    fn applies_parser_limits() {
        let config = ParserConfig::builder().max_method_len(3).build();
        let mut decoder = HeadDecoder::with_config(config);
        assert_eq!(decoder.config(), &config);
        assert_eq!(HeadDecoder::new().config().max_head_bytes(), 8 * 1024);

        let mut buffer = BytesMut::from("POST / HTTP/1.1\r\n\r\n");
        let err = decoder.decode(&mut buffer).unwrap_err();
        assert_eq!(err.parse_error(), Some(ParseError::MethodTooLong));
    }

    #[tokio::test]
    async fn framed_read() {
        let input: &[u8] = b"GET /a HTTP/1.1\r\nHost: a\r\n\r\nDELETE /b HTTP/1.0\r\nHost: b\r\n\r\n";
        let mut framed = FramedRead::new(input, HeadDecoder::new());

        let first = framed.next().await.unwrap().unwrap();
        assert_eq!(first.method(), "GET");

        let second = framed.next().await.unwrap().unwrap();
        assert_eq!(second.method(), "DELETE");
        assert_eq!(second.version(), "HTTP/1.0");

        assert!(framed.next().await.is_none());
    }

    #[tokio::test]
    async fn framed_read_truncated_stream() {
        let input: &[u8] = b"GET /a HTTP/1.1\r\nHost: a\r\n";
        let mut framed = FramedRead::new(input, HeadDecoder::new());

        let err = framed.next().await.unwrap().unwrap_err();
        assert!(matches!(err, DecodeError::Io { .. }));
    }
}
