//! A strict, single pass HTTP/1.x request head parser
//!
//! This crate extracts the request-line (method, target, version) and the header
//! fields from the head of an HTTP/1.x request held in memory. It stops at the
//! blank line that ends the header block and never touches the body.
//!
//! # Features
//!
//! - One walk over the input, no backtracking, never reads past the given length
//! - Strict CRLF framing: a bare LF or a lone CR is an error, not a line break
//! - Fixed length limits on method, target and version
//! - A distinct error kind, with a stable label, for every rejection
//! - Zero-copy fields: everything is a slice of one shared buffer
//! - A `tokio_util` decoder for reading heads off a connection
//!
//! # Example
//!
//! ```
//! use micro_head::{describe, parse};
//!
//! let buf = b"GET /x HTTP/1.1\r\nHost: example.com\r\n\r\n";
//!
//! let result = parse(buf, buf.len());
//! assert_eq!(describe(&result), "success");
//!
//! let request = result.unwrap();
//! assert_eq!(request.method(), "GET");
//! assert_eq!(request.target(), "/x");
//! assert_eq!(request.version(), "HTTP/1.1");
//! assert_eq!(request.header("Host").unwrap(), "example.com");
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the parser and the connection-side decoder
//! - [`protocol`]: parsed request types, configuration and errors
//!
//! # Grammar
//!
//! ```text
//! head         = request-line *( header-line CRLF ) CRLF
//! request-line = method SP target SP version CRLF
//! header-line  = name ": " value
//! ```
//!
//! `method` and `target` may hold any byte except SP, CR and LF; `version` any
//! byte except CR and LF. A header line is split at its first `": "`, and a line
//! without one fails the whole head. When a name repeats, the first value wins.
//!
//! # Limits
//!
//! - Method: 32 bytes
//! - Target: 1024 bytes
//! - Version: 32 bytes
//! - Whole head, when read through [`codec::HeadDecoder`]: 8KB
//!
//! All of them can be changed through [`protocol::ParserConfig`].
//!
//! # Errors
//!
//! - [`protocol::ParseError`]: parser rejections
//! - [`protocol::DecodeError`]: decoder failures, oversized heads included
//! - [`protocol::IntoHttpError`]: conversion into `http` types

pub mod codec;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use codec::parse;
pub use protocol::{ParseError, ParsedRequest, describe};
