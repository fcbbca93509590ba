//! Request head decoding.
//!
//! - [`HeadParser`]: the single pass parser over an in-memory buffer
//! - [`parse`]: shorthand for `HeadParser::new().parse(..)`
//! - [`HeadDecoder`]: a `tokio_util` [`Decoder`](tokio_util::codec::Decoder) that
//!   frames heads out of a growing connection buffer and hands them to the parser
//!
//! # Example
//!
//! ```
//! use micro_head::codec::parse;
//!
//! let buf = b"GET /x HTTP/1.1\r\nHost example.com\r\n\r\n";
//! let err = parse(buf, buf.len()).unwrap_err();
//! assert_eq!(err.to_string(), "invalid headers");
//! ```

mod head_decoder;
mod header;
mod parser;

pub use head_decoder::HeadDecoder;
pub use parser::{HeadParser, parse};
