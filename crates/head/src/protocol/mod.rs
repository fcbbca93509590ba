//! Data model of a parsed request head.
//!
//! - [`ParsedRequest`]: method, target, version and header fields as raw bytes
//! - [`HeaderFields`]: header name to value mapping with first-wins insertion
//! - [`RequestHeader`]: the same head lifted into `http` types
//! - [`ParserConfig`]: length limits and the optional version check
//! - Errors: [`ParseError`] for the parser, [`DecodeError`] for the framing
//!   decoder, [`IntoHttpError`] for the `http` conversion

mod config;
pub use config::ParserConfig;
pub use config::ParserConfigBuilder;
pub use config::{MAX_HEAD_BYTES, MAX_METHOD_LEN, MAX_URL_LEN, MAX_VERSION_LEN};

mod headers;
pub use headers::HeaderFields;
pub use headers::Iter as HeaderFieldsIter;

mod parsed_request;
pub use parsed_request::ParsedRequest;

mod request;
pub use request::RequestHeader;

mod error;
pub use error::DecodeError;
pub use error::IntoHttpError;
pub use error::ParseError;
pub use error::describe;
