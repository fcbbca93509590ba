use std::io;
use thiserror::Error;

/// Every way a request head can be rejected by [`HeadParser`](crate::codec::HeadParser).
///
/// The `Display` output of each variant is a fixed label, stable across releases,
/// so it can be written to logs or matched by callers that only see the text.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("method too long")]
    MethodTooLong,

    #[error("url too long")]
    UrlTooLong,

    #[error("version too long")]
    VersionTooLong,

    #[error("invalid method")]
    InvalidMethod,

    #[error("invalid url")]
    InvalidUrl,

    /// Only produced when [`ParserConfig::strict_version`](crate::protocol::ParserConfig)
    /// is enabled.
    #[error("invalid version")]
    InvalidVersion,

    #[error("invalid format")]
    InvalidFormat,

    #[error("invalid headers")]
    InvalidHeaders,

    #[error("invalid crlf")]
    InvalidCrlf,
}

impl ParseError {
    /// Label of a successful parse, see [`describe`].
    pub const SUCCESS: &'static str = "success";

    /// Returns the same label `Display` renders, without allocating.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MethodTooLong => "method too long",
            Self::UrlTooLong => "url too long",
            Self::VersionTooLong => "version too long",
            Self::InvalidMethod => "invalid method",
            Self::InvalidUrl => "invalid url",
            Self::InvalidVersion => "invalid version",
            Self::InvalidFormat => "invalid format",
            Self::InvalidHeaders => "invalid headers",
            Self::InvalidCrlf => "invalid crlf",
        }
    }

    /// A token was well formed but exceeded its configured capacity.
    pub const fn is_limit(&self) -> bool {
        matches!(self, Self::MethodTooLong | Self::UrlTooLong | Self::VersionTooLong)
    }

    /// The byte sequence broke the request-line or header block grammar.
    pub const fn is_framing(&self) -> bool {
        matches!(self, Self::InvalidFormat | Self::InvalidHeaders | Self::InvalidCrlf)
    }
}

/// Renders any parse outcome to its diagnostic label, `"success"` included.
///
/// ```
/// use micro_head::{describe, parse};
///
/// let ok = parse(b"GET / HTTP/1.1\r\n\r\n", 18);
/// assert_eq!(describe(&ok), "success");
///
/// let err = parse(b"GET / HTTP/1.1\r", 15);
/// assert_eq!(describe(&err), "invalid format");
/// ```
pub fn describe<T>(result: &Result<T, ParseError>) -> &'static str {
    match result {
        Ok(_) => ParseError::SUCCESS,
        Err(e) => e.as_str(),
    }
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("head size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHead { current_size: usize, max_size: usize },

    #[error("parse error: {source}")]
    Parse {
        #[from]
        source: ParseError,
    },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl DecodeError {
    pub fn too_large_head(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHead { current_size, max_size }
    }

    /// Returns the parser rejection, if that is what stopped decoding.
    pub fn parse_error(&self) -> Option<ParseError> {
        match self {
            Self::Parse { source } => Some(*source),
            _ => None,
        }
    }
}

/// Failure to lift a [`ParsedRequest`](crate::protocol::ParsedRequest) into typed `http` values.
#[derive(Error, Debug)]
pub enum IntoHttpError {
    #[error("invalid http method: {source}")]
    Method {
        #[from]
        source: http::method::InvalidMethod,
    },

    #[error("invalid http uri: {source}")]
    Uri {
        #[from]
        source: http::uri::InvalidUri,
    },

    #[error("unsupported http version: {version:?}")]
    Version { version: String },

    #[error("invalid header name: {source}")]
    HeaderName {
        #[from]
        source: http::header::InvalidHeaderName,
    },

    #[error("invalid header value: {source}")]
    HeaderValue {
        #[from]
        source: http::header::InvalidHeaderValue,
    },
}

impl IntoHttpError {
    pub fn version<B: AsRef<[u8]>>(version: B) -> Self {
        Self::Version { version: String::from_utf8_lossy(version.as_ref()).into_owned() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ParseError; 9] = [
        ParseError::MethodTooLong,
        ParseError::UrlTooLong,
        ParseError::VersionTooLong,
        ParseError::InvalidMethod,
        ParseError::InvalidUrl,
        ParseError::InvalidVersion,
        ParseError::InvalidFormat,
        ParseError::InvalidHeaders,
        ParseError::InvalidCrlf,
    ];

    #[test]
    fn display_matches_as_str() {
        for e in ALL {
            assert_eq!(e.to_string(), e.as_str());
        }
    }

    #[test]
    fn labels_are_stable() {
        assert_eq!(ParseError::MethodTooLong.to_string(), "method too long");
        assert_eq!(ParseError::UrlTooLong.to_string(), "url too long");
        assert_eq!(ParseError::VersionTooLong.to_string(), "version too long");
        assert_eq!(ParseError::InvalidMethod.to_string(), "invalid method");
        assert_eq!(ParseError::InvalidUrl.to_string(), "invalid url");
        assert_eq!(ParseError::InvalidVersion.to_string(), "invalid version");
        assert_eq!(ParseError::InvalidFormat.to_string(), "invalid format");
        assert_eq!(ParseError::InvalidHeaders.to_string(), "invalid headers");
        assert_eq!(ParseError::InvalidCrlf.to_string(), "invalid crlf");
    }

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = ALL.iter().map(ParseError::as_str).collect();
        labels.push(ParseError::SUCCESS);
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 10);
    }

    #[test]
    fn classification() {
        let limits: Vec<_> = ALL.iter().filter(|e| e.is_limit()).collect();
        assert_eq!(limits, [&ParseError::MethodTooLong, &ParseError::UrlTooLong, &ParseError::VersionTooLong]);

        let framing: Vec<_> = ALL.iter().filter(|e| e.is_framing()).collect();
        assert_eq!(framing, [&ParseError::InvalidFormat, &ParseError::InvalidHeaders, &ParseError::InvalidCrlf]);

        assert!(!ParseError::InvalidMethod.is_limit());
        assert!(!ParseError::InvalidUrl.is_framing());
    }

    #[test]
    fn describe_outcome() {
        let ok: Result<(), ParseError> = Ok(());
        assert_eq!(describe(&ok), "success");

        let err: Result<(), ParseError> = Err(ParseError::InvalidCrlf);
        assert_eq!(describe(&err), "invalid crlf");
    }

    #[test]
    fn decode_error_wraps_parse_error() {
        let e = DecodeError::from(ParseError::InvalidHeaders);
        assert_eq!(e.parse_error(), Some(ParseError::InvalidHeaders));
        assert_eq!(e.to_string(), "parse error: invalid headers");

        let e = DecodeError::too_large_head(9000, 8192);
        assert_eq!(e.parse_error(), None);
        assert_eq!(e.to_string(), "head size too large, current: 9000 exceed the limit 8192");
    }
}
