//! Limits and switches shared by [`HeadParser`](crate::codec::HeadParser) and
//! [`HeadDecoder`](crate::codec::HeadDecoder).

/// Maximum length of the request method, in bytes
pub const MAX_METHOD_LEN: usize = 32;

/// Maximum length of the request target, in bytes
pub const MAX_URL_LEN: usize = 1024;

/// Maximum length of the protocol version, in bytes
pub const MAX_VERSION_LEN: usize = 32;

/// Maximum size of a whole head (request-line, headers and blank line) accepted by the decoder
pub const MAX_HEAD_BYTES: usize = 8 * 1024;

/// Parser configuration.
///
/// Every length limit is exclusive of the next byte: a method of exactly
/// `max_method_len` bytes is accepted, one more byte is rejected.
///
/// ```
/// use micro_head::protocol::ParserConfig;
///
/// let config = ParserConfig::builder().max_url_len(2048).strict_version(true).build();
/// assert_eq!(config.max_url_len(), 2048);
/// assert_eq!(config.max_method_len(), 32);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    max_method_len: usize,
    max_url_len: usize,
    max_version_len: usize,
    max_head_bytes: usize,
    strict_version: bool,
}

impl ParserConfig {
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    #[inline]
    pub fn max_method_len(&self) -> usize {
        self.max_method_len
    }

    #[inline]
    pub fn max_url_len(&self) -> usize {
        self.max_url_len
    }

    #[inline]
    pub fn max_version_len(&self) -> usize {
        self.max_version_len
    }

    /// Only enforced by the decoder; the parser itself leaves the header block unbounded.
    #[inline]
    pub fn max_head_bytes(&self) -> usize {
        self.max_head_bytes
    }

    /// When set, the version must read `HTTP/<digit>.<digit>`, otherwise
    /// [`ParseError::InvalidVersion`](crate::protocol::ParseError::InvalidVersion) is returned.
    #[inline]
    pub fn strict_version(&self) -> bool {
        self.strict_version
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_method_len: MAX_METHOD_LEN,
            max_url_len: MAX_URL_LEN,
            max_version_len: MAX_VERSION_LEN,
            max_head_bytes: MAX_HEAD_BYTES,
            strict_version: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    fn new() -> Self {
        Self { config: ParserConfig::default() }
    }

    pub fn max_method_len(mut self, len: usize) -> Self {
        self.config.max_method_len = len;
        self
    }

    pub fn max_url_len(mut self, len: usize) -> Self {
        self.config.max_url_len = len;
        self
    }

    pub fn max_version_len(mut self, len: usize) -> Self {
        self.config.max_version_len = len;
        self
    }

    pub fn max_head_bytes(mut self, bytes: usize) -> Self {
        self.config.max_head_bytes = bytes;
        self
    }

    pub fn strict_version(mut self, strict: bool) -> Self {
        self.config.strict_version = strict;
        self
    }

    pub fn build(self) -> ParserConfig {
        self.config
    }
}
