use bytes::Bytes;

use super::HeaderFields;

/// Request-line and header fields of one HTTP/1.x request head, as raw bytes.
///
/// Produced only by a successful [`HeadParser::parse`](crate::codec::HeadParser::parse):
/// `method`, `target` and `version` are then non-empty and within the configured
/// limits. The value is read-only once handed out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRequest {
    method: Bytes,
    target: Bytes,
    version: Bytes,
    headers: HeaderFields,
}

impl ParsedRequest {
    pub(crate) fn new(method: Bytes, target: Bytes, version: Bytes, headers: HeaderFields) -> Self {
        Self { method, target, version, headers }
    }

    #[inline]
    pub fn method(&self) -> &Bytes {
        &self.method
    }

    /// The request target, e.g. `/index.html` or `http://example.com/`.
    #[inline]
    pub fn target(&self) -> &Bytes {
        &self.target
    }

    #[inline]
    pub fn version(&self) -> &Bytes {
        &self.version
    }

    #[inline]
    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }

    /// Shorthand for `self.headers().get(name)`.
    pub fn header<K: AsRef<[u8]>>(&self, name: K) -> Option<&Bytes> {
        self.headers.get(name)
    }

    /// Consumes the request, returning `(method, target, version, headers)`.
    pub fn into_parts(self) -> (Bytes, Bytes, Bytes, HeaderFields) {
        (self.method, self.target, self.version, self.headers)
    }
}
