//! Typed view of a parsed request head.
//!
//! [`ParsedRequest`] keeps every token as raw bytes. Callers that hand the head
//! on to `http`-based code convert it into a [`RequestHeader`], which wraps a
//! `http::Request<()>` and validates each token on the way.

use http::{HeaderMap, HeaderName, HeaderValue, Method, Request, Uri, Version};

use crate::protocol::{IntoHttpError, ParsedRequest};

/// Represents an HTTP request header.
///
/// This struct wraps a `http::Request<()>` to provide:
/// - Access to standard HTTP header fields
/// - Conversion from a raw [`ParsedRequest`]
/// - Body attachment capabilities
#[derive(Debug)]
pub struct RequestHeader {
    inner: Request<()>,
}

impl RequestHeader {
    /// Attaches a body to this header, converting it into a full `Request<T>`.
    pub fn body<T>(self, body: T) -> Request<T> {
        self.inner.map(|()| body)
    }

    /// Returns a reference to the request's HTTP method.
    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    /// Returns a reference to the request's URI.
    pub fn uri(&self) -> &Uri {
        self.inner.uri()
    }

    /// Returns the request's HTTP version.
    pub fn version(&self) -> Version {
        self.inner.version()
    }

    /// Returns a reference to the request's headers.
    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }
}

/// Lifts a raw parsed head into typed `http` values.
///
/// - method through [`Method::from_bytes`]
/// - target through [`Uri::from_maybe_shared`], without copying
/// - version by exact match on `HTTP/0.9`, `HTTP/1.0`, `HTTP/1.1`, `HTTP/2.0` and `HTTP/3.0`
/// - each header through [`HeaderName::from_bytes`] and [`HeaderValue::from_maybe_shared`]
impl TryFrom<ParsedRequest> for RequestHeader {
    type Error = IntoHttpError;

    fn try_from(parsed: ParsedRequest) -> Result<Self, Self::Error> {
        let (method, target, version, fields) = parsed.into_parts();

        let mut request = Request::new(());
        *request.method_mut() = Method::from_bytes(&method)?;
        *request.uri_mut() = Uri::from_maybe_shared(target)?;
        *request.version_mut() = parse_version(&version).ok_or_else(|| IntoHttpError::version(&version))?;

        let headers = request.headers_mut();
        headers.reserve(fields.len());
        for (name, value) in &fields {
            let name = HeaderName::from_bytes(name)?;
            let value = HeaderValue::from_maybe_shared(value.clone())?;
            headers.append(name, value);
        }

        Ok(Self { inner: request })
    }
}

fn parse_version(version: &[u8]) -> Option<Version> {
    match version {
        b"HTTP/0.9" => Some(Version::HTTP_09),
        b"HTTP/1.0" => Some(Version::HTTP_10),
        b"HTTP/1.1" => Some(Version::HTTP_11),
        b"HTTP/2.0" => Some(Version::HTTP_2),
        b"HTTP/3.0" => Some(Version::HTTP_3),
        _ => None,
    }
}
