use std::io::{self, Write};

use http::header::{HeaderMap, HeaderName, HeaderValue};
use http::{Response, StatusCode};

/// Sink for an HTTP file response: headers first, then the body bytes.
pub trait ResponseWriter: Write {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue);
}

/// In-memory [`ResponseWriter`] that can be turned into an
/// [`http::Response`].
#[derive(Debug, Default)]
pub struct ResponseBuffer {
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Header value as text, if present and visible ASCII.
    pub fn header_str(&self, name: HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// A `200 OK` response carrying the captured headers and body.
    pub fn into_response(self) -> Response<Vec<u8>> {
        let mut resp = Response::new(self.body);
        *resp.status_mut() = StatusCode::OK;
        *resp.headers_mut() = self.headers;
        resp
    }
}

impl Write for ResponseBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseWriter for ResponseBuffer {
    fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}
