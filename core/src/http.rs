//! HTTP request and response values as plain data.
//!
//! # Design
//! The client describes every call as an `HttpRequest` and hands it to an
//! injected [`HttpExecutor`](crate::executor::HttpExecutor) for the actual
//! round-trip. Keeping requests as data makes every operation inspectable in
//! tests without a network, and keeps the bookkeeping layer (recorder,
//! tracker, handler dispatch) independent of the transport.
//!
//! All fields use owned types (`String`, `Vec`) so values can be stored and
//! replayed freely.

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Query pairs are kept separate from `path`; the executor is responsible
/// for encoding them into the final URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// A body-less request with no query parameters.
    pub fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// A request carrying a JSON body and the matching content-type header.
    pub fn json(method: HttpMethod, path: String, body: String) -> Self {
        Self {
            method,
            path,
            query: Vec::new(),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        }
    }
}

/// An HTTP response described as plain data.
///
/// Produced by the executor after running an `HttpRequest`. Non-2xx statuses
/// are data, not errors; interpretation is left to the recorder and handlers.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
