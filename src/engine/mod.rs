//! Engine transport layer
//!
//! The engine is reached through a single verb-dispatch operation,
//! [`EngineClient::transport_request`], which sends one HTTP-like request and
//! returns whatever status the engine answered with. [`dispatch`] turns that
//! raw answer into a result, honoring each request's list of ignored statuses.

pub mod http;
pub mod transform;

use std::fmt;

use tracing::debug;

use crate::error::{Result, engine_request_failed};

pub use http::HttpEngineClient;
pub use transform::TransformApi;

/// HTTP method of an engine request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// One request to the engine's transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,

    /// Path relative to the engine root (e.g., "_transform/my-job/_start")
    pub path: String,

    /// Raw query string without the leading '?'
    pub query: Option<String>,

    pub body: Option<String>,

    /// Statuses treated as success for this request
    pub ignore: Vec<u16>,
}

impl TransportRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            ignore: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn ignoring(mut self, status: u16) -> Self {
        self.ignore.push(status);
        self
    }

    /// Path plus query string, as sent on the wire
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

impl fmt::Display for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path_and_query())
    }
}

/// Status and body the engine answered with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineResponse {
    pub status: u16,
    pub body: String,
}

impl EngineResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok() -> Self {
        Self::new(200, r#"{"acknowledged":true}"#)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Verb-dispatch capability of the engine.
///
/// Implementations return `Ok` for every answer the engine gave, whatever its
/// status, and `Err` only when no answer could be obtained.
pub trait EngineClient {
    fn transport_request(&self, request: &TransportRequest) -> Result<EngineResponse>;
}

impl<T: EngineClient + ?Sized> EngineClient for &T {
    fn transport_request(&self, request: &TransportRequest) -> Result<EngineResponse> {
        (**self).transport_request(request)
    }
}

/// Send a request and fail on any status that is neither 2xx nor ignored
pub fn dispatch(client: &dyn EngineClient, request: &TransportRequest) -> Result<EngineResponse> {
    let response = client.transport_request(request)?;
    if response.is_success() {
        return Ok(response);
    }
    if request.ignore.contains(&response.status) {
        debug!(request = %request, status = response.status, "ignored engine status");
        return Ok(response);
    }
    Err(engine_request_failed(
        request,
        response.status,
        response.body.clone(),
    ))
}
