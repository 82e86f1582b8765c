//! HTTP transport abstraction used by gateways.
//!
//! # Design
//! Requests and responses are plain data. A gateway builds an `HttpRequest`,
//! hands it to whatever `HttpClient` it was constructed with, and interprets
//! the returned `HttpResponse` itself. Clients report non-2xx statuses as
//! data; only transport failures come back as `Err`.

use std::fmt;

use serde_json::Value;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data. `body` is sent as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub body: Option<Value>,
}

/// An HTTP response described as plain data. An empty body is `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: Option<String>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Executes a single request. No retry, no timeout, no auth.
#[allow(async_fn_in_trait)]
pub trait HttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
