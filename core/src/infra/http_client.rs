//! `reqwest`-backed implementation of the `HttpClient` abstraction.

use reqwest::{Client, Method};

use crate::application::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::error::ApiError;

#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reuse an existing connection pool.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Patch => Method::PATCH,
        HttpMethod::Delete => Method::DELETE,
    }
}

impl HttpClient for ReqwestHttpClient {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status_code = response.status().as_u16();
        let text = response.text().await?;

        Ok(HttpResponse {
            status_code,
            body: if text.trim().is_empty() { None } else { Some(text) },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(to_reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(to_reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(to_reqwest_method(HttpMethod::Patch), Method::PATCH);
        assert_eq!(to_reqwest_method(HttpMethod::Delete), Method::DELETE);
    }

    #[tokio::test]
    async fn connection_refused_is_a_transport_error() {
        // Bind then drop to get a port nobody listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let client = ReqwestHttpClient::new();

        let err = client
            .request(HttpRequest {
                url: format!("http://127.0.0.1:{port}/todos"),
                method: HttpMethod::Get,
                body: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Transport(_)));
    }
}
