//! HTTP gateway for the to-do resource.
//!
//! # Design
//! `ToDoHttpGateway` holds the resource URL and an `HttpClient`. Each
//! operation builds one `HttpRequest`, sends it, and maps the response back
//! into domain types. The collection lives at `{url}` and items at
//! `{url}/{id}`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::application::http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::domain::entities::{CreateToDoParams, ToDo, UpdateToDoParams};
use crate::domain::gateways::{
    CreateToDoGateway, DeleteToDoGateway, ListToDosGateway, UpdateToDoGateway,
};
use crate::error::ApiError;

/// Wire body for POST and PATCH.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ToDoPayload<'a> {
    description: &'a str,
    is_done: bool,
}

#[derive(Debug, Clone)]
pub struct ToDoHttpGateway<C> {
    url: String,
    client: C,
}

impl<C: HttpClient> ToDoHttpGateway<C> {
    pub fn new(url: &str, client: C) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.url)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let response = self.client.request(request).await?;
        debug!(status = response.status_code, "received response");
        check_status(response)
    }
}

fn payload(description: &str, is_done: bool) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(ToDoPayload {
        description,
        is_done,
    })
    .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    if response.status_code == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status_code,
        body: response.body.unwrap_or_default(),
    })
}

fn decode<T: DeserializeOwned>(body: Option<String>) -> Result<T, ApiError> {
    let body = body.ok_or_else(|| ApiError::Deserialization("empty response body".to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

impl<C: HttpClient> ListToDosGateway for ToDoHttpGateway<C> {
    async fn get_all(&self) -> Result<Vec<ToDo>, ApiError> {
        let response = self
            .send(HttpRequest {
                url: self.url.clone(),
                method: HttpMethod::Get,
                body: None,
            })
            .await?;
        // A missing body and a JSON `null` both mean no to-dos.
        match response.body {
            None => Ok(Vec::new()),
            body => Ok(decode::<Option<Vec<ToDo>>>(body)?.unwrap_or_default()),
        }
    }
}

impl<C: HttpClient> CreateToDoGateway for ToDoHttpGateway<C> {
    async fn create(&self, params: CreateToDoParams) -> Result<ToDo, ApiError> {
        let response = self
            .send(HttpRequest {
                url: self.url.clone(),
                method: HttpMethod::Post,
                body: Some(payload(&params.description, false)?),
            })
            .await?;
        decode(response.body)
    }
}

impl<C: HttpClient> UpdateToDoGateway for ToDoHttpGateway<C> {
    async fn update(&self, params: UpdateToDoParams) -> Result<ToDo, ApiError> {
        let response = self
            .send(HttpRequest {
                url: self.item_url(&params.id),
                method: HttpMethod::Patch,
                body: Some(payload(&params.description, params.is_done)?),
            })
            .await?;
        match response.body {
            // 204: the server kept exactly what was sent.
            None => Ok(ToDo {
                id: params.id,
                description: params.description,
                is_done: params.is_done,
            }),
            body => decode(body),
        }
    }
}

impl<C: HttpClient> DeleteToDoGateway for ToDoHttpGateway<C> {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.send(HttpRequest {
            url: self.item_url(id),
            method: HttpMethod::Delete,
            body: None,
        })
        .await?;
        Ok(())
    }
}
