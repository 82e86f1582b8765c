use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mock_server::{app, ToDo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

/// `Router` is cheap to clone and clones share state.
async fn send(app: &Router, request: Request<String>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

const MISSING: &str = "/todos/00000000-0000-0000-0000-000000000000";

// --- list ---

#[tokio::test]
async fn list_empty() {
    let resp = send(&app(), empty_request("GET", "/todos")).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let to_dos: Vec<ToDo> = body_json(resp).await;
    assert!(to_dos.is_empty());
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = app();
    for description in ["first", "second", "third"] {
        let body = format!(r#"{{"description":"{description}"}}"#);
        let resp = send(&app, json_request("POST", "/todos", &body)).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = send(&app, empty_request("GET", "/todos")).await;
    let to_dos: Vec<ToDo> = body_json(resp).await;
    let descriptions: Vec<_> = to_dos.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);
}

// --- create ---

#[tokio::test]
async fn create_returns_201() {
    let resp = send(
        &app(),
        json_request("POST", "/todos", r#"{"description":"Buy milk","isDone":false}"#),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let to_do: ToDo = body_json(resp).await;
    assert_eq!(to_do.description, "Buy milk");
    assert!(!to_do.is_done);
    assert!(!to_do.id.is_empty());
}

#[tokio::test]
async fn create_malformed_json_returns_422() {
    let resp = send(&app(), json_request("POST", "/todos", r#"{"title":1}"#)).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- missing ids ---

#[tokio::test]
async fn get_not_found() {
    let resp = send(&app(), empty_request("GET", MISSING)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_not_found() {
    let resp = send(&app(), json_request("PATCH", MISSING, r#"{"isDone":true}"#)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_not_found() {
    let resp = send(&app(), empty_request("DELETE", MISSING)).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    let app = app();

    let resp = send(&app, json_request("POST", "/todos", r#"{"description":"Walk dog"}"#)).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: ToDo = body_json(resp).await;
    let item = format!("/todos/{}", created.id);

    let resp = send(&app, empty_request("GET", &item)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: ToDo = body_json(resp).await;
    assert_eq!(fetched.description, "Walk dog");

    // partial: only isDone
    let resp = send(&app, json_request("PATCH", &item, r#"{"isDone":true}"#)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: ToDo = body_json(resp).await;
    assert_eq!(updated.description, "Walk dog");
    assert!(updated.is_done);

    // full body, as the client sends it
    let resp = send(
        &app,
        json_request("PATCH", &item, r#"{"description":"Walk cat","isDone":false}"#),
    )
    .await;
    let updated: ToDo = body_json(resp).await;
    assert_eq!(updated.description, "Walk cat");
    assert!(!updated.is_done);

    let resp = send(&app, empty_request("DELETE", &item)).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    let resp = send(&app, empty_request("GET", &item)).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, empty_request("GET", "/todos")).await;
    let to_dos: Vec<ToDo> = body_json(resp).await;
    assert!(to_dos.is_empty());
}
