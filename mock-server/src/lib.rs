//! In-memory REST API for to-dos.
//!
//! Serves the collection at `/todos` and items at `/todos/{id}`. State lives
//! in a `Vec` so listings come back in insertion order.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: String,
    pub description: String,
    pub is_done: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateToDo {
    pub description: String,
    #[serde(default)]
    pub is_done: bool,
}

/// PATCH body. Omitted fields stay unchanged.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToDo {
    pub description: Option<String>,
    pub is_done: Option<bool>,
}

pub type Db = Arc<RwLock<Vec<ToDo>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/todos", get(list_to_dos).post(create_to_do))
        .route(
            "/todos/{id}",
            get(get_to_do).patch(update_to_do).delete(delete_to_do),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

/// Initialise logging from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}

async fn list_to_dos(State(db): State<Db>) -> Json<Vec<ToDo>> {
    let to_dos = db.read().await;
    debug!(count = to_dos.len(), "list");
    Json(to_dos.clone())
}

async fn create_to_do(
    State(db): State<Db>,
    Json(input): Json<CreateToDo>,
) -> (StatusCode, Json<ToDo>) {
    let to_do = ToDo {
        id: Uuid::new_v4().to_string(),
        description: input.description,
        is_done: input.is_done,
    };
    info!(id = %to_do.id, "created");
    db.write().await.push(to_do.clone());
    (StatusCode::CREATED, Json(to_do))
}

async fn get_to_do(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<ToDo>, StatusCode> {
    let to_dos = db.read().await;
    to_dos
        .iter()
        .find(|t| t.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn update_to_do(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<UpdateToDo>,
) -> Result<Json<ToDo>, StatusCode> {
    let mut to_dos = db.write().await;
    let to_do = to_dos
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if let Some(description) = input.description {
        to_do.description = description;
    }
    if let Some(is_done) = input.is_done {
        to_do.is_done = is_done;
    }
    info!(%id, "updated");
    Ok(Json(to_do.clone()))
}

async fn delete_to_do(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut to_dos = db.write().await;
    let index = to_dos
        .iter()
        .position(|t| t.id == id)
        .ok_or(StatusCode::NOT_FOUND)?;
    to_dos.remove(index);
    info!(%id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
