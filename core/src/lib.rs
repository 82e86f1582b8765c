//! Layered client core for the to-do service.
//!
//! # Overview
//! - `domain`: the `ToDo` entity plus gateway and use-case traits.
//! - `application`: the plain-data HTTP abstraction and the remote
//!   use-cases, each a pass-through to one gateway method.
//! - `infra`: the `reqwest` client and the HTTP gateway.
//! - `presentation`: view models for the list and the resizable input.
//!
//! # Design
//! Dependencies point inward. Use-cases only see gateway traits and the
//! gateway only sees the `HttpClient` trait, so every layer can be tested
//! with a spy standing in for the one below it.
//!
//! ```no_run
//! use todo_core::{ClientConfig, ReqwestHttpClient, RemoteListToDosUseCase, ToDoHttpGateway, ToDoList};
//!
//! # async fn run() {
//! let config = ClientConfig::from_env();
//! let gateway = ToDoHttpGateway::new(&config.api_url, ReqwestHttpClient::new());
//! let mut list = ToDoList::new(RemoteListToDosUseCase::new(&gateway));
//! list.load().await;
//! # }
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

pub use application::{
    HttpClient, HttpMethod, HttpRequest, HttpResponse, RemoteCreateToDoUseCase,
    RemoteDeleteToDoUseCase, RemoteListToDosUseCase, RemoteUpdateToDoUseCase,
};
pub use config::ClientConfig;
pub use domain::gateways::{CreateToDoGateway, DeleteToDoGateway, ListToDosGateway, UpdateToDoGateway};
pub use domain::usecases::{CreateToDoUseCase, DeleteToDoUseCase, ListToDosUseCase, UpdateToDoUseCase};
pub use domain::{CreateToDoParams, ToDo, UpdateToDoParams};
pub use error::ApiError;
pub use infra::{ReqwestHttpClient, ToDoHttpGateway};
pub use presentation::{LocalToDo, ResizableInputText, ToDoList};
