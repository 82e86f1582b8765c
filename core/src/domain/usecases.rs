//! Application operations exposed to the presentation layer.

use crate::domain::entities::{CreateToDoParams, ToDo, UpdateToDoParams};
use crate::error::ApiError;

#[allow(async_fn_in_trait)]
pub trait ListToDosUseCase {
    async fn list_to_dos(&self) -> Result<Vec<ToDo>, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CreateToDoUseCase {
    async fn create_to_do(&self, params: CreateToDoParams) -> Result<ToDo, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait UpdateToDoUseCase {
    async fn update_to_do(&self, params: UpdateToDoParams) -> Result<ToDo, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait DeleteToDoUseCase {
    async fn delete_to_do(&self, id: &str) -> Result<(), ApiError>;
}

impl<T: ListToDosUseCase> ListToDosUseCase for &T {
    async fn list_to_dos(&self) -> Result<Vec<ToDo>, ApiError> {
        (**self).list_to_dos().await
    }
}
