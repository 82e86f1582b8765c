//! Transport-agnostic gateway interfaces, one per to-do operation.
//!
//! Use-cases depend on these traits only; `infra` provides the HTTP-backed
//! implementation.

use crate::domain::entities::{CreateToDoParams, ToDo, UpdateToDoParams};
use crate::error::ApiError;

#[allow(async_fn_in_trait)]
pub trait ListToDosGateway {
    async fn get_all(&self) -> Result<Vec<ToDo>, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait CreateToDoGateway {
    async fn create(&self, params: CreateToDoParams) -> Result<ToDo, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait UpdateToDoGateway {
    async fn update(&self, params: UpdateToDoParams) -> Result<ToDo, ApiError>;
}

#[allow(async_fn_in_trait)]
pub trait DeleteToDoGateway {
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

// A single gateway value can back several use-cases by reference.

impl<T: ListToDosGateway> ListToDosGateway for &T {
    async fn get_all(&self) -> Result<Vec<ToDo>, ApiError> {
        (**self).get_all().await
    }
}

impl<T: CreateToDoGateway> CreateToDoGateway for &T {
    async fn create(&self, params: CreateToDoParams) -> Result<ToDo, ApiError> {
        (**self).create(params).await
    }
}

impl<T: UpdateToDoGateway> UpdateToDoGateway for &T {
    async fn update(&self, params: UpdateToDoParams) -> Result<ToDo, ApiError> {
        (**self).update(params).await
    }
}

impl<T: DeleteToDoGateway> DeleteToDoGateway for &T {
    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        (**self).delete(id).await
    }
}
