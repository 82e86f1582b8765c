//! Remote use-cases: each forwards its input to one gateway method.

use crate::domain::entities::{CreateToDoParams, ToDo, UpdateToDoParams};
use crate::domain::gateways::{
    CreateToDoGateway, DeleteToDoGateway, ListToDosGateway, UpdateToDoGateway,
};
use crate::domain::usecases::{
    CreateToDoUseCase, DeleteToDoUseCase, ListToDosUseCase, UpdateToDoUseCase,
};
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct RemoteListToDosUseCase<G> {
    gateway: G,
}

impl<G: ListToDosGateway> RemoteListToDosUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: ListToDosGateway> ListToDosUseCase for RemoteListToDosUseCase<G> {
    async fn list_to_dos(&self) -> Result<Vec<ToDo>, ApiError> {
        self.gateway.get_all().await
    }
}

#[derive(Debug, Clone)]
pub struct RemoteCreateToDoUseCase<G> {
    gateway: G,
}

impl<G: CreateToDoGateway> RemoteCreateToDoUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: CreateToDoGateway> CreateToDoUseCase for RemoteCreateToDoUseCase<G> {
    async fn create_to_do(&self, params: CreateToDoParams) -> Result<ToDo, ApiError> {
        self.gateway.create(params).await
    }
}

#[derive(Debug, Clone)]
pub struct RemoteUpdateToDoUseCase<G> {
    gateway: G,
}

impl<G: UpdateToDoGateway> RemoteUpdateToDoUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: UpdateToDoGateway> UpdateToDoUseCase for RemoteUpdateToDoUseCase<G> {
    async fn update_to_do(&self, params: UpdateToDoParams) -> Result<ToDo, ApiError> {
        self.gateway.update(params).await
    }
}

#[derive(Debug, Clone)]
pub struct RemoteDeleteToDoUseCase<G> {
    gateway: G,
}

impl<G: DeleteToDoGateway> RemoteDeleteToDoUseCase<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

impl<G: DeleteToDoGateway> DeleteToDoUseCase for RemoteDeleteToDoUseCase<G> {
    async fn delete_to_do(&self, id: &str) -> Result<(), ApiError> {
        self.gateway.delete(id).await
    }
}
