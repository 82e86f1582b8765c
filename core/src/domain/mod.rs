//! Entities and the interfaces the outer layers implement.

pub mod entities;
pub mod gateways;
pub mod usecases;

pub use entities::{CreateToDoParams, ToDo, UpdateToDoParams};
