use serde::{Deserialize, Serialize};

/// A persisted to-do. `id` is assigned by the server on creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: String,
    pub description: String,
    pub is_done: bool,
}

/// Input for creating a to-do. New to-dos always start not done.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateToDoParams {
    pub description: String,
}

/// Full replacement of a to-do's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateToDoParams {
    pub id: String,
    pub description: String,
    pub is_done: bool,
}
