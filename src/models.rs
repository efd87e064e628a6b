//! Data models and DTOs (Data Transfer Objects)
//!
//! Contains all request/response structures used by the API.

use serde::{Deserialize, Serialize};

/// A single todo item as exposed by the API
///
/// `title` and `status` are always strings here; NULL columns are coerced to
/// empty strings before a row leaves the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub status: String,
}

/// Body for POST /api/v1/todos
///
/// Fields are optional: an absent field is stored as NULL. Decoding is
/// structural only, no further validation.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Body for PUT /api/v1/todos/{id} (full update, both columns written)
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub status: Option<String>,
}

/// Body for PATCH /api/v1/todos/{id}/status
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

/// Body for PATCH /api/v1/todos/{id}/title
#[derive(Debug, Deserialize)]
pub struct UpdateTitleRequest {
    pub title: Option<String>,
}
