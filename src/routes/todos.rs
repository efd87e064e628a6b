//! Todo route handlers
//!
//! Handles CRUD operations for todo items

use crate::error::ApiResult;
use crate::extractors::{Json, Path};
use crate::models::{
    CreateTodoRequest, Todo, UpdateStatusRequest, UpdateTitleRequest, UpdateTodoRequest,
};
use crate::state::SharedState;
use axum::extract::State;
use tracing::{debug, info};

/// List all todos ordered by id
pub async fn list_todos(State(state): State<SharedState>) -> ApiResult<Json<Vec<Todo>>> {
    debug!("Listing todos");

    let todos = state.todos.list_all().await?;

    debug!("Found {} todos", todos.len());

    Ok(Json(todos))
}

/// Get a specific todo
pub async fn get_todo(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<Todo>> {
    debug!("Getting todo: {}", id);

    let todo = state.todos.get_by_id(id).await?;

    Ok(Json(todo))
}

/// Create a new todo and return its generated id
pub async fn create_todo(
    State(state): State<SharedState>,
    Json(payload): Json<CreateTodoRequest>,
) -> ApiResult<Json<i32>> {
    debug!("Creating todo: {:?}", payload.title);

    let id = state
        .todos
        .insert(payload.title.as_deref(), payload.status.as_deref())
        .await?;

    info!("Todo created (id: {})", id);

    Ok(Json(id))
}

/// Replace a todo's title and status, returning the updated row
pub async fn replace_todo(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    debug!("Replacing todo: {}", id);

    let todo = state
        .todos
        .replace(id, payload.title.as_deref(), payload.status.as_deref())
        .await?;

    info!("Todo updated (id: {})", id);

    Ok(Json(todo))
}

/// Update only a todo's status
pub async fn update_status(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStatusRequest>,
) -> ApiResult<Json<&'static str>> {
    debug!("Updating status for todo: {}", id);

    state
        .todos
        .update_status(id, payload.status.as_deref())
        .await?;

    info!("Todo status updated (id: {})", id);

    Ok(Json("Update Status Successful"))
}

/// Update only a todo's title
pub async fn update_title(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTitleRequest>,
) -> ApiResult<Json<&'static str>> {
    debug!("Updating title for todo: {}", id);

    state
        .todos
        .update_title(id, payload.title.as_deref())
        .await?;

    info!("Todo title updated (id: {})", id);

    Ok(Json("Update Title Successful"))
}

/// Delete a todo
pub async fn delete_todo(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> ApiResult<Json<&'static str>> {
    debug!("Deleting todo: {}", id);

    state.todos.delete(id).await?;

    info!("Todo deleted (id: {})", id);

    Ok(Json("Success"))
}
