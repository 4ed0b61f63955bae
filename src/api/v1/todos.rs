//! Todo management handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use utoipa::{IntoParams, ToSchema};

use crate::api::AppState;
use crate::db::{Database, DbError, Id, StatusFilter, Todo, TodoRepository, validate_title};

use super::ErrorResponse;

/// Fixed message for a missing todo ID.
pub const NOT_FOUND_MESSAGE: &str = "Todo not found";

type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Todo response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TodoResponse {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Todo title
    #[schema(example = "Buy milk")]
    pub title: String,
    /// Whether the todo is done
    #[schema(example = false)]
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            completed: t.completed,
        }
    }
}

/// Create todo request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
    /// Todo title (must not be empty)
    #[schema(example = "Buy milk")]
    pub title: String,
    /// Initial completion state, defaults to false
    #[serde(default)]
    #[schema(example = false)]
    pub completed: bool,
}

/// Update todo request DTO
///
/// Both fields are required: an update replaces the whole todo.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
    /// New title (must not be empty)
    #[schema(example = "Buy oat milk")]
    pub title: String,
    /// New completion state
    #[schema(example = true)]
    pub completed: bool,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTodosQuery {
    /// Completion filter: all, completed or incomplete. Unknown values mean all.
    #[param(example = "incomplete")]
    pub status: Option<String>,
}

/// Confirmation for delete operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human readable confirmation
    #[schema(example = "Todo item deleted successfully")]
    pub message: String,
    /// Number of removed todos (bulk operations only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 2)]
    pub deleted_count: Option<u64>,
}

// =============================================================================
// Error mapping
// =============================================================================

fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: NOT_FOUND_MESSAGE.to_string(),
        }),
    )
}

fn db_error(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match e {
        DbError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => {
            warn!(error = %e, "Todo store operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// List todos
///
/// Returns todos in creation order, optionally filtered by completion
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    tag = "todos",
    params(ListTodosQuery),
    responses(
        (status = 200, description = "List of todos", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_todos<D: Database>(
    State(state): State<AppState<D>>,
    Query(query): Query<ListTodosQuery>,
) -> ApiResult<Json<Vec<TodoResponse>>> {
    let filter = StatusFilter::parse_lenient(query.status.as_deref());
    let todos = state.db().todos();

    let items = match filter.completed() {
        Some(completed) => todos.list_by_completion(completed).await,
        None => todos.list_all().await,
    }
    .map_err(db_error)?;

    Ok(Json(items.into_iter().map(TodoResponse::from).collect()))
}

/// Get a todo by ID
#[utoipa::path(
    get,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo found", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<Json<TodoResponse>> {
    let todo = state
        .db()
        .todos()
        .get_by_id(id)
        .await
        .map_err(db_error)?
        .ok_or_else(not_found)?;

    Ok(Json(TodoResponse::from(todo)))
}

/// Create a new todo
#[utoipa::path(
    post,
    path = "/api/v1/todos",
    tag = "todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = TodoResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_todo<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<TodoResponse>)> {
    validate_title(&req.title).map_err(db_error)?;

    let created = state
        .db()
        .todos()
        .insert(&req.title, req.completed)
        .await
        .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(created))))
}

/// Replace a todo's title and completion state
#[utoipa::path(
    put,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = TodoResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<TodoResponse>> {
    validate_title(&req.title).map_err(db_error)?;

    let updated = state
        .db()
        .todos()
        .update(id, &req.title, req.completed)
        .await
        .map_err(db_error)?
        .ok_or_else(not_found)?;

    Ok(Json(TodoResponse::from(updated)))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/api/v1/todos/{id}",
    tag = "todos",
    params(
        ("id" = i64, Path, description = "Todo ID")
    ),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_todo<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> ApiResult<Json<MessageResponse>> {
    let removed = state
        .db()
        .todos()
        .delete_by_id(id)
        .await
        .map_err(db_error)?;

    if !removed {
        return Err(not_found());
    }

    Ok(Json(MessageResponse {
        message: "Todo item deleted successfully".to_string(),
        deleted_count: None,
    }))
}

/// Delete every completed todo
#[utoipa::path(
    put,
    path = "/api/v1/todos/clear-completed",
    tag = "todos",
    responses(
        (status = 200, description = "Completed todos cleared", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn clear_completed_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state
        .db()
        .todos()
        .delete_where_completed()
        .await
        .map_err(db_error)?;

    Ok(Json(MessageResponse {
        message: "Completed todo items cleared successfully".to_string(),
        deleted_count: Some(deleted),
    }))
}

/// Delete every todo
#[utoipa::path(
    delete,
    path = "/api/v1/todos",
    tag = "todos",
    responses(
        (status = 200, description = "All todos cleared", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn clear_all_todos<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<MessageResponse>> {
    let deleted = state
        .db()
        .todos()
        .delete_all()
        .await
        .map_err(db_error)?;

    Ok(Json(MessageResponse {
        message: "All todo items cleared successfully".to_string(),
        deleted_count: Some(deleted),
    }))
}
