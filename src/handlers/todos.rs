use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateTodoQuery, ResultResponse, TodoResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use std::collections::BTreeMap;

fn parse_todo_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidTodoId(raw.to_string()))
}

/// GET /todos handler - List every TODO
///
/// Keys are TODO IDs, values read `"[<id>] <text>"`.
#[utoipa::path(
    get,
    path = routes::TODOS,
    responses(
        (status = 200, description = "All TODOs keyed by ID", body = BTreeMap<String, String>),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn list_todos_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<BTreeMap<String, String>>), ApiError> {
    let todos = state.todos.list().await?;

    tracing::info!("Listed {} todos", todos.len());
    Ok((StatusCode::OK, Json(todos)))
}

/// GET /todos/{id} handler - Fetch one TODO
#[utoipa::path(
    get,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "TODO ID")
    ),
    responses(
        (status = 200, description = "TODO found", body = TodoResponse),
        (status = 400, description = "ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn get_todo_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let id = parse_todo_id(&id_str)?;

    match state.todos.get(id).await? {
        Some(todo) => Ok((StatusCode::OK, Json(TodoResponse { todo_id: id, todo }))),
        None => {
            tracing::info!("Todo not found with id: {}", id);
            Err(ApiError::TodoNotFound)
        }
    }
}

/// POST /todos handler - Add a TODO under a freshly generated ID
#[utoipa::path(
    post,
    path = routes::TODOS,
    params(
        ("todo" = String, Query, description = "TODO text")
    ),
    responses(
        (status = 200, description = "TODO created", body = TodoResponse),
        (status = 400, description = "Missing todo parameter"),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    Query(query): Query<CreateTodoQuery>,
) -> Result<(StatusCode, Json<TodoResponse>), ApiError> {
    let id = state.todos.create(&query.todo).await?;

    tracing::info!("Created todo with id: {}", id);
    Ok((
        StatusCode::OK,
        Json(TodoResponse {
            todo_id: id,
            todo: query.todo,
        }),
    ))
}

/// DELETE /todos/{id} handler - Remove a TODO
#[utoipa::path(
    delete,
    path = routes::TODO_ITEM,
    params(
        ("id" = i64, Path, description = "TODO ID")
    ),
    responses(
        (status = 200, description = "TODO deleted", body = ResultResponse),
        (status = 400, description = "ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Todo not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "todos"
)]
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let id = parse_todo_id(&id_str)?;

    if !state.todos.delete(id).await? {
        return Err(ApiError::TodoNotFound);
    }

    tracing::info!("Deleted todo with id: {}", id);
    Ok((StatusCode::OK, Json(ResultResponse::new("Todo deleted"))))
}
