use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{ContentsResponse, CwdResponse, ResultResponse, TodoResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "todo-fs-api",
        version = "1.0.0",
        description = "A TODO list backed by a key-value store, plus file and directory operations inside a workspace"
    ),
    paths(
        handlers::health::health_handler,
        handlers::todos::list_todos_handler,
        handlers::todos::get_todo_handler,
        handlers::todos::create_todo_handler,
        handlers::todos::delete_todo_handler,
        handlers::cwd::set_cwd_handler,
        handlers::cwd::get_cwd_handler,
        handlers::directories::list_cwd_handler,
        handlers::directories::list_directory_handler,
        handlers::directories::create_directory_handler,
        handlers::directories::delete_directory_handler,
        handlers::directories::rename_directory_handler,
        handlers::files::create_file_handler,
        handlers::files::read_file_handler,
        handlers::files::put_file_handler,
        handlers::files::delete_file_handler
    ),
    components(
        schemas(
            TodoResponse,
            ResultResponse,
            CwdResponse,
            ContentsResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "todos", description = "TODO list operations"),
        (name = "cwd", description = "Working directory operations"),
        (name = "directories", description = "Directory operations"),
        (name = "files", description = "File operations")
    )
)]
pub struct ApiDoc;
