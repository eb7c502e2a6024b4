use crate::error::{ApiError, ErrorResponse};
use crate::filesystem;
use crate::models::{ContentsResponse, RenameDirectoryQuery, ResultResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};

/// GET /directories handler - Entries of the working directory
#[utoipa::path(
    get,
    path = routes::DIRECTORIES,
    responses(
        (status = 200, description = "Entry names, unsorted", body = ContentsResponse),
        (status = 404, description = "Working directory no longer exists", body = ErrorResponse)
    ),
    tag = "directories"
)]
pub async fn list_cwd_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<ContentsResponse>), ApiError> {
    let cwd = state.workspace.cwd();
    let contents = filesystem::list_dir(&cwd)
        .await?
        .ok_or(ApiError::DirectoryNotFound)?;
    Ok((StatusCode::OK, Json(ContentsResponse { contents })))
}

/// GET /directories/{path} handler - Entries of a named directory
#[utoipa::path(
    get,
    path = "/directories/{path}",
    params(
        ("path" = String, Path, description = "Directory, relative to the working directory")
    ),
    responses(
        (status = 200, description = "Entry names, unsorted", body = ContentsResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "Directory not found", body = ErrorResponse)
    ),
    tag = "directories"
)]
pub async fn list_directory_handler(
    State(state): State<AppState>,
    Path(dir_path): Path<String>,
) -> Result<(StatusCode, Json<ContentsResponse>), ApiError> {
    let path = state.workspace.resolve(&dir_path)?;
    let contents = filesystem::list_dir(&path)
        .await?
        .ok_or(ApiError::DirectoryNotFound)?;
    Ok((StatusCode::OK, Json(ContentsResponse { contents })))
}

/// POST /directories/{path} handler - Create a directory and its parents
///
/// Creating a directory that already exists succeeds.
#[utoipa::path(
    post,
    path = "/directories/{path}",
    params(
        ("path" = String, Path, description = "Directory, relative to the working directory")
    ),
    responses(
        (status = 200, description = "Directory created", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "directories"
)]
pub async fn create_directory_handler(
    State(state): State<AppState>,
    Path(dir_path): Path<String>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve(&dir_path)?;
    filesystem::create_dir(&path).await?;

    tracing::info!("Created directory {}", path.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("Directory created"))))
}

/// DELETE /directories/{path} handler - Remove an empty directory
#[utoipa::path(
    delete,
    path = "/directories/{path}",
    params(
        ("path" = String, Path, description = "Directory, relative to the working directory")
    ),
    responses(
        (status = 200, description = "Directory deleted", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "Directory not found", body = ErrorResponse),
        (status = 409, description = "Workspace root or working directory", body = ErrorResponse),
        (status = 500, description = "Directory not empty or filesystem error", body = ErrorResponse)
    ),
    tag = "directories"
)]
pub async fn delete_directory_handler(
    State(state): State<AppState>,
    Path(dir_path): Path<String>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve_entry(&dir_path)?;
    if !filesystem::delete_dir(&path).await? {
        return Err(ApiError::DirectoryNotFound);
    }

    tracing::info!("Deleted directory {}", path.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("Directory deleted"))))
}

/// PUT /directories/{path} handler - Rename or move a directory
#[utoipa::path(
    put,
    path = "/directories/{path}",
    params(
        ("path" = String, Path, description = "Directory, relative to the working directory"),
        ("new_dir_path" = String, Query, description = "Destination, relative to the working directory")
    ),
    responses(
        (status = 200, description = "Directory renamed", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "Directory not found", body = ErrorResponse),
        (status = 409, description = "Workspace root or working directory", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "directories"
)]
pub async fn rename_directory_handler(
    State(state): State<AppState>,
    Path(dir_path): Path<String>,
    Query(query): Query<RenameDirectoryQuery>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let from = state.workspace.resolve_entry(&dir_path)?;
    let to = state.workspace.resolve(&query.new_dir_path)?;
    if !filesystem::rename_dir(&from, &to).await? {
        return Err(ApiError::DirectoryNotFound);
    }

    tracing::info!("Renamed directory {} to {}", from.display(), to.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("Directory renamed"))))
}
