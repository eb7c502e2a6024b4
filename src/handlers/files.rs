use crate::error::{ApiError, ErrorResponse};
use crate::filesystem;
use crate::models::{CreateFileQuery, PutFileQuery, ResultResponse};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::multipart::{Multipart, MultipartRejection},
    extract::Path,
    extract::Query,
    extract::State,
    http::StatusCode,
    Json,
};

/// Multipart form field carrying file uploads
const UPLOAD_FIELD: &str = "file";

/// Bytes of the `file` field, if the request carried one
///
/// A request that is not `multipart/form-data` at all counts as no upload.
async fn read_upload(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Option<Bytes>, ApiError> {
    let Ok(mut multipart) = multipart else {
        return Ok(None);
    };

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            return Ok(Some(field.bytes().await?));
        }
    }
    Ok(None)
}

/// POST /files/{path} handler - Create or truncate a file
///
/// Contents come from the `file` upload if present, else from the
/// `file_content` query parameter, else the file is left empty.
#[utoipa::path(
    post,
    path = "/files/{path}",
    params(
        ("path" = String, Path, description = "File, relative to the working directory"),
        ("file_content" = Option<String>, Query, description = "Text to write when no upload is sent")
    ),
    request_body(content = String, content_type = "multipart/form-data", description = "Optional `file` field with the raw contents"),
    responses(
        (status = 200, description = "File created", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace or malformed upload", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn create_file_handler(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
    Query(query): Query<CreateFileQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve(&file_path)?;

    match (read_upload(multipart).await?, query.file_content) {
        (Some(upload), _) => filesystem::write_file(&path, upload).await?,
        (None, Some(text)) => filesystem::write_file(&path, text).await?,
        (None, None) => filesystem::write_file(&path, "").await?,
    }

    tracing::info!("Created file {}", path.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("File created"))))
}

/// GET /files/{path} handler - Whole file as text
#[utoipa::path(
    get,
    path = "/files/{path}",
    params(
        ("path" = String, Path, description = "File, relative to the working directory")
    ),
    responses(
        (status = 200, description = "File contents in `result`", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Unreadable or not UTF-8", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn read_file_handler(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve(&file_path)?;
    let contents = filesystem::read_file(&path)
        .await?
        .ok_or(ApiError::FileNotFound)?;
    Ok((StatusCode::OK, Json(ResultResponse { result: contents })))
}

/// PUT /files/{path} handler - Overwrite a file, or rename it
///
/// With `new_file_path` the file is moved there. Without it the existing file
/// is overwritten with the `file` upload.
#[utoipa::path(
    put,
    path = "/files/{path}",
    params(
        ("path" = String, Path, description = "File, relative to the working directory"),
        ("new_file_path" = Option<String>, Query, description = "Rename destination; selects rename instead of overwrite")
    ),
    request_body(content = String, content_type = "multipart/form-data", description = "`file` field with the new contents"),
    responses(
        (status = 200, description = "File updated or renamed", body = ResultResponse),
        (status = 400, description = "Missing upload, malformed upload or path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn put_file_handler(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
    Query(query): Query<PutFileQuery>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve(&file_path)?;

    if let Some(new_file_path) = query.new_file_path {
        let to = state.workspace.resolve(&new_file_path)?;
        if !filesystem::rename_file(&path, &to).await? {
            return Err(ApiError::FileNotFound);
        }

        tracing::info!("Renamed file {} to {}", path.display(), to.display());
        return Ok((StatusCode::OK, Json(ResultResponse::new("File renamed"))));
    }

    let upload = read_upload(multipart)
        .await?
        .ok_or(ApiError::MissingUpload)?;
    if !filesystem::update_file(&path, upload).await? {
        return Err(ApiError::FileNotFound);
    }

    tracing::info!("Updated file {}", path.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("File updated"))))
}

/// DELETE /files/{path} handler - Remove a file
#[utoipa::path(
    delete,
    path = "/files/{path}",
    params(
        ("path" = String, Path, description = "File, relative to the working directory")
    ),
    responses(
        (status = 200, description = "File deleted", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse),
        (status = 500, description = "Filesystem error", body = ErrorResponse)
    ),
    tag = "files"
)]
pub async fn delete_file_handler(
    State(state): State<AppState>,
    Path(file_path): Path<String>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    let path = state.workspace.resolve(&file_path)?;
    if !filesystem::delete_file(&path).await? {
        return Err(ApiError::FileNotFound);
    }

    tracing::info!("Deleted file {}", path.display());
    Ok((StatusCode::OK, Json(ResultResponse::new("File deleted"))))
}
