use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Missing TODOs, directories and files become 404s. Store and filesystem
/// failures become a bare 500; the cause is logged, not returned.
#[derive(Debug)]
pub enum ApiError {
    /// TODO ID in the path is not an integer
    InvalidTodoId(String),
    /// No TODO under the requested ID
    TodoNotFound,
    /// Path is not an existing directory
    DirectoryNotFound,
    /// Path is not an existing regular file
    FileNotFound,
    /// Path escapes the workspace or contains `..`
    InvalidPath(String),
    /// Path is the workspace root or holds the working directory
    BusyDirectory(String),
    /// Request needed an upload in the `file` form field
    MissingUpload,
    /// Malformed multipart body
    Multipart(MultipartError),
    /// Key-value store failure
    Store(anyhow::Error),
    /// Filesystem failure other than absence
    Io(std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::InvalidTodoId(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid todo id: expected an integer, got '{}'", id),
            ),
            ApiError::TodoNotFound => (StatusCode::NOT_FOUND, "Todo not found".to_string()),
            ApiError::DirectoryNotFound => {
                (StatusCode::NOT_FOUND, "Directory not found".to_string())
            }
            ApiError::FileNotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            ApiError::InvalidPath(path) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid path: '{}' must stay inside the workspace", path),
            ),
            ApiError::BusyDirectory(path) => (
                StatusCode::CONFLICT,
                format!(
                    "Directory '{}' is the workspace root or contains the working directory",
                    path
                ),
            ),
            ApiError::MissingUpload => (
                StatusCode::BAD_REQUEST,
                "Missing upload: expected a multipart field named 'file'".to_string(),
            ),
            ApiError::Multipart(err) => {
                (err.status(), format!("Invalid multipart body: {}", err.body_text()))
            }
            ApiError::Store(err) => {
                tracing::error!("Store error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::Io(err) => {
                tracing::error!("Filesystem error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { detail });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Store(err)
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Io(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Multipart(err)
    }
}
