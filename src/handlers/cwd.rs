use crate::error::{ApiError, ErrorResponse};
use crate::models::{CwdResponse, ResultResponse, SetCwdQuery};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// POST /cwd handler - Change the working directory
///
/// The target must be an existing directory inside the workspace.
#[utoipa::path(
    post,
    path = routes::CWD,
    params(
        ("dir_path" = String, Query, description = "New working directory, relative to the current one")
    ),
    responses(
        (status = 200, description = "Working directory changed", body = ResultResponse),
        (status = 400, description = "Path escapes the workspace", body = ErrorResponse),
        (status = 404, description = "Directory not found", body = ErrorResponse)
    ),
    tag = "cwd"
)]
pub async fn set_cwd_handler(
    State(state): State<AppState>,
    Query(query): Query<SetCwdQuery>,
) -> Result<(StatusCode, Json<ResultResponse>), ApiError> {
    state.workspace.set_cwd(&query.dir_path).await?;
    Ok((StatusCode::OK, Json(ResultResponse::new("CWD changed"))))
}

/// GET /cwd handler - Current working directory as an absolute path
#[utoipa::path(
    get,
    path = routes::CWD,
    responses(
        (status = 200, description = "Current working directory", body = CwdResponse)
    ),
    tag = "cwd"
)]
pub async fn get_cwd_handler(State(state): State<AppState>) -> (StatusCode, Json<CwdResponse>) {
    let cwd = state.workspace.cwd().display().to_string();
    (StatusCode::OK, Json(CwdResponse { cwd }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn current_cwd(app: &Router) -> String {
        let response = send(app, "GET", "/cwd").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: CwdResponse = serde_json::from_slice(&body).unwrap();
        response_json.cwd
    }

    #[tokio::test]
    async fn test_get_cwd_starts_at_workspace_root() {
        let (_dir, state) = test_state().await;
        let root = state.workspace.root().display().to_string();
        let app = crate::routes::router(state);

        assert_eq!(current_cwd(&app).await, root);
    }

    #[tokio::test]
    async fn test_set_cwd_then_get() {
        let (_dir, state) = test_state().await;
        let root = state.workspace.root().to_path_buf();
        std::fs::create_dir_all(root.join("projects/demo")).unwrap();
        let app = crate::routes::router(state);

        let response = send(&app, "POST", "/cwd?dir_path=projects").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: ResultResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.result, "CWD changed");

        assert_eq!(current_cwd(&app).await, root.join("projects").display().to_string());

        // Relative to the new working directory
        let response = send(&app, "POST", "/cwd?dir_path=demo").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            current_cwd(&app).await,
            root.join("projects/demo").display().to_string()
        );
    }

    #[tokio::test]
    async fn test_set_cwd_missing_directory() {
        let (_dir, state) = test_state().await;
        let app = crate::routes::router(state);

        let response = send(&app, "POST", "/cwd?dir_path=nowhere").await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_set_cwd_rejects_parent_traversal() {
        let (_dir, state) = test_state().await;
        let app = crate::routes::router(state);

        let response = send(&app, "POST", "/cwd?dir_path=..").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
