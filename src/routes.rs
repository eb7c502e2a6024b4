// Route path constants - single source of truth for all API paths

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HEALTH: &str = "/health";
pub const TODOS: &str = "/todos";
pub const TODO_ITEM: &str = "/todos/{id}";
pub const CWD: &str = "/cwd";
pub const DIRECTORIES: &str = "/directories";
pub const DIRECTORY_ITEM: &str = "/directories/{*path}";
pub const FILE_ITEM: &str = "/files/{*path}";
pub const STATIC_FILES: &str = "/.well-known";
pub const SWAGGER_UI: &str = "/docs";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route(HEALTH, get(handlers::health_handler))
        .route(
            TODOS,
            get(handlers::list_todos_handler).post(handlers::create_todo_handler),
        )
        .route(
            TODO_ITEM,
            get(handlers::get_todo_handler).delete(handlers::delete_todo_handler),
        )
        .route(
            CWD,
            get(handlers::get_cwd_handler).post(handlers::set_cwd_handler),
        )
        .route(DIRECTORIES, get(handlers::list_cwd_handler))
        .route(
            DIRECTORY_ITEM,
            get(handlers::list_directory_handler)
                .post(handlers::create_directory_handler)
                .put(handlers::rename_directory_handler)
                .delete(handlers::delete_directory_handler),
        )
        .route(
            FILE_ITEM,
            get(handlers::read_file_handler)
                .post(handlers::create_file_handler)
                .put(handlers::put_file_handler)
                .delete(handlers::delete_file_handler)
                // Uploads are written whole, whatever their size
                .layer(DefaultBodyLimit::disable()),
        )
        .nest_service(STATIC_FILES, static_files)
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_static_files_served_under_well_known() {
        let (_dir, state) = test_state().await;
        std::fs::write(state.config.static_dir.join("plugin.json"), r#"{"name":"todo"}"#).unwrap();
        let app = router(state);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/.well-known/plugin.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"name":"todo"}"#);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/.well-known/missing.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_openapi_document_served() {
        let (_dir, state) = test_state().await;

        let response = router(state)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(OPENAPI_JSON)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
