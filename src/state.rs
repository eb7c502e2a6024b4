use crate::config::Config;
use crate::store::SharedStore;
use crate::todo::TodoRepository;
use crate::workspace::Workspace;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub todos: TodoRepository,
    pub workspace: Arc<Workspace>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: SharedStore, workspace: Workspace, config: Config) -> Self {
        Self {
            todos: TodoRepository::new(store.clone()),
            store,
            workspace: Arc::new(workspace),
            config: Arc::new(config),
        }
    }
}

/// State backed by an in-memory store and a throwaway workspace
///
/// The returned `TempDir` owns the workspace; keep it alive for the test.
#[cfg(test)]
pub async fn test_state() -> (tempfile::TempDir, AppState) {
    use crate::config::StoreBackend;
    use crate::store::MemoryStore;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let workspace_dir = dir.path().join("workspace");
    let static_dir = dir.path().join(".well-known");
    std::fs::create_dir_all(&static_dir).expect("Failed to create static dir");

    let config = Config {
        redis_url: "redis://127.0.0.1:6379/0".to_string(),
        store_backend: StoreBackend::Memory,
        workspace_dir: workspace_dir.clone(),
        static_dir,
        service_port: 8000,
        service_host: "127.0.0.1".to_string(),
    };

    let workspace = Workspace::open(&workspace_dir)
        .await
        .expect("Failed to open workspace");

    (dir, AppState::new(Arc::new(MemoryStore::new()), workspace, config))
}
