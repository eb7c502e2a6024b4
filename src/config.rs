use std::env;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};

/// Which key-value backend holds the TODO list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Redis,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub store_backend: StoreBackend,
    pub workspace_dir: PathBuf,
    pub static_dir: PathBuf,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let redis_url = env::var("REDIS_URL")
            .unwrap_or_else(|_| "redis://127.0.0.1:6379/0".to_string());

        let store_backend = match env::var("STORE_BACKEND")
            .unwrap_or_else(|_| "redis".to_string())
            .as_str()
        {
            "redis" => StoreBackend::Redis,
            "memory" => StoreBackend::Memory,
            other => bail!("STORE_BACKEND must be one of: redis, memory, got '{}'", other),
        };

        let workspace_dir = env::var("WORKSPACE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("workspace"));

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".well-known"));

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            redis_url,
            store_backend,
            workspace_dir,
            static_dir,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        match self.store_backend {
            StoreBackend::Redis => tracing::info!("  Store: redis at {}", self.redis_url),
            StoreBackend::Memory => tracing::info!("  Store: in-memory (not persisted)"),
        }
        tracing::info!("  Workspace root: {}", self.workspace_dir.display());
        tracing::info!("  Static files: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Tests in this module mutate process-wide environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env_vars() {
        unsafe {
            env::remove_var("REDIS_URL");
            env::remove_var("STORE_BACKEND");
            env::remove_var("WORKSPACE_DIR");
            env::remove_var("STATIC_DIR");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
    }

    #[test]
    fn test_config_with_all_vars() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("REDIS_URL", "redis://cache:6380/2");
            env::set_var("STORE_BACKEND", "memory");
            env::set_var("WORKSPACE_DIR", "/srv/workspace");
            env::set_var("STATIC_DIR", "/srv/static");
            env::set_var("SERVICE_PORT", "8080");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.redis_url, "redis://cache:6380/2");
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.workspace_dir, PathBuf::from("/srv/workspace"));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "127.0.0.1");
        clear_env_vars();
    }

    #[test]
    fn test_config_with_defaults() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();

        let config = Config::from_env().unwrap();

        assert_eq!(config.redis_url, "redis://127.0.0.1:6379/0");
        assert_eq!(config.store_backend, StoreBackend::Redis);
        assert_eq!(config.workspace_dir, PathBuf::from("workspace"));
        assert_eq!(config.static_dir, PathBuf::from(".well-known"));
        assert_eq!(config.service_port, 8000);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_unknown_store_backend() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("STORE_BACKEND", "etcd");
        }

        let result = Config::from_env();
        clear_env_vars();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("STORE_BACKEND"));
    }

    #[test]
    fn test_invalid_port() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        clear_env_vars();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_env_vars();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        clear_env_vars();
        assert!(result.is_err());
    }
}
