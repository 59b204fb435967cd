//! Server and backend configuration loaded from environment variables.

use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Maximum request body size for uploads (default: 20 MiB).
    pub max_upload_bytes: usize,
    /// Admin credentials. `None` when either env var is unset, in which
    /// case every login attempt fails.
    pub admin: Option<AdminCredentials>,
}

/// The two configured secret strings the admin login is checked against.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub name: String,
    pub passcode: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MAX_UPLOAD_BYTES`     | `20971520`                 |
    /// | `ADMIN_NAME`           | -- (login disabled if unset) |
    /// | `ADMIN_PASSCODE`       | -- (login disabled if unset) |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| (20 * 1024 * 1024).to_string())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        let admin = match (std::env::var("ADMIN_NAME"), std::env::var("ADMIN_PASSCODE")) {
            (Ok(name), Ok(passcode)) if !name.is_empty() && !passcode.is_empty() => {
                Some(AdminCredentials { name, passcode })
            }
            _ => {
                tracing::warn!("Admin credentials not configured, login is disabled");
                None
            }
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            max_upload_bytes,
            admin,
        }
    }
}

/// Gallery backend configuration: database plus object storage.
///
/// Absence is a supported state, not an error: without it the service runs
/// in fallback mode, serving the bundled catalog and rejecting writes.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub database_url: String,
    pub storage: StorageConfig,
}

/// Object storage selection, per the `STORAGE_BACKEND` env var.
#[derive(Debug, Clone)]
pub enum StorageConfig {
    /// `STORAGE_BACKEND=s3`: `S3_BUCKET`, `S3_REGION`, optional
    /// `S3_ENDPOINT` for S3-compatible hosts, `STORAGE_PUBLIC_URL`.
    S3 {
        bucket: String,
        region: String,
        endpoint: Option<String>,
        public_base_url: String,
    },
    /// `STORAGE_BACKEND=local`: `LOCAL_STORAGE_ROOT`, `STORAGE_PUBLIC_URL`.
    Local {
        root: PathBuf,
        public_base_url: String,
    },
}

impl BackendConfig {
    /// Load the backend configuration, or `None` when `DATABASE_URL` or
    /// the storage settings are missing (fallback mode).
    pub fn from_env() -> Option<Self> {
        let database_url = std::env::var("DATABASE_URL").ok()?;
        let storage = StorageConfig::from_env()?;
        Some(Self {
            database_url,
            storage,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Option<Self> {
        let backend = std::env::var("STORAGE_BACKEND").ok()?;
        match backend.as_str() {
            "s3" => Some(StorageConfig::S3 {
                bucket: std::env::var("S3_BUCKET").ok()?,
                region: std::env::var("S3_REGION").ok()?,
                endpoint: std::env::var("S3_ENDPOINT").ok(),
                public_base_url: std::env::var("STORAGE_PUBLIC_URL").ok()?,
            }),
            "local" => Some(StorageConfig::Local {
                root: PathBuf::from(std::env::var("LOCAL_STORAGE_ROOT").ok()?),
                public_base_url: std::env::var("STORAGE_PUBLIC_URL").ok()?,
            }),
            other => {
                tracing::warn!(backend = other, "Unknown STORAGE_BACKEND, running in fallback mode");
                None
            }
        }
    }
}
