use akiya_replicate::ReplicateConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Directory the resolver reads demo photos from.
    pub demo_assets_dir: String,
    /// Upload body limit in bytes.
    pub max_upload_bytes: usize,
    /// Upstream model settings; `None` means mock generation.
    pub replicate: Option<ReplicateConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                |
    /// |------------------------|------------------------|
    /// | `HOST`                 | `0.0.0.0`              |
    /// | `PORT`                 | `8000`                 |
    /// | `CORS_ORIGINS`         | `*`                    |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                  |
    /// | `STATIC_DIR`           | `static`               |
    /// | `DEMO_ASSETS_DIR`      | `static/demo-images`   |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`             |
    ///
    /// Replicate settings are read by [`ReplicateConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".into());

        let demo_assets_dir =
            std::env::var("DEMO_ASSETS_DIR").unwrap_or_else(|_| "static/demo-images".into());

        let max_upload_bytes: usize = std::env::var("MAX_UPLOAD_BYTES")
            .unwrap_or_else(|_| "10485760".into())
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            static_dir,
            demo_assets_dir,
            max_upload_bytes,
            replicate: ReplicateConfig::from_env(),
        }
    }
}
