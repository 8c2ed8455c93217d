/// Default Replicate API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.replicate.com/v1";
/// Interior design model (erayyavuz/interior-ai) version hash.
pub const DEFAULT_MODEL_VERSION: &str =
    "e299c531485aac511610a878ef44b554381355de5ee032d109fcae5352f39fa9";
pub const DEFAULT_TIMEOUT_SECS: u64 = 90;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Connection settings for Replicate.
///
/// Only exists when an API token is configured; without one the server runs
/// in mock mode.
#[derive(Debug, Clone)]
pub struct ReplicateConfig {
    pub api_token: String,
    pub api_base: String,
    pub model_version: String,
    /// Upper bound on one generation, polling included.
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Download the first output URL and hand back its bytes.
    pub fetch_output: bool,
}

impl ReplicateConfig {
    /// Load from environment variables. Returns `None` when
    /// `REPLICATE_API_TOKEN` is unset or blank.
    ///
    /// | Env Var                      | Default                         |
    /// |------------------------------|---------------------------------|
    /// | `REPLICATE_API_TOKEN`        | (none, mock mode)               |
    /// | `REPLICATE_API_BASE`         | `https://api.replicate.com/v1`  |
    /// | `REPLICATE_MODEL_VERSION`    | interior-ai version hash        |
    /// | `GENERATION_TIMEOUT_SECS`    | `90`                            |
    /// | `REPLICATE_POLL_INTERVAL_MS` | `1000`                          |
    /// | `REPLICATE_FETCH_OUTPUT`     | `false`                         |
    pub fn from_env() -> Option<Self> {
        let api_token = non_empty_env("REPLICATE_API_TOKEN")?;

        let api_base = non_empty_env("REPLICATE_API_BASE")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let model_version = non_empty_env("REPLICATE_MODEL_VERSION")
            .unwrap_or_else(|| DEFAULT_MODEL_VERSION.to_string());

        let timeout_secs: u64 = std::env::var("GENERATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("GENERATION_TIMEOUT_SECS must be a valid u64");

        let poll_interval_ms: u64 = std::env::var("REPLICATE_POLL_INTERVAL_MS")
            .unwrap_or_else(|_| DEFAULT_POLL_INTERVAL_MS.to_string())
            .parse()
            .expect("REPLICATE_POLL_INTERVAL_MS must be a valid u64");

        let fetch_output: bool = std::env::var("REPLICATE_FETCH_OUTPUT")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("REPLICATE_FETCH_OUTPUT must be true or false");

        Some(Self {
            api_token,
            api_base,
            model_version,
            timeout_secs,
            poll_interval_ms,
            fetch_output,
        })
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
