use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML registry replacing the built-in province list.
    pub provinces_path: Option<PathBuf>,
    /// Joined onto relative source locations when set.
    pub source_base_url: Option<String>,
    /// Root for relative source locations when no base URL is configured.
    pub source_dir: PathBuf,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_sources: usize,
    pub max_retries: u32,
    pub retry_backoff_base_secs: u64,
}
