use std::net::SocketAddr;
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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub google_maps_api_key: String,
    /// Optional YAML override for the compiled-in Hamburg service area.
    pub zone_path: Option<PathBuf>,
    pub geocode_base_url: String,
    pub geocode_timeout_secs: u64,
    pub user_agent: String,
    pub rate_limit_per_minute: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("google_maps_api_key", &"[redacted]")
            .field("zone_path", &self.zone_path)
            .field("geocode_base_url", &self.geocode_base_url)
            .field("geocode_timeout_secs", &self.geocode_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("rate_limit_per_minute", &self.rate_limit_per_minute)
            .finish()
    }
}
