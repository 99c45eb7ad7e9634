use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub user_service: Option<UserServiceConfig>,
}

/// User Service connector configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserServiceConfig {
    /// Enable/disable User Service integration
    pub enabled: bool,
    /// Base URL for User Service (e.g., http://localhost:8082), `/api/users/{id}` is appended
    pub base_url: String,
    /// HTTP request timeout in seconds
    #[serde(default = "UserServiceConfig::default_timeout_secs")]
    pub timeout_secs: u64,
}

impl UserServiceConfig {
    const fn default_timeout_secs() -> u64 {
        10
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: "http://localhost:8082".to_string(),
            timeout_secs: Self::default_timeout_secs(),
        }
    }
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            user_service: Some(UserServiceConfig::default()),
        }
    }
}
