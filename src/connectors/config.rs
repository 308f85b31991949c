use serde::{Deserialize, Serialize};

/// Configuration for external service connectors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectorConfig {
    #[serde(default)]
    pub identity_service: IdentityServiceConfig,
    #[serde(default)]
    pub completion_service: CompletionServiceConfig,
}

impl ConnectorConfig {
    /// Pull API keys from the environment; they are never read from configuration files.
    pub fn load_secrets_from_env(&mut self) {
        if self.identity_service.api_key.is_none() {
            self.identity_service.api_key = std::env::var("IDENTITY_SERVICE_API_KEY").ok();
        }
        if self.completion_service.api_key.is_none() {
            self.completion_service.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
    }
}

/// Hosted identity service (OAuth redirect, session exchange, session lookup)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityServiceConfig {
    /// Base URL of the identity service API (e.g. https://users.example.com/v1)
    pub base_url: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Service API key (from env: IDENTITY_SERVICE_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for IdentityServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4100".to_string(),
            timeout_secs: 10,
            api_key: None,
        }
    }
}

/// OpenAI-compatible chat completion service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionServiceConfig {
    /// Base URL; `/chat/completions` is appended
    pub base_url: String,
    pub model: String,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Longest gap between two streamed events before the reply is abandoned
    pub idle_timeout_secs: u64,
    /// Bearer key (from env: OPENAI_API_KEY)
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for CompletionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            connect_timeout_secs: 10,
            idle_timeout_secs: 60,
            api_key: None,
        }
    }
}
