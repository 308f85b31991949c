use crate::connectors::ConnectorConfig;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub connectors: ConnectorConfig,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default = "DatabaseSettings::default_max_connections")]
    pub max_connections: u32,
}

/// Session token handling for the hosted identity service.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionSettings {
    /// Name of the cookie carrying the session token
    pub cookie_name: String,
    /// Lifetime of the session cookie set after a code exchange
    pub max_age_days: i64,
    /// How long a resolved session is trusted before asking the identity service again
    pub cache_ttl_secs: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            cookie_name: "lux_session_token".to_string(),
            max_age_days: 60,
            cache_ttl_secs: 60,
        }
    }
}

#[cfg(test)]
impl Settings {
    pub fn for_tests() -> Self {
        Self {
            database: DatabaseSettings {
                username: "postgres".to_string(),
                password: "postgres".to_string(),
                host: "127.0.0.1".to_string(),
                port: 5432,
                database_name: "lux".to_string(),
                max_connections: 1,
            },
            app_port: 0,
            app_host: "127.0.0.1".to_string(),
            session: SessionSettings::default(),
            connectors: ConnectorConfig::default(),
        }
    }
}

impl DatabaseSettings {
    const fn default_max_connections() -> u32 {
        5
    }

    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }

    pub fn connection_string_without_db(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}",
            self.username, self.password, self.host, self.port,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // configuration.yaml first, then LUX__APP_PORT style overrides
    let settings = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("LUX").separator("__"))
        .build()?;

    let mut config: Settings = settings.try_deserialize()?;

    // Secrets never live in the configuration file
    config.connectors.load_secrets_from_env();

    Ok(config)
}
