use crate::error::config::ConfigError;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub listen_addr: String,
    /// Event registrations target when the request names none. Single-event
    /// deployments set this once; the core itself always receives an
    /// explicit event id from the API layer.
    pub default_event_id: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_event_id = required_var("DEFAULT_EVENT_ID")?;
        let default_event_id =
            default_event_id
                .parse::<i32>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "DEFAULT_EVENT_ID".to_string(),
                    reason: e.to_string(),
                })?;

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            valkey_url: required_var("VALKEY_URL")?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            default_event_id,
        })
    }
}

fn required_var(var: &str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
}
