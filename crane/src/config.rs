use std::env;
use thiserror::Error;

/// Environment variable naming the registry host or a full endpoint URL.
pub const EUREKA_HOST_VAR: &str = "EUREKA_HOST";

const ENDPOINT_PATH: &str = "eureka-server/v2/apps";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("You must define {EUREKA_HOST_VAR} environment variable")]
    MissingHost,
}

/// Registry location, resolved once at startup and passed into the client.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    host: String,
}

impl RegistryConfig {
    /// Builds a config from the raw setting value, as read from the
    /// environment or injected by tests. Unset or empty is fatal.
    pub fn new(value: Option<String>) -> Result<Self, ConfigError> {
        match value {
            Some(host) if !host.is_empty() => Ok(Self { host }),
            _ => Err(ConfigError::MissingHost),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(env::var(EUREKA_HOST_VAR).ok())
    }

    /// A value that already names the `apps` endpoint is used verbatim.
    /// Anything else is treated as a bare host[:port] and gets the fixed
    /// path, with `http://` prepended literally — even when the value
    /// carries its own scheme. Kept bug-for-bug with the original tool;
    /// do not make this scheme-aware.
    pub fn endpoint_url(&self) -> String {
        if self.host.contains("apps") {
            return self.host.clone();
        }
        format!("http://{}/{}", self.host, ENDPOINT_PATH)
    }
}
