use crate::{ConfigError, FromEnv, env_or_default};

/// Name the client application is known by; it prefixes the `X-{name}-alert` headers.
pub const DEFAULT_APPLICATION_NAME: &str = "labellaStoreAppItem";

/// Application-level settings shared by every resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApplicationConfig {
    pub name: String,
}

impl ApplicationConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_APPLICATION_NAME)
    }
}

impl FromEnv for ApplicationConfig {
    /// Reads `APPLICATION_NAME`, defaulting to [`DEFAULT_APPLICATION_NAME`].
    fn from_env() -> Result<Self, ConfigError> {
        let name = env_or_default("APPLICATION_NAME", DEFAULT_APPLICATION_NAME);
        if name.trim().is_empty() {
            return Err(ConfigError::ParseError {
                key: "APPLICATION_NAME".to_string(),
                details: "must not be empty".to_string(),
            });
        }
        Ok(Self { name })
    }
}
