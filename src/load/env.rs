//! Environment variable raw configuration source.

use super::RawSource;
use crate::error::{Result, SchemaError};
use config::Environment;
use serde_json::Value;

/// Environment variable raw configuration source.
///
/// Loads a raw configuration tree from environment variables with a
/// specified prefix and separator for nested keys.
///
/// # Examples
///
/// ```rust
/// use vetted_config::load::EnvSource;
///
/// // APP_SERVER__PORT=8080 -> server.port = 8080
/// let source = EnvSource::new("APP", "__");
/// ```
pub struct EnvSource {
    prefix: String,
    separator: String,
    priority: i32,
}

impl EnvSource {
    /// Create a new environment variable source.
    ///
    /// # Arguments
    ///
    /// * `prefix` - Prefix for environment variables (e.g., "APP")
    /// * `separator` - Separator for nested keys (e.g., "__" for APP_DB__HOST)
    pub fn new(prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            separator: separator.into(),
            priority: 300, // Env vars have highest priority by default
        }
    }

    /// Set the priority for this source.
    ///
    /// Higher priority sources override lower priority ones.
    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl RawSource for EnvSource {
    fn load(&self) -> Result<Value> {
        let env_source = Environment::with_prefix(&self.prefix)
            .separator(&self.separator)
            .try_parsing(true); // Parse numbers, booleans, etc.

        let loaded = config::Config::builder()
            .add_source(env_source)
            .build()
            .map_err(|e| {
                SchemaError::LoadError(format!("Failed to load environment variables: {}", e))
            })?;

        loaded.try_deserialize::<Value>().map_err(|e| {
            SchemaError::ParseError(format!("Failed to parse environment variables: {}", e))
        })
    }

    fn name(&self) -> String {
        format!("env:{}*", self.prefix)
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}
