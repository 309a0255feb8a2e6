//! File-based raw configuration source.

use super::RawSource;
use crate::error::{Result, SchemaError};
use config::File;
use serde_json::Value;
use std::path::PathBuf;

/// File-based raw configuration source.
///
/// Loads a raw configuration tree from YAML, TOML, or JSON files with
/// automatic format detection based on file extension.
///
/// # Examples
///
/// ```rust,no_run
/// use vetted_config::load::FileSource;
///
/// let source = FileSource::new("config/default.yaml");
/// ```
pub struct FileSource {
    path: PathBuf,
    priority: i32,
}

impl FileSource {
    /// Create a new file source with automatic format detection.
    ///
    /// The format is detected from the file extension:
    /// - `.yaml`, `.yml` -> YAML
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            priority: 100,
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

    /// Validate that the file extension is supported.
    fn validate_extension(&self) -> Result<()> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                SchemaError::LoadError(format!(
                    "Unable to determine file format for: {}",
                    self.path.display()
                ))
            })?;

        match extension {
            "yaml" | "yml" | "toml" | "json" => Ok(()),
            _ => Err(SchemaError::LoadError(format!(
                "Unsupported file extension: {}. Supported: .yaml, .yml, .toml, .json",
                extension
            ))),
        }
    }
}

impl RawSource for FileSource {
    fn load(&self) -> Result<Value> {
        self.validate_extension()?;

        if !self.path.exists() {
            return Err(SchemaError::LoadError(format!(
                "Configuration file not found: {}",
                self.path.display()
            )));
        }

        // The config crate auto-detects the format from the extension
        let loaded = config::Config::builder()
            .add_source(File::from(self.path.clone()).required(true))
            .build()
            .map_err(|e| SchemaError::LoadError(format!("Failed to load file: {}", e)))?;

        loaded
            .try_deserialize::<Value>()
            .map_err(|e| SchemaError::ParseError(format!("Failed to parse file: {}", e)))
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }

    fn priority(&self) -> i32 {
        self.priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_extension_supported() {
        for name in ["config.yaml", "config.yml", "config.toml", "config.json"] {
            assert!(FileSource::new(name).validate_extension().is_ok());
        }
    }

    #[test]
    fn test_validate_extension_unknown() {
        assert!(FileSource::new("config.txt").validate_extension().is_err());
        assert!(FileSource::new("config").validate_extension().is_err());
    }

    #[test]
    fn test_load_yaml_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        fs::write(
            &config_path,
            r#"
server:
  port: 8080
  host: localhost
"#,
        )
        .unwrap();

        let raw = FileSource::new(&config_path).load().unwrap();
        assert_eq!(raw["server"]["host"], serde_json::json!("localhost"));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = FileSource::new("/nonexistent/config.yaml").load();
        assert!(result.is_err());
    }

    #[test]
    fn test_with_priority() {
        let source = FileSource::new("config.yaml").with_priority(200);
        assert_eq!(source.priority(), 200);
    }

    #[test]
    fn test_name() {
        assert!(FileSource::new("config.yaml").name().contains("config.yaml"));
    }
}
