//! Raw configuration sources and layered merging.
//!
//! Nothing here validates anything: this layer only produces the raw
//! `serde_json::Value` tree that [`ConfigSuite`](crate::core::ConfigSuite)
//! consumes. Sources are merged in priority order, lowest first, so
//! higher-priority sources override lower ones.

mod env;
mod file;

pub use env::EnvSource;
pub use file::FileSource;

use crate::error::{Result, SchemaError};
use serde_json::Value;

/// Trait for raw configuration sources.
///
/// Implement this to feed [`Layers`] from custom places (remote APIs,
/// databases, key-value stores).
pub trait RawSource: Send + Sync {
    /// Load this source as a raw configuration tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<Value>;

    /// A human-readable name for this source (for logging/debugging).
    fn name(&self) -> String;

    /// The priority of this source (higher overrides lower).
    ///
    /// Default priorities:
    /// - Environment variables: 300
    /// - Layered files: 100, 110, 120, ... in the order added
    fn priority(&self) -> i32 {
        100
    }
}

/// An ordered stack of raw configuration sources.
///
/// Objects merge key-wise and recursively; scalars and lists from a
/// higher-priority source replace lower-priority values outright.
///
/// # Examples
///
/// ```rust,no_run
/// use vetted_config::load::Layers;
///
/// # fn example() -> vetted_config::error::Result<()> {
/// let raw = Layers::new()
///     .with_file("config/default.yaml")
///     .with_file("config/production.yaml")
///     .with_env_overrides("APP", "__")
///     .load()?;
/// # let _ = raw;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct Layers {
    sources: Vec<Box<dyn RawSource>>,
    files_added: usize,
}

impl Layers {
    /// Create an empty layer stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file layer with automatic format detection.
    ///
    /// Files are layered in the order they are added; later files have
    /// higher priority and override earlier files.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        let priority = 100 + (self.files_added as i32) * 10;
        self.files_added += 1;
        self.sources
            .push(Box::new(FileSource::new(path).with_priority(priority)));
        self
    }

    /// Add environment variable overrides with the given prefix and
    /// nested-key separator. Env vars take the highest default priority.
    #[must_use]
    pub fn with_env_overrides(mut self, prefix: &str, separator: &str) -> Self {
        self.sources.push(Box::new(EnvSource::new(prefix, separator)));
        self
    }

    /// Add a custom source.
    #[must_use]
    pub fn with_source<S: RawSource + 'static>(mut self, source: S) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Load and merge all layers into one raw configuration tree.
    ///
    /// # Errors
    ///
    /// Returns an error if no sources were added, or if any source fails
    /// to load or parse.
    pub fn load(&self) -> Result<Value> {
        if self.sources.is_empty() {
            return Err(SchemaError::LoadError(
                "No configuration sources specified".to_string(),
            ));
        }

        // Sort sources by priority (lowest first)
        let mut sorted: Vec<_> = self.sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());

        let mut merged = Value::Object(serde_json::Map::new());
        for source in sorted {
            let layer = source.load().map_err(|e| {
                SchemaError::LoadError(format!("Failed to load source '{}': {}", source.name(), e))
            })?;
            tracing::debug!(source = %source.name(), priority = source.priority(), "merging layer");
            merge(&mut merged, layer);
        }
        Ok(merged)
    }

    /// The source names in priority order.
    pub fn source_names(&self) -> Vec<String> {
        let mut sorted: Vec<_> = self.sources.iter().collect();
        sorted.sort_by_key(|s| s.priority());
        sorted.iter().map(|s| s.name()).collect()
    }
}

/// Merge `overlay` into `base`: objects merge recursively, everything
/// else replaces.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
