//! Lock-free shared access to the current validated suite.

use crate::core::context::ContextExtractor;
use crate::core::suite::ConfigSuite;
use crate::error::ValidationError;
use crate::schema::SchemaNode;
use arc_swap::ArcSwap;
use serde_json::Value;
use std::sync::Arc;

/// A shared handle to the most recently accepted [`ConfigSuite`].
///
/// Suites themselves are immutable; the handle is how long-lived
/// consumers follow configuration over time. Reads are lock-free via
/// `arc-swap`, and [`replace`](Self::replace) installs a replacement
/// suite only when the new raw data validates — an invalid candidate is
/// rejected and the current suite stays in place.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::SuiteHandle;
/// use vetted_config::schema::SchemaNode;
/// use serde_json::json;
///
/// let schema = SchemaNode::named_dict()
///     .required("port", SchemaNode::integer())
///     .build()
///     .unwrap();
///
/// let handle = SuiteHandle::new(json!({"port": 8080}), schema);
/// assert!(handle.current().valid());
///
/// // An invalid replacement is rejected; the old suite survives.
/// let rejected = handle.replace(json!({"port": "eighty"}));
/// assert!(rejected.is_err());
/// assert_eq!(handle.current().snapshot().unwrap().root()["port"], json!(8080));
///
/// // A valid replacement is installed atomically.
/// handle.replace(json!({"port": 9090})).unwrap();
/// assert_eq!(handle.current().snapshot().unwrap().root()["port"], json!(9090));
/// ```
pub struct SuiteHandle {
    /// The current suite, wrapped in ArcSwap for atomic replacement
    current: Arc<ArcSwap<ConfigSuite>>,
    schema: Arc<SchemaNode>,
    extractor: Option<ContextExtractor>,
}

impl SuiteHandle {
    /// Create a handle by validating initial raw data, without a context
    /// extractor.
    ///
    /// The initial suite is installed whether or not it is valid; inspect
    /// [`current`](Self::current) for the verdict.
    pub fn new(raw: Value, schema: SchemaNode) -> Self {
        Self::with_extractor(raw, schema, None)
    }

    /// Create a handle with a context extractor that every validation run
    /// (initial and replacements) will use.
    pub fn with_context<F>(raw: Value, schema: SchemaNode, extractor: F) -> Self
    where
        F: Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self::with_extractor(raw, schema, Some(Arc::new(extractor)))
    }

    fn with_extractor(raw: Value, schema: SchemaNode, extractor: Option<ContextExtractor>) -> Self {
        let suite = ConfigSuite::build(raw, &schema, extractor.clone());
        Self {
            current: Arc::new(ArcSwap::new(Arc::new(suite))),
            schema: Arc::new(schema),
            extractor,
        }
    }

    /// Get a reference-counted handle to the current suite.
    ///
    /// This is a lock-free read; it never blocks replacements or other
    /// readers.
    pub fn current(&self) -> Arc<ConfigSuite> {
        self.current.load_full()
    }

    /// Validate new raw data and install it as the current suite if it is
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns the complete violation list when the candidate is invalid;
    /// the current suite is left untouched in that case.
    pub fn replace(&self, raw: Value) -> std::result::Result<(), Vec<ValidationError>> {
        let suite = ConfigSuite::build(raw, &self.schema, self.extractor.clone());
        if !suite.valid() {
            tracing::debug!(
                errors = suite.errors().len(),
                "rejecting replacement config; keeping current suite"
            );
            return Err(suite.errors().to_vec());
        }

        // Atomically swap to the new suite
        self.current.store(Arc::new(suite));
        Ok(())
    }

    /// The schema every candidate configuration is validated against.
    pub fn schema(&self) -> &SchemaNode {
        &self.schema
    }
}

impl Clone for SuiteHandle {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
            schema: Arc::clone(&self.schema),
            extractor: self.extractor.clone(),
        }
    }
}
