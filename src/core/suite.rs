//! The config suite facade: one validation run, memoized.

use crate::core::context::{ContextExtractor, ValidationContext};
use crate::core::path::{KeyPath, PathSegment};
use crate::core::traverse::traverse;
use crate::error::ValidationError;
use crate::schema::SchemaNode;
use serde_json::Value;
use std::sync::Arc;

/// The outcome of validating one raw configuration against one schema.
///
/// Construction runs the full pipeline exactly once — context extraction,
/// traversal, error collection — and memoizes the result. A suite is
/// immutable; validating updated raw data means constructing a new suite.
///
/// Construction never faults on data problems. Every violation ends up in
/// [`errors`](Self::errors), so a caller inspecting an invalid suite gets
/// the complete set of problems in one pass.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::ConfigSuite;
/// use vetted_config::schema::SchemaNode;
/// use serde_json::json;
///
/// let schema = SchemaNode::named_dict()
///     .required("host", SchemaNode::string())
///     .required("port", SchemaNode::integer())
///     .build()
///     .unwrap();
///
/// let suite = ConfigSuite::new(json!({"host": "localhost", "port": 8080}), &schema);
/// assert!(suite.valid());
///
/// let suite = ConfigSuite::new(json!({"host": 1, "port": "x"}), &schema);
/// assert!(!suite.valid());
/// assert_eq!(suite.errors().len(), 2);
/// assert!(suite.snapshot().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSuite {
    errors: Vec<ValidationError>,
    snapshot: Option<Snapshot>,
}

impl ConfigSuite {
    /// Validate raw configuration against a schema, without a validation
    /// context.
    ///
    /// Context-aware validators in the schema will see an unavailable
    /// context and decide for themselves whether that is a violation.
    pub fn new(raw: Value, schema: &SchemaNode) -> Self {
        Self::build(raw, schema, None)
    }

    /// Validate raw configuration against a schema, deriving a validation
    /// context first.
    ///
    /// The extractor is called exactly once, before traversal, with the
    /// raw configuration. If it returns `Err`, the run continues with an
    /// unavailable context instead of faulting.
    pub fn with_context<F>(raw: Value, schema: &SchemaNode, extractor: F) -> Self
    where
        F: Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        Self::build(raw, schema, Some(Arc::new(extractor)))
    }

    pub(crate) fn build(
        raw: Value,
        schema: &SchemaNode,
        extractor: Option<ContextExtractor>,
    ) -> Self {
        let span = tracing::debug_span!("validate");
        let _guard = span.enter();

        let context = ValidationContext::derive(&raw, extractor.as_ref());
        let errors = traverse(&raw, schema, &context);
        tracing::debug!(errors = errors.len(), valid = errors.is_empty(), "validation complete");

        let snapshot = errors.is_empty().then(|| Snapshot::new(raw));
        Self { errors, snapshot }
    }

    /// Whether the raw configuration satisfied the schema completely.
    ///
    /// True iff zero error records were produced.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Every violation found, in traversal order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// The validated snapshot. `Some` iff the suite is valid — a snapshot
    /// is never partially valid.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }
}

/// An immutable, validated configuration tree.
///
/// Mirrors the raw data's shape; every value in it has passed its type
/// check and every attached validator. Cloning a snapshot is cheap (the
/// tree is shared).
#[derive(Debug, Clone)]
pub struct Snapshot {
    root: Arc<Value>,
}

impl Snapshot {
    fn new(root: Value) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// The root of the validated tree.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolve a key path to the value at that position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vetted_config::core::{ConfigSuite, KeyPath};
    /// use vetted_config::schema::SchemaNode;
    /// use serde_json::json;
    ///
    /// let schema = SchemaNode::named_dict()
    ///     .required("ports", SchemaNode::list_of(SchemaNode::integer()))
    ///     .build()
    ///     .unwrap();
    /// let suite = ConfigSuite::new(json!({"ports": [80, 443]}), &schema);
    /// let snapshot = suite.snapshot().unwrap();
    ///
    /// let path = KeyPath::root().with_field("ports").with_index(1);
    /// assert_eq!(snapshot.get(&path), Some(&json!(443)));
    /// ```
    pub fn get(&self, path: &KeyPath) -> Option<&Value> {
        let mut current: &Value = &self.root;
        for segment in path.segments() {
            current = match segment {
                PathSegment::Field(name) => current.as_object()?.get(name)?,
                PathSegment::Index(index) => current.as_array()?.get(*index)?,
            };
        }
        Some(current)
    }

    /// The string at a path, if present and a string.
    pub fn get_str(&self, path: &KeyPath) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// The integer at a path, if present and an integer.
    pub fn get_i64(&self, path: &KeyPath) -> Option<i64> {
        self.get(path).and_then(Value::as_i64)
    }

    /// The number at a path, if present and numeric.
    pub fn get_f64(&self, path: &KeyPath) -> Option<f64> {
        self.get(path).and_then(Value::as_f64)
    }

    /// The boolean at a path, if present and a boolean.
    pub fn get_bool(&self, path: &KeyPath) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }
}
