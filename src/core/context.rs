//! Validation context derivation and plumbing.
//!
//! A context extractor derives auxiliary reference data (for example, the
//! set of known currencies) from the raw configuration itself, once per
//! validation run. Context-aware validators receive the result as an
//! explicit, immutable [`ValidationContext`] value. Extraction failure
//! degrades to [`ValidationContext::Unavailable`]; it never faults the
//! run and is never retried mid-traversal.

use serde_json::Value;
use std::sync::Arc;

/// Type alias for context-extraction functions.
///
/// Called exactly once per suite construction, before traversal, with the
/// raw configuration. An `Err` is recorded as an unavailable context, not
/// propagated.
pub type ContextExtractor =
    Arc<dyn Fn(&Value) -> std::result::Result<Value, String> + Send + Sync>;

/// The reference data handed to context-aware validators.
///
/// Validators see unavailability explicitly and decide for themselves
/// whether it constitutes a violation; a missing or malformed context can
/// therefore degrade to validation failures but never crash the engine.
///
/// # Examples
///
/// ```rust
/// use vetted_config::core::ValidationContext;
/// use serde_json::json;
///
/// let ready = ValidationContext::Ready(json!(["NOK", "USD"]));
/// assert!(ready.is_available());
/// assert_eq!(ready.get(), Some(&json!(["NOK", "USD"])));
///
/// let missing = ValidationContext::Unavailable {
///     reason: "exchange_rates is not a mapping".to_string(),
/// };
/// assert!(missing.get().is_none());
/// assert!(missing.unavailable_reason().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationContext {
    /// Extraction succeeded; the derived value is available read-only for
    /// the rest of the run.
    Ready(Value),

    /// No extractor was configured, or extraction failed.
    Unavailable {
        /// Why the context could not be derived
        reason: String,
    },
}

impl ValidationContext {
    /// Derive the context for one validation run.
    pub(crate) fn derive(raw: &Value, extractor: Option<&ContextExtractor>) -> Self {
        let Some(extract) = extractor else {
            return Self::Unavailable {
                reason: "no context extractor configured".to_string(),
            };
        };

        match extract(raw) {
            Ok(context) => Self::Ready(context),
            Err(reason) => {
                tracing::debug!(%reason, "context extraction failed; continuing without context");
                Self::Unavailable { reason }
            }
        }
    }

    /// The derived context value, if extraction succeeded.
    pub fn get(&self) -> Option<&Value> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Unavailable { .. } => None,
        }
    }

    /// Whether a context value is available.
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Why the context is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable { reason } => Some(reason),
        }
    }
}
