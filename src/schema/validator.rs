//! Validator attachment: verdicts and the context-free/context-aware split.
//!
//! Whether a validator needs the validation context is declared at
//! construction time through the two constructors, never discovered by
//! probing the callable at run time. The engine can therefore dispatch
//! without invoking anything speculatively.

use crate::core::ValidationContext;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// The outcome of one validator invocation.
///
/// Validators express "value is invalid" as an explicit verdict, not a
/// faulting condition, so the engine can keep collecting violations after
/// a rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The value is acceptable.
    Accept,
    /// The value is rejected, optionally with a custom message. Without
    /// one, the validator's description is used.
    Reject(Option<String>),
    /// The validator depends on the validation context and found it
    /// unavailable or unusable. Recorded as a context-unavailable
    /// violation rather than an ordinary rejection.
    ContextUnavailable(Option<String>),
}

impl Verdict {
    /// Accept the value.
    pub fn accept() -> Self {
        Self::Accept
    }

    /// Reject the value with a custom message.
    pub fn reject(message: impl Into<String>) -> Self {
        Self::Reject(Some(message.into()))
    }

    /// Reject the value; the validator's description becomes the message.
    pub fn reject_silently() -> Self {
        Self::Reject(None)
    }

    /// Report that the validation context needed to judge this value is
    /// unavailable.
    pub fn context_unavailable(message: impl Into<String>) -> Self {
        Self::ContextUnavailable(Some(message.into()))
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Accept
        } else {
            Self::Reject(None)
        }
    }
}

/// Type alias for context-free validator functions.
type ContextFreeFn = Arc<dyn Fn(&Value) -> Verdict + Send + Sync>;

/// Type alias for context-aware validator functions.
type ContextAwareFn = Arc<dyn Fn(&Value, &ValidationContext) -> Verdict + Send + Sync>;

enum ValidatorFn {
    ContextFree(ContextFreeFn),
    ContextAware(ContextAwareFn),
}

/// A named predicate attached to a schema position.
///
/// The description doubles as the default rejection message, so write it
/// as the statement the value failed to satisfy.
///
/// # Examples
///
/// ```rust
/// use vetted_config::schema::{Validator, Verdict};
///
/// let positive = Validator::new("Is x a positive number", |value| {
///     Verdict::from(value.as_f64().is_some_and(|n| n > 0.0))
/// });
/// assert!(!positive.is_context_aware());
///
/// let known = Validator::with_context("Is x a known currency", |value, context| {
///     let Some(currencies) = context.get() else {
///         return Verdict::context_unavailable("known currencies could not be derived");
///     };
///     match (value.as_str(), currencies.as_array()) {
///         (Some(code), Some(known)) => Verdict::from(known.iter().any(|c| c == code)),
///         _ => Verdict::reject_silently(),
///     }
/// });
/// assert!(known.is_context_aware());
/// ```
#[derive(Clone)]
pub struct Validator {
    description: String,
    func: ValidatorFn,
}

impl Validator {
    /// Create a context-free validator.
    pub fn new<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value) -> Verdict + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            func: ValidatorFn::ContextFree(Arc::new(func)),
        }
    }

    /// Create a context-aware validator.
    ///
    /// The second argument is the [`ValidationContext`] derived once per
    /// run; the validator must handle [`ValidationContext::Unavailable`]
    /// itself (typically by returning
    /// [`Verdict::context_unavailable`]).
    pub fn with_context<F>(description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &ValidationContext) -> Verdict + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            func: ValidatorFn::ContextAware(Arc::new(func)),
        }
    }

    /// The validator's description, used as the default rejection message.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this validator was declared context-aware.
    pub fn is_context_aware(&self) -> bool {
        matches!(self.func, ValidatorFn::ContextAware(_))
    }

    /// Run the validator against a value.
    pub(crate) fn check(&self, value: &Value, context: &ValidationContext) -> Verdict {
        match &self.func {
            ValidatorFn::ContextFree(func) => func(value),
            ValidatorFn::ContextAware(func) => func(value, context),
        }
    }
}

impl Clone for ValidatorFn {
    fn clone(&self) -> Self {
        match self {
            Self::ContextFree(func) => Self::ContextFree(Arc::clone(func)),
            Self::ContextAware(func) => Self::ContextAware(Arc::clone(func)),
        }
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("description", &self.description)
            .field("context_aware", &self.is_context_aware())
            .finish()
    }
}
