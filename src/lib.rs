//! # vetted-config
//!
//! Schema-driven validation for nested configuration data with complete,
//! path-addressed error reporting.
//!
//! ## Overview
//!
//! `vetted-config` takes a raw configuration tree (`serde_json::Value`),
//! a declarative schema, and optionally a context-extraction function,
//! and produces either an immutable validated snapshot or the *complete*
//! list of violations — never just the first one. Every error carries the
//! exact key path of the offending value, so tooling can report all
//! problems at once instead of forcing fix-and-rerun cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use vetted_config::prelude::*;
//! use serde_json::json;
//!
//! let schema = SchemaNode::named_dict()
//!     .required("host", SchemaNode::string())
//!     .required(
//!         "port",
//!         SchemaNode::integer().with_validator(Validator::new("Is x >= 1024", |v| {
//!             Verdict::from(v.as_i64().is_some_and(|n| n >= 1024))
//!         })),
//!     )
//!     .build()
//!     .expect("well-formed schema");
//!
//! let suite = ConfigSuite::new(json!({"host": "localhost", "port": 80}), &schema);
//! assert!(!suite.valid());
//! assert_eq!(suite.errors()[0].key_path().to_string(), "port");
//!
//! let suite = ConfigSuite::new(json!({"host": "localhost", "port": 8080}), &schema);
//! assert!(suite.valid());
//! assert!(suite.snapshot().is_some());
//! ```
//!
//! ## Cross-field validation with a context
//!
//! A context extractor derives reference data from the raw configuration
//! itself; context-aware validators consult it without being able to
//! crash the engine. Extraction failure degrades to an unavailable
//! context that validators handle explicitly:
//!
//! ```rust
//! use vetted_config::prelude::*;
//! use serde_json::{json, Value};
//!
//! let currency = || {
//!     SchemaNode::string().with_validator(Validator::with_context(
//!         "Is x a known currency",
//!         |value, context| match context.get().and_then(Value::as_array) {
//!             Some(known) => Verdict::from(known.iter().any(|c| c == value)),
//!             None => Verdict::context_unavailable("known currencies could not be derived"),
//!         },
//!     ))
//! };
//!
//! let schema = SchemaNode::named_dict()
//!     .required("exchange_rates", SchemaNode::dict_of(SchemaNode::number()))
//!     .required("payout", currency())
//!     .build()
//!     .unwrap();
//!
//! let suite = ConfigSuite::with_context(
//!     json!({"exchange_rates": {"NOK": 9.5}, "payout": "NOK"}),
//!     &schema,
//!     |raw| match raw.get("exchange_rates").and_then(Value::as_object) {
//!         Some(rates) => Ok(Value::from(rates.keys().cloned().collect::<Vec<_>>())),
//!         None => Err("exchange_rates is not a mapping".to_string()),
//!     },
//! );
//! assert!(suite.valid());
//! ```
//!
//! ## Features
//!
//! - **Complete error reporting**: every violation in one pass, each with
//!   a stable, addressable key path
//! - **Context-aware validators**: cross-field checks against reference
//!   data derived once per run; "no context data, no crash"
//! - **Closed schema model**: `Scalar`, `ListOf`, `DictOf`, `NamedDict`,
//!   `Leaf` — dispatched exhaustively, malformed schemas rejected at
//!   construction time
//! - **Immutable suites**: a validated snapshot is never partially valid;
//!   [`SuiteHandle`](core::SuiteHandle) adds lock-free replace-only-if-valid
//!   sharing on top
//! - **Layered loading** (feature `load`): YAML/TOML/JSON files plus env
//!   var overrides, deep-merged by priority
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! vetted-config = { version = "0.1", features = ["load"] }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]
#![deny(unsafe_code)]

pub mod core;
pub mod error;
pub mod schema;

#[cfg(feature = "load")]
pub mod load;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use crate::core::{ConfigSuite, KeyPath, SuiteHandle, ValidationContext};
    pub use crate::error::{ErrorKind, Result, SchemaError, ValidationError};
    pub use crate::schema::{SchemaNode, Validator, Verdict};

    #[cfg(feature = "load")]
    pub use crate::load::Layers;
}
