//! Core validation engine types.

mod context;
mod handle;
mod path;
mod suite;
mod traverse;

pub use context::{ContextExtractor, ValidationContext};
pub use handle::SuiteHandle;
pub use path::{KeyPath, PathSegment};
pub use suite::{ConfigSuite, Snapshot};
