//! The declarative schema model and its construction surface.

mod builder;
mod describe;
pub(crate) mod node;
mod validator;

pub use builder::NamedDictBuilder;
pub use describe::describe;
pub use node::{Field, Fields, ScalarType, SchemaNode};
pub use validator::{Validator, Verdict};
