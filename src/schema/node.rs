//! The declarative schema model: a closed set of node variants.

use crate::error::{Result, SchemaError};
use crate::schema::builder::NamedDictBuilder;
use crate::schema::validator::Validator;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

/// The primitive type a [`SchemaNode::Scalar`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    /// Any JSON string.
    String,
    /// A whole number (fits in `i64`/`u64`).
    Integer,
    /// Any number, integer or float.
    Number,
    /// A boolean.
    Bool,
    /// An ISO-8601 calendar date string, e.g. `"2026-08-06"`.
    Date,
    /// An RFC 3339 date-time string, e.g. `"2026-08-06T12:00:00Z"`.
    DateTime,
}

impl ScalarType {
    /// Whether a raw value is of this type.
    ///
    /// Temporal types are carried as strings in the raw tree; a string
    /// that does not parse as the declared temporal type is a type
    /// mismatch, not an invalid value.
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Integer => value.as_number().is_some_and(|n| n.is_i64() || n.is_u64()),
            Self::Number => value.is_number(),
            Self::Bool => value.is_boolean(),
            Self::Date => value
                .as_str()
                .is_some_and(|s| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()),
            Self::DateTime => value
                .as_str()
                .is_some_and(|s| chrono::DateTime::parse_from_rfc3339(s).is_ok()),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::DateTime => "datetime",
        };
        write!(f, "{}", label)
    }
}

/// A human-readable label for a raw value's runtime type, used in
/// wrong-type messages.
pub(crate) fn value_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// One declared field of a [`SchemaNode::NamedDict`].
#[derive(Debug, Clone)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) required: bool,
    pub(crate) node: SchemaNode,
}

impl Field {
    /// The field's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field must be present in raw data.
    pub fn required(&self) -> bool {
        self.required
    }

    /// The schema the field's value is validated against.
    pub fn schema(&self) -> &SchemaNode {
        &self.node
    }
}

/// The declared fields of a named dict, in declaration order.
///
/// Construction checks the named-dict invariants (no duplicate names, no
/// empty names), so a `Fields` value in a schema is always well-formed.
#[derive(Debug, Clone, Default)]
pub struct Fields {
    entries: Vec<Field>,
}

impl Fields {
    pub(crate) fn new(entries: Vec<Field>) -> Result<Self> {
        let mut seen = HashSet::new();
        for field in &entries {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(Self { entries })
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.entries.iter()
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.entries.iter().find(|f| f.name == name)
    }

    /// Whether a field with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One position in the expected configuration structure.
///
/// A schema node is pure data: it describes shape and constraints and has
/// no behavior beyond self-description. Nodes compose by ownership
/// (`ListOf`/`DictOf`/`NamedDict` own their child nodes) and the engine
/// dispatches over the variants exhaustively.
///
/// # Examples
///
/// ```rust
/// use vetted_config::schema::{SchemaNode, Validator, Verdict};
///
/// let schema = SchemaNode::named_dict()
///     .required("name", SchemaNode::string())
///     .optional(
///         "port",
///         SchemaNode::integer().with_validator(Validator::new("Is x >= 1024", |v| {
///             Verdict::from(v.as_i64().is_some_and(|n| n >= 1024))
///         })),
///     )
///     .build()
///     .unwrap();
/// # let _ = schema;
/// ```
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// A scalar value of a declared primitive type.
    Scalar {
        /// The expected primitive type
        ty: ScalarType,
        /// Validators run in attachment order on type match
        validators: Vec<Validator>,
    },

    /// An ordered sequence whose elements all share one schema.
    ListOf {
        /// The schema every element is validated against
        element: Box<SchemaNode>,
        /// Validators run against the list itself
        validators: Vec<Validator>,
    },

    /// A mapping with arbitrary string keys and one uniform value schema.
    DictOf {
        /// The schema every value is validated against
        value: Box<SchemaNode>,
        /// Validators run against the mapping itself
        validators: Vec<Validator>,
    },

    /// A mapping with a fixed set of declared fields.
    NamedDict {
        /// The declared fields, in declaration order
        fields: Fields,
        /// Whether raw keys absent from the schema are tolerated
        allow_unknown: bool,
        /// Validators run against the mapping itself
        validators: Vec<Validator>,
    },

    /// A terminal position that accepts any value unchanged. Carries no
    /// children and no validators.
    Leaf,
}

impl SchemaNode {
    /// A scalar node of the given type.
    pub fn scalar(ty: ScalarType) -> Self {
        Self::Scalar {
            ty,
            validators: Vec::new(),
        }
    }

    /// A string scalar.
    pub fn string() -> Self {
        Self::scalar(ScalarType::String)
    }

    /// An integer scalar.
    pub fn integer() -> Self {
        Self::scalar(ScalarType::Integer)
    }

    /// A numeric scalar (integer or float).
    pub fn number() -> Self {
        Self::scalar(ScalarType::Number)
    }

    /// A boolean scalar.
    pub fn boolean() -> Self {
        Self::scalar(ScalarType::Bool)
    }

    /// A calendar-date scalar (`"YYYY-MM-DD"` string).
    pub fn date() -> Self {
        Self::scalar(ScalarType::Date)
    }

    /// An RFC 3339 date-time scalar.
    pub fn datetime() -> Self {
        Self::scalar(ScalarType::DateTime)
    }

    /// A terminal node accepting any value.
    pub fn leaf() -> Self {
        Self::Leaf
    }

    /// A list whose elements are validated against `element`.
    pub fn list_of(element: SchemaNode) -> Self {
        Self::ListOf {
            element: Box::new(element),
            validators: Vec::new(),
        }
    }

    /// A mapping with arbitrary keys whose values are validated against
    /// `value`.
    pub fn dict_of(value: SchemaNode) -> Self {
        Self::DictOf {
            value: Box::new(value),
            validators: Vec::new(),
        }
    }

    /// Start building a named dict with a fixed field set.
    pub fn named_dict() -> NamedDictBuilder {
        NamedDictBuilder::new()
    }

    /// Attach a validator to this node.
    ///
    /// Validators run in attachment order once the raw value has passed
    /// the node's type check. [`SchemaNode::Leaf`] accepts any value and
    /// carries no validators; attaching to one returns the node
    /// unchanged.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        match &mut self {
            Self::Scalar { validators, .. }
            | Self::ListOf { validators, .. }
            | Self::DictOf { validators, .. }
            | Self::NamedDict { validators, .. } => validators.push(validator),
            Self::Leaf => {}
        }
        self
    }

    /// The validators attached to this node, in attachment order.
    pub fn validators(&self) -> &[Validator] {
        match self {
            Self::Scalar { validators, .. }
            | Self::ListOf { validators, .. }
            | Self::DictOf { validators, .. }
            | Self::NamedDict { validators, .. } => validators,
            Self::Leaf => &[],
        }
    }
}
