//! Builder for named dict schema nodes.

use crate::error::Result;
use crate::schema::node::{Field, Fields, SchemaNode};
use crate::schema::validator::Validator;

/// Builder for a [`SchemaNode::NamedDict`].
///
/// Fields keep their declaration order, which is also the traversal order
/// during validation. The named-dict invariants (unique, non-empty field
/// names) are checked in [`build`](Self::build); violating them is a
/// programmer error reported at schema-construction time, never during
/// validation.
///
/// # Examples
///
/// ```rust
/// use vetted_config::schema::SchemaNode;
///
/// let schema = SchemaNode::named_dict()
///     .required("url", SchemaNode::string())
///     .optional("timeout_ms", SchemaNode::integer())
///     .build()
///     .unwrap();
/// # let _ = schema;
/// ```
#[derive(Debug, Default)]
pub struct NamedDictBuilder {
    fields: Vec<Field>,
    allow_unknown: bool,
    validators: Vec<Validator>,
}

impl NamedDictBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field that must be present in raw data.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.push(Field {
            name: name.into(),
            required: true,
            node,
        });
        self
    }

    /// Declare a field that may be absent from raw data.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.push(Field {
            name: name.into(),
            required: false,
            node,
        });
        self
    }

    /// Tolerate raw keys that are not declared in the schema.
    ///
    /// Without this, every undeclared key is reported as an unknown-key
    /// violation.
    #[must_use]
    pub fn allow_unknown_keys(mut self) -> Self {
        self.allow_unknown = true;
        self
    }

    /// Attach a validator that runs against the mapping itself.
    #[must_use]
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Finish building, checking the named-dict invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::DuplicateField`](crate::error::SchemaError::DuplicateField)
    /// or [`SchemaError::EmptyFieldName`](crate::error::SchemaError::EmptyFieldName)
    /// when the declared fields are malformed.
    pub fn build(self) -> Result<SchemaNode> {
        Ok(SchemaNode::NamedDict {
            fields: Fields::new(self.fields)?,
            allow_unknown: self.allow_unknown,
            validators: self.validators,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SchemaError;

    #[test]
    fn test_build_preserves_declaration_order() {
        let schema = NamedDictBuilder::new()
            .required("b", SchemaNode::string())
            .optional("a", SchemaNode::integer())
            .build()
            .unwrap();

        let SchemaNode::NamedDict { fields, allow_unknown, .. } = schema else {
            panic!("expected a named dict");
        };
        let names: Vec<_> = fields.iter().map(|f| f.name().to_string()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(!allow_unknown);
    }

    #[test]
    fn test_duplicate_field_is_a_build_error() {
        let result = NamedDictBuilder::new()
            .required("port", SchemaNode::integer())
            .optional("port", SchemaNode::integer())
            .build();
        assert!(matches!(result, Err(SchemaError::DuplicateField { name }) if name == "port"));
    }

    #[test]
    fn test_allow_unknown_keys_flag() {
        let schema = NamedDictBuilder::new().allow_unknown_keys().build().unwrap();
        assert!(matches!(
            schema,
            SchemaNode::NamedDict { allow_unknown: true, .. }
        ));
    }
}
