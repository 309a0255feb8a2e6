//! Human-readable schema outlines for docs and tooling.

use crate::schema::node::{ScalarType, SchemaNode};

/// Render a markdown outline of a schema: one bullet per position, with
/// its type, required/optional marker, and validator descriptions.
///
/// # Examples
///
/// ```rust
/// use vetted_config::schema::{describe, SchemaNode};
///
/// let schema = SchemaNode::named_dict()
///     .required("name", SchemaNode::string())
///     .build()
///     .unwrap();
/// let outline = describe(&schema);
/// assert!(outline.contains("`name` (required): string"));
/// ```
pub fn describe(schema: &SchemaNode) -> String {
    let mut out = String::new();
    render(schema, None, 0, &mut out);
    out
}

fn render(node: &SchemaNode, label: Option<&str>, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let prefix = match label {
        Some(label) => format!("{}- {}: ", indent, label),
        None => format!("{}- ", indent),
    };

    match node {
        SchemaNode::Scalar { ty, .. } => {
            out.push_str(&prefix);
            out.push_str(&scalar_label(*ty));
            out.push('\n');
            render_validators(node, depth + 1, out);
        }
        SchemaNode::ListOf { element, .. } => {
            out.push_str(&prefix);
            out.push_str("list of:\n");
            render_validators(node, depth + 1, out);
            render(element, None, depth + 1, out);
        }
        SchemaNode::DictOf { value, .. } => {
            out.push_str(&prefix);
            out.push_str("dict with arbitrary keys, values:\n");
            render_validators(node, depth + 1, out);
            render(value, None, depth + 1, out);
        }
        SchemaNode::NamedDict {
            fields,
            allow_unknown,
            ..
        } => {
            out.push_str(&prefix);
            out.push_str("dict");
            if *allow_unknown {
                out.push_str(" (unknown keys tolerated)");
            }
            out.push('\n');
            render_validators(node, depth + 1, out);
            for field in fields.iter() {
                let marker = if field.required() { "required" } else { "optional" };
                let label = format!("`{}` ({})", field.name(), marker);
                render(field.schema(), Some(&label), depth + 1, out);
            }
        }
        SchemaNode::Leaf => {
            out.push_str(&prefix);
            out.push_str("any value\n");
        }
    }
}

fn render_validators(node: &SchemaNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for validator in node.validators() {
        out.push_str(&format!("{}- constraint: {}\n", indent, validator.description()));
    }
}

fn scalar_label(ty: ScalarType) -> String {
    ty.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Validator, Verdict};

    #[test]
    fn test_describe_nested_schema() {
        let schema = SchemaNode::named_dict()
            .required(
                "transactions",
                SchemaNode::list_of(
                    SchemaNode::named_dict()
                        .required("amount", SchemaNode::number())
                        .build()
                        .unwrap(),
                ),
            )
            .optional("comment", SchemaNode::string())
            .build()
            .unwrap();

        let outline = describe(&schema);
        assert!(outline.contains("`transactions` (required): list of:"));
        assert!(outline.contains("`amount` (required): number"));
        assert!(outline.contains("`comment` (optional): string"));
    }

    #[test]
    fn test_describe_lists_constraints() {
        let schema = SchemaNode::integer()
            .with_validator(Validator::new("Is x >= 1024", |_| Verdict::accept()));
        let outline = describe(&schema);
        assert!(outline.contains("- integer"));
        assert!(outline.contains("- constraint: Is x >= 1024"));
    }

    #[test]
    fn test_describe_unknown_keys_marker() {
        let schema = SchemaNode::named_dict().allow_unknown_keys().build().unwrap();
        assert!(describe(&schema).contains("unknown keys tolerated"));
    }
}
