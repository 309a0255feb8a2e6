//! The recursive traversal that matches raw data against a schema.
//!
//! The traverser walks raw value and schema node in lock-step, recording
//! every violation it finds. Nothing here faults: a wrong type stops
//! descent at that position only, one bad list element never blocks its
//! siblings, and validator rejections are collected rather than raised.

use crate::core::context::ValidationContext;
use crate::core::path::KeyPath;
use crate::error::{ErrorKind, ValidationError};
use crate::schema::node::value_label;
use crate::schema::{SchemaNode, Validator, Verdict};
use serde_json::Value;

/// Accumulates error records across one whole traversal.
struct Collector {
    errors: Vec<ValidationError>,
}

impl Collector {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn record(&mut self, kind: ErrorKind, path: &KeyPath, message: String, culprit: Value) {
        tracing::trace!(%kind, path = %path, %message, "violation");
        self.errors
            .push(ValidationError::new(kind, path.clone(), message, culprit));
    }
}

/// Walk `raw` against `schema`, returning every violation in traversal
/// order (pre-order, fields and indices in declared/encountered order).
pub(crate) fn traverse(
    raw: &Value,
    schema: &SchemaNode,
    context: &ValidationContext,
) -> Vec<ValidationError> {
    let mut collector = Collector::new();
    let mut path = KeyPath::root();
    walk(raw, schema, context, &mut path, &mut collector);
    collector.errors
}

fn walk(
    raw: &Value,
    node: &SchemaNode,
    context: &ValidationContext,
    path: &mut KeyPath,
    out: &mut Collector,
) {
    match node {
        SchemaNode::Leaf => {}

        SchemaNode::Scalar { ty, validators } => {
            if !ty.matches(raw) {
                out.record(
                    ErrorKind::WrongType,
                    path,
                    format!("expected {}, found {}", ty, value_label(raw)),
                    raw.clone(),
                );
                return;
            }
            run_validators(validators, raw, context, path, out);
        }

        SchemaNode::ListOf { element, validators } => {
            let Some(items) = raw.as_array() else {
                out.record(
                    ErrorKind::WrongType,
                    path,
                    format!("expected list, found {}", value_label(raw)),
                    raw.clone(),
                );
                return;
            };
            run_validators(validators, raw, context, path, out);
            for (index, item) in items.iter().enumerate() {
                path.push_index(index);
                walk(item, element, context, path, out);
                path.pop();
            }
        }

        SchemaNode::DictOf { value, validators } => {
            let Some(map) = raw.as_object() else {
                out.record(
                    ErrorKind::WrongType,
                    path,
                    format!("expected dict, found {}", value_label(raw)),
                    raw.clone(),
                );
                return;
            };
            run_validators(validators, raw, context, path, out);
            for (key, entry) in map {
                path.push_field(key);
                walk(entry, value, context, path, out);
                path.pop();
            }
        }

        SchemaNode::NamedDict {
            fields,
            allow_unknown,
            validators,
        } => {
            let Some(map) = raw.as_object() else {
                out.record(
                    ErrorKind::WrongType,
                    path,
                    format!("expected dict, found {}", value_label(raw)),
                    raw.clone(),
                );
                return;
            };
            run_validators(validators, raw, context, path, out);

            for field in fields.iter() {
                match map.get(field.name()) {
                    Some(entry) => {
                        path.push_field(field.name());
                        walk(entry, field.schema(), context, path, out);
                        path.pop();
                    }
                    None if field.required() => {
                        path.push_field(field.name());
                        out.record(
                            ErrorKind::MissingRequiredKey,
                            path,
                            format!("missing required key '{}'", field.name()),
                            Value::Null,
                        );
                        path.pop();
                    }
                    // Absent optional field: nothing to check.
                    None => {}
                }
            }

            if !allow_unknown {
                for (key, entry) in map.iter().filter(|(key, _)| !fields.contains(key)) {
                    path.push_field(key);
                    out.record(
                        ErrorKind::UnknownKey,
                        path,
                        format!("unknown key '{}'", key),
                        entry.clone(),
                    );
                    path.pop();
                }
            }
        }
    }
}

fn run_validators(
    validators: &[Validator],
    value: &Value,
    context: &ValidationContext,
    path: &KeyPath,
    out: &mut Collector,
) {
    for validator in validators {
        match validator.check(value, context) {
            Verdict::Accept => {}
            Verdict::Reject(message) => out.record(
                ErrorKind::InvalidValue,
                path,
                message.unwrap_or_else(|| validator.description().to_string()),
                value.clone(),
            ),
            Verdict::ContextUnavailable(message) => out.record(
                ErrorKind::ContextUnavailable,
                path,
                message.unwrap_or_else(|| {
                    format!("context unavailable: {}", validator.description())
                }),
                value.clone(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaNode;
    use serde_json::json;

    fn no_context() -> ValidationContext {
        ValidationContext::Unavailable {
            reason: "no context extractor configured".to_string(),
        }
    }

    fn paths(errors: &[ValidationError]) -> Vec<String> {
        errors.iter().map(|e| e.key_path().to_string()).collect()
    }

    #[test]
    fn test_scalar_type_match() {
        let errors = traverse(&json!("x"), &SchemaNode::string(), &no_context());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_scalar_wrong_type_stops_validators() {
        let schema = SchemaNode::string().with_validator(Validator::new(
            "Is x non-empty",
            |value| Verdict::from(value.as_str().is_some_and(|s| !s.is_empty())),
        ));
        let errors = traverse(&json!(7), &schema, &no_context());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::WrongType);
        assert_eq!(errors[0].message(), "expected string, found number");
    }

    #[test]
    fn test_all_validators_run_after_a_rejection() {
        let schema = SchemaNode::integer()
            .with_validator(Validator::new("Is x positive", |v| {
                Verdict::from(v.as_i64().is_some_and(|n| n > 0))
            }))
            .with_validator(Validator::new("Is x even", |v| {
                Verdict::from(v.as_i64().is_some_and(|n| n % 2 == 0))
            }));
        let errors = traverse(&json!(-3), &schema, &no_context());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message(), "Is x positive");
        assert_eq!(errors[1].message(), "Is x even");
    }

    #[test]
    fn test_list_elements_validated_independently() {
        let schema = SchemaNode::list_of(SchemaNode::integer());
        let errors = traverse(&json!([1, "two", 3, "four"]), &schema, &no_context());
        assert_eq!(paths(&errors), vec!["[1]", "[3]"]);
        assert!(errors.iter().all(|e| e.kind() == ErrorKind::WrongType));
    }

    #[test]
    fn test_dict_of_paths_use_keys() {
        let schema = SchemaNode::dict_of(SchemaNode::number());
        let errors = traverse(
            &json!({"NOK": 9.5, "USD": "one", "EUR": 10.1}),
            &schema,
            &no_context(),
        );
        assert_eq!(paths(&errors), vec!["USD"]);
    }

    #[test]
    fn test_named_dict_missing_and_unknown_keys() {
        let schema = SchemaNode::named_dict()
            .required("host", SchemaNode::string())
            .required("port", SchemaNode::integer())
            .build()
            .unwrap();
        let errors = traverse(&json!({"host": "localhost", "prot": 80}), &schema, &no_context());

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind(), ErrorKind::MissingRequiredKey);
        assert_eq!(errors[0].key_path().to_string(), "port");
        assert_eq!(errors[0].culprit(), &Value::Null);
        assert_eq!(errors[1].kind(), ErrorKind::UnknownKey);
        assert_eq!(errors[1].key_path().to_string(), "prot");
    }

    #[test]
    fn test_named_dict_tolerates_unknown_when_allowed() {
        let schema = SchemaNode::named_dict()
            .required("host", SchemaNode::string())
            .allow_unknown_keys()
            .build()
            .unwrap();
        let errors = traverse(
            &json!({"host": "localhost", "extra": true}),
            &schema,
            &no_context(),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_field_absent_is_silent() {
        let schema = SchemaNode::named_dict()
            .optional("comment", SchemaNode::string())
            .build()
            .unwrap();
        assert!(traverse(&json!({}), &schema, &no_context()).is_empty());
    }

    #[test]
    fn test_present_optional_field_still_type_checked() {
        let schema = SchemaNode::named_dict()
            .optional("comment", SchemaNode::string())
            .build()
            .unwrap();
        let errors = traverse(&json!({"comment": 7}), &schema, &no_context());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), ErrorKind::WrongType);
        assert_eq!(errors[0].key_path().to_string(), "comment");
    }

    #[test]
    fn test_wrong_shape_stops_descent_but_not_siblings() {
        let schema = SchemaNode::named_dict()
            .required("servers", SchemaNode::list_of(SchemaNode::string()))
            .required("port", SchemaNode::integer())
            .build()
            .unwrap();
        let errors = traverse(
            &json!({"servers": "not-a-list", "port": "not-a-number"}),
            &schema,
            &no_context(),
        );
        assert_eq!(paths(&errors), vec!["servers", "port"]);
    }

    #[test]
    fn test_deep_nesting_paths() {
        let schema = SchemaNode::named_dict()
            .required(
                "clusters",
                SchemaNode::dict_of(SchemaNode::list_of(
                    SchemaNode::named_dict()
                        .required("weight", SchemaNode::number())
                        .build()
                        .unwrap(),
                )),
            )
            .build()
            .unwrap();
        let raw = json!({"clusters": {"eu": [{"weight": 0.5}, {"weight": "heavy"}]}});
        let errors = traverse(&raw, &schema, &no_context());
        assert_eq!(paths(&errors), vec!["clusters.eu[1].weight"]);
    }

    #[test]
    fn test_context_aware_validator_receives_context() {
        let schema = SchemaNode::string().with_validator(Validator::with_context(
            "Is x listed",
            |value, context| match context.get().and_then(Value::as_array) {
                Some(listed) => Verdict::from(listed.iter().any(|c| c == value)),
                None => Verdict::context_unavailable("reference list missing"),
            },
        ));

        let ready = ValidationContext::Ready(json!(["a", "b"]));
        assert!(traverse(&json!("a"), &schema, &ready).is_empty());

        let rejected = traverse(&json!("z"), &schema, &ready);
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].kind(), ErrorKind::InvalidValue);

        let unavailable = traverse(&json!("a"), &schema, &no_context());
        assert_eq!(unavailable.len(), 1);
        assert_eq!(unavailable[0].kind(), ErrorKind::ContextUnavailable);
        assert_eq!(unavailable[0].message(), "reference list missing");
    }

    #[test]
    fn test_leaf_accepts_anything() {
        let ctx = no_context();
        for raw in [json!(null), json!(1), json!("x"), json!({"a": [1]})] {
            assert!(traverse(&raw, &SchemaNode::leaf(), &ctx).is_empty());
        }
    }
}
