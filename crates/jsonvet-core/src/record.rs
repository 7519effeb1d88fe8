//! # Error Records
//!
//! The flat, engine-independent error model the report formatter
//! consumes: one record per failed constraint, carrying the instance
//! path, the failing keyword, the engine's message, and keyword-specific
//! parameters.
//!
//! Records derive `Serialize` so the CLI's raw diagnostic dump is real
//! JSON rather than a `Debug` blob.

use std::fmt;

use jsonschema::error::{TypeKind, ValidationErrorKind};
use jsonschema::ValidationError;
use serde::ser::{Serialize, Serializer};
use serde_json::Value;

/// The schema keyword that produced a record.
///
/// Only the keywords the reducer treats specially get their own
/// variants; every other keyword carries its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// A `type` constraint failed.
    Type,
    /// An `enum` constraint failed.
    Enum,
    /// An `anyOf` summary: none of the alternatives matched.
    AnyOf,
    /// Any other keyword, by name.
    Other(&'static str),
}

impl Keyword {
    /// The keyword's name as it appears in a schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Enum => "enum",
            Keyword::AnyOf => "anyOf",
            Keyword::Other(name) => name,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Keyword {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Keyword-specific structured detail attached to a record.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Params {
    /// A `type` failure: the single acceptable type for this record.
    Type {
        #[serde(rename = "type")]
        expected: String,
    },
    /// An `enum` failure: the full list of allowed values, schema order.
    Enum {
        #[serde(rename = "allowedValues")]
        allowed_values: Vec<Value>,
    },
    /// Any other keyword: raw detail as a JSON object.
    Other(Value),
}

/// One reported constraint failure.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    /// JSON-pointer-like location within the data document; empty for
    /// the document root.
    pub instance_path: String,
    /// The schema keyword that failed.
    pub keyword: Keyword,
    /// The engine's human-readable message.
    pub message: String,
    /// Keyword-specific structured detail.
    pub params: Params,
    /// The offending data fragment, when available. Shown only in the
    /// raw dump, never in the grouped report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<Value>,
}

impl ErrorRecord {
    /// Convert one engine error into records.
    ///
    /// A `type` error listing several acceptable types becomes one
    /// record per type, matching the shape engines that check each type
    /// separately would produce; the consolidation pass in the report
    /// depends on that shape. Every other error maps to exactly one
    /// record.
    pub fn from_engine_error(error: ValidationError<'_>) -> Vec<ErrorRecord> {
        let message = error.to_string();
        let instance_path = error.instance_path.to_string();
        let ValidationError { instance, kind, .. } = error;
        let instance = instance.into_owned();

        match kind {
            ValidationErrorKind::Type {
                kind: TypeKind::Multiple(types),
            } => types
                .into_iter()
                .map(|t| ErrorRecord {
                    instance_path: instance_path.clone(),
                    keyword: Keyword::Type,
                    message: format!("value is not of type \"{t}\""),
                    params: Params::Type {
                        expected: t.to_string(),
                    },
                    instance: Some(instance.clone()),
                })
                .collect(),
            ValidationErrorKind::Type {
                kind: TypeKind::Single(t),
            } => vec![ErrorRecord {
                instance_path,
                keyword: Keyword::Type,
                message,
                params: Params::Type {
                    expected: t.to_string(),
                },
                instance: Some(instance),
            }],
            ValidationErrorKind::Enum { options } => {
                let allowed_values = options.as_array().cloned().unwrap_or_default();
                vec![ErrorRecord {
                    instance_path,
                    keyword: Keyword::Enum,
                    message,
                    params: Params::Enum { allowed_values },
                    instance: Some(instance),
                }]
            }
            ValidationErrorKind::AnyOf { .. } => vec![ErrorRecord {
                instance_path,
                keyword: Keyword::AnyOf,
                message,
                params: Params::Other(serde_json::json!({})),
                instance: Some(instance),
            }],
            ValidationErrorKind::Required { property } => vec![ErrorRecord {
                instance_path,
                keyword: Keyword::Other("required"),
                message,
                params: Params::Other(serde_json::json!({ "missingProperty": property })),
                instance: Some(instance),
            }],
            other => vec![ErrorRecord {
                instance_path,
                keyword: Keyword::Other(keyword_name(&other)),
                message,
                params: Params::Other(serde_json::json!({})),
                instance: Some(instance),
            }],
        }
    }
}

/// Best-effort keyword name for engine error kinds the reducer does not
/// treat specially.
fn keyword_name(kind: &ValidationErrorKind) -> &'static str {
    match kind {
        ValidationErrorKind::AdditionalItems { .. } => "additionalItems",
        ValidationErrorKind::AdditionalProperties { .. } => "additionalProperties",
        ValidationErrorKind::Constant { .. } => "const",
        ValidationErrorKind::Contains { .. } => "contains",
        ValidationErrorKind::ExclusiveMaximum { .. } => "exclusiveMaximum",
        ValidationErrorKind::ExclusiveMinimum { .. } => "exclusiveMinimum",
        ValidationErrorKind::Format { .. } => "format",
        ValidationErrorKind::MaxItems { .. } => "maxItems",
        ValidationErrorKind::Maximum { .. } => "maximum",
        ValidationErrorKind::MaxLength { .. } => "maxLength",
        ValidationErrorKind::MaxProperties { .. } => "maxProperties",
        ValidationErrorKind::MinItems { .. } => "minItems",
        ValidationErrorKind::Minimum { .. } => "minimum",
        ValidationErrorKind::MinLength { .. } => "minLength",
        ValidationErrorKind::MinProperties { .. } => "minProperties",
        ValidationErrorKind::MultipleOf { .. } => "multipleOf",
        ValidationErrorKind::Not { .. } => "not",
        ValidationErrorKind::OneOfMultipleValid { .. } => "oneOf",
        ValidationErrorKind::OneOfNotValid { .. } => "oneOf",
        ValidationErrorKind::Pattern { .. } => "pattern",
        ValidationErrorKind::PropertyNames { .. } => "propertyNames",
        ValidationErrorKind::Required { .. } => "required",
        ValidationErrorKind::UniqueItems { .. } => "uniqueItems",
        _ => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(keyword: Keyword, params: Params) -> ErrorRecord {
        ErrorRecord {
            instance_path: "/value".to_string(),
            keyword,
            message: "something failed".to_string(),
            params,
            instance: None,
        }
    }

    #[test]
    fn keyword_names_round_trip() {
        assert_eq!(Keyword::Type.as_str(), "type");
        assert_eq!(Keyword::Enum.as_str(), "enum");
        assert_eq!(Keyword::AnyOf.as_str(), "anyOf");
        assert_eq!(Keyword::Other("required").as_str(), "required");
        assert_eq!(Keyword::AnyOf.to_string(), "anyOf");
    }

    #[test]
    fn type_params_serialize_with_engine_field_names() {
        let rec = record(
            Keyword::Type,
            Params::Type {
                expected: "string".to_string(),
            },
        );
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(
            value,
            json!({
                "instancePath": "/value",
                "keyword": "type",
                "message": "something failed",
                "params": { "type": "string" },
            })
        );
    }

    #[test]
    fn enum_params_serialize_allowed_values() {
        let rec = record(
            Keyword::Enum,
            Params::Enum {
                allowed_values: vec![json!("a"), json!(1)],
            },
        );
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["params"], json!({ "allowedValues": ["a", 1] }));
        assert_eq!(value["keyword"], "enum");
    }

    #[test]
    fn other_params_serialize_as_raw_object() {
        let rec = record(
            Keyword::Other("required"),
            Params::Other(json!({ "missingProperty": "unit" })),
        );
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["params"], json!({ "missingProperty": "unit" }));
    }

    #[test]
    fn instance_fragment_is_kept_when_present() {
        let mut rec = record(
            Keyword::Type,
            Params::Type {
                expected: "number".to_string(),
            },
        );
        rec.instance = Some(json!("21.5"));
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["instance"], json!("21.5"));
    }
}
