//! # Validator Adapter
//!
//! Wraps the `jsonschema` engine behind a stateless interface: compile
//! once, then every [`SchemaChecker::check`] call returns its own
//! verdict and record list. Callers never touch an "errors from the
//! last run" handle.
//!
//! The engine accepts any dialect it recognizes and does not treat
//! unknown keywords as fatal, so arbitrary schemas compile unless they
//! are structurally broken. `iter_errors` walks every failing
//! constraint rather than stopping at the first, which is what gives
//! the report something to group.

use jsonschema::Validator;
use serde_json::Value;

use crate::error::JsonvetError;
use crate::record::ErrorRecord;

/// Result of checking one document: the verdict plus every failing
/// constraint, in engine order.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// Whether the document conforms to the schema.
    pub valid: bool,
    /// One record per failed constraint; empty when valid.
    pub errors: Vec<ErrorRecord>,
}

/// A compiled schema, ready to check documents.
#[derive(Debug)]
pub struct SchemaChecker {
    validator: Validator,
}

impl SchemaChecker {
    /// Compile a schema.
    ///
    /// # Errors
    ///
    /// Returns [`JsonvetError::SchemaCompile`] when the schema itself
    /// is structurally invalid. Compile failures always propagate to
    /// the caller, never get swallowed.
    pub fn compile(schema: &Value) -> Result<Self, JsonvetError> {
        let validator = jsonschema::validator_for(schema).map_err(|e| {
            JsonvetError::SchemaCompile {
                reason: e.to_string(),
            }
        })?;
        tracing::debug!("schema compiled");
        Ok(Self { validator })
    }

    /// Check a document, collecting every failing constraint.
    pub fn check(&self, data: &Value) -> Outcome {
        let errors: Vec<ErrorRecord> = self
            .validator
            .iter_errors(data)
            .flat_map(ErrorRecord::from_engine_error)
            .collect();
        tracing::debug!(errors = errors.len(), "document checked");
        Outcome {
            valid: errors.is_empty(),
            errors,
        }
    }
}
