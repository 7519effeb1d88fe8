//! # Input Loading
//!
//! Reads and parses the two JSON inputs for a validation run. Parse
//! failures keep the parser's message so the user sees line/column
//! detail. No writes, no other side effects.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::JsonvetError;

/// Read a file and parse it as JSON.
///
/// # Errors
///
/// Returns [`JsonvetError::Read`] if the file cannot be read and
/// [`JsonvetError::Parse`] if its contents are not valid JSON.
pub fn load_json(path: &Path) -> Result<Value, JsonvetError> {
    let content = fs::read_to_string(path).map_err(|e| JsonvetError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|e| JsonvetError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    tracing::debug!(path = %path.display(), "loaded JSON document");
    Ok(value)
}

/// Load the schema/data pair for one validation run, schema first.
pub fn load_inputs(
    schema_path: &Path,
    data_path: &Path,
) -> Result<(Value, Value), JsonvetError> {
    let schema = load_json(schema_path)?;
    let data = load_json(data_path)?;
    Ok((schema, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn loads_valid_json() {
        let value = load_json(&fixture("reading-valid.json")).unwrap();
        assert_eq!(value["unit"], "celsius");
    }

    #[test]
    fn read_error_names_the_missing_file() {
        let err = load_json(&fixture("does-not-exist.json")).unwrap_err();
        match &err {
            JsonvetError::Read { path, .. } => {
                assert!(path.contains("does-not-exist.json"));
            }
            other => panic!("Expected Read error, got: {other}"),
        }
    }

    #[test]
    fn parse_error_includes_parser_detail() {
        let err = load_json(&fixture("not-json.json")).unwrap_err();
        match &err {
            JsonvetError::Parse { path, reason } => {
                assert!(path.contains("not-json.json"));
                // serde_json reports the position of the syntax error.
                assert!(reason.contains("line"), "missing parser detail: {reason}");
            }
            other => panic!("Expected Parse error, got: {other}"),
        }
        assert!(err.to_string().starts_with("invalid JSON in"));
    }

    #[test]
    fn loads_schema_and_data_pair() {
        let (schema, data) =
            load_inputs(&fixture("reading.schema.json"), &fixture("reading-valid.json")).unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(data["unit"], "celsius");
    }

    #[test]
    fn bad_schema_path_fails_before_data_is_touched() {
        let err = load_inputs(&fixture("does-not-exist.json"), &fixture("reading-valid.json"))
            .unwrap_err();
        assert!(matches!(err, JsonvetError::Read { .. }));
    }
}
