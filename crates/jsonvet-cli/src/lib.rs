//! # jsonvet-cli — Command-Line Interface
//!
//! Argument parsing and the driver that wires input loading, schema
//! compilation, validation, and report rendering together.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from the driver;
//!   `main` owns exit statuses, [`run`] owns everything else.
//! - All diagnostics go to stderr; stdout stays clean for machine
//!   consumption.

use std::path::PathBuf;

use clap::Parser;
use jsonvet_core::{build_report, load_inputs, JsonvetError, SchemaChecker};

/// Validate a JSON document against a JSON Schema and print a grouped,
/// human-readable report of validation failures.
#[derive(Parser, Debug)]
#[command(name = "jsonvet", version, about)]
pub struct Cli {
    /// Path to the JSON Schema file.
    #[arg(value_name = "path_to_schema.json")]
    pub schema: PathBuf,

    /// Path to the JSON data file to validate.
    #[arg(value_name = "path_to_data.json")]
    pub data: PathBuf,
}

/// Outcome of one driver run, mapped to an exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The data conforms to the schema.
    Valid,
    /// The data does not conform; the report was printed.
    Invalid,
}

/// Load both inputs, compile the schema, check the data, and print the
/// result to stderr.
///
/// On validation failure the raw diagnostics come first (the data
/// document and the serialized error records), then the grouped
/// report. Load and compile failures propagate to the caller.
pub fn run(cli: &Cli) -> Result<RunOutcome, JsonvetError> {
    tracing::debug!(
        schema = %cli.schema.display(),
        data = %cli.data.display(),
        "starting validation"
    );
    let (schema, data) = load_inputs(&cli.schema, &cli.data)?;
    let checker = SchemaChecker::compile(&schema)?;
    let outcome = checker.check(&data);

    if outcome.valid {
        eprintln!("✅ Data is valid!");
        return Ok(RunOutcome::Valid);
    }

    eprintln!("❌ Data is invalid:");
    eprintln!("DATA");
    eprintln!("{data:#}");
    eprintln!("ERRORS");
    match serde_json::to_string_pretty(&outcome.errors) {
        Ok(raw) => eprintln!("{raw}"),
        Err(_) => eprintln!("{:#?}", outcome.errors),
    }
    eprintln!("ERROR REPORT");
    for line in build_report(&outcome.errors).render() {
        eprintln!("{line}");
    }
    Ok(RunOutcome::Invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn both_positional_arguments_are_required() {
        let err = Cli::try_parse_from(["jsonvet", "schema.json"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from(["jsonvet"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn usage_line_names_both_paths() {
        let err = Cli::try_parse_from(["jsonvet"]).unwrap_err();
        let rendered = err.to_string();
        assert!(rendered.contains("<path_to_schema.json>"), "{rendered}");
        assert!(rendered.contains("<path_to_data.json>"), "{rendered}");
    }

    #[test]
    fn two_arguments_parse_into_paths() {
        let cli = Cli::try_parse_from(["jsonvet", "schema.json", "data.json"]).unwrap();
        assert_eq!(cli.schema, PathBuf::from("schema.json"));
        assert_eq!(cli.data, PathBuf::from("data.json"));
    }
}
