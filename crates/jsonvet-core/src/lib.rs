//! # jsonvet-core — Schema Validation & Grouped Error Reports
//!
//! Library behind the `jsonvet` CLI. Loads JSON documents from disk,
//! compiles a JSON Schema with the `jsonschema` engine, and reduces the
//! engine's flat error list into a grouped, per-path report that reads
//! like a human wrote it.
//!
//! ## Pipeline
//!
//! 1. [`load::load_inputs`] — read and parse the schema/data pair.
//! 2. [`validate::SchemaChecker`] — compile once, then every check
//!    returns its own [`validate::Outcome`] with a fresh record list.
//!    There is no "errors from the last run" handle to misuse.
//! 3. [`report::build_report`] — partition records by instance path and
//!    reduce each group to one entry per genuinely distinct problem.
//!
//! ## Crate Policy
//!
//! - No process concerns: no argument parsing, no exit codes, no
//!   printing. The CLI crate owns those.
//! - Report construction is pure: the same records in always produce
//!   the same lines out.
//! - JSON Schema keyword semantics belong to the `jsonschema` engine;
//!   this crate never reimplements them.

pub mod error;
pub mod load;
pub mod record;
pub mod report;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use error::JsonvetError;
pub use load::{load_inputs, load_json};
pub use record::{ErrorRecord, Keyword, Params};
pub use report::{build_report, group_errors, GroupedReport, PathGroup, ReportEntry};
pub use validate::{Outcome, SchemaChecker};
