//! # Grouped Error Report
//!
//! Turns the flat record list into a readable report. Records are
//! partitioned by instance path, each group is reduced to one entry per
//! genuinely distinct problem, and the result renders as indented
//! lines. A single semantic failure at one path often produces several
//! raw records; the reduction cuts that noise without discarding the
//! reason validation failed.
//!
//! Reduction runs three passes per group, in fixed order:
//!
//! 1. Drop `anyOf` summary records when more specific failures share
//!    the path. A lone `anyOf` record is never dropped.
//! 2. Collapse two or more `type` records into a single entry listing
//!    the acceptable types; a single `type` record falls through.
//! 3. Render what remains: `enum` records list their allowed values,
//!    everything else keeps the engine's message verbatim.
//!
//! Everything here is pure: no I/O, no hidden state, byte-identical
//! output for identical input.

use serde_json::Value;

use crate::record::{ErrorRecord, Keyword, Params};

/// Label used for the empty instance path.
const ROOT_LABEL: &str = "(root of JSON)";

/// One reduced line of a group, before text rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEntry {
    /// Consolidated `type` failures: the acceptable type names, first
    /// occurrence first, deduplicated.
    TypeAlternatives(Vec<String>),
    /// An `enum` failure: the allowed values, in schema order.
    AllowedValues(Vec<Value>),
    /// Any other failure: the engine's message, verbatim.
    Message(String),
}

impl ReportEntry {
    /// The entry's report text, without indentation.
    fn render(&self) -> String {
        match self {
            ReportEntry::TypeAlternatives(types) => format!(
                "Value must be one of the following types: {}",
                types.join(", ")
            ),
            ReportEntry::AllowedValues(values) => format!(
                "Must be one of the following values: [{}]",
                values
                    .iter()
                    .map(display_value)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ReportEntry::Message(message) => message.clone(),
        }
    }
}

/// All reduced entries for one instance path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGroup {
    /// Instance path shared by the group's records; empty at the root.
    pub path: String,
    /// Reduced entries, in original record order. May be empty when
    /// suppression removed everything; the group still renders its
    /// header in that case.
    pub entries: Vec<ReportEntry>,
}

impl PathGroup {
    /// The path as shown in the report header.
    pub fn label(&self) -> &str {
        if self.path.is_empty() {
            ROOT_LABEL
        } else {
            &self.path
        }
    }
}

/// The reduced report, one group per distinct instance path, in
/// first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedReport {
    /// The reduced groups.
    pub groups: Vec<PathGroup>,
}

impl GroupedReport {
    /// Render the report as indented lines, ready for printing.
    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for group in &self.groups {
            lines.push(format!("  - At instance path: {}", group.label()));
            for entry in &group.entries {
                lines.push(format!("    - {}", entry.render()));
            }
        }
        lines
    }

    /// True when there were no records at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Partition records by instance path.
///
/// Keys appear in first-seen order and are exactly the distinct paths
/// present in `errors`, each once; within a group the original relative
/// order of records is kept. Every record lands in exactly one group.
pub fn group_errors(errors: &[ErrorRecord]) -> Vec<(String, Vec<ErrorRecord>)> {
    let mut groups: Vec<(String, Vec<ErrorRecord>)> = Vec::new();
    for record in errors {
        match groups
            .iter_mut()
            .find(|(path, _)| *path == record.instance_path)
        {
            Some((_, members)) => members.push(record.clone()),
            None => groups.push((record.instance_path.clone(), vec![record.clone()])),
        }
    }
    groups
}

/// Group a record list and reduce each group.
pub fn build_report(errors: &[ErrorRecord]) -> GroupedReport {
    let groups = group_errors(errors)
        .into_iter()
        .map(|(path, members)| PathGroup {
            path,
            entries: reduce_group(members),
        })
        .collect();
    GroupedReport { groups }
}

/// Apply the three reduction passes to one group's records.
fn reduce_group(mut records: Vec<ErrorRecord>) -> Vec<ReportEntry> {
    // Pass 1: with more specific failures present, the anyOf summary
    // ("none of the alternatives matched") adds nothing. The size check
    // happens before filtering, so a lone anyOf record survives.
    if records.len() > 1 {
        records.retain(|r| r.keyword != Keyword::AnyOf);
    }

    let mut entries = Vec::new();

    // Pass 2: collapse several type records into one entry listing the
    // unique acceptable types, first occurrence first.
    let type_count = records
        .iter()
        .filter(|r| r.keyword == Keyword::Type)
        .count();
    if type_count > 1 {
        let mut types: Vec<String> = Vec::new();
        for record in &records {
            if let Params::Type { expected } = &record.params {
                if !types.contains(expected) {
                    types.push(expected.clone());
                }
            }
        }
        entries.push(ReportEntry::TypeAlternatives(types));
        records.retain(|r| r.keyword != Keyword::Type);
    }

    // Pass 3: render the remainder.
    for record in records {
        match record {
            ErrorRecord {
                keyword: Keyword::Enum,
                params: Params::Enum { allowed_values },
                ..
            } => entries.push(ReportEntry::AllowedValues(allowed_values)),
            other => entries.push(ReportEntry::Message(other.message)),
        }
    }
    entries
}

/// Allowed values print the way the report expects to read: strings
/// bare, everything else as JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
