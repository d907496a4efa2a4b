//! Command implementations for the zoo CLI.
//!
//! This module owns the pipeline loop (lines in, habitat report out) and the
//! file I/O around it. Each command returns a result struct that can be
//! serialized to JSON or formatted for humans.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;

use crate::enrich::{self, DEFAULT_REFERENCE_DATE, SpeciesCounter};
use crate::parser::{self, GrammarMode};
use crate::report::HabitatReport;
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output: Serialize {
    /// Serialize to JSON string.
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| format!(r#"{{"error": "{e}"}}"#))
    }

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

/// Knobs shared by every pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// Arrival date for the run, and the default birth anchor.
    pub reference_date: NaiveDate,
    /// How manifest clauses are mapped to fields.
    pub grammar: GrammarMode,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            reference_date: DEFAULT_REFERENCE_DATE,
            grammar: GrammarMode::default(),
        }
    }
}

/// Parse a `--reference-date` argument.
pub fn parse_reference_date(raw: &str) -> Result<NaiveDate> {
    raw.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "invalid reference date {raw:?}, expected YYYY-MM-DD"
        ))
    })
}

/// Run the core pipeline over a sequence of manifest lines.
///
/// Lines are processed strictly in input order; that order determines ID
/// sequence numbers and within-species report ordering. Blank lines are
/// skipped; any other line that fails to parse aborts the run with the
/// parser's error. Counters are only advanced for lines that parsed.
pub fn build_report<I, S>(lines: I, opts: &PipelineOptions) -> Result<HabitatReport>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counters = SpeciesCounter::new();
    let mut report = HabitatReport::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let parsed = parser::parse_line(line, opts.grammar)?;
        let animal = enrich::enrich(parsed, &mut counters, opts.reference_date)?;
        report.add(animal);
    }

    Ok(report)
}

/// Result of `zoo process`.
#[derive(Debug, Serialize)]
pub struct ProcessResult {
    pub animals: usize,
    pub species: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

impl Output for ProcessResult {
    fn to_human(&self) -> String {
        match (&self.output, &self.report) {
            (Some(path), _) => format!(
                "✅ {} has been created successfully. ({} animals, {} species)",
                path.display(),
                self.animals,
                self.species
            ),
            // --stdout: the report itself is the human output.
            (None, Some(report)) => report.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Result of `zoo check`.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub animals: usize,
    pub species: usize,
}

impl Output for CheckResult {
    fn to_human(&self) -> String {
        format!(
            "✅ Manifest is well-formed: {} animals across {} species.",
            self.animals, self.species
        )
    }
}

/// Run the full pipeline: read the manifest, build the report, and either
/// write it to `output` or hand the text back for stdout printing.
///
/// The report is rendered in memory and written once at the end, so a
/// mid-run failure never leaves a partial report file behind.
pub fn process(
    input: &Path,
    output: &Path,
    to_stdout: bool,
    opts: &PipelineOptions,
) -> Result<ProcessResult> {
    let report = build_report(read_manifest(input)?.lines(), opts)?;
    let text = report.render();

    let result = if to_stdout {
        ProcessResult {
            animals: report.animal_count(),
            species: report.species_count(),
            output: None,
            report: Some(text),
        }
    } else {
        fs::write(output, &text)?;
        ProcessResult {
            animals: report.animal_count(),
            species: report.species_count(),
            output: Some(output.to_path_buf()),
            report: None,
        }
    };

    Ok(result)
}

/// Parse and enrich every manifest line without writing a report.
pub fn check(input: &Path, opts: &PipelineOptions) -> Result<CheckResult> {
    let report = build_report(read_manifest(input)?.lines(), opts)?;

    Ok(CheckResult {
        animals: report.animal_count(),
        species: report.species_count(),
    })
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::Source {
        path: path.to_path_buf(),
        source,
    })
}
