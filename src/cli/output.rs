//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{CheckResult, EvaluationReport};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// An evaluation report in JSON output.
#[derive(Debug, Serialize)]
pub struct ReportListing<'a> {
    pub score: f64,
    pub passed: usize,
    pub total: usize,
    pub checks: &'a [CheckResult],
}

impl<'a> From<&'a EvaluationReport> for ReportListing<'a> {
    fn from(report: &'a EvaluationReport) -> Self {
        Self {
            score: report.score(),
            passed: report.passed_count(),
            total: report.total(),
            checks: report.results(),
        }
    }
}

/// A saved note in JSON output.
#[derive(Debug, Serialize)]
pub struct SavedNote<'a> {
    pub name: &'a str,
    pub path: String,
    pub report: ReportListing<'a>,
}
