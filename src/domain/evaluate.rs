//! The evaluation orchestrator.
//!
//! Runs an ordered battery of checks against one note and collects the
//! results into an [`EvaluationReport`]. Evaluation is a pure function of the
//! note text and the identifier set: no I/O, no shared mutable state, and a
//! complete report for every input string.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, info};

use crate::domain::checks::{
    AliasesResolve, BlankLineAfterFrontMatter, Check, CheckOutcome, CodeBlocksClosed,
    HasFrontMatter, HeadingLevelsMonotonic, LinksExist, PropertiesParseClean,
    RequiredPropertiesPresent, TagsPresent, TitleHeadingPresent,
};
use crate::domain::{CheckResult, EvaluationReport, Note, VaultIds};

/// Front matter keys every note must carry unless configured otherwise.
pub const DEFAULT_REQUIRED_PROPERTIES: [&str; 2] = ["aliases", "created"];

/// Settings for the standard check battery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Keys the required-properties check looks for.
    pub required_properties: Vec<String>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            required_properties: DEFAULT_REQUIRED_PROPERTIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Runs a fixed, ordered list of checks.
///
/// `Evaluator` holds no mutable state and is `Send + Sync`, so one instance
/// can be shared across threads.
///
/// # Examples
///
/// ```
/// use notecheck::domain::{Evaluator, VaultIds};
///
/// let ids: VaultIds = ["Rust"].into_iter().collect();
/// let note = "---\ntags: [lang]\naliases: []\ncreated: 2024-01-15\n---\n\n# Ownership\n\nSee [[Rust]].\n";
///
/// let report = Evaluator::default().evaluate(note, &ids, false);
/// assert_eq!(report.score(), 1.0);
/// ```
pub struct Evaluator {
    checks: Vec<Box<dyn Check>>,
}

impl Evaluator {
    /// Builds the standard ten-check battery.
    pub fn new(config: &EvaluatorConfig) -> Self {
        Self::with_checks(vec![
            Box::new(HasFrontMatter),
            Box::new(PropertiesParseClean),
            Box::new(TagsPresent),
            Box::new(RequiredPropertiesPresent::new(
                config.required_properties.iter().cloned(),
            )),
            Box::new(LinksExist),
            Box::new(AliasesResolve),
            Box::new(TitleHeadingPresent),
            Box::new(HeadingLevelsMonotonic),
            Box::new(CodeBlocksClosed),
            Box::new(BlankLineAfterFrontMatter),
        ])
    }

    /// Builds an evaluator from an explicit list of checks, run in order.
    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Names of the checks in run order.
    pub fn check_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|c| c.name())
    }

    /// Evaluates `text` against the vault's identifiers.
    ///
    /// A check that returns an error or panics is recorded as a failure with
    /// the error as its diagnostic. With `verbose`, each result is logged at info level;
    /// the returned report is the same either way.
    pub fn evaluate(&self, text: &str, ids: &VaultIds, verbose: bool) -> EvaluationReport {
        let note = Note::parse(text);
        let mut report = EvaluationReport::new();

        for check in &self.checks {
            let name = check.name();
            let result = panic::catch_unwind(AssertUnwindSafe(|| check.run(&note, ids)));
            let CheckOutcome { passed, diagnostic } = match result {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(e)) => CheckOutcome::fail(format!("error: {}", e)),
                Err(payload) => CheckOutcome::fail(format!(
                    "error: check panicked: {}",
                    panic_message(&*payload)
                )),
            };

            if verbose {
                info!(
                    target: "notecheck::eval",
                    check = name,
                    passed,
                    diagnostic = diagnostic.as_deref().unwrap_or(""),
                    "{}: {}",
                    name,
                    if passed { "PASS" } else { "FAIL" }
                );
            } else {
                debug!(check = name, passed, "check finished");
            }

            report.push(CheckResult::new(name, passed, diagnostic));
        }

        if verbose {
            info!(
                target: "notecheck::eval",
                score = report.score(),
                "overall score {:.2} ({}/{} checks passed)",
                report.score(),
                report.passed_count(),
                report.total()
            );
        }

        report
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(&EvaluatorConfig::default())
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("checks", &self.check_names().collect::<Vec<_>>())
            .finish()
    }
}

/// Evaluates `text` with the standard battery and default required keys.
pub fn evaluate(text: &str, ids: &VaultIds, verbose: bool) -> EvaluationReport {
    Evaluator::default().evaluate(text, ids, verbose)
}
