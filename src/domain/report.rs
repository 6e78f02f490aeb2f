//! Evaluation report types.
//!
//! A report is the ordered list of check results for one note plus the
//! aggregate pass-rate score.

use std::fmt;

use serde::Serialize;

/// Outcome of one named check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// The check's stable name.
    pub name: &'static str,
    pub passed: bool,
    /// Advisory detail; never affects the score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl CheckResult {
    pub fn new(name: &'static str, passed: bool, diagnostic: Option<String>) -> Self {
        Self {
            name,
            passed,
            diagnostic,
        }
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed { "PASS" } else { "FAIL" };
        match &self.diagnostic {
            Some(diag) => write!(f, "{}: {} ({})", self.name, status, diag),
            None => write!(f, "{}: {}", self.name, status),
        }
    }
}

/// Ordered check results for one note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluationReport {
    results: Vec<CheckResult>,
}

impl EvaluationReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result, keeping run order.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// All results in run order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// (name, passed) pairs in run order.
    pub fn pairs(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.results.iter().map(|r| (r.name, r.passed))
    }

    /// Looks up a result by check name.
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.results.iter().find(|r| r.name == name)
    }

    /// Returns whether the named check passed, or `None` if it did not run.
    pub fn passed(&self, name: &str) -> Option<bool> {
        self.get(name).map(|r| r.passed)
    }

    /// Results of checks that failed.
    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| !r.passed)
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Fraction of checks that passed, in [0, 1].
    ///
    /// An empty report scores 0.
    pub fn score(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.passed_count() as f64 / self.total() as f64
    }

    /// Returns true if every check passed.
    pub fn is_perfect(&self) -> bool {
        !self.results.is_empty() && self.passed_count() == self.total()
    }
}

/// Renders the per-check trace followed by the overall score.
impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            writeln!(f, "{}", result)?;
        }
        write!(
            f,
            "Overall score: {:.2} ({}/{} checks passed)",
            self.score(),
            self.passed_count(),
            self.total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(outcomes: &[(&'static str, bool)]) -> EvaluationReport {
        let mut report = EvaluationReport::new();
        for &(name, passed) in outcomes {
            report.push(CheckResult::new(name, passed, None));
        }
        report
    }

    #[test]
    fn empty_report_scores_zero() {
        let report = EvaluationReport::new();
        assert_eq!(report.score(), 0.0);
        assert!(!report.is_perfect());
    }

    #[test]
    fn score_is_pass_rate() {
        let report = report(&[("a", true), ("b", false), ("c", true), ("d", true)]);
        assert_eq!(report.score(), 0.75);
        assert_eq!(report.passed_count(), 3);
        assert_eq!(report.total(), 4);
    }

    #[test]
    fn lookup_by_name() {
        let report = report(&[("a", true), ("b", false)]);
        assert_eq!(report.passed("a"), Some(true));
        assert_eq!(report.passed("b"), Some(false));
        assert_eq!(report.passed("c"), None);
    }

    #[test]
    fn pairs_keep_order() {
        let report = report(&[("z", false), ("a", true)]);
        assert_eq!(report.pairs().collect::<Vec<_>>(), vec![("z", false), ("a", true)]);
    }

    #[test]
    fn failures_only() {
        let report = report(&[("a", true), ("b", false), ("c", false)]);
        let names: Vec<_> = report.failures().map(|r| r.name).collect();
        assert_eq!(names, vec!["b", "c"]);
    }

    #[test]
    fn display_trace() {
        let mut report = report(&[("a", true)]);
        report.push(CheckResult::new("b", false, Some("why".into())));
        assert_eq!(
            report.to_string(),
            "a: PASS\nb: FAIL (why)\nOverall score: 0.50 (1/2 checks passed)"
        );
    }

    #[test]
    fn result_serializes_without_empty_diagnostic() {
        let json = serde_json::to_string(&CheckResult::new("a", true, None)).unwrap();
        assert_eq!(json, r#"{"name":"a","passed":true}"#);
    }
}
