//! The battery of note-quality checks.
//!
//! Every check implements [`Check`] and sees the same inputs: the parsed
//! note and the vault's identifier set. Checks that do not resolve links
//! ignore the identifier set. A check either returns an outcome or an error;
//! the evaluator turns errors into failures.

use serde_yaml::Value;
use thiserror::Error;

use crate::domain::{Note, VaultIds};
use crate::infra::{FrontMatterError, parse_block};

/// Result of running one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub passed: bool,
    /// Advisory detail shown in verbose traces.
    pub diagnostic: Option<String>,
}

impl CheckOutcome {
    pub fn pass(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: true,
            diagnostic: Some(diagnostic.into()),
        }
    }

    pub fn fail(diagnostic: impl Into<String>) -> Self {
        Self {
            passed: false,
            diagnostic: Some(diagnostic.into()),
        }
    }
}

/// A check that could not run to completion.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    FrontMatter(#[from] FrontMatterError),
}

/// One independent rule in the evaluation battery.
pub trait Check: Send + Sync {
    /// Stable kebab-case name used in reports.
    fn name(&self) -> &'static str;

    /// Runs the rule against `note`.
    ///
    /// Problems running the rule are returned as `CheckError`, never panics.
    /// The evaluator still records a panic as a failed check.
    fn run(&self, note: &Note<'_>, ids: &VaultIds) -> Result<CheckOutcome, CheckError>;
}

const NO_FRONT_MATTER: &str = "no front matter block found";

// ===========================================
// Front Matter
// ===========================================

/// The note opens with a front matter block.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasFrontMatter;

impl Check for HasFrontMatter {
    fn name(&self) -> &'static str {
        "has-front-matter"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        Ok(if note.has_front_matter() {
            CheckOutcome::pass("front matter found")
        } else {
            CheckOutcome::fail(NO_FRONT_MATTER)
        })
    }
}

/// The front matter block is syntactically valid YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertiesParseClean;

impl Check for PropertiesParseClean {
    fn name(&self) -> &'static str {
        "properties-parse-clean"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let Some(fm) = note.front_matter() else {
            return Ok(CheckOutcome::fail(NO_FRONT_MATTER));
        };
        Ok(match parse_block(fm.raw) {
            Ok(_) => CheckOutcome::pass("valid YAML"),
            Err(e) => CheckOutcome::fail(e.to_string()),
        })
    }
}

/// The front matter has a non-empty `tags` property.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagsPresent;

impl Check for TagsPresent {
    fn name(&self) -> &'static str {
        "tags-present"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let Some(props) = note.properties()? else {
            return Ok(CheckOutcome::fail(NO_FRONT_MATTER));
        };
        Ok(match props.get("tags") {
            None => CheckOutcome::fail("tags property missing"),
            Some(value) if has_tags(value) => CheckOutcome::pass("tags present with values"),
            Some(_) => CheckOutcome::fail("tags property present but empty"),
        })
    }
}

/// Tags count when given as a non-empty string or a non-empty list.
fn has_tags(value: &Value) -> bool {
    match value {
        Value::String(s) => !s.trim().is_empty(),
        Value::Sequence(items) => !items.is_empty(),
        _ => false,
    }
}

/// The front matter contains every required key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredPropertiesPresent {
    keys: Vec<String>,
}

impl RequiredPropertiesPresent {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

impl Check for RequiredPropertiesPresent {
    fn name(&self) -> &'static str {
        "required-properties-present"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let Some(props) = note.properties()? else {
            return Ok(CheckOutcome::fail(NO_FRONT_MATTER));
        };
        let missing: Vec<&str> = self
            .keys
            .iter()
            .map(String::as_str)
            .filter(|key| !props.contains_key(key))
            .collect();

        Ok(if missing.is_empty() {
            CheckOutcome::pass("all required properties present")
        } else {
            CheckOutcome::fail(format!("missing {}", missing.join(", ")))
        })
    }
}

// ===========================================
// Links
// ===========================================

/// Every wiki-link target names a note in the vault.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinksExist;

impl Check for LinksExist {
    fn name(&self) -> &'static str {
        "links-exist"
    }

    fn run(&self, note: &Note<'_>, ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        Ok(resolve_all(note.wiki_links().map(|l| l.target()), ids, "wiki links"))
    }
}

/// Every aliased wiki-link (`[[target|alias]]`) names a note in the vault.
#[derive(Debug, Clone, Copy, Default)]
pub struct AliasesResolve;

impl Check for AliasesResolve {
    fn name(&self) -> &'static str {
        "aliases-resolve"
    }

    fn run(&self, note: &Note<'_>, ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let targets = note
            .wiki_links()
            .filter(|l| l.has_alias())
            .map(|l| l.target());
        Ok(resolve_all(targets, ids, "aliased links"))
    }
}

/// Passes when every target resolves; fails on the first that does not.
fn resolve_all<'a>(
    targets: impl Iterator<Item = &'a str>,
    ids: &VaultIds,
    what: &str,
) -> CheckOutcome {
    let mut count = 0;
    for target in targets {
        if !ids.contains(target) {
            return CheckOutcome::fail(format!("'{}' not found in vault", target));
        }
        count += 1;
    }

    if count == 0 {
        CheckOutcome::pass(format!("no {} found", what))
    } else {
        CheckOutcome::pass(format!("all {} {} resolve", count, what))
    }
}

// ===========================================
// Markdown Structure
// ===========================================

/// The first non-blank body line is an H1 title.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleHeadingPresent;

impl Check for TitleHeadingPresent {
    fn name(&self) -> &'static str {
        "title-heading-present"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        Ok(match note.first_content_line() {
            None => CheckOutcome::fail("note body is empty"),
            Some(line) if line.starts_with("# ") => CheckOutcome::pass("found H1 title"),
            Some(line) => CheckOutcome::fail(format!(
                "first content line is not an H1: '{}'",
                preview(line, 40)
            )),
        })
    }
}

/// Adjacent headings never differ by more than one level.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadingLevelsMonotonic;

impl Check for HeadingLevelsMonotonic {
    fn name(&self) -> &'static str {
        "heading-levels-monotonic"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let headings = note.headings();
        if headings.is_empty() {
            return Ok(CheckOutcome::pass("no headings found"));
        }

        let skips: Vec<String> = headings
            .windows(2)
            .filter(|pair| pair[0].level.abs_diff(pair[1].level) > 1)
            .map(|pair| {
                format!(
                    "H{} to H{} at line {}",
                    pair[0].level, pair[1].level, pair[1].line
                )
            })
            .collect();

        Ok(if skips.is_empty() {
            CheckOutcome::pass(format!("{} headings properly sequential", headings.len()))
        } else {
            CheckOutcome::fail(format!(
                "{} heading level skip(s): {}",
                skips.len(),
                skips.join("; ")
            ))
        })
    }
}

/// Every opened code fence is closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeBlocksClosed;

impl Check for CodeBlocksClosed {
    fn name(&self) -> &'static str {
        "code-blocks-closed"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let count = note.fence_count();
        Ok(if count % 2 == 0 {
            CheckOutcome::pass(format!("{} closed code block(s)", count / 2))
        } else {
            CheckOutcome::fail(format!("unclosed code block ({} fence markers)", count))
        })
    }
}

/// Exactly one blank line separates the front matter from the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineAfterFrontMatter;

impl Check for BlankLineAfterFrontMatter {
    fn name(&self) -> &'static str {
        "blank-line-after-front-matter"
    }

    fn run(&self, note: &Note<'_>, _ids: &VaultIds) -> Result<CheckOutcome, CheckError> {
        let Some(fm) = note.front_matter() else {
            return Ok(CheckOutcome::fail(NO_FRONT_MATTER));
        };
        if !fm.closed_with_newline {
            return Ok(CheckOutcome::fail("nothing follows the front matter"));
        }

        let mut lines = fm.rest.lines();
        Ok(match (lines.next(), lines.next()) {
            (Some(first), second) if is_blank(first) => match second {
                Some(next) if is_blank(next) => {
                    CheckOutcome::fail("more than one blank line after front matter")
                }
                _ => CheckOutcome::pass("blank line present after front matter"),
            },
            _ => CheckOutcome::fail("missing blank line after front matter"),
        })
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Truncates to at most `max` characters on a char boundary.
fn preview(line: &str, max: usize) -> String {
    match line.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &line[..idx]),
        None => line.to_string(),
    }
}
