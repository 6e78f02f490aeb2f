//! Front matter detection and YAML parsing for note text.
//!
//! A front matter block sits at the very start of a note:
//!
//! ```text
//! ---
//! tags: [rust, notes]
//! aliases: []
//! created: 2024-01-15
//! ---
//!
//! # Title
//! ```
//!
//! Detection never fails: text without a well-formed block simply has no
//! front matter. Parsing the block is a separate step that reports YAML
//! errors as values.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// The fixed marker line that opens and closes a front matter block.
pub const DELIMITER: &str = "---";

/// A front matter block located at the start of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    /// Raw text between the delimiter lines, without the final line break.
    pub raw: &'a str,
    /// Everything after the closing delimiter line.
    pub rest: &'a str,
    /// Whether the closing delimiter line was terminated by a line break.
    pub closed_with_newline: bool,
}

/// Errors from parsing a front matter block.
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("invalid YAML in front matter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("front matter is not a key-value mapping (found {0})")]
    NotAMapping(&'static str),
}

/// Key-value properties from a front matter block.
///
/// Keys keep their document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Properties(Mapping);

impl Properties {
    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns true if `key` is present, whatever its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the string keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Locates the front matter block at the start of `text`.
///
/// The first line must be exactly `---` (trailing whitespace allowed), and a
/// later line must be `---` as well. Both LF and CRLF line endings work.
/// Returns `None` when either delimiter is missing.
pub fn split(text: &str) -> Option<FrontMatter<'_>> {
    let mut offset = 0;
    let mut block_start = None;

    for line in text.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        match block_start {
            None => {
                // Opening delimiter must be followed by a line break
                if !is_delimiter(line) || !line.ends_with('\n') {
                    return None;
                }
                block_start = Some(offset);
            }
            Some(start) => {
                if is_delimiter(line) {
                    let block = &text[start..line_start];
                    let raw = block.strip_suffix('\n').unwrap_or(block);
                    let raw = raw.strip_suffix('\r').unwrap_or(raw);
                    return Some(FrontMatter {
                        raw,
                        rest: &text[offset..],
                        closed_with_newline: line.ends_with('\n'),
                    });
                }
            }
        }
    }

    None
}

/// Parses a raw front matter block as YAML.
///
/// An empty or whitespace-only block parses to `Value::Null`.
pub fn parse_block(raw: &str) -> Result<Value, FrontMatterError> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_yaml::from_str(raw)?)
}

/// Parses a raw front matter block into key-value properties.
///
/// # Errors
///
/// Returns `FrontMatterError::InvalidYaml` for malformed YAML and
/// `FrontMatterError::NotAMapping` when the block is valid YAML but not a
/// mapping (a scalar, a list, or an empty block).
pub fn parse_properties(raw: &str) -> Result<Properties, FrontMatterError> {
    match parse_block(raw)? {
        Value::Mapping(mapping) => Ok(Properties(mapping)),
        other => Err(FrontMatterError::NotAMapping(value_kind(&other))),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
