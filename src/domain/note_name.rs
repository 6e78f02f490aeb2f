//! Validated note names, safe to use as vault file names and link targets.

use std::fmt;
use std::str::FromStr;

/// A note name that is valid as a file name on every major OS and as a
/// wiki-link target.
///
/// # Validation Rules
/// - Non-empty
/// - No OS-forbidden characters: `< > : " / \ | ? *` or control characters
/// - No link syntax characters: `[ ] # ^`
/// - Not a Windows reserved name (`CON`, `PRN`, `AUX`, `NUL`, `COM1`-`COM9`,
///   `LPT1`-`LPT9`), compared case-insensitively on the part before the first `.`
/// - Does not end with a space or a dot
///
/// # Examples
///
/// ```
/// use notecheck::domain::NoteName;
///
/// let name = NoteName::new("Reinforcement Learning").unwrap();
/// assert_eq!(name.file_name(), "Reinforcement Learning.md");
///
/// assert!(NoteName::new("a/b").is_err());
/// assert!(NoteName::new("Topic#1").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NoteName(String);

/// Error returned when a note name is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNoteNameError(String);

impl fmt::Display for ParseNoteNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseNoteNameError {}

const OS_FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];
const LINK_FORBIDDEN: &[char] = &['[', ']', '#', '^'];
const RESERVED: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

impl NoteName {
    /// Validates `s` as a note name.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteNameError` describing the first rule `s` breaks.
    pub fn new(s: &str) -> Result<Self, ParseNoteNameError> {
        if s.is_empty() {
            return Err(ParseNoteNameError("note name cannot be empty".to_string()));
        }

        if s.chars().any(|c| OS_FORBIDDEN.contains(&c) || c.is_ascii_control()) {
            return Err(ParseNoteNameError(format!(
                "note name '{}' contains characters forbidden in file names",
                s.escape_debug()
            )));
        }

        if s.contains(LINK_FORBIDDEN) {
            return Err(ParseNoteNameError(format!(
                "note name '{}' contains link syntax characters ([ ] # ^)",
                s
            )));
        }

        let root = s.split('.').next().unwrap_or(s);
        if RESERVED.iter().any(|r| r.eq_ignore_ascii_case(root)) {
            return Err(ParseNoteNameError(format!(
                "note name '{}' is a reserved Windows name",
                s
            )));
        }

        if s.ends_with(' ') || s.ends_with('.') {
            return Err(ParseNoteNameError(format!(
                "note name '{}' cannot end with a space or dot",
                s
            )));
        }

        Ok(Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The vault file name for this note (`<name>.md`).
    pub fn file_name(&self) -> String {
        format!("{}.md", self.0)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteName {
    type Err = ParseNoteNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for NoteName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
