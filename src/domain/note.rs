//! A candidate note: raw text split into front matter and markdown body.

use crate::domain::wikilink::{WikiLink, extract_wiki_links};
use crate::infra::{FrontMatter, FrontMatterError, Properties, parse_properties, split};

/// Triple-backtick code fence marker.
pub const FENCE: &str = "```";

/// A note under evaluation.
///
/// Construction never fails. The front matter block is located once; its YAML
/// is parsed on demand so each caller sees parse errors as values.
///
/// # Examples
///
/// ```
/// use notecheck::domain::Note;
///
/// let note = Note::parse("---\ntags: [rust]\n---\n\n# Ownership\n");
/// assert!(note.has_front_matter());
/// assert_eq!(note.body(), "\n# Ownership\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Note<'a> {
    text: &'a str,
    front_matter: Option<FrontMatter<'a>>,
}

/// A markdown ATX heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters, 1 to 6.
    pub level: u8,
    /// Heading text with surrounding whitespace trimmed.
    pub text: &'a str,
    /// 1-based line number within the body.
    pub line: usize,
}

impl<'a> Note<'a> {
    /// Splits `text` into front matter and body.
    pub fn parse(text: &'a str) -> Self {
        Self {
            text,
            front_matter: split(text),
        }
    }

    /// The complete note text.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn front_matter(&self) -> Option<&FrontMatter<'a>> {
        self.front_matter.as_ref()
    }

    pub fn has_front_matter(&self) -> bool {
        self.front_matter.is_some()
    }

    /// Markdown content after the front matter block, or the whole text when
    /// there is no block.
    pub fn body(&self) -> &'a str {
        self.front_matter.map_or(self.text, |fm| fm.rest)
    }

    /// Parses the front matter properties.
    ///
    /// Returns `Ok(None)` when the note has no front matter block.
    pub fn properties(&self) -> Result<Option<Properties>, FrontMatterError> {
        self.front_matter
            .map(|fm| parse_properties(fm.raw))
            .transpose()
    }

    /// All wiki-links anywhere in the note text, in document order.
    pub fn wiki_links(&self) -> impl Iterator<Item = WikiLink<'a>> {
        extract_wiki_links(self.text)
    }

    /// The first line of the body that is not blank.
    pub fn first_content_line(&self) -> Option<&'a str> {
        self.body().lines().find(|line| !line.trim().is_empty())
    }

    /// Headings in the body, in document order.
    ///
    /// Lines inside fenced code blocks are not headings. A fence that is
    /// never closed does not hide the headings after it.
    pub fn headings(&self) -> Vec<Heading<'a>> {
        let mut headings = Vec::new();
        // Candidates inside the open fence; kept only if it never closes
        let mut fenced = Vec::new();
        let mut open_fence: Option<usize> = None;

        for (idx, line) in self.body().lines().enumerate() {
            match (open_fence, parse_fence(line)) {
                (None, Some((len, info))) if !info.contains('`') => {
                    open_fence = Some(len);
                    continue;
                }
                (Some(open), Some((len, rest))) if len >= open && rest.trim().is_empty() => {
                    open_fence = None;
                    fenced.clear();
                    continue;
                }
                _ => {}
            }

            if let Some((level, text)) = parse_heading(line) {
                let heading = Heading {
                    level,
                    text,
                    line: idx + 1,
                };
                if open_fence.is_some() {
                    fenced.push(heading);
                } else {
                    headings.push(heading);
                }
            }
        }

        headings.extend(fenced);
        headings
    }

    /// Number of code fence markers anywhere in the note text.
    pub fn fence_count(&self) -> usize {
        self.text.matches(FENCE).count()
    }
}

/// Parses a backtick fence line: up to three spaces of indent, then three or
/// more backticks. Returns the backtick count and the text after them.
fn parse_fence(line: &str) -> Option<(usize, &str)> {
    let rest = line.trim_start_matches(' ');
    if line.len() - rest.len() > 3 || !rest.starts_with(FENCE) {
        return None;
    }
    let ticks = rest.bytes().take_while(|&b| b == b'`').count();
    Some((ticks, &rest[ticks..]))
}

/// Parses an ATX heading line: 1 to 6 `#` followed by whitespace or end of line.
fn parse_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }

    let rest = &line[hashes..];
    match rest.chars().next() {
        None => Some((hashes as u8, "")),
        Some(c) if c.is_whitespace() => Some((hashes as u8, rest.trim())),
        Some(_) => None,
    }
}
