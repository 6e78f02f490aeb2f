//! Wiki-link extraction: `[[target]]`, `[[target|alias]]`, `[[target#fragment]]`.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a wiki-link and captures its bracketed payload.
static WIKI_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+?)\]\]").expect("wiki-link pattern is valid"));

/// A wiki-link found in note text.
///
/// The payload is split on the first `|` (alias separator), then the left
/// side is split on the first `#` (fragment separator). What remains is the
/// bare target identifier.
///
/// # Examples
///
/// ```
/// use notecheck::domain::WikiLink;
///
/// let link = WikiLink::parse("Reinforcement Learning#Policy|RL");
/// assert_eq!(link.target(), "Reinforcement Learning");
/// assert_eq!(link.fragment(), Some("Policy"));
/// assert_eq!(link.alias(), Some("RL"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WikiLink<'a> {
    payload: &'a str,
    target: &'a str,
    fragment: Option<&'a str>,
    alias: Option<&'a str>,
}

impl<'a> WikiLink<'a> {
    /// Parses the text between `[[` and `]]`.
    pub fn parse(payload: &'a str) -> Self {
        let (head, alias) = match payload.split_once('|') {
            Some((head, alias)) => (head, Some(alias)),
            None => (payload, None),
        };
        let (target, fragment) = match head.split_once('#') {
            Some((target, fragment)) => (target, Some(fragment)),
            None => (head, None),
        };

        Self {
            payload,
            target,
            fragment,
            alias,
        }
    }

    /// The full bracketed payload, unmodified.
    pub fn payload(&self) -> &'a str {
        self.payload
    }

    /// The bare note identifier this link points at.
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Heading or block reference after `#`, if any.
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Display text after `|`, if any.
    pub fn alias(&self) -> Option<&'a str> {
        self.alias
    }

    /// Returns true if the link carries an alias separator.
    pub fn has_alias(&self) -> bool {
        self.alias.is_some()
    }
}

/// Extracts every wiki-link from `text` in document order.
pub fn extract_wiki_links(text: &str) -> impl Iterator<Item = WikiLink<'_>> {
    WIKI_LINK
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| WikiLink::parse(m.as_str()))
}
