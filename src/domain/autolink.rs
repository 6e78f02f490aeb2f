//! Inserts wiki-links to known notes into plain text.

use regex::{Captures, Regex};

use crate::domain::VaultIds;
use crate::infra::split;

/// Wraps plain-text mentions of known note identifiers in `[[...]]`.
///
/// The front matter block and text already inside a wiki-link are left
/// untouched. When identifiers
/// overlap, the longest one starting at a position wins. Identifiers that
/// begin or end with a word character only match on word boundaries, so
/// `AI` is not linked inside `said`.
///
/// # Errors
///
/// Returns `regex::Error` if the combined pattern exceeds the regex size
/// limit (a vault with a very large number of notes).
///
/// # Examples
///
/// ```
/// use notecheck::domain::{VaultIds, link_known_notes};
///
/// let ids: VaultIds = ["Rust", "Rust Ownership"].into_iter().collect();
/// let text = "Rust Ownership builds on [[Rust]] basics.";
/// assert_eq!(
///     link_known_notes(text, &ids).unwrap(),
///     "[[Rust Ownership]] builds on [[Rust]] basics."
/// );
/// ```
pub fn link_known_notes(text: &str, ids: &VaultIds) -> Result<String, regex::Error> {
    let mut names: Vec<&str> = ids.iter().filter(|id| !id.trim().is_empty()).collect();
    if names.is_empty() {
        return Ok(text.to_string());
    }
    // Longest first so alternation prefers the longer identifier
    names.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let alternatives: Vec<String> = names.iter().map(|name| mention_pattern(name)).collect();
    let pattern = format!(r"\[\[[^\]]+?\]\]|({})", alternatives.join("|"));
    let re = Regex::new(&pattern)?;

    let body = split(text).map_or(text, |fm| fm.rest);
    let (front, body) = text.split_at(text.len() - body.len());

    let linked = re.replace_all(body, |caps: &Captures| match caps.get(1) {
        Some(mention) => format!("[[{}]]", mention.as_str()),
        None => caps[0].to_string(),
    });

    Ok(format!("{}{}", front, linked))
}

fn mention_pattern(name: &str) -> String {
    let starts_word = name.chars().next().is_some_and(is_word_char);
    let ends_word = name.chars().last().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        regex::escape(name),
        if ends_word { r"\b" } else { "" }
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
