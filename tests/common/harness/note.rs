//! Builder for test note text with sensible defaults.

/// Builder for markdown note text.
///
/// Defaults produce a note that passes every check: front matter with
/// `tags`, `aliases` and `created`, one blank line, then an H1 title.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    tags: Vec<String>,
    extra_properties: Vec<(String, String)>,
    front_matter: bool,
    required: bool,
    body: String,
}

impl TestNote {
    /// Creates a new test note with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tags: vec!["test".to_string()],
            extra_properties: Vec::new(),
            front_matter: true,
            required: true,
            body: String::new(),
        }
    }

    /// Replaces the tags.
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Adds a raw `key: value` front matter line.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_properties.push((key.into(), value.into()));
        self
    }

    /// Omits the front matter block entirely.
    pub fn without_front_matter(mut self) -> Self {
        self.front_matter = false;
        self
    }

    /// Omits the `aliases` and `created` properties.
    pub fn without_required(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the body text after the title.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Renders the note as markdown text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        if self.front_matter {
            out.push_str("---\n");
            out.push_str(&format!("tags: [{}]\n", self.tags.join(", ")));
            if self.required {
                out.push_str("aliases: []\ncreated: 2024-01-15\n");
            }
            for (key, value) in &self.extra_properties {
                out.push_str(&format!("{}: {}\n", key, value));
            }
            out.push_str("---\n\n");
        }
        out.push_str(&format!("# {}\n", self.title));
        if !self.body.is_empty() {
            out.push('\n');
            out.push_str(&self.body);
            out.push('\n');
        }
        out
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_default_render() {
        let note = TestNote::new("Hello");
        assert_eq!(
            note.render(),
            "---\ntags: [test]\naliases: []\ncreated: 2024-01-15\n---\n\n# Hello\n"
        );
    }

    #[test]
    fn test_note_without_front_matter() {
        let note = TestNote::new("Bare").without_front_matter().body("text");
        assert_eq!(note.render(), "# Bare\n\ntext\n");
    }
}
