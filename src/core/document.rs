//! The in-memory document model for one env file
//!
//! An [`EnvDocument`] is an ordered sequence of raw lines. Assignment
//! entries are a derived view, never stored: each carries the zero-based
//! line index it came from, which is the identity used to address edits.
//! The document is rebuilt from disk for every operation; it is ephemeral,
//! scoped to a single request.

use crate::core::line::{parse_line, QuoteStyle};
use crate::descriptions::DescriptionMap;
use serde::{Deserialize, Serialize};

/// An assignment entry projected out of the document.
///
/// `id` is the zero-based index of the originating line. Entries appear in
/// physical line order and duplicate keys are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: usize,
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub quote: QuoteStyle,
    #[serde(default)]
    pub description: String,
}

/// One env file, split into raw lines.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EnvDocument {
    lines: Vec<String>,
}

impl EnvDocument {
    /// Split file content on line boundaries. There is no trailing-newline
    /// sentinel row: `"A=1\n"` yields exactly one line.
    pub fn parse(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_owned).collect(),
        }
    }

    /// The raw line sequence.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<String> {
        &mut self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Project the assignment entries, in line order, attaching a
    /// description per key (empty string when the map has none).
    pub fn entries(&self, descriptions: &DescriptionMap) -> Vec<Entry> {
        let mut entries = Vec::new();
        for (id, raw) in self.lines.iter().enumerate() {
            let parsed = parse_line(raw);
            let (Some(key), Some(value)) = (parsed.key, parsed.value) else {
                continue;
            };
            entries.push(Entry {
                id,
                key: key.to_owned(),
                value: value.to_owned(),
                quote: parsed.quote,
                description: descriptions.get(key).to_owned(),
            });
        }
        entries
    }

    /// Re-join the lines with `\n`, guaranteeing exactly one trailing
    /// newline. An empty document renders as `"\n"`.
    pub fn render(&self) -> String {
        let mut content = self.lines.join("\n");
        while content.ends_with('\n') {
            content.pop();
        }
        content.push('\n');
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_splits_lines() {
        let doc = EnvDocument::parse("A=1\n# comment\n\nB=2\n");
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.lines()[1], "# comment");
        assert_eq!(doc.lines()[2], "");
    }

    #[test]
    fn test_no_trailing_sentinel_row() {
        assert_eq!(EnvDocument::parse("A=1\n").len(), 1);
        assert_eq!(EnvDocument::parse("A=1").len(), 1);
        assert_eq!(EnvDocument::parse("").len(), 0);
    }

    #[test]
    fn test_entries_projection() {
        let doc = EnvDocument::parse("FOO=bar\n# comment\nBAZ=\"q u o\"\n");
        let entries = doc.entries(&DescriptionMap::default());
        assert_eq!(
            entries,
            vec![
                Entry {
                    id: 0,
                    key: "FOO".into(),
                    value: "bar".into(),
                    quote: QuoteStyle::None,
                    description: String::new(),
                },
                Entry {
                    id: 2,
                    key: "BAZ".into(),
                    value: "q u o".into(),
                    quote: QuoteStyle::Double,
                    description: String::new(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let doc = EnvDocument::parse("A=1\nA=2\n");
        let entries = doc.entries(&DescriptionMap::default());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].value, "1");
        assert_eq!(entries[1].value, "2");
    }

    #[test]
    fn test_entries_pick_up_descriptions() {
        let descriptions: DescriptionMap =
            [("FOO".to_string(), "the foo knob".to_string())].into_iter().collect();
        let doc = EnvDocument::parse("FOO=bar\nBAR=baz\n");
        let entries = doc.entries(&descriptions);
        assert_eq!(entries[0].description, "the foo knob");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_render_single_trailing_newline() {
        assert_eq!(EnvDocument::parse("A=1").render(), "A=1\n");
        assert_eq!(EnvDocument::parse("A=1\n").render(), "A=1\n");
        assert_eq!(EnvDocument::parse("A=1\n\nB=2").render(), "A=1\n\nB=2\n");
        assert_eq!(EnvDocument::parse("").render(), "\n");
    }

    #[test]
    fn test_render_preserves_opaque_lines() {
        let content = "# header\n\n  indented = not-a-key ?\nFOO=bar\n";
        assert_eq!(EnvDocument::parse(content).render(), content);
    }
}
