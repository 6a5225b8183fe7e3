//! Document model: an ordered sequence of render units

mod block;
mod parser;

pub use block::{RenderUnit, UnitId, UnitKind};
pub use parser::{BlockParser, MarkdownParser};

/// Number of leading units searched for an existing title heading
const TITLE_SEARCH_DEPTH: usize = 3;

/// A loaded document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    title: String,
    units: Vec<RenderUnit>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from already parsed units
    pub fn from_units(title: impl Into<String>, units: Vec<RenderUnit>) -> Self {
        let mut doc = Self {
            title: title.into(),
            units,
        };
        doc.renumber();
        doc
    }

    /// Parse document text, prepending the title as a heading when the
    /// text does not open with one
    pub fn from_text(title: &str, text: &str, parser: &dyn BlockParser) -> Self {
        let mut units = parser.parse(text);

        let has_title = units
            .iter()
            .take(TITLE_SEARCH_DEPTH)
            .any(|u| u.kind == UnitKind::Heading1);
        if !units.is_empty() && !has_title && !title.trim().is_empty() {
            log::debug!("no leading title heading, inserting '{}'", title);
            units.insert(0, RenderUnit::new(UnitId(0), UnitKind::Heading1, title.trim()));
        }

        Self::from_units(title, units)
    }

    fn renumber(&mut self) {
        for (idx, unit) in self.units.iter_mut().enumerate() {
            unit.id = UnitId(idx);
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Units in reading order
    pub fn units(&self) -> &[RenderUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_fallback() {
        let doc = Document::from_text("Walden", "Some text.\n\nMore text.", &MarkdownParser);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.units()[0].kind, UnitKind::Heading1);
        assert_eq!(doc.units()[0].text, "Walden");
        // Ids follow reading order after the insert
        for (idx, unit) in doc.units().iter().enumerate() {
            assert_eq!(unit.id, UnitId(idx));
        }
    }

    #[test]
    fn test_existing_title_kept() {
        let doc = Document::from_text("File name", "_Epigraph_\n\n# Real Title\n\nBody", &MarkdownParser);
        assert_eq!(doc.len(), 3);
        assert_eq!(doc.units()[1].text, "Real Title");
    }

    #[test]
    fn test_empty_document_stays_empty() {
        let doc = Document::from_text("Untitled", "   \n", &MarkdownParser);
        assert!(doc.is_empty());
        assert_eq!(doc.title(), "Untitled");
    }
}
