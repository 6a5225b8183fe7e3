//! Block-level render units

use serde::{Deserialize, Serialize};

/// Position of a unit in document reading order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct UnitId(pub usize);

/// The kind of block element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum UnitKind {
    Heading1,
    Heading2,
    /// Heading with level 3 or deeper
    Heading3OrDeeper { level: u8 },
    /// Regular paragraph
    #[default]
    Paragraph,
    /// Whole block set in italics
    EmphasisBlock,
    /// Horizontal rule
    Rule,
    /// Numbered section marker followed by text
    SectionLabel { label: String },
}

impl UnitKind {
    /// Map a markdown heading level to a kind
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => UnitKind::Heading1,
            2 => UnitKind::Heading2,
            level => UnitKind::Heading3OrDeeper { level: level.min(6) },
        }
    }

    /// Heading level, if this is a heading
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            UnitKind::Heading1 => Some(1),
            UnitKind::Heading2 => Some(2),
            UnitKind::Heading3OrDeeper { level } => Some(*level),
            _ => None,
        }
    }

    /// Check if this is a heading
    pub fn is_heading(&self) -> bool {
        self.heading_level().is_some()
    }

    /// Whether the justify setting applies to this kind
    pub fn is_justifiable(&self) -> bool {
        matches!(self, UnitKind::Paragraph)
    }
}

/// One block of document content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderUnit {
    pub id: UnitId,
    pub kind: UnitKind,
    /// Text content; `\n` marks a hard line break
    pub text: String,
}

impl RenderUnit {
    pub fn new(id: UnitId, kind: UnitKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
        }
    }

    pub fn paragraph(id: usize, text: impl Into<String>) -> Self {
        Self::new(UnitId(id), UnitKind::Paragraph, text)
    }

    pub fn heading(id: usize, level: u8, text: impl Into<String>) -> Self {
        Self::new(UnitId(id), UnitKind::heading(level), text)
    }

    pub fn rule(id: usize) -> Self {
        Self::new(UnitId(id), UnitKind::Rule, String::new())
    }

    /// Render this unit as an HTML fragment
    pub fn html(&self) -> String {
        let body = escape_html(&self.text).replace('\n', "<br>");
        match &self.kind {
            UnitKind::Rule => "<hr>".to_string(),
            UnitKind::Paragraph => format!("<p>{}</p>", body),
            UnitKind::EmphasisBlock => format!("<em>{}</em>", body),
            UnitKind::SectionLabel { label } => format!(
                "<span class=\"section-number\">{}</span>{}",
                escape_html(label),
                body
            ),
            kind => {
                let level = kind.heading_level().unwrap_or(1);
                format!("<h{level}>{body}</h{level}>")
            }
        }
    }

    /// Text as a reader would copy it off the page
    pub fn plain_text(&self) -> String {
        match &self.kind {
            UnitKind::SectionLabel { label } if self.text.is_empty() => label.clone(),
            UnitKind::SectionLabel { label } => format!("{} {}", label, self.text),
            _ => self.text.clone(),
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(UnitKind::heading(1), UnitKind::Heading1);
        assert_eq!(UnitKind::heading(2), UnitKind::Heading2);
        assert_eq!(UnitKind::heading(4), UnitKind::Heading3OrDeeper { level: 4 });
        assert_eq!(UnitKind::heading(9).heading_level(), Some(6));
        assert!(!UnitKind::Paragraph.is_heading());
    }

    #[test]
    fn test_html() {
        assert_eq!(RenderUnit::heading(0, 1, "Title").html(), "<h1>Title</h1>");
        assert_eq!(RenderUnit::heading(0, 3, "Sub").html(), "<h3>Sub</h3>");
        assert_eq!(RenderUnit::rule(0).html(), "<hr>");
        assert_eq!(
            RenderUnit::paragraph(0, "a < b\nc").html(),
            "<p>a &lt; b<br>c</p>"
        );

        let section = RenderUnit::new(
            UnitId(0),
            UnitKind::SectionLabel { label: "12".into() },
            "Text",
        );
        assert_eq!(section.html(), "<span class=\"section-number\">12</span>Text");
        assert_eq!(section.plain_text(), "12 Text");
    }
}
