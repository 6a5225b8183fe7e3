//! Markdown-like block parser

use crate::document::{RenderUnit, UnitId, UnitKind};

/// Converts document text into an ordered sequence of render units
pub trait BlockParser {
    fn parse(&self, text: &str) -> Vec<RenderUnit>;
}

/// Line-oriented parser for lightly marked-up books.
///
/// Recognizes `#` headings, `-------` rules, `_whole block_` emphasis,
/// `*12*` section markers and blank-line separated paragraphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownParser;

impl MarkdownParser {
    pub fn new() -> Self {
        Self
    }
}

impl BlockParser for MarkdownParser {
    fn parse(&self, text: &str) -> Vec<RenderUnit> {
        let mut builder = UnitBuilder::default();
        let mut block = String::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                builder.close_block(&mut block);
            } else if line.starts_with('#') {
                builder.close_block(&mut block);
                let level = line.chars().take_while(|&c| c == '#').count();
                let title = line[level..].trim_start();
                builder.push(UnitKind::heading(level.min(u8::MAX as usize) as u8), title);
            } else if line.starts_with("-------") {
                builder.close_block(&mut block);
                builder.push(UnitKind::Rule, "");
            } else {
                if !block.is_empty() {
                    block.push('\n');
                }
                block.push_str(line);
            }
        }
        builder.close_block(&mut block);

        builder.units
    }
}

#[derive(Default)]
struct UnitBuilder {
    units: Vec<RenderUnit>,
}

impl UnitBuilder {
    fn push(&mut self, kind: UnitKind, text: &str) {
        let id = UnitId(self.units.len());
        self.units.push(RenderUnit::new(id, kind, text));
    }

    fn close_block(&mut self, block: &mut String) {
        let text = std::mem::take(block);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some(inner) = emphasis_body(trimmed) {
            self.push(UnitKind::EmphasisBlock, inner);
        } else if let Some((label, rest)) = section_marker(trimmed) {
            self.push(UnitKind::SectionLabel { label: label.to_string() }, rest.trim());
        } else {
            self.push(UnitKind::Paragraph, trimmed);
        }
    }
}

/// `_text_` with no underscores inside
fn emphasis_body(block: &str) -> Option<&str> {
    let inner = block.strip_prefix('_')?.strip_suffix('_')?;
    if inner.is_empty() || inner.contains('_') || inner.trim().is_empty() {
        return None;
    }
    Some(inner.trim())
}

/// `*123*` at the start of a block
fn section_marker(block: &str) -> Option<(&str, &str)> {
    let rest = block.strip_prefix('*')?;
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let after = rest[digits..].strip_prefix('*')?;
    Some((&rest[..digits], after.trim_start()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(units: &[RenderUnit]) -> Vec<UnitKind> {
        units.iter().map(|u| u.kind.clone()).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(MarkdownParser.parse("").is_empty());
        assert!(MarkdownParser.parse("  \n\n \t\n").is_empty());
    }

    #[test]
    fn test_headings_and_paragraphs() {
        let units = MarkdownParser.parse("# Title\nFirst line\nsecond line\n\n### Deep\nBody");
        assert_eq!(
            kinds(&units),
            vec![
                UnitKind::Heading1,
                UnitKind::Paragraph,
                UnitKind::Heading3OrDeeper { level: 3 },
                UnitKind::Paragraph,
            ]
        );
        assert_eq!(units[0].text, "Title");
        assert_eq!(units[1].text, "First line\nsecond line");
        assert_eq!(units[3].id, UnitId(3));
    }

    #[test]
    fn test_heading_closes_open_block() {
        let units = MarkdownParser.parse("para\n## Next");
        assert_eq!(kinds(&units), vec![UnitKind::Paragraph, UnitKind::Heading2]);
    }

    #[test]
    fn test_rule() {
        let units = MarkdownParser.parse("before\n-------\nafter");
        assert_eq!(
            kinds(&units),
            vec![UnitKind::Paragraph, UnitKind::Rule, UnitKind::Paragraph]
        );
    }

    #[test]
    fn test_emphasis_block() {
        let units = MarkdownParser.parse("_An aside_\n\n_not_ emphasis_");
        assert_eq!(units[0].kind, UnitKind::EmphasisBlock);
        assert_eq!(units[0].text, "An aside");
        assert_eq!(units[1].kind, UnitKind::Paragraph);
    }

    #[test]
    fn test_section_label() {
        let units = MarkdownParser.parse("*12* The chapter opens.");
        assert_eq!(units[0].kind, UnitKind::SectionLabel { label: "12".into() });
        assert_eq!(units[0].text, "The chapter opens.");

        let plain = MarkdownParser.parse("*bold* start");
        assert_eq!(plain[0].kind, UnitKind::Paragraph);
    }
}
