//! Per-kind spacing table

use crate::document::UnitKind;

/// Typographic style applied to one unit kind, in em of the base font
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindStyle {
    pub font_scale: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl KindStyle {
    pub const fn new(font_scale: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            font_scale,
            margin_top,
            margin_bottom,
        }
    }
}

/// Kind-indexed margin lookup.
///
/// The values are visually tuned and should be calibrated to the
/// stylesheet of the target surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SpacingTable {
    pub heading1: KindStyle,
    pub heading2: KindStyle,
    pub heading3: KindStyle,
    pub paragraph: KindStyle,
    pub emphasis: KindStyle,
    pub section_label: KindStyle,
    pub rule: KindStyle,
    /// Drawn thickness of a rule in layout units
    pub rule_height: f32,
}

impl Default for SpacingTable {
    fn default() -> Self {
        Self {
            heading1: KindStyle::new(2.0, 2.5, 0.5),
            heading2: KindStyle::new(1.5, 2.5, 0.5),
            heading3: KindStyle::new(1.17, 2.5, 0.5),
            paragraph: KindStyle::new(1.0, 0.0, 1.0),
            emphasis: KindStyle::new(1.0, 0.0, 1.0),
            section_label: KindStyle::new(1.0, 2.5, 1.0),
            rule: KindStyle::new(1.0, 1.0, 1.0),
            rule_height: 2.0,
        }
    }
}

impl SpacingTable {
    /// Style for a unit kind
    pub fn style(&self, kind: &UnitKind) -> KindStyle {
        match kind {
            UnitKind::Heading1 => self.heading1,
            UnitKind::Heading2 => self.heading2,
            UnitKind::Heading3OrDeeper { .. } => self.heading3,
            UnitKind::Paragraph => self.paragraph,
            UnitKind::EmphasisBlock => self.emphasis,
            UnitKind::SectionLabel { .. } => self.section_label,
            UnitKind::Rule => self.rule,
        }
    }

    /// Vertical margins in layout units for the given base font size
    pub fn margins(&self, kind: &UnitKind, font_size: f32) -> f32 {
        let style = self.style(kind);
        (style.margin_top + style.margin_bottom) * font_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_have_larger_top_margin() {
        let table = SpacingTable::default();
        let para = table.style(&UnitKind::Paragraph).margin_top;
        assert!(table.style(&UnitKind::Heading1).margin_top > para);
        assert!(table.style(&UnitKind::Heading2).margin_top > para);
        assert!(table.style(&UnitKind::Heading3OrDeeper { level: 5 }).margin_top > para);
    }

    #[test]
    fn test_margins_in_layout_units() {
        let table = SpacingTable::default();
        assert_eq!(table.margins(&UnitKind::Paragraph, 16.0), 16.0);
        assert_eq!(table.margins(&UnitKind::Heading1, 16.0), 48.0);
        assert_eq!(table.margins(&UnitKind::Rule, 10.0), 20.0);
    }
}
