//! Height estimation for render units

use crate::document::{RenderUnit, UnitKind};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::font::FontMetrics;
use crate::layout::line_break::{Alignment, LineBreaker};
use crate::layout::spacing::SpacingTable;

/// Added to every measurement to absorb sub-pixel rounding.
/// Errs toward breaking a page early rather than clipping.
pub const MEASURE_BUFFER: f32 = 1.0;

/// Measures the rendered height of a unit at a given column width.
///
/// Implementations must be deterministic for identical arguments and
/// leave no observable state behind.
pub trait HeightEstimator {
    /// Height in layout units, vertical margins and [`MEASURE_BUFFER`] included
    fn estimate(&self, unit: &RenderUnit, page_width: f32, justify: bool) -> LayoutResult<f32>;
}

impl<E: HeightEstimator + ?Sized> HeightEstimator for &E {
    fn estimate(&self, unit: &RenderUnit, page_width: f32, justify: bool) -> LayoutResult<f32> {
        (**self).estimate(unit, page_width, justify)
    }
}

/// Reject measurements that cannot be laid out
pub fn checked_height(height: f32) -> LayoutResult<f32> {
    if height.is_finite() && height >= 0.0 {
        Ok(height)
    } else {
        Err(LayoutError::measure_unavailable(format!(
            "measured height {} is not a usable length",
            height
        )))
    }
}

/// Text-shaping estimator driven by font metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsEstimator {
    metrics: FontMetrics,
    spacing: SpacingTable,
    breaker: LineBreaker,
}

impl MetricsEstimator {
    pub fn new(metrics: FontMetrics, spacing: SpacingTable) -> Self {
        Self {
            metrics,
            spacing,
            breaker: LineBreaker::new(),
        }
    }

    fn content_height(&self, unit: &RenderUnit, page_width: f32, justify: bool) -> f32 {
        let style = self.spacing.style(&unit.kind);
        let alignment = if justify && unit.kind.is_justifiable() {
            Alignment::Justify
        } else {
            Alignment::Start
        };

        match &unit.kind {
            UnitKind::Rule => self.spacing.rule_height,
            UnitKind::SectionLabel { .. } => {
                // The label sits inline before the text
                let text = unit.plain_text();
                self.breaker
                    .layout_block(&text, page_width, style.font_scale, &self.metrics, alignment)
                    .content_height()
            }
            _ => self
                .breaker
                .layout_block(&unit.text, page_width, style.font_scale, &self.metrics, alignment)
                .content_height(),
        }
    }
}

impl HeightEstimator for MetricsEstimator {
    fn estimate(&self, unit: &RenderUnit, page_width: f32, justify: bool) -> LayoutResult<f32> {
        if !(page_width.is_finite() && page_width > 0.0) {
            return Err(LayoutError::measure_unavailable(format!(
                "column width {} cannot hold text",
                page_width
            )));
        }
        let margins = self.spacing.margins(&unit.kind, self.metrics.font_size);
        let height = self.content_height(unit, page_width, justify) + margins + MEASURE_BUFFER;
        checked_height(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::UnitId;

    fn estimator() -> MetricsEstimator {
        // 10px font, 10px per line, 5px per char
        MetricsEstimator::new(FontMetrics::uniform(10.0, 1.0, 5.0), SpacingTable::default())
    }

    #[test]
    fn test_paragraph_height() {
        let est = estimator();
        let unit = RenderUnit::paragraph(0, "x".repeat(30));
        // 30 chars * 5px = 150px => 2 lines at 100px, margin 0 + 1em
        assert_eq!(est.estimate(&unit, 100.0, false), Ok(20.0 + 10.0 + MEASURE_BUFFER));
    }

    #[test]
    fn test_heading_uses_scale_and_margins() {
        let est = estimator();
        let unit = RenderUnit::heading(0, 1, "Title");
        // 2x scale => 20px line, margins 2.5em + 0.5em
        assert_eq!(est.estimate(&unit, 500.0, false), Ok(20.0 + 30.0 + MEASURE_BUFFER));
    }

    #[test]
    fn test_rule_height() {
        let est = estimator();
        assert_eq!(
            est.estimate(&RenderUnit::rule(0), 500.0, false),
            Ok(2.0 + 20.0 + MEASURE_BUFFER)
        );
    }

    #[test]
    fn test_section_label_includes_label() {
        let est = estimator();
        let unit = RenderUnit::new(UnitId(0), UnitKind::SectionLabel { label: "3".into() }, "x".repeat(18));
        // "3 " + 18 chars = 100px => fits on one line exactly
        assert_eq!(est.estimate(&unit, 100.0, false), Ok(10.0 + 35.0 + MEASURE_BUFFER));
    }

    #[test]
    fn test_narrower_width_never_lowers_height() {
        let est = estimator();
        let unit = RenderUnit::paragraph(0, "It was the best of times, it was the worst of times.");
        let mut previous = 0.0;
        for width in (1..=80).rev().map(|w| w as f32 * 5.0) {
            let h = est.estimate(&unit, width, true).unwrap();
            assert!(h >= previous);
            previous = h;
        }
    }

    #[test]
    fn test_unusable_width_is_an_error() {
        let est = estimator();
        let unit = RenderUnit::paragraph(0, "text");
        assert!(matches!(
            est.estimate(&unit, 0.0, false),
            Err(LayoutError::MeasureUnavailable { .. })
        ));
        assert!(est.estimate(&unit, f32::NAN, false).is_err());
    }

    #[test]
    fn test_checked_height() {
        assert_eq!(checked_height(3.5), Ok(3.5));
        assert!(checked_height(-1.0).is_err());
        assert!(checked_height(f32::INFINITY).is_err());
    }
}
