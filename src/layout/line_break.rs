//! Line breaking algorithm

use crate::layout::font::FontMetrics;
use smallvec::SmallVec;
use std::ops::Range;
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// Horizontal alignment of wrapped lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Start,
    Justify,
}

/// Layout result for a single line
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    /// Byte range within the block text this line covers
    pub byte_range: Range<usize>,
    /// Width of visible content, hanging whitespace excluded
    pub width: f32,
    /// Extra advance added to each inter-word gap when justified
    pub gap_stretch: f32,
}

/// Wrapped lines of one block
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    pub lines: SmallVec<[LineLayout; 4]>,
    pub line_height: f32,
}

impl BlockLayout {
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Height of the wrapped content, margins excluded
    pub fn content_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }
}

/// Greedy first-fit line breaker over UAX #14 break opportunities
#[derive(Debug, Default, Clone, Copy)]
pub struct LineBreaker;

struct LineState {
    start: usize,
    /// Advance including hanging whitespace
    advance: f32,
    /// Advance up to the last visible grapheme
    ink: f32,
}

impl LineBreaker {
    pub fn new() -> Self {
        Self
    }

    /// Wrap `text` at `max_width`, with character widths multiplied by `scale`
    pub fn layout_block(
        &self,
        text: &str,
        max_width: f32,
        scale: f32,
        metrics: &FontMetrics,
        alignment: Alignment,
    ) -> BlockLayout {
        let line_height = metrics.line_height * scale;
        let mut lines: SmallVec<[LineLayout; 4]> = SmallVec::new();

        if text.is_empty() {
            return BlockLayout { lines, line_height };
        }

        let width_of = |g: &str| metrics.grapheme_width(g) * scale;
        let mut line = LineState {
            start: 0,
            advance: 0.0,
            ink: 0.0,
        };
        let mut seg_start = 0;

        for (idx, opportunity) in linebreaks(text) {
            let segment = &text[seg_start..idx];
            let visible = segment.trim_end();
            let ink_width: f32 = visible.graphemes(true).map(width_of).sum();
            let full_width: f32 = segment.graphemes(true).map(width_of).sum();

            if line.start < seg_start && line.advance + ink_width > max_width {
                lines.push(finish_line(text, line.start..seg_start, line.ink, max_width, alignment));
                line = LineState {
                    start: seg_start,
                    advance: 0.0,
                    ink: 0.0,
                };
            }

            if ink_width > max_width {
                // Segment wider than a whole line: split between graphemes
                for (offset, grapheme) in segment.grapheme_indices(true) {
                    let at = seg_start + offset;
                    let w = width_of(grapheme);
                    let is_space = grapheme.chars().all(char::is_whitespace);
                    if !is_space && line.start < at && line.advance + w > max_width {
                        lines.push(finish_line(text, line.start..at, line.ink, max_width, alignment));
                        line = LineState {
                            start: at,
                            advance: 0.0,
                            ink: 0.0,
                        };
                    }
                    line.advance += w;
                    if !is_space {
                        line.ink = line.advance;
                    }
                }
            } else {
                line.ink = line.advance + ink_width;
                line.advance += full_width;
            }

            seg_start = idx;

            if opportunity == BreakOpportunity::Mandatory && line.start < idx {
                // Hard breaks end a justified line ragged, like the last line
                lines.push(LineLayout {
                    byte_range: line.start..idx,
                    width: line.ink,
                    gap_stretch: 0.0,
                });
                line = LineState {
                    start: idx,
                    advance: 0.0,
                    ink: 0.0,
                };
            }
        }

        BlockLayout { lines, line_height }
    }
}

/// Close a soft-wrapped line
fn finish_line(
    text: &str,
    byte_range: Range<usize>,
    ink: f32,
    max_width: f32,
    alignment: Alignment,
) -> LineLayout {
    let gap_stretch = match alignment {
        Alignment::Start => 0.0,
        Alignment::Justify => {
            let gaps = text[byte_range.clone()]
                .trim_end()
                .chars()
                .filter(|c| *c == ' ')
                .count();
            if gaps == 0 {
                0.0
            } else {
                ((max_width - ink) / gaps as f32).max(0.0)
            }
        }
    };

    LineLayout {
        byte_range,
        width: ink,
        gap_stretch,
    }
}
