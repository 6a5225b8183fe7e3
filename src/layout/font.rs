//! Font metrics for layout

/// Metrics of the body font used on the live page
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// Base font size in layout units (1em)
    pub font_size: f32,
    /// Line height in layout units
    pub line_height: f32,
    /// Advance of ASCII characters (0-127) at the base size
    pub char_widths: Vec<f32>,
    /// Default advance for non-ASCII characters
    pub default_width: f32,
}

impl Default for FontMetrics {
    fn default() -> Self {
        // 16px serif, line-height 1.6
        // ~0.5em average advance
        Self::uniform(16.0, 1.6, 8.0)
    }
}

impl FontMetrics {
    pub fn new(font_size: f32, line_height: f32, char_widths: Vec<f32>, default_width: f32) -> Self {
        Self {
            font_size,
            line_height,
            char_widths,
            default_width,
        }
    }

    /// Metrics where every character has the same advance
    pub fn uniform(font_size: f32, line_height_ratio: f32, advance: f32) -> Self {
        Self {
            font_size,
            line_height: font_size * line_height_ratio,
            char_widths: vec![advance; 128],
            default_width: advance,
        }
    }

    /// Get width of a character
    pub fn width(&self, c: char) -> f32 {
        if c.is_ascii() {
            if let Some(w) = self.char_widths.get(c as usize) {
                return *w;
            }
        }
        self.default_width
    }

    /// Width of a grapheme cluster
    pub fn grapheme_width(&self, grapheme: &str) -> f32 {
        if grapheme == "\t" {
            return self.default_width * 4.0;
        }
        if grapheme.chars().all(|c| c.is_control()) {
            return 0.0;
        }
        // Combining marks ride on the base character
        grapheme.chars().next().map(|c| self.width(c)).unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_metrics() {
        let metrics = FontMetrics::uniform(10.0, 1.5, 6.0);
        assert_eq!(metrics.line_height, 15.0);
        assert_eq!(metrics.width('a'), 6.0);
        assert_eq!(metrics.width('é'), 6.0);
        assert_eq!(metrics.grapheme_width("\n"), 0.0);
        assert_eq!(metrics.grapheme_width("\t"), 24.0);
    }

    #[test]
    fn test_custom_widths() {
        let mut widths = vec![5.0; 128];
        widths['W' as usize] = 12.0;
        let metrics = FontMetrics::new(16.0, 25.6, widths, 9.0);
        assert_eq!(metrics.width('W'), 12.0);
        assert_eq!(metrics.width('i'), 5.0);
        assert_eq!(metrics.width('ж'), 9.0);
    }
}
