//! Page geometry derived from the viewport and UI chrome

use serde::{Deserialize, Serialize};

/// Browser viewport size in layout units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Expansion state of the navigation sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SidebarState {
    Expanded,
    #[default]
    Collapsed,
}

/// Fixed chrome dimensions, in layout units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Viewport width at and above which two pages are shown
    pub breakpoint: f32,
    pub container_padding: f32,
    pub page_padding: f32,
    pub column_gap: f32,
    pub sidebar_expanded: f32,
    pub sidebar_collapsed: f32,
    /// Used when the computed width collapses during UI transitions
    pub min_page_width: f32,
    pub min_page_height: f32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            container_padding: 20.0,
            page_padding: 20.0,
            column_gap: 10.0,
            sidebar_expanded: 280.0,
            sidebar_collapsed: 60.0,
            min_page_width: 120.0,
            min_page_height: 120.0,
        }
    }
}

/// Usable page dimensions for one layout pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// 1 or 2
    pub columns: usize,
    pub page_height: f32,
    /// Width of a single column
    pub page_width: f32,
}

impl Geometry {
    pub fn is_two_column(&self) -> bool {
        self.columns == 2
    }
}

impl GeometryConfig {
    /// Compute page geometry for the current viewport and sidebar
    pub fn resolve(&self, viewport: Viewport, sidebar: SidebarState) -> Geometry {
        let columns = if viewport.width >= self.breakpoint { 2 } else { 1 };

        // On mobile the sidebar overlays the page instead of reflowing it
        let sidebar_width = match (columns, sidebar) {
            (1, _) => 0.0,
            (_, SidebarState::Expanded) => self.sidebar_expanded,
            (_, SidebarState::Collapsed) => self.sidebar_collapsed,
        };

        let gap = if columns == 2 { self.column_gap } else { 0.0 };
        let mut page_width =
            (viewport.width - sidebar_width) / columns as f32 - 2.0 * self.page_padding - gap;
        let mut page_height = viewport.height - 2.0 * self.container_padding;

        if !(page_width.is_finite() && page_width > 0.0) {
            log::warn!(
                "degenerate page width {} for viewport {}x{}, using {}",
                page_width,
                viewport.width,
                viewport.height,
                self.min_page_width
            );
            page_width = self.min_page_width;
        }
        if !(page_height.is_finite() && page_height > 0.0) {
            log::warn!(
                "degenerate page height {} for viewport {}x{}, using {}",
                page_height,
                viewport.width,
                viewport.height,
                self.min_page_height
            );
            page_height = self.min_page_height;
        }

        Geometry {
            columns,
            page_height,
            page_width,
        }
    }
}

/// Resolve with the default chrome dimensions
pub fn resolve(viewport: Viewport, sidebar: SidebarState) -> Geometry {
    GeometryConfig::default().resolve(viewport, sidebar)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile_single_column() {
        let g = resolve(Viewport::new(400.0, 800.0), SidebarState::Expanded);
        assert_eq!(g.columns, 1);
        // Sidebar ignored below the breakpoint
        assert_eq!(g.page_width, 400.0 - 40.0);
        assert_eq!(g.page_height, 760.0);
    }

    #[test]
    fn test_desktop_two_columns() {
        let g = resolve(Viewport::new(1280.0, 900.0), SidebarState::Collapsed);
        assert!(g.is_two_column());
        // (1280 - 60) / 2 - 40 - 10
        assert_eq!(g.page_width, 560.0);
        assert_eq!(g.page_height, 860.0);

        let expanded = resolve(Viewport::new(1280.0, 900.0), SidebarState::Expanded);
        assert_eq!(expanded.page_width, 450.0);
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        assert_eq!(resolve(Viewport::new(768.0, 600.0), SidebarState::Collapsed).columns, 2);
        assert_eq!(resolve(Viewport::new(767.0, 600.0), SidebarState::Collapsed).columns, 1);
    }

    #[test]
    fn test_degenerate_geometry_falls_back() {
        let config = GeometryConfig::default();
        let g = config.resolve(Viewport::new(30.0, 10.0), SidebarState::Collapsed);
        assert_eq!(g.page_width, config.min_page_width);
        assert_eq!(g.page_height, config.min_page_height);

        let nan = config.resolve(Viewport::new(f32::NAN, 500.0), SidebarState::Collapsed);
        assert_eq!(nan.page_width, config.min_page_width);
    }
}
