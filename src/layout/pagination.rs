//! Pagination of render units into fixed-height pages

use crate::document::RenderUnit;
use crate::error::LayoutResult;
use crate::layout::estimate::HeightEstimator;
use crate::layout::geometry::Geometry;
use std::ops::Range;

/// Tolerance against measurement jitter when deciding a page break
pub const EPSILON: f32 = 1.0;

/// A contiguous run of units laid out on one page
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Page index (0-based)
    pub page_index: usize,
    /// Indices into the unit sequence
    pub units: Range<usize>,
    /// Sum of the estimated heights of its units
    pub height: f32,
}

impl Page {
    fn new(page_index: usize, start: usize) -> Self {
        Self {
            page_index,
            units: start..start,
            height: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The units of this page out of the full sequence
    pub fn slice<'a>(&self, units: &'a [RenderUnit]) -> &'a [RenderUnit] {
        units.get(self.units.clone()).unwrap_or(&[])
    }
}

/// Pages for one geometry. Rebuilt on every layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationResult {
    pub pages: Vec<Page>,
    pub geometry: Geometry,
    pub justify: bool,
}

impl PaginationResult {
    pub fn empty(geometry: Geometry, justify: bool) -> Self {
        Self {
            pages: Vec::new(),
            geometry,
            justify,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

/// Greedily pack units into pages in a single pass.
///
/// A unit that would overflow a non-empty page starts the next one. A unit
/// taller than a whole page still gets a page to itself; units are never
/// split or dropped.
pub fn paginate<E: HeightEstimator + ?Sized>(
    units: &[RenderUnit],
    geometry: &Geometry,
    justify: bool,
    estimator: &E,
) -> LayoutResult<PaginationResult> {
    let mut result = PaginationResult::empty(*geometry, justify);
    if units.is_empty() {
        return Ok(result);
    }

    let mut current = Page::new(0, 0);

    for (idx, unit) in units.iter().enumerate() {
        let h = estimator.estimate(unit, geometry.page_width, justify)?;

        if current.height + h > geometry.page_height + EPSILON && !current.is_empty() {
            let next = Page::new(result.pages.len() + 1, idx);
            result.pages.push(std::mem::replace(&mut current, next));
        }

        current.units.end = idx + 1;
        current.height += h;
    }

    if !current.is_empty() {
        result.pages.push(current);
    }

    log::debug!(
        "paginated {} units into {} pages ({} columns, {}x{}, justify={})",
        units.len(),
        result.pages.len(),
        geometry.columns,
        geometry.page_width,
        geometry.page_height,
        justify
    );

    Ok(result)
}
