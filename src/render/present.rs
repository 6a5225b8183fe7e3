//! Mapping of pages onto one- or two-column spreads

use crate::document::RenderUnit;
use crate::layout::Page;

/// What the reading surface shows for one spread
#[derive(Debug, Clone, PartialEq)]
pub struct SpreadView {
    pub spread_index: usize,
    pub total_spreads: usize,
    pub columns: usize,
    /// Left page, or the only page on mobile
    pub primary: Option<Page>,
    /// Right page; absent on mobile and past the end
    pub secondary: Option<Page>,
    pub progress_label: String,
}

impl SpreadView {
    /// Pages on this spread, left to right
    pub fn pages(&self) -> impl Iterator<Item = &Page> {
        self.primary.iter().chain(self.secondary.iter())
    }

    pub fn is_blank(&self) -> bool {
        self.primary.is_none() && self.secondary.is_none()
    }
}

/// Number of spreads needed for `page_count` pages
pub fn total_spreads(page_count: usize, columns: usize) -> usize {
    if columns >= 2 {
        page_count.div_ceil(2)
    } else {
        page_count
    }
}

/// 0-based page indices shown by a spread
fn spread_pages(spread_index: usize, columns: usize) -> (usize, Option<usize>) {
    if columns >= 2 {
        let left = spread_index.saturating_mul(2);
        (left, Some(left.saturating_add(1)))
    } else {
        (spread_index, None)
    }
}

/// Build the view for a spread. Indices past the end give blank pages.
pub fn present(pages: &[Page], spread_index: usize, columns: usize) -> SpreadView {
    let (left, right) = spread_pages(spread_index, columns);
    SpreadView {
        spread_index,
        total_spreads: total_spreads(pages.len(), columns),
        columns,
        primary: pages.get(left).cloned(),
        secondary: right.and_then(|idx| pages.get(idx)).cloned(),
        progress_label: progress_label(pages.len(), spread_index, columns),
    }
}

/// "Page 3-4 of 10", "Page 3 of 10" or "Page 0 of 0"
pub fn progress_label(page_count: usize, spread_index: usize, columns: usize) -> String {
    if page_count == 0 {
        return "Page 0 of 0".to_string();
    }

    let (left, _) = spread_pages(spread_index, columns);
    let first = left + 1;
    if columns >= 2 {
        let last = (left + 2).min(page_count);
        if last > first {
            return format!("Page {}-{} of {}", first, last, page_count);
        }
    }
    format!("Page {} of {}", first, page_count)
}

/// Short progress for the collapsed sidebar: "3 / 10"
pub fn compact_progress(page_count: usize, spread_index: usize, columns: usize) -> String {
    if page_count == 0 {
        return "0 / 0".to_string();
    }
    let (left, _) = spread_pages(spread_index, columns);
    format!("{} / {}", left + 1, page_count)
}

/// HTML for one page
pub fn page_html(units: &[RenderUnit], page: &Page) -> String {
    page.slice(units).iter().map(RenderUnit::html).collect()
}

/// Plain text of everything visible on the spread
pub fn spread_text(units: &[RenderUnit], view: &SpreadView) -> String {
    view.pages()
        .flat_map(|page| page.slice(units))
        .map(RenderUnit::plain_text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
