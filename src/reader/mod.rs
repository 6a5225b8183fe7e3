//! Re-layout controller: owns reader state and reacts to layout events

mod bookmark;
mod debounce;

pub use bookmark::{Bookmark, BookmarkStore, MemoryBookmarks};
pub use debounce::{RelayoutDebouncer, RESIZE_DELAY_MS};

use crate::document::Document;
use crate::error::LayoutResult;
use crate::layout::{
    paginate, Geometry, GeometryConfig, HeightEstimator, PaginationResult, SidebarState, Viewport,
};
use crate::render::{present, spread_text, total_spreads, SpreadView};

/// External changes that require a new layout pass
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutEvent {
    ViewportResized(Viewport),
    SidebarToggled(SidebarState),
    JustificationToggled(bool),
    /// A new document was loaded. `initial_spread` overrides any bookmark.
    ContentReplaced {
        document: Document,
        initial_spread: Option<usize>,
    },
}

/// Everything the reading surface depends on
#[derive(Debug, Clone)]
pub struct ReaderState {
    pub document: Document,
    pub viewport: Viewport,
    pub sidebar: SidebarState,
    pub justify: bool,
    pub geometry: Geometry,
    pub pagination: PaginationResult,
    pub spread_index: usize,
}

impl ReaderState {
    pub fn total_spreads(&self) -> usize {
        total_spreads(self.pagination.page_count(), self.geometry.columns)
    }

    /// View of the current spread
    pub fn view(&self) -> SpreadView {
        present(&self.pagination.pages, self.spread_index, self.geometry.columns)
    }
}

/// Clamp a spread index into `[0, total - 1]`, or 0 when there are none
pub fn clamp_spread(spread_index: usize, total_spreads: usize) -> usize {
    spread_index.min(total_spreads.saturating_sub(1))
}

/// The reader controller
pub struct Reader<E: HeightEstimator> {
    state: ReaderState,
    config: GeometryConfig,
    estimator: E,
    bookmarks: Box<dyn BookmarkStore>,
    debouncer: RelayoutDebouncer,
}

impl<E: HeightEstimator> Reader<E> {
    /// Create a reader with no document loaded
    pub fn new(estimator: E, viewport: Viewport) -> Self {
        Self::with_config(estimator, viewport, GeometryConfig::default())
    }

    pub fn with_config(estimator: E, viewport: Viewport, config: GeometryConfig) -> Self {
        let sidebar = SidebarState::default();
        let geometry = config.resolve(viewport, sidebar);
        Self {
            state: ReaderState {
                document: Document::new(),
                viewport,
                sidebar,
                justify: false,
                pagination: PaginationResult::empty(geometry, false),
                geometry,
                spread_index: 0,
            },
            config,
            estimator,
            bookmarks: Box::new(MemoryBookmarks::new()),
            debouncer: RelayoutDebouncer::default(),
        }
    }

    /// Replace the bookmark store
    pub fn with_bookmarks(mut self, bookmarks: Box<dyn BookmarkStore>) -> Self {
        self.bookmarks = bookmarks;
        self
    }

    /// Bookmarks as a JSON array of `{title, lastPage}` records
    pub fn export_bookmarks(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.bookmarks.snapshot())
    }

    /// Replace the bookmark store with records from [`export_bookmarks`](Self::export_bookmarks).
    ///
    /// The current position is not moved; the bookmarks apply to the next load.
    pub fn import_bookmarks(&mut self, json: &str) -> serde_json::Result<()> {
        let store = MemoryBookmarks::from_json(json)?;
        self.bookmarks = Box::new(store);
        Ok(())
    }

    pub fn with_debouncer(mut self, debouncer: RelayoutDebouncer) -> Self {
        self.debouncer = debouncer;
        self
    }

    pub fn state(&self) -> &ReaderState {
        &self.state
    }

    pub fn bookmarks(&self) -> &dyn BookmarkStore {
        self.bookmarks.as_ref()
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn spread_index(&self) -> usize {
        self.state.spread_index
    }

    pub fn total_spreads(&self) -> usize {
        self.state.total_spreads()
    }

    pub fn view(&self) -> SpreadView {
        self.state.view()
    }

    /// Plain text of the visible pages
    pub fn current_text(&self) -> String {
        spread_text(self.state.document.units(), &self.view())
    }

    /// Apply an event and run a full layout pass.
    ///
    /// On a measurement failure the previous state is kept unchanged.
    pub fn handle(&mut self, event: LayoutEvent) -> LayoutResult<()> {
        let mut viewport = self.state.viewport;
        let mut sidebar = self.state.sidebar;
        let mut justify = self.state.justify;
        let mut replacement = None;
        let mut wanted = self.state.spread_index;

        match event {
            LayoutEvent::ViewportResized(v) => viewport = v,
            LayoutEvent::SidebarToggled(s) => sidebar = s,
            LayoutEvent::JustificationToggled(j) => justify = j,
            LayoutEvent::ContentReplaced {
                document,
                initial_spread,
            } => {
                wanted = initial_spread
                    .or_else(|| self.bookmarks.last_spread(document.title()))
                    .unwrap_or(0);
                replacement = Some(document);
            }
        }

        let geometry = self.config.resolve(viewport, sidebar);
        let units = replacement
            .as_ref()
            .unwrap_or(&self.state.document)
            .units();
        let pagination = paginate(units, &geometry, justify, &self.estimator)?;

        if let Some(document) = replacement {
            self.state.document = document;
            // A pending resize belongs to the previous layout
            self.debouncer.cancel();
        }
        self.state.viewport = viewport;
        self.state.sidebar = sidebar;
        self.state.justify = justify;
        self.state.geometry = geometry;
        self.state.pagination = pagination;

        let total = self.state.total_spreads();
        self.state.spread_index = clamp_spread(wanted, total);
        log::debug!(
            "relayout: {} pages, spread {} of {} (wanted {})",
            self.state.pagination.page_count(),
            self.state.spread_index,
            total,
            wanted
        );

        self.record_position();
        Ok(())
    }

    /// Load a new document, restoring its bookmark when no start is given
    pub fn load(&mut self, document: Document, initial_spread: Option<usize>) -> LayoutResult<()> {
        self.handle(LayoutEvent::ContentReplaced {
            document,
            initial_spread,
        })
    }

    /// Queue a resize to be applied once the burst settles
    pub fn queue_resize(&mut self, viewport: Viewport, now_ms: u64) {
        self.debouncer.queue(viewport, now_ms);
    }

    /// Apply a settled resize, returning whether a layout pass ran.
    ///
    /// A resize whose pass fails stays queued for the next poll.
    pub fn poll(&mut self, now_ms: u64) -> LayoutResult<bool> {
        match self.debouncer.ready(now_ms) {
            Some(viewport) => {
                self.handle(LayoutEvent::ViewportResized(viewport))?;
                self.debouncer.cancel();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn has_pending_resize(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Advance one spread. Returns false at the end.
    pub fn next_spread(&mut self) -> bool {
        if self.state.spread_index + 1 < self.total_spreads() {
            self.state.spread_index += 1;
            self.record_position();
            true
        } else {
            false
        }
    }

    /// Go back one spread. Returns false at the start.
    pub fn prev_spread(&mut self) -> bool {
        if self.state.spread_index > 0 {
            self.state.spread_index -= 1;
            self.record_position();
            true
        } else {
            false
        }
    }

    /// Jump to a spread, clamped into range
    pub fn go_to_spread(&mut self, spread_index: usize) -> usize {
        self.state.spread_index = clamp_spread(spread_index, self.total_spreads());
        self.record_position();
        self.state.spread_index
    }

    fn record_position(&mut self) {
        let document = &self.state.document;
        if document.is_empty() || document.title().is_empty() {
            return;
        }
        self.bookmarks
            .record(document.title(), self.state.spread_index);
    }
}
