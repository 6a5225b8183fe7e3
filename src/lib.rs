//! Mini-Reader: pagination core for a browser book reader
//!
//! This crate provides the layout engine behind a paged reading view:
//! - Block parsing of lightly marked-up text into render units
//! - Height measurement behind a pluggable estimator
//! - Greedy packing of units into fixed-height pages
//! - One- or two-page spreads with progress labels
//! - Re-layout on resize, sidebar and justification changes

pub mod document;
pub mod error;
pub mod layout;
pub mod reader;
pub mod render;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmReader;

// Re-export primary types
pub use document::{BlockParser, Document, MarkdownParser, RenderUnit, UnitId, UnitKind};
pub use error::{LayoutError, LayoutResult};
pub use layout::{
    paginate, resolve, FontMetrics, Geometry, GeometryConfig, HeightEstimator, MetricsEstimator,
    Page, PaginationResult, SidebarState, SpacingTable, Viewport,
};
pub use reader::{
    clamp_spread, Bookmark, BookmarkStore, LayoutEvent, MemoryBookmarks, Reader, ReaderState,
    RelayoutDebouncer,
};
pub use render::{present, total_spreads, SpreadView};
