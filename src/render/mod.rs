//! Render output: spread view models

mod present;

pub use present::{
    compact_progress, page_html, present, progress_label, spread_text, total_spreads, SpreadView,
};
