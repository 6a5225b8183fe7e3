//! WASM bindings for the reader

use crate::document::{Document, MarkdownParser, RenderUnit};
use crate::error::{LayoutError, LayoutResult};
use crate::layout::{checked_height, HeightEstimator, SidebarState, SpacingTable, Viewport, MEASURE_BUFFER};
use crate::reader::{LayoutEvent, Reader};
use crate::render::{compact_progress, page_html};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Measures units with a JS callback that renders them off-screen.
///
/// The callback is `measure(html, width, marginTopEm, marginBottomEm,
/// justify) -> number`. It applies the given margins to the probe element
/// and returns its height with those margins included.
pub struct JsEstimator {
    measure: js_sys::Function,
    spacing: SpacingTable,
}

impl JsEstimator {
    pub fn new(measure: js_sys::Function) -> Self {
        Self {
            measure,
            spacing: SpacingTable::default(),
        }
    }
}

impl HeightEstimator for JsEstimator {
    fn estimate(&self, unit: &RenderUnit, page_width: f32, justify: bool) -> LayoutResult<f32> {
        let style = self.spacing.style(&unit.kind);
        let args = js_sys::Array::new();
        args.push(&JsValue::from_str(&unit.html()));
        args.push(&JsValue::from_f64(page_width as f64));
        args.push(&JsValue::from_f64(style.margin_top as f64));
        args.push(&JsValue::from_f64(style.margin_bottom as f64));
        args.push(&JsValue::from_bool(justify && unit.kind.is_justifiable()));

        let measured = self
            .measure
            .apply(&JsValue::NULL, &args)
            .map_err(|err| {
                LayoutError::measure_unavailable(
                    err.as_string().unwrap_or_else(|| "measure callback threw".to_string()),
                )
            })?
            .as_f64()
            .ok_or_else(|| LayoutError::measure_unavailable("measure callback returned a non-number"))?;

        Ok(checked_height(measured as f32)? + MEASURE_BUFFER)
    }
}

fn to_js(err: LayoutError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    reader: Reader<JsEstimator>,
}

#[wasm_bindgen]
impl WasmReader {
    /// Create a reader that measures units with `measure`
    #[wasm_bindgen(constructor)]
    pub fn new(measure: js_sys::Function, width: f32, height: f32) -> Self {
        let estimator = JsEstimator::new(measure);
        Self {
            reader: Reader::new(estimator, Viewport::new(width, height)),
        }
    }

    /// Parse and paginate a document
    #[wasm_bindgen(js_name = loadDocument)]
    pub fn load_document(
        &mut self,
        title: &str,
        text: &str,
        initial_spread: Option<usize>,
    ) -> Result<usize, JsValue> {
        let document = Document::from_text(title, text, &MarkdownParser);
        self.reader.load(document, initial_spread).map_err(to_js)?;
        Ok(self.reader.state().pagination.page_count())
    }

    /// Re-layout immediately for a new viewport size
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.reader
            .handle(LayoutEvent::ViewportResized(Viewport::new(width, height)))
            .map_err(to_js)
    }

    /// Queue a resize; applied by `poll` once resizing stops.
    /// `now_ms` is a millisecond clock such as `performance.now()`.
    #[wasm_bindgen(js_name = queueResize)]
    pub fn queue_resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.reader
            .queue_resize(Viewport::new(width, height), to_millis(now_ms));
    }

    /// Apply a settled resize. Returns true if the layout changed.
    pub fn poll(&mut self, now_ms: f64) -> Result<bool, JsValue> {
        self.reader.poll(to_millis(now_ms)).map_err(to_js)
    }

    #[wasm_bindgen(js_name = setSidebarExpanded)]
    pub fn set_sidebar_expanded(&mut self, expanded: bool) -> Result<(), JsValue> {
        let state = if expanded {
            SidebarState::Expanded
        } else {
            SidebarState::Collapsed
        };
        self.reader
            .handle(LayoutEvent::SidebarToggled(state))
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = setJustify)]
    pub fn set_justify(&mut self, justify: bool) -> Result<(), JsValue> {
        self.reader
            .handle(LayoutEvent::JustificationToggled(justify))
            .map_err(to_js)
    }

    #[wasm_bindgen(js_name = nextSpread)]
    pub fn next_spread(&mut self) -> bool {
        self.reader.next_spread()
    }

    #[wasm_bindgen(js_name = prevSpread)]
    pub fn prev_spread(&mut self) -> bool {
        self.reader.prev_spread()
    }

    #[wasm_bindgen(js_name = goToSpread)]
    pub fn go_to_spread(&mut self, spread_index: usize) -> usize {
        self.reader.go_to_spread(spread_index)
    }

    /// Current spread as JSON
    pub fn view(&self) -> String {
        serde_json::to_string(&SpreadData::from_reader(&self.reader)).unwrap_or_default()
    }

    /// Text of the visible pages
    #[wasm_bindgen(js_name = currentText)]
    pub fn current_text(&self) -> String {
        self.reader.current_text()
    }

    /// Bookmarks as JSON, for the page to persist between sessions
    #[wasm_bindgen(js_name = exportBookmarks)]
    pub fn export_bookmarks(&self) -> Result<String, JsValue> {
        self.reader
            .export_bookmarks()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Restore bookmarks saved by `exportBookmarks`
    #[wasm_bindgen(js_name = importBookmarks)]
    pub fn import_bookmarks(&mut self, json: &str) -> Result<(), JsValue> {
        self.reader
            .import_bookmarks(json)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

/// JS clocks are fractional and may be negative or NaN before a page is ready
fn to_millis(now_ms: f64) -> u64 {
    if now_ms.is_finite() && now_ms > 0.0 {
        now_ms as u64
    } else {
        0
    }
}

/// Serializable spread data for JS
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpreadData {
    pub spread_index: usize,
    pub total_spreads: usize,
    pub page_count: usize,
    pub columns: usize,
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub progress_label: String,
    pub compact_label: String,
}

impl SpreadData {
    fn from_reader<E: HeightEstimator>(reader: &Reader<E>) -> Self {
        let state = reader.state();
        let units = state.document.units();
        let view = state.view();
        let page_count = state.pagination.page_count();

        Self {
            spread_index: view.spread_index,
            total_spreads: view.total_spreads,
            page_count,
            columns: view.columns,
            primary: view.primary.as_ref().map(|p| page_html(units, p)),
            secondary: view.secondary.as_ref().map(|p| page_html(units, p)),
            compact_label: compact_progress(page_count, view.spread_index, view.columns),
            progress_label: view.progress_label,
        }
    }
}
