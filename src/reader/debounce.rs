//! Coalescing of rapid resize events

use crate::layout::Viewport;

/// Default quiet period before a queued resize is applied
pub const RESIZE_DELAY_MS: u64 = 150;

/// Holds the latest viewport of a resize burst until the burst settles
#[derive(Debug, Clone)]
pub struct RelayoutDebouncer {
    delay_ms: u64,
    pending: Option<(Viewport, u64)>,
}

impl Default for RelayoutDebouncer {
    fn default() -> Self {
        Self::new(RESIZE_DELAY_MS)
    }
}

impl RelayoutDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Replace any pending viewport and restart the quiet period
    pub fn queue(&mut self, viewport: Viewport, now_ms: u64) {
        self.pending = Some((viewport, now_ms));
    }

    /// The pending viewport once the quiet period has elapsed.
    ///
    /// It stays pending until [`cancel`](Self::cancel) is called.
    pub fn ready(&self, now_ms: u64) -> Option<Viewport> {
        let (viewport, queued_at) = self.pending?;
        (now_ms.saturating_sub(queued_at) >= self.delay_ms).then_some(viewport)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending viewport
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
