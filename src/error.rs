//! Errors raised by the layout pipeline

/// Errors from measurement and pagination
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// The measurement environment could not produce a height.
    /// Pagination must only run once the rendering surface is ready.
    #[error("measurement unavailable: {detail}")]
    MeasureUnavailable { detail: String },
}

impl LayoutError {
    pub fn measure_unavailable(detail: impl Into<String>) -> Self {
        Self::MeasureUnavailable {
            detail: detail.into(),
        }
    }
}

/// Result alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
