//! Layout: measurement, page geometry and pagination

mod estimate;
pub mod font;
mod geometry;
mod line_break;
mod pagination;
mod spacing;

pub use estimate::{checked_height, HeightEstimator, MetricsEstimator, MEASURE_BUFFER};
pub use font::FontMetrics;
pub use geometry::{resolve, Geometry, GeometryConfig, SidebarState, Viewport};
pub use line_break::{Alignment, BlockLayout, LineBreaker, LineLayout};
pub use pagination::{paginate, Page, PaginationResult, EPSILON};
pub use spacing::{KindStyle, SpacingTable};
