mod polyline;
mod projection;
mod viewport;

pub use polyline::{length, sample, Sample};
pub use projection::{build_projection, LocalProjection, EARTH_RADIUS_M};
pub use viewport::{Viewport, PADDING_MARGIN_M, PADDING_RATIO};
