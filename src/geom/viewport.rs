use geo::{BoundingRect, Coord, LineString, Rect};

/// Fraction of the larger extent added on every side.
pub const PADDING_RATIO: f64 = 0.05;

/// Fixed margin (metres) added on every side, keeps padding positive for degenerate extents.
pub const PADDING_MARGIN_M: f64 = 50.0;

/// Padded bounding rectangle of the projected network, in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Union of the bounds of all lines, padded. None if there are no points.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a LineString<f64>>) -> Option<Self> {
        lines.into_iter()
            .filter_map(|line| line.bounding_rect())
            .reduce(|a, b| Rect::new(
                Coord { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                Coord { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            ))
            .map(Self::padded)
    }

    /// Expand `bounds` by 5% of its larger dimension plus the fixed margin.
    pub fn padded(bounds: Rect<f64>) -> Self {
        let pad = bounds.width().max(bounds.height()) * PADDING_RATIO + PADDING_MARGIN_M;
        let (min_x, max_x) = (bounds.min().x - pad, bounds.max().x + pad);
        let (min_y, max_y) = (bounds.min().y - pad, bounds.max().y + pad);
        Self { min_x, min_y, width: max_x - min_x, height: max_y - min_y }
    }
}
