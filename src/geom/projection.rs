use geo::{Coord, LineString};

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Equirectangular projection from lon/lat degrees to metres around a fixed origin.
/// Only locally accurate: the sole distortion correction is the cos(lat0) scaling of x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalProjection {
    origin: Coord<f64>,
    cos_lat0: f64,
}

impl LocalProjection {
    /// Construct a projection centered on `origin` (lon, lat in degrees).
    pub fn new(origin: Coord<f64>) -> Self {
        Self { origin, cos_lat0: origin.y.to_radians().cos() }
    }

    /// Get the (lon, lat) origin.
    #[inline] pub fn origin(&self) -> Coord<f64> { self.origin }

    /// Map a lon/lat coordinate to planar metres (x east, y north of the origin).
    pub fn project(&self, lonlat: &Coord<f64>) -> Coord<f64> {
        Coord {
            x: (lonlat.x - self.origin.x).to_radians() * self.cos_lat0 * EARTH_RADIUS_M,
            y: (lonlat.y - self.origin.y).to_radians() * EARTH_RADIUS_M,
        }
    }

    /// Project every vertex of a lon/lat polyline.
    pub fn project_line(&self, line: &LineString<f64>) -> LineString<f64> {
        line.coords().map(|coord| self.project(coord)).collect()
    }
}

/// Build a projection centered on the arithmetic mean of `points`.
/// Returns None if there are no points.
pub fn build_projection<'a>(points: impl IntoIterator<Item = &'a Coord<f64>>) -> Option<LocalProjection> {
    let (sum, count) = points.into_iter()
        .fold((Coord { x: 0.0, y: 0.0 }, 0usize), |(sum, count), p| {
            (Coord { x: sum.x + p.x, y: sum.y + p.y }, count + 1)
        });

    if count == 0 { return None }
    let n = count as f64;
    Some(LocalProjection::new(Coord { x: sum.x / n, y: sum.y / n }))
}
