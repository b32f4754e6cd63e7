//! Arc-length parametrization of planar polylines.

use geo::{Coord, LineString};

/// Point and unit direction of travel at an arc-length fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub point: Coord<f64>,
    pub tangent: Coord<f64>,
}

impl Sample {
    /// Unit normal on the left of the direction of travel.
    #[inline] pub fn normal(&self) -> Coord<f64> { Coord { x: -self.tangent.y, y: self.tangent.x } }
}

/// Total Euclidean length of a polyline (0 for fewer than two points).
pub fn length(line: &LineString<f64>) -> f64 {
    line.lines()
        .map(|segment| segment.dx().hypot(segment.dy()))
        .sum()
}

/// Point and tangent at `fraction` (in [0,1]) of the polyline's arc length.
///
/// Zero-length segments are never selected. When the target lands exactly on a
/// segment end, that end is returned with the segment's own direction.
pub fn sample(line: &LineString<f64>, fraction: f64) -> Sample {
    let coords = &line.0;
    let Some(&first) = coords.first() else {
        return Sample { point: Coord { x: 0.0, y: 0.0 }, tangent: Coord { x: 1.0, y: 0.0 } };
    };

    let total = length(line);
    if total.is_nan() || total <= 0.0 {
        return Sample { point: first, tangent: Coord { x: 1.0, y: 0.0 } };
    }

    let target = total * fraction;
    let mut walked = 0.0;
    for segment in line.lines() {
        let (dx, dy) = (segment.dx(), segment.dy());
        let seg_len = dx.hypot(dy);
        if seg_len <= 0.0 { continue }

        if walked + seg_len >= target {
            let t = (target - walked) / seg_len;
            return Sample {
                point: Coord { x: segment.start.x + dx * t, y: segment.start.y + dy * t },
                tangent: Coord { x: dx / seg_len, y: dy / seg_len },
            };
        }
        walked += seg_len;
    }

    // Accumulated rounding fell short of the target: snap to the final vertex.
    let (a, b) = (coords[coords.len() - 2], coords[coords.len() - 1]);
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let seg_len = match dx.hypot(dy) { len if len > 0.0 => len, _ => 1.0 };
    Sample { point: b, tangent: Coord { x: dx / seg_len, y: dy / seg_len } }
}
