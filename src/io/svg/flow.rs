//! Per-pipe drawing: coloured polyline, downstream flow arrows, and a hover label.

use std::io::Write;

use anyhow::Result;
use geo::{Coord, LineString};

use crate::geom::{length, sample, Viewport};
use crate::io::geojson::FeatureRecord;

use super::{escape_text, palette_color, write_svg_footer, write_svg_header, write_svg_markers, write_svg_styles, ARROW_MARKER_ID};

/// Length of each arrow glyph, in projected metres.
pub const ARROW_LENGTH: f64 = 18.0;

/// Perpendicular distance between a pipe's midpoint and its label.
pub const LABEL_OFFSET: f64 = 14.0;

/// Arc-length fractions at which arrows are placed, by pipe length.
pub fn arrow_fractions(length: f64) -> &'static [f64] {
    if length > 800.0 {
        &[0.25, 0.5, 0.75]
    } else if length > 250.0 {
        &[0.33, 0.66]
    } else {
        &[0.5]
    }
}

/// Directed arrow segment; the arrowhead sits at `head`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub tail: Coord<f64>,
    pub head: Coord<f64>,
}

/// Arrow centered at `fraction` along `line`, pointing toward increasing arc length.
pub fn arrow_at(line: &LineString<f64>, fraction: f64) -> Arrow {
    let s = sample(line, fraction);
    let half = ARROW_LENGTH * 0.5;
    Arrow {
        tail: Coord { x: s.point.x - s.tangent.x * half, y: s.point.y - s.tangent.y * half },
        head: Coord { x: s.point.x + s.tangent.x * half, y: s.point.y + s.tangent.y * half },
    }
}

/// +1 (left of travel) for even indices, -1 for odd.
#[inline]
pub fn label_side(index: usize) -> f64 { if index % 2 == 0 { 1.0 } else { -1.0 } }

/// Label position: the midpoint pushed sideways along the normal.
pub fn label_anchor(line: &LineString<f64>, index: usize) -> Coord<f64> {
    let mid = sample(line, 0.5);
    let normal = mid.normal();
    let offset = LABEL_OFFSET * label_side(index);
    Coord { x: mid.point.x + normal.x * offset, y: mid.point.y + normal.y * offset }
}

/// Build an SVG points string for a polyline.
fn line_to_points(line: &LineString<f64>) -> String {
    let mut out = String::new();

    for (i, coord) in line.coords().enumerate() {
        if i > 0 { out.push(' ') }
        out.push_str(&format!("{:.3},{:.3}", coord.x, coord.y));
    }

    out
}

/// Write one `<g class="pipe">` group for the projected pipe at `index`.
pub fn write_pipe<W: Write>(writer: &mut W, index: usize, pipe: &FeatureRecord) -> Result<()> {
    let color = palette_color(index);
    let line = &pipe.line;

    writeln!(writer, r#"  <g class="pipe" style="color:{color}">"#)?;
    writeln!(writer, r#"    <polyline class="pipe-line" points="{}" stroke="{color}" opacity="0.92"/>"#, line_to_points(line))?;

    for &fraction in arrow_fractions(length(line)) {
        let Arrow { tail, head } = arrow_at(line, fraction);
        writeln!(writer, r#"    <line class="pipe-arrow" x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" stroke="{color}" marker-end="url(#{ARROW_MARKER_ID})" opacity="0.9"/>"#,
            tail.x, tail.y, head.x, head.y,
        )?;
    }

    let label = pipe.label().map(|id| escape_text(&id)).unwrap_or_default();
    if !label.is_empty() {
        let anchor = label_anchor(line, index);
        writeln!(writer, r#"    <text class="pipe-label" x="{:.3}" y="{:.3}" fill="{color}">{label}</text>"#, anchor.x, anchor.y)?;
    }

    writeln!(writer, "  </g>")?;
    Ok(())
}

/// Write the complete document for already-projected pipes, in order.
pub fn write_network<W: Write>(writer: &mut W, viewport: &Viewport, pipes: &[FeatureRecord]) -> Result<()> {
    let title = match pipes.len() {
        1 => "Pipe network (1 section)".to_string(),
        n => format!("Pipe network ({n} sections)"),
    };

    write_svg_header(writer, viewport, &title)?;
    write_svg_styles(writer)?;
    write_svg_markers(writer)?;
    for (index, pipe) in pipes.iter().enumerate() {
        write_pipe(writer, index, pipe)?;
    }
    write_svg_footer(writer)
}
