//! SVG document framing: header, styles, marker definitions, footer.

use std::io::Write;

use anyhow::{Context, Result};

use crate::geom::Viewport;

/// In-memory SVG writer; the document is only written out once complete.
#[derive(Default)]
pub struct SvgStringWriter {
    buffer: Vec<u8>
}

/// Implement std::io::Write so `write!` / `writeln!` work.
impl Write for SvgStringWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> { std::io::Result::Ok(()) }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.buffer.extend_from_slice(buf);
        std::io::Result::Ok(())
    }
}

impl SvgStringWriter {
    /// Create a new string-based SVG writer
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Get the SVG string
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.buffer)
            .context("[io::svg] SVG output is not valid UTF-8")
    }
}

/// Escape the five XML special characters.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Write the XML declaration and the opening responsive <svg> tag.
pub fn write_svg_header<W: Write>(writer: &mut W, viewport: &Viewport, title: &str) -> Result<()> {
    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{x:.3} {y:.3} {w:.3} {h:.3}" width="100%" height="100%" preserveAspectRatio="xMidYMid meet">"##,
        x = viewport.min_x,
        y = viewport.min_y,
        w = viewport.width,
        h = viewport.height,
    )?;
    writeln!(writer, "  <title>{}</title>", escape_text(title))?;
    Ok(())
}

/// Write the hover rules: labels hidden until their pipe is hovered, hovered lines thicken.
pub fn write_svg_styles<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"  <style>
    .pipe {{ cursor: pointer; }}
    .pipe-line {{ fill: none; stroke-width: 0.7; vector-effect: non-scaling-stroke; }}
    .pipe-arrow {{ stroke-width: 0.45; vector-effect: non-scaling-stroke; }}
    .pipe-label {{ font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial;
                  font-size: 6px; vector-effect: non-scaling-stroke;
                  paint-order: stroke; stroke: white; stroke-width: 2px; }}
    .pipe .pipe-label {{ opacity: 0; }}
    .pipe:hover .pipe-label {{ opacity: 1; }}
    .pipe:hover .pipe-line {{ stroke-width: 1.2; }}
  </style>"##)?;
    Ok(())
}

/// Id of the arrowhead marker referenced by every flow arrow.
pub const ARROW_MARKER_ID: &str = "arrowHead";

/// Write the arrowhead marker. `orient="auto"` aligns its tip with the direction of
/// the line it terminates; fill follows the group's CSS `color`.
pub fn write_svg_markers<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, r##"  <defs>
    <marker id="{ARROW_MARKER_ID}" markerWidth="6" markerHeight="6" refX="5.2" refY="3" orient="auto" markerUnits="strokeWidth">
      <path d="M0,0 L6,3 L0,6 Z" fill="currentColor"/>
    </marker>
  </defs>"##)?;
    Ok(())
}

/// Write the closing </svg> tag.
pub fn write_svg_footer<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "</svg>")?;
    Ok(())
}
