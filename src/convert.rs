//! End-to-end conversion: GeoJSON bytes -> projected pipes -> SVG document.

use std::{fs, io::Write, path::Path};

use anyhow::{Context, Result};

use crate::geom::{build_projection, length, Viewport};
use crate::io::geojson::{read_features, FeatureRecord, NoGeometry};
use crate::io::svg::{arrow_fractions, write_network, SvgStringWriter};
use crate::io::{finalize_big_write, open_for_big_write};

/// Render a GeoJSON FeatureCollection as a flow-map SVG string.
pub fn render_network(bytes: &[u8], verbose: u8) -> Result<String> {
    let records = read_features(bytes)?;

    let projection = build_projection(records.iter().flat_map(|record| record.line.coords()))
        .ok_or(NoGeometry)?;
    let pipes: Vec<FeatureRecord> = records.iter()
        .map(|record| record.with_line(projection.project_line(&record.line)))
        .collect();
    let viewport = Viewport::from_lines(pipes.iter().map(|pipe| &pipe.line))
        .ok_or(NoGeometry)?;

    if verbose > 0 {
        let origin = projection.origin();
        eprintln!("[convert] {} polylines, origin lon={:.6} lat={:.6}", pipes.len(), origin.x, origin.y);
        eprintln!("[convert] extent {:.1} x {:.1} m (padded)", viewport.width, viewport.height);
    }
    if verbose > 1 {
        for (index, pipe) in pipes.iter().enumerate() {
            let len = length(&pipe.line);
            eprintln!("[convert] pipe {index}: id={} length={len:.1} m arrows={}",
                pipe.label().unwrap_or_default(), arrow_fractions(len).len());
        }
    }

    let mut writer = SvgStringWriter::new();
    write_network(&mut writer, &viewport, &pipes)?;
    writer.into_string()
}

/// Read `input`, render it, and atomically write the SVG to `output`.
/// Nothing is written if any step fails.
pub fn convert_file(input: &Path, output: &Path, verbose: u8) -> Result<()> {
    let bytes = fs::read(input)
        .with_context(|| format!("[convert] Failed to read {}", input.display()))?;

    let svg = render_network(&bytes, verbose)
        .with_context(|| format!("[convert] Failed to convert {}", input.display()))?;

    let mut sink = open_for_big_write(output)?;
    sink.write_all(svg.as_bytes())
        .with_context(|| format!("[convert] Failed to write {}", output.display()))?;
    finalize_big_write(sink)
}
