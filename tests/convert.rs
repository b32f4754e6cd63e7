// Integration tests for the GeoJSON -> SVG flow map conversion:
//   group count and order, arrow count, label placement and escaping,
//   viewport padding, determinism, skipped geometries, and file output.

use std::fs;

use anyhow::Result;
use approx::assert_abs_diff_eq;
use pipeflow::geom::{EARTH_RADIUS_M, PADDING_MARGIN_M};
use pipeflow::{convert_file, render_network, NoGeometry};
use serde_json::{json, Value};

fn feature(geometry: Value, properties: Value) -> Value {
    json!({ "type": "Feature", "geometry": geometry, "properties": properties })
}

fn line_string(coords: Value) -> Value {
    json!({ "type": "LineString", "coordinates": coords })
}

fn render(features: Vec<Value>) -> Result<String> {
    let fc = json!({ "type": "FeatureCollection", "features": features });
    render_network(&serde_json::to_vec(&fc)?, 0)
}

/// Degrees of longitude along the equator spanning `metres`.
fn equator_degrees(metres: f64) -> f64 {
    (metres / EARTH_RADIUS_M).to_degrees()
}

/// Numeric value of `name="..."` inside `tag`.
fn attr(tag: &str, name: &str) -> f64 {
    let key = format!(r#" {name}=""#);
    let start = tag.find(&key).unwrap() + key.len();
    let end = start + tag[start..].find('"').unwrap();
    tag[start..end].parse().unwrap()
}

fn view_box(svg: &str) -> Vec<f64> {
    let key = r#"viewBox=""#;
    let start = svg.find(key).unwrap() + key.len();
    let end = start + svg[start..].find('"').unwrap();
    svg[start..end].split(' ').map(|v| v.parse().unwrap()).collect()
}

fn tags<'a>(svg: &'a str, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    svg.lines().map(str::trim).filter(move |line| line.starts_with(prefix))
}

#[test]
fn collinear_kilometre_line() -> Result<()> {
    let d = equator_degrees(1000.0);
    let svg = render(vec![feature(
        line_string(json!([[0.0, 0.0], [d / 2.0, 0.0], [d, 0.0]])),
        json!({ "OBJECTID": "P1" }),
    )])?;

    assert!(svg.contains(">P1</text>"));
    assert_eq!(svg.matches(r#"class="pipe-arrow""#).count(), 3);

    let vb = view_box(&svg);
    assert!(vb[2] >= 1000.0 + 2.0 * PADDING_MARGIN_M);
    assert!(vb[3] >= 2.0 * PADDING_MARGIN_M);
    Ok(())
}

#[test]
fn one_group_per_polyline_in_order() -> Result<()> {
    let svg = render(vec![
        feature(line_string(json!([[0.0, 0.0], [0.001, 0.0]])), json!({ "OBJECTID": "A" })),
        feature(json!({ "type": "MultiLineString", "coordinates": [
            [[0.0, 0.001], [0.001, 0.001]],
            [[0.0, 0.002], [0.001, 0.002]]
        ]}), json!({ "OBJECTID": "B" })),
        feature(line_string(json!([[0.0, 0.003], [0.001, 0.003]])), json!({ "OBJECTID": "C" })),
    ])?;

    assert_eq!(svg.matches(r#"<g class="pipe""#).count(), 4);
    assert_eq!(svg.matches("<g ").count(), svg.matches("</g>").count());

    let labels: Vec<&str> = tags(&svg, "<text")
        .map(|tag| &tag[tag.find('>').unwrap() + 1..tag.find("</text>").unwrap()])
        .collect();
    assert_eq!(labels, ["A", "B", "B", "C"]);

    assert!(svg.trim_end().ends_with("</svg>"));
    Ok(())
}

#[test]
fn colors_repeat_every_palette_length() -> Result<()> {
    let features = (0..10)
        .map(|i| feature(line_string(json!([[0.0, i as f64 * 0.001], [0.001, i as f64 * 0.001]])), json!({})))
        .collect();
    let svg = render(features)?;

    let groups: Vec<&str> = tags(&svg, r#"<g class="pipe""#).collect();
    assert_eq!(groups.len(), 10);
    assert_eq!(groups[0], groups[8]);
    assert_eq!(groups[1], groups[9]);
    assert_ne!(groups[0], groups[1]);
    Ok(())
}

#[test]
fn arrows_point_along_digitized_direction() -> Result<()> {
    // Drawn east to west: every arrow head must lie west of its tail.
    let d = equator_degrees(600.0);
    let svg = render(vec![feature(line_string(json!([[d, 0.0], [0.0, 0.0]])), json!({}))])?;

    let arrows: Vec<&str> = tags(&svg, r#"<line class="pipe-arrow""#).collect();
    assert_eq!(arrows.len(), 2);
    for arrow in arrows {
        assert!(arrow.contains(r#"marker-end="url(#arrowHead)""#));
        assert_abs_diff_eq!(attr(arrow, "x1") - attr(arrow, "x2"), 18.0, epsilon = 1e-2);
        assert_abs_diff_eq!(attr(arrow, "y1"), attr(arrow, "y2"), epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn labels_alternate_sides() -> Result<()> {
    let d = equator_degrees(100.0);
    let pipes = (0..3)
        .map(|i| feature(line_string(json!([[0.0, 0.0], [d, 0.0]])), json!({ "OBJECTID": format!("P{i}") })))
        .collect();
    let svg = render(pipes)?;

    let ys: Vec<f64> = tags(&svg, "<text").map(|tag| attr(tag, "y")).collect();
    assert_eq!(ys.len(), 3);
    assert_abs_diff_eq!(ys[0], ys[2], epsilon = 1e-9);
    assert_abs_diff_eq!(ys[0] - ys[1], 28.0, epsilon = 1e-2);
    Ok(())
}

#[test]
fn empty_identifier_emits_no_label() -> Result<()> {
    let svg = render(vec![feature(line_string(json!([[0.0, 0.0], [0.001, 0.0]])), json!({ "OBJECTID": "" }))])?;
    assert!(!svg.contains("<text"));
    assert_eq!(svg.matches(r#"<g class="pipe""#).count(), 1);
    Ok(())
}

#[test]
fn polygon_contributes_nothing() -> Result<()> {
    let line = feature(line_string(json!([[10.0, 50.0], [10.001, 50.0005]])), json!({ "OBJECTID": 1 }));
    let polygon = feature(
        json!({ "type": "Polygon", "coordinates": [[[20.0, 40.0], [21.0, 40.0], [21.0, 41.0], [20.0, 40.0]]] }),
        json!({ "OBJECTID": 2 }),
    );

    let with_polygon = render(vec![line.clone(), polygon])?;
    let without = render(vec![line])?;
    assert_eq!(with_polygon, without);
    assert_eq!(with_polygon.matches(r#"<g class="pipe""#).count(), 1);
    Ok(())
}

#[test]
fn output_is_deterministic() -> Result<()> {
    let features = || vec![
        feature(line_string(json!([[-0.1, 51.5], [-0.099, 51.501], [-0.098, 51.5]])), json!({ "OBJECTID": "X<1>" })),
        feature(line_string(json!([[-0.1, 51.502], [-0.095, 51.502]])), json!({ "OBJECTID": 99 })),
    ];
    assert_eq!(render(features())?, render(features())?);
    Ok(())
}

#[test]
fn no_usable_lines_is_no_geometry() {
    let err = render(vec![feature(json!({ "type": "Point", "coordinates": [0, 0] }), json!({}))]).unwrap_err();
    assert!(err.downcast_ref::<NoGeometry>().is_some());
}

#[test]
fn convert_file_writes_svg() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("network.geojson");
    let output = dir.path().join("network.svg");
    let fc = json!({ "type": "FeatureCollection", "features": [
        feature(line_string(json!([[0.0, 0.0], [0.002, 0.0]])), json!({ "OBJECTID": "P1" }))
    ]});
    fs::write(&input, serde_json::to_vec(&fc)?)?;

    convert_file(&input, &output, 0)?;
    let svg = fs::read_to_string(&output)?;
    assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(svg.contains(">P1</text>"));
    Ok(())
}

#[test]
fn failed_conversion_writes_nothing() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("broken.geojson");
    let output = dir.path().join("broken.svg");
    fs::write(&input, b"{ not json")?;

    let err = convert_file(&input, &output, 0).unwrap_err();
    assert!(err.downcast_ref::<NoGeometry>().is_none());
    assert!(!output.exists());

    assert!(convert_file(&dir.path().join("missing.geojson"), &output, 0).is_err());
    assert!(!output.exists());
    Ok(())
}
