#![doc = "Render GeoJSON pipe networks as zoomable SVG flow maps"]
pub mod cli;
pub mod commands;
pub mod geom;
pub mod io;
mod convert;

#[doc(inline)]
pub use convert::{convert_file, render_network};

#[doc(inline)]
pub use io::geojson::{extract_lines, parse_collection, read_features, FeatureRecord, NoGeometry};
