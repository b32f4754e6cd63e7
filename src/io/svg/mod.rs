//! SVG format writing for the flow map.

mod color;
mod flow;
mod writer;

pub use color::*;
pub use flow::*;
pub use writer::*;
