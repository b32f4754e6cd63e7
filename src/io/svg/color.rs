//! Fixed palette for pipe colouring.

use std::fmt;

/// Simple RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// Format as CSS hex: #rrggbb
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Categorical palette (tab10, first eight entries).
pub const PALETTE: [Rgb; 8] = [
    Rgb { r:  31, g: 119, b: 180 },
    Rgb { r: 255, g: 127, b:  14 },
    Rgb { r:  44, g: 160, b:  44 },
    Rgb { r: 214, g:  39, b:  40 },
    Rgb { r: 148, g: 103, b: 189 },
    Rgb { r: 140, g:  86, b:  75 },
    Rgb { r: 227, g: 119, b: 194 },
    Rgb { r: 127, g: 127, b: 127 },
];

/// Color for the pipe at `index`, cycling through the palette.
#[inline]
pub fn palette_color(index: usize) -> Rgb { PALETTE[index % PALETTE.len()] }
