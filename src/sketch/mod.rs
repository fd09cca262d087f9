//! Sketch pad: a square grid of shadeable cells.
//!
//! ## Model
//!
//! A [`SketchPad`] is `size x size` cells, each holding a [`Shade`]. Painting
//! a cell applies the current [`PaintMode`]: solid black, a uniform random
//! RGB color, or progressive darkening that deepens by a tenth per pass and
//! caps at full ink. Clearing resets shades without rebuilding; resizing
//! rebuilds a cleared grid at the new size.
//!
//! ## Sizing
//!
//! Sizes are clamped to 1-100 with a default of 16. Free-text size input
//! goes through [`SketchPad::parse_size`]; a non-numeric token is rejected
//! and the caller leaves the existing grid untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::GameRng;

/// Default grid side length.
pub const DEFAULT_SIZE: u32 = 16;
/// Smallest accepted side length.
pub const MIN_SIZE: u32 = 1;
/// Largest accepted side length.
pub const MAX_SIZE: u32 = 100;

/// Number of darkening passes to reach full ink.
pub const INK_STEPS: u8 = 10;

/// Sketch pad failure cases.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SketchError {
    /// Free-text size input that is not a number.
    #[error("invalid grid size \"{0}\": not a number")]
    InvalidSize(String),
    /// Cell coordinates outside the grid.
    #[error("cell ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: u32, col: u32, size: u32 },
}

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Shade of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shade {
    /// Never painted, or cleared.
    Clear,
    /// A solid color from the black or random modes.
    Color(Rgb),
    /// Darkening ink, `1..=INK_STEPS` tenths of full black.
    Ink(u8),
}

impl Shade {
    /// Opacity of this shade, 0.0 (clear) to 1.0 (solid).
    #[must_use]
    pub fn opacity(self) -> f32 {
        match self {
            Shade::Clear => 0.0,
            Shade::Color(_) => 1.0,
            Shade::Ink(level) => f32::from(level) / f32::from(INK_STEPS),
        }
    }
}

/// How painting shades a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaintMode {
    /// Solid black.
    Black,
    /// A fresh uniform random color per paint.
    Random,
    /// Deepen by one ink step per paint, capped at full.
    Darken,
}

/// A square grid of shadeable cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SketchPad {
    size: u32,
    /// Row-major, `size * size` entries.
    cells: Vec<Shade>,
}

impl Default for SketchPad {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl SketchPad {
    /// Create a cleared grid, clamping `size` to 1-100.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let size = size.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            size,
            cells: vec![Shade::Clear; (size * size) as usize],
        }
    }

    /// Parse free-text size input.
    ///
    /// Accepts a whitespace-trimmed decimal number and clamps it to 1-100.
    /// Anything non-numeric is an error; the caller keeps its current grid.
    pub fn parse_size(raw: &str) -> Result<u32, SketchError> {
        let token = raw.trim();
        token
            .parse::<u32>()
            .map(|n| n.clamp(MIN_SIZE, MAX_SIZE))
            .map_err(|_| SketchError::InvalidSize(token.to_string()))
    }

    /// Side length of the grid.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Total cell count.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        (self.size * self.size) as usize
    }

    /// Shade of one cell.
    pub fn shade(&self, row: u32, col: u32) -> Result<Shade, SketchError> {
        Ok(self.cells[self.index(row, col)?])
    }

    /// Paint one cell with the given mode.
    pub fn paint(
        &mut self,
        row: u32,
        col: u32,
        mode: PaintMode,
        rng: &mut GameRng,
    ) -> Result<(), SketchError> {
        let index = self.index(row, col)?;
        let cell = &mut self.cells[index];

        *cell = match mode {
            PaintMode::Black => Shade::Color(Rgb::BLACK),
            PaintMode::Random => Shade::Color(Rgb {
                r: rng.gen_range_usize(0..256) as u8,
                g: rng.gen_range_usize(0..256) as u8,
                b: rng.gen_range_usize(0..256) as u8,
            }),
            PaintMode::Darken => match *cell {
                Shade::Ink(level) => Shade::Ink((level + 1).min(INK_STEPS)),
                // Darkening restarts on colored or clear cells.
                _ => Shade::Ink(1),
            },
        };
        Ok(())
    }

    /// Reset every cell to [`Shade::Clear`] without changing the size.
    pub fn clear(&mut self) {
        self.cells.fill(Shade::Clear);
    }

    /// Rebuild as a cleared grid of the new size (clamped to 1-100).
    pub fn resize(&mut self, size: u32) {
        *self = Self::new(size);
    }

    /// Iterate over `(row, col, shade)` for every cell.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, Shade)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &shade)| (i as u32 / size, i as u32 % size, shade))
    }

    fn index(&self, row: u32, col: u32) -> Result<usize, SketchError> {
        if row >= self.size || col >= self.size {
            return Err(SketchError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok((row * self.size + col) as usize)
    }
}
