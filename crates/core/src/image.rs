//! Pre-decoded pixel grids and placing them on a [Canvas] in 90 degree steps.

use alloc::vec::Vec;

use thiserror::Error;
use tracing::warn;

use crate::{Canvas, Point};

/// A color as stored in an image file.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One element of a [PixelGrid].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelValue {
    /// A color code ready to hand to [Canvas::set_pixel].
    Code(u32),
    /// A color that was never quantized to a code. Cannot be blitted.
    Rgb(Rgb),
}

/// Errors from building or blitting a [PixelGrid].
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum BlitError {
    #[error("unsupported orientation {0} degrees, expected 0, 90, 180 or 270")]
    UnknownOrientation(i32),

    #[error("pixel at row {row}, column {col} is an unquantized RGB value")]
    UnsupportedElement { row: usize, col: usize },

    #[error("row {row} has {len} pixels, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{width}x{height} grid needs {expected} pixels, got {actual}")]
    SizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
}

/// A rectangular, row-major grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<PixelValue>,
}

impl PixelGrid {
    /// Build a grid from row-major `pixels`.
    pub fn new(width: usize, height: usize, pixels: Vec<PixelValue>) -> Result<Self, BlitError> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(BlitError::SizeMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a grid from a list of rows, which must all have the same length.
    pub fn from_rows(rows: Vec<Vec<PixelValue>>) -> Result<Self, BlitError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut pixels = Vec::with_capacity(width * height);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(BlitError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            pixels.extend(values);
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The pixel at `grid[row][col]`.
    pub fn get(&self, row: usize, col: usize) -> Option<PixelValue> {
        if col >= self.width {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[PixelValue]> {
        self.pixels.chunks_exact(self.width.max(1))
    }

    /// Mutable access to all pixels, row-major.
    pub fn pixels_mut(&mut self) -> &mut [PixelValue] {
        &mut self.pixels
    }

    fn first_unsupported(&self) -> Option<(usize, usize)> {
        self.pixels
            .iter()
            .position(|p| matches!(p, PixelValue::Rgb(_)))
            .map(|idx| (idx / self.width, idx % self.width))
    }
}

/// Placement of an image in 90 degree steps, clockwise on a y-down screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quadrant {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Quadrant {
    /// Normalizes `degrees` into 0..360 first, so -90 is [Quadrant::Deg270].
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Offset from the blit origin of source pixel `(row, col)` in a grid
    /// of `width` columns and `height` rows.
    pub fn remap(self, row: usize, col: usize, width: usize, height: usize) -> Point {
        let (row, col) = (row as i32, col as i32);
        let (width, height) = (width as i32, height as i32);
        match self {
            Self::Deg0 => Point::new(col, row),
            Self::Deg90 => Point::new(height - 1 - row, col),
            Self::Deg180 => Point::new(width - 1 - col, height - 1 - row),
            Self::Deg270 => Point::new(row, width - 1 - col),
        }
    }
}

/// Copy `grid` onto `canvas` with its placed top-left corner at `origin`.
///
/// Nothing is drawn if the orientation isn't a multiple of 90 degrees or if
/// the grid still holds unquantized RGB values. Both are logged and returned
/// as errors; neither leaves the canvas half-drawn.
pub fn blit_image<C: Canvas + ?Sized>(
    canvas: &mut C,
    origin: Point,
    grid: &PixelGrid,
    degrees: i32,
) -> Result<(), BlitError> {
    let Some(quadrant) = Quadrant::from_degrees(degrees) else {
        warn!(degrees, "skipping image blit with unknown orientation");
        return Err(BlitError::UnknownOrientation(degrees));
    };

    if let Some((row, col)) = grid.first_unsupported() {
        warn!(row, col, "skipping image blit, grid holds RGB values");
        return Err(BlitError::UnsupportedElement { row, col });
    }

    for (row, values) in grid.rows().enumerate() {
        for (col, value) in values.iter().enumerate() {
            if let PixelValue::Code(color) = *value {
                let at = origin + quadrant.remap(row, col, grid.width, grid.height);
                canvas.set_pixel(at.x, at.y, color);
            }
        }
    }

    Ok(())
}
