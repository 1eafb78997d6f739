#![no_std]

//! `segment-text-core` provides core primitives for the `segment-text` crate.
//!
//! It holds everything that is independent of a particular glyph catalog:
//! the [Canvas] abstraction over a pixel buffer, the fixed-point
//! [geometry] transform, the [raster] primitives used to stroke glyph
//! segments, and the quadrant [image] blit.

use alloc::vec::Vec;
use core::ops::{Add, AddAssign};

extern crate alloc;

pub mod buffer;
pub mod canvas;
pub mod geometry;
pub mod image;
pub mod raster;

pub use buffer::MonoBuffer;
pub use canvas::Canvas;
pub use image::{BlitError, PixelGrid, PixelValue, Quadrant, Rgb};

/// A point in device (pixel) coordinates.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

/// A straight line between two points.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

impl Line {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Rotate both endpoints about the origin, see [geometry::rotate].
    pub fn rotate(self, degrees: i32) -> Self {
        Self::new(
            geometry::rotate(self.from, degrees),
            geometry::rotate(self.to, degrees),
        )
    }

    /// Move both endpoints by `offset`.
    pub fn translate(self, offset: Point) -> Self {
        Self::new(self.from + offset, self.to + offset)
    }
}

/// One rasterizable piece of a rendered glyph, already in device coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Stroke {
    /// A thick "hexagon" bar, drawn with [raster::stroke_bar].
    Bar { line: Line, boldness: i32 },
    /// A filled dot, drawn with [raster::filled_circle].
    Dot { center: Point, radius: i32 },
}

/// Style applied to every glyph of a text run.
///
/// All dimensions are device pixels, `angle` is in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TextStyle {
    /// Character cell height
    pub height: i32,
    /// Character cell width
    pub width: i32,
    /// Stroke width
    pub boldness: i32,
    /// Rotation of the whole run, clockwise on a y-down screen
    pub angle: i32,
    /// Extra space between two characters
    pub gap: i32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            height: 10,
            width: 8,
            boldness: 3,
            angle: 0,
            gap: 2,
        }
    }
}

impl TextStyle {
    /// Gap used by [TextStyle::configure] when the config doesn't name one.
    pub const DEFAULT_GAP: i32 = 1;

    /// Distance between the origins of two consecutive characters, before rotation.
    pub fn advance(&self) -> i32 {
        2 * self.width + self.boldness + self.gap
    }

    /// Cursor displacement after one character, rotated by the style's angle.
    pub fn advance_vector(&self) -> Point {
        geometry::rotate(Point::new(self.advance(), 0), self.angle)
    }

    /// Radius of the dots used for periods, colons and the like.
    pub fn dot_radius(&self) -> i32 {
        (2 * self.boldness).div_euclid(3)
    }

    /// Overwrite the fields named in `config`, leaving the others unchanged.
    ///
    /// The gap is the exception: when `config` doesn't name one it is reset
    /// to [TextStyle::DEFAULT_GAP].
    pub fn configure(&mut self, config: TextConfig) {
        if let Some(height) = config.height {
            self.height = height;
        }
        if let Some(width) = config.width {
            self.width = width;
        }
        if let Some(boldness) = config.boldness {
            self.boldness = boldness;
        }
        if let Some(angle) = config.angle {
            self.angle = angle;
        }
        self.gap = config.gap.unwrap_or(Self::DEFAULT_GAP);
    }
}

/// A partial update of a [TextStyle].
///
/// ```
/// use segment_text_core::{TextConfig, TextStyle};
///
/// let mut style = TextStyle::default();
/// style.configure(TextConfig::new().height(12).angle(90));
/// assert_eq!(style.width, 8);
/// assert_eq!(style.advance(), 2 * 8 + 3 + 1);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct TextConfig {
    pub height: Option<i32>,
    pub width: Option<i32>,
    pub boldness: Option<i32>,
    pub angle: Option<i32>,
    pub gap: Option<i32>,
}

impl TextConfig {
    pub const fn new() -> Self {
        Self {
            height: None,
            width: None,
            boldness: None,
            angle: None,
            gap: None,
        }
    }

    pub const fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub const fn width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub const fn boldness(mut self, boldness: i32) -> Self {
        self.boldness = Some(boldness);
        self
    }

    pub const fn angle(mut self, angle: i32) -> Self {
        self.angle = Some(angle);
        self
    }

    pub const fn gap(mut self, gap: i32) -> Self {
        self.gap = Some(gap);
        self
    }
}

/// Allows rendering text into strokes.
///
/// Implementors may define their own glyph mapping (enum or other data structure).
pub trait Renderer<Mapping> {
    /// Lay out the given text string as a series of strokes in device
    /// coordinates, starting with the first character centered on `origin`.
    fn render_text(text: &str, origin: Point, style: &TextStyle, mapping: Mapping) -> Vec<Stroke>;
}
