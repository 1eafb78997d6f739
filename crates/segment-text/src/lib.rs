#![no_std]

//! `segment-text` is a library for drawing text onto 1-bit display buffers
//! using a scalable 32-segment vector font.
//!
//! This is meant for small e-paper and OLED panels, where a fixed bitmap
//! font is either too small to read or too large to store in every size.
//! Glyphs are built from line segments, so one tiny table covers every
//! height, width, stroke weight and rotation.
//!
//! The library supports `no_std` environments but requires an allocator.
//!
//! Drawing goes through a [Painter], which owns the text style and draws
//! onto any [Canvas], e.g. the in-memory [MonoBuffer]:
//!
//! ```
//! use segment_text::{MonoBuffer, Painter, Point, TextConfig};
//!
//! let mut painter = Painter::new(MonoBuffer::new(128, 64));
//! painter.configure_text(TextConfig::new().height(12).width(7).boldness(3));
//! let end = painter.render_text("Hello!", Point::new(10, 20), 1);
//!
//! assert_eq!(end, Point::new(10 + 6 * (2 * 7 + 3 + 1), 20));
//! ```
//!
//! With the `graphics` feature, [graphics::DrawTargetCanvas] adapts any
//! `embedded-graphics` draw target, and images decoded by
//! [segment_text_bmp] can be placed with [Painter::blit_image].

extern crate alloc;

#[cfg(feature = "graphics")]
pub mod graphics;
mod painter;

use alloc::vec::Vec;
use segment_text_core::Renderer;

pub use painter::Painter;
#[cfg(feature = "std")]
pub use segment_text_bmp::LoadError;
pub use segment_text_bmp::{Bitmap, BmpError, Quantize};
pub use segment_text_core::raster::{circle, filled_circle, stroke_bar};
pub use segment_text_core::{
    BlitError, Canvas, Line, MonoBuffer, PixelGrid, PixelValue, Point, Quadrant, Rgb, Stroke,
    TextConfig, TextStyle, image::blit_image,
};
pub use segment_text_seg32::{GlyphSet, text_advance};

/// Lay out the given text as strokes, without drawing them.
///
/// The first character is centered on `origin`.
pub fn render_text(
    text: &str,
    origin: Point,
    style: &TextStyle,
    glyphs: GlyphSet,
) -> Vec<Stroke> {
    segment_text_seg32::Seg32Renderer::render_text(text, origin, style, glyphs)
}
