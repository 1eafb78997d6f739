#![no_std]

//! `segment-text-seg32` is a backend for the `segment-text` crate that
//! renders text in a 32-segment vector font.
//!
//! Every glyph is a 32-bit mask over a fixed set of [segments], the way a
//! 16-segment LCD builds letters, extended with diagonals, descenders and
//! dots. Because glyphs are just line segments they can be scaled to any
//! cell size, stroked at any width and rotated to any angle.
//!
//! The catalog covers the printable ASCII range plus a handful of symbols
//! at `0x80..=0x88`, see the constants below. Anything else is drawn as the
//! `0x7F` box glyph.

extern crate alloc;

pub mod segments;

use alloc::vec::Vec;
use segment_text_core::{Point, Renderer, Stroke, TextStyle, geometry};
use tracing::trace;

pub use segments::{GlyphSegment, SegmentKind, Segments, segments};

include!(concat!(env!("OUT_DIR"), "/seg32_glyphs.rs"));

/// First character in the catalog.
pub const FIRST_CHAR: char = ' ';

/// Drawn in place of characters outside the catalog.
pub const FALLBACK_CHAR: char = '\u{7F}';

pub const LESS_EQUAL: char = '\u{80}';
pub const GREATER_EQUAL: char = '\u{81}';
pub const DEGREE: char = '\u{82}';
pub const ALPHA: char = '\u{83}';
pub const FI_LIGATURE: char = '\u{84}';
pub const LEFT_ARROW: char = '\u{85}';
pub const RIGHT_ARROW: char = '\u{86}';
pub const UP_ARROW: char = '\u{87}';
pub const DOWN_ARROW: char = '\u{88}';

/// Which variant of the glyph catalog to draw with.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GlyphSet {
    /// Glyphs that use the diagonal segments for rounder letter forms.
    #[default]
    Standard,
    /// Square forms for `% 4 6 7 A K S V l s`, closer to a classic
    /// 16-segment display.
    Classic,
}

impl GlyphSet {
    fn table(self) -> &'static [u32; GLYPH_COUNT] {
        match self {
            Self::Standard => &STANDARD_GLYPHS,
            Self::Classic => &CLASSIC_GLYPHS,
        }
    }

    /// The segment mask for `character`, or the fallback glyph's mask if
    /// the catalog has no entry for it.
    pub fn glyph_mask(self, character: char) -> u32 {
        let table = self.table();
        let idx = (character as u32).wrapping_sub(FIRST_CHAR as u32) as usize;

        match table.get(idx) {
            Some(&mask) => mask,
            None => {
                trace!(code = character as u32, "no glyph, using fallback");
                table[FALLBACK_CHAR as usize - FIRST_CHAR as usize]
            }
        }
    }

    /// Does the catalog have its own glyph for `character`?
    pub fn contains(self, character: char) -> bool {
        (character as u32)
            .checked_sub(FIRST_CHAR as u32)
            .is_some_and(|idx| (idx as usize) < GLYPH_COUNT)
    }
}

/// Lay out one glyph centered on `cursor`, appending its strokes to `out`.
///
/// Returns the cursor position for the next glyph.
pub fn render_glyph(mask: u32, cursor: Point, style: &TextStyle, out: &mut Vec<Stroke>) -> Point {
    for segment in segments(mask) {
        let line = geometry::adjust(segment.coords.map(i32::from), style.height, style.width)
            .rotate(style.angle)
            .translate(cursor);

        out.push(match segment.kind {
            SegmentKind::Dot => Stroke::Dot {
                center: line.from,
                radius: style.dot_radius(),
            },
            SegmentKind::Bar => Stroke::Bar {
                line,
                boldness: style.boldness,
            },
        });
    }

    cursor + style.advance_vector()
}

/// Cursor displacement after drawing `text`, without drawing it.
pub fn text_advance(text: &str, style: &TextStyle) -> Point {
    let step = style.advance_vector();
    let count = text.chars().count() as i32;
    Point::new(step.x * count, step.y * count)
}

/// A [Renderer] which draws text using the 32-segment font.
pub struct Seg32Renderer;

impl Renderer<GlyphSet> for Seg32Renderer {
    fn render_text(text: &str, origin: Point, style: &TextStyle, glyphs: GlyphSet) -> Vec<Stroke> {
        let mut result = Vec::new();
        let mut cursor = origin;

        for character in text.chars() {
            cursor = render_glyph(glyphs.glyph_mask(character), cursor, style, &mut result);
        }

        result
    }
}
