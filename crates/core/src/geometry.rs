//! Scaling and fixed-point rotation of glyph coordinates.
//!
//! Everything here is integer math. Both divisions round toward negative
//! infinity, so a merged segment and its two halves always land on the
//! same pixels regardless of which quadrant they sit in.

use crate::{Line, Point};

include!(concat!(env!("OUT_DIR"), "/trig_table.rs"));

/// Half-extent of the normalized glyph grid.
pub const SREF: i32 = 16;

/// Fixed-point scale of the sine and cosine tables.
pub const FIXED_ONE: i32 = 256;

/// Sine and cosine of `degrees`, each multiplied by [FIXED_ONE] and
/// truncated toward zero.
///
/// Values are those of the angle as given, not of its wrapped equivalent:
/// truncation makes `sin(-a) == -sin(a)` exactly, while `sin(360 - a)` can
/// land one unit away.
pub fn fixed_sin_cos(degrees: i32) -> (i32, i32) {
    match degrees {
        0..=359 => {
            let idx = degrees as usize;
            (SIN256[idx], COS256[idx])
        }
        -359..=-1 => {
            let idx = degrees.unsigned_abs() as usize;
            (-SIN256[idx], COS256[idx])
        }
        _ => {
            let radians = core::f64::consts::PI * f64::from(degrees) / 180.0;
            let one = f64::from(FIXED_ONE);
            (
                (one * libm::sin(radians)) as i32,
                (one * libm::cos(radians)) as i32,
            )
        }
    }
}

/// Scale a segment from the normalized grid to a `width` x `height` cell.
///
/// X coordinates are scaled by `width / SREF`, Y coordinates by `height / SREF`.
pub fn adjust(segment: [i32; 4], height: i32, width: i32) -> Line {
    let [x1, y1, x2, y2] = segment;
    Line::new(
        Point::new(
            (width * x1).div_euclid(SREF),
            (height * y1).div_euclid(SREF),
        ),
        Point::new(
            (width * x2).div_euclid(SREF),
            (height * y2).div_euclid(SREF),
        ),
    )
}

/// Rotate a point about the origin by `degrees`.
pub fn rotate(point: Point, degrees: i32) -> Point {
    let (s, c) = fixed_sin_cos(degrees);
    Point::new(
        (c * point.x - s * point.y).div_euclid(FIXED_ONE),
        (s * point.x + c * point.y).div_euclid(FIXED_ONE),
    )
}
