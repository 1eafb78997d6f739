//! Reducing 24-bit colors to the small integer codes a display understands.

use segment_text_core::{PixelValue, Rgb};
use tracing::warn;

/// How to turn each color of a bitmap into a [PixelValue].
#[derive(Clone, Copy, Default)]
pub enum Quantize<'a> {
    /// Keep colors as [PixelValue::Rgb]. Such grids can be inspected but not blitted.
    #[default]
    None,
    /// 16-bit `RRRRRGGGGGGBBBBB`.
    Rgb565,
    /// 8-bit `ARRGGGBB`. A is set for bright colors, in which case the color
    /// bits hold half the intensity.
    Argb1232,
    /// 1 if any channel is above 127, else 0.
    Threshold,
    /// A caller-supplied conversion. Returning `None` leaves the color as RGB.
    User(&'a dyn Fn(Rgb) -> Option<u32>),
}

fn is_bright(rgb: Rgb) -> bool {
    rgb.r > 127 || rgb.g > 127 || rgb.b > 127
}

impl Quantize<'_> {
    pub fn apply(&self, rgb: Rgb) -> PixelValue {
        let Rgb { r, g, b } = rgb;
        let (r, g, b) = (u32::from(r), u32::from(g), u32::from(b));

        match self {
            Self::None => PixelValue::Rgb(rgb),
            Self::Rgb565 => PixelValue::Code(((r / 8) << 11) | ((g / 4) << 5) | (b / 8)),
            Self::Argb1232 => {
                let (a, r, g, b) = if is_bright(rgb) {
                    (1, r / 2, g / 2, b / 2)
                } else {
                    (0, r, g, b)
                };
                PixelValue::Code((a << 7) | ((r / 32) << 5) | ((g / 16) << 2) | (b / 32))
            }
            Self::Threshold => PixelValue::Code(u32::from(is_bright(rgb))),
            Self::User(convert) => match convert(rgb) {
                Some(code) => PixelValue::Code(code),
                None => {
                    warn!(?rgb, "user color conversion failed, keeping RGB");
                    PixelValue::Rgb(rgb)
                }
            },
        }
    }
}
