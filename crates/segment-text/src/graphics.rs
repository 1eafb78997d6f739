//! Drawing onto `embedded-graphics` targets.

use core::{convert::Infallible, iter};

use embedded_graphics::{
    Pixel,
    pixelcolor::BinaryColor,
    prelude::{Dimensions, DrawTarget, Point as EgPoint, Size},
    primitives::Rectangle,
};
use segment_text_core::Canvas;

/// A [Canvas] over an `embedded-graphics` draw target with binary color.
///
/// Colors with the low bit set map to [BinaryColor::On]. Draw targets are
/// write-only, so [Canvas::pixel] always returns `None`.
#[derive(Debug)]
pub struct DrawTargetCanvas<D> {
    target: D,
}

impl<D> DrawTargetCanvas<D> {
    pub fn new(target: D) -> Self {
        Self { target }
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

fn binary(color: u32) -> BinaryColor {
    BinaryColor::from(color & 1 != 0)
}

fn infallible(result: Result<(), Infallible>) {
    if let Err(never) = result {
        match never {}
    }
}

impl<D> Canvas for DrawTargetCanvas<D>
where
    D: DrawTarget<Color = BinaryColor, Error = Infallible>,
{
    fn size(&self) -> (u32, u32) {
        let size = self.target.bounding_box().size;
        (size.width, size.height)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        infallible(
            self.target
                .draw_iter(iter::once(Pixel(EgPoint::new(x, y), binary(color)))),
        );
    }

    fn pixel(&self, _x: i32, _y: i32) -> Option<u32> {
        None
    }

    fn fill(&mut self, color: u32) {
        infallible(self.target.clear(binary(color)));
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32, filled: bool) {
        if w < 1 || h < 1 {
            return;
        }

        let area = Rectangle::new(EgPoint::new(x, y), Size::new(w as u32, h as u32));
        if filled {
            infallible(self.target.fill_solid(&area, binary(color)));
        } else {
            self.hline(x, y, w, color);
            self.hline(x, y + h - 1, w, color);
            self.vline(x, y, h, color);
            self.vline(x + w - 1, y, h, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use embedded_graphics::prelude::OriginDimensions;

    use super::*;
    use crate::{Painter, Point};

    #[derive(Default)]
    struct Recorder {
        on: Vec<(i32, i32)>,
    }

    impl OriginDimensions for Recorder {
        fn size(&self) -> Size {
            Size::new(64, 32)
        }
    }

    impl DrawTarget for Recorder {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if color.is_on() {
                    self.on.push((point.x, point.y));
                }
            }
            Ok(())
        }
    }

    #[test]
    fn pixels_reach_the_target() {
        let mut canvas = DrawTargetCanvas::new(Recorder::default());
        assert_eq!(Canvas::size(&canvas), (64, 32));

        canvas.set_pixel(3, 4, 1);
        canvas.set_pixel(5, 6, 0);
        assert_eq!(canvas.into_inner().on, [(3, 4)]);
    }

    #[test]
    fn painter_draws_through_adapter() {
        let mut painter = Painter::new(DrawTargetCanvas::new(Recorder::default()));
        painter.render_text("-", Point::new(20, 16), 1);
        let on = painter.into_inner().into_inner().on;
        assert!(!on.is_empty());
        assert!(on.iter().all(|&(x, _)| (12..=28).contains(&x)));
    }
}
