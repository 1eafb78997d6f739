//! The drawing surface the renderer writes to.

/// A pixel buffer that can be drawn onto.
///
/// Only [Canvas::size], [Canvas::set_pixel] and [Canvas::pixel] are required.
/// The remaining primitives have straightforward default implementations in
/// terms of `set_pixel`; buffers with a faster path for them (a byte-wise
/// fill, say) should override them.
///
/// Coordinates outside the buffer must be ignored by `set_pixel`, so callers
/// are free to draw partially off-screen.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Set one pixel. Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, x: i32, y: i32, color: u32);

    /// Read one pixel, `None` when out of bounds.
    fn pixel(&self, x: i32, y: i32) -> Option<u32>;

    /// Set every pixel to `color`.
    fn fill(&mut self, color: u32) {
        let (width, height) = self.size();
        self.rect(0, 0, width as i32, height as i32, color, true);
    }

    /// Horizontal run of `w` pixels starting at `(x, y)`.
    fn hline(&mut self, x: i32, y: i32, w: i32, color: u32) {
        for dx in 0..w {
            self.set_pixel(x + dx, y, color);
        }
    }

    /// Vertical run of `h` pixels starting at `(x, y)`.
    fn vline(&mut self, x: i32, y: i32, h: i32, color: u32) {
        for dy in 0..h {
            self.set_pixel(x, y + dy, color);
        }
    }

    /// Line between two points, both ends included.
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };

        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.set_pixel(x, y, color);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Rectangle with its top-left corner at `(x, y)`.
    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32, filled: bool) {
        if w < 1 || h < 1 {
            return;
        }

        if filled {
            for dy in 0..h {
                self.hline(x, y + dy, w, color);
            }
        } else {
            self.hline(x, y, w, color);
            self.hline(x, y + h - 1, w, color);
            self.vline(x, y, h, color);
            self.vline(x + w - 1, y, h, color);
        }
    }

    /// Axis-aligned ellipse centered on `(cx, cy)` with radii `xr` and `yr`.
    fn ellipse(&mut self, cx: i32, cy: i32, xr: i32, yr: i32, color: u32, filled: bool) {
        if xr < 0 || yr < 0 {
            return;
        }
        if xr == 0 && yr == 0 {
            self.set_pixel(cx, cy, color);
            return;
        }

        let two_asquare = 2 * xr * xr;
        let two_bsquare = 2 * yr * yr;

        // Steep half: step y, occasionally x
        let (mut x, mut y) = (xr, 0);
        let mut xchange = yr * yr * (1 - 2 * xr);
        let mut ychange = xr * xr;
        let mut err = 0;
        let mut stopx = two_bsquare * xr;
        let mut stopy = 0;
        while stopx >= stopy {
            ellipse_quadrants(self, cx, cy, x, y, color, filled);
            y += 1;
            stopy += two_asquare;
            err += ychange;
            ychange += two_asquare;
            if 2 * err + xchange > 0 {
                x -= 1;
                stopx -= two_bsquare;
                err += xchange;
                xchange += two_bsquare;
            }
        }

        // Flat half: step x, occasionally y
        x = 0;
        y = yr;
        xchange = yr * yr;
        ychange = xr * xr * (1 - 2 * yr);
        err = 0;
        stopx = 0;
        stopy = two_asquare * yr;
        while stopx <= stopy {
            ellipse_quadrants(self, cx, cy, x, y, color, filled);
            x += 1;
            stopx += two_bsquare;
            err += xchange;
            xchange += two_bsquare;
            if 2 * err + ychange > 0 {
                y -= 1;
                stopy -= two_asquare;
                err += ychange;
                ychange += two_asquare;
            }
        }
    }
}

fn ellipse_quadrants<C: Canvas + ?Sized>(
    canvas: &mut C,
    cx: i32,
    cy: i32,
    x: i32,
    y: i32,
    color: u32,
    filled: bool,
) {
    if filled {
        canvas.hline(cx - x, cy - y, 2 * x + 1, color);
        canvas.hline(cx - x, cy + y, 2 * x + 1, color);
    } else {
        canvas.set_pixel(cx + x, cy - y, color);
        canvas.set_pixel(cx - x, cy - y, color);
        canvas.set_pixel(cx - x, cy + y, color);
        canvas.set_pixel(cx + x, cy + y, color);
    }
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        (**self).set_pixel(x, y, color)
    }

    fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        (**self).pixel(x, y)
    }

    fn fill(&mut self, color: u32) {
        (**self).fill(color)
    }

    fn hline(&mut self, x: i32, y: i32, w: i32, color: u32) {
        (**self).hline(x, y, w, color)
    }

    fn vline(&mut self, x: i32, y: i32, h: i32, color: u32) {
        (**self).vline(x, y, h, color)
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u32) {
        (**self).line(x1, y1, x2, y2, color)
    }

    fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32, filled: bool) {
        (**self).rect(x, y, w, h, color, filled)
    }

    fn ellipse(&mut self, cx: i32, cy: i32, xr: i32, yr: i32, color: u32, filled: bool) {
        (**self).ellipse(cx, cy, xr, yr, color, filled)
    }
}
