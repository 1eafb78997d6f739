//! Thick strokes and circles built from plain [Canvas] lines.

use crate::{Canvas, Line, Point, Stroke};

/// Draw a bar `boldness` pixels wide, like one segment of a seven-segment display.
///
/// The centerline is drawn first. Each additional line pair sits `i / 2`
/// pixels to either side of it and is pulled in by the same amount at both
/// ends, which gives the bar its pointed, hexagonal ends. For even widths the
/// pairs are shifted half a pixel to one side so the bar keeps its full width.
///
/// A `boldness` below 1 draws nothing.
pub fn stroke_bar<C: Canvas + ?Sized>(canvas: &mut C, line: Line, boldness: i32, color: u32) {
    if boldness < 1 {
        return;
    }

    let Line { from, to } = line;
    canvas.line(from.x, from.y, to.x, to.y, color);

    let dx = f64::from(to.x - from.x);
    let dy = f64::from(to.y - from.y);
    let len = libm::sqrt(dx * dx + dy * dy);
    if boldness == 1 || len == 0.0 {
        return;
    }

    let (ux, uy) = (dx / len, dy / len);
    let (sx, sy) = if boldness % 2 == 0 {
        (-uy / 2.0, ux / 2.0)
    } else {
        (0.0, 0.0)
    };

    // Halves round to even
    let round = |v: f64| libm::rint(v) as i32;

    for i in 1..boldness {
        let h = f64::from(i) / 2.0;

        let x1a = from.x + round(sx + h * (ux + uy));
        let y1a = from.y + round(sy + h * (uy - ux));
        let x2a = to.x + round(sx - h * (ux - uy));
        let y2a = to.y + round(sy - h * (uy + ux));

        let x1b = from.x + round(sx + h * (ux - uy));
        let y1b = from.y + round(sy + h * (uy + ux));
        let x2b = to.x + round(sx - h * (ux + uy));
        let y2b = to.y + round(sy - h * (uy - ux));

        canvas.line(x1a, y1a, x2a, y2a, color);
        canvas.line(x1b, y1b, x2b, y2b, color);
    }
}

/// One pixel wide circle outline.
pub fn circle<C: Canvas + ?Sized>(canvas: &mut C, center: Point, r: i32, color: u32) {
    let Point { x: x0, y: y0 } = center;

    canvas.set_pixel(x0, y0 + r, color);
    canvas.set_pixel(x0, y0 - r, color);
    canvas.set_pixel(x0 + r, y0, color);
    canvas.set_pixel(x0 - r, y0, color);

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let (mut x, mut y) = (0, r);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        canvas.set_pixel(x0 + x, y0 + y, color);
        canvas.set_pixel(x0 - x, y0 + y, color);
        canvas.set_pixel(x0 + x, y0 - y, color);
        canvas.set_pixel(x0 - x, y0 - y, color);
        canvas.set_pixel(x0 + y, y0 + x, color);
        canvas.set_pixel(x0 - y, y0 + x, color);
        canvas.set_pixel(x0 + y, y0 - x, color);
        canvas.set_pixel(x0 - y, y0 - x, color);
    }
}

/// Solid circle, drawn as vertical spans.
pub fn filled_circle<C: Canvas + ?Sized>(canvas: &mut C, center: Point, r: i32, color: u32) {
    let Point { x: x0, y: y0 } = center;

    canvas.vline(x0, y0 - r, 2 * r + 1, color);

    let mut f = 1 - r;
    let mut ddf_x = 1;
    let mut ddf_y = -2 * r;
    let (mut x, mut y) = (0, r);

    while x < y {
        if f >= 0 {
            y -= 1;
            ddf_y += 2;
            f += ddf_y;
        }
        x += 1;
        ddf_x += 2;
        f += ddf_x;

        canvas.vline(x0 + x, y0 - y, 2 * y + 1, color);
        canvas.vline(x0 + y, y0 - x, 2 * x + 1, color);
        canvas.vline(x0 - x, y0 - y, 2 * y + 1, color);
        canvas.vline(x0 - y, y0 - x, 2 * x + 1, color);
    }
}

impl Stroke {
    /// Rasterize this stroke onto `canvas`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, color: u32) {
        match *self {
            Stroke::Bar { line, boldness } => stroke_bar(canvas, line, boldness, color),
            Stroke::Dot { center, radius } => filled_circle(canvas, center, radius, color),
        }
    }
}
