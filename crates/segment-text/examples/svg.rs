use svg::Document;
use svg::node::element::Path;
use svg::node::element::path::Data;

use segment_text::{Canvas, GlyphSet, MonoBuffer, Painter, Point, TextConfig};

/// Trace every lit pixel of the buffer as a unit square.
fn buffer_to_svg_path(buffer: &MonoBuffer, scale: f32, margin: f32) -> Data {
    let mut data = Data::new();

    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if buffer.pixel(x, y) == Some(1) {
                let px = x as f32 * scale + margin;
                let py = y as f32 * scale + margin;
                data = data
                    .move_to((px, py))
                    .horizontal_line_by(scale)
                    .vertical_line_by(scale)
                    .horizontal_line_by(-scale)
                    .close();
            }
        }
    }

    data
}

fn draw_line(
    painter: &mut Painter<MonoBuffer>,
    text: &str,
    config: TextConfig,
    origin: Point,
) {
    painter.configure_text(config);
    painter.render_text(text, origin, 1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use svg::node::element::Rectangle;

    let scale = 2.0;
    let margin = 10.0;

    let mut painter = Painter::new(MonoBuffer::new(296, 128));

    draw_line(
        &mut painter,
        "Testing 12-8-5",
        TextConfig::new().height(12).width(7).boldness(5).gap(2),
        Point::new(14, 16),
    );
    draw_line(
        &mut painter,
        "@$%^&*(5S)12-3+4=56:",
        TextConfig::new().height(7).width(5).boldness(3),
        Point::new(10, 42),
    );
    draw_line(
        &mut painter,
        "Abc",
        TextConfig::new().height(12).width(8).boldness(5).angle(-30).gap(2),
        Point::new(14, 100),
    );
    draw_line(
        &mut painter,
        "defg",
        TextConfig::new().height(5).width(4).boldness(1).gap(2),
        Point::new(90, 80),
    );

    painter.set_glyph_set(GlyphSet::Classic);
    draw_line(
        &mut painter,
        "AKSV 467",
        TextConfig::new().height(10).width(6).boldness(3).gap(2),
        Point::new(90, 106),
    );

    painter.filled_circle(Point::new(270, 100), 12, 1);
    painter.circle(Point::new(270, 100), 18, 1);

    let buffer = painter.into_inner();
    let width = buffer.width() as f32 * scale + 2.0 * margin;
    let height = buffer.height() as f32 * scale + 2.0 * margin;

    let path = Path::new()
        .set("fill", "black")
        .set("stroke", "none")
        .set("d", buffer_to_svg_path(&buffer, scale, margin));

    let background = Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", width)
        .set("height", height)
        .set("fill", "white");

    let document = Document::new()
        .add(background)
        .add(path)
        .set("viewBox", (0, 0, width, height))
        .set("width", format!("{width}px"))
        .set("height", format!("{height}px"));

    svg::save("output_segments.svg", &document)?;
    println!("Wrote output_segments.svg");

    Ok(())
}
