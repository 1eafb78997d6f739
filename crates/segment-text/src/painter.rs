use segment_text_core::{
    BlitError, Canvas, Line, PixelGrid, Point, Renderer, TextConfig, TextStyle, image, raster,
};
use segment_text_seg32::{GlyphSet, Seg32Renderer};
use tracing::debug;

/// Draws text, shapes and images onto a [Canvas].
///
/// A painter owns its text style, so several painters with different
/// sizes or angles can share one buffer (via `&mut` canvases) without
/// interfering. Style changes only affect later calls.
#[derive(Debug, Clone)]
pub struct Painter<C> {
    canvas: C,
    style: TextStyle,
    glyphs: GlyphSet,
}

impl<C: Canvas> Painter<C> {
    /// A painter with the default text style: 10 pixels tall, 8 wide,
    /// boldness 3, upright.
    pub fn new(canvas: C) -> Self {
        Self::with_style(canvas, TextStyle::default())
    }

    pub fn with_style(canvas: C, style: TextStyle) -> Self {
        Self {
            canvas,
            style,
            glyphs: GlyphSet::default(),
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_inner(self) -> C {
        self.canvas
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn glyph_set(&self) -> GlyphSet {
        self.glyphs
    }

    pub fn set_glyph_set(&mut self, glyphs: GlyphSet) {
        self.glyphs = glyphs;
    }

    /// Update the text style, see [TextStyle::configure].
    pub fn configure_text(&mut self, config: TextConfig) {
        self.style.configure(config);
        debug!(style = ?self.style, "text style changed");
    }

    /// Draw `text` with its first character centered on `origin`.
    ///
    /// Returns where the next character would go, so runs can be continued.
    pub fn render_text(&mut self, text: &str, origin: Point, color: u32) -> Point {
        for stroke in Seg32Renderer::render_text(text, origin, &self.style, self.glyphs) {
            stroke.draw(&mut self.canvas, color);
        }
        origin + segment_text_seg32::text_advance(text, &self.style)
    }

    /// A hexagon-ended bar, see [raster::stroke_bar].
    pub fn stroke_bar(&mut self, line: Line, boldness: i32, color: u32) {
        raster::stroke_bar(&mut self.canvas, line, boldness, color);
    }

    pub fn circle(&mut self, center: Point, radius: i32, color: u32) {
        raster::circle(&mut self.canvas, center, radius, color);
    }

    pub fn filled_circle(&mut self, center: Point, radius: i32, color: u32) {
        raster::filled_circle(&mut self.canvas, center, radius, color);
    }

    /// Place a decoded image, rotated by a multiple of 90 degrees.
    ///
    /// On error nothing is drawn, see [image::blit_image].
    pub fn blit_image(
        &mut self,
        origin: Point,
        grid: &PixelGrid,
        degrees: i32,
    ) -> Result<(), BlitError> {
        image::blit_image(&mut self.canvas, origin, grid, degrees)
    }
}
