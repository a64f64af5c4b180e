use mathbox_types::{Color, FontId, GlyphId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapStyle {
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinStyle {
    Miter,
    Round,
    Bevel,
}

/// Pen description applied to line and rectangle strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub line_width: f32,
    pub cap: CapStyle,
    pub join: JoinStyle,
}

impl Stroke {
    pub fn new(line_width: f32, cap: CapStyle, join: JoinStyle) -> Self {
        Self { line_width, cap, join }
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            cap: CapStyle::Butt,
            join: JoinStyle::Miter,
        }
    }
}

/// A trait for 2D drawing backends, abstracting the painting primitives the
/// box tree needs.
///
/// The backend is shared mutable state: transform and pen changes made while
/// painting one subtree must be undone before returning to the parent. Boxes
/// do this through the scoped guards in [`crate::guard`], never by hand.
///
/// Coordinates follow the typesetting convention: y grows downward and a
/// box is painted relative to its baseline origin.
pub trait Graphics {
    fn translate(&mut self, dx: f32, dy: f32);

    fn scale(&mut self, sx: f32, sy: f32);

    /// Rotate the coordinate system by `angle` radians around `(px, py)`.
    fn rotate(&mut self, angle: f32, px: f32, py: f32);

    fn color(&self) -> Color;

    fn set_color(&mut self, color: Color);

    fn stroke(&self) -> Stroke;

    fn set_stroke(&mut self, stroke: Stroke);

    fn set_stroke_width(&mut self, width: f32);

    /// Current accumulated horizontal scale factor, used for pen-width
    /// compensation when hairlines must stay one device pixel wide.
    fn scale_x(&self) -> f32;

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn draw_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32);

    /// Paint one glyph from `font` at `(x, y)`, at the font's unit size.
    /// Size is applied by the caller through `scale`.
    fn draw_glyph(&mut self, font: FontId, glyph: GlyphId, x: f32, y: f32);
}
