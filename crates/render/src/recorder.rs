//! An in-memory backend that records every call it receives.
//!
//! Tests assert on paint order and transform pairing without a real canvas.

use crate::traits::{Graphics, Stroke};
use mathbox_types::{Color, FontId, GlyphId};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Translate(f32, f32),
    Scale(f32, f32),
    Rotate(f32, f32, f32),
    SetColor(Color),
    SetStroke(Stroke),
    Line(f32, f32, f32, f32),
    Rect(f32, f32, f32, f32),
    FillRect(f32, f32, f32, f32),
    RoundRect(f32, f32, f32, f32, f32, f32),
    Glyph(FontId, GlyphId, f32, f32),
}

#[derive(Debug, Default)]
pub struct RecordingGraphics {
    pub ops: Vec<DrawOp>,
    color: Color,
    stroke: Stroke,
    offset: (f32, f32),
    scale: (f32, f32),
    rotation: f32,
}

impl RecordingGraphics {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            color: Color::BLACK,
            stroke: Stroke::default(),
            offset: (0.0, 0.0),
            scale: (1.0, 1.0),
            rotation: 0.0,
        }
    }

    /// True when every transform applied during drawing has been undone.
    pub fn transforms_balanced(&self) -> bool {
        const EPS: f32 = 1e-4;
        self.offset.0.abs() < EPS
            && self.offset.1.abs() < EPS
            && (self.scale.0 - 1.0).abs() < EPS
            && (self.scale.1 - 1.0).abs() < EPS
            && self.rotation.abs() < EPS
    }

    pub fn glyphs(&self) -> Vec<(FontId, GlyphId)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Glyph(font, glyph, _, _) => Some((*font, *glyph)),
                _ => None,
            })
            .collect()
    }
}

impl Graphics for RecordingGraphics {
    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx * self.scale.0;
        self.offset.1 += dy * self.scale.1;
        self.ops.push(DrawOp::Translate(dx, dy));
    }

    fn scale(&mut self, sx: f32, sy: f32) {
        self.scale.0 *= sx;
        self.scale.1 *= sy;
        self.ops.push(DrawOp::Scale(sx, sy));
    }

    fn rotate(&mut self, angle: f32, px: f32, py: f32) {
        self.rotation += angle;
        self.ops.push(DrawOp::Rotate(angle, px, py));
    }

    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.ops.push(DrawOp::SetColor(color));
    }

    fn stroke(&self) -> Stroke {
        self.stroke
    }

    fn set_stroke(&mut self, stroke: Stroke) {
        self.stroke = stroke;
        self.ops.push(DrawOp::SetStroke(stroke));
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke.line_width = width;
        self.ops.push(DrawOp::SetStroke(self.stroke));
    }

    fn scale_x(&self) -> f32 {
        self.scale.0
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line(x1, y1, x2, y2));
    }

    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::Rect(x, y, width, height));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.ops.push(DrawOp::FillRect(x, y, width, height));
    }

    fn draw_round_rect(&mut self, x: f32, y: f32, width: f32, height: f32, rx: f32, ry: f32) {
        self.ops.push(DrawOp::RoundRect(x, y, width, height, rx, ry));
    }

    fn draw_glyph(&mut self, font: FontId, glyph: GlyphId, x: f32, y: f32) {
        self.ops.push(DrawOp::Glyph(font, glyph, x, y));
    }
}
