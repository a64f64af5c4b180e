//! Leaf boxes: glyphs, shaped text runs, rules, struts and raw segments.

use super::Metrics;
use crate::LayoutError;
use mathbox_fonts::GlyphDescriptor;
use mathbox_render::guard::{ColorGuard, ScaleGuard, StrokeGuard, TranslateGuard};
use mathbox_render::{CapStyle, Graphics, JoinStyle, Stroke};
use mathbox_types::{Color, FontId, GlyphId};

/// A single glyph scaled to a point size. Metrics are the glyph's em-unit
/// bounds times the size; the italic correction is kept aside and folded
/// into the width only on request.
#[derive(Debug, Clone)]
pub struct GlyphBox {
    pub metrics: Metrics,
    pub descriptor: GlyphDescriptor,
    pub size: f32,
}

impl GlyphBox {
    pub fn new(descriptor: GlyphDescriptor, size: f32) -> Self {
        Self {
            metrics: Metrics::new(
                descriptor.width * size,
                descriptor.height * size,
                descriptor.depth * size,
            ),
            descriptor,
            size,
        }
    }

    /// Widen by the glyph's italic correction, for upright material that
    /// follows a slanted glyph.
    pub fn add_italic_correction_to_width(&mut self) {
        self.metrics.width += self.descriptor.italic * self.size;
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = TranslateGuard::new(g, x, y);
        if self.size != 1.0 {
            let mut g = ScaleGuard::new(&mut *g, self.size, self.size);
            g.draw_glyph(self.descriptor.font, self.descriptor.glyph, 0.0, 0.0);
        } else {
            g.draw_glyph(self.descriptor.font, self.descriptor.glyph, 0.0, 0.0);
        }
    }
}

/// One glyph of a shaped run, positioned in em units from the run origin.
#[derive(Debug, Clone, Copy)]
pub struct ShapedGlyph {
    pub glyph: GlyphId,
    pub x: f32,
}

/// A run of already-shaped glyphs drawn in one font at one size.
#[derive(Debug, Clone)]
pub struct TextBox {
    pub metrics: Metrics,
    pub font: FontId,
    pub size: f32,
    pub glyphs: Vec<ShapedGlyph>,
}

impl TextBox {
    /// `width`, `height` and `depth` are em-unit measurements of the whole
    /// run, as produced by shaping.
    pub fn new(
        font: FontId,
        size: f32,
        glyphs: Vec<ShapedGlyph>,
        width: f32,
        height: f32,
        depth: f32,
    ) -> Self {
        Self {
            metrics: Metrics::new(width * size, height * size, depth * size),
            font,
            size,
            glyphs,
        }
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = TranslateGuard::new(g, x, y);
        let mut g = ScaleGuard::new(&mut *g, self.size, self.size);
        for shaped in &self.glyphs {
            g.draw_glyph(self.font, shaped.glyph, shaped.x, 0.0);
        }
    }
}

/// A horizontal rule, drawn as one stroked line of the rule's thickness.
///
/// The vertical position can be carried two ways: as a true baseline shift
/// that participates in the parent's metrics, or as a draw-only shift that
/// raises the painted line while the metrics stay put.
#[derive(Debug, Clone)]
pub struct RuleBox {
    pub metrics: Metrics,
    color: Option<Color>,
    draw_shift: f32,
}

impl RuleBox {
    pub fn new(thickness: f32, width: f32, shift: f32) -> Self {
        let mut metrics = Metrics::new(width, thickness, 0.0);
        metrics.shift = shift;
        Self { metrics, color: None, draw_shift: 0.0 }
    }

    /// Rule whose shift only moves the painted line, not the box.
    pub fn raised(thickness: f32, width: f32, shift: f32) -> Self {
        Self {
            metrics: Metrics::new(width, thickness, 0.0),
            color: None,
            draw_shift: shift,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = ColorGuard::new(g);
        if let Some(color) = self.color {
            g.set_color(color);
        }
        let mut g = StrokeGuard::new(&mut *g);
        let thickness = self.metrics.height;
        g.set_stroke(Stroke::new(thickness, CapStyle::Butt, JoinStyle::Bevel));
        let y = y - thickness / 2.0 - self.draw_shift;
        g.draw_line(x, y, x + self.metrics.width, y);
    }
}

/// Invisible spacing. Draws nothing; negative dimensions are legitimate
/// and act as kerns.
#[derive(Debug, Clone, Default)]
pub struct StrutBox {
    pub metrics: Metrics,
}

impl StrutBox {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { metrics: Metrics::new(width, height, depth) }
    }

    /// Horizontal-only strut (a kern when negative).
    pub fn wide(width: f32) -> Self {
        Self::new(width, 0.0, 0.0)
    }
}

/// Straight line segments given as flat `[x1, y1, x2, y2]*` coordinates,
/// drawn with a fixed thin stroke.
#[derive(Debug, Clone)]
pub struct SegmentsBox {
    pub metrics: Metrics,
    segments: Vec<f32>,
    thickness: f32,
}

impl SegmentsBox {
    pub fn new(segments: Vec<f32>, thickness: f32) -> Result<Self, LayoutError> {
        if segments.len() % 4 != 0 {
            return Err(LayoutError::MalformedSegments(segments.len()));
        }
        let mut metrics = Metrics::default();
        for quad in segments.chunks_exact(4) {
            metrics.width = metrics.width.max(quad[0]).max(quad[2]);
            metrics.height = metrics.height.max(-quad[1]).max(-quad[3]);
            metrics.depth = metrics.depth.max(quad[1]).max(quad[3]);
        }
        Ok(Self { metrics, segments, thickness })
    }

    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        let mut g = StrokeGuard::new(g);
        g.set_stroke(Stroke::new(self.thickness, CapStyle::Round, JoinStyle::Round));
        for quad in self.segments.chunks_exact(4) {
            g.draw_line(x + quad[0], y + quad[1], x + quad[2], y + quad[3]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbox_render::recorder::{DrawOp, RecordingGraphics};

    fn descriptor() -> GlyphDescriptor {
        GlyphDescriptor {
            code: 'x',
            mapped: 'x',
            font: FontId(0),
            glyph: GlyphId(5),
            base_glyph: GlyphId(5),
            width: 0.5,
            height: 0.45,
            depth: 0.0,
            italic: 0.03,
        }
    }

    #[test]
    fn test_glyph_box_scales_metrics() {
        let b = GlyphBox::new(descriptor(), 10.0);
        assert!((b.metrics.width - 5.0).abs() < 1e-6);
        assert!((b.metrics.height - 4.5).abs() < 1e-6);
    }

    #[test]
    fn test_italic_correction_widens() {
        let mut b = GlyphBox::new(descriptor(), 10.0);
        b.add_italic_correction_to_width();
        assert!((b.metrics.width - 5.3).abs() < 1e-6);
    }

    #[test]
    fn test_glyph_box_draw_balances_transforms() {
        let mut g = RecordingGraphics::new();
        GlyphBox::new(descriptor(), 10.0).draw(&mut g, 3.0, 7.0);
        assert!(g.transforms_balanced());
        assert_eq!(g.glyphs().len(), 1);
    }

    #[test]
    fn test_text_box_draws_run_in_order() {
        let glyphs = vec![
            ShapedGlyph { glyph: GlyphId(4), x: 0.0 },
            ShapedGlyph { glyph: GlyphId(7), x: 0.52 },
        ];
        let b = TextBox::new(FontId(1), 12.0, glyphs, 1.0, 0.7, 0.2);
        assert!((b.metrics.width - 12.0).abs() < 1e-6);
        assert!((b.metrics.depth - 2.4).abs() < 1e-6);

        let mut g = RecordingGraphics::new();
        b.draw(&mut g, 0.0, 0.0);
        assert!(g.transforms_balanced());
        let drawn: Vec<GlyphId> = g.glyphs().iter().map(|(_, glyph)| *glyph).collect();
        assert_eq!(drawn, vec![GlyphId(4), GlyphId(7)]);
    }

    #[test]
    fn test_rule_draw_restores_pen_and_color() {
        let mut g = RecordingGraphics::new();
        let before = (g.color(), g.stroke());
        RuleBox::new(0.04, 2.0, 0.0)
            .with_color(Color::rgb(200, 0, 0))
            .draw(&mut g, 0.0, 0.0);
        assert_eq!((g.color(), g.stroke()), before);
        assert!(g.ops.iter().any(|op| matches!(op, DrawOp::Line(..))));
    }

    #[test]
    fn test_raised_rule_keeps_zero_shift() {
        let rule = RuleBox::raised(0.04, 2.0, 0.3);
        assert_eq!(rule.metrics.shift, 0.0);
    }

    #[test]
    fn test_segments_reject_partial_quad() {
        assert!(matches!(
            SegmentsBox::new(vec![0.0, 0.0, 1.0], 0.02),
            Err(LayoutError::MalformedSegments(3))
        ));
    }

    #[test]
    fn test_segments_metrics_span_endpoints() {
        let b = SegmentsBox::new(vec![0.0, -1.0, 2.0, 0.5], 0.02).unwrap();
        assert!((b.metrics.width - 2.0).abs() < 1e-6);
        assert!((b.metrics.height - 1.0).abs() < 1e-6);
        assert!((b.metrics.depth - 0.5).abs() < 1e-6);
    }
}
