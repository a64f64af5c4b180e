//! Shared fixtures: a synthetic math font with enough inventory for
//! delimiters, arrows and styled letters, plus small box helpers.

use mathbox::fonts::{Extension, FontBackend, GlyphBounds, SyntheticFont};
use mathbox::layout::{HBox, StrutBox};
use mathbox::{BoxRef, FontContext, GlyphId, LayoutBox};
use std::rc::Rc;
use std::sync::Arc;

pub const PAREN_BASE: GlyphId = GlyphId(1);
pub const PAREN_BIG: GlyphId = GlyphId(10);
pub const PAREN_BIGGER: GlyphId = GlyphId(11);
pub const PAREN_TOP: GlyphId = GlyphId(20);
pub const PAREN_BOTTOM: GlyphId = GlyphId(21);
pub const PAREN_REPEAT: GlyphId = GlyphId(22);
pub const LETTER_A: GlyphId = GlyphId(2);
pub const BOLD_A: GlyphId = GlyphId(3);
pub const MINUS: GlyphId = GlyphId(30);
pub const LEFT_ARROW: GlyphId = GlyphId(31);
pub const RIGHT_ARROW: GlyphId = GlyphId(32);

pub fn math_font() -> Arc<dyn FontBackend> {
    Arc::new(
        SyntheticFont::new()
            .with_glyph('(', PAREN_BASE, GlyphBounds::new(0.3, 0.7, 0.2))
            .with_variant(PAREN_BASE, PAREN_BIG)
            .with_bounds(PAREN_BIG, GlyphBounds::new(0.3, 1.0, 0.4))
            .with_variant(PAREN_BIG, PAREN_BIGGER)
            .with_bounds(PAREN_BIGGER, GlyphBounds::new(0.3, 1.4, 0.6))
            .with_extension(
                PAREN_BASE,
                Extension {
                    top: Some(PAREN_TOP),
                    middle: None,
                    bottom: Some(PAREN_BOTTOM),
                    repeat: PAREN_REPEAT,
                },
            )
            .with_bounds(PAREN_TOP, GlyphBounds::new(0.3, 0.5, 0.0))
            .with_bounds(PAREN_BOTTOM, GlyphBounds::new(0.3, 0.5, 0.0))
            .with_bounds(PAREN_REPEAT, GlyphBounds::new(0.3, 0.4, 0.0))
            .with_glyph('A', LETTER_A, GlyphBounds::new(0.7, 0.68, 0.0))
            .with_glyph('\u{1D400}', BOLD_A, GlyphBounds::new(0.75, 0.69, 0.0))
            .with_glyph('\u{2212}', MINUS, GlyphBounds::new(0.6, 0.28, 0.0))
            .with_glyph('\u{2190}', LEFT_ARROW, GlyphBounds::new(0.9, 0.4, 0.1))
            .with_glyph('\u{2192}', RIGHT_ARROW, GlyphBounds::new(0.9, 0.4, 0.1)),
    )
}

/// A context with the synthetic math font registered and selected.
pub fn math_context() -> FontContext {
    let mut ctx = FontContext::new();
    ctx.register_math_font("testmath", "testmath.synthetic", math_font());
    ctx.select_math_font("testmath")
        .expect("fixture font registers under this name");
    ctx
}

pub fn strut(width: f32, height: f32, depth: f32) -> BoxRef {
    Rc::new(LayoutBox::Strut(StrutBox::new(width, height, depth)))
}

pub fn shifted_strut(width: f32, height: f32, depth: f32, shift: f32) -> BoxRef {
    let mut b = StrutBox::new(width, height, depth);
    b.metrics.shift = shift;
    Rc::new(LayoutBox::Strut(b))
}

/// A breakable row of struts: `breaks` are child indices a line may end at.
pub fn breakable_row(widths: &[f32], breaks: &[usize]) -> BoxRef {
    let mut hbox = HBox::new();
    for &w in widths {
        hbox.add(strut(w, 1.0, 0.5));
    }
    for &b in breaks {
        hbox.add_break_position(b);
    }
    Rc::new(LayoutBox::Horizontal(hbox))
}
