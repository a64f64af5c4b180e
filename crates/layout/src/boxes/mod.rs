//! The box data model.
//!
//! A box is a rectangle measured from its baseline: `width` to the right,
//! `height` above, `depth` below, plus a `shift` applied by the parent
//! (downward inside a row, rightward inside a column). Boxes are built
//! bottom-up, shared through [`BoxRef`] reference counting, and drawn by
//! walking the tree with a graphics backend.

use mathbox_render::Graphics;
use mathbox_types::FontId;
use std::rc::Rc;

pub mod decor;
pub mod group;
pub mod leaf;

use decor::{ColorBox, FrameBox, OvalBox, ReflectBox, RotateBox, ScaleBox, ShadowBox};
use group::{HBox, VBox};
use leaf::{GlyphBox, RuleBox, SegmentsBox, StrutBox, TextBox};

/// Shared handle to a finished box. Cloning the handle shares the node;
/// a box is mutated only before it is first wrapped.
pub type BoxRef = Rc<LayoutBox>;

/// Baseline-relative dimensions of a box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub shift: f32,
}

impl Metrics {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth, shift: 0.0 }
    }

    /// Total vertical extent, ascent plus descent.
    pub fn vertical_extent(&self) -> f32 {
        self.height + self.depth
    }
}

/// Child alignment inside a group built wider (or taller) than its content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    None,
    Left,
    Center,
    Right,
    Top,
    Bottom,
}

/// Every node kind the engine produces. The set is closed: composition
/// rules and the splitter pattern-match on it, and new kinds are expected
/// to appear here rather than behind a trait object.
#[derive(Debug)]
pub enum LayoutBox {
    Horizontal(HBox),
    Vertical(VBox),
    Glyph(GlyphBox),
    Text(TextBox),
    Rule(RuleBox),
    Strut(StrutBox),
    Segments(SegmentsBox),
    Scale(ScaleBox),
    Reflect(ReflectBox),
    Rotate(RotateBox),
    Color(ColorBox),
    Frame(FrameBox),
    Oval(OvalBox),
    Shadow(ShadowBox),
}

impl LayoutBox {
    pub fn metrics(&self) -> &Metrics {
        match self {
            Self::Horizontal(b) => &b.metrics,
            Self::Vertical(b) => &b.metrics,
            Self::Glyph(b) => &b.metrics,
            Self::Text(b) => &b.metrics,
            Self::Rule(b) => &b.metrics,
            Self::Strut(b) => &b.metrics,
            Self::Segments(b) => &b.metrics,
            Self::Scale(b) => &b.metrics,
            Self::Reflect(b) => &b.metrics,
            Self::Rotate(b) => &b.metrics,
            Self::Color(b) => &b.metrics,
            Self::Frame(b) => &b.metrics,
            Self::Oval(b) => &b.metrics,
            Self::Shadow(b) => &b.metrics,
        }
    }

    pub fn width(&self) -> f32 {
        self.metrics().width
    }

    pub fn height(&self) -> f32 {
        self.metrics().height
    }

    pub fn depth(&self) -> f32 {
        self.metrics().depth
    }

    pub fn shift(&self) -> f32 {
        self.metrics().shift
    }

    pub fn vertical_extent(&self) -> f32 {
        self.metrics().vertical_extent()
    }

    /// Draw the box with its reference point (baseline left edge) at
    /// `(x, y)`. Implementations restore every backend state they touch.
    pub fn draw(&self, g: &mut dyn Graphics, x: f32, y: f32) {
        match self {
            Self::Horizontal(b) => b.draw(g, x, y),
            Self::Vertical(b) => b.draw(g, x, y),
            Self::Glyph(b) => b.draw(g, x, y),
            Self::Text(b) => b.draw(g, x, y),
            Self::Rule(b) => b.draw(g, x, y),
            Self::Strut(_) => {}
            Self::Segments(b) => b.draw(g, x, y),
            Self::Scale(b) => b.draw(g, x, y),
            Self::Reflect(b) => b.draw(g, x, y),
            Self::Rotate(b) => b.draw(g, x, y),
            Self::Color(b) => b.draw(g, x, y),
            Self::Frame(b) => b.draw(g, x, y),
            Self::Oval(b) => b.draw(g, x, y),
            Self::Shadow(b) => b.draw(g, x, y),
        }
    }

    /// The font of the last glyph drawn by this subtree, scanning children
    /// from the end. Used to pick the font for trailing punctuation.
    pub fn last_font_id(&self) -> Option<FontId> {
        match self {
            Self::Glyph(b) => Some(b.descriptor.font),
            Self::Text(b) => Some(b.font),
            Self::Horizontal(b) => b.children.iter().rev().find_map(|c| c.last_font_id()),
            Self::Vertical(b) => b.children.iter().rev().find_map(|c| c.last_font_id()),
            Self::Scale(b) => b.child.last_font_id(),
            Self::Reflect(b) => b.child.last_font_id(),
            Self::Rotate(b) => b.child.last_font_id(),
            Self::Color(b) => b.child.last_font_id(),
            Self::Frame(b) => b.child.last_font_id(),
            Self::Oval(b) => b.child.last_font_id(),
            Self::Shadow(b) => b.child.last_font_id(),
            Self::Rule(_) | Self::Strut(_) | Self::Segments(_) => None,
        }
    }

    /// Children of group boxes; decorators expose their single child and
    /// leaves are empty.
    pub fn children(&self) -> &[BoxRef] {
        match self {
            Self::Horizontal(b) => &b.children,
            Self::Vertical(b) => &b.children,
            Self::Scale(b) => std::slice::from_ref(&b.child),
            Self::Reflect(b) => std::slice::from_ref(&b.child),
            Self::Rotate(b) => std::slice::from_ref(&b.child),
            Self::Color(b) => std::slice::from_ref(&b.child),
            Self::Frame(b) => std::slice::from_ref(&b.child),
            Self::Oval(b) => std::slice::from_ref(&b.child),
            Self::Shadow(b) => std::slice::from_ref(&b.child),
            _ => &[],
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            Self::Horizontal(_) => "hbox",
            Self::Vertical(_) => "vbox",
            Self::Glyph(_) => "glyph",
            Self::Text(_) => "text",
            Self::Rule(_) => "rule",
            Self::Strut(_) => "strut",
            Self::Segments(_) => "segments",
            Self::Scale(_) => "scale",
            Self::Reflect(_) => "reflect",
            Self::Rotate(_) => "rotate",
            Self::Color(_) => "color",
            Self::Frame(_) => "frame",
            Self::Oval(_) => "oval",
            Self::Shadow(_) => "shadow",
        }
    }

    /// Indented tree dump for diagnostics.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_into(&mut out, 0);
        out
    }

    fn dump_into(&self, out: &mut String, level: usize) {
        use std::fmt::Write;
        let m = self.metrics();
        let _ = writeln!(
            out,
            "{:indent$}{} w={:.3} h={:.3} d={:.3} s={:.3}",
            "",
            self.kind_name(),
            m.width,
            m.height,
            m.depth,
            m.shift,
            indent = level * 2
        );
        for child in self.children() {
            child.dump_into(out, level + 1);
        }
    }
}
