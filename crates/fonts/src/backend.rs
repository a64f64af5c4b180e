//! The metrics-provider seam between the registry and concrete font data.
//!
//! `OtfFont` implements this over real OpenType files; `SyntheticFont` is an
//! in-memory implementation so layout tests can describe exactly the glyph
//! inventory they need without font files on disk.

use mathbox_types::GlyphId;
use std::collections::HashMap;
use std::fmt::Debug;

/// Per-glyph metrics in em units (1.0 = the font's design size).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlyphBounds {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub italic: f32,
}

impl GlyphBounds {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self { width, height, depth, italic: 0.0 }
    }

    pub fn extent(&self) -> f32 {
        self.height + self.depth
    }
}

/// Decomposition of a stretchable glyph into fixed parts plus a repeatable
/// filler. Leased for one delimiter build and discarded after.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extension {
    pub top: Option<GlyphId>,
    pub middle: Option<GlyphId>,
    pub bottom: Option<GlyphId>,
    pub repeat: GlyphId,
}

/// A source of glyph indices and metrics for one font.
///
/// The variant ladder and extension lookups take the base glyph (the glyph
/// the character originally resolved to) alongside the current glyph,
/// because OpenType keys both under the base glyph's construction while
/// other sources may key them per glyph.
pub trait FontBackend: Debug {
    fn glyph_index(&self, code: char) -> Option<GlyphId>;

    fn glyph_bounds(&self, glyph: GlyphId) -> GlyphBounds;

    /// The next larger pre-built variant of `current`, if the ladder
    /// continues past it.
    fn larger_variant(&self, base: GlyphId, current: GlyphId) -> Option<GlyphId>;

    /// The extensible decomposition declared for the glyph, if any.
    fn extension(&self, base: GlyphId, current: GlyphId) -> Option<Extension>;
}

/// In-memory font for tests: glyphs, metrics, variant ladders and
/// extensions are declared directly.
#[derive(Debug, Default)]
pub struct SyntheticFont {
    glyphs: HashMap<char, GlyphId>,
    bounds: HashMap<GlyphId, GlyphBounds>,
    ladder: HashMap<GlyphId, GlyphId>,
    extensions: HashMap<GlyphId, Extension>,
}

impl SyntheticFont {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_glyph(mut self, code: char, glyph: GlyphId, bounds: GlyphBounds) -> Self {
        self.glyphs.insert(code, glyph);
        self.bounds.insert(glyph, bounds);
        self
    }

    /// Register a glyph reachable only through a ladder or extension.
    pub fn with_bounds(mut self, glyph: GlyphId, bounds: GlyphBounds) -> Self {
        self.bounds.insert(glyph, bounds);
        self
    }

    pub fn with_variant(mut self, from: GlyphId, to: GlyphId) -> Self {
        self.ladder.insert(from, to);
        self
    }

    pub fn with_extension(mut self, glyph: GlyphId, extension: Extension) -> Self {
        self.extensions.insert(glyph, extension);
        self
    }
}

impl FontBackend for SyntheticFont {
    fn glyph_index(&self, code: char) -> Option<GlyphId> {
        self.glyphs.get(&code).copied()
    }

    fn glyph_bounds(&self, glyph: GlyphId) -> GlyphBounds {
        self.bounds.get(&glyph).copied().unwrap_or_default()
    }

    fn larger_variant(&self, _base: GlyphId, current: GlyphId) -> Option<GlyphId> {
        self.ladder.get(&current).copied()
    }

    fn extension(&self, base: GlyphId, current: GlyphId) -> Option<Extension> {
        self.extensions
            .get(&current)
            .or_else(|| self.extensions.get(&base))
            .copied()
    }
}
