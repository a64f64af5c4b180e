//! Extensible delimiters and stretchable arrows.
//!
//! Both builders work the same way: resolve the base glyph, walk the
//! font's pre-built variant ladder while the result is too small, then
//! assemble from parts once the ladder runs out. Delimiters stack glyph
//! parts vertically; arrows tile a smashed minus between arrowheads.

use crate::boxes::decor::ScaleBox;
use crate::boxes::group::{HBox, VBox};
use crate::boxes::leaf::{GlyphBox, StrutBox};
use crate::boxes::{BoxRef, LayoutBox};
use crate::LayoutError;
use mathbox_fonts::{symbols, FontContext, FontStyle, GlyphDescriptor};
use std::rc::Rc;

/// Builds a delimiter at least as tall as a requested extent.
pub struct DelimiterFactory<'a> {
    fonts: &'a FontContext,
    size: f32,
}

impl<'a> DelimiterFactory<'a> {
    pub fn new(fonts: &'a FontContext, size: f32) -> Self {
        Self { fonts, size }
    }

    fn glyph(&self, desc: GlyphDescriptor) -> BoxRef {
        Rc::new(LayoutBox::Glyph(GlyphBox::new(desc, self.size)))
    }

    fn resolve(&self, symbol: &str) -> Result<GlyphDescriptor, LayoutError> {
        let code = symbols::code_of(symbol)
            .ok_or_else(|| LayoutError::UnknownSymbol(symbol.to_string()))?;
        Ok(self.fonts.resolve_char(code, FontStyle::None, true)?)
    }

    /// A delimiter with vertical extent of at least `target`.
    ///
    /// Walks the variant ladder first; a variant that reaches the target
    /// is returned as-is, taller than requested rather than scaled. When
    /// the ladder runs out, the glyph's extensible recipe is stacked:
    /// fixed parts once, the repeatable part until tall enough. A glyph
    /// with neither a tall-enough variant nor a recipe yields the largest
    /// variant available.
    pub fn create(&self, symbol: &str, target: f32) -> Result<BoxRef, LayoutError> {
        let mut desc = self.resolve(symbol)?;
        while desc.extent() * self.size < target {
            match self.fonts.larger_variant(&desc) {
                Some(next) => desc = next,
                None => break,
            }
        }
        if desc.extent() * self.size >= target {
            return Ok(self.glyph(desc));
        }

        let Some(ext) = self.fonts.extension(&desc) else {
            log::debug!("{symbol}: no extensible recipe, using largest variant");
            return Ok(self.glyph(desc));
        };

        let mut vbox = VBox::new();
        if let Some(top) = ext.top {
            vbox.add(self.glyph(top));
        }
        if let Some(middle) = ext.middle {
            vbox.add(self.glyph(middle));
        }
        if let Some(bottom) = ext.bottom {
            vbox.add(self.glyph(bottom));
        }

        let repeat = self.glyph(ext.repeat);
        while vbox.metrics.vertical_extent() <= target {
            if ext.top.is_some() && ext.bottom.is_some() {
                vbox.add_at(1, repeat.clone());
                if ext.middle.is_some() {
                    let index = vbox.len() - 1;
                    vbox.add_at(index, repeat.clone());
                }
            } else if ext.bottom.is_some() {
                vbox.add_at(0, repeat.clone());
            } else {
                vbox.add(repeat.clone());
            }
            // A degenerate repeat part can never fill the gap.
            if repeat.vertical_extent() <= 0.0 {
                break;
            }
        }
        Ok(Rc::new(LayoutBox::Vertical(vbox)))
    }

    /// A delimiter by discrete size class, 1 through 4. Each class steps
    /// once further up the variant ladder; a ladder that runs out early
    /// falls back to the extensible path sized by the class in multiples
    /// of a reference letter's extent. Class 0 (or out of range) is the
    /// base glyph.
    pub fn create_sized(&self, symbol: &str, class: usize) -> Result<BoxRef, LayoutError> {
        let mut desc = self.resolve(symbol)?;
        if class == 0 || class > 4 {
            return Ok(self.glyph(desc));
        }
        for _ in 0..class {
            match self.fonts.larger_variant(&desc) {
                Some(next) => desc = next,
                None => {
                    let reference = self.fonts.resolve_char('A', FontStyle::None, true)?;
                    let target = class as f32 * reference.extent() * self.size;
                    return self.create(symbol, target);
                }
            }
        }
        Ok(self.glyph(desc))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// Builds single and double stretchable arrows of a requested width.
///
/// The arrowhead glyphs and the minus sign used as the shaft are resolved
/// once at construction.
pub struct ArrowBuilder {
    size: f32,
    minus: GlyphDescriptor,
    left: GlyphDescriptor,
    right: GlyphDescriptor,
}

impl ArrowBuilder {
    pub fn new(fonts: &FontContext, size: f32) -> Result<Self, LayoutError> {
        let resolve = |name: &str| -> Result<GlyphDescriptor, LayoutError> {
            let code = symbols::code_of(name)
                .ok_or_else(|| LayoutError::UnknownSymbol(name.to_string()))?;
            Ok(fonts.resolve_char(code, FontStyle::None, true)?)
        };
        Ok(Self {
            size,
            minus: resolve("minus")?,
            left: resolve("leftarrow")?,
            right: resolve("rightarrow")?,
        })
    }

    /// Math-unit distance: 1 mu is 1/18 em.
    fn mu(&self, n: f32) -> f32 {
        n / 18.0 * self.size
    }

    fn kern(&self, mu: f32) -> BoxRef {
        Rc::new(LayoutBox::Strut(StrutBox::wide(self.mu(mu))))
    }

    /// The shaft glyph with its vertical metrics smashed to zero, so
    /// tiling it never disturbs the row's extents.
    fn shaft(&self) -> BoxRef {
        let mut minus = GlyphBox::new(self.minus, self.size);
        minus.metrics.height = 0.0;
        minus.metrics.depth = 0.0;
        Rc::new(LayoutBox::Glyph(minus))
    }

    /// A double-headed arrow stretched to `width`. Narrow targets overlap
    /// the two heads instead of tiling a shaft.
    pub fn create_double(&self, width: f32) -> BoxRef {
        let left: BoxRef = Rc::new(LayoutBox::Glyph(GlyphBox::new(self.left, self.size)));
        let right: BoxRef = Rc::new(LayoutBox::Glyph(GlyphBox::new(self.right, self.size)));
        let swidth = left.width() + right.width();

        if width < swidth {
            let overlap = -(swidth - width).min(left.width());
            let mut hb = HBox::of_child(left);
            hb.add(Rc::new(LayoutBox::Strut(StrutBox::wide(overlap))));
            hb.add(right);
            return Rc::new(LayoutBox::Horizontal(hb));
        }

        let minus = self.shaft();
        let kern = self.kern(-3.4);
        let mwidth = minus.width() + kern.width();
        let swidth = swidth + 2.0 * kern.width();

        let mut hb = HBox::new();
        let mut w = 0.0;
        while w < width - swidth - mwidth {
            hb.add(minus.clone());
            hb.add(kern.clone());
            w += mwidth;
        }
        hb.add(Rc::new(LayoutBox::Scale(ScaleBox::new(
            minus.clone(),
            (width - swidth - w) / minus.width(),
            1.0,
        ))));
        hb.add_at(0, kern.clone());
        hb.add_at(0, left);
        hb.add(kern);
        hb.add(right);
        Rc::new(LayoutBox::Horizontal(hb))
    }

    /// A single arrow stretched to `width`. The result keeps the
    /// arrowhead's height but halves its depth, centering the shaft on
    /// the axis the head was designed for.
    pub fn create_single(&self, direction: ArrowDirection, width: f32) -> BoxRef {
        let desc = match direction {
            ArrowDirection::Left => self.left,
            ArrowDirection::Right => self.right,
        };
        let mut arrow = GlyphBox::new(desc, self.size);
        let height = arrow.metrics.height;
        let depth = arrow.metrics.depth;
        let swidth = arrow.metrics.width;

        if width <= swidth {
            arrow.metrics.depth = depth / 2.0;
            return Rc::new(LayoutBox::Glyph(arrow));
        }

        let minus = self.shaft();
        let kern = self.kern(-4.0);
        let mwidth = minus.width() + kern.width();
        let swidth = swidth + kern.width();

        let mut hb = HBox::new();
        let mut w = 0.0;
        while w < width - swidth - mwidth {
            hb.add(minus.clone());
            hb.add(kern.clone());
            w += mwidth;
        }

        let sf = (width - swidth - w) / minus.width();
        hb.add(self.kern(-2.0 * sf));
        hb.add(Rc::new(LayoutBox::Scale(ScaleBox::new(minus, sf, 1.0))));

        let arrow: BoxRef = Rc::new(LayoutBox::Glyph(arrow));
        match direction {
            ArrowDirection::Left => {
                hb.add_at(0, self.kern(-3.5));
                hb.add_at(0, arrow);
            }
            ArrowDirection::Right => {
                hb.add(self.kern(-2.0 * sf - 2.0));
                hb.add(arrow);
            }
        }
        hb.metrics.height = height;
        hb.metrics.depth = depth / 2.0;
        Rc::new(LayoutBox::Horizontal(hb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mathbox_fonts::{Extension, FontBackend, GlyphBounds, SyntheticFont};
    use mathbox_types::GlyphId;
    use std::sync::Arc;

    // One font with a paren ladder '(' -> 10 -> 11, an extension recipe on
    // the largest variant, and the arrow trio.
    fn test_fonts() -> FontContext {
        let font = SyntheticFont::new()
            .with_glyph('(', GlyphId(1), GlyphBounds::new(0.3, 0.7, 0.2))
            .with_variant(GlyphId(1), GlyphId(10))
            .with_bounds(GlyphId(10), GlyphBounds::new(0.3, 1.0, 0.4))
            .with_variant(GlyphId(10), GlyphId(11))
            .with_bounds(GlyphId(11), GlyphBounds::new(0.3, 1.4, 0.6))
            .with_extension(
                GlyphId(1),
                Extension {
                    top: Some(GlyphId(20)),
                    middle: None,
                    bottom: Some(GlyphId(21)),
                    repeat: GlyphId(22),
                },
            )
            .with_bounds(GlyphId(20), GlyphBounds::new(0.3, 0.5, 0.0))
            .with_bounds(GlyphId(21), GlyphBounds::new(0.3, 0.5, 0.0))
            .with_bounds(GlyphId(22), GlyphBounds::new(0.3, 0.4, 0.0))
            .with_glyph('A', GlyphId(2), GlyphBounds::new(0.7, 0.68, 0.0))
            .with_glyph('\u{2212}', GlyphId(30), GlyphBounds::new(0.6, 0.3, -0.2))
            .with_glyph('\u{2190}', GlyphId(31), GlyphBounds::new(0.9, 0.4, 0.1))
            .with_glyph('\u{2192}', GlyphId(32), GlyphBounds::new(0.9, 0.4, 0.1));
        let backend: Arc<dyn FontBackend> = Arc::new(font);
        let mut ctx = FontContext::new();
        ctx.register_math_font("test", "test.synthetic", backend);
        ctx.select_math_font("test").unwrap();
        ctx
    }

    #[test]
    fn test_small_target_uses_base_glyph() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create("parenleft", 5.0).unwrap();
        assert!(matches!(&*b, LayoutBox::Glyph(g) if g.descriptor.glyph == GlyphId(1)));
    }

    #[test]
    fn test_ladder_walks_to_sufficient_variant() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create("parenleft", 12.0).unwrap();
        assert!(matches!(&*b, LayoutBox::Glyph(g) if g.descriptor.glyph == GlyphId(10)));
        assert!(b.vertical_extent() >= 12.0);
    }

    #[test]
    fn test_extension_stack_reaches_target() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        // Largest ladder variant gives 20.0; force the extensible recipe.
        let b = factory.create("parenleft", 30.0).unwrap();
        let LayoutBox::Vertical(vbox) = &*b else {
            panic!("expected a vertical assembly");
        };
        assert!(vbox.metrics.vertical_extent() > 30.0);
        // top and bottom appear exactly once, as first and last children
        let glyph_at = |i: usize| match &*vbox.children[i] {
            LayoutBox::Glyph(g) => g.descriptor.glyph,
            _ => panic!("expected glyph child"),
        };
        assert_eq!(glyph_at(0), GlyphId(20));
        assert_eq!(glyph_at(vbox.len() - 1), GlyphId(21));
        for i in 1..vbox.len() - 1 {
            assert_eq!(glyph_at(i), GlyphId(22));
        }
    }

    #[test]
    fn test_extension_with_middle_grows_both_gaps() {
        let font = SyntheticFont::new()
            .with_glyph('{', GlyphId(5), GlyphBounds::new(0.4, 0.6, 0.2))
            .with_extension(
                GlyphId(5),
                Extension {
                    top: Some(GlyphId(50)),
                    middle: Some(GlyphId(51)),
                    bottom: Some(GlyphId(52)),
                    repeat: GlyphId(53),
                },
            )
            .with_bounds(GlyphId(50), GlyphBounds::new(0.4, 0.5, 0.0))
            .with_bounds(GlyphId(51), GlyphBounds::new(0.4, 0.5, 0.0))
            .with_bounds(GlyphId(52), GlyphBounds::new(0.4, 0.5, 0.0))
            .with_bounds(GlyphId(53), GlyphBounds::new(0.4, 0.4, 0.0));
        let backend: Arc<dyn FontBackend> = Arc::new(font);
        let mut fonts = FontContext::new();
        fonts.register_math_font("brace", "brace.synthetic", backend);
        fonts.select_math_font("brace").unwrap();

        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create("lbrace", 40.0).unwrap();
        let LayoutBox::Vertical(vbox) = &*b else {
            panic!("expected a vertical assembly");
        };
        let glyphs: Vec<GlyphId> = vbox
            .children
            .iter()
            .map(|c| match &**c {
                LayoutBox::Glyph(g) => g.descriptor.glyph,
                _ => panic!("expected glyph child"),
            })
            .collect();
        assert_eq!(glyphs.first(), Some(&GlyphId(50)));
        assert_eq!(glyphs.last(), Some(&GlyphId(52)));
        // the middle part appears once, with repeats filling both gaps
        let middles = glyphs.iter().filter(|&&g| g == GlyphId(51)).count();
        assert_eq!(middles, 1);
        let mid = glyphs.iter().position(|&g| g == GlyphId(51)).unwrap();
        assert!(mid > 1 && mid < glyphs.len() - 2);
        assert!(vbox.metrics.vertical_extent() > 40.0);
    }

    #[test]
    fn test_extension_repeats_share_one_node() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create("parenleft", 30.0).unwrap();
        let LayoutBox::Vertical(vbox) = &*b else {
            panic!("expected a vertical assembly");
        };
        let repeats: Vec<&BoxRef> = vbox.children[1..vbox.len() - 1].iter().collect();
        assert!(repeats.len() >= 2);
        for pair in repeats.windows(2) {
            assert!(Rc::ptr_eq(pair[0], pair[1]));
        }
    }

    #[test]
    fn test_unknown_symbol_errors() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        assert!(matches!(
            factory.create("nosuchsymbol", 5.0),
            Err(LayoutError::UnknownSymbol(_))
        ));
    }

    #[test]
    fn test_size_class_zero_is_base_glyph() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create_sized("parenleft", 0).unwrap();
        assert!(matches!(&*b, LayoutBox::Glyph(g) if g.descriptor.glyph == GlyphId(1)));
    }

    #[test]
    fn test_size_class_steps_ladder() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        let b = factory.create_sized("parenleft", 2).unwrap();
        assert!(matches!(&*b, LayoutBox::Glyph(g) if g.descriptor.glyph == GlyphId(11)));
    }

    #[test]
    fn test_size_class_past_ladder_builds_extension() {
        let fonts = test_fonts();
        let factory = DelimiterFactory::new(&fonts, 10.0);
        // Class 4 exhausts the two-step ladder; 4 * extent('A') * 10 = 27.2.
        let b = factory.create_sized("parenleft", 4).unwrap();
        assert!(matches!(&*b, LayoutBox::Vertical(_)));
        assert!(b.vertical_extent() >= 27.2);
    }

    #[test]
    fn test_narrow_single_arrow_halves_depth_only() {
        let fonts = test_fonts();
        let builder = ArrowBuilder::new(&fonts, 10.0).unwrap();
        let b = builder.create_single(ArrowDirection::Right, 5.0);
        assert!((b.height() - 4.0).abs() < 1e-5);
        assert!((b.depth() - 0.5).abs() < 1e-5);
        // the cached descriptor is untouched: a second build matches
        let again = builder.create_single(ArrowDirection::Right, 5.0);
        assert!((again.depth() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_wide_single_arrow_tiles_shaft() {
        let fonts = test_fonts();
        let builder = ArrowBuilder::new(&fonts, 10.0).unwrap();
        let b = builder.create_single(ArrowDirection::Right, 40.0);
        let LayoutBox::Horizontal(hb) = &*b else {
            panic!("expected a row");
        };
        assert!(hb.len() > 2);
        assert!((b.height() - 4.0).abs() < 1e-5);
        assert!((b.depth() - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_narrow_double_arrow_overlaps_heads() {
        let fonts = test_fonts();
        let builder = ArrowBuilder::new(&fonts, 10.0).unwrap();
        let b = builder.create_double(12.0);
        let LayoutBox::Horizontal(hb) = &*b else {
            panic!("expected a row");
        };
        assert_eq!(hb.len(), 3);
        assert!((b.width() - 12.0).abs() < 1e-5);
    }

    #[test]
    fn test_wide_double_arrow_spans_requested_width() {
        let fonts = test_fonts();
        let builder = ArrowBuilder::new(&fonts, 10.0).unwrap();
        let b = builder.create_double(50.0);
        assert!((b.width() - 50.0).abs() < 1e-3);
    }
}
