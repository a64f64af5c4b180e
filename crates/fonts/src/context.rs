//! The font registry and character resolution.
//!
//! A `FontContext` is an explicit object owned by the caller and threaded
//! through every resolution; registration and selection happen during a
//! single-threaded setup phase, after which the context is read-only.

use crate::backend::FontBackend;
use crate::family::FontFamily;
use crate::otf::OtfFont;
use crate::style::FontStyle;
use crate::{substitution, FontError};
use mathbox_types::{FontId, GlyphId};
use std::collections::HashMap;
use std::sync::Arc;

/// One font file to register: a style tag (main fonts) or registry name
/// (math fonts), plus the file path.
#[derive(Debug, Clone)]
pub struct FontSpec {
    pub name: String,
    pub path: String,
}

impl FontSpec {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self { name: name.into(), path: path.into() }
    }
}

/// A character resolved against a concrete font: both the input code and
/// the substituted code point, the glyph, and its metrics in em units.
#[derive(Debug, Clone, Copy)]
pub struct GlyphDescriptor {
    pub code: char,
    pub mapped: char,
    pub font: FontId,
    pub glyph: GlyphId,
    /// The glyph the character originally resolved to; variant-ladder and
    /// extension lookups are keyed under it.
    pub base_glyph: GlyphId,
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub italic: f32,
}

impl GlyphDescriptor {
    pub fn extent(&self) -> f32 {
        self.height + self.depth
    }
}

/// Extension decomposition with every part resolved to a full descriptor.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionGlyphs {
    pub top: Option<GlyphDescriptor>,
    pub middle: Option<GlyphDescriptor>,
    pub bottom: Option<GlyphDescriptor>,
    pub repeat: GlyphDescriptor,
}

#[derive(Debug)]
struct RegisteredFont {
    path: String,
    backend: Arc<dyn FontBackend>,
}

#[derive(Debug, Default)]
pub struct FontContext {
    fonts: Vec<RegisteredFont>,
    main_families: HashMap<String, FontFamily>,
    math_fonts: HashMap<String, FontId>,
    selected_main: Option<String>,
    selected_math: Option<FontId>,
}

impl FontContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, path: &str, backend: Arc<dyn FontBackend>) -> FontId {
        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(RegisteredFont {
            path: path.to_string(),
            backend,
        });
        id
    }

    /// Register a main font under a family version. Never deduplicated:
    /// re-adding the same file creates a new id.
    pub fn register_main_font(
        &mut self,
        version: &str,
        style: FontStyle,
        path: &str,
        backend: Arc<dyn FontBackend>,
    ) -> FontId {
        let id = self.register(path, backend);
        self.main_families
            .entry(version.to_string())
            .or_default()
            .add(style, id);
        log::debug!("registered main font {} ({version}/{style:?}) from {path}", id);
        id
    }

    /// Register a math font under a name. Idempotent by source path:
    /// re-adding a file that is already loaded is a no-op.
    pub fn register_math_font(
        &mut self,
        name: &str,
        path: &str,
        backend: Arc<dyn FontBackend>,
    ) -> FontId {
        if let Some(existing) = self
            .fonts
            .iter()
            .position(|f| f.path == path)
            .map(|i| FontId(i as u32))
        {
            log::debug!("math font {path} already loaded as {existing}");
            return existing;
        }
        let id = self.register(path, backend);
        self.math_fonts.insert(name.to_string(), id);
        log::debug!("registered math font {} ({name}) from {path}", id);
        id
    }

    /// Load and register one main font file.
    pub fn add_main_font(&mut self, version: &str, spec: &FontSpec) -> Result<FontId, FontError> {
        let style = FontStyle::of_text(&spec.name).unwrap_or(FontStyle::None);
        let font = OtfFont::load(&spec.path)?;
        Ok(self.register_main_font(version, style, &spec.path, Arc::new(font)))
    }

    pub fn add_main_fonts(&mut self, version: &str, specs: &[FontSpec]) -> Result<(), FontError> {
        for spec in specs {
            self.add_main_font(version, spec)?;
        }
        Ok(())
    }

    /// Load and register one math font file.
    pub fn add_math_font(&mut self, spec: &FontSpec) -> Result<FontId, FontError> {
        if let Some(existing) = self
            .fonts
            .iter()
            .position(|f| f.path == spec.path)
            .map(|i| FontId(i as u32))
        {
            return Ok(existing);
        }
        let font = OtfFont::load(&spec.path)?;
        Ok(self.register_math_font(&spec.name, &spec.path, Arc::new(font)))
    }

    pub fn has_math_font(&self) -> bool {
        !self.math_fonts.is_empty()
    }

    /// Select the main family used for text-mode resolution. An unknown
    /// name is a configuration error and leaves the selection unchanged.
    pub fn select_main_font(&mut self, name: &str) -> Result<(), FontError> {
        if !self.main_families.contains_key(name) {
            return Err(FontError::NotRegistered {
                kind: "main",
                name: name.to_string(),
            });
        }
        self.selected_main = Some(name.to_string());
        Ok(())
    }

    /// Select the math font used for math-mode resolution. An unknown name
    /// is a configuration error and leaves the selection unchanged.
    pub fn select_math_font(&mut self, name: &str) -> Result<(), FontError> {
        let id = self
            .math_fonts
            .get(name)
            .copied()
            .ok_or_else(|| FontError::NotRegistered {
                kind: "math",
                name: name.to_string(),
            })?;
        self.selected_math = Some(id);
        Ok(())
    }

    pub fn font(&self, id: FontId) -> Option<&Arc<dyn FontBackend>> {
        self.fonts.get(id.index()).map(|f| &f.backend)
    }

    /// Resolve a character under a style name (`"bf"` in text mode,
    /// `"mathbf"` in math mode).
    pub fn resolve_named(
        &self,
        code: char,
        style_name: &str,
        math_mode: bool,
    ) -> Result<GlyphDescriptor, FontError> {
        let style = if math_mode {
            FontStyle::of_math(style_name)
        } else {
            FontStyle::of_text(style_name)
        }
        .unwrap_or(FontStyle::None);
        self.resolve_char(code, style, math_mode)
    }

    /// Resolve a character to a glyph descriptor.
    ///
    /// Math mode substitutes the code point through the styled alphabet
    /// tables and resolves in the selected math font. Text mode resolves in
    /// the selected main family, falling back style → roman → math font →
    /// any registered font, so resolution succeeds whenever anything is
    /// registered.
    pub fn resolve_char(
        &self,
        code: char,
        style: FontStyle,
        math_mode: bool,
    ) -> Result<GlyphDescriptor, FontError> {
        if math_mode {
            let font = self.selected_math.ok_or(FontError::NoMathFont)?;
            let mapped = substitution::map(style, code);
            log::debug!("resolve {code:?} ({style:?}, math) -> {mapped:?} in {font}");
            return Ok(self.describe(font, code, mapped));
        }

        let family = self
            .selected_main
            .as_ref()
            .and_then(|name| self.main_families.get(name));
        let font = family
            .and_then(|f| f.get(style))
            .or(self.selected_math)
            .or_else(|| {
                if self.fonts.is_empty() {
                    None
                } else {
                    Some(FontId(0))
                }
            })
            .ok_or(FontError::NoFontAvailable)?;
        log::debug!("resolve {code:?} ({style:?}, text) in {font}");
        Ok(self.describe(font, code, code))
    }

    fn describe(&self, font: FontId, code: char, mapped: char) -> GlyphDescriptor {
        let backend = &self.fonts[font.index()].backend;
        let glyph = backend
            .glyph_index(mapped)
            .or_else(|| backend.glyph_index(code))
            .unwrap_or_else(|| {
                log::warn!("{font} has no glyph for {mapped:?}; using .notdef");
                GlyphId(0)
            });
        let bounds = backend.glyph_bounds(glyph);
        GlyphDescriptor {
            code,
            mapped,
            font,
            glyph,
            base_glyph: glyph,
            width: bounds.width,
            height: bounds.height,
            depth: bounds.depth,
            italic: bounds.italic,
        }
    }

    /// The next larger pre-built variant of a resolved glyph, with metrics.
    pub fn larger_variant(&self, desc: &GlyphDescriptor) -> Option<GlyphDescriptor> {
        let backend = self.font(desc.font)?;
        let next = backend.larger_variant(desc.base_glyph, desc.glyph)?;
        let bounds = backend.glyph_bounds(next);
        Some(GlyphDescriptor {
            glyph: next,
            width: bounds.width,
            height: bounds.height,
            depth: bounds.depth,
            italic: bounds.italic,
            ..*desc
        })
    }

    /// The extensible decomposition of a resolved glyph, if it declares one.
    pub fn extension(&self, desc: &GlyphDescriptor) -> Option<ExtensionGlyphs> {
        let backend = self.font(desc.font)?;
        let ext = backend.extension(desc.base_glyph, desc.glyph)?;
        let part = |glyph: GlyphId| {
            let bounds = backend.glyph_bounds(glyph);
            GlyphDescriptor {
                glyph,
                base_glyph: glyph,
                width: bounds.width,
                height: bounds.height,
                depth: bounds.depth,
                italic: bounds.italic,
                ..*desc
            }
        };
        Some(ExtensionGlyphs {
            top: ext.top.map(part),
            middle: ext.middle.map(part),
            bottom: ext.bottom.map(part),
            repeat: part(ext.repeat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{GlyphBounds, SyntheticFont};

    fn math_backend() -> Arc<dyn FontBackend> {
        Arc::new(
            SyntheticFont::new()
                .with_glyph('A', GlyphId(1), GlyphBounds::new(0.7, 0.68, 0.0))
                .with_glyph('\u{1D400}', GlyphId(2), GlyphBounds::new(0.75, 0.69, 0.0)),
        )
    }

    fn context_with_math() -> FontContext {
        let mut ctx = FontContext::new();
        ctx.register_math_font("asana", "asana.otf", math_backend());
        ctx.select_math_font("asana").unwrap();
        ctx
    }

    #[test]
    fn test_math_mode_substitutes_but_keeps_input_code() {
        let ctx = context_with_math();
        let desc = ctx.resolve_char('A', FontStyle::Bf, true).unwrap();
        assert_eq!(desc.code, 'A');
        assert_eq!(desc.mapped, '\u{1D400}');
        assert_eq!(desc.glyph, GlyphId(2));
    }

    #[test]
    fn test_math_mode_without_selection_fails() {
        let ctx = FontContext::new();
        assert!(matches!(
            ctx.resolve_char('A', FontStyle::None, true),
            Err(FontError::NoMathFont)
        ));
    }

    #[test]
    fn test_select_unknown_math_font_keeps_selection() {
        let mut ctx = context_with_math();
        let err = ctx.select_math_font("nope").unwrap_err();
        assert!(matches!(err, FontError::NotRegistered { kind: "math", .. }));
        // prior selection still resolves
        assert!(ctx.resolve_char('A', FontStyle::None, true).is_ok());
    }

    #[test]
    fn test_select_unknown_main_font_keeps_selection() {
        let mut ctx = FontContext::new();
        ctx.register_main_font("v1", FontStyle::Rm, "roman.otf", math_backend());
        ctx.select_main_font("v1").unwrap();
        assert!(ctx.select_main_font("nope").is_err());
        let desc = ctx.resolve_char('A', FontStyle::Rm, false).unwrap();
        assert_eq!(desc.glyph, GlyphId(1));
    }

    #[test]
    fn test_text_mode_falls_back_to_math_font() {
        let ctx = context_with_math();
        let desc = ctx.resolve_char('A', FontStyle::Bf, false).unwrap();
        // no main family registered; math font answers with the raw code
        assert_eq!(desc.mapped, 'A');
        assert_eq!(desc.glyph, GlyphId(1));
    }

    #[test]
    fn test_text_mode_style_and_roman_fallback() {
        let mut ctx = FontContext::new();
        let roman: Arc<dyn FontBackend> = Arc::new(
            SyntheticFont::new().with_glyph('A', GlyphId(7), GlyphBounds::new(0.6, 0.66, 0.0)),
        );
        let bold: Arc<dyn FontBackend> = Arc::new(
            SyntheticFont::new().with_glyph('A', GlyphId(9), GlyphBounds::new(0.66, 0.66, 0.0)),
        );
        ctx.register_main_font("v1", FontStyle::Rm, "roman.otf", roman);
        ctx.register_main_font("v1", FontStyle::Bf, "bold.otf", bold);
        ctx.select_main_font("v1").unwrap();

        let exact = ctx.resolve_char('A', FontStyle::Bf, false).unwrap();
        assert_eq!(exact.glyph, GlyphId(9));

        // italic is not registered: roman answers
        let fallback = ctx.resolve_char('A', FontStyle::It, false).unwrap();
        assert_eq!(fallback.glyph, GlyphId(7));
    }

    #[test]
    fn test_math_registration_idempotent_by_path() {
        let mut ctx = FontContext::new();
        let first = ctx.register_math_font("asana", "asana.otf", math_backend());
        let again = ctx.register_math_font("asana", "asana.otf", math_backend());
        assert_eq!(first, again);

        // main fonts are never deduplicated
        let a = ctx.register_main_font("v1", FontStyle::Rm, "roman.otf", math_backend());
        let b = ctx.register_main_font("v1", FontStyle::Rm, "roman.otf", math_backend());
        assert_ne!(a, b);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut ctx = FontContext::new();
        let a = ctx.register_math_font("a", "a.otf", math_backend());
        let b = ctx.register_math_font("b", "b.otf", math_backend());
        assert_eq!(a, FontId(0));
        assert_eq!(b, FontId(1));
    }
}
