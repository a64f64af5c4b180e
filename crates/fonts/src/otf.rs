//! OpenType-backed font metrics.
//!
//! Font bytes are held in a reference-counted buffer and a lightweight
//! `ttf_parser::Face` view is re-created per query; parsing the header is
//! cheap and avoids a self-referential struct. Variant ladders and
//! extensible assemblies come from the MATH table.

use crate::backend::{Extension, FontBackend, GlyphBounds};
use crate::FontError;
use mathbox_types::GlyphId;
use std::sync::Arc;

pub struct OtfFont {
    path: String,
    data: Arc<Vec<u8>>,
}

impl std::fmt::Debug for OtfFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OtfFont")
            .field("path", &self.path)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl OtfFont {
    pub fn load(path: &str) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|e| FontError::LoadFailed {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_bytes(path, data)
    }

    pub fn from_bytes(path: &str, data: Vec<u8>) -> Result<Self, FontError> {
        // Validate up front so later per-query parses cannot fail.
        ttf_parser::Face::parse(&data, 0)
            .map_err(|e| FontError::InvalidData(format!("{}: {}", path, e)))?;
        Ok(Self {
            path: path.to_string(),
            data: Arc::new(data),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn as_face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }
}

impl FontBackend for OtfFont {
    fn glyph_index(&self, code: char) -> Option<GlyphId> {
        let face = self.as_face()?;
        face.glyph_index(code).map(|g| GlyphId(g.0))
    }

    fn glyph_bounds(&self, glyph: GlyphId) -> GlyphBounds {
        let Some(face) = self.as_face() else {
            return GlyphBounds::default();
        };
        let gid = ttf_parser::GlyphId(glyph.0);
        let upem = face.units_per_em() as f32;
        let width = face.glyph_hor_advance(gid).unwrap_or(0) as f32 / upem;
        let (height, depth) = match face.glyph_bounding_box(gid) {
            Some(bbox) => (
                (bbox.y_max.max(0)) as f32 / upem,
                (-bbox.y_min).max(0) as f32 / upem,
            ),
            None => (0.0, 0.0),
        };
        let italic = face
            .tables()
            .math
            .and_then(|math| math.glyph_info)
            .and_then(|info| info.italic_corrections)
            .and_then(|corrections| corrections.get(gid))
            .map_or(0.0, |v| v.value as f32 / upem);
        GlyphBounds { width, height, depth, italic }
    }

    fn larger_variant(&self, base: GlyphId, current: GlyphId) -> Option<GlyphId> {
        let face = self.as_face()?;
        let construction = face
            .tables()
            .math?
            .variants?
            .vertical_constructions
            .get(ttf_parser::GlyphId(base.0))?;
        // The construction lists the ladder for the base glyph, smallest
        // first; the base itself may or may not appear as the first entry.
        let mut previous = base;
        for record in construction.variants {
            let variant = GlyphId(record.variant_glyph.0);
            if previous == current && variant != current {
                return Some(variant);
            }
            previous = variant;
        }
        None
    }

    fn extension(&self, base: GlyphId, _current: GlyphId) -> Option<Extension> {
        let face = self.as_face()?;
        let assembly = face
            .tables()
            .math?
            .variants?
            .vertical_constructions
            .get(ttf_parser::GlyphId(base.0))?
            .assembly?;

        // Vertical assemblies run bottom to top; extender-flagged parts are
        // the repeatable filler, the fixed parts are bottom/(middle)/top.
        let mut repeat = None;
        let mut fixed = Vec::new();
        for part in assembly.parts {
            if part.part_flags.0 & 0x0001 != 0 {
                repeat.get_or_insert(GlyphId(part.glyph_id.0));
            } else {
                fixed.push(GlyphId(part.glyph_id.0));
            }
        }
        let repeat = repeat?;
        let (top, middle, bottom) = match fixed.as_slice() {
            [] => (None, None, None),
            [b] => (None, None, Some(*b)),
            [b, t] => (Some(*t), None, Some(*b)),
            [b, m, t, ..] => (Some(*t), Some(*m), Some(*b)),
        };
        Some(Extension { top, middle, bottom, repeat })
    }
}
