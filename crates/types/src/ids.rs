//! Newtype wrappers for font and glyph identifiers.
//!
//! Glyph boxes store these small integers instead of registry handles, which
//! decouples a finished box tree from the font registry that produced it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a loaded font, assigned in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontId(pub u32);

impl FontId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font#{}", self.0)
    }
}

/// Glyph index within one font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlyphId(pub u16);

impl fmt::Display for GlyphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "glyph#{}", self.0)
    }
}
