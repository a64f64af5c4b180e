use thiserror::Error;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("{kind} font '{name}' is not registered")]
    NotRegistered { kind: &'static str, name: String },
    #[error("no math font has been selected")]
    NoMathFont,
    #[error("no font is registered to resolve against")]
    NoFontAvailable,
    #[error("failed to load font '{path}': {message}")]
    LoadFailed { path: String, message: String },
    #[error("invalid font data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub mod backend;
pub mod context;
pub mod family;
pub mod otf;
pub mod style;
pub mod substitution;
pub mod symbols;

pub use backend::{Extension, FontBackend, GlyphBounds, SyntheticFont};
pub use context::{ExtensionGlyphs, FontContext, FontSpec, GlyphDescriptor};
pub use family::FontFamily;
pub use otf::OtfFont;
pub use style::FontStyle;
