//! Box construction, composition and line breaking.
//!
//! Everything here works on one immutable data model: a [`LayoutBox`] tree
//! whose nodes carry width, height, depth and a baseline shift, all in the
//! same unit the renderer consumes. Composite boxes derive their metrics
//! from their children at build time; drawing walks the finished tree
//! against a [`mathbox_render::Graphics`] backend.

use thiserror::Error;

pub mod boxes;
pub mod delimiter;
pub mod splitter;

pub use boxes::{Alignment, BoxRef, LayoutBox, Metrics};
pub use boxes::group::{HBox, VBox};
pub use boxes::leaf::{GlyphBox, RuleBox, SegmentsBox, ShapedGlyph, StrutBox, TextBox};
pub use delimiter::{ArrowBuilder, ArrowDirection, DelimiterFactory};
pub use splitter::BoxSplitter;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("segment list has {0} coordinates, expected a multiple of 4")]
    MalformedSegments(usize),

    #[error("unknown symbol name: {0}")]
    UnknownSymbol(String),

    #[error(transparent)]
    Font(#[from] mathbox_fonts::FontError),
}
