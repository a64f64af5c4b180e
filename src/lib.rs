//! Box-layout engine for mathematical notation.
//!
//! The engine is split into focused crates, re-exported here as modules:
//!
//! - [`types`]: shared geometry, colors and identifiers.
//! - [`render`]: the [`Graphics`](render::Graphics) backend trait, scoped
//!   state guards and a recording backend for tests.
//! - [`fonts`]: font registration and character-to-glyph resolution,
//!   including math-alphabet substitution and OpenType MATH metrics.
//! - [`layout`]: the box tree itself, delimiter and arrow construction,
//!   and line breaking.
//!
//! A typical flow registers fonts in a [`FontContext`], resolves
//! characters into [`GlyphBox`]es, composes rows and stacks, and finally
//! draws the tree against a [`Graphics`](render::Graphics) backend:
//!
//! ```no_run
//! use mathbox::{BoxRef, DelimiterFactory, FontContext, FontSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut fonts = FontContext::new();
//! fonts.add_math_font(&FontSpec::new("asana", "fonts/Asana-Math.otf"))?;
//! fonts.select_math_font("asana")?;
//!
//! let factory = DelimiterFactory::new(&fonts, 12.0);
//! let paren: BoxRef = factory.create("parenleft", 30.0)?;
//! # Ok(())
//! # }
//! ```

pub use mathbox_fonts as fonts;
pub use mathbox_layout as layout;
pub use mathbox_render as render;
pub use mathbox_types as types;

pub use fonts::{FontContext, FontError, FontSpec, FontStyle, GlyphDescriptor};
pub use layout::{
    Alignment, ArrowBuilder, BoxRef, BoxSplitter, DelimiterFactory, GlyphBox, HBox, LayoutBox,
    LayoutError, Metrics, RuleBox, StrutBox, VBox,
};
pub use render::Graphics;
pub use types::{Color, FontId, GlyphId, Point};
