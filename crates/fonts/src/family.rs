use crate::style::FontStyle;
use mathbox_types::FontId;
use std::collections::HashMap;

/// Maps style tags to concrete fonts for one main-font version.
#[derive(Debug, Default, Clone)]
pub struct FontFamily {
    styles: HashMap<FontStyle, FontId>,
}

impl FontFamily {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, style: FontStyle, font: FontId) {
        self.styles.insert(style, font);
    }

    /// The font registered for `style`, falling back to the roman member
    /// when the exact style is missing.
    pub fn get(&self, style: FontStyle) -> Option<FontId> {
        self.styles
            .get(&style)
            .or_else(|| self.styles.get(&FontStyle::Rm))
            .copied()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
