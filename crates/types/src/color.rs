use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 255 }
    }
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 255 }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(format!("Color must start with #, got: {}", s));
        }
        let hex = &s[1..];

        let component = |part: &str| -> Result<u8, String> {
            let expanded = if part.len() == 1 { part.repeat(2) } else { part.to_string() };
            u8::from_str_radix(&expanded, 16).map_err(|e| format!("Invalid color component: {}", e))
        };

        match hex.len() {
            3 => Ok(Color::rgb(
                component(&hex[0..1])?,
                component(&hex[1..2])?,
                component(&hex[2..3])?,
            )),
            6 => Ok(Color::rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8, #[serde(default = "opaque")] a: u8 },
        }

        fn opaque() -> u8 {
            255
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}
