/// Named font-family variant a character is drawn in.
///
/// Compounds combine weight and shape the way the original command set does
/// (`\mathbfit` and friends); they are closed variants rather than flags so
/// family maps and substitution tables stay plain lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    /// No explicit style; math mode renders letters in the math default
    /// (italic letters, upright digits), text mode falls back to roman.
    #[default]
    None,
    Rm,
    Bf,
    It,
    Cal,
    Frak,
    Bb,
    Sf,
    Tt,
    BfIt,
    BfCal,
    BfFrak,
    SfBf,
    SfIt,
    SfBfIt,
}

impl FontStyle {
    /// Style tag for a text-mode family name (the `\bf`-style short names).
    pub fn of_text(name: &str) -> Option<FontStyle> {
        let style = match name {
            "" | "rm" => FontStyle::Rm,
            "bf" => FontStyle::Bf,
            "it" => FontStyle::It,
            "sf" => FontStyle::Sf,
            "tt" => FontStyle::Tt,
            "cal" => FontStyle::Cal,
            "frak" => FontStyle::Frak,
            "bfit" => FontStyle::BfIt,
            _ => return None,
        };
        Some(style)
    }

    /// Style tag for a math-mode command name (`mathbf` and friends).
    pub fn of_math(name: &str) -> Option<FontStyle> {
        let style = match name {
            "" | "mathnormal" => FontStyle::None,
            "mathrm" => FontStyle::Rm,
            "mathbf" => FontStyle::Bf,
            "mathit" => FontStyle::It,
            "mathcal" | "mathscr" => FontStyle::Cal,
            "mathfrak" => FontStyle::Frak,
            "mathbb" => FontStyle::Bb,
            "mathsf" => FontStyle::Sf,
            "mathtt" => FontStyle::Tt,
            "mathbfit" => FontStyle::BfIt,
            "mathbfcal" => FontStyle::BfCal,
            "mathbffrak" => FontStyle::BfFrak,
            "mathsfbf" | "mathbfsf" => FontStyle::SfBf,
            "mathsfit" => FontStyle::SfIt,
            "mathsfbfit" | "mathbfsfit" => FontStyle::SfBfIt,
            _ => return None,
        };
        Some(style)
    }
}
