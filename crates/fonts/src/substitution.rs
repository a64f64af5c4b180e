//! Math-alphanumeric substitution.
//!
//! In math mode a styled character maps to a different code point in the
//! Mathematical Alphanumeric Symbols block (U+1D400..U+1D7FF). Each style
//! carries five base points — digits, latin lower/upper, greek lower/upper —
//! and the target is base + offset within the class. Code points that
//! predate the block live in Letterlike Symbols and their block slots are
//! reserved; those are patched through an exception table.

use crate::style::FontStyle;

struct Bases {
    digit: u32,
    latin_small: u32,
    latin_capital: u32,
    greek_small: u32,
    greek_capital: u32,
}

const UPRIGHT: Bases = Bases {
    digit: 0x0030,
    latin_small: 0x0061,
    latin_capital: 0x0041,
    greek_small: 0x03B1,
    greek_capital: 0x0391,
};

fn bases_of(style: FontStyle) -> Bases {
    match style {
        // Math default: italic letters, upright digits.
        FontStyle::None | FontStyle::It => Bases {
            digit: 0x0030,
            latin_small: 0x1D44E,
            latin_capital: 0x1D434,
            greek_small: 0x1D6FC,
            greek_capital: 0x1D6E2,
        },
        FontStyle::Rm => UPRIGHT,
        FontStyle::Bf => Bases {
            digit: 0x1D7CE,
            latin_small: 0x1D41A,
            latin_capital: 0x1D400,
            greek_small: 0x1D6C2,
            greek_capital: 0x1D6A8,
        },
        FontStyle::BfIt => Bases {
            digit: 0x1D7CE,
            latin_small: 0x1D482,
            latin_capital: 0x1D468,
            greek_small: 0x1D736,
            greek_capital: 0x1D71C,
        },
        FontStyle::Cal => Bases {
            latin_small: 0x1D4B6,
            latin_capital: 0x1D49C,
            ..UPRIGHT
        },
        FontStyle::BfCal => Bases {
            digit: 0x1D7CE,
            latin_small: 0x1D4EA,
            latin_capital: 0x1D4D0,
            ..UPRIGHT
        },
        FontStyle::Frak => Bases {
            latin_small: 0x1D51E,
            latin_capital: 0x1D504,
            ..UPRIGHT
        },
        FontStyle::BfFrak => Bases {
            digit: 0x1D7CE,
            latin_small: 0x1D586,
            latin_capital: 0x1D56C,
            ..UPRIGHT
        },
        FontStyle::Bb => Bases {
            digit: 0x1D7D8,
            latin_small: 0x1D552,
            latin_capital: 0x1D538,
            ..UPRIGHT
        },
        FontStyle::Sf => Bases {
            digit: 0x1D7E2,
            latin_small: 0x1D5BA,
            latin_capital: 0x1D5A0,
            ..UPRIGHT
        },
        FontStyle::SfBf => Bases {
            digit: 0x1D7EC,
            latin_small: 0x1D5EE,
            latin_capital: 0x1D5D4,
            greek_small: 0x1D770,
            greek_capital: 0x1D756,
        },
        FontStyle::SfIt => Bases {
            digit: 0x1D7E2,
            latin_small: 0x1D622,
            latin_capital: 0x1D608,
            ..UPRIGHT
        },
        FontStyle::SfBfIt => Bases {
            digit: 0x1D7EC,
            latin_small: 0x1D656,
            latin_capital: 0x1D63C,
            greek_small: 0x1D7AA,
            greek_capital: 0x1D790,
        },
        FontStyle::Tt => Bases {
            digit: 0x1D7F6,
            latin_small: 0x1D68A,
            latin_capital: 0x1D670,
            ..UPRIGHT
        },
    }
}

/// Reserved slots in the alphanumeric block and the Letterlike Symbols
/// code points that hold the actual glyphs.
const EXCEPTIONS: &[(u32, u32)] = &[
    // italic small h -> Planck constant
    (0x1D455, 0x210E),
    // script capitals
    (0x1D49D, 0x212C), // B
    (0x1D4A0, 0x2130), // E
    (0x1D4A1, 0x2131), // F
    (0x1D4A3, 0x210B), // H
    (0x1D4A4, 0x2110), // I
    (0x1D4A7, 0x2112), // L
    (0x1D4A8, 0x2133), // M
    (0x1D4AD, 0x211B), // R
    // script smalls
    (0x1D4BA, 0x212F), // e
    (0x1D4BC, 0x210A), // g
    (0x1D4C4, 0x2134), // o
    // fraktur capitals
    (0x1D506, 0x212D), // C
    (0x1D50B, 0x210C), // H
    (0x1D50C, 0x2111), // I
    (0x1D515, 0x211C), // R
    (0x1D51D, 0x2128), // Z
    // double-struck capitals
    (0x1D53A, 0x2102), // C
    (0x1D53F, 0x210D), // H
    (0x1D545, 0x2115), // N
    (0x1D547, 0x2119), // P
    (0x1D548, 0x211A), // Q
    (0x1D549, 0x211D), // R
    (0x1D551, 0x2124), // Z
];

/// Map `code` under `style` to the code point actually carrying its glyph.
/// Characters outside the five substitution classes pass through unchanged.
pub fn map(style: FontStyle, code: char) -> char {
    let c = code as u32;
    let bases = bases_of(style);
    let mapped = match c {
        0x0030..=0x0039 => bases.digit + (c - 0x0030),
        0x0061..=0x007A => bases.latin_small + (c - 0x0061),
        0x0041..=0x005A => bases.latin_capital + (c - 0x0041),
        0x03B1..=0x03C9 => bases.greek_small + (c - 0x03B1),
        0x0391..=0x03A9 => bases.greek_capital + (c - 0x0391),
        _ => return code,
    };
    let patched = EXCEPTIONS
        .iter()
        .find(|(reserved, _)| *reserved == mapped)
        .map_or(mapped, |(_, actual)| *actual);
    char::from_u32(patched).unwrap_or(code)
}
