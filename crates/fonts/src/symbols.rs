//! Symbol-name table for delimiters and stretchable operators.
//!
//! Names follow the classic command vocabulary; only the symbols the box
//! engine stretches or tiles are listed, everything else reaches the engine
//! as a plain code point.

/// Code point for a symbol name, or `None` for an unknown name.
pub fn code_of(name: &str) -> Option<char> {
    let code = match name {
        "parenleft" | "lparen" => '(',
        "parenright" | "rparen" => ')',
        "bracketleft" | "lbrack" => '[',
        "bracketright" | "rbrack" => ']',
        "lbrace" => '{',
        "rbrace" => '}',
        "bar" | "vert" => '|',
        "Vert" => '\u{2016}',
        "langle" => '\u{27E8}',
        "rangle" => '\u{27E9}',
        "lfloor" => '\u{230A}',
        "rfloor" => '\u{230B}',
        "lceil" => '\u{2308}',
        "rceil" => '\u{2309}',
        "slash" => '/',
        "backslash" => '\\',
        "sqrt" => '\u{221A}',
        "minus" => '\u{2212}',
        "leftarrow" => '\u{2190}',
        "rightarrow" => '\u{2192}',
        "uparrow" => '\u{2191}',
        "downarrow" => '\u{2193}',
        "leftrightarrow" => '\u{2194}',
        "sum" => '\u{2211}',
        "prod" => '\u{220F}',
        "int" => '\u{222B}',
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_symbols() {
        assert_eq!(code_of("parenleft"), Some('('));
        assert_eq!(code_of("minus"), Some('\u{2212}'));
        assert_eq!(code_of("Vert"), Some('\u{2016}'));
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(code_of("notasymbol"), None);
    }
}
