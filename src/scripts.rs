// Script data for the boundary bitmap and the cleanup pass.
//
// Scripts listed in SCRIPT_RANGES do not delimit words with whitespace, so
// every code point in them is counted as a word of its own. The ranges are
// inserted into the bitmap whole-cell (see bitmap::BoundaryBitmap), which is
// deliberately coarse at cell edges.

/// Inclusive code-point intervals, one per script family. Every interval must
/// stay within `bitmap::MAX_CODE_POINT`; the builder rejects anything past it.
pub const SCRIPT_RANGES: &[(u32, u32)] = &[
    (0x0E00, 0x0E7F),   // Thai
    (0x0E80, 0x0EFF),   // Lao
    (0x0F00, 0x0FFF),   // Tibetan
    (0x1000, 0x109F),   // Myanmar
    (0x1100, 0x11FF),   // Hangul Jamo
    (0x1200, 0x137F),   // Ethiopic
    (0x1780, 0x17FF),   // Khmer
    (0x2E80, 0x2FDF),   // CJK Radicals Supplement + Kangxi Radicals
    (0x3000, 0x303F),   // CJK Symbols and Punctuation
    (0x3040, 0x309F),   // Hiragana
    (0x30A0, 0x30FF),   // Katakana
    (0x3130, 0x318F),   // Hangul Compatibility Jamo
    (0x3400, 0x4DBF),   // CJK Unified Ideographs Extension A
    (0x4E00, 0x9FFF),   // CJK Unified Ideographs
    (0xAC00, 0xD7AF),   // Hangul Syllables
    (0xF900, 0xFAFF),   // CJK Compatibility Ideographs
    (0x20000, 0x2EBEF), // CJK Unified Ideographs Extensions B-F
    (0x30000, 0x323AF), // CJK Unified Ideographs Extensions G-H
];

/// Individual word-boundary characters: whitespace, clause punctuation, and
/// script-specific separators. Inserted bit-by-bit before the script ranges.
pub const BOUNDARY_CHARS: &[char] = &[
    ' ', '\n', '\t', '\u{0B}', '*', '/', '&', ':', ';', '.', ',', '?', '=',
    '\u{0F0B}', // Tibetan uses the intersyllabic tsheg to end a syllable
    '\u{1361}', // Ethiopic wordspace marks word boundaries
    '\u{200B}', // zero-width space
];

/// Han-script ideographs. The cleanup pass appends a space after each of these
/// so adjacent ideographs stay separated for the scanner.
pub fn is_han(c: char) -> bool {
    matches!(c as u32,
        0x2E80..=0x2EFF     // CJK Radicals Supplement
        | 0x2F00..=0x2FDF   // Kangxi Radicals
        | 0x3005 | 0x3007   // iteration mark, ideographic zero
        | 0x3400..=0x4DBF
        | 0x4E00..=0x9FFF
        | 0xF900..=0xFAFF
        | 0x20000..=0x2EBEF
        | 0x30000..=0x323AF)
}

pub fn is_emoji(c: char) -> bool {
    // ASCII digits, '#' and '*' carry Emoji=Yes and are stripped with the
    // pictographs.
    matches!(c as u32,
        0x23 | 0x2A | 0x30..=0x39
        | 0x1F000..=0x1FAFF   // mahjong tiles through symbols & pictographs extended
        | 0x2600..=0x27BF     // miscellaneous symbols, dingbats
        | 0xFE0E..=0xFE0F)    // variation selectors
}

pub fn is_symbol(c: char) -> bool {
    if matches!(
        c,
        '*' | '&' | '^' | '%' | '$' | '#' | '@' | '!' | '_' | '+' | '=' | '['
            | ']' | '{' | '}' | '|' | '\\' | '<' | '>' | '~'
    ) {
        return true;
    }
    matches!(c as u32,
        0x00A2..=0x00A6     // Latin-1 currency signs
        | 0x00A8 | 0x00A9 | 0x00AC | 0x00AE..=0x00B1
        | 0x00B4 | 0x00B8 | 0x00D7 | 0x00F7
        | 0x02C2..=0x02C5   // spacing modifier symbols
        | 0x02D2..=0x02DF | 0x02E5..=0x02EB | 0x02ED | 0x02EF..=0x02FF
        | 0x0384..=0x0385   // Greek tonos marks
        | 0x20A0..=0x20BF   // currency symbols
        | 0x2100..=0x214F   // letterlike symbols
        | 0x2190..=0x2BFF   // arrows, math operators, technical, dingbats
        | 0xFFE0..=0xFFE6)  // fullwidth signs
}
