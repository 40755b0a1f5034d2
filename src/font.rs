//! The built-in 5x8 bitmap font.
//!
//! Glyphs are column-major: each glyph is 5 bytes, one per column, and bit `j` of a column byte
//! is pixel row `j` of the glyph cell. The table covers printable ASCII (0x20-0x7F) followed by
//! the CP1251 Cyrillic range (0xC0-0xFF).

/// Width of a glyph cell in pixels.
pub const GLYPH_WIDTH: u8 = 5;
/// Height of a glyph cell in pixels.
pub const GLYPH_HEIGHT: u8 = 8;

/// Table index of the glyph substituted for characters with no table entry.
pub const FALLBACK_GLYPH: usize = 85;

/// Map a character code to its glyph table index. Printable ASCII maps to the first 96 entries,
/// CP1251 Cyrillic (0xC0 and up) to the last 64, and everything else to the fallback glyph --
/// unmappable characters render as a replacement glyph, never an error.
pub fn glyph_index(code: u8) -> usize {
    match code {
        0x20..=0x7F => code as usize - 32,
        0xC0..=0xFF => code as usize - 96,
        _ => FALLBACK_GLYPH,
    }
}

#[cfg_attr(rustfmt, rustfmt_skip)]
pub const GLYPHS: [[u8; 5]; 160] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x10, 0x08, 0x08, 0x10, 0x08], // '~'
    [0x7F, 0x41, 0x41, 0x41, 0x7F], // DEL
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // cyrillic A
    [0x7F, 0x49, 0x49, 0x49, 0x31], // Be
    [0x7F, 0x49, 0x49, 0x49, 0x36], // Ve
    [0x7F, 0x01, 0x01, 0x01, 0x01], // Ghe
    [0x60, 0x3E, 0x21, 0x3F, 0x60], // De
    [0x7F, 0x49, 0x49, 0x49, 0x41], // Ie
    [0x77, 0x08, 0x7F, 0x08, 0x77], // Zhe
    [0x22, 0x41, 0x49, 0x49, 0x36], // Ze
    [0x7F, 0x10, 0x08, 0x04, 0x7F], // I
    [0x7E, 0x10, 0x09, 0x04, 0x7E], // Short I
    [0x7F, 0x08, 0x14, 0x22, 0x41], // Ka
    [0x40, 0x3E, 0x01, 0x01, 0x7F], // El
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // Em
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // En
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x01, 0x01, 0x01, 0x7F], // Pe
    [0x7F, 0x09, 0x09, 0x09, 0x06], // Er
    [0x3E, 0x41, 0x41, 0x41, 0x22], // Es
    [0x01, 0x01, 0x7F, 0x01, 0x01], // Te
    [0x07, 0x48, 0x48, 0x48, 0x3F], // U
    [0x0E, 0x11, 0x7F, 0x11, 0x0E], // Ef
    [0x63, 0x14, 0x08, 0x14, 0x63], // Ha
    [0x3F, 0x20, 0x20, 0x3F, 0x60], // Tse
    [0x07, 0x08, 0x08, 0x08, 0x7F], // Che
    [0x7F, 0x40, 0x7F, 0x40, 0x7F], // Sha
    [0x3F, 0x20, 0x3F, 0x20, 0x7F], // Shcha
    [0x01, 0x7F, 0x48, 0x48, 0x30], // Hard sign
    [0x7F, 0x48, 0x30, 0x00, 0x7F], // Yeru
    [0x7F, 0x48, 0x48, 0x48, 0x30], // Soft sign
    [0x22, 0x41, 0x49, 0x49, 0x3E], // E
    [0x7F, 0x08, 0x3E, 0x41, 0x3E], // Yu
    [0x46, 0x29, 0x19, 0x09, 0x7F], // Ya
    [0x20, 0x54, 0x54, 0x54, 0x78], // cyrillic a
    [0x3C, 0x4A, 0x4A, 0x49, 0x31], // be
    [0x7C, 0x54, 0x54, 0x28, 0x00], // ve
    [0x7C, 0x04, 0x04, 0x04, 0x0C], // ghe
    [0x60, 0x38, 0x24, 0x3C, 0x60], // de
    [0x38, 0x54, 0x54, 0x54, 0x18], // ie
    [0x6C, 0x10, 0x7C, 0x10, 0x6C], // zhe
    [0x28, 0x44, 0x54, 0x54, 0x28], // ze
    [0x7C, 0x20, 0x10, 0x08, 0x7C], // i
    [0x7C, 0x20, 0x11, 0x08, 0x7C], // short i
    [0x7C, 0x10, 0x28, 0x44, 0x00], // ka
    [0x40, 0x38, 0x04, 0x04, 0x7C], // el
    [0x7C, 0x08, 0x10, 0x08, 0x7C], // em
    [0x7C, 0x10, 0x10, 0x10, 0x7C], // en
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x04, 0x04, 0x04, 0x7C], // pe
    [0x7C, 0x14, 0x14, 0x14, 0x08], // er
    [0x38, 0x44, 0x44, 0x44, 0x28], // es
    [0x04, 0x04, 0x7C, 0x04, 0x04], // te
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // u
    [0x30, 0x48, 0xFC, 0x48, 0x30], // ef
    [0x44, 0x28, 0x10, 0x28, 0x44], // ha
    [0x3C, 0x20, 0x20, 0x3C, 0x60], // tse
    [0x0C, 0x10, 0x10, 0x10, 0x7C], // che
    [0x7C, 0x40, 0x7C, 0x40, 0x7C], // sha
    [0x3C, 0x20, 0x3C, 0x20, 0x7C], // shcha
    [0x04, 0x7C, 0x50, 0x50, 0x20], // hard sign
    [0x7C, 0x50, 0x50, 0x20, 0x7C], // yeru
    [0x7C, 0x50, 0x50, 0x50, 0x20], // soft sign
    [0x28, 0x44, 0x54, 0x54, 0x38], // e
    [0x7C, 0x10, 0x38, 0x44, 0x38], // yu
    [0x48, 0x34, 0x14, 0x14, 0x7C], // ya
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_to_low_table() {
        assert_eq!(glyph_index(0x20), 0);
        assert_eq!(glyph_index(0x41), 33);
        assert_eq!(glyph_index(0x7F), 95);
    }

    #[test]
    fn cyrillic_maps_to_high_table() {
        assert_eq!(glyph_index(0xC0), 96);
        assert_eq!(glyph_index(0xC1), 0xC1 - 96);
        assert_eq!(glyph_index(0xFF), 159);
    }

    #[test]
    fn unmappable_codes_fall_back() {
        assert_eq!(glyph_index(0x00), FALLBACK_GLYPH);
        assert_eq!(glyph_index(0x1F), FALLBACK_GLYPH);
        assert_eq!(glyph_index(0x80), FALLBACK_GLYPH);
        assert_eq!(glyph_index(0xBF), FALLBACK_GLYPH);
    }

    #[test]
    fn every_mappable_code_has_a_glyph() {
        for code in 0..=255u8 {
            assert!(glyph_index(code) < GLYPHS.len());
        }
    }
}
