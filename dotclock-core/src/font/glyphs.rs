//! Font tables
//!
//! The text font is laid out as the Windows-1251 code page starting at
//! the space character: one fixed-size slot per code, holding a width byte
//! followed by up to six column bytes. In a column byte bit `y` is row `y`.
//! Slots with a zero width are unused.

use crate::shape::BitmapRows;

/// First character code stored in the text font
pub(crate) const FIRST_CODE: u32 = 0x20;

/// Unicode block mapped onto the Cyrillic half of the table
pub(crate) const CYRILLIC: core::ops::Range<u32> = 0x410..0x450;

/// Table slot of the first Cyrillic letter
pub(crate) const CYRILLIC_SLOT: u32 = 0xA0;

pub(crate) const GLYPH_STRIDE: usize = 7;

pub(crate) static FONT: [[u8; GLYPH_STRIDE]; 224] = [
    [2, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [1, 0x5F, 0x00, 0x00, 0x00, 0x00, 0x00], // '!'
    [3, 0x07, 0x00, 0x07, 0x00, 0x00, 0x00], // '"'
    [5, 0x14, 0x7F, 0x14, 0x7F, 0x14, 0x00], // '#'
    [5, 0x24, 0x2A, 0x7F, 0x2A, 0x12, 0x00], // '$'
    [5, 0x23, 0x13, 0x08, 0x64, 0x62, 0x00], // '%'
    [5, 0x36, 0x49, 0x55, 0x22, 0x50, 0x00], // '&'
    [2, 0x05, 0x03, 0x00, 0x00, 0x00, 0x00], // "'"
    [3, 0x1C, 0x22, 0x41, 0x00, 0x00, 0x00], // '('
    [3, 0x41, 0x22, 0x1C, 0x00, 0x00, 0x00], // ')'
    [5, 0x08, 0x2A, 0x1C, 0x2A, 0x08, 0x00], // '*'
    [5, 0x08, 0x08, 0x3E, 0x08, 0x08, 0x00], // '+'
    [2, 0x50, 0x30, 0x00, 0x00, 0x00, 0x00], // ','
    [5, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00], // '-'
    [2, 0x60, 0x60, 0x00, 0x00, 0x00, 0x00], // '.'
    [5, 0x20, 0x10, 0x08, 0x04, 0x02, 0x00], // '/'
    [5, 0x3E, 0x51, 0x49, 0x45, 0x3E, 0x00], // '0'
    [3, 0x42, 0x7F, 0x40, 0x00, 0x00, 0x00], // '1'
    [5, 0x42, 0x61, 0x51, 0x49, 0x46, 0x00], // '2'
    [5, 0x21, 0x41, 0x45, 0x4B, 0x31, 0x00], // '3'
    [5, 0x18, 0x14, 0x12, 0x7F, 0x10, 0x00], // '4'
    [5, 0x27, 0x45, 0x45, 0x45, 0x39, 0x00], // '5'
    [5, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // '6'
    [5, 0x01, 0x71, 0x09, 0x05, 0x03, 0x00], // '7'
    [5, 0x36, 0x49, 0x49, 0x49, 0x36, 0x00], // '8'
    [5, 0x06, 0x49, 0x49, 0x29, 0x1E, 0x00], // '9'
    [2, 0x36, 0x36, 0x00, 0x00, 0x00, 0x00], // ':'
    [2, 0x56, 0x36, 0x00, 0x00, 0x00, 0x00], // ';'
    [4, 0x08, 0x14, 0x22, 0x41, 0x00, 0x00], // '<'
    [5, 0x14, 0x14, 0x14, 0x14, 0x14, 0x00], // '='
    [4, 0x41, 0x22, 0x14, 0x08, 0x00, 0x00], // '>'
    [5, 0x02, 0x01, 0x51, 0x09, 0x06, 0x00], // '?'
    [5, 0x32, 0x49, 0x79, 0x41, 0x3E, 0x00], // '@'
    [5, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // 'A'
    [5, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // 'B'
    [5, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // 'C'
    [5, 0x7F, 0x41, 0x41, 0x22, 0x1C, 0x00], // 'D'
    [5, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // 'E'
    [5, 0x7F, 0x09, 0x09, 0x01, 0x01, 0x00], // 'F'
    [5, 0x3E, 0x41, 0x41, 0x51, 0x32, 0x00], // 'G'
    [5, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'H'
    [3, 0x41, 0x7F, 0x41, 0x00, 0x00, 0x00], // 'I'
    [5, 0x20, 0x40, 0x41, 0x3F, 0x01, 0x00], // 'J'
    [5, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // 'K'
    [5, 0x7F, 0x40, 0x40, 0x40, 0x40, 0x00], // 'L'
    [5, 0x7F, 0x02, 0x04, 0x02, 0x7F, 0x00], // 'M'
    [5, 0x7F, 0x04, 0x08, 0x10, 0x7F, 0x00], // 'N'
    [5, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // 'O'
    [5, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // 'P'
    [5, 0x3E, 0x41, 0x51, 0x21, 0x5E, 0x00], // 'Q'
    [5, 0x7F, 0x09, 0x19, 0x29, 0x46, 0x00], // 'R'
    [5, 0x46, 0x49, 0x49, 0x49, 0x31, 0x00], // 'S'
    [5, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // 'T'
    [5, 0x3F, 0x40, 0x40, 0x40, 0x3F, 0x00], // 'U'
    [5, 0x1F, 0x20, 0x40, 0x20, 0x1F, 0x00], // 'V'
    [5, 0x7F, 0x20, 0x18, 0x20, 0x7F, 0x00], // 'W'
    [5, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // 'X'
    [5, 0x03, 0x04, 0x78, 0x04, 0x03, 0x00], // 'Y'
    [5, 0x61, 0x51, 0x49, 0x45, 0x43, 0x00], // 'Z'
    [3, 0x7F, 0x41, 0x41, 0x00, 0x00, 0x00], // '['
    [5, 0x02, 0x04, 0x08, 0x10, 0x20, 0x00], // '\\'
    [3, 0x41, 0x41, 0x7F, 0x00, 0x00, 0x00], // ']'
    [5, 0x04, 0x02, 0x01, 0x02, 0x04, 0x00], // '^'
    [5, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00], // '_'
    [3, 0x01, 0x02, 0x04, 0x00, 0x00, 0x00], // '`'
    [5, 0x20, 0x54, 0x54, 0x54, 0x78, 0x00], // 'a'
    [5, 0x7F, 0x48, 0x44, 0x44, 0x38, 0x00], // 'b'
    [5, 0x38, 0x44, 0x44, 0x44, 0x20, 0x00], // 'c'
    [5, 0x38, 0x44, 0x44, 0x48, 0x7F, 0x00], // 'd'
    [5, 0x38, 0x54, 0x54, 0x54, 0x18, 0x00], // 'e'
    [5, 0x08, 0x7E, 0x09, 0x01, 0x02, 0x00], // 'f'
    [5, 0x08, 0x14, 0x54, 0x54, 0x3C, 0x00], // 'g'
    [5, 0x7F, 0x08, 0x04, 0x04, 0x78, 0x00], // 'h'
    [3, 0x44, 0x7D, 0x40, 0x00, 0x00, 0x00], // 'i'
    [4, 0x20, 0x40, 0x44, 0x3D, 0x00, 0x00], // 'j'
    [4, 0x7F, 0x10, 0x28, 0x44, 0x00, 0x00], // 'k'
    [3, 0x41, 0x7F, 0x40, 0x00, 0x00, 0x00], // 'l'
    [5, 0x7C, 0x04, 0x18, 0x04, 0x78, 0x00], // 'm'
    [5, 0x7C, 0x08, 0x04, 0x04, 0x78, 0x00], // 'n'
    [5, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'o'
    [5, 0x7C, 0x14, 0x14, 0x14, 0x08, 0x00], // 'p'
    [5, 0x08, 0x14, 0x14, 0x18, 0x7C, 0x00], // 'q'
    [5, 0x7C, 0x08, 0x04, 0x04, 0x08, 0x00], // 'r'
    [5, 0x48, 0x54, 0x54, 0x54, 0x20, 0x00], // 's'
    [5, 0x04, 0x3F, 0x44, 0x40, 0x20, 0x00], // 't'
    [5, 0x3C, 0x40, 0x40, 0x20, 0x7C, 0x00], // 'u'
    [5, 0x1C, 0x20, 0x40, 0x20, 0x1C, 0x00], // 'v'
    [5, 0x3C, 0x40, 0x30, 0x40, 0x3C, 0x00], // 'w'
    [5, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'x'
    [5, 0x0C, 0x50, 0x50, 0x50, 0x3C, 0x00], // 'y'
    [5, 0x44, 0x64, 0x54, 0x4C, 0x44, 0x00], // 'z'
    [3, 0x08, 0x36, 0x41, 0x00, 0x00, 0x00], // '{'
    [1, 0x7F, 0x00, 0x00, 0x00, 0x00, 0x00], // '|'
    [3, 0x41, 0x36, 0x08, 0x00, 0x00, 0x00], // '}'
    [5, 0x08, 0x04, 0x08, 0x10, 0x08, 0x00], // '~'
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [2, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // no-break space
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [5, 0x08, 0x14, 0x2A, 0x14, 0x22, 0x00], // '«'
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [4, 0x06, 0x09, 0x09, 0x06, 0x00, 0x00], // '°'
    [5, 0x44, 0x44, 0x5F, 0x44, 0x44, 0x00], // '±'
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [2, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00], // '·'
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [5, 0x22, 0x14, 0x2A, 0x14, 0x08, 0x00], // '»'
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0],
    [5, 0x7E, 0x11, 0x11, 0x11, 0x7E, 0x00], // 'А'
    [5, 0x7F, 0x49, 0x49, 0x49, 0x31, 0x00], // 'Б'
    [5, 0x7F, 0x49, 0x49, 0x49, 0x36, 0x00], // 'В'
    [5, 0x7F, 0x01, 0x01, 0x01, 0x03, 0x00], // 'Г'
    [5, 0xC0, 0x7E, 0x41, 0x7F, 0xC0, 0x00], // 'Д'
    [5, 0x7F, 0x49, 0x49, 0x49, 0x41, 0x00], // 'Е'
    [5, 0x63, 0x14, 0x7F, 0x14, 0x63, 0x00], // 'Ж'
    [5, 0x22, 0x41, 0x49, 0x49, 0x36, 0x00], // 'З'
    [5, 0x7F, 0x20, 0x10, 0x08, 0x7F, 0x00], // 'И'
    [5, 0x7C, 0x21, 0x12, 0x09, 0x7C, 0x00], // 'Й'
    [5, 0x7F, 0x08, 0x14, 0x22, 0x41, 0x00], // 'К'
    [5, 0x40, 0x3E, 0x01, 0x01, 0x7F, 0x00], // 'Л'
    [5, 0x7F, 0x02, 0x04, 0x02, 0x7F, 0x00], // 'М'
    [5, 0x7F, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'Н'
    [5, 0x3E, 0x41, 0x41, 0x41, 0x3E, 0x00], // 'О'
    [5, 0x7F, 0x01, 0x01, 0x01, 0x7F, 0x00], // 'П'
    [5, 0x7F, 0x09, 0x09, 0x09, 0x06, 0x00], // 'Р'
    [5, 0x3E, 0x41, 0x41, 0x41, 0x22, 0x00], // 'С'
    [5, 0x01, 0x01, 0x7F, 0x01, 0x01, 0x00], // 'Т'
    [5, 0x27, 0x48, 0x48, 0x48, 0x3F, 0x00], // 'У'
    [5, 0x0E, 0x11, 0x7F, 0x11, 0x0E, 0x00], // 'Ф'
    [5, 0x63, 0x14, 0x08, 0x14, 0x63, 0x00], // 'Х'
    [5, 0x7F, 0x40, 0x40, 0x7F, 0xC0, 0x00], // 'Ц'
    [5, 0x07, 0x08, 0x08, 0x08, 0x7F, 0x00], // 'Ч'
    [5, 0x7F, 0x40, 0x7F, 0x40, 0x7F, 0x00], // 'Ш'
    [6, 0x7F, 0x40, 0x7F, 0x40, 0x7F, 0xC0], // 'Щ'
    [5, 0x01, 0x7F, 0x48, 0x48, 0x30, 0x00], // 'Ъ'
    [5, 0x7F, 0x48, 0x30, 0x00, 0x7F, 0x00], // 'Ы'
    [5, 0x7F, 0x48, 0x48, 0x48, 0x30, 0x00], // 'Ь'
    [5, 0x22, 0x41, 0x49, 0x49, 0x3E, 0x00], // 'Э'
    [6, 0x7F, 0x08, 0x3E, 0x41, 0x41, 0x3E], // 'Ю'
    [5, 0x46, 0x29, 0x19, 0x09, 0x7F, 0x00], // 'Я'
    [5, 0x20, 0x54, 0x54, 0x54, 0x78, 0x00], // 'а'
    [5, 0x3C, 0x4A, 0x49, 0x49, 0x30, 0x00], // 'б'
    [4, 0x7C, 0x54, 0x54, 0x28, 0x00, 0x00], // 'в'
    [4, 0x7C, 0x04, 0x04, 0x04, 0x00, 0x00], // 'г'
    [5, 0xC0, 0x78, 0x44, 0x7C, 0xC0, 0x00], // 'д'
    [5, 0x38, 0x54, 0x54, 0x54, 0x18, 0x00], // 'е'
    [5, 0x6C, 0x10, 0x7C, 0x10, 0x6C, 0x00], // 'ж'
    [5, 0x28, 0x44, 0x54, 0x54, 0x28, 0x00], // 'з'
    [5, 0x7C, 0x20, 0x10, 0x08, 0x7C, 0x00], // 'и'
    [5, 0x7C, 0x21, 0x12, 0x09, 0x7C, 0x00], // 'й'
    [4, 0x7C, 0x10, 0x28, 0x44, 0x00, 0x00], // 'к'
    [5, 0x40, 0x38, 0x04, 0x04, 0x7C, 0x00], // 'л'
    [5, 0x7C, 0x08, 0x10, 0x08, 0x7C, 0x00], // 'м'
    [5, 0x7C, 0x10, 0x10, 0x10, 0x7C, 0x00], // 'н'
    [5, 0x38, 0x44, 0x44, 0x44, 0x38, 0x00], // 'о'
    [5, 0x7C, 0x04, 0x04, 0x04, 0x7C, 0x00], // 'п'
    [5, 0xFC, 0x24, 0x24, 0x24, 0x18, 0x00], // 'р'
    [5, 0x38, 0x44, 0x44, 0x44, 0x28, 0x00], // 'с'
    [5, 0x04, 0x04, 0x7C, 0x04, 0x04, 0x00], // 'т'
    [5, 0x9C, 0xA0, 0xA0, 0xA0, 0x7C, 0x00], // 'у'
    [5, 0x18, 0x24, 0xFE, 0x24, 0x18, 0x00], // 'ф'
    [5, 0x44, 0x28, 0x10, 0x28, 0x44, 0x00], // 'х'
    [5, 0x7C, 0x40, 0x40, 0x7C, 0xC0, 0x00], // 'ц'
    [5, 0x0C, 0x10, 0x10, 0x10, 0x7C, 0x00], // 'ч'
    [5, 0x7C, 0x40, 0x7C, 0x40, 0x7C, 0x00], // 'ш'
    [6, 0x7C, 0x40, 0x7C, 0x40, 0x7C, 0xC0], // 'щ'
    [5, 0x04, 0x7C, 0x50, 0x50, 0x20, 0x00], // 'ъ'
    [5, 0x7C, 0x50, 0x20, 0x00, 0x7C, 0x00], // 'ы'
    [4, 0x7C, 0x50, 0x50, 0x20, 0x00, 0x00], // 'ь'
    [5, 0x28, 0x44, 0x54, 0x54, 0x38, 0x00], // 'э'
    [6, 0x7C, 0x10, 0x38, 0x44, 0x44, 0x38], // 'ю'
    [5, 0x48, 0x34, 0x14, 0x14, 0x7C, 0x00], // 'я'
];

/// Large 8x8 digits for hours and minutes
pub static DIGITS_LARGE: [BitmapRows; 10] = [
    [0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38], // 0
    [0x10, 0x30, 0x50, 0x10, 0x10, 0x10, 0x10, 0x7c], // 1
    [0x38, 0x44, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7c], // 2
    [0x38, 0x44, 0x04, 0x18, 0x04, 0x04, 0x44, 0x38], // 3
    [0x0c, 0x14, 0x24, 0x44, 0x7c, 0x04, 0x04, 0x04], // 4
    [0x7c, 0x40, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38], // 5
    [0x3c, 0x40, 0x40, 0x78, 0x44, 0x44, 0x44, 0x38], // 6
    [0x7c, 0x44, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20], // 7
    [0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x44, 0x38], // 8
    [0x38, 0x44, 0x44, 0x44, 0x3c, 0x04, 0x04, 0x38], // 9
];

/// Small 3x5 digits for seconds, sitting on rows 3..8 of the bitmap
pub static DIGITS_SMALL: [BitmapRows; 10] = [
    [0x00, 0x00, 0x00, 0xe0, 0xa0, 0xa0, 0xa0, 0xe0], // 0
    [0x00, 0x00, 0x00, 0x40, 0xc0, 0x40, 0x40, 0xe0], // 1
    [0x00, 0x00, 0x00, 0xe0, 0x20, 0xe0, 0x80, 0xe0], // 2
    [0x00, 0x00, 0x00, 0xe0, 0x20, 0xe0, 0x20, 0xe0], // 3
    [0x00, 0x00, 0x00, 0xa0, 0xa0, 0xe0, 0x20, 0x20], // 4
    [0x00, 0x00, 0x00, 0xe0, 0x80, 0xe0, 0x20, 0xe0], // 5
    [0x00, 0x00, 0x00, 0xe0, 0x80, 0xe0, 0xa0, 0xe0], // 6
    [0x00, 0x00, 0x00, 0xe0, 0x20, 0x20, 0x40, 0x40], // 7
    [0x00, 0x00, 0x00, 0xe0, 0xa0, 0xe0, 0xa0, 0xe0], // 8
    [0x00, 0x00, 0x00, 0xe0, 0xa0, 0xe0, 0x20, 0xe0], // 9
];
