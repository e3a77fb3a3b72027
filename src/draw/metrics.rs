//! Glyph advance widths for the PDF standard fonts, in 1/1000 em, WinAnsi encoded.

use crate::config::FontFamily;
use crate::draw::FontStyle;

// Printable ASCII 0x20..=0x7E.
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

const COURIER: u16 = 600;

const BULLET: u8 = 0x95;
const EN_DASH: u8 = 0x96;
const EM_DASH: u8 = 0x97;

/// Encode `text` as WinAnsi bytes. Characters outside the encoding become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{2022}' => BULLET,
            '\u{2013}' => EN_DASH,
            '\u{2014}' => EM_DASH,
            _ => b'?',
        })
        .collect()
}

fn glyph_width(family: FontFamily, style: FontStyle, byte: u8) -> u16 {
    if family == FontFamily::Courier {
        return COURIER;
    }
    let table = match style {
        FontStyle::Regular => &HELVETICA,
        FontStyle::Bold => &HELVETICA_BOLD,
    };
    match byte {
        0x20..=0x7E => table[usize::from(byte - 0x20)],
        BULLET => 350,
        EN_DASH => 556,
        EM_DASH => 1000,
        _ => 556,
    }
}

/// Advance width of already-encoded text at `size` points.
pub fn encoded_width(family: FontFamily, style: FontStyle, size: f64, encoded: &[u8]) -> f64 {
    let units: u32 = encoded
        .iter()
        .map(|&b| u32::from(glyph_width(family, style, b)))
        .sum();
    f64::from(units) * size / 1000.0
}

/// Advance width of `text` at `size` points.
pub fn text_width(family: FontFamily, style: FontStyle, size: f64, text: &str) -> f64 {
    encoded_width(family, style, size, &encode_win_ansi(text))
}

#[cfg(test)]
#[path = "../../tests/unit/draw/metrics.rs"]
mod tests;
