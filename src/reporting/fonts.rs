//! Advance widths of the standard Helvetica face, in 1/1000 em, for the
//! printable ASCII range. Used to centre and right-align text; the built-in
//! PDF fonts carry no metrics of their own.

const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    let code = c as u32;
    if (32..127).contains(&code) {
        HELVETICA_WIDTHS[(code - 32) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in points at `size`.
pub fn text_width(text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c))).sum();
    units as f32 * size / 1000.0
}
