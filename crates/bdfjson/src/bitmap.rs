//! Hexadecimal bitmap row decoding.

use crate::{BdfError, Result};

/// Decodes one hexadecimal bitmap row (e.g. `"A0"`, `"B18F"`) into 0/1
/// values, most significant bit first.
///
/// BDF pads rows to whole bytes: one byte covers widths up to 8, two bytes
/// cover widths 9 to 16. Bits are taken from position `bit_width` down to
/// `bit_width - width` inclusive, so every row carries `width + 1` entries
/// and the first entry is always 0 (it sits one position above the top data
/// bit of the padded row). The converter this crate replaces has always
/// emitted rows of that shape and downstream consumers index around the
/// leading bit, so the inclusive range is kept for output compatibility.
///
/// A row that does not parse as base-16 fails with
/// [`BdfError::MalformedBitmapRow`]; rows longer than eight hex digits
/// overflow the 32-bit parse and fail the same way.
pub fn decode_row(line: &str, width: i32) -> Result<Vec<u8>> {
    let text = line.trim();
    let value = u32::from_str_radix(text, 16)
        .map_err(|_| BdfError::MalformedBitmapRow(text.to_string()))?;
    let bit_width: i32 = if width < 9 { 8 } else { 16 };
    // Clamp so a declared width above 16 decodes the two-byte range instead
    // of shifting by a negative amount. A negative width leaves the range
    // empty.
    let low = (bit_width - width).max(0);
    let mut row = Vec::with_capacity((bit_width - low + 1).max(0) as usize);
    let mut bit = bit_width;
    while bit >= low {
        row.push(((value >> bit) & 1) as u8);
        bit -= 1;
    }
    Ok(row)
}
