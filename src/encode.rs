//! BMP serialization: headers, palette, and pixel buffer to bytes.

use crate::headers::{
    FileHeader, InfoHeader, PaletteEntry, FILE_HEADER_SIZE, INFO_HEADER_SIZE, PALETTE_ENTRY_SIZE,
};

/// Serialize a complete BMP file: file header, info header, palette
/// entries in index order, then the raw pixel buffer.
///
/// No validation happens here; the size and offset fields are trusted as
/// set by the synthesizer.
pub fn encode(
    file: &FileHeader,
    info: &InfoHeader,
    palette: &[PaletteEntry],
    pixels: &[u8],
) -> Vec<u8> {
    let total = FILE_HEADER_SIZE
        + INFO_HEADER_SIZE
        + palette.len() * PALETTE_ENTRY_SIZE
        + pixels.len();
    let mut out = Vec::with_capacity(total);
    file.write_to(&mut out);
    info.write_to(&mut out);
    for entry in palette {
        entry.write_to(&mut out);
    }
    out.extend_from_slice(pixels);
    out
}
