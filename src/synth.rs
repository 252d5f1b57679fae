//! Header and palette synthesis for derived 8-bpp images.
//!
//! A derived image reuses the source geometry but gets a fresh file
//! header, an 8-bpp info header, and a synthesized color table. File size
//! and pixel-data offset are always recomputed from the actual synthesized
//! sizes, never copied from the source.

use crate::error::ResourceError;
use crate::headers::{
    FileHeader, InfoHeader, PaletteEntry, BMP_SIGNATURE, FILE_HEADER_SIZE, INFO_HEADER_SIZE,
    PALETTE_ENTRY_SIZE,
};

/// Which color table a derived image carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteKind {
    /// 256-entry linear gray ramp: index `i` displays as gray level `i`.
    Grayscale,
    /// Two entries: index 0 light gray, index 1 black.
    ///
    /// The thresholding transform maps *brighter* luma to index 1 (dark)
    /// and darker luma to index 0 (light). This inverted-looking mapping
    /// is the output contract, not a mistake.
    Binary,
}

impl PaletteKind {
    pub fn palette_len(self) -> usize {
        match self {
            Self::Grayscale => 256,
            Self::Binary => 2,
        }
    }
}

/// Headers and color table for one derived image, ready for the encoder.
#[derive(Debug, Clone)]
pub struct DerivedHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub palette: Vec<PaletteEntry>,
}

/// Row stride for an 8-bpp image: one byte per pixel, rows padded to a
/// 4-byte boundary.
pub fn stride8(width: i32) -> usize {
    (width as usize + 3) & !3
}

/// Build the file header, info header, and palette for a derived 8-bpp
/// image of the same geometry as `source`.
pub fn synthesize(
    source: &InfoHeader,
    kind: PaletteKind,
) -> Result<DerivedHeaders, ResourceError> {
    let too_large = || ResourceError::DimensionsTooLarge {
        width: source.width,
        height: source.height,
    };
    if source.width <= 0 || source.height <= 0 {
        return Err(too_large());
    }

    // The u32 file_size field must also hold image_size plus the largest
    // header + palette prefix (14 + 40 + 256 * 4 bytes).
    let max_image_size = u32::MAX as usize - (FILE_HEADER_SIZE + INFO_HEADER_SIZE + 256 * PALETTE_ENTRY_SIZE);
    let stride = stride8(source.width);
    let image_size = stride
        .checked_mul(source.height as usize)
        .filter(|&n| n <= max_image_size)
        .ok_or_else(too_large)?;

    let mut info = *source;
    info.bit_count = 8;
    info.image_size = image_size as u32;
    if kind == PaletteKind::Binary {
        info.colors_used = kind.palette_len() as u32;
        info.colors_important = 0;
    }

    let palette = build_palette(kind);
    let pixel_data_offset =
        (FILE_HEADER_SIZE + INFO_HEADER_SIZE + palette.len() * PALETTE_ENTRY_SIZE) as u32;
    let file = FileHeader {
        signature: BMP_SIGNATURE,
        file_size: pixel_data_offset + image_size as u32,
        reserved1: 0,
        reserved2: 0,
        pixel_data_offset,
    };

    Ok(DerivedHeaders {
        file,
        info,
        palette,
    })
}

fn build_palette(kind: PaletteKind) -> Vec<PaletteEntry> {
    match kind {
        PaletteKind::Grayscale => (0u8..=255).map(PaletteEntry::gray).collect(),
        PaletteKind::Binary => vec![PaletteEntry::gray(190), PaletteEntry::gray(0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source_info(width: i32, height: i32) -> InfoHeader {
        InfoHeader {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bit_count: 24,
            compression: 0,
            image_size: 0,
            x_pels_per_meter: 2835,
            y_pels_per_meter: 2835,
            colors_used: 0,
            colors_important: 0,
        }
    }

    #[test]
    fn stride_is_padded_to_four_bytes() {
        assert_eq!(stride8(1), 4);
        assert_eq!(stride8(4), 4);
        assert_eq!(stride8(5), 8);
        assert_eq!(stride8(640), 640);
    }

    #[test]
    fn grayscale_offsets_account_for_the_full_palette() {
        let derived = synthesize(&source_info(10, 4), PaletteKind::Grayscale).unwrap();
        assert_eq!(derived.palette.len(), 256);
        assert_eq!(derived.info.bit_count, 8);
        assert_eq!(derived.info.image_size, 12 * 4);
        assert_eq!(derived.file.pixel_data_offset, 14 + 40 + 256 * 4);
        assert_eq!(derived.file.file_size, 14 + 40 + 256 * 4 + 12 * 4);
        // Colors-used is carried over untouched for grayscale.
        assert_eq!(derived.info.colors_used, 0);
    }

    #[test]
    fn binary_sets_palette_counts_and_light_dark_entries() {
        let derived = synthesize(&source_info(2, 2), PaletteKind::Binary).unwrap();
        assert_eq!(derived.info.colors_used, 2);
        assert_eq!(derived.info.colors_important, 0);
        assert_eq!(derived.palette[0], PaletteEntry::gray(190));
        assert_eq!(derived.palette[1], PaletteEntry::gray(0));
        assert_eq!(derived.file.pixel_data_offset, 14 + 40 + 2 * 4);
    }

    #[test]
    fn oversized_geometry_is_rejected() {
        let err = synthesize(&source_info(i32::MAX, i32::MAX), PaletteKind::Grayscale).unwrap_err();
        match err {
            ResourceError::DimensionsTooLarge { .. } => {}
            other => panic!("expected DimensionsTooLarge, got {other:?}"),
        }
    }
}
