//! Pixel transforms: grayscale luma mapping and binarization.
//!
//! Both transforms walk the source image row-major, compute a per-pixel
//! luma, and write one byte per pixel into a freshly allocated 8-bpp
//! buffer paired with the headers and palette from [`crate::synth`].

use crate::decode::BmpImage;
use crate::encode;
use crate::error::{BmpError, FormatError};
use crate::synth::{self, DerivedHeaders, PaletteKind};

/// Luma values at or above this map to palette index 1 (dark).
pub const BINARY_THRESHOLD: u8 = 160;

/// An 8-bpp image derived from a decoded source, ready for encoding.
#[derive(Debug, Clone)]
pub struct DerivedImage {
    pub headers: DerivedHeaders,
    pub pixels: Vec<u8>,
}

impl DerivedImage {
    /// Serialize to a complete standalone BMP file.
    pub fn encode(&self) -> Vec<u8> {
        encode::encode(
            &self.headers.file,
            &self.headers.info,
            &self.headers.palette,
            &self.pixels,
        )
    }
}

/// Weighted sum of the three stored channel bytes, truncated toward zero.
///
/// The 0.299 weight applies to the first stored byte (blue in BMP order)
/// and 0.114 to the third (red). Output files depend on this exact
/// mapping; it is part of the transform contract.
fn luma(c0: u8, c1: u8, c2: u8) -> u8 {
    (f64::from(c0) * 0.299 + f64::from(c1) * 0.587 + f64::from(c2) * 0.114) as u8
}

/// Map every pixel to its luma, producing a 256-gray palettized image.
pub fn grayscale(image: &BmpImage) -> Result<DerivedImage, BmpError> {
    derive(image, PaletteKind::Grayscale, |l| l)
}

/// Threshold every pixel's luma at [`BINARY_THRESHOLD`], producing a
/// two-tone palettized image. Brighter luma maps to index 1 (dark).
pub fn binarize(image: &BmpImage) -> Result<DerivedImage, BmpError> {
    derive(image, PaletteKind::Binary, |l| {
        u8::from(l >= BINARY_THRESHOLD)
    })
}

fn derive(
    image: &BmpImage,
    kind: PaletteKind,
    map: impl Fn(u8) -> u8,
) -> Result<DerivedImage, BmpError> {
    let headers = synth::synthesize(&image.info_header, kind)?;

    let width = image.width() as usize;
    let height = image.height() as usize;
    let src = image.pixels();
    let src_stride = image.stride();

    // Columns are addressed at a fixed 3 bytes regardless of the source
    // depth. For 32-bpp sources this reads across pixel boundaries within
    // the row; the source stride still keeps rows apart. Reproduced
    // source behavior, pinned by tests.
    let needed = (height - 1) * src_stride + (width - 1) * 3 + 3;
    if src.len() < needed {
        return Err(FormatError::BufferTooSmall {
            needed,
            actual: src.len(),
        }
        .into());
    }

    let dst_stride = synth::stride8(image.width());
    let mut dst = vec![0u8; headers.info.image_size as usize];
    for row in 0..height {
        let src_row = row * src_stride;
        let dst_row = row * dst_stride;
        for col in 0..width {
            let s = src_row + col * 3;
            dst[dst_row + col] = map(luma(src[s], src[s + 1], src[s + 2]));
        }
    }

    Ok(DerivedImage {
        headers,
        pixels: dst,
    })
}
