//! BMP decoding: bytes in, [`BmpImage`] out.

use crate::error::{BmpError, FormatError, IoError};
use crate::headers::{FileHeader, InfoHeader, BMP_SIGNATURE, FILE_HEADER_SIZE, INFO_HEADER_SIZE};
use crate::limits::Limits;

/// A decoded BMP: both headers, the raw pixel payload, and the row stride.
///
/// Rows are stored bottom-up. The image exclusively owns its pixel buffer
/// and is immutable once constructed; transforms read from it but never
/// change it.
#[derive(Debug, Clone)]
pub struct BmpImage {
    pub file_header: FileHeader,
    pub info_header: InfoHeader,
    pixels: Vec<u8>,
    stride: usize,
}

impl BmpImage {
    pub fn width(&self) -> i32 {
        self.info_header.width
    }

    pub fn height(&self) -> i32 {
        self.info_header.height
    }

    /// Raw pixel payload, bottom-up row order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Bytes per stored row.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

/// Decode an uncompressed 24- or 32-bit BMP.
pub fn decode(data: &[u8]) -> Result<BmpImage, BmpError> {
    decode_with_limits(data, None)
}

/// Decode with pre-allocation resource limits.
pub fn decode_with_limits(data: &[u8], limits: Option<&Limits>) -> Result<BmpImage, BmpError> {
    let file_header = FileHeader::parse(data)?;
    if file_header.signature != BMP_SIGNATURE {
        return Err(FormatError::BadSignature {
            found: file_header.signature,
        }
        .into());
    }

    let info_header = InfoHeader::parse(&data[FILE_HEADER_SIZE..])?;

    let bits = info_header.bit_count;
    if bits != 24 && bits != 32 {
        return Err(FormatError::UnsupportedDepth { bits }.into());
    }
    if info_header.width <= 0 || info_header.height <= 0 {
        return Err(FormatError::InvalidDimensions {
            width: info_header.width,
            height: info_header.height,
        }
        .into());
    }
    if info_header.compression != 0 {
        return Err(FormatError::UnsupportedCompression {
            method: info_header.compression,
        }
        .into());
    }

    let image_size = info_header.image_size as usize;
    if let Some(limits) = limits {
        limits.check(info_header.width as u32, info_header.height as u32)?;
        limits.check_memory(image_size)?;
    }

    // The payload sits immediately after the two headers. The file
    // header's declared pixel_data_offset is not consulted: inputs in the
    // supported depths carry no color table, so the two locations
    // coincide for well-formed files.
    let payload_start = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
    let available = data.len().saturating_sub(payload_start);
    if available < image_size {
        return Err(IoError::Truncated {
            needed: image_size,
            available,
        }
        .into());
    }
    let pixels = data[payload_start..payload_start + image_size].to_vec();

    // Stride comes from the size field, not the 4-byte alignment formula.
    // Inputs whose size field disagrees with their real row layout decode
    // as-is; per-row consistency is checked by the transforms that read
    // the buffer.
    let stride = (info_header.image_size / info_header.height as u32) as usize;

    Ok(BmpImage {
        file_header,
        info_header,
        pixels,
        stride,
    })
}
