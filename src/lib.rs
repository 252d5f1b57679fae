//! # bmptone
//!
//! Decoder and re-encoders for uncompressed Windows bitmaps.
//!
//! The pipeline decodes a 24- or 32-bit BMP into an owned pixel buffer
//! and derives two 8-bpp palettized images from it: a grayscale luma
//! image and a thresholded two-tone image. Each derived image is a
//! complete standalone BMP with a synthesized color table.
//!
//! All header fields are parsed and written field-by-field in
//! little-endian order; nothing depends on native struct layout.
//!
//! ## Non-Goals
//!
//! - Compressed BMP variants (RLE, bitfields)
//! - Input depths other than 24/32, output depths other than 8
//! - Top-down (negative-height) images
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> Result<(), bmptone::BmpError> {
//! let data = bmptone::io::read_file(Path::new("photo.bmp"))?;
//! let image = bmptone::decode(&data)?;
//!
//! let gray = bmptone::grayscale(&image)?;
//! bmptone::io::write_atomic(Path::new("gray.bmp"), &gray.encode())?;
//!
//! let two_tone = bmptone::binarize(&image)?;
//! bmptone::io::write_atomic(Path::new("two_tone.bmp"), &two_tone.encode())?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod decode;
pub mod encode;
mod error;
pub mod headers;
pub mod io;
mod limits;
pub mod synth;
pub mod transform;

// Re-exports
pub use decode::{decode, decode_with_limits, BmpImage};
pub use error::{BmpError, FormatError, IoError, ResourceError};
pub use limits::Limits;
pub use synth::{DerivedHeaders, PaletteKind};
pub use transform::{binarize, grayscale, DerivedImage, BINARY_THRESHOLD};
