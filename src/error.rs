use std::path::PathBuf;

/// Structural problems in a BMP byte stream.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FormatError {
    #[error("bad signature {found:#06x}, expected 'BM' (0x4d42)")]
    BadSignature { found: u16 },

    #[error("unsupported bit depth {bits}, only 24 and 32 can be decoded")]
    UnsupportedDepth { bits: u16 },

    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("unsupported compression method {method}, only uncompressed BMPs are decoded")]
    UnsupportedCompression { method: u32 },

    #[error("pixel buffer too small for declared geometry: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}

/// Failures reading input bytes or writing output files.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum IoError {
    #[error("truncated input: needed {needed} bytes, only {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Pre-allocation resource checks.
///
/// Safe Rust cannot observe a failed allocation directly, so buffer sizes
/// are checked against [`crate::Limits`] before anything is allocated.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ResourceError {
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: i32, height: i32 },
}

/// Any error from decoding, transforming, or writing a BMP.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Resource(#[from] ResourceError),
}
