//! Wire-format records: BMP file header, info header, and palette entries.
//!
//! Every field is read and written at its exact byte offset in
//! little-endian order. Nothing here depends on native struct layout or
//! alignment; the records below describe bytes on disk, not memory.

use crate::error::IoError;

/// The ASCII bytes `B`, `M` read as a little-endian u16.
pub const BMP_SIGNATURE: u16 = 0x4d42;

pub const FILE_HEADER_SIZE: usize = 14;
pub const INFO_HEADER_SIZE: usize = 40;
pub const PALETTE_ENTRY_SIZE: usize = 4;

/// Little-endian field reader over a header slice.
///
/// The caller checks the slice length up front, so reads never go out of
/// bounds.
struct Fields<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Fields<'_> {
    fn u16(&mut self) -> u16 {
        let v = u16::from_le_bytes([self.data[self.pos], self.data[self.pos + 1]]);
        self.pos += 2;
        v
    }

    fn u32(&mut self) -> u32 {
        let v = u32::from_le_bytes([
            self.data[self.pos],
            self.data[self.pos + 1],
            self.data[self.pos + 2],
            self.data[self.pos + 3],
        ]);
        self.pos += 4;
        v
    }

    fn i32(&mut self) -> i32 {
        self.u32() as i32
    }
}

/// The fixed 14-byte BMP file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileHeader {
    pub signature: u16,
    pub file_size: u32,
    /// Opaque, carried through unchanged on decode.
    pub reserved1: u16,
    pub reserved2: u16,
    pub pixel_data_offset: u32,
}

impl FileHeader {
    /// Parse the file header from the first 14 bytes of `data`.
    ///
    /// Only the layout is enforced here; signature validation is the
    /// decoder's job.
    pub fn parse(data: &[u8]) -> Result<Self, IoError> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(IoError::Truncated {
                needed: FILE_HEADER_SIZE,
                available: data.len(),
            });
        }
        let mut f = Fields { data, pos: 0 };
        Ok(Self {
            signature: f.u16(),
            file_size: f.u32(),
            reserved1: f.u16(),
            reserved2: f.u16(),
            pixel_data_offset: f.u32(),
        })
    }

    /// Append the 14-byte wire form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature.to_le_bytes());
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved1.to_le_bytes());
        out.extend_from_slice(&self.reserved2.to_le_bytes());
        out.extend_from_slice(&self.pixel_data_offset.to_le_bytes());
    }
}

/// The fixed 40-byte BITMAPINFOHEADER.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoHeader {
    pub header_size: u32,
    /// Signed per the wire format; positive for anything this crate decodes.
    pub width: i32,
    /// Positive height means rows are stored bottom-up.
    pub height: i32,
    pub planes: u16,
    pub bit_count: u16,
    /// 0 = uncompressed; the only value the decoder accepts.
    pub compression: u32,
    pub image_size: u32,
    pub x_pels_per_meter: i32,
    pub y_pels_per_meter: i32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl InfoHeader {
    /// Parse the info header from the first 40 bytes of `data`.
    pub fn parse(data: &[u8]) -> Result<Self, IoError> {
        if data.len() < INFO_HEADER_SIZE {
            return Err(IoError::Truncated {
                needed: INFO_HEADER_SIZE,
                available: data.len(),
            });
        }
        let mut f = Fields { data, pos: 0 };
        Ok(Self {
            header_size: f.u32(),
            width: f.i32(),
            height: f.i32(),
            planes: f.u16(),
            bit_count: f.u16(),
            compression: f.u32(),
            image_size: f.u32(),
            x_pels_per_meter: f.i32(),
            y_pels_per_meter: f.i32(),
            colors_used: f.u32(),
            colors_important: f.u32(),
        })
    }

    /// Append the 40-byte wire form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bit_count.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.colors_important.to_le_bytes());
    }
}

/// One color table entry. Stored on the wire as blue, green, red, reserved
/// (not RGB order).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
    pub reserved: u8,
}

impl PaletteEntry {
    /// A gray entry with all three channels set to `level`.
    pub const fn gray(level: u8) -> Self {
        Self {
            blue: level,
            green: level,
            red: level,
            reserved: 0,
        }
    }

    /// Append the 4-byte wire form to `out`.
    pub fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&[self.blue, self.green, self.red, self.reserved]);
    }
}
