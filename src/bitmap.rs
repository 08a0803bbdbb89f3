//! BMP codec: header parsing, coordinate-to-offset translation, per-pixel
//! access, and blank-canvas construction.
//!
//! This is the only module allowed to reason about row padding. Everything
//! above it goes through [`BitmapBuffer::get_pixel`] / [`BitmapBuffer::set_pixel`].

use alloc::vec;
use alloc::vec::Vec;

use crate::Rgb8;
use crate::error::BmpError;

/// Byte offset of the pixel-data-offset field in the file header.
const OFFSET_PIXEL_DATA: usize = 10;
/// Byte offset of the DIB header-size field.
const OFFSET_HEADER_SIZE: usize = 14;
const OFFSET_WIDTH: usize = 18;
const OFFSET_HEIGHT: usize = 22;
const OFFSET_PLANES: usize = 26;
const OFFSET_BPP: usize = 28;
const OFFSET_COMPRESSION: usize = 30;

/// Total header size written by [`BitmapBuffer::create_blank`] (BMP v5:
/// 14-byte file header + 124-byte BITMAPV5HEADER).
const BLANK_HEADER_BYTES: usize = 138;

/// Header fields parsed from a 24bpp uncompressed BMP buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    /// Byte index where pixel data begins (header field at byte 10).
    pub pixel_data_offset: usize,
    pub width: u32,
    pub height: u32,
    /// Bytes per stored row: `width * 3` rounded up to a multiple of 4.
    pub row_stride: usize,
    /// Zero bytes appended to each row: `(4 - (width * 3) % 4) % 4`.
    pub row_padding: usize,
}

fn read_u16_le(data: &[u8], at: usize) -> Result<u16, BmpError> {
    let bytes: [u8; 2] = data
        .get(at..at + 2)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| BmpError::UnsupportedFormat("header truncated".into()))?;
    Ok(u16::from_le_bytes(bytes))
}

fn read_u32_le(data: &[u8], at: usize) -> Result<u32, BmpError> {
    let bytes: [u8; 4] = data
        .get(at..at + 4)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| BmpError::UnsupportedFormat("header truncated".into()))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Stride and padding for a 24bpp row of `width` pixels.
fn row_geometry(width: u32) -> Result<(usize, usize), BmpError> {
    let row_bytes = (width as usize)
        .checked_mul(3)
        .ok_or(BmpError::InvalidDimensions {
            width: i64::from(width),
            height: 0,
        })?;
    let padding = (4 - row_bytes % 4) % 4;
    Ok((row_bytes + padding, padding))
}

/// Parse the fixed-offset header fields of a 24bpp uncompressed BMP.
///
/// Pure and read-only; results are invariant for a given buffer since
/// in-place pixel edits never change header fields.
///
/// Fails with [`BmpError::UnsupportedFormat`] on a bad signature, planes ≠ 1,
/// bits-per-pixel ≠ 24, nonzero compression, or a buffer shorter than the
/// header-declared pixel extent, and with [`BmpError::InvalidDimensions`] on
/// non-positive width or height.
pub fn parse_header(data: &[u8]) -> Result<BmpInfo, BmpError> {
    if data.len() < 2 || data[0] != b'B' || data[1] != b'M' {
        return Err(BmpError::UnsupportedFormat(
            "missing BM signature".into(),
        ));
    }

    let pixel_data_offset = read_u32_le(data, OFFSET_PIXEL_DATA)? as usize;
    let width = read_u32_le(data, OFFSET_WIDTH)? as i32;
    let height = read_u32_le(data, OFFSET_HEIGHT)? as i32;
    let planes = read_u16_le(data, OFFSET_PLANES)?;
    let bpp = read_u16_le(data, OFFSET_BPP)?;
    let compression = read_u32_le(data, OFFSET_COMPRESSION)?;

    if planes != 1 {
        return Err(BmpError::UnsupportedFormat(alloc::format!(
            "color planes field is {planes}, expected 1"
        )));
    }
    if bpp != 24 {
        return Err(BmpError::UnsupportedFormat(alloc::format!(
            "unsupported bits per pixel: {bpp}"
        )));
    }
    if compression != 0 {
        return Err(BmpError::UnsupportedFormat(alloc::format!(
            "unsupported compression: {compression}"
        )));
    }
    if width <= 0 || height <= 0 {
        return Err(BmpError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(height),
        });
    }

    let width = width as u32;
    let height = height as u32;
    let (row_stride, row_padding) = row_geometry(width)?;
    let needed = row_stride
        .checked_mul(height as usize)
        .and_then(|p| p.checked_add(pixel_data_offset))
        .ok_or(BmpError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(height),
        })?;
    if data.len() < needed {
        return Err(BmpError::UnsupportedFormat(alloc::format!(
            "buffer too small: need {needed} bytes, got {}",
            data.len()
        )));
    }

    Ok(BmpInfo {
        pixel_data_offset,
        width,
        height,
        row_stride,
        row_padding,
    })
}

/// An in-memory 24bpp BMP file: header plus pixel rows.
///
/// Owns the full byte buffer. Header fields are parsed once at construction;
/// pixel access is bounds-checked and goes through (x, y) coordinates only.
/// No vertical flip is applied: row 0 is the first stored row (the visual
/// bottom row, per BMP bottom-up convention).
#[derive(Clone, Debug)]
pub struct BitmapBuffer {
    data: Vec<u8>,
    info: BmpInfo,
}

impl BitmapBuffer {
    /// Take ownership of externally supplied BMP bytes, validating the header.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, BmpError> {
        let info = parse_header(&data)?;
        Ok(Self { data, info })
    }

    /// Create an all-black bitmap with a minimal valid v5 header
    /// (pixel offset 138, header-size field 124, 24bpp, no compression).
    pub fn create_blank(width: u32, height: u32) -> Result<Self, BmpError> {
        if width == 0 || height == 0 {
            return Err(BmpError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            });
        }
        let (row_stride, _) = row_geometry(width)?;
        let file_size = row_stride
            .checked_mul(height as usize)
            .and_then(|p| p.checked_add(BLANK_HEADER_BYTES))
            .ok_or(BmpError::InvalidDimensions {
                width: i64::from(width),
                height: i64::from(height),
            })?;

        let mut data = vec![0u8; file_size];
        data[0] = b'B';
        data[1] = b'M';
        data[2..6].copy_from_slice(&(file_size as u32).to_le_bytes());
        data[OFFSET_PIXEL_DATA..OFFSET_PIXEL_DATA + 4]
            .copy_from_slice(&(BLANK_HEADER_BYTES as u32).to_le_bytes());
        data[OFFSET_HEADER_SIZE..OFFSET_HEADER_SIZE + 4].copy_from_slice(&124u32.to_le_bytes());
        data[OFFSET_WIDTH..OFFSET_WIDTH + 4].copy_from_slice(&width.to_le_bytes());
        data[OFFSET_HEIGHT..OFFSET_HEIGHT + 4].copy_from_slice(&height.to_le_bytes());
        data[OFFSET_PLANES..OFFSET_PLANES + 2].copy_from_slice(&1u16.to_le_bytes());
        data[OFFSET_BPP..OFFSET_BPP + 2].copy_from_slice(&24u16.to_le_bytes());
        // Compression field and pixel data stay zero.

        Self::from_bytes(data)
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    pub fn row_stride(&self) -> usize {
        self.info.row_stride
    }

    pub fn row_padding(&self) -> usize {
        self.info.row_padding
    }

    pub fn pixel_data_offset(&self) -> usize {
        self.info.pixel_data_offset
    }

    /// Parsed header fields.
    pub fn info(&self) -> BmpInfo {
        self.info
    }

    /// The complete file bytes (header + pixel data).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning the file bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of the pixel at (x, y), after bounds checking.
    fn offset_of(&self, x: i32, y: i32) -> Result<usize, BmpError> {
        if x < 0 || y < 0 || x as u32 >= self.info.width || y as u32 >= self.info.height {
            return Err(BmpError::OutOfBounds {
                x: i64::from(x),
                y: i64::from(y),
                width: self.info.width,
                height: self.info.height,
            });
        }
        Ok(self.info.pixel_data_offset + self.info.row_stride * y as usize + 3 * x as usize)
    }

    /// Read the pixel at (x, y), reordering from (b, g, r) file order.
    pub fn get_pixel(&self, x: i32, y: i32) -> Result<Rgb8, BmpError> {
        let off = self.offset_of(x, y)?;
        Ok(Rgb8::new(
            self.data[off + 2],
            self.data[off + 1],
            self.data[off],
        ))
    }

    /// Write the pixel at (x, y) in (b, g, r) file order.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb8) -> Result<(), BmpError> {
        let off = self.offset_of(x, y)?;
        self.data[off] = color.b;
        self.data[off + 1] = color.g;
        self.data[off + 2] = color.r;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_pads_odd_rows_to_four_bytes() {
        assert_eq!(row_geometry(25).unwrap(), (76, 1));
        assert_eq!(row_geometry(64).unwrap(), (192, 0));
        assert_eq!(row_geometry(1).unwrap(), (4, 1));
        assert_eq!(row_geometry(2).unwrap(), (8, 2));
    }

    #[test]
    fn blank_header_fields() {
        let bmp = BitmapBuffer::create_blank(3, 2).unwrap();
        let bytes = bmp.as_bytes();
        assert_eq!(&bytes[0..2], b"BM");
        // 3px rows pad 9 -> 12 bytes; 138 + 12 * 2 = 162
        assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()), 162);
        assert_eq!(bmp.pixel_data_offset(), 138);
        assert_eq!(u32::from_le_bytes(bytes[14..18].try_into().unwrap()), 124);
        assert_eq!(bmp.row_stride(), 12);
        assert_eq!(bmp.row_padding(), 3);
    }

    #[test]
    fn offset_arithmetic_accounts_for_padding() {
        let mut bmp = BitmapBuffer::create_blank(3, 3).unwrap();
        bmp.set_pixel(0, 1, Rgb8::new(1, 2, 3)).unwrap();
        // Row 1 starts one full (padded) stride past the pixel data offset.
        let off = bmp.pixel_data_offset() + bmp.row_stride();
        assert_eq!(&bmp.as_bytes()[off..off + 3], &[3, 2, 1]);
    }
}
