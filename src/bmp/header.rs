//! BITMAPFILEHEADER + BITMAPINFOHEADER, read and written field by field.

use super::utils::{
    read_i32_le, read_u16_le, read_u32_le, row_padding, write_i32_le, write_u16_le, write_u32_le,
};
use crate::error::BitmapError;

/// Size of the file header on disk.
pub const FILE_HEADER_SIZE: usize = 14;
/// Size of the BITMAPINFOHEADER part this codec interprets.
pub const INFO_HEADER_SIZE: usize = 40;
/// Offset of the first byte after both headers.
pub const HEADERS_END: usize = FILE_HEADER_SIZE + INFO_HEADER_SIZE;

/// 72 DPI in pixels per meter.
const DEFAULT_RESOLUTION: i32 = 2835;

/// The 14-byte file header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FileHeader {
    pub magic: [u8; 2],
    /// Total file size as stated by the writer. Informational only.
    pub file_size: u32,
    pub reserved1: u16,
    pub reserved2: u16,
    /// Offset of the pixel array from the start of the file.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub(crate) fn parse(b: &[u8; FILE_HEADER_SIZE]) -> Self {
        Self {
            magic: [b[0], b[1]],
            file_size: read_u32_le(b, 2),
            reserved1: read_u16_le(b, 6),
            reserved2: read_u16_le(b, 8),
            pixel_offset: read_u32_le(b, 10),
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; FILE_HEADER_SIZE] {
        let mut b = [0u8; FILE_HEADER_SIZE];
        b[0..2].copy_from_slice(&self.magic);
        write_u32_le(&mut b, 2, self.file_size);
        write_u16_le(&mut b, 6, self.reserved1);
        write_u16_le(&mut b, 8, self.reserved2);
        write_u32_le(&mut b, 10, self.pixel_offset);
        b
    }
}

/// The first 40 bytes of the info header (BITMAPINFOHEADER layout).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InfoHeader {
    /// Declared size of the info header; may exceed 40 for V4/V5 headers.
    pub header_size: u32,
    pub width: i32,
    /// Positive means bottom-up rows, the only orientation this codec accepts.
    pub height: i32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    pub(crate) fn parse(b: &[u8; INFO_HEADER_SIZE]) -> Self {
        Self {
            header_size: read_u32_le(b, 0),
            width: read_i32_le(b, 4),
            height: read_i32_le(b, 8),
            planes: read_u16_le(b, 12),
            bits_per_pixel: read_u16_le(b, 14),
            compression: read_u32_le(b, 16),
            image_size: read_u32_le(b, 20),
            x_pixels_per_meter: read_i32_le(b, 24),
            y_pixels_per_meter: read_i32_le(b, 28),
            colors_used: read_u32_le(b, 32),
            important_colors: read_u32_le(b, 36),
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; INFO_HEADER_SIZE] {
        let mut b = [0u8; INFO_HEADER_SIZE];
        write_u32_le(&mut b, 0, self.header_size);
        write_i32_le(&mut b, 4, self.width);
        write_i32_le(&mut b, 8, self.height);
        write_u16_le(&mut b, 12, self.planes);
        write_u16_le(&mut b, 14, self.bits_per_pixel);
        write_u32_le(&mut b, 16, self.compression);
        write_u32_le(&mut b, 20, self.image_size);
        write_i32_le(&mut b, 24, self.x_pixels_per_meter);
        write_i32_le(&mut b, 28, self.y_pixels_per_meter);
        write_u32_le(&mut b, 32, self.colors_used);
        write_u32_le(&mut b, 36, self.important_colors);
        b
    }
}

/// Everything in a BMP file before the pixel array.
///
/// `extra` holds the bytes between the end of the 40-byte info header and
/// the pixel offset (extended V4/V5 fields, bit masks, gap bytes). They are
/// written back untouched so `pixel_offset` stays correct.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeaders {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub(crate) extra: Vec<u8>,
}

impl BmpHeaders {
    /// Canonical 54-byte headers for a bottom-up 24-bit image.
    pub fn for_dimensions(width: u32, height: u32) -> Result<Self, BitmapError> {
        let too_large = || BitmapError::DimensionsTooLarge { width, height };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let image_size = pixel_data_len(width, height)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(too_large)?;
        let file_size = image_size
            .checked_add(HEADERS_END as u32)
            .ok_or_else(too_large)?;

        Ok(Self {
            file: FileHeader {
                magic: *b"BM",
                file_size,
                reserved1: 0,
                reserved2: 0,
                pixel_offset: HEADERS_END as u32,
            },
            info: InfoHeader {
                header_size: INFO_HEADER_SIZE as u32,
                width: w,
                height: h,
                planes: 1,
                bits_per_pixel: 24,
                compression: 0,
                image_size,
                x_pixels_per_meter: DEFAULT_RESOLUTION,
                y_pixels_per_meter: DEFAULT_RESOLUTION,
                colors_used: 0,
                important_colors: 0,
            },
            extra: Vec::new(),
        })
    }

    /// Image width. Only meaningful once the headers have been validated.
    pub fn width(&self) -> u32 {
        self.info.width.unsigned_abs()
    }

    /// Image height. Only meaningful once the headers have been validated.
    pub fn height(&self) -> u32 {
        self.info.height.unsigned_abs()
    }

    /// Bytes between the 40-byte info header and the pixel array.
    pub fn extra_bytes(&self) -> &[u8] {
        &self.extra
    }

    /// Size of the serialized headers, equal to the pixel offset they encode.
    pub(crate) fn encoded_len(&self) -> usize {
        HEADERS_END + self.extra.len()
    }

    pub(crate) fn write_to(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.file.to_bytes());
        out.extend_from_slice(&self.info.to_bytes());
        out.extend_from_slice(&self.extra);
    }
}

/// Bytes in the pixel array of a 24-bit image including row padding.
pub(crate) fn pixel_data_len(width: u32, height: u32) -> Option<usize> {
    let w = width as usize;
    w.checked_mul(3)
        .and_then(|r| r.checked_add(row_padding(w)))
        .and_then(|stride| stride.checked_mul(height as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_headers_field_offsets() {
        let h = BmpHeaders::for_dimensions(3, 2).unwrap();
        let mut out = Vec::new();
        h.write_to(&mut out);

        assert_eq!(out.len(), HEADERS_END);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(read_u32_le(&out, 2), 54 + 24); // stride 12 * 2 rows
        assert_eq!(read_u32_le(&out, 6), 0);
        assert_eq!(read_u32_le(&out, 10), 54);
        assert_eq!(read_u32_le(&out, 14), 40);
        assert_eq!(read_i32_le(&out, 18), 3);
        assert_eq!(read_i32_le(&out, 22), 2);
        assert_eq!(read_u16_le(&out, 26), 1);
        assert_eq!(read_u16_le(&out, 28), 24);
        assert_eq!(read_u32_le(&out, 30), 0);
        assert_eq!(read_u32_le(&out, 34), 24);
        assert_eq!(read_i32_le(&out, 38), 2835);
        assert_eq!(read_i32_le(&out, 42), 2835);
        assert_eq!(read_u32_le(&out, 46), 0);
        assert_eq!(read_u32_le(&out, 50), 0);
    }

    #[test]
    fn parse_is_inverse_of_to_bytes() {
        let file = FileHeader {
            magic: *b"BM",
            file_size: 0xDEAD_BEEF,
            reserved1: 7,
            reserved2: 0xFFFF,
            pixel_offset: 138,
        };
        let info = InfoHeader {
            header_size: 124,
            width: 640,
            height: 480,
            planes: 1,
            bits_per_pixel: 24,
            compression: 0,
            image_size: 0,
            x_pixels_per_meter: -5,
            y_pixels_per_meter: 3780,
            colors_used: 1,
            important_colors: 2,
        };
        assert_eq!(FileHeader::parse(&file.to_bytes()), file);
        assert_eq!(InfoHeader::parse(&info.to_bytes()), info);
    }

    #[test]
    fn pixel_data_len_includes_padding() {
        assert_eq!(pixel_data_len(1, 1), Some(4));
        assert_eq!(pixel_data_len(2, 2), Some(16));
        assert_eq!(pixel_data_len(3, 1), Some(12));
        assert_eq!(pixel_data_len(4, 3), Some(36));
        assert_eq!(pixel_data_len(5, 1), Some(16));
    }

    #[test]
    fn oversized_dimensions_rejected() {
        assert!(BmpHeaders::for_dimensions(u32::MAX, 1).is_err());
        assert!(BmpHeaders::for_dimensions(100_000, 100_000).is_err());
    }
}
