use crate::error::BitmapError;

/// Geometry of a BMP file, read from its headers without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Byte offset of the pixel array.
    pub pixel_offset: u32,
    /// Bytes per stored row, padding included.
    pub row_stride: usize,
}

impl ImageInfo {
    /// Parse and validate the headers of `data`.
    ///
    /// Applies the same header checks as a Standard decode, but does not
    /// require the pixel array to be present.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        crate::bmp::probe(data)
    }

    /// Length of the pixel array the headers promise.
    pub fn pixel_data_len(&self) -> usize {
        self.row_stride * self.height as usize
    }
}
