//! BMP encoder: uncompressed 24-bit, bottom-up rows.

use enough::Stop;

use super::decode::validate_info;
use super::header::{BmpHeaders, pixel_data_len};
use super::utils::row_padding;
use crate::error::BitmapError;
use crate::pixel::PixelBuffer;

/// Write `headers` verbatim followed by the pixel rows, last logical row first.
pub(crate) fn encode_bmp(
    headers: &BmpHeaders,
    pixels: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    check_headers(headers, pixels)?;

    let width = pixels.width();
    let height = pixels.height();
    let data_len =
        pixel_data_len(width, height).ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let total = data_len
        .checked_add(headers.encoded_len())
        .ok_or(BitmapError::DimensionsTooLarge { width, height })?;

    stop.check()?;

    let mut out = Vec::with_capacity(total);
    headers.write_to(&mut out);

    let pad_bytes = row_padding(width as usize);
    for (n, row) in pixels.rows().rev().enumerate() {
        if n % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.extend_from_slice(&[px.b, px.g, px.r]);
        }
        out.extend(core::iter::repeat_n(0u8, pad_bytes));
    }

    debug_assert_eq!(out.len(), total);
    Ok(out)
}

/// Headers must describe the buffer they are written with, and their pixel
/// offset must land right after the serialized header bytes.
pub(crate) fn check_headers(headers: &BmpHeaders, pixels: &PixelBuffer) -> Result<(), BitmapError> {
    validate_info(&headers.info)?;
    if headers.width() != pixels.width() || headers.height() != pixels.height() {
        return Err(BitmapError::InvalidArgument(format!(
            "headers describe {}x{} but the pixel buffer is {}x{}",
            headers.width(),
            headers.height(),
            pixels.width(),
            pixels.height()
        )));
    }
    if &headers.file.magic != b"BM" {
        return Err(BitmapError::UnrecognizedFormat);
    }
    if headers.file.pixel_offset as usize != headers.encoded_len() {
        return Err(BitmapError::InvalidHeader(format!(
            "pixel data offset {} does not match {} header bytes",
            headers.file.pixel_offset,
            headers.encoded_len()
        )));
    }
    Ok(())
}
