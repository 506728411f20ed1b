//! Uncompressed 24-bit BMP container: header types, decoder, and encoder.
//!
//! Decoding and encoding go through top-level [`crate::decode_bmp`],
//! [`crate::encode_bmp`], etc.

mod decode;
mod encode;
mod header;
mod utils;

pub use decode::BmpPermissiveness;
pub(crate) use encode::check_headers;
pub use header::{BmpHeaders, FileHeader, InfoHeader};

use enough::Stop;

use crate::bitmap::Bitmap;
use crate::error::BitmapError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;

/// Decode a whole BMP file held in memory.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Bitmap, BitmapError> {
    let headers = decode::parse_headers(data, permissiveness)?;
    if let Some(limits) = limits {
        limits.check(headers.width(), headers.height())?;
    }
    stop.check()?;
    let pixels = decode::decode_pixels(data, &headers, stop)?;
    Ok(Bitmap::from_decoded(headers, pixels))
}

/// Header-only parse for [`ImageInfo`].
pub(crate) fn probe(data: &[u8]) -> Result<ImageInfo, BitmapError> {
    let headers = decode::parse_headers(data, BmpPermissiveness::Standard)?;
    let width = headers.width();
    Ok(ImageInfo {
        width,
        height: headers.height(),
        pixel_offset: headers.file.pixel_offset,
        row_stride: width as usize * 3 + utils::row_padding(width as usize),
    })
}

/// Encode `pixels`, writing `headers` in front of the pixel rows.
pub(crate) fn encode(
    headers: &BmpHeaders,
    pixels: &PixelBuffer,
    stop: &dyn Stop,
) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(headers, pixels, stop)
}
