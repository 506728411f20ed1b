//! BMP decoder for bottom-up, uncompressed, 24 bits per pixel.

use enough::Stop;
use rgb::RGB8;

use super::header::{
    BmpHeaders, FILE_HEADER_SIZE, FileHeader, HEADERS_END, INFO_HEADER_SIZE, InfoHeader,
    pixel_data_len,
};
use super::utils::row_padding;
use crate::error::BitmapError;
use crate::pixel::PixelBuffer;

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates informational header fields.
///
/// Fields that affect pixel layout (magic, bit depth, compression, geometry,
/// pixel offset, data length) are always validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Also reject: planes != 1, a non-zero file size field that does not
    /// match the input length, and an info header smaller than 40 bytes.
    Strict,

    /// Default behavior. Informational fields are passed through unchecked;
    /// deviations Strict would reject are logged at `warn` level.
    #[default]
    Standard,
}

// ── Header parsing ──────────────────────────────────────────────────

/// Parse and validate both headers and capture any bytes up to the pixel offset.
pub(crate) fn parse_headers(
    data: &[u8],
    permissiveness: BmpPermissiveness,
) -> Result<BmpHeaders, BitmapError> {
    let is_strict = permissiveness == BmpPermissiveness::Strict;

    match data.get(0..2) {
        Some(b"BM") => {}
        Some(_) => return Err(BitmapError::UnrecognizedFormat),
        None => return Err(BitmapError::UnexpectedEof),
    }

    let (file_bytes, rest) = data
        .split_first_chunk::<FILE_HEADER_SIZE>()
        .ok_or(BitmapError::UnexpectedEof)?;
    let (info_bytes, _) = rest
        .split_first_chunk::<INFO_HEADER_SIZE>()
        .ok_or(BitmapError::UnexpectedEof)?;
    let file = FileHeader::parse(file_bytes);
    let info = InfoHeader::parse(info_bytes);

    validate_info(&info)?;

    if (info.header_size as usize) < INFO_HEADER_SIZE {
        if is_strict {
            return Err(BitmapError::InvalidHeader(format!(
                "info header size {} is smaller than {INFO_HEADER_SIZE}",
                info.header_size
            )));
        }
        log::warn!(
            "BMP info header size {} is smaller than {INFO_HEADER_SIZE}",
            info.header_size
        );
    }

    if info.planes != 1 {
        if is_strict {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP planes field is {}, expected 1",
                info.planes
            )));
        }
        log::warn!("BMP planes field is {}, expected 1", info.planes);
    }

    if file.file_size != 0 && file.file_size as usize != data.len() {
        if is_strict {
            return Err(BitmapError::InvalidHeader(format!(
                "BMP file size field ({}) doesn't match actual size ({})",
                file.file_size,
                data.len()
            )));
        }
        log::warn!(
            "BMP file size field ({}) doesn't match actual size ({})",
            file.file_size,
            data.len()
        );
    }

    let offset = file.pixel_offset as usize;
    if offset < HEADERS_END || offset > data.len() {
        return Err(BitmapError::InvalidHeader(format!(
            "pixel data offset {offset} outside {HEADERS_END}..={}",
            data.len()
        )));
    }

    let headers = BmpHeaders {
        file,
        info,
        extra: data[HEADERS_END..offset].to_vec(),
    };
    log::debug!(
        "BMP {}x{}, pixel offset {offset}, {} extended header bytes",
        headers.width(),
        headers.height(),
        headers.extra.len()
    );
    Ok(headers)
}

/// Checks shared by the decoder and the encoder: the fields that decide how
/// the pixel array is laid out.
pub(crate) fn validate_info(info: &InfoHeader) -> Result<(), BitmapError> {
    if info.bits_per_pixel != 24 {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP bit depth {} unsupported, only 24 is accepted",
            info.bits_per_pixel
        )));
    }
    if info.compression != 0 {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP compression {} unsupported, only uncompressed (0) is accepted",
            info.compression
        )));
    }
    if info.width <= 0 {
        return Err(BitmapError::InvalidHeader(format!(
            "BMP width must be positive, got {}",
            info.width
        )));
    }
    if info.height < 0 {
        return Err(BitmapError::UnsupportedVariant(format!(
            "top-down BMP (height {}) unsupported",
            info.height
        )));
    }
    if info.height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }
    Ok(())
}

// ── Pixel data ──────────────────────────────────────────────────────

/// Read the bottom-up BGR rows into a top-down RGB buffer.
pub(crate) fn decode_pixels(
    data: &[u8],
    headers: &BmpHeaders,
    stop: &dyn Stop,
) -> Result<PixelBuffer, BitmapError> {
    let width = headers.width();
    let height = headers.height();
    let w = width as usize;
    let h = height as usize;

    let needed =
        pixel_data_len(width, height).ok_or(BitmapError::DimensionsTooLarge { width, height })?;
    let offset = headers.file.pixel_offset as usize;
    let pixel_data = data
        .get(offset..)
        .and_then(|rest| rest.get(..needed))
        .ok_or(BitmapError::UnexpectedEof)?;

    let mut pixels = vec![RGB8::default(); w * h];
    let stride = w * 3 + row_padding(w);

    // Stored row 0 is the bottom of the image.
    for (stored, src) in pixel_data.chunks_exact(stride).enumerate() {
        if stored % 16 == 0 {
            stop.check()?;
        }
        let row = h - 1 - stored;
        let dst = &mut pixels[row * w..(row + 1) * w];
        for (px, bgr) in dst.iter_mut().zip(src[..w * 3].chunks_exact(3)) {
            *px = RGB8::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    PixelBuffer::from_pixels(width, height, pixels)
}
