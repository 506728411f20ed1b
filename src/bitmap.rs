use enough::Unstoppable;

use crate::bmp::BmpHeaders;
use crate::error::BitmapError;
use crate::pixel::PixelBuffer;
use crate::transform::Transform;

/// A decoded BMP: the headers it was read with plus its pixels.
///
/// Transforms never change geometry, so the headers stay valid for the
/// lifetime of the bitmap and are written back unchanged on encode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    headers: BmpHeaders,
    pixels: PixelBuffer,
}

impl Bitmap {
    /// Wrap an in-memory buffer with freshly synthesized 54-byte headers.
    pub fn new(pixels: PixelBuffer) -> Result<Self, BitmapError> {
        let headers = BmpHeaders::for_dimensions(pixels.width(), pixels.height())?;
        Ok(Self { headers, pixels })
    }

    /// Pair a buffer with explicit headers.
    ///
    /// The headers must be 24-bit, uncompressed, bottom-up, and describe the
    /// same width and height as `pixels`.
    pub fn from_parts(headers: BmpHeaders, pixels: PixelBuffer) -> Result<Self, BitmapError> {
        crate::bmp::check_headers(&headers, &pixels)?;
        Ok(Self { headers, pixels })
    }

    pub(crate) fn from_decoded(headers: BmpHeaders, pixels: PixelBuffer) -> Self {
        Self { headers, pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn headers(&self) -> &BmpHeaders {
        &self.headers
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Mutable access to the samples. Geometry is fixed.
    pub fn pixels_mut(&mut self) -> &mut PixelBuffer {
        &mut self.pixels
    }

    pub fn into_parts(self) -> (BmpHeaders, PixelBuffer) {
        (self.headers, self.pixels)
    }

    /// Apply a transform to the pixels in place.
    pub fn apply(&mut self, transform: &Transform) -> Result<(), BitmapError> {
        transform.apply(&mut self.pixels, Unstoppable)
    }
}
