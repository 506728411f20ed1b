use rgb::{ComponentBytes as _, RGB8};

use crate::error::BitmapError;

/// Sum of the three channels of a sample, used to rank samples by brightness.
#[inline]
pub fn intensity(px: RGB8) -> u16 {
    u16::from(px.r) + u16::from(px.g) + u16::from(px.b)
}

/// Decoded 24-bit image: `width * height` RGB samples, row-major, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<RGB8>,
}

impl PixelBuffer {
    /// An all-black buffer.
    ///
    /// Returns [`BitmapError::InvalidArgument`] for a zero dimension and
    /// [`BitmapError::DimensionsTooLarge`] if the sample count overflows.
    pub fn new(width: u32, height: u32) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![RGB8::default(); len],
        })
    }

    /// Wrap existing samples. `pixels.len()` must equal `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<RGB8>) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(BitmapError::BufferTooSmall {
                needed: len,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<RGB8> {
        self.index(row, col).map(|i| self.pixels[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut RGB8> {
        self.index(row, col).map(move |i| &mut self.pixels[i])
    }

    /// One logical row, or `None` when `row >= height`.
    pub fn row(&self, row: usize) -> Option<&[RGB8]> {
        let w = self.width as usize;
        (row < self.height as usize).then(|| &self.pixels[row * w..(row + 1) * w])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> core::slice::ChunksExact<'_, RGB8> {
        self.pixels.chunks_exact(self.width as usize)
    }

    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [RGB8] {
        &mut self.pixels
    }

    /// The samples as packed `R, G, B` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.pixels.as_bytes()
    }

    pub fn into_pixels(self) -> Vec<RGB8> {
        self.pixels
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width as usize, self.height as usize)
    }

    /// Copy into an owned [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(
            self.pixels.clone(),
            self.width as usize,
            self.height as usize,
        )
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height as usize && col < self.width as usize)
            .then(|| row * self.width as usize + col)
    }

    pub(crate) fn replace_pixels(&mut self, pixels: Vec<RGB8>) {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        self.pixels = pixels;
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidArgument(format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(BitmapError::DimensionsTooLarge { width, height })
}
