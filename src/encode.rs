use std::io::Write as _;
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bitmap::Bitmap;
use crate::bmp::{self, BmpHeaders};
use crate::error::BitmapError;

/// Which headers to write in front of the pixel rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Write the headers the bitmap was decoded with, byte for byte.
    #[default]
    Preserve,
    /// Write canonical 54-byte headers with recomputed sizes, dropping any
    /// extended header bytes.
    Canonical,
}

/// Builder for encoding a [`Bitmap`].
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    headers: HeaderPolicy,
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header_policy(mut self, headers: HeaderPolicy) -> Self {
        self.headers = headers;
        self
    }

    pub fn encode(&self, bitmap: &Bitmap, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        match self.headers {
            HeaderPolicy::Preserve => bmp::encode(bitmap.headers(), bitmap.pixels(), &stop),
            HeaderPolicy::Canonical => {
                let headers = BmpHeaders::for_dimensions(bitmap.width(), bitmap.height())?;
                bmp::encode(&headers, bitmap.pixels(), &stop)
            }
        }
    }

    /// Encode and write to `path`, creating or truncating the file.
    ///
    /// The file is only touched once encoding has succeeded.
    pub fn encode_to_file(
        &self,
        bitmap: &Bitmap,
        path: impl AsRef<Path>,
        stop: impl Stop,
    ) -> Result<(), BitmapError> {
        let path = path.as_ref();
        let bytes = self.encode(bitmap, stop)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(&bytes)?;
        log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

/// Encode a bitmap with the headers it was decoded with.
pub fn encode_bmp(bitmap: &Bitmap, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    EncodeRequest::new().encode(bitmap, stop)
}

/// Encode a bitmap to `path`. Fails with [`BitmapError::Io`] if the
/// destination cannot be opened for writing.
pub fn encode_file(bitmap: &Bitmap, path: impl AsRef<Path>) -> Result<(), BitmapError> {
    EncodeRequest::new().encode_to_file(bitmap, path, Unstoppable)
}
