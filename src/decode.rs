use std::io::Read as _;
use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bitmap::Bitmap;
use crate::bmp::{self, BmpPermissiveness};
use crate::error::BitmapError;
use crate::limits::Limits;

/// Builder for decoding a BMP held in memory.
///
/// ```no_run
/// use bmpfx::{DecodeRequest, Limits, Unstoppable};
///
/// let data = std::fs::read("photo.bmp")?;
/// let limits = Limits::pixels(64 * 1024 * 1024);
/// let bitmap = DecodeRequest::new(&data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// println!("{}x{}", bitmap.width(), bitmap.height());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    /// Reject images exceeding `limits` before any pixel memory is allocated.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Bitmap, BitmapError> {
        bmp::decode(self.data, self.limits, self.permissiveness, &stop)
    }
}

/// Decode an in-memory BMP with default settings.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Bitmap, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Read and decode the BMP at `path`.
///
/// Fails with [`BitmapError::FileNotFound`] when the file cannot be opened
/// and with a format error when its contents are not a 24-bit BMP.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Bitmap, BitmapError> {
    let path = path.as_ref();
    let mut file = std::fs::File::open(path).map_err(|source| BitmapError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let mut data = Vec::new();
    file.read_to_end(&mut data)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    decode_bmp(&data, Unstoppable)
}
