use crate::error::BitmapError;

/// Resource limits applied by the decoder before the pixel buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size in bytes of the decoded RGB buffer (3 bytes per pixel).
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits that only cap the pixel count.
    pub fn pixels(max_pixels: u64) -> Self {
        Self {
            max_pixels: Some(max_pixels),
            ..Self::default()
        }
    }

    /// Check an image geometry against every configured bound.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), BitmapError> {
        let (w, h) = (u64::from(width), u64::from(height));
        let pixels = w * h;
        let bytes = pixels.saturating_mul(3);

        let exceeded = |what: &str, value: u64, max: Option<u64>| match max {
            Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
                "{what} {value} exceeds limit {max}"
            ))),
            _ => Ok(()),
        };

        exceeded("width", w, self.max_width)?;
        exceeded("height", h, self.max_height)?;
        exceeded("pixel count", pixels, self.max_pixels)?;
        exceeded("buffer size in bytes", bytes, self.max_memory_bytes)
    }
}
