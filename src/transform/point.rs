//! Per-sample transforms: negative, grayscale, gamma.

use rgb::RGB8;

use crate::error::BitmapError;
use crate::pixel::PixelBuffer;

/// Invert every channel: `255 - value`.
pub fn negative(buf: &mut PixelBuffer) {
    for px in buf.pixels_mut() {
        *px = RGB8::new(255 - px.r, 255 - px.g, 255 - px.b);
    }
}

/// Replace every channel with `floor((r + g + b) / 3)`.
pub fn grayscale(buf: &mut PixelBuffer) {
    for px in buf.pixels_mut() {
        let avg = ((u16::from(px.r) + u16::from(px.g) + u16::from(px.b)) / 3) as u8;
        *px = RGB8::new(avg, avg, avg);
    }
}

/// Gamma-correct every channel: `(v / 255)^(1 / gamma) * 255`, rounded half up.
///
/// `gamma` must be finite and positive, otherwise
/// [`BitmapError::InvalidArgument`] is returned and the buffer is untouched.
pub fn gamma_correction(buf: &mut PixelBuffer, gamma: f64) -> Result<(), BitmapError> {
    let lut = gamma_lut(gamma)?;
    for px in buf.pixels_mut() {
        *px = RGB8::new(
            lut[usize::from(px.r)],
            lut[usize::from(px.g)],
            lut[usize::from(px.b)],
        );
    }
    Ok(())
}

pub(crate) fn check_gamma(gamma: f64) -> Result<(), BitmapError> {
    if !(gamma.is_finite() && gamma > 0.0) {
        return Err(BitmapError::InvalidArgument(format!(
            "gamma must be a positive finite number, got {gamma}"
        )));
    }
    Ok(())
}

/// Output value for each of the 256 input values.
fn gamma_lut(gamma: f64) -> Result<[u8; 256], BitmapError> {
    check_gamma(gamma)?;
    let exponent = 1.0 / gamma;
    log::trace!("gamma {gamma}: exponent {exponent}");
    // `as u8` saturates, and the base never leaves [0, 1].
    Ok(core::array::from_fn(|v| {
        ((v as f64 / 255.0).powf(exponent) * 255.0 + 0.5) as u8
    }))
}
