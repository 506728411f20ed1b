//! In-place pixel transforms. None of them changes geometry.

mod median;
mod point;

use core::fmt;
use core::str::FromStr;

use enough::{Stop, Unstoppable};

use crate::error::BitmapError;
use crate::pixel::PixelBuffer;

pub use point::{gamma_correction, grayscale, negative};

/// Median filter with a `window` x `window` neighborhood.
///
/// `window` must be positive and odd, otherwise
/// [`BitmapError::InvalidArgument`] is returned and the buffer is untouched.
pub fn median_filter(buf: &mut PixelBuffer, window: usize) -> Result<(), BitmapError> {
    median::median_filter(buf, window, &Unstoppable)
}

/// One of the supported pixel transforms, with its parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Negative,
    Grayscale,
    /// Gamma correction; the value is gamma, samples are raised to `1 / gamma`.
    Gamma(f64),
    /// Median filter; the value is the window size.
    Median(usize),
}

impl Transform {
    /// Reject parameters the transform cannot run with.
    pub fn validate(&self) -> Result<(), BitmapError> {
        match *self {
            Self::Negative | Self::Grayscale => Ok(()),
            Self::Gamma(gamma) => point::check_gamma(gamma),
            Self::Median(window) => median::check_window(window),
        }
    }

    /// Run the transform over `buf`.
    ///
    /// On error (bad parameter or cancellation) `buf` is left unchanged.
    pub fn apply(&self, buf: &mut PixelBuffer, stop: impl Stop) -> Result<(), BitmapError> {
        self.validate()?;
        log::trace!("applying {} to {}x{}", self, buf.width(), buf.height());
        match *self {
            Self::Negative => {
                stop.check()?;
                negative(buf);
            }
            Self::Grayscale => {
                stop.check()?;
                grayscale(buf);
            }
            Self::Gamma(gamma) => {
                stop.check()?;
                gamma_correction(buf, gamma)?;
            }
            Self::Median(window) => median::median_filter(buf, window, &stop)?,
        }
        Ok(())
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => f.write_str("negative"),
            Self::Grayscale => f.write_str("grayscale"),
            Self::Gamma(gamma) => write!(f, "gamma={gamma}"),
            Self::Median(window) => write!(f, "median={window}"),
        }
    }
}

/// Parses `negative`, `grayscale`, `gamma=<g>`, and `median=<n>`.
///
/// Parameters are validated, so a parsed transform always applies cleanly.
impl FromStr for Transform {
    type Err = BitmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, param) = match s.split_once('=') {
            Some((name, param)) => (name.trim(), Some(param.trim())),
            None => (s, None),
        };
        let bad = |what: &str| BitmapError::InvalidArgument(format!("{what} in transform '{s}'"));

        let transform = match (name.to_ascii_lowercase().as_str(), param) {
            ("negative", None) => Self::Negative,
            ("grayscale" | "greyscale", None) => Self::Grayscale,
            ("gamma", Some(p)) => Self::Gamma(p.parse().map_err(|_| bad("invalid gamma"))?),
            ("median", Some(p)) => Self::Median(p.parse().map_err(|_| bad("invalid window"))?),
            ("negative" | "grayscale" | "greyscale", Some(_)) => {
                return Err(bad("unexpected parameter"));
            }
            ("gamma" | "median", None) => return Err(bad("missing parameter")),
            _ => return Err(bad("unknown transform")),
        };
        transform.validate()?;
        Ok(transform)
    }
}
