//! # bmpfx
//!
//! Uncompressed 24-bit BMP decoder/encoder and in-place pixel transforms.
//!
//! ## Pipeline
//!
//! File bytes are decoded into a [`Bitmap`]: the original headers plus a
//! top-down [`PixelBuffer`] of RGB samples. Transforms mutate the buffer in
//! place, and encoding writes the untouched headers back followed by the
//! bottom-up, BGR, 4-byte-padded rows.
//!
//! ## Transforms
//!
//! - [`negative`]: `255 - value` per channel
//! - [`grayscale`]: `floor((r + g + b) / 3)` on all channels
//! - [`gamma_correction`]: `(value / 255)^(1 / gamma) * 255`, rounded
//! - [`median_filter`]: intensity-ranked median over an odd square window
//!   with replicated edges
//!
//! ## Non-Goals
//!
//! - Palette, 16-bit, 32-bit, or bit-field BMPs
//! - RLE or any other compression
//! - Top-down (negative height) BMPs
//! - Formats other than BMP
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfx::{Transform, decode_file, encode_file};
//!
//! let mut bitmap = decode_file("in.bmp")?;
//! bitmap.apply(&Transform::Median(3))?;
//! bitmap.apply(&"gamma=2.2".parse()?)?;
//! encode_file(&bitmap, "out.bmp")?;
//! # Ok::<(), bmpfx::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bitmap;
mod decode;
mod encode;
mod error;
mod info;
mod limits;
mod pixel;

pub mod bmp;
pub mod transform;

// Re-exports
pub use bitmap::Bitmap;
pub use bmp::{BmpHeaders, BmpPermissiveness, FileHeader, InfoHeader};
pub use decode::{DecodeRequest, decode_bmp, decode_file};
pub use encode::{EncodeRequest, HeaderPolicy, encode_bmp, encode_file};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{BitmapError, ErrorKind};
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{PixelBuffer, intensity};
pub use rgb::RGB8;
pub use transform::{Transform, gamma_correction, grayscale, median_filter, negative};
