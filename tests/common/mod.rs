//! Shared helpers: pattern generators and a hand-rolled BMP byte builder.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use bmpfx::{PixelBuffer, RGB8, Stop, StopReason};

/// Stop token that allows `allowed` checks and cancels every one after.
pub struct CancelAfter {
    allowed: usize,
    calls: AtomicUsize,
}

impl CancelAfter {
    pub fn new(allowed: usize) -> Self {
        Self {
            allowed,
            calls: AtomicUsize::new(0),
        }
    }

    /// Counts checks without ever cancelling.
    pub fn never() -> Self {
        Self::new(usize::MAX)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Stop for CancelAfter {
    fn check(&self) -> Result<(), StopReason> {
        if self.calls.fetch_add(1, Ordering::SeqCst) < self.allowed {
            Ok(())
        } else {
            Err(StopReason::Cancelled)
        }
    }
}

pub fn checkerboard(w: u32, h: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((w * h) as usize);
    for y in 0..h {
        for x in 0..w {
            pixels.push(if (x + y) % 2 == 0 {
                RGB8::new(200, 220, 240)
            } else {
                RGB8::new(10, 40, 70)
            });
        }
    }
    PixelBuffer::from_pixels(w, h, pixels).unwrap()
}

/// Xorshift noise; `modulo` narrows the channel range to force intensity ties.
pub fn noise(w: u32, h: u32, seed: u32, modulo: u16) -> PixelBuffer {
    let mut state = seed | 1;
    let mut next = || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state % u32::from(modulo)) as u8
    };
    let pixels = (0..w * h).map(|_| RGB8::new(next(), next(), next())).collect();
    PixelBuffer::from_pixels(w, h, pixels).unwrap()
}

pub fn uniform(w: u32, h: u32, px: RGB8) -> PixelBuffer {
    PixelBuffer::from_pixels(w, h, vec![px; (w * h) as usize]).unwrap()
}

/// BMP file assembled field by field, independent of the crate's encoder.
#[derive(Clone, Debug)]
pub struct RawBmp {
    pub width: i32,
    pub height: i32,
    pub planes: u16,
    pub bpp: u16,
    pub compression: u32,
    pub header_size: u32,
    pub reserved: [u16; 2],
    pub resolution: [i32; 2],
    /// `None` writes the real total length.
    pub file_size: Option<u32>,
    /// `None` points right after the headers and `extra`.
    pub pixel_offset: Option<u32>,
    /// Bytes between the 40-byte info header and the pixel array.
    pub extra: Vec<u8>,
    /// Stored rows, bottom-up, BGR, padding included.
    pub pixel_data: Vec<u8>,
}

impl RawBmp {
    pub fn rgb24(width: i32, height: i32, pixel_data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            planes: 1,
            bpp: 24,
            compression: 0,
            header_size: 40,
            reserved: [0, 0],
            resolution: [2835, 2835],
            file_size: None,
            pixel_offset: None,
            extra: Vec::new(),
            pixel_data,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let offset = self
            .pixel_offset
            .unwrap_or(54 + self.extra.len() as u32);
        let total = 54 + self.extra.len() + self.pixel_data.len();
        let file_size = self.file_size.unwrap_or(total as u32);

        let mut out = Vec::with_capacity(total);
        out.extend_from_slice(b"BM");
        out.extend_from_slice(&file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved[0].to_le_bytes());
        out.extend_from_slice(&self.reserved[1].to_le_bytes());
        out.extend_from_slice(&offset.to_le_bytes());

        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bpp.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&(self.pixel_data.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.resolution[0].to_le_bytes());
        out.extend_from_slice(&self.resolution[1].to_le_bytes());
        out.extend_from_slice(&0u32.to_le_bytes()); // colors used
        out.extend_from_slice(&0u32.to_le_bytes()); // important colors
        assert_eq!(out.len(), 54);

        out.extend_from_slice(&self.extra);
        out.extend_from_slice(&self.pixel_data);
        out
    }
}
