//! Median filter ranking neighborhood samples by intensity.

use enough::Stop;
use rgb::RGB8;

use crate::error::BitmapError;
use crate::pixel::{PixelBuffer, intensity};

/// A neighborhood sample with its rank key: intensity, then scan position.
type Ranked = (u16, usize, RGB8);

pub(crate) fn check_window(window: usize) -> Result<(), BitmapError> {
    if window == 0 || window % 2 == 0 {
        return Err(BitmapError::InvalidArgument(format!(
            "median window must be a positive odd number, got {window}"
        )));
    }
    Ok(())
}

/// Replace every pixel with the median-intensity sample of its
/// `window` x `window` neighborhood.
///
/// Out-of-bounds neighbors repeat the nearest edge pixel. Samples are ranked
/// by `r + g + b`, equal intensities keep their row-major order within the
/// window, and the middle one is copied whole. Every neighborhood is read
/// from the unmodified input.
pub(crate) fn median_filter(
    buf: &mut PixelBuffer,
    window: usize,
    stop: &dyn Stop,
) -> Result<(), BitmapError> {
    check_window(window)?;
    let area = window.checked_mul(window).ok_or_else(|| {
        BitmapError::InvalidArgument(format!("median window {window} is too large"))
    })?;
    stop.check()?;
    if window == 1 {
        return Ok(());
    }

    let w = buf.width() as usize;
    let h = buf.height() as usize;
    log::trace!("median filter {window}x{window} over {w}x{h}");

    let mut scratch: Vec<Ranked> = Vec::new();
    scratch.try_reserve_exact(area).map_err(|_| {
        BitmapError::LimitExceeded(format!("cannot allocate a {window}x{window} window"))
    })?;

    let src = buf.pixels();
    let filtered = filter_rows(src, w, h, window / 2, scratch, stop)?;
    buf.replace_pixels(filtered);
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn filter_rows(
    src: &[RGB8],
    w: usize,
    h: usize,
    half: usize,
    mut scratch: Vec<Ranked>,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, BitmapError> {
    let mut out = Vec::with_capacity(src.len());
    for row in 0..h {
        stop.check()?;
        for col in 0..w {
            out.push(median_at(src, w, h, row, col, half, &mut scratch));
        }
    }
    Ok(out)
}

#[cfg(feature = "parallel")]
fn filter_rows(
    src: &[RGB8],
    w: usize,
    h: usize,
    half: usize,
    scratch: Vec<Ranked>,
    stop: &dyn Stop,
) -> Result<Vec<RGB8>, BitmapError> {
    use rayon::prelude::*;

    let area = scratch.capacity();
    drop(scratch);
    let mut out = vec![RGB8::default(); src.len()];
    out.par_chunks_mut(w).enumerate().try_for_each_init(
        || Vec::with_capacity(area),
        |scratch, (row, dst)| -> Result<(), BitmapError> {
            stop.check()?;
            for (col, px) in dst.iter_mut().enumerate() {
                *px = median_at(src, w, h, row, col, half, scratch);
            }
            Ok(())
        },
    )?;
    Ok(out)
}

fn median_at(
    src: &[RGB8],
    w: usize,
    h: usize,
    row: usize,
    col: usize,
    half: usize,
    scratch: &mut Vec<Ranked>,
) -> RGB8 {
    scratch.clear();
    for dy in 0..=2 * half {
        let r = (row + dy).saturating_sub(half).min(h - 1);
        let line = &src[r * w..(r + 1) * w];
        for dx in 0..=2 * half {
            let c = (col + dx).saturating_sub(half).min(w - 1);
            let px = line[c];
            scratch.push((intensity(px), scratch.len(), px));
        }
    }
    let mid = scratch.len() / 2;
    let (_, _, px) = *scratch
        .select_nth_unstable_by_key(mid, |&(i, order, _)| (i, order))
        .1;
    px
}
