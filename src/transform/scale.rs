//! Resampling: decimating and box-averaging shrinks, replicating and
//! smoothed enlarges, and arbitrary nearest-neighbor resize.

use enough::Stop;

use super::extra;
use super::{Outcome, TransformArgs, channel, round_coord};
use crate::Rgb8;
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Halve the image by sampling every other pixel (no averaging). Output
/// dimensions are round(extent / 2), ties-to-even.
pub fn shrink(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let width = round_coord(f64::from(image.width()) / 2.0) as u32;
    let height = round_coord(f64::from(image.height()) / 2.0) as u32;
    let mut small = BitmapBuffer::create_blank(width, height)?;
    for y in 0..height as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width as i32 {
            let px = image.get_pixel(x * 2, y * 2)?;
            small.set_pixel(x, y, px)?;
        }
    }
    Ok(Some(small))
}

/// Halve the image by averaging each 2×2 block. Output dimensions are
/// ⌊extent / 2⌋.
pub fn better_shrink(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let mut small = BitmapBuffer::create_blank(image.width() / 2, image.height() / 2)?;
    for y in 0..small.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..small.width() as i32 {
            let block = [
                image.get_pixel(x * 2, y * 2)?,
                image.get_pixel(x * 2 + 1, y * 2)?,
                image.get_pixel(x * 2, y * 2 + 1)?,
                image.get_pixel(x * 2 + 1, y * 2 + 1)?,
            ];
            let sum = |f: fn(Rgb8) -> u8| -> f64 {
                block.iter().map(|&px| f64::from(f(px))).sum()
            };
            small.set_pixel(
                x,
                y,
                Rgb8::new(
                    channel(sum(|px| px.r) / 4.0),
                    channel(sum(|px| px.g) / 4.0),
                    channel(sum(|px| px.b) / 4.0),
                ),
            )?;
        }
    }
    Ok(Some(small))
}

/// Double the image by replicating each pixel into a 2×2 block.
pub fn enlarge(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    Ok(Some(enlarge_impl(image, stop)?))
}

fn enlarge_impl(image: &BitmapBuffer, stop: &dyn Stop) -> Result<BitmapBuffer, BmpError> {
    let width = image
        .width()
        .checked_mul(2)
        .ok_or(BmpError::InvalidDimensions {
            width: i64::from(image.width()) * 2,
            height: i64::from(image.height()),
        })?;
    let height = image
        .height()
        .checked_mul(2)
        .ok_or(BmpError::InvalidDimensions {
            width: i64::from(width),
            height: i64::from(image.height()) * 2,
        })?;
    let mut large = BitmapBuffer::create_blank(width, height)?;
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let px = image.get_pixel(x, y)?;
            large.set_pixel(x * 2, y * 2, px)?;
            large.set_pixel(x * 2 + 1, y * 2, px)?;
            large.set_pixel(x * 2, y * 2 + 1, px)?;
            large.set_pixel(x * 2 + 1, y * 2 + 1, px)?;
        }
    }
    Ok(large)
}

/// `enlarge` followed by a box-smoothing pass: each output pixel averages
/// itself and its in-bounds orthogonal neighbors (5 terms in the interior,
/// 4 on edges, 3 in corners).
pub fn better_enlarge(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let enlarged = enlarge_impl(image, stop)?;
    let mut smoothed = BitmapBuffer::create_blank(enlarged.width(), enlarged.height())?;
    let w = enlarged.width() as i32;
    let h = enlarged.height() as i32;
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w {
            let mut sum = (0.0f64, 0.0f64, 0.0f64);
            let mut count = 0u32;
            for (nx, ny) in [(x, y), (x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
                if nx < 0 || ny < 0 || nx >= w || ny >= h {
                    continue;
                }
                let px = enlarged.get_pixel(nx, ny)?;
                sum.0 += f64::from(px.r);
                sum.1 += f64::from(px.g);
                sum.2 += f64::from(px.b);
                count += 1;
            }
            let n = f64::from(count);
            smoothed.set_pixel(
                x,
                y,
                Rgb8::new(channel(sum.0 / n), channel(sum.1 / n), channel(sum.2 / n)),
            )?;
        }
    }
    Ok(Some(smoothed))
}

/// Nearest-neighbor resize by `extra` (required float > 0). Output
/// dimensions truncate `extent * multiplier`; each destination pixel
/// samples `floor(dest / multiplier)` in the source.
pub fn resize(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let multiplier = extra::require_float(args.extra, "the multiplier")?;
    if multiplier <= 0.0 {
        return Err(BmpError::InvalidParameter(alloc::format!(
            "the multiplier must be greater than zero, got {multiplier}"
        )));
    }
    let width = (f64::from(image.width()) * multiplier) as u32;
    let height = (f64::from(image.height()) * multiplier) as u32;
    let mut resized = BitmapBuffer::create_blank(width, height)?;
    for y in 0..height as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width as i32 {
            let sx = (f64::from(x) / multiplier) as i32;
            let sy = (f64::from(y) / multiplier) as i32;
            let px = image.get_pixel(sx, sy)?;
            resized.set_pixel(x, y, px)?;
        }
    }
    Ok(Some(resized))
}
