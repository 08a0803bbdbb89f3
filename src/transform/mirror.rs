//! In-place mirroring: copy one half of the image over the other.

use enough::Stop;

use super::{Outcome, TransformArgs};
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Copy the bottom half (rows below height/2 in file order) over the top.
pub fn mirror_bottom_vertical(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let h = image.height() as i32;
    for y in 0..h / 2 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(x, h - 1 - y, px)?;
        }
    }
    Ok(None)
}

/// Copy the top half over the bottom.
pub fn mirror_top_vertical(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let h = image.height() as i32;
    for y in ((h / 2 + 1)..h).rev() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(x, h - 1 - y, px)?;
        }
    }
    Ok(None)
}

/// Copy the left half over the right.
pub fn mirror_left_horizontal(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let w = image.width() as i32;
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..w / 2 {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(w - 1 - x, y, px)?;
        }
    }
    Ok(None)
}

/// Copy the right half over the left.
pub fn mirror_right_horizontal(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let w = image.width() as i32;
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in ((w / 2 + 1)..w).rev() {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(w - 1 - x, y, px)?;
        }
    }
    Ok(None)
}
