//! Positional fades: blend each pixel with the chosen color by a fraction
//! derived from its row or column position.

use enough::Stop;

use super::{Outcome, TransformArgs, channel};
use crate::Rgb8;
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

fn mix(px: Rgb8, color: Rgb8, keep: f64) -> Rgb8 {
    let fade = 1.0 - keep;
    Rgb8::new(
        channel(f64::from(px.r) * keep + f64::from(color.r) * fade),
        channel(f64::from(px.g) * keep + f64::from(color.g) * fade),
        channel(f64::from(px.b) * keep + f64::from(color.b) * fade),
    )
}

fn fade_rows(
    image: &mut BitmapBuffer,
    color: Rgb8,
    stop: &dyn Stop,
    keep_for_row: impl Fn(f64, f64) -> f64,
) -> Result<Outcome, BmpError> {
    // Guard the one-row case against dividing by zero.
    let span = f64::from(image.height().max(2) - 1);
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        let keep = keep_for_row(f64::from(y), span);
        for x in 0..image.width() as i32 {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(x, y, mix(px, color, keep))?;
        }
    }
    Ok(None)
}

fn fade_cols(
    image: &mut BitmapBuffer,
    color: Rgb8,
    stop: &dyn Stop,
    keep_for_col: impl Fn(f64, f64) -> f64,
) -> Result<Outcome, BmpError> {
    let span = f64::from(image.width().max(2) - 1);
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let keep = keep_for_col(f64::from(x), span);
            let px = image.get_pixel(x, y)?;
            image.set_pixel(x, y, mix(px, color, keep))?;
        }
    }
    Ok(None)
}

/// Row 0 is fully the chosen color; the last row is fully the original.
pub fn fade_in_vertical(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    fade_rows(image, args.color, stop, |y, span| y / span)
}

/// Row 0 is fully the original; the last row is fully the chosen color.
pub fn fade_out_vertical(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    fade_rows(image, args.color, stop, |y, span| 1.0 - y / span)
}

/// Column 0 is fully the chosen color; the last column fully the original.
pub fn fade_in_horizontal(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    fade_cols(image, args.color, stop, |x, span| x / span)
}

/// Column 0 is fully the original; the last column fully the chosen color.
pub fn fade_out_horizontal(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    fade_cols(image, args.color, stop, |x, span| 1.0 - x / span)
}
