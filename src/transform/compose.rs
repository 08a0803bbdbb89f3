//! Two-image composition and edge detection. These transforms produce
//! output whose dimensions differ from the primary image, so they always
//! return a fresh buffer.

use enough::Stop;

use super::extra;
use super::{Outcome, TransformArgs, brightness, channel};
use crate::Rgb8;
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Manhattan distance between two colors in RGB space (0..=765).
fn color_distance(a: Rgb8, b: Rgb8) -> u32 {
    let d = |x: u8, y: u8| u32::from(x.abs_diff(y));
    d(a.r, b.r) + d(a.g, b.g) + d(a.b, b.b)
}

/// Blend the primary and secondary images over their overlapping region
/// (min width × min height). `extra` is the primary image's weight in
/// [0, 1], default 0.5; blended channels round to nearest, ties to even.
pub fn blend_other(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let other = args
        .other
        .ok_or_else(|| BmpError::MissingParameter("other_image".into()))?;
    let p1 = extra::unit_fraction_or(args.extra, 0.5, "the blend percentage")?;
    let p2 = 1.0 - p1;

    let width = image.width().min(other.width());
    let height = image.height().min(other.height());
    let mut result = BitmapBuffer::create_blank(width, height)?;
    for y in 0..height as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..width as i32 {
            let a = image.get_pixel(x, y)?;
            let b = other.get_pixel(x, y)?;
            result.set_pixel(
                x,
                y,
                Rgb8::new(
                    channel(f64::from(a.r) * p1 + f64::from(b.r) * p2),
                    channel(f64::from(a.g) * p1 + f64::from(b.g) * p2),
                    channel(f64::from(a.b) * p1 + f64::from(b.b) * p2),
                ),
            )?;
        }
    }
    Ok(Some(result))
}

/// Composite the secondary image (foreground) over the primary (background),
/// keying out foreground pixels within `extra` Manhattan distance
/// (default 100) of the chosen chroma color. Output takes the background's
/// dimensions; foreground pixels outside it are never drawn.
pub fn chroma_overlay(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let foreground = args
        .other
        .ok_or_else(|| BmpError::MissingParameter("other_image".into()))?;
    let tolerance = extra::int_or(args.extra, 100);

    let mut result = BitmapBuffer::create_blank(image.width(), image.height())?;
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let background_px = image.get_pixel(x, y)?;
            let out = if (x as u32) < foreground.width() && (y as u32) < foreground.height() {
                let fg = foreground.get_pixel(x, y)?;
                if i64::from(color_distance(fg, args.color)) < tolerance {
                    background_px
                } else {
                    fg
                }
            } else {
                background_px
            };
            result.set_pixel(x, y, out)?;
        }
    }
    Ok(Some(result))
}

/// Edge detection against the right neighbor: where the brightness delta
/// exceeds `extra` (default 10), mark the chosen color, else white. The
/// output is one pixel narrower than the input.
pub fn make_line_drawing(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let tolerance = extra::int_or(args.extra, 10);

    // Width 1 leaves no neighbor to compare; create_blank rejects it.
    let mut result = BitmapBuffer::create_blank(image.width() - 1, image.height())?;
    for y in 0..result.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..result.width() as i32 {
            let here = i64::from(brightness(image.get_pixel(x, y)?));
            let right = i64::from(brightness(image.get_pixel(x + 1, y)?));
            let out = if (here - right).abs() > tolerance {
                args.color
            } else {
                Rgb8::new(255, 255, 255)
            };
            result.set_pixel(x, y, out)?;
        }
    }
    Ok(Some(result))
}
