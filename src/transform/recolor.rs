//! Whole-image per-pixel recoloring: channel removal/saturation, negation,
//! channel shuffles, lightness scaling, and grayscale conversion.

use enough::Stop;

use super::{Outcome, TransformArgs, brightness, channel, map_pixels};
use crate::Rgb8;
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Every pixel becomes the chosen color.
pub fn fill(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let color = args.color;
    map_pixels(image, stop, |_| color)?;
    Ok(None)
}

/// Every pixel becomes pure red.
pub fn make_red(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |_| Rgb8::new(255, 0, 0))?;
    Ok(None)
}

pub fn remove_red(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(0, px.g, px.b))?;
    Ok(None)
}

pub fn remove_green(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, 0, px.b))?;
    Ok(None)
}

pub fn remove_blue(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, px.g, 0))?;
    Ok(None)
}

pub fn max_red(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(255, px.g, px.b))?;
    Ok(None)
}

pub fn max_green(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, 255, px.b))?;
    Ok(None)
}

pub fn max_blue(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, px.g, 255))?;
    Ok(None)
}

/// Zero every channel except blue.
pub fn only_blue(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(0, 0, px.b))?;
    Ok(None)
}

/// Zero every channel except green.
pub fn only_green(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(0, px.g, 0))?;
    Ok(None)
}

/// Zero every channel except red.
pub fn only_red(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, 0, 0))?;
    Ok(None)
}

/// Scale every channel by 1.5, saturating at 255.
pub fn lighten(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        Rgb8::new(
            channel(f64::from(px.r) * 1.5),
            channel(f64::from(px.g) * 1.5),
            channel(f64::from(px.b) * 1.5),
        )
    })?;
    Ok(None)
}

/// Halve every channel.
pub fn darken(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        Rgb8::new(
            channel(f64::from(px.r) / 2.0),
            channel(f64::from(px.g) / 2.0),
            channel(f64::from(px.b) / 2.0),
        )
    })?;
    Ok(None)
}

/// Replace every pixel with its brightness average (round(sum / 3)).
pub fn make_gray(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let gray = channel(f64::from(brightness(px)) / 3.0);
        Rgb8::new(gray, gray, gray)
    })?;
    Ok(None)
}

/// Pull each channel halfway toward the pixel's mean brightness, a gentler
/// desaturation than `make_gray`.
pub fn grayify(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let mean = f64::from(brightness(px)) / 3.0;
        Rgb8::new(
            channel((f64::from(px.r) + mean) / 2.0),
            channel((f64::from(px.g) + mean) / 2.0),
            channel((f64::from(px.b) + mean) / 2.0),
        )
    })?;
    Ok(None)
}

pub fn negate(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        Rgb8::new(255 - px.r, 255 - px.g, 255 - px.b)
    })?;
    Ok(None)
}

pub fn negate_red(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(255 - px.r, px.g, px.b))?;
    Ok(None)
}

pub fn negate_green(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, 255 - px.g, px.b))?;
    Ok(None)
}

pub fn negate_blue(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, px.g, 255 - px.b))?;
    Ok(None)
}

// The swap_* family is named for the file-order (b, g, r) byte shuffle it
// performs.

/// File bytes (b, g, r) rewritten as (g, b, r).
pub fn swap_gbr(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.r, px.b, px.g))?;
    Ok(None)
}

/// File bytes (b, g, r) rewritten as (r, g, b); swaps red and blue.
pub fn swap_rgb(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.b, px.g, px.r))?;
    Ok(None)
}

/// File bytes (b, g, r) rewritten as (b, r, g).
pub fn swap_brg(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.g, px.r, px.b))?;
    Ok(None)
}

/// File bytes (b, g, r) rewritten as (r, b, g).
pub fn swap_rbg(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.g, px.b, px.r))?;
    Ok(None)
}

/// File bytes (b, g, r) rewritten as (g, r, b).
pub fn swap_grb(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| Rgb8::new(px.b, px.r, px.g))?;
    Ok(None)
}
