//! Brightness bucketing, color ramps, saturation, and contrast.
//!
//! Brightness is always the plain channel sum (0..=765); the two-tone split
//! point is 382.5, half of the maximum.

use enough::Stop;

use super::extra;
use super::{Outcome, TransformArgs, brightness, channel, map_pixels};
use crate::Rgb8;
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

const TWO_TONE_SPLIT: f64 = 382.5;

/// Dark pixels ramp up through red, bright pixels from red to white.
pub fn redify(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let sum = f64::from(brightness(px));
        if sum < TWO_TONE_SPLIT {
            Rgb8::new(channel(sum / TWO_TONE_SPLIT * 255.0), 0, 0)
        } else {
            let rest = channel((sum - TWO_TONE_SPLIT) / TWO_TONE_SPLIT * 255.0);
            Rgb8::new(255, rest, rest)
        }
    })?;
    Ok(None)
}

/// Dark pixels ramp up through green, bright pixels from green to white.
pub fn greenify(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let sum = f64::from(brightness(px));
        if sum < TWO_TONE_SPLIT {
            Rgb8::new(0, channel(sum / TWO_TONE_SPLIT * 255.0), 0)
        } else {
            let rest = channel((sum - TWO_TONE_SPLIT) / TWO_TONE_SPLIT * 255.0);
            Rgb8::new(rest, 255, rest)
        }
    })?;
    Ok(None)
}

/// Dark pixels ramp up through blue, bright pixels from blue to white.
pub fn blueify(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let sum = f64::from(brightness(px));
        if sum < TWO_TONE_SPLIT {
            Rgb8::new(0, 0, channel(sum / TWO_TONE_SPLIT * 255.0))
        } else {
            let rest = channel((sum - TWO_TONE_SPLIT) / TWO_TONE_SPLIT * 255.0);
            Rgb8::new(rest, rest, 255)
        }
    })?;
    Ok(None)
}

/// Dark pixels ramp up through magenta, bright pixels from magenta to white.
pub fn magentify(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let sum = f64::from(brightness(px));
        if sum < TWO_TONE_SPLIT {
            let ramp = channel(sum / TWO_TONE_SPLIT * 255.0);
            Rgb8::new(ramp, 0, ramp)
        } else {
            let rest = channel((sum - TWO_TONE_SPLIT) / TWO_TONE_SPLIT * 255.0);
            Rgb8::new(255, rest, 255)
        }
    })?;
    Ok(None)
}

/// Below the 382.5 split every pixel becomes the dark color (`extra` as
/// "r,g,b", default black); at or above it, the chosen color.
pub fn make_two_tone(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let light = args.color;
    let dark = extra::rgb_or(args.extra, Rgb8::new(0, 0, 0));
    map_pixels(image, stop, |px| {
        if f64::from(brightness(px)) < TWO_TONE_SPLIT {
            dark
        } else {
            light
        }
    })?;
    Ok(None)
}

/// Two-tone split at the image's own mean brightness instead of the fixed
/// midpoint; takes a read pass first, then a write pass.
pub fn make_better_two_tone(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let light = args.color;
    let dark = extra::rgb_or(args.extra, Rgb8::new(0, 0, 0));

    let mut total: u64 = 0;
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            total += u64::from(brightness(image.get_pixel(x, y)?));
        }
    }
    let mean = total as f64 / (f64::from(image.width()) * f64::from(image.height()));

    map_pixels(image, stop, |px| {
        if f64::from(brightness(px)) < mean {
            dark
        } else {
            light
        }
    })?;
    Ok(None)
}

/// Four brightness buckets mapped to black and thirds of the chosen color
/// (channel fractions truncated, not rounded).
pub fn make_four_tone(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let light = args.color;
    let third = |c: u8, n: f64| (f64::from(c) / 3.0 * n) as u8;
    let darker = Rgb8::new(0, 0, 0);
    let dark = Rgb8::new(third(light.r, 1.0), third(light.g, 1.0), third(light.b, 1.0));
    let medium = Rgb8::new(third(light.r, 2.0), third(light.g, 2.0), third(light.b, 2.0));
    map_pixels(image, stop, |px| {
        let sum = f64::from(brightness(px));
        if sum < 191.5 {
            darker
        } else if sum < 382.5 {
            dark
        } else if sum < 573.75 {
            medium
        } else {
            light
        }
    })?;
    Ok(None)
}

/// N evenly spaced brightness buckets (`extra` = level count, required,
/// at least 2) mapped to proportional fractions of the chosen color.
///
/// With n = 2 this reproduces `make_two_tone`'s dark/light partition
/// (brightness interval 765 / 2).
pub fn make_n_tone(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let n = extra::require_int(args.extra, "the number of levels")?;
    if n < 2 {
        return Err(BmpError::InvalidParameter(alloc::format!(
            "the number of levels must be at least 2, got {n}"
        )));
    }
    let steps = (n - 1) as f64;
    let mut tones = alloc::vec::Vec::with_capacity(n as usize);
    for level in 0..n {
        let frac = |c: u8| (f64::from(c) / steps * level as f64) as u8;
        tones.push(Rgb8::new(
            frac(args.color.r),
            frac(args.color.g),
            frac(args.color.b),
        ));
    }
    let interval = 765.0 / n as f64;
    map_pixels(image, stop, |px| {
        let idx = ((f64::from(brightness(px)) / interval) as i64).min(n - 1) as usize;
        tones[idx]
    })?;
    Ok(None)
}

/// Rescale `mid` so it sits proportionally between 0 and 255 where it sat
/// between `min` and `max`.
fn calc_mid(max: u8, mid: u8, min: u8) -> u8 {
    channel(f64::from(mid - min) / f64::from(max - min) * 255.0)
}

/// Force each pixel's dominant channel to 255 and its weakest to 0,
/// rescaling the middle channel linearly. Ties promote both channels;
/// pure gray maps to white.
pub fn saturate(
    image: &mut BitmapBuffer,
    _args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    map_pixels(image, stop, |px| {
        let (r, g, b) = (px.r, px.g, px.b);
        if b > g && b > r {
            if g < r {
                Rgb8::new(calc_mid(b, r, g), 0, 255)
            } else {
                Rgb8::new(0, calc_mid(b, g, r), 255)
            }
        } else if g > b && g > r {
            if b < r {
                Rgb8::new(calc_mid(g, r, b), 255, 0)
            } else {
                Rgb8::new(0, 255, calc_mid(g, b, r))
            }
        } else if r > b && r > g {
            if b < g {
                Rgb8::new(255, calc_mid(r, g, b), 0)
            } else {
                Rgb8::new(255, 0, calc_mid(r, b, g))
            }
        } else if g > r && b > r {
            Rgb8::new(0, 255, 255)
        } else if r > g && b > g {
            Rgb8::new(255, 0, 255)
        } else if r > b && g > b {
            Rgb8::new(255, 255, 0)
        } else {
            Rgb8::new(255, 255, 255)
        }
    })?;
    Ok(None)
}

/// Push each channel toward 0 or 255 depending on which side of the 127.5
/// midpoint it sits, by fraction `extra` in [0, 1] (default 1.0).
pub fn intensify(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let amount = extra::unit_fraction_or(args.extra, 1.0, "the intensification")?;
    let push = |c: u8| {
        let v = f64::from(c);
        if v > 127.5 {
            channel(v + (255.0 - v) * amount)
        } else {
            channel(v - v * amount)
        }
    };
    map_pixels(image, stop, |px| Rgb8::new(push(px.r), push(px.g), push(px.b)))?;
    Ok(None)
}
