//! Transform catalog: pure functions over [`BitmapBuffer`]s.
//!
//! Every transform has one of two shapes:
//!
//! - **filter**: whole-image, no click required: `fn(image, args, stop)`
//! - **tool**: operates at a clicked coordinate: `fn(image, (x, y), args, stop)`
//!
//! A transform either mutates the primary image in place and returns
//! `Ok(None)`, or constructs and returns `Ok(Some(new_image))` whenever the
//! output dimensions differ from the input (resize, blend, line drawing).
//! Transforms never catch pixel-access bounds errors; those propagate.
//!
//! The free-form `extra` string parameter is parsed per transform
//! (thickness, radius, percentage, tolerance, levels); see [`extra`] for the
//! parse-or-default vs. parse-or-error policy. If a transform fails partway
//! through an in-place edit, the buffer is left in a transform-defined
//! intermediate state; callers discard such buffers.

use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;
use crate::Rgb8;
use enough::Stop;

pub(crate) mod extra;

mod compose;
mod draw;
mod fade;
mod mirror;
mod recolor;
mod registry;
mod scale;
mod tone;

pub use compose::{blend_other, chroma_overlay, make_line_drawing};
pub use draw::{
    change_pixel, draw_bisecting_diagonals, draw_centered_hline, draw_centered_vline, draw_hline,
    draw_vline, draw_x, mark_middle,
};
pub use fade::{fade_in_horizontal, fade_in_vertical, fade_out_horizontal, fade_out_vertical};
pub use mirror::{
    mirror_bottom_vertical, mirror_left_horizontal, mirror_right_horizontal, mirror_top_vertical,
};
pub use recolor::{
    darken, fill, grayify, lighten, make_gray, make_red, max_blue, max_green, max_red, negate,
    negate_blue, negate_green, negate_red, only_blue, only_green, only_red, remove_blue,
    remove_green, remove_red, swap_brg, swap_gbr, swap_grb, swap_rbg, swap_rgb,
};
pub use registry::{Registry, Transform, TransformKind};
pub use scale::{better_enlarge, better_shrink, enlarge, resize, shrink};
pub use tone::{
    blueify, greenify, intensify, magentify, make_better_two_tone, make_four_tone, make_n_tone,
    make_two_tone, redify, saturate,
};

/// Parameters common to every transform call.
pub struct TransformArgs<'a> {
    /// The user-chosen RGB color.
    pub color: Rgb8,
    /// Free-form parameter string; meaning is per-transform.
    pub extra: &'a str,
    /// Secondary image for two-image transforms.
    pub other: Option<&'a BitmapBuffer>,
}

/// `None` signals "mutated the primary buffer in place"; `Some` is the new
/// image, and the caller discards the original.
pub type Outcome = Option<BitmapBuffer>;

/// A whole-image transform.
pub type FilterFn =
    fn(&mut BitmapBuffer, &TransformArgs<'_>, &dyn Stop) -> Result<Outcome, BmpError>;

/// A transform applied at a clicked coordinate.
pub type ToolFn =
    fn(&mut BitmapBuffer, (i32, i32), &TransformArgs<'_>, &dyn Stop) -> Result<Outcome, BmpError>;

/// Apply `f` to every pixel in place, checking for cancellation every
/// sixteen rows.
pub(crate) fn map_pixels(
    image: &mut BitmapBuffer,
    stop: &dyn Stop,
    mut f: impl FnMut(Rgb8) -> Rgb8,
) -> Result<(), BmpError> {
    for y in 0..image.height() as i32 {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..image.width() as i32 {
            let px = image.get_pixel(x, y)?;
            image.set_pixel(x, y, f(px))?;
        }
    }
    Ok(())
}

/// Per-pixel brightness: the plain channel sum (not averaged, not weighted).
/// Ranges 0..=765.
pub(crate) fn brightness(px: Rgb8) -> u32 {
    u32::from(px.r) + u32::from(px.g) + u32::from(px.b)
}

/// Round to the nearest integer, ties to even. Written in integer
/// arithmetic because the float `round` intrinsics are unavailable without
/// `std`. Inputs here are channel sums and image extents, well within
/// `i64` range, so the truncating casts are exact.
pub(crate) fn round_half_even(value: f64) -> i64 {
    let truncated = value as i64;
    let frac = value - truncated as f64;
    let magnitude = if frac < 0.0 { -frac } else { frac };
    let step = if value < 0.0 { -1 } else { 1 };
    if magnitude > 0.5 || (magnitude == 0.5 && truncated % 2 != 0) {
        truncated + step
    } else {
        truncated
    }
}

/// Round a channel value to the nearest integer (ties to even) and clamp
/// to the byte range.
pub(crate) fn channel(value: f64) -> u8 {
    round_half_even(value).clamp(0, 255) as u8
}

/// Banker's rounding (ties to even) for coordinate midpoints.
pub(crate) fn round_coord(value: f64) -> i64 {
    round_half_even(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_sends_ties_to_the_even_neighbor() {
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(2.4), 2);
        assert_eq!(round_half_even(2.6), 3);
        assert_eq!(round_half_even(-2.5), -2);
        assert_eq!(round_half_even(-3.5), -4);
        assert_eq!(round_half_even(-2.6), -3);
        assert_eq!(round_half_even(0.0), 0);
    }

    #[test]
    fn channel_clamps_to_the_byte_range() {
        assert_eq!(channel(2.5), 2);
        assert_eq!(channel(4.5), 4);
        assert_eq!(channel(254.5), 254);
        assert_eq!(channel(255.5), 255);
        assert_eq!(channel(300.0), 255);
        assert_eq!(channel(-3.0), 0);
    }
}
