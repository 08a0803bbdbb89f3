//! Point, line, and shape drawing.
//!
//! Thickness-taking tools compute a start coordinate of
//! `center - round(thickness / 2)` (ties-to-even) and paint every covered
//! row/column, clipping at the image border.

use enough::Stop;

use super::extra;
use super::{Outcome, TransformArgs, round_coord};
use crate::bitmap::BitmapBuffer;
use crate::error::BmpError;

/// Paint a square of radius `extra` (default 0, i.e. a single pixel)
/// centered on the clicked coordinate, clipped to the image.
pub fn change_pixel(
    image: &mut BitmapBuffer,
    clicked: (i32, i32),
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let radius = extra::int_or(args.extra, 0);
    let (cx, cy) = (i64::from(clicked.0), i64::from(clicked.1));
    let x0 = (cx - radius).max(0);
    let x1 = (cx + radius).min(i64::from(image.width()) - 1);
    let y0 = (cy - radius).max(0);
    let y1 = (cy + radius).min(i64::from(image.height()) - 1);
    for y in y0..=y1 {
        if (y - y0) % 16 == 0 {
            stop.check()?;
        }
        for x in x0..=x1 {
            image.set_pixel(x as i32, y as i32, args.color)?;
        }
    }
    Ok(None)
}

/// `change_pixel` at the image center (coordinates rounded ties-to-even).
pub fn mark_middle(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let cx = round_coord(f64::from(image.width()) / 2.0) as i32;
    let cy = round_coord(f64::from(image.height()) / 2.0) as i32;
    change_pixel(image, (cx, cy), args, stop)
}

/// Horizontal line through the clicked row, `extra` pixels thick (default 1).
pub fn draw_hline(
    image: &mut BitmapBuffer,
    clicked: (i32, i32),
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let thickness = extra::int_or(args.extra, 1).max(0);
    let start = i64::from(clicked.1) - round_coord(thickness as f64 / 2.0);
    for row in start..start + thickness {
        stop.check()?;
        if row < 0 || row >= i64::from(image.height()) {
            continue;
        }
        for x in 0..image.width() as i32 {
            image.set_pixel(x, row as i32, args.color)?;
        }
    }
    Ok(None)
}

/// Vertical line through the clicked column, `extra` pixels thick (default 1).
pub fn draw_vline(
    image: &mut BitmapBuffer,
    clicked: (i32, i32),
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let thickness = extra::int_or(args.extra, 1).max(0);
    let start = i64::from(clicked.0) - round_coord(thickness as f64 / 2.0);
    for col in start..start + thickness {
        stop.check()?;
        if col < 0 || col >= i64::from(image.width()) {
            continue;
        }
        for y in 0..image.height() as i32 {
            image.set_pixel(col as i32, y, args.color)?;
        }
    }
    Ok(None)
}

/// Cross through the clicked coordinate: a horizontal and a vertical line of
/// the same thickness.
pub fn draw_x(
    image: &mut BitmapBuffer,
    clicked: (i32, i32),
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    draw_hline(image, clicked, args, stop)?;
    draw_vline(image, clicked, args, stop)
}

/// `draw_hline` across the vertical middle of the image.
pub fn draw_centered_hline(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let cy = round_coord(f64::from(image.height()) / 2.0) as i32;
    draw_hline(image, (0, cy), args, stop)
}

/// `draw_vline` down the horizontal middle of the image.
pub fn draw_centered_vline(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let cx = round_coord(f64::from(image.width()) / 2.0) as i32;
    draw_vline(image, (cx, 0), args, stop)
}

/// Draw both corner-to-corner diagonals with an integer scanline walk: per
/// row, the run of pixels whose x/width falls inside [y/height, (y+1)/height)
/// is painted, along with its mirror.
pub fn draw_bisecting_diagonals(
    image: &mut BitmapBuffer,
    args: &TransformArgs<'_>,
    stop: &dyn Stop,
) -> Result<Outcome, BmpError> {
    let w = u64::from(image.width());
    let h = u64::from(image.height());
    for y in 0..h {
        if y % 16 == 0 {
            stop.check()?;
        }
        // Smallest x with x/w >= y/h, i.e. ceil(y*w / h).
        let start = (y * w).div_ceil(h);
        if start >= w {
            continue;
        }
        let end = ((y + 1) * w).div_ceil(h);
        let length = (end - start).max(1);
        for x in start..(start + length).min(w) {
            image.set_pixel(x as i32, y as i32, args.color)?;
        }
        let mirror_start = w.saturating_sub(start + length);
        for x in mirror_start..(mirror_start + length).min(w) {
            image.set_pixel(x as i32, y as i32, args.color)?;
        }
    }
    Ok(None)
}
