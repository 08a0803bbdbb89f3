//! Parse-or-default and parse-or-error helpers for the free-form "extra"
//! transform parameter.
//!
//! Which policy a transform uses is part of its contract:
//!
//! | transform            | extra means        | on parse failure        |
//! |----------------------|--------------------|-------------------------|
//! | `change_pixel`       | radius             | default 0               |
//! | `draw_hline`/`vline`/`x` | thickness      | default 1               |
//! | `make_two_tone`      | dark color "r,g,b" | default black           |
//! | `make_n_tone`        | level count        | error (required)        |
//! | `intensify`          | fraction in [0,1]  | default 1.0; range error|
//! | `blend_other`        | fraction in [0,1]  | default 0.5; range error|
//! | `chroma_overlay`     | tolerance          | default 100             |
//! | `make_line_drawing`  | tolerance          | default 10              |
//! | `resize`             | multiplier > 0     | error (required)        |

use crate::Rgb8;
use crate::error::BmpError;

/// Integer extra with a tolerant default.
pub(crate) fn int_or(extra: &str, default: i64) -> i64 {
    extra.trim().parse().unwrap_or(default)
}

/// Float extra with a tolerant default.
pub(crate) fn float_or(extra: &str, default: f64) -> f64 {
    extra.trim().parse().unwrap_or(default)
}

/// Float extra that the transform cannot do without.
pub(crate) fn require_float(extra: &str, what: &str) -> Result<f64, BmpError> {
    let trimmed = extra.trim();
    if trimmed.is_empty() {
        return Err(BmpError::MissingParameter(alloc::format!(
            "{what} (the extra parameter) must be specified"
        )));
    }
    trimmed.parse().map_err(|_| {
        BmpError::InvalidParameter(alloc::format!("{what} must be a number, got {trimmed:?}"))
    })
}

/// Integer extra that the transform cannot do without.
pub(crate) fn require_int(extra: &str, what: &str) -> Result<i64, BmpError> {
    let trimmed = extra.trim();
    if trimmed.is_empty() {
        return Err(BmpError::MissingParameter(alloc::format!(
            "{what} (the extra parameter) must be specified"
        )));
    }
    trimmed.parse().map_err(|_| {
        BmpError::InvalidParameter(alloc::format!("{what} must be an integer, got {trimmed:?}"))
    })
}

/// "r,g,b" extra with a tolerant default (wrong arity or non-byte values
/// fall back to the default, they never error).
pub(crate) fn rgb_or(extra: &str, default: Rgb8) -> Rgb8 {
    let mut parts = extra.split(',');
    let parsed = (
        parts.next().map(str::trim).and_then(|p| p.parse::<u8>().ok()),
        parts.next().map(str::trim).and_then(|p| p.parse::<u8>().ok()),
        parts.next().map(str::trim).and_then(|p| p.parse::<u8>().ok()),
    );
    match (parsed, parts.next()) {
        ((Some(r), Some(g), Some(b)), None) => Rgb8::new(r, g, b),
        _ => default,
    }
}

/// A fraction that must land in [0, 1]; parse failure takes the default but
/// an out-of-range value is an error.
pub(crate) fn unit_fraction_or(
    extra: &str,
    default: f64,
    what: &str,
) -> Result<f64, BmpError> {
    let value = float_or(extra, default);
    if !(0.0..=1.0).contains(&value) {
        return Err(BmpError::InvalidParameter(alloc::format!(
            "{what} must be between 0 and 1, got {value}"
        )));
    }
    Ok(value)
}
