use alloc::string::String;
use enough::StopReason;

/// Errors from BMP parsing, construction, pixel access, and transforms.
///
/// All variants are local and synchronous; the crate never retries. The
/// caller decides whether to report, skip, or abort.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// Bad signature, planes, bit depth, compression, or a buffer shorter
    /// than the header claims.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    #[error("coordinate ({x}, {y}) out of bounds for {width}x{height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
    },

    /// An "extra" parameter was present but not valid for the transform
    /// (non-numeric where a number is required, or out of range).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A required parameter (secondary image, or an "extra" value with no
    /// sensible default) was absent.
    #[error("missing parameter: {0}")]
    MissingParameter(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
