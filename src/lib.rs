//! # bmpshop
//!
//! Pixel-level access to uncompressed 24-bit Windows BMP images, plus a
//! catalog of image transforms built on top of that access.
//!
//! ## Layers
//!
//! - [`BitmapBuffer`] owns a complete BMP file (header + pixel data) as a
//!   byte buffer, translates (x, y) coordinates to byte offsets with
//!   row-padding arithmetic, and constructs blank canvases.
//! - [`transform`] holds pure transform functions (recoloring, line drawing,
//!   blending, chroma keying, resampling, edge detection) that only ever go
//!   through the pixel accessors, never raw offsets.
//!
//! Only 24 bits per pixel, one color plane, no compression. Rows are stored
//! bottom-up in (b, g, r) byte order; this crate applies no vertical flip.
//! Row 0 is row 0 in file order, and callers track orientation themselves.
//!
//! ## Non-Goals
//!
//! - Compressed, indexed-color, or non-24bpp BMP variants
//! - Other image formats (PNG/JPEG belong to the surrounding application)
//! - Multi-threaded pixel processing
//!
//! ## Usage
//!
//! ```
//! use bmpshop::{BitmapBuffer, Rgb8};
//! use bmpshop::transform::{Registry, Transform, TransformArgs};
//! use enough::Unstoppable;
//!
//! let mut image = BitmapBuffer::create_blank(4, 4)?;
//! image.set_pixel(1, 2, Rgb8::new(200, 100, 50))?;
//! assert_eq!(image.get_pixel(1, 2)?, Rgb8::new(200, 100, 50));
//!
//! let registry = Registry::with_builtins();
//! let args = TransformArgs {
//!     color: Rgb8::new(255, 0, 0),
//!     extra: "",
//!     other: None,
//! };
//! match registry.get("remove_red") {
//!     Some(Transform::Filter(f)) => {
//!         f(&mut image, &args, &Unstoppable)?;
//!     }
//!     _ => unreachable!(),
//! }
//! # Ok::<(), bmpshop::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod bitmap;
mod error;

pub mod transform;

// Re-exports
pub use bitmap::{BitmapBuffer, BmpInfo, parse_header};
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;

/// The (r, g, b) pixel triple used throughout the public API.
pub type Rgb8 = rgb::RGB8;
