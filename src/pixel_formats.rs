#![forbid(unsafe_code)]

//! The pixel format the encoder writes.
//!
//! PNG supports many pixel formats, but this crate only ever outputs 8-bit
//! truecolor with alpha (bit depth 8, color type 6), so one pixel type is all
//! we need.

use bytemuck::{Pod, Zeroable};

/// An 8-bit-per-channel RGBA pixel.
///
/// This is `repr(C)` with four `u8` fields, so a pixel is exactly 4
/// contiguous bytes with alignment 1, and a `&[RGBA8888]` row can be viewed
/// as a flat `&[u8]` with [`bytemuck::cast_slice`]. The IDAT encoder depends
/// on that layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[repr(C)]
#[allow(missing_docs)]
pub struct RGBA8888 {
  pub r: u8,
  pub g: u8,
  pub b: u8,
  pub a: u8,
}

// The layout claim above, checked at compile time.
const _: () = assert!(
  core::mem::size_of::<RGBA8888>() == 4 && core::mem::align_of::<RGBA8888>() == 1
);

impl RGBA8888 {
  /// A fully opaque pixel from its three color channels.
  #[inline]
  #[must_use]
  pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b, a: 255 }
  }
}
