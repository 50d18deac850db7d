#![forbid(unsafe_code)]

//! Provides the heap-allocated raster the encoder reads from.

use alloc::vec::Vec;

use crate::error::PngoutError;
use crate::pixel_formats::RGBA8888;

/// Converts an `(x,y)` position within a given `width` 2D space into a linear
/// index.
#[inline]
#[must_use]
const fn xy_width_to_index(x: u32, y: u32, width: u32) -> usize {
  y as usize * width as usize + x as usize
}

/// A direct-color RGBA image in row-major order.
///
/// Construction is the one place preconditions get checked: a `Raster` that
/// exists always has nonzero dimensions and exactly `width * height` pixels,
/// so the encoder never has to probe the buffer mid-stream. The pixel data is
/// one contiguous `Vec<RGBA8888>`, rows top to bottom, and [`RGBA8888`] is 4
/// bytes with alignment 1, so every row is viewable as flat bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Raster {
  width: u32,
  height: u32,
  pixels: Vec<RGBA8888>,
}

impl Raster {
  /// Allocates a raster of transparent black pixels.
  ///
  /// ## Failure
  /// * `WidthOrHeightZero` if either dimension is 0.
  /// * `CheckedMath` if `width * height` overflows `usize`.
  /// * `Alloc` if the buffer can't be reserved.
  #[inline]
  pub fn new(width: u32, height: u32) -> Result<Self, PngoutError> {
    let count = Self::pixel_count(width, height)?;
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(count)?;
    pixels.resize(count, RGBA8888::default());
    Ok(Self { width, height, pixels })
  }

  /// Wraps an existing pixel buffer.
  ///
  /// ## Failure
  /// As [`new`](Self::new), plus `PixelCountMismatch` if the buffer's length
  /// isn't exactly `width * height`.
  #[inline]
  pub fn from_pixels(
    width: u32, height: u32, pixels: Vec<RGBA8888>,
  ) -> Result<Self, PngoutError> {
    let count = Self::pixel_count(width, height)?;
    if pixels.len() != count {
      return Err(PngoutError::PixelCountMismatch);
    }
    Ok(Self { width, height, pixels })
  }

  /// Allocates a raster and fills it by calling `f(x, y)` for each pixel.
  #[inline]
  pub fn from_fn(
    width: u32, height: u32, mut f: impl FnMut(u32, u32) -> RGBA8888,
  ) -> Result<Self, PngoutError> {
    let count = Self::pixel_count(width, height)?;
    let mut pixels = Vec::new();
    pixels.try_reserve_exact(count)?;
    for y in 0..height {
      for x in 0..width {
        pixels.push(f(x, y));
      }
    }
    Ok(Self { width, height, pixels })
  }

  fn pixel_count(width: u32, height: u32) -> Result<usize, PngoutError> {
    if width == 0 || height == 0 {
      return Err(PngoutError::WidthOrHeightZero);
    }
    (width as usize).checked_mul(height as usize).ok_or(PngoutError::CheckedMath)
  }

  /// The image's width in pixels. Never 0.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.width
  }

  /// The image's height in pixels. Never 0.
  #[inline]
  #[must_use]
  pub const fn height(&self) -> u32 {
    self.height
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn pixel_at(&self, x: u32, y: u32) -> Option<RGBA8888> {
    if x < self.width && y < self.height {
      Some(self.pixels[xy_width_to_index(x, y, self.width)])
    } else {
      None
    }
  }

  /// Gets the pixel at the position, or `None` if the position is out of
  /// bounds.
  #[inline]
  #[must_use]
  pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut RGBA8888> {
    if x < self.width && y < self.height {
      let i = xy_width_to_index(x, y, self.width);
      Some(&mut self.pixels[i])
    } else {
      None
    }
  }

  /// One row of pixels, top row is `y == 0`.
  ///
  /// ## Panics
  /// If `y >= height`.
  #[inline]
  #[must_use]
  pub fn row(&self, y: u32) -> &[RGBA8888] {
    let start = xy_width_to_index(0, y, self.width);
    &self.pixels[start..start + self.width as usize]
  }

  /// One row of pixels viewed as raw bytes, 4 per pixel.
  ///
  /// ## Panics
  /// If `y >= height`.
  #[inline]
  #[must_use]
  pub fn row_bytes(&self, y: u32) -> &[u8] {
    bytemuck::cast_slice(self.row(y))
  }

  /// All pixels, row-major.
  #[inline]
  #[must_use]
  pub fn pixels(&self) -> &[RGBA8888] {
    &self.pixels
  }
}
