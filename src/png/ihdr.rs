use super::*;

/// Image Header.
///
/// Everything but the dimensions is fixed by this crate: bit depth 8, color
/// type 6 (truecolor with alpha), compression 0, filter 0, interlace 0.
///
/// Spec: [IHDR](https://www.w3.org/TR/png/#11IHDR)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IHDR {
  /// Width in pixels, must be nonzero.
  pub width: u32,
  /// Height in pixels, must be nonzero.
  pub height: u32,
}

impl IHDR {
  /// The bit depth this crate always writes.
  pub const BIT_DEPTH: u8 = 8;
  /// The color type this crate always writes: truecolor with alpha.
  pub const COLOR_TYPE: u8 = 6;

  /// The 13 payload bytes of the header chunk.
  #[inline]
  #[must_use]
  pub fn to_payload(self) -> [u8; 13] {
    let mut out = [0; 13];
    out[0..4].copy_from_slice(&u32_be(self.width));
    out[4..8].copy_from_slice(&u32_be(self.height));
    out[8] = Self::BIT_DEPTH;
    out[9] = Self::COLOR_TYPE;
    // compression method, filter method, and interlace method stay 0
    out
  }

  /// Writes the framed IHDR chunk.
  #[inline]
  pub fn write_to<S: PngSink>(self, sink: &mut S) -> Result<(), PngoutError> {
    write_chunk(sink, ChunkTy::IHDR, &self.to_payload())
  }
}

#[cfg(feature = "alloc")]
impl From<&Raster> for IHDR {
  #[inline]
  #[must_use]
  fn from(raster: &Raster) -> Self {
    Self { width: raster.width(), height: raster.height() }
  }
}
