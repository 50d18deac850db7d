use super::*;

/// Background color.
///
/// Since this crate only writes truecolor-with-alpha images, only the RGB
/// form of the chunk exists here. The channels are always given as `u16`
/// values; the actual color selected should stay within the bit depth range
/// of the rest of the image.
///
/// Spec: [bKGD](https://www.w3.org/TR/png/#11bKGD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
#[allow(missing_docs)]
pub struct bKGD {
  pub r: u16,
  pub g: u16,
  pub b: u16,
}

impl Default for bKGD {
  /// The fixed background this encoder has always written: each channel 255,
  /// which serializes as the bytes `[0,255, 0,255, 0,255]`.
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self { r: 255, g: 255, b: 255 }
  }
}

impl bKGD {
  /// The 6 payload bytes: three big-endian `u16` channels.
  #[inline]
  #[must_use]
  pub const fn to_payload(self) -> [u8; 6] {
    let [r0, r1] = u16_be(self.r);
    let [g0, g1] = u16_be(self.g);
    let [b0, b1] = u16_be(self.b);
    [r0, r1, g0, g1, b0, b1]
  }

  /// Writes the framed bKGD chunk.
  #[inline]
  pub fn write_to<S: PngSink>(self, sink: &mut S) -> Result<(), PngoutError> {
    write_chunk(sink, ChunkTy::bKGD, &self.to_payload())
  }
}
