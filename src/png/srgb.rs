use super::*;

/// Standard RGB colour space rendering intent.
///
/// Spec: [sRGB](https://www.w3.org/TR/png/#11sRGB)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(nonstandard_style)]
pub enum sRGBIntent {
  /// for images preferring good adaptation to the output device gamut at the
  /// expense of colorimetric accuracy, such as photographs.
  #[default]
  Perceptual,
  /// for images requiring colour appearance matching (relative to the output
  /// device white point), such as logos.
  RelativeColorimetric,
  /// for images preferring preservation of saturation at the expense of hue
  /// and lightness, such as charts and graphs.
  Saturation,
  /// for images requiring preservation of absolute colorimetry, such as
  /// previews of images destined for a different output device (proofs).
  AbsoluteColorimetric,
}

impl sRGBIntent {
  /// The chunk's one payload byte.
  #[inline]
  #[must_use]
  pub const fn to_byte(self) -> u8 {
    match self {
      Self::Perceptual => 0,
      Self::RelativeColorimetric => 1,
      Self::Saturation => 2,
      Self::AbsoluteColorimetric => 3,
    }
  }

  /// Writes the framed sRGB chunk.
  #[inline]
  pub fn write_to<S: PngSink>(self, sink: &mut S) -> Result<(), PngoutError> {
    write_chunk(sink, ChunkTy::sRGB, &[self.to_byte()])
  }
}
