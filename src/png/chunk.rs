use super::*;

/// A PNG chunk's 4-byte type tag.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
#[allow(missing_docs)]
impl ChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const sRGB: Self = Self(*b"sRGB");
  pub const bKGD: Self = Self(*b"bKGD");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");

  /// The tag's bytes, as fed to the sink and the chunk CRC.
  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl Debug for ChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char(self.0[0] as char)?;
    f.write_char(self.0[1] as char)?;
    f.write_char(self.0[2] as char)?;
    f.write_char(self.0[3] as char)?;
    Ok(())
  }
}

/// Writes one whole chunk: length, type, payload, CRC.
///
/// The length is the payload's byte count, big-endian. The CRC-32 covers the
/// type tag and the payload but *not* the length field. This is the framing
/// every chunk in the file uses; the IDAT encoder reproduces it by hand
/// because its payload is streamed rather than held in a buffer.
///
/// ## Failure
/// * `CheckedMath` if the payload is longer than `u32::MAX` bytes (nothing is
///   written in that case).
/// * Any sink error, as soon as it happens.
pub fn write_chunk<S: PngSink>(
  sink: &mut S, ty: ChunkTy, payload: &[u8],
) -> Result<(), PngoutError> {
  let len = u32::try_from(payload.len()).map_err(|_| PngoutError::CheckedMath)?;
  sink.write_all(&u32_be(len))?;
  sink.write_all(ty.as_bytes())?;
  sink.write_all(payload)?;
  let mut crc = Crc32::new();
  crc.update(ty.as_bytes());
  crc.update(payload);
  sink.write_all(&u32_be(crc.finish()))?;
  Ok(())
}
