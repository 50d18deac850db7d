#![forbid(unsafe_code)]

//! Adler-32, the checksum Zlib runs over the decompressed data stream.

const MOD_ADLER: u32 = 65521;

/// A running Adler-32 checksum.
///
/// The value covers *everything* fed in so far, so the IDAT encoder can feed
/// one scanline per [`update`](Self::update) call and still end up with the
/// checksum of the whole filtered image. An accumulator is single-use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
  a: u32,
  b: u32,
}
impl Default for Adler32 {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl Adler32 {
  /// A fresh accumulator: `a = 1`, `b = 0`.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { a: 1, b: 0 }
  }

  /// Folds more bytes into the running checksum.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    for byte in bytes.iter().copied() {
      self.a = (self.a + u32::from(byte)) % MOD_ADLER;
      self.b = (self.b + self.a) % MOD_ADLER;
    }
  }

  /// Packs the two registers as `(b << 16) | a`.
  #[inline]
  #[must_use]
  pub const fn finish(self) -> u32 {
    (self.b << 16) | self.a
  }
}

/// The Adler-32 of a complete byte slice.
#[inline]
#[must_use]
pub fn adler32(bytes: &[u8]) -> u32 {
  let mut adler = Adler32::new();
  adler.update(bytes);
  adler.finish()
}
