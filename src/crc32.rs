#![forbid(unsafe_code)]

//! CRC-32, the checksum PNG runs over each chunk's type and data.
//!
//! This is the standard reflected-polynomial (`0xEDB88320`) table-driven
//! CRC. The table is a `const`, so there's no lazy-init flag to guard and
//! concurrent encodes share it freely.

const CRC_TABLE: [u32; 256] = make_crc_table();

const fn make_crc_table() -> [u32; 256] {
  let mut out = [0; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      if (c & 1) != 0 {
        c = 0xEDB8_8320_u32 ^ (c >> 1);
      } else {
        c = c >> 1;
      }
      //
      k += 1;
    }
    out[n] = c;
    //
    n += 1;
  }
  out
}

/// A running CRC-32 over a byte stream.
///
/// The register starts at all-ones and the transmitted value is the one's
/// complement of the final state, which [`finish`](Self::finish) applies for
/// you. An accumulator is single-use: make a new one per checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc32 {
  state: u32,
}
impl Default for Crc32 {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}
impl Crc32 {
  /// A fresh accumulator, seeded with `0xFFFF_FFFF`.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { state: u32::MAX }
  }

  /// Folds more bytes into the running checksum.
  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    for byte in bytes.iter().copied() {
      let i = ((self.state ^ u32::from(byte)) & 0xFF) as usize;
      self.state = CRC_TABLE[i] ^ (self.state >> 8);
    }
  }

  /// Complements the register, giving the value PNG stores.
  #[inline]
  #[must_use]
  pub const fn finish(self) -> u32 {
    self.state ^ u32::MAX
  }
}

/// The CRC-32 of a complete byte slice.
#[inline]
#[must_use]
pub fn crc32(bytes: &[u8]) -> u32 {
  let mut crc = Crc32::new();
  crc.update(bytes);
  crc.finish()
}
