#![forbid(unsafe_code)]

//! Fixed-width integer encodings used by the PNG and DEFLATE framing.

/// Encodes a `u32` as 4 big-endian bytes.
///
/// PNG stores all of its multi-byte integers this way: chunk lengths, the
/// IHDR dimensions, and the CRC-32 and Adler-32 trailers.
#[inline]
#[must_use]
pub const fn u32_be(u: u32) -> [u8; 4] {
  u.to_be_bytes()
}

/// Encodes a `u16` as 2 big-endian bytes.
#[inline]
#[must_use]
pub const fn u16_be(u: u16) -> [u8; 2] {
  u.to_be_bytes()
}

/// Encodes a stored-DEFLATE block's length header.
///
/// Bytes 0 and 1 are the length, little-endian. Bytes 2 and 3 are the
/// bitwise complement of bytes 0 and 1, so a decoder can validate the length
/// against its complement. Taking `u16` here is what keeps a stored block's
/// 16-bit length field from ever silently truncating.
#[inline]
#[must_use]
pub const fn stored_block_len(len: u16) -> [u8; 4] {
  let [lo, hi] = len.to_le_bytes();
  [lo, hi, !lo, !hi]
}
