//! Image Data.
//!
//! The payload is a minimal Zlib stream: a 2-byte header, then the filtered
//! scanlines carried verbatim in stored (uncompressed) DEFLATE blocks, then
//! the big-endian Adler-32 of the scanline bytes. Each scanline is the filter
//! type byte 0 ("no filtering") followed by the row's pixels as raw bytes.
//!
//! This encoder always emits exactly one IDAT chunk. PNG permits splitting
//! the stream across several, but a single chunk can frame any image whose
//! payload length fits the 32-bit chunk length field, and we reject anything
//! bigger up front.
//!
//! Spec: [IDAT](https://www.w3.org/TR/png/#11IDAT)

use super::*;

/// The most data bytes a single stored DEFLATE block can carry, since its
/// length field is 16 bits.
pub const MAX_STORED_BLOCK: usize = 65535;

/// Flag byte + length + one's-complement length.
const STORED_BLOCK_OVERHEAD: u64 = 5;

/// The Zlib stream header this encoder always writes.
///
/// Compression method 8 with a minimal declared window, check bits making
/// the pair a multiple of 31. Stored blocks don't reference a window at all,
/// so the small declared size costs nothing.
pub const ZLIB_STREAM_HEADER: [u8; 2] = [0x08, 0x1D];

/// One scanline's byte count: the filter type byte plus 4 bytes per pixel.
#[inline]
#[must_use]
const fn bytes_per_row(width: u32) -> u64 {
  width as u64 * 4 + 1
}

/// The IDAT chunk's payload length for an image of the given dimensions.
///
/// That's the Zlib header, plus each row's bytes and the 5-byte overhead of
/// each stored block framing them, plus the Adler-32 trailer.
///
/// ## Failure
/// * `CheckedMath` if the total doesn't fit the chunk's `u32` length field.
pub fn idat_payload_len(width: u32, height: u32) -> Result<u32, PngoutError> {
  let row = bytes_per_row(width);
  let blocks_per_row = row.div_ceil(MAX_STORED_BLOCK as u64);
  let deflate_bytes = (height as u64)
    .checked_mul(row + STORED_BLOCK_OVERHEAD * blocks_per_row)
    .ok_or(PngoutError::CheckedMath)?;
  let total = deflate_bytes.checked_add(2 + 4).ok_or(PngoutError::CheckedMath)?;
  u32::try_from(total).map_err(|_| PngoutError::CheckedMath)
}

/// Writes the complete framed IDAT chunk for a raster.
///
/// Streaming framing: the payload length is computed up front (and validated,
/// so nothing is written for an impossibly large image), then bytes go
/// straight to the sink while two checksums run alongside. The CRC-32 covers
/// the type tag and every payload byte; the Adler-32 covers only the filtered
/// scanline bytes, not the Zlib header or the block framing.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn write_idat<S: PngSink>(sink: &mut S, raster: &Raster) -> Result<(), PngoutError> {
  use alloc::vec::Vec;

  let payload_len = idat_payload_len(raster.width(), raster.height())?;
  // fits usize: the u32 check above bounds width * 4 + 1
  let row_len = bytes_per_row(raster.width()) as usize;

  let mut row_buffer: Vec<u8> = Vec::new();
  row_buffer.try_reserve_exact(row_len)?;

  let mut crc = Crc32::new();
  let mut adler = Adler32::new();

  sink.write_all(&u32_be(payload_len))?;
  sink.write_all(ChunkTy::IDAT.as_bytes())?;
  crc.update(ChunkTy::IDAT.as_bytes());

  sink.write_all(&ZLIB_STREAM_HEADER)?;
  crc.update(&ZLIB_STREAM_HEADER);

  let last_y = raster.height() - 1;
  for y in 0..raster.height() {
    row_buffer.clear();
    row_buffer.push(0); // filter type: none
    row_buffer.extend_from_slice(raster.row_bytes(y));
    adler.update(&row_buffer);

    // `chunks` never yields an empty trailing slice, so a row length that's
    // an exact multiple of the block size gets full blocks and nothing more
    let block_count = row_buffer.len().div_ceil(MAX_STORED_BLOCK);
    for (i, block) in row_buffer.chunks(MAX_STORED_BLOCK).enumerate() {
      let is_final = y == last_y && i == block_count - 1;
      let flag = [u8::from(is_final)];
      sink.write_all(&flag)?;
      crc.update(&flag);
      let len_header = stored_block_len(block.len() as u16);
      sink.write_all(&len_header)?;
      crc.update(&len_header);
      sink.write_all(block)?;
      crc.update(block);
    }
  }

  let adler_bytes = u32_be(adler.finish());
  sink.write_all(&adler_bytes)?;
  crc.update(&adler_bytes);

  sink.write_all(&u32_be(crc.finish()))?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn payload_len_small_images() {
    // 2 (zlib) + rows * (w*4+1 + 5) + 4 (adler)
    assert_eq!(idat_payload_len(1, 1).unwrap(), 2 + (5 + 5) + 4);
    assert_eq!(idat_payload_len(2, 1).unwrap(), 2 + (9 + 5) + 4);
    assert_eq!(idat_payload_len(2, 3).unwrap(), 2 + 3 * (9 + 5) + 4);
  }

  #[test]
  fn payload_len_multi_block_rows() {
    // 49151 * 4 + 1 == 3 * 65535 exactly: three full blocks, no empty
    // trailing block
    assert_eq!(idat_payload_len(49151, 1).unwrap(), 2 + (3 * 65535 + 3 * 5) + 4);
    // 16384 * 4 + 1 == 65537: a full block plus a 2-byte remainder block
    assert_eq!(idat_payload_len(16384, 1).unwrap(), 2 + (65537 + 2 * 5) + 4);
  }

  #[test]
  fn payload_len_overflow_is_rejected() {
    assert_eq!(idat_payload_len(u32::MAX, u32::MAX), Err(PngoutError::CheckedMath));
  }

  #[test]
  fn row_segmentation_has_no_empty_trailing_block() {
    let row = alloc::vec![0_u8; 3 * MAX_STORED_BLOCK];
    let blocks: alloc::vec::Vec<usize> =
      row.chunks(MAX_STORED_BLOCK).map(<[u8]>::len).collect();
    assert_eq!(blocks, alloc::vec![65535, 65535, 65535]);

    let row = alloc::vec![0_u8; MAX_STORED_BLOCK + 1];
    let blocks: alloc::vec::Vec<usize> =
      row.chunks(MAX_STORED_BLOCK).map(<[u8]>::len).collect();
    assert_eq!(blocks, alloc::vec![65535, 1]);
  }

  #[test]
  fn zlib_header_passes_the_check_bits() {
    let [cmf, flg] = ZLIB_STREAM_HEADER;
    assert_eq!((u16::from(cmf) << 8 | u16::from(flg)) % 31, 0);
    assert_eq!(cmf & 0x0F, 8); // compression method: deflate
  }
}
