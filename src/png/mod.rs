#![forbid(unsafe_code)]

//! Holds all the tools for encoding PNG data.
//!
//! The general format of a PNG is that the information is stored in
//! "chunks", each one framed as a length, a 4-byte type tag, the payload,
//! and a CRC-32 of the tag and payload. This crate writes exactly five of
//! them, always in the same order:
//!
//! * **IHDR** - The image's dimensions plus the fixed pixel format (8-bit
//!   RGBA, not interlaced).
//! * **sRGB** - The rendering intent. Ancillary, on by default, can be
//!   omitted via [`EncodeOptions`].
//! * **bKGD** - A suggested background color. Also ancillary, also defaulted.
//! * **IDAT** - The image data: one Zlib stream of stored DEFLATE blocks,
//!   built by [`write_idat`].
//! * **IEND** - Marks the end of the datastream.
//!
//! [`write_png`] does the whole sequence in one call. Each chunk type is also
//! public, so you can drive the chunk sequence yourself if you want some
//! other ancillary arrangement; [`write_chunk`] frames any tag and payload
//! you hand it.

use core::fmt::{Debug, Write};

use crate::crc32::Crc32;
use crate::error::PngoutError;
use crate::int_endian::{u16_be, u32_be};
use crate::sink::PngSink;

#[cfg(feature = "alloc")]
use crate::{adler32::Adler32, image::Raster, int_endian::stored_block_len};

mod chunk;
pub use chunk::*;

mod ihdr;
pub use ihdr::*;

mod srgb;
pub use srgb::*;

mod bkgd;
pub use bkgd::*;

mod idat;
pub use idat::*;

mod iend;
pub use iend::*;


/// The first eight bytes of a PNG datastream always match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Which ancillary chunks [`write_png_with`] emits.
///
/// The defaults reproduce this encoder's traditional fixed output: sRGB with
/// perceptual intent and the all-255 background. `None` omits a chunk
/// entirely. The critical chunks aren't configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
  /// Rendering intent for the sRGB chunk, if any.
  pub srgb: Option<sRGBIntent>,
  /// Background color for the bKGD chunk, if any.
  pub background: Option<bKGD>,
}

impl Default for EncodeOptions {
  #[inline]
  #[must_use]
  fn default() -> Self {
    Self::new()
  }
}

impl EncodeOptions {
  /// The default chunk set: both ancillary chunks present.
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self { srgb: Some(sRGBIntent::default()), background: Some(bKGD::default()) }
  }
}

/// Writes a complete PNG datastream with the default ancillary chunks.
///
/// See [`write_png_with`].
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
#[inline]
pub fn write_png<S: PngSink>(sink: &mut S, raster: &Raster) -> Result<(), PngoutError> {
  write_png_with(sink, raster, EncodeOptions::new())
}

/// Writes a complete PNG datastream.
///
/// Emits, in order: the signature, IHDR, the ancillary chunks selected by
/// `options`, one IDAT holding the whole image, and IEND.
///
/// Encoding the same raster with the same options is deterministic, so two
/// calls produce byte-identical output.
///
/// ## Failure
/// * `CheckedMath` if the IDAT payload wouldn't fit its 32-bit length field.
/// * Any sink error, at the moment it happens; partial output may already be
///   in the sink.
#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
pub fn write_png_with<S: PngSink>(
  sink: &mut S, raster: &Raster, options: EncodeOptions,
) -> Result<(), PngoutError> {
  sink.write_all(&PNG_SIGNATURE)?;
  IHDR::from(raster).write_to(sink)?;
  if let Some(intent) = options.srgb {
    intent.write_to(sink)?;
  }
  if let Some(background) = options.background {
    background.write_to(sink)?;
  }
  write_idat(sink, raster)?;
  IEND.write_to(sink)?;
  Ok(())
}

/// Writes a raster to a file at the given path.
///
/// Convenience over [`write_png`] with a buffered file sink. On error the
/// partially written file is left in place; write to a temporary path and
/// rename if you need atomic replacement.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
pub fn write_png_to_file<P: AsRef<std::path::Path>>(
  path: P, raster: &Raster,
) -> Result<(), PngoutError> {
  use std::io::Write as _;
  let file = std::fs::File::create(path)?;
  let mut sink = crate::sink::IoSink(std::io::BufWriter::new(file));
  write_png(&mut sink, raster)?;
  sink.0.flush()?;
  Ok(())
}
