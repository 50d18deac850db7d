#![forbid(unsafe_code)]

//! Where the encoded bytes go.
//!
//! The encoder streams: it never holds the whole output in memory, it just
//! pushes byte runs at a [`PngSink`] in order. A failed write aborts the
//! encode immediately, so the sink may already hold partial output when an
//! error comes back.

use crate::error::PngoutError;

/// A byte-oriented output sink for the encoder.
pub trait PngSink {
  /// Writes the whole byte run, or reports the first failure.
  fn write_all(&mut self, bytes: &[u8]) -> Result<(), PngoutError>;
}

#[cfg(feature = "alloc")]
#[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
impl PngSink for alloc::vec::Vec<u8> {
  #[inline]
  fn write_all(&mut self, bytes: &[u8]) -> Result<(), PngoutError> {
    self.try_reserve(bytes.len())?;
    self.extend_from_slice(bytes);
    Ok(())
  }
}

/// Adapts any [`std::io::Write`] into a [`PngSink`].
///
/// This is a wrapper rather than a blanket impl so that `Vec<u8>` (which is
/// also `io::Write`) keeps its infallible-reserve impl above.
#[cfg(feature = "std")]
#[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
#[derive(Debug, Clone)]
pub struct IoSink<W>(pub W);

#[cfg(feature = "std")]
impl<W: std::io::Write> PngSink for IoSink<W> {
  #[inline]
  fn write_all(&mut self, bytes: &[u8]) -> Result<(), PngoutError> {
    self.0.write_all(bytes)?;
    Ok(())
  }
}
