use super::*;

/// Image End. Always the last chunk, always empty.
///
/// Spec: [IEND](https://www.w3.org/TR/png/#11IEND)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IEND;

impl IEND {
  /// Writes the framed IEND chunk.
  #[inline]
  pub fn write_to<S: PngSink>(self, sink: &mut S) -> Result<(), PngoutError> {
    write_chunk(sink, ChunkTy::IEND, &[])
  }
}
