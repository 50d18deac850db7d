//! The crate's error type.

/// An error from the `pngout` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PngoutError {
  /// The declared width and/or height of the image is 0.
  WidthOrHeightZero,

  /// The pixel buffer's length doesn't match `width * height`.
  PixelCountMismatch,

  /// A checked math operation failed.
  ///
  /// For the encoder this means some computed length doesn't fit the field it
  /// targets, such as an IDAT payload bigger than `u32::MAX`. Nothing is
  /// written in that case.
  CheckedMath,

  /// The allocator couldn't give us enough space.
  #[cfg(feature = "alloc")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "alloc")))]
  Alloc,

  /// Writing to the output sink failed.
  ///
  /// Partial output may already have been emitted. The encoder never
  /// retries; callers wanting atomic files should write to a temporary path
  /// and rename on success.
  #[cfg(feature = "std")]
  #[cfg_attr(docs_rs, doc(cfg(feature = "std")))]
  Io(std::io::ErrorKind),
}

#[cfg(feature = "alloc")]
impl From<alloc::collections::TryReserveError> for PngoutError {
  #[inline]
  fn from(_: alloc::collections::TryReserveError) -> Self {
    Self::Alloc
  }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for PngoutError {
  #[inline]
  fn from(e: std::io::Error) -> Self {
    Self::Io(e.kind())
  }
}

impl core::fmt::Display for PngoutError {
  #[inline]
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self {
      Self::WidthOrHeightZero => write!(f, "image width and/or height is zero"),
      Self::PixelCountMismatch => write!(f, "pixel buffer length doesn't match width * height"),
      Self::CheckedMath => write!(f, "a computed length doesn't fit its field"),
      #[cfg(feature = "alloc")]
      Self::Alloc => write!(f, "allocation failure"),
      #[cfg(feature = "std")]
      Self::Io(kind) => write!(f, "io failure: {kind}"),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for PngoutError {}
