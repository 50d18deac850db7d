#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_docs)]

//! A crate for *writing* PNG data without any compression library.
//!
//! The output is always 8-bit RGBA (PNG color type 6), and the image data is
//! wrapped in a Zlib stream of stored (uncompressed) DEFLATE blocks. That
//! makes the files large but byte-exact and dependency-free: the only two
//! algorithms involved are the CRC-32 that PNG runs over each chunk and the
//! Adler-32 that Zlib runs over the image bytes, and both live in this crate.
//!
//! The usual entry point is [`png::write_png`], which takes any
//! [`PngSink`] and a [`Raster`]. With the `std` feature there's also
//! [`png::write_png_to_file`].

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

pub mod pixel_formats;
pub use pixel_formats::*;

pub mod error;
pub use error::*;

pub mod crc32;

pub mod adler32;

pub mod int_endian;

pub mod sink;
pub use sink::*;

#[cfg(feature = "alloc")]
pub mod image;
#[cfg(feature = "alloc")]
pub use image::*;

pub mod png;
