use pngout::png::{write_png, EncodeOptions, MAX_STORED_BLOCK, PNG_SIGNATURE};
use pngout::{Raster, RGBA8888};

/// Splits an encoded PNG into its `(type, payload)` chunks.
fn chunks_of(bytes: &[u8]) -> Vec<([u8; 4], Vec<u8>)> {
  assert_eq!(&bytes[..8], &PNG_SIGNATURE);
  let mut rest = &bytes[8..];
  let mut out = Vec::new();
  while !rest.is_empty() {
    let len = u32::from_be_bytes(rest[0..4].try_into().unwrap()) as usize;
    let ty: [u8; 4] = rest[4..8].try_into().unwrap();
    out.push((ty, rest[8..8 + len].to_vec()));
    rest = &rest[12 + len..];
  }
  out
}

fn idat_payload(bytes: &[u8]) -> Vec<u8> {
  chunks_of(bytes)
    .into_iter()
    .find(|(ty, _)| ty == b"IDAT")
    .map(|(_, payload)| payload)
    .unwrap()
}

/// Decodes with the independent `png` crate and returns (w, h, rgba bytes).
fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
  let decoder = ::png::Decoder::new(std::io::Cursor::new(bytes));
  let mut reader = decoder.read_info().unwrap();
  let mut buf = vec![0; reader.output_buffer_size()];
  let info = reader.next_frame(&mut buf).unwrap();
  assert_eq!(info.color_type, ::png::ColorType::Rgba);
  assert_eq!(info.bit_depth, ::png::BitDepth::Eight);
  buf.truncate(info.buffer_size());
  (info.width, info.height, buf)
}

fn encode(raster: &Raster) -> Vec<u8> {
  let mut out = Vec::new();
  write_png(&mut out, raster).unwrap();
  out
}

fn random_raster(width: u32, height: u32) -> Raster {
  let bytes = super::rand_bytes(width as usize * height as usize * 4);
  let pixels = bytes
    .chunks_exact(4)
    .map(|c| RGBA8888 { r: c[0], g: c[1], b: c[2], a: c[3] })
    .collect();
  Raster::from_pixels(width, height, pixels).unwrap()
}

#[test]
fn test_two_pixel_reference_image() {
  // the red and green pixels, checked field by field against the format
  let raster = Raster::from_pixels(
    2,
    1,
    vec![RGBA8888::opaque(255, 0, 0), RGBA8888::opaque(0, 255, 0)],
  )
  .unwrap();
  let encoded = encode(&raster);

  let chunks = chunks_of(&encoded);
  assert_eq!(chunks[0].0, *b"IHDR");
  let ihdr = &chunks[0].1;
  assert_eq!(ihdr[0..4], [0, 0, 0, 2]); // width 2
  assert_eq!(ihdr[4..8], [0, 0, 0, 1]); // height 1
  assert_eq!(ihdr[8], 8); // bit depth
  assert_eq!(ihdr[9], 6); // truecolor with alpha

  // the Zlib stream's Adler-32 trailer covers exactly the filtered scanline
  // bytes [0, 255,0,0,255, 0,255,0,255]; 0x10F803FD computed by hand
  let idat = idat_payload(&encoded);
  assert_eq!(idat[idat.len() - 4..], 0x10F8_03FD_u32.to_be_bytes());

  let (w, h, data) = decode(&encoded);
  assert_eq!((w, h), (2, 1));
  assert_eq!(data, [255, 0, 0, 255, 0, 255, 0, 255]);
}

#[test]
fn test_one_pixel_image_decodes() {
  let raster = Raster::from_pixels(1, 1, vec![RGBA8888::opaque(7, 8, 9)]).unwrap();
  let (w, h, data) = decode(&encode(&raster));
  assert_eq!((w, h), (1, 1));
  assert_eq!(data, [7, 8, 9, 255]);
}

#[test]
fn test_encoding_is_deterministic() {
  let raster = random_raster(33, 17);
  assert_eq!(encode(&raster), encode(&raster));
}

#[test]
fn test_random_rasters_round_trip() {
  for (w, h) in [(1, 1), (3, 5), (64, 64), (255, 3), (2, 130)] {
    let raster = random_raster(w, h);
    let encoded = encode(&raster);
    let (got_w, got_h, data) = decode(&encoded);
    assert_eq!((got_w, got_h), (w, h), "failed {w}x{h}");
    assert_eq!(data, bytemuck::cast_slice::<RGBA8888, u8>(raster.pixels()), "failed {w}x{h}");
  }
}

#[test]
fn test_row_spanning_multiple_stored_blocks() {
  // 49151 * 4 + 1 == 3 * 65535: the scanline fills three blocks exactly,
  // and there must be no empty trailing block after them
  let raster = random_raster(49151, 1);
  let encoded = encode(&raster);

  let idat = idat_payload(&encoded);
  let mut rest = &idat[2..idat.len() - 4];
  let mut block_lens = Vec::new();
  let mut saw_final = false;
  while !rest.is_empty() {
    assert!(!saw_final, "data after the final block");
    saw_final = rest[0] == 1;
    let len = u16::from_le_bytes([rest[1], rest[2]]) as usize;
    let complement = u16::from_le_bytes([rest[3], rest[4]]);
    assert_eq!(!complement, len as u16);
    assert!(len > 0, "zero-length stored block");
    block_lens.push(len);
    rest = &rest[5 + len..];
  }
  assert!(saw_final);
  assert_eq!(block_lens, [MAX_STORED_BLOCK, MAX_STORED_BLOCK, MAX_STORED_BLOCK]);

  let (w, h, data) = decode(&encoded);
  assert_eq!((w, h), (49151, 1));
  assert_eq!(data, bytemuck::cast_slice::<RGBA8888, u8>(raster.pixels()));
}

#[test]
fn test_remainder_block_after_a_full_block() {
  // 16384 * 4 + 1 == 65537: one full block then a 2-byte remainder
  let raster = random_raster(16384, 1);
  let encoded = encode(&raster);

  let idat = idat_payload(&encoded);
  let first_len = u16::from_le_bytes([idat[3], idat[4]]) as usize;
  assert_eq!(idat[2], 0);
  assert_eq!(first_len, MAX_STORED_BLOCK);
  let second = &idat[2 + 5 + first_len..];
  assert_eq!(second[0], 1);
  assert_eq!(u16::from_le_bytes([second[1], second[2]]), 2);

  let (_, _, data) = decode(&encoded);
  assert_eq!(data, bytemuck::cast_slice::<RGBA8888, u8>(raster.pixels()));
}

#[test]
fn test_ancillary_chunks_appear_in_order() {
  let raster = Raster::new(4, 4).unwrap();
  let encoded = encode(&raster);
  let types: Vec<[u8; 4]> = chunks_of(&encoded).into_iter().map(|(ty, _)| ty).collect();
  assert_eq!(types, [*b"IHDR", *b"sRGB", *b"bKGD", *b"IDAT", *b"IEND"]);

  // the fixed default background bytes
  let bkgd = &chunks_of(&encoded)[2].1;
  assert_eq!(bkgd[..], [0, 255, 0, 255, 0, 255]);

  // the decoder accepts the stripped-down chunk set too
  let mut bare = Vec::new();
  pngout::png::write_png_with(
    &mut bare,
    &raster,
    EncodeOptions { srgb: None, background: None },
  )
  .unwrap();
  let (w, h, _) = decode(&bare);
  assert_eq!((w, h), (4, 4));
}
