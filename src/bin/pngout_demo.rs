//! Writes a 256x256 gradient test image, to prove the encoder end to end.

use pngout::png::write_png_to_file;
use pngout::{Raster, RGBA8888};

fn main() {
  let (w, h) = (256_u32, 256_u32);
  let raster = Raster::from_fn(w, h, |x, y| RGBA8888 {
    r: (255 - y * 256 / h) as u8,
    g: (x * 256 / w) as u8,
    b: ((y + 255 - x) / 2) as u8,
    a: ((x + 255 - y) / 2) as u8,
  })
  .unwrap();

  let out = std::env::args().nth(1).unwrap_or_else(|| "pngout_demo.png".to_string());
  println!("writing {w}x{h} demo image to {out}");
  if let Err(e) = write_png_to_file(&out, &raster) {
    eprintln!("{out}: {e}");
    std::process::exit(1);
  }
}
