#![allow(dead_code)]

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use mezzotone::image::RgbaBitmap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

pub const FIXTURE_WIDTH: u32 = 160;
pub const FIXTURE_HEIGHT: u32 = 96;

/// Smooth RGB gradient with a black block, a white block and a red diagonal.
pub fn gradient_edges_rgba() -> RgbaImage {
    let (w, h) = (FIXTURE_WIDTH, FIXTURE_HEIGHT);
    let mut img = RgbaImage::from_fn(w, h, |x, y| {
        let r = (x * 255 / (w - 1)) as u8;
        let g = (y * 255 / (h - 1)) as u8;
        let b = ((x + y) * 255 / (w + h - 2)) as u8;
        Rgba([r, g, b, 255])
    });
    for y in 12..46 {
        for x in 16..70 {
            img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    for y in 50..86 {
        for x in 95..150 {
            img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
        }
    }
    for i in 0..96u32 {
        let (x, y) = (20 + i, 95 - i);
        if x < w && y < h {
            img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
        }
    }
    img
}

pub fn gradient_edges_bitmap() -> RgbaBitmap {
    RgbaBitmap::from(gradient_edges_rgba())
}

/// The fixture encoded as PNG bytes.
pub fn gradient_edges_png() -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(gradient_edges_rgba())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode fixture");
    buf
}

/// Bytes that no decoder accepts.
pub fn corrupt_bytes() -> &'static [u8] {
    b"this-is-not-a-valid-png"
}

/// Seeded RGBA noise; the same seed always gives the same bitmap.
pub fn noise_bitmap(width: usize, height: usize, seed: u64) -> RgbaBitmap {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width * height).map(|_| rng.gen::<[u8; 4]>()).collect();
    RgbaBitmap::new(width, height, data).expect("sized buffer")
}
