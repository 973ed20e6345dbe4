//! RGBA8 source bitmaps: an owned buffer and the borrowed view the pipeline
//! reads from.
use super::traits::ImageView;
use image::RgbaImage;

/// Borrowed RGBA8 image, one `[r, g, b, a]` entry per pixel.
#[derive(Clone, Copy, Debug)]
pub struct ImageRgba8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [[u8; 4]],
}

impl<'a> ImageRgba8<'a> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        self.data[y * self.stride + x]
    }
}

impl<'a> ImageView for ImageRgba8<'a> {
    type Pixel = [u8; 4];

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[[u8; 4]] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

/// Owned, tightly packed RGBA8 bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaBitmap {
    width: usize,
    height: usize,
    data: Vec<[u8; 4]>,
}

impl RgbaBitmap {
    /// Wrap raw pixels; returns `None` when `data.len() != width * height`.
    pub fn new(width: usize, height: usize, data: Vec<[u8; 4]>) -> Option<Self> {
        (data.len() == width * height).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Borrow as a read-only `ImageRgba8` view
    pub fn as_view(&self) -> ImageRgba8<'_> {
        ImageRgba8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl From<RgbaImage> for RgbaBitmap {
    fn from(img: RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let data = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            data,
        }
    }
}

impl From<&RgbaImage> for RgbaBitmap {
    fn from(img: &RgbaImage) -> Self {
        let width = img.width() as usize;
        let height = img.height() as usize;
        let data = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            data,
        }
    }
}
