//! Owned per-cell buffer in row-major layout (stride == width).
//!
//! One element per output glyph cell. The pipeline instantiates it as
//! `Grid<f32>` (luminance, DoG response), `Grid<EdgeInfo>` and `Grid<char>`.
use super::traits::{ImageView, ImageViewMut};

#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    /// Number of columns
    pub w: usize,
    /// Number of rows
    pub h: usize,
    /// Backing storage in row-major order
    pub data: Vec<T>,
}

impl<T: Copy + Default> Grid<T> {
    /// Construct a default-initialized grid of `w × h` cells.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            data: vec![T::default(); w * h],
        }
    }
}

impl<T: Copy> Grid<T> {
    /// Construct a grid filled with `value`.
    pub fn filled(w: usize, h: usize, value: T) -> Self {
        Self {
            w,
            h,
            data: vec![value; w * h],
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: T) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// Combine two grids of identical dimensions element by element.
    pub fn zip_map<U: Copy, R: Copy>(&self, other: &Grid<U>, f: impl Fn(T, U) -> R) -> Grid<R> {
        debug_assert_eq!((self.w, self.h), (other.w, other.h));
        Grid {
            w: self.w,
            h: self.h,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

impl<T: Copy> ImageView for Grid<T> {
    type Pixel = T;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[T] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

impl<T: Copy> ImageViewMut for Grid<T> {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.w;
        &mut self.data[start..start + self.w]
    }
}
