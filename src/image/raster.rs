//! Generic row-major rasters.
//!
//! [`Raster`] owns its pixels; [`RasterView`] borrows them, possibly with a
//! stride larger than the width. Both implement [`ImageView`], so every
//! general entry point works for any `Copy` pixel type: `f32` intensities,
//! `[u8; 4]` channel tuples, [`Rgba8`](super::Rgba8) colors, etc.
use super::traits::{ImageView, ImageViewMut};

/// Owned `w × h` image, `stride == w`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<P> {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<P>,
}

impl<P: Copy> Raster<P> {
    /// Construct a `w × h` raster with every pixel set to `value`.
    pub fn filled(w: usize, h: usize, value: P) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Construct a raster by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(w: usize, h: usize, mut f: impl FnMut(usize, usize) -> P) -> Self {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(f(x, y));
            }
        }
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }

    /// Wrap an existing row-major buffer; `None` if the length does not match.
    pub fn from_vec(w: usize, h: usize, data: Vec<P>) -> Option<Self> {
        (data.len() == w * h).then_some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Compact copy of any image view.
    pub fn from_view<V>(view: &V) -> Self
    where
        V: ImageView<Pixel = P>,
    {
        let mut data = Vec::with_capacity(view.width() * view.height());
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self {
            w: view.width(),
            h: view.height(),
            stride: view.width(),
            data,
        }
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: P) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    pub fn as_view(&self) -> RasterView<'_, P> {
        RasterView {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl<P: Copy> ImageView for Raster<P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn pixels(&self) -> &[P] {
        &self.data
    }
}

impl<P: Copy> ImageViewMut for Raster<P> {
    #[inline]
    fn pixels_mut(&mut self) -> &mut [P] {
        &mut self.data
    }
}

/// Borrowed image with an explicit stride.
#[derive(Clone, Copy, Debug)]
pub struct RasterView<'a, P> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // pixels between rows
    pub data: &'a [P],
}

impl<'a, P: Copy> RasterView<'a, P> {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        self.data[y * self.stride + x]
    }
}

impl<'a, P: Copy> ImageView for RasterView<'a, P> {
    type Pixel = P;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn pixels(&self) -> &[P] {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::{Raster, RasterView};
    use crate::image::ImageView;

    #[test]
    fn from_fn_is_row_major() {
        let r = Raster::from_fn(3, 2, |x, y| (x + 10 * y) as u32);
        assert_eq!(r.data, vec![0, 1, 2, 10, 11, 12]);
        assert_eq!(r.get(2, 1), 12);
    }

    #[test]
    fn strided_view_compacts_into_raster() {
        // 2×2 image stored with one padding pixel per row.
        let storage = [1u8, 2, 0, 3, 4, 0];
        let view = RasterView {
            w: 2,
            h: 2,
            stride: 3,
            data: &storage,
        };
        assert!(!view.is_contiguous());
        assert_eq!(view.as_slice(), None);
        assert_eq!(view.row(1), &[3, 4]);
        assert_eq!(view.rows().len(), 2);
        assert_eq!(view.rows().last(), Some(&[3u8, 4][..]));

        let owned = Raster::from_view(&view);
        assert_eq!(owned.data, vec![1, 2, 3, 4]);
        assert_eq!(owned.as_slice(), Some(&[1u8, 2, 3, 4][..]));
    }

    #[test]
    fn from_vec_checks_length() {
        assert!(Raster::from_vec(2, 2, vec![0u8; 3]).is_none());
        assert!(Raster::from_vec(2, 2, vec![0u8; 4]).is_some());
    }
}
