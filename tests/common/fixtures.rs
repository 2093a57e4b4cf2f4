use grid_par::image::{AlphaMode, NrgbaBuffer, PackedImage, Raster, Rgba8};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const MOCK_WIDTH: usize = 5;
pub const MOCK_HEIGHT: usize = 5;

/// Delegate error used by the fallible entry points.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("mock delegate failure")]
pub struct MockError;

pub fn white_raster(width: usize, height: usize) -> Raster<Rgba8> {
    Raster::filled(width, height, Rgba8::WHITE)
}

pub fn black_raster(width: usize, height: usize) -> Raster<Rgba8> {
    Raster::filled(width, height, Rgba8::BLACK)
}

/// Raster where every pixel is distinct: `r = x`, `g = y`.
pub fn coordinate_raster(width: usize, height: usize) -> Raster<Rgba8> {
    Raster::from_fn(width, height, |x, y| Rgba8::new(x as u8, y as u8, 7, 255))
}

/// Packed buffer where pixel `(x, y)` holds `[x, y, x ^ y, 255]`.
pub fn coordinate_packed<M: AlphaMode>(width: usize, height: usize) -> PackedImage<M> {
    let mut img = PackedImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.put_pixel(x, y, [x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    img
}

pub fn white_nrgba(width: usize, height: usize) -> NrgbaBuffer {
    NrgbaBuffer::filled(width, height, [255, 255, 255, 255])
}

pub fn matrix<T: Clone>(width: usize, height: usize, value: T) -> Vec<Vec<T>> {
    vec![vec![value; height]; width]
}

/// Per-cell visit counters for a `width × height` grid.
pub struct VisitCounter {
    width: usize,
    hits: Vec<AtomicUsize>,
}

impl VisitCounter {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            hits: (0..width * height).map(|_| AtomicUsize::new(0)).collect(),
        }
    }

    pub fn hit(&self, x: usize, y: usize) {
        self.hits[y * self.width + x].fetch_add(1, Ordering::Relaxed);
    }

    pub fn total(&self) -> usize {
        self.hits.iter().map(|h| h.load(Ordering::Relaxed)).sum()
    }

    pub fn all_exactly_once(&self) -> bool {
        self.hits.iter().all(|h| h.load(Ordering::Relaxed) == 1)
    }
}
