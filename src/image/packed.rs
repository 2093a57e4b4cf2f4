//! Packed 4-channel, 8-bit-per-channel pixel buffers.
//!
//! Pixels are stored as `width * height * 4` bytes in row-major order without
//! row padding, so pixel `(x, y)` starts at byte `4 * (y * width + x)`. The
//! alpha interpretation is a type-level tag: [`RgbaBuffer`] holds
//! premultiplied colors, [`NrgbaBuffer`] holds straight (non-premultiplied)
//! colors. The parallel entry points treat both identically and never convert
//! between them.
use crate::access::{PackedView, PackedViewMut};
use crate::index::index_to_offset;
use std::fmt;
use std::marker::PhantomData;

/// Bytes per packed pixel.
pub const CHANNELS: usize = 4;

/// Alpha interpretation of a [`PackedImage`].
pub trait AlphaMode: Send + Sync + 'static {
    const NAME: &'static str;
}

/// Color channels are premultiplied by alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Premultiplied;

/// Color channels are independent of alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Straight;

impl AlphaMode for Premultiplied {
    const NAME: &'static str = "rgba";
}

impl AlphaMode for Straight {
    const NAME: &'static str = "nrgba";
}

pub type RgbaBuffer = PackedImage<Premultiplied>;
pub type NrgbaBuffer = PackedImage<Straight>;

#[derive(Clone, PartialEq, Eq)]
pub struct PackedImage<M> {
    width: usize,
    height: usize,
    pix: Vec<u8>,
    mode: PhantomData<M>,
}

impl<M: AlphaMode> PackedImage<M> {
    /// Zero-initialised (transparent black) buffer.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, [0; CHANNELS])
    }

    pub fn filled(width: usize, height: usize, channels: [u8; CHANNELS]) -> Self {
        let mut pix = Vec::with_capacity(width * height * CHANNELS);
        for _ in 0..width * height {
            pix.extend_from_slice(&channels);
        }
        Self {
            width,
            height,
            pix,
            mode: PhantomData,
        }
    }

    /// Wrap raw bytes; `None` if `pix.len() != width * height * 4`.
    pub fn from_raw(width: usize, height: usize, pix: Vec<u8>) -> Option<Self> {
        (pix.len() == width * height * CHANNELS).then_some(Self {
            width,
            height,
            pix,
            mode: PhantomData,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn byte_offset(&self, x: usize, y: usize) -> usize {
        CHANNELS * index_to_offset(x, y, self.width)
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = self.byte_offset(x, y);
        [self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3]]
    }

    #[inline]
    pub fn put_pixel(&mut self, x: usize, y: usize, channels: [u8; CHANNELS]) {
        let i = self.byte_offset(x, y);
        self.pix[i..i + CHANNELS].copy_from_slice(&channels);
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.pix
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.pix
    }

    /// Read-only channel accessor for the parallel engine.
    pub fn view(&self) -> PackedView<'_> {
        PackedView::new(&self.pix, self.width, self.height)
    }

    /// Shared read-write channel accessor for the parallel engine.
    pub fn view_mut(&mut self) -> PackedViewMut<'_> {
        PackedViewMut::new(&mut self.pix, self.width, self.height)
    }
}

impl<M: AlphaMode> fmt::Debug for PackedImage<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackedImage")
            .field("mode", &M::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.pix.len())
            .finish()
    }
}
