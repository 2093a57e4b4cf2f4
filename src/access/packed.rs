use super::{check_cell, GridRead, GridWrite};
use crate::image::CHANNELS;
use crate::index::index_to_offset;
use std::marker::PhantomData;
use std::ptr::NonNull;

fn check_packed(len: usize, width: usize, height: usize) {
    let needed = width.checked_mul(height).and_then(|n| n.checked_mul(CHANNELS));
    assert!(
        needed.is_some_and(|needed| len >= needed),
        "packed buffer of {len} bytes too short for {width}x{height}"
    );
}

/// Read-only accessor decoding four channel bytes per cell.
#[derive(Clone, Copy, Debug)]
pub struct PackedView<'a> {
    pix: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PackedView<'a> {
    pub fn new(pix: &'a [u8], width: usize, height: usize) -> Self {
        check_packed(pix.len(), width, height);
        Self { pix, width, height }
    }

    #[inline]
    pub fn channels(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        check_cell(x, y, self.width, self.height);
        let i = CHANNELS * index_to_offset(x, y, self.width);
        [self.pix[i], self.pix[i + 1], self.pix[i + 2], self.pix[i + 3]]
    }
}

unsafe impl<'a> GridRead for PackedView<'a> {
    type Value = [u8; CHANNELS];

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    unsafe fn read(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        self.channels(x, y)
    }
}

/// Read-write accessor over four channel bytes per cell, shareable across tasks.
#[derive(Debug)]
pub struct PackedViewMut<'a> {
    ptr: NonNull<u8>,
    width: usize,
    height: usize,
    marker: PhantomData<&'a mut [u8]>,
}

// SAFETY: exclusive borrow of the bytes, accessed per disjoint cell.
unsafe impl Send for PackedViewMut<'_> {}
unsafe impl Sync for PackedViewMut<'_> {}

impl<'a> PackedViewMut<'a> {
    pub fn new(pix: &'a mut [u8], width: usize, height: usize) -> Self {
        check_packed(pix.len(), width, height);
        Self {
            ptr: NonNull::from(pix).cast(),
            width,
            height,
            marker: PhantomData,
        }
    }

    #[inline]
    fn cell_ptr(&self, x: usize, y: usize) -> *mut [u8; CHANNELS] {
        check_cell(x, y, self.width, self.height);
        // SAFETY: in bounds per check_packed; [u8; 4] has alignment 1.
        unsafe {
            self.ptr
                .as_ptr()
                .add(CHANNELS * index_to_offset(x, y, self.width))
                .cast()
        }
    }
}

unsafe impl<'a> GridRead for PackedViewMut<'a> {
    type Value = [u8; CHANNELS];

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    unsafe fn read(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        *self.cell_ptr(x, y)
    }
}

unsafe impl<'a> GridWrite for PackedViewMut<'a> {
    #[inline]
    unsafe fn write(&self, x: usize, y: usize, value: [u8; CHANNELS]) {
        *self.cell_ptr(x, y) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{PackedView, PackedViewMut};
    use crate::access::{GridRead, GridWrite};

    #[test]
    fn decodes_channels_at_byte_offset() {
        let pix: Vec<u8> = (0..24).collect();
        let view = PackedView::new(&pix, 3, 2);
        assert_eq!(view.channels(0, 0), [0, 1, 2, 3]);
        assert_eq!(view.channels(2, 0), [8, 9, 10, 11]);
        assert_eq!(unsafe { view.read(1, 1) }, [16, 17, 18, 19]);
    }

    #[test]
    fn encodes_channels_in_place() {
        let mut pix = vec![0u8; 16];
        {
            let view = PackedViewMut::new(&mut pix, 2, 2);
            unsafe { view.write(1, 1, [4, 3, 2, 1]) };
            assert_eq!(unsafe { view.read(1, 1) }, [4, 3, 2, 1]);
        }
        assert_eq!(&pix[12..], &[4, 3, 2, 1]);
        assert!(pix[..12].iter().all(|&b| b == 0));
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn rejects_short_buffers() {
        let mut pix = vec![0u8; 15];
        PackedViewMut::new(&mut pix, 2, 2);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn rejects_dimensions_overflowing_byte_count() {
        PackedView::new(&[], usize::MAX / 2, 3);
    }
}
