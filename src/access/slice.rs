use super::{check_cell, GridRead, GridWrite};
use crate::index::index_to_offset;
use std::marker::PhantomData;
use std::ptr::NonNull;

fn check_storage(len: usize, width: usize, height: usize, stride: usize) {
    assert!(stride >= width, "stride {stride} shorter than width {width}");
    if width > 0 && height > 0 {
        let needed = (height - 1) * stride + width;
        assert!(
            len >= needed,
            "buffer of {len} pixels too short for {width}x{height} (stride {stride})"
        );
    }
}

/// Read-only accessor over a strided row-major slice.
#[derive(Clone, Copy, Debug)]
pub struct SliceView<'a, P> {
    data: &'a [P],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, P: Copy> SliceView<'a, P> {
    pub fn new(data: &'a [P], width: usize, height: usize, stride: usize) -> Self {
        check_storage(data.len(), width, height, stride);
        Self {
            data,
            width,
            height,
            stride,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> P {
        check_cell(x, y, self.width, self.height);
        self.data[index_to_offset(x, y, self.stride)]
    }
}

unsafe impl<'a, P: Copy + Sync> GridRead for SliceView<'a, P> {
    type Value = P;

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    unsafe fn read(&self, x: usize, y: usize) -> P {
        self.get(x, y)
    }
}

/// Read-write accessor over a strided row-major slice, shareable across tasks.
#[derive(Debug)]
pub struct SliceViewMut<'a, P> {
    ptr: NonNull<P>,
    width: usize,
    height: usize,
    stride: usize,
    marker: PhantomData<&'a mut [P]>,
}

// SAFETY: the view is an exclusive borrow of the slice; concurrent use is
// limited to distinct cells by the `GridRead`/`GridWrite` contracts.
unsafe impl<P: Send> Send for SliceViewMut<'_, P> {}
unsafe impl<P: Send + Sync> Sync for SliceViewMut<'_, P> {}

impl<'a, P: Copy> SliceViewMut<'a, P> {
    pub fn new(data: &'a mut [P], width: usize, height: usize, stride: usize) -> Self {
        check_storage(data.len(), width, height, stride);
        Self {
            ptr: NonNull::from(data).cast(),
            width,
            height,
            stride,
            marker: PhantomData,
        }
    }

    #[inline]
    fn cell_ptr(&self, x: usize, y: usize) -> *mut P {
        check_cell(x, y, self.width, self.height);
        // SAFETY: (x, y) is in bounds and check_storage covered the last cell.
        unsafe { self.ptr.as_ptr().add(index_to_offset(x, y, self.stride)) }
    }
}

unsafe impl<'a, P: Copy + Send + Sync> GridRead for SliceViewMut<'a, P> {
    type Value = P;

    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    unsafe fn read(&self, x: usize, y: usize) -> P {
        *self.cell_ptr(x, y)
    }
}

unsafe impl<'a, P: Copy + Send + Sync> GridWrite for SliceViewMut<'a, P> {
    #[inline]
    unsafe fn write(&self, x: usize, y: usize, value: P) {
        *self.cell_ptr(x, y) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{SliceView, SliceViewMut};
    use crate::access::{GridRead, GridWrite};

    #[test]
    fn strided_reads_skip_padding() {
        let data = [1, 2, 99, 3, 4, 99];
        let view = SliceView::new(&data, 2, 2, 3);
        assert_eq!(view.dimensions(), (2, 2));
        assert_eq!(view.get(0, 1), 3);
        assert_eq!(unsafe { view.read(1, 1) }, 4);
    }

    #[test]
    fn writes_land_in_backing_slice() {
        let mut data = vec![0u16; 6];
        {
            let view = SliceViewMut::new(&mut data, 2, 2, 3);
            unsafe {
                view.write(1, 0, 7);
                view.write(0, 1, 9);
                assert_eq!(view.read(1, 0), 7);
            }
        }
        assert_eq!(data, vec![0, 7, 0, 9, 0, 0]);
    }

    #[test]
    #[should_panic(expected = "too short")]
    fn rejects_short_buffers() {
        let data = [0u8; 5];
        SliceView::new(&data, 3, 2, 3);
    }

    #[test]
    #[should_panic(expected = "outside 2x2 grid")]
    fn rejects_out_of_bounds_cells() {
        let data = [0u8; 4];
        SliceView::new(&data, 2, 2, 2).get(2, 0);
    }
}
