//! Cell accessors shared between engine tasks.
//!
//! An accessor is a `Sync` handle through which several tasks read and write
//! cells of one grid at the same time. None of them lock: the engine hands
//! every cell to exactly one task (partitions are disjoint), and that is the
//! whole synchronisation story. This is why [`GridRead::read`] and
//! [`GridWrite::write`] are `unsafe` to call.
//!
//! Disjointness only holds within one run. The engine therefore borrows a
//! writable accessor as `&mut` for the duration of a run, which keeps other
//! runs and the run's own delegates away from it.
//!
//! Three storages are provided:
//! - [`SliceView`] / [`SliceViewMut`]: any row-major slice with a stride,
//!   i.e. every [`ImageView`](crate::image::ImageView).
//! - [`MatrixView`]: a column-indexed `[Vec<T>]` matrix (`m[x][y]`).
//! - [`PackedView`] / [`PackedViewMut`]: 4-channel byte buffers, decoded to
//!   `[u8; 4]` straight from the bytes.

mod matrix;
mod packed;
mod slice;

pub use self::matrix::{matrix_size, MatrixView};
pub use self::packed::{PackedView, PackedViewMut};
pub use self::slice::{SliceView, SliceViewMut};

/// Read capability of a grid accessor.
///
/// # Safety
///
/// Implementors must be sound when `read` and [`GridWrite::write`] are called
/// from several threads at once for *distinct* in-bounds cells, and must
/// report the true grid size from `dimensions`.
pub unsafe trait GridRead: Sync {
    type Value;

    /// `(width, height)` of the grid.
    fn dimensions(&self) -> (usize, usize);

    /// Read cell `(x, y)`.
    ///
    /// # Safety
    ///
    /// No other thread may write `(x, y)` during the call.
    unsafe fn read(&self, x: usize, y: usize) -> Self::Value;
}

/// Write capability of a grid accessor.
///
/// # Safety
///
/// See [`GridRead`].
pub unsafe trait GridWrite: GridRead {
    /// Overwrite cell `(x, y)`.
    ///
    /// # Safety
    ///
    /// No other thread may read or write `(x, y)` during the call.
    unsafe fn write(&self, x: usize, y: usize, value: Self::Value);
}

#[inline]
fn check_cell(x: usize, y: usize, width: usize, height: usize) {
    assert!(
        x < width && y < height,
        "cell ({x}, {y}) outside {width}x{height} grid"
    );
}
