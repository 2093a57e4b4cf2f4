use super::{check_cell, GridRead, GridWrite};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// `(width, height)` of a column-indexed matrix `m[x][y]`.
///
/// `None` when the matrix has no columns, the first column is empty, or the
/// columns have different lengths.
pub fn matrix_size<T>(m: &[Vec<T>]) -> Option<(usize, usize)> {
    let width = m.len();
    let height = m.first()?.len();
    if height == 0 || m.iter().any(|col| col.len() != height) {
        return None;
    }
    Some((width, height))
}

/// Read-write accessor over `m[x][y]` for arbitrary element types.
///
/// Elements are cloned out for the delegate and the returned value replaces
/// (and drops) the old one.
#[derive(Debug)]
pub struct MatrixView<'a, T> {
    columns: Vec<NonNull<T>>,
    height: usize,
    marker: PhantomData<&'a mut [Vec<T>]>,
}

// SAFETY: exclusive borrow of the matrix, accessed per disjoint cell.
unsafe impl<T: Send> Send for MatrixView<'_, T> {}
unsafe impl<T: Send + Sync> Sync for MatrixView<'_, T> {}

impl<'a, T> MatrixView<'a, T> {
    /// Panics on an empty or jagged matrix.
    pub fn new(m: &'a mut [Vec<T>]) -> Self {
        let Some((_, height)) = matrix_size(m) else {
            panic!("matrix: empty or inconsistent column lengths");
        };
        let columns = m
            .iter_mut()
            .map(|col| NonNull::from(col.as_mut_slice()).cast())
            .collect();
        Self {
            columns,
            height,
            marker: PhantomData,
        }
    }

    #[inline]
    fn cell_ptr(&self, x: usize, y: usize) -> *mut T {
        check_cell(x, y, self.columns.len(), self.height);
        // SAFETY: every column holds `height` elements.
        unsafe { self.columns[x].as_ptr().add(y) }
    }
}

unsafe impl<'a, T: Clone + Send + Sync> GridRead for MatrixView<'a, T> {
    type Value = T;

    fn dimensions(&self) -> (usize, usize) {
        (self.columns.len(), self.height)
    }

    #[inline]
    unsafe fn read(&self, x: usize, y: usize) -> T {
        (*self.cell_ptr(x, y)).clone()
    }
}

unsafe impl<'a, T: Clone + Send + Sync> GridWrite for MatrixView<'a, T> {
    #[inline]
    unsafe fn write(&self, x: usize, y: usize, value: T) {
        *self.cell_ptr(x, y) = value;
    }
}

#[cfg(test)]
mod tests {
    use super::{matrix_size, MatrixView};
    use crate::access::{GridRead, GridWrite};

    fn matrix(width: usize, height: usize) -> Vec<Vec<i32>> {
        vec![vec![0; height]; width]
    }

    #[test]
    fn size_of_valid_matrices() {
        assert_eq!(matrix_size(&matrix(1, 1)), Some((1, 1)));
        assert_eq!(matrix_size(&matrix(2, 1)), Some((2, 1)));
        assert_eq!(matrix_size(&matrix(1, 2)), Some((1, 2)));
        assert_eq!(matrix_size(&matrix(3, 4)), Some((3, 4)));
    }

    #[test]
    fn size_rejects_empty_matrices() {
        assert_eq!(matrix_size::<i32>(&[]), None);
        assert_eq!(matrix_size(&matrix(3, 0)), None);
    }

    #[test]
    fn size_rejects_jagged_matrices() {
        let m = vec![vec![true; 2], vec![true; 2], vec![true; 1]];
        assert_eq!(matrix_size(&m), None);
    }

    #[test]
    fn writes_replace_owned_values() {
        let mut m = vec![vec![String::from("a"); 2]; 2];
        {
            let view = MatrixView::new(&mut m);
            assert_eq!(view.dimensions(), (2, 2));
            unsafe {
                let old = view.read(1, 0);
                view.write(1, 0, old + "b");
            }
        }
        assert_eq!(m[1][0], "ab");
        assert_eq!(m[0][0], "a");
    }

    #[test]
    #[should_panic(expected = "inconsistent column lengths")]
    fn view_rejects_jagged_matrix() {
        let mut m = vec![vec![0u8; 2], vec![0u8; 1]];
        MatrixView::new(&mut m);
    }
}
