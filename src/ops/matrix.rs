use crate::access::MatrixView;
use crate::engine::{CellError, Engine};
use crate::partition::Strategy;

/// Replace every `m[x][y]` with `delegate(x, y, m[x][y])`, one task per column.
///
/// Panics on an empty or jagged matrix, before any task starts.
pub fn parallel_matrix_read_write<T, F>(m: &mut [Vec<T>], delegate: F)
where
    T: Clone + Send + Sync,
    F: Fn(usize, usize, T) -> T + Sync,
{
    Engine::with_strategy(Strategy::Columns).read_write(&mut MatrixView::new(m), delegate)
}

/// Fallible [`parallel_matrix_read_write`]; stops at the first error.
pub fn try_parallel_matrix_read_write<T, F, E>(
    m: &mut [Vec<T>],
    delegate: F,
) -> Result<(), CellError<E>>
where
    T: Clone + Send + Sync,
    F: Fn(usize, usize, T) -> Result<T, E> + Sync,
    E: Send,
{
    Engine::with_strategy(Strategy::Columns).try_read_write(&mut MatrixView::new(m), delegate)
}
