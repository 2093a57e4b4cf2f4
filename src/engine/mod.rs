//! Parallel partitioned grid iteration.
//!
//! One engine invocation goes through these steps:
//!
//! 1. **Validate** – grid dimensions and partition parameters are checked by
//!    the accessor constructors and the partitioner; violations panic before
//!    any task is spawned.
//! 2. **Partition** – the configured [`Strategy`] splits the grid into
//!    disjoint [`WorkRange`]s.
//! 3. **Run** – every non-empty range becomes one rayon job. A job walks its
//!    range in order and, before each cell, polls the shared
//!    [`CancelSignal`]. When the delegate fails the job stores the error in
//!    the [`ErrorTrap`] (first one wins), raises the signal and returns.
//!    Cancellation is cooperative: a delegate call already in progress in
//!    another job finishes, and its write is kept.
//! 4. **Join** – the call blocks until every job has returned.
//! 5. **Complete** – the trapped error, tagged with the failing cell, or `Ok`.
//!
//! Every shape is available with a delegate that cannot fail (`read`,
//! `read_write`, ...) and with a fallible one (`try_read`, ...).
//!
//! ```
//! use grid_par::engine::Engine;
//! use grid_par::image::{ImageViewMut, Raster};
//! use grid_par::partition::Strategy;
//!
//! let mut img = Raster::filled(4, 3, 1.0f32);
//! let engine = Engine::with_strategy(Strategy::Columns);
//! engine.read_write(&mut img.cells_mut(), |x, y, v| v + (x * y) as f32);
//! assert_eq!(img.get(3, 2), 7.0);
//! ```
//!
//! Writable accessors are borrowed exclusively for the whole run, so a
//! delegate cannot start a second run over the same cells:
//!
//! ```compile_fail
//! use grid_par::engine::Engine;
//! use grid_par::image::{ImageViewMut, Raster};
//!
//! let mut img = Raster::filled(2, 2, 0u8);
//! let mut view = img.cells_mut();
//! let engine = Engine::default();
//! engine.read_write(&mut view, |_, _, v| {
//!     engine.read_write(&mut view, |_, _, w| w + 1);
//!     v
//! });
//! ```

mod error;
mod options;


pub use self::error::{CellError, EngineError};
pub use self::options::EngineOptions;

pub(crate) use self::error::never_fails;

use crate::access::{GridRead, GridWrite};
use crate::control::{CancelSignal, ErrorTrap};
use crate::partition::{Partition, Partitioner, Strategy, WorkRange};
use log::{debug, trace};
use rayon::{Scope, ThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Reusable parallel iteration engine.
///
/// Cloning is cheap; clones share the dedicated worker pool, if any.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    options: EngineOptions,
    pool: Option<Arc<ThreadPool>>,
}

impl Engine {
    /// Build an engine, creating a dedicated pool when `max_tasks` is set.
    pub fn new(options: EngineOptions) -> Result<Self, EngineError> {
        options.validate()?;
        let pool = match options.max_tasks {
            Some(workers) => {
                trace!("engine: building pool with {workers} workers");
                let pool = ThreadPoolBuilder::new()
                    .num_threads(workers)
                    .thread_name(|i| format!("grid-par-{i}"))
                    .build()?;
                Some(Arc::new(pool))
            }
            None => None,
        };
        Ok(Self { options, pool })
    }

    /// Engine on the global rayon pool using `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            options: EngineOptions::new(strategy),
            pool: None,
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Partition this engine would use for a `width × height` grid.
    pub fn plan(&self, width: usize, height: usize) -> Partition {
        self.options.strategy.partition(width, height)
    }

    /// Run `visit` once for every cell of `partition`, one task per range.
    ///
    /// This is the driver behind every other method; it can be used directly
    /// for coordinate-only work or custom partitions.
    pub fn run<F, E>(&self, partition: &Partition, visit: F) -> Result<(), CellError<E>>
    where
        F: Fn(usize, usize) -> Result<(), E> + Sync,
        E: Send,
    {
        debug!(
            "engine: {} tasks over {}x{} grid ({:?}, max_tasks={:?})",
            partition.task_count(),
            partition.width(),
            partition.height(),
            partition.traversal(),
            self.options.max_tasks
        );

        let trap = ErrorTrap::new();
        let cancel = CancelSignal::new();
        let task = |range: WorkRange| {
            for offset in range.offsets() {
                if cancel.is_cancelled() {
                    return;
                }
                let (x, y) = partition.locate(offset);
                if let Err(source) = visit(x, y) {
                    if trap.set(CellError::new(x, y, source)) {
                        debug!("engine: delegate failed at ({x}, {y}), cancelling");
                    }
                    cancel.cancel();
                    return;
                }
            }
        };

        match &self.pool {
            Some(pool) => pool.scope(|s| spawn_ranges(s, partition.ranges(), &task)),
            None => rayon::scope(|s| spawn_ranges(s, partition.ranges(), &task)),
        }

        match trap.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Visit every coordinate of a `width × height` index space.
    pub fn indices<F>(&self, width: usize, height: usize, delegate: F)
    where
        F: Fn(usize, usize) + Sync,
    {
        let partition = self.plan(width, height);
        never_fails(self.run(&partition, |x, y| {
            delegate(x, y);
            Ok(())
        }))
    }

    pub fn read<A, F>(&self, grid: &A, delegate: F)
    where
        A: GridRead,
        F: Fn(usize, usize, A::Value) + Sync,
    {
        never_fails(self.try_read(grid, |x, y, value| {
            delegate(x, y, value);
            Ok(())
        }))
    }

    pub fn try_read<A, F, E>(&self, grid: &A, delegate: F) -> Result<(), CellError<E>>
    where
        A: GridRead,
        F: Fn(usize, usize, A::Value) -> Result<(), E> + Sync,
        E: Send,
    {
        let (width, height) = grid.dimensions();
        let partition = self.plan(width, height);
        self.run(&partition, |x, y| {
            // SAFETY: the partition hands (x, y) to this task only.
            let value = unsafe { grid.read(x, y) };
            delegate(x, y, value)
        })
    }

    /// Replace every cell of `grid` with the delegate's result.
    pub fn read_write<A, F>(&self, grid: &mut A, delegate: F)
    where
        A: GridWrite,
        F: Fn(usize, usize, A::Value) -> A::Value + Sync,
    {
        never_fails(self.try_read_write(grid, |x, y, value| Ok(delegate(x, y, value))))
    }

    /// Fallible [`Engine::read_write`]. Cells written before the failure was
    /// observed keep their new value.
    pub fn try_read_write<A, F, E>(&self, grid: &mut A, delegate: F) -> Result<(), CellError<E>>
    where
        A: GridWrite,
        F: Fn(usize, usize, A::Value) -> Result<A::Value, E> + Sync,
        E: Send,
    {
        let grid = &*grid;
        let (width, height) = grid.dimensions();
        let partition = self.plan(width, height);
        self.run(&partition, |x, y| {
            // SAFETY: the partition hands (x, y) to this task only.
            let value = unsafe { grid.read(x, y) };
            let value = delegate(x, y, value)?;
            unsafe { grid.write(x, y, value) };
            Ok(())
        })
    }

    /// Write `delegate(x, y, src[x, y])` into `dst`, leaving `src` untouched.
    ///
    /// Panics when the two grids differ in size.
    pub fn read_write_into<S, D, F>(&self, src: &S, dst: &mut D, delegate: F)
    where
        S: GridRead,
        D: GridWrite,
        F: Fn(usize, usize, S::Value) -> D::Value + Sync,
    {
        never_fails(self.try_read_write_into(src, dst, |x, y, value| {
            Ok(delegate(x, y, value))
        }))
    }

    pub fn try_read_write_into<S, D, F, E>(
        &self,
        src: &S,
        dst: &mut D,
        delegate: F,
    ) -> Result<(), CellError<E>>
    where
        S: GridRead,
        D: GridWrite,
        F: Fn(usize, usize, S::Value) -> Result<D::Value, E> + Sync,
        E: Send,
    {
        let dst = &*dst;
        let (width, height) = src.dimensions();
        assert_eq!(
            (width, height),
            dst.dimensions(),
            "engine: source and destination sizes differ"
        );
        let partition = self.plan(width, height);
        self.run(&partition, |x, y| {
            // SAFETY: the partition hands (x, y) to this task only.
            let value = unsafe { src.read(x, y) };
            let value = delegate(x, y, value)?;
            unsafe { dst.write(x, y, value) };
            Ok(())
        })
    }
}

fn spawn_ranges<'scope, T>(scope: &Scope<'scope>, ranges: &[WorkRange], task: &'scope T)
where
    T: Fn(WorkRange) + Sync,
{
    for &range in ranges.iter().filter(|r| !r.is_empty()) {
        scope.spawn(move |_| task(range));
    }
}
