//! Work partitioning for the parallel engine.
//!
//! A [`Partition`] splits the linear index space of a `width × height` grid
//! into disjoint [`WorkRange`]s whose union is the whole space. Each range is
//! handed to exactly one task, which is the only thing keeping concurrent
//! writes to the grid free of data races.
//!
//! Row, cluster and index-space partitions walk the grid in row-major order.
//! The column partition uses a column-major index space so that a single
//! range is a single column, visited top to bottom.

mod strategies;


pub use self::strategies::{
    ClusterPartitioner, ColumnPartitioner, IndexPartitioner, RowPartitioner, Strategy,
};

use crate::index::offset_to_index;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Order in which linear offsets map onto grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Traversal {
    /// `offset = y * width + x`
    RowMajor,
    /// `offset = x * height + y`
    ColumnMajor,
}

/// Contiguous span `[start, start + len)` of a partition's index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkRange {
    pub start: usize,
    pub len: usize,
}

impl WorkRange {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn offsets(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Ordered set of disjoint work ranges covering a `width × height` grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Partition {
    width: usize,
    height: usize,
    traversal: Traversal,
    ranges: Vec<WorkRange>,
}

impl Partition {
    pub(crate) fn new(
        width: usize,
        height: usize,
        traversal: Traversal,
        ranges: Vec<WorkRange>,
    ) -> Self {
        debug_assert_eq!(
            ranges.iter().map(|r| r.len).sum::<usize>(),
            width * height,
            "partition must cover the grid"
        );
        Self {
            width,
            height,
            traversal,
            ranges,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn ranges(&self) -> &[WorkRange] {
        &self.ranges
    }

    /// Number of ranges that will actually get a task.
    pub fn task_count(&self) -> usize {
        self.ranges.iter().filter(|r| !r.is_empty()).count()
    }

    /// Grid coordinates of a linear offset in this partition's index space.
    #[inline]
    pub fn locate(&self, offset: usize) -> (usize, usize) {
        match self.traversal {
            Traversal::RowMajor => offset_to_index(offset, self.width),
            Traversal::ColumnMajor => {
                let (y, x) = offset_to_index(offset, self.height);
                (x, y)
            }
        }
    }
}

/// Strategy that splits a grid into work ranges.
pub trait Partitioner {
    /// Panics when `width` or `height` is zero.
    fn partition(&self, width: usize, height: usize) -> Partition;
}

pub(crate) fn validate_dimensions(width: usize, height: usize) {
    assert!(width > 0, "partition: grid width must be positive");
    assert!(height > 0, "partition: grid height must be positive");
    // Every offset, and `width * height` itself, must fit in `usize`.
    assert!(
        width.checked_mul(height).is_some(),
        "partition: grid too large ({width}x{height})"
    );
}
