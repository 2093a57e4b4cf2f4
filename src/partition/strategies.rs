use super::{validate_dimensions, Partition, Partitioner, Traversal, WorkRange};
use serde::{Deserialize, Serialize};

/// One range per row.
#[derive(Clone, Copy, Debug, Default)]
pub struct RowPartitioner;

impl Partitioner for RowPartitioner {
    fn partition(&self, width: usize, height: usize) -> Partition {
        validate_dimensions(width, height);
        let ranges = (0..height)
            .map(|y| WorkRange::new(y * width, width))
            .collect();
        Partition::new(width, height, Traversal::RowMajor, ranges)
    }
}

/// One range per column; each task walks `y` for a fixed `x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ColumnPartitioner;

impl Partitioner for ColumnPartitioner {
    fn partition(&self, width: usize, height: usize) -> Partition {
        validate_dimensions(width, height);
        let ranges = (0..width)
            .map(|x| WorkRange::new(x * height, height))
            .collect();
        Partition::new(width, height, Traversal::ColumnMajor, ranges)
    }
}

/// Fixed number of equally sized row-major clusters.
///
/// With `n = width * height`, every cluster holds `n / clusters` cells and the
/// last one also takes the `n % clusters` remainder.
#[derive(Clone, Copy, Debug)]
pub struct ClusterPartitioner {
    clusters: usize,
}

impl ClusterPartitioner {
    /// Panics when `clusters == 0`.
    pub fn new(clusters: usize) -> Self {
        assert!(clusters > 0, "partition: cluster count must be positive");
        Self { clusters }
    }

    pub fn clusters(&self) -> usize {
        self.clusters
    }
}

impl Partitioner for ClusterPartitioner {
    fn partition(&self, width: usize, height: usize) -> Partition {
        validate_dimensions(width, height);
        let total = width * height;
        let base = total / self.clusters;
        let remainder = total % self.clusters;

        let mut ranges: Vec<WorkRange> = (0..self.clusters)
            .map(|k| WorkRange::new(k * base, base))
            .collect();
        if let Some(last) = ranges.last_mut() {
            last.len += remainder;
        }
        Partition::new(width, height, Traversal::RowMajor, ranges)
    }
}

/// Row-wise split of a bare coordinate space with no backing grid.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexPartitioner;

impl Partitioner for IndexPartitioner {
    fn partition(&self, width: usize, height: usize) -> Partition {
        RowPartitioner.partition(width, height)
    }
}

/// Grid partitioning strategy selectable from configuration.
///
/// Serialized as `"rows"`, `"columns"` or `{"clusters": n}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    #[default]
    Rows,
    Columns,
    Clusters(usize),
}

impl Partitioner for Strategy {
    fn partition(&self, width: usize, height: usize) -> Partition {
        match *self {
            Strategy::Rows => RowPartitioner.partition(width, height),
            Strategy::Columns => ColumnPartitioner.partition(width, height),
            Strategy::Clusters(n) => ClusterPartitioner::new(n).partition(width, height),
        }
    }
}
