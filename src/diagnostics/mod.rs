//! Run reports written by the demo tooling.

pub mod timing;

pub use self::timing::{StageTiming, TimingBreakdown};

use crate::engine::EngineOptions;
use crate::partition::Partition;
use serde::Serialize;

/// Summary of one engine run over an image.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub width: usize,
    pub height: usize,
    pub options: EngineOptions,
    pub range_count: usize,
    pub task_count: usize,
    pub timing: TimingBreakdown,
}

impl RunSummary {
    pub fn new(options: EngineOptions, partition: &Partition, timing: TimingBreakdown) -> Self {
        Self {
            width: partition.width(),
            height: partition.height(),
            options,
            range_count: partition.ranges().len(),
            task_count: partition.task_count(),
            timing,
        }
    }
}
