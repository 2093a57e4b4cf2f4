use super::error::EngineError;
use crate::partition::Strategy;
use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// - `strategy`: how the grid is split into work ranges (one task per range).
/// - `max_tasks`: concurrency budget. `None` submits tasks to the global rayon
///   pool; `Some(n)` runs them on a dedicated pool of `n` workers, so at most
///   `n` ranges are processed at the same time regardless of how many ranges
///   the strategy produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub strategy: Strategy,
    pub max_tasks: Option<usize>,
}

impl EngineOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            max_tasks: None,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_tasks(mut self, max_tasks: usize) -> Self {
        self.max_tasks = Some(max_tasks);
        self
    }

    /// Reject values that would otherwise fault at run time.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.max_tasks == Some(0) {
            return Err(EngineError::ZeroTasks);
        }
        if self.strategy == Strategy::Clusters(0) {
            return Err(EngineError::ZeroClusters);
        }
        Ok(())
    }
}
