use std::convert::Infallible;
use thiserror::Error;

/// First delegate failure of an engine run, tagged with the failing cell.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("delegate failed at x={x} y={y}: {source}")]
pub struct CellError<E> {
    pub x: usize,
    pub y: usize,
    #[source]
    pub source: E,
}

impl<E> CellError<E> {
    pub fn new(x: usize, y: usize, source: E) -> Self {
        Self { x, y, source }
    }

    /// Failing coordinates.
    pub fn cell(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn into_source(self) -> E {
        self.source
    }
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("max_tasks must be positive")]
    ZeroTasks,
    #[error("cluster count must be positive")]
    ZeroClusters,
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Unwrap the result of a run whose delegate cannot fail.
pub(crate) fn never_fails<T>(result: Result<T, CellError<Infallible>>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => match err.source {},
    }
}

#[cfg(test)]
mod tests {
    use super::CellError;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("pixel rejected")]
    struct Rejected;

    #[test]
    fn message_names_cell_and_cause() {
        let err = CellError::new(3, 4, Rejected);
        assert_eq!(err.to_string(), "delegate failed at x=3 y=4: pixel rejected");
        assert_eq!(err.cell(), (3, 4));
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("pixel rejected"));
    }
}
