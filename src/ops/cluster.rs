use crate::engine::{Engine, EngineError, EngineOptions};
use crate::image::ImageViewMut;
use crate::partition::Strategy;

/// [`parallel_read_write`](super::parallel_read_write) over `clusters` equal
/// row-major clusters, one task each.
///
/// Panics when `clusters == 0`.
pub fn parallel_cluster_distributed_read_write<I, F>(src: &mut I, clusters: usize, delegate: F)
where
    I: ImageViewMut,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> I::Pixel + Sync,
{
    Engine::with_strategy(Strategy::Clusters(clusters)).read_write(&mut src.cells_mut(), delegate)
}

/// Like [`parallel_cluster_distributed_read_write`], but at most `limit`
/// clusters are processed at the same time.
///
/// Panics when `clusters` or `limit` is zero. Fails only if the worker pool
/// cannot be created.
pub fn parallel_cluster_limited_read_write<I, F>(
    src: &mut I,
    clusters: usize,
    limit: usize,
    delegate: F,
) -> Result<(), EngineError>
where
    I: ImageViewMut,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> I::Pixel + Sync,
{
    assert!(clusters > 0, "partition: cluster count must be positive");
    assert!(limit > 0, "engine: task limit must be positive");
    let options = EngineOptions::new(Strategy::Clusters(clusters)).with_max_tasks(limit);
    Engine::new(options)?.read_write(&mut src.cells_mut(), delegate);
    Ok(())
}
