//! Ready-made entry points binding a partitioner, an accessor and a
//! delegate shape.
//!
//! | family    | partitioning            | storage                   |
//! |-----------|-------------------------|---------------------------|
//! | general   | one task per row        | any [`ImageView`]         |
//! | packed    | one task per row        | [`PackedImage`] (RGBA/NRGBA) |
//! | matrix    | one task per column     | `[Vec<T>]`, indexed `m[x][y]` |
//! | cluster   | `n` row-major clusters  | any [`ImageViewMut`]      |
//!
//! Functions prefixed with `try_` take a fallible delegate and return the
//! first failure as a [`CellError`](crate::engine::CellError). For other
//! strategies or a bounded worker pool use [`Engine`](crate::engine::Engine)
//! directly.
//!
//! [`ImageView`]: crate::image::ImageView
//! [`ImageViewMut`]: crate::image::ImageViewMut
//! [`PackedImage`]: crate::image::PackedImage

mod cluster;
mod general;
mod matrix;
mod packed;

pub use self::cluster::{
    parallel_cluster_distributed_read_write, parallel_cluster_limited_read_write,
};
pub use self::general::{
    parallel_indices, parallel_read, parallel_read_write, parallel_read_write_new,
    try_parallel_read, try_parallel_read_write, try_parallel_read_write_new,
};
pub use self::matrix::{parallel_matrix_read_write, try_parallel_matrix_read_write};
pub use self::packed::{
    parallel_packed_read, parallel_packed_read_write, parallel_packed_read_write_new,
    try_parallel_packed_read, try_parallel_packed_read_write, try_parallel_packed_read_write_new,
};
