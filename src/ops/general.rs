use crate::engine::{never_fails, CellError, Engine};
use crate::image::{ImageView, ImageViewMut, Raster};
use crate::partition::{IndexPartitioner, Partitioner};

/// Call `delegate(x, y)` for every coordinate of a `width × height` space,
/// one task per row.
///
/// Panics when `width` or `height` is zero.
pub fn parallel_indices<F>(width: usize, height: usize, delegate: F)
where
    F: Fn(usize, usize) + Sync,
{
    let partition = IndexPartitioner.partition(width, height);
    never_fails(Engine::default().run(&partition, |x, y| {
        delegate(x, y);
        Ok(())
    }))
}

/// Call `delegate(x, y, pixel)` for every pixel of `src`, one task per row.
pub fn parallel_read<I, F>(src: &I, delegate: F)
where
    I: ImageView,
    I::Pixel: Sync,
    F: Fn(usize, usize, I::Pixel) + Sync,
{
    Engine::default().read(&src.cells(), delegate)
}

/// Fallible [`parallel_read`]; stops at the first error.
pub fn try_parallel_read<I, F, E>(src: &I, delegate: F) -> Result<(), CellError<E>>
where
    I: ImageView,
    I::Pixel: Sync,
    F: Fn(usize, usize, I::Pixel) -> Result<(), E> + Sync,
    E: Send,
{
    Engine::default().try_read(&src.cells(), delegate)
}

/// Replace every pixel of `src` with `delegate(x, y, pixel)`, one task per row.
///
/// Use [`parallel_read_write_new`] to keep `src` unchanged.
pub fn parallel_read_write<I, F>(src: &mut I, delegate: F)
where
    I: ImageViewMut,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> I::Pixel + Sync,
{
    Engine::default().read_write(&mut src.cells_mut(), delegate)
}

/// Fallible [`parallel_read_write`]. Pixels already rewritten when the error is
/// observed keep their new value.
pub fn try_parallel_read_write<I, F, E>(src: &mut I, delegate: F) -> Result<(), CellError<E>>
where
    I: ImageViewMut,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> Result<I::Pixel, E> + Sync,
    E: Send,
{
    Engine::default().try_read_write(&mut src.cells_mut(), delegate)
}

/// Like [`parallel_read_write`] but writes into a new compact raster.
pub fn parallel_read_write_new<I, F>(src: &I, delegate: F) -> Raster<I::Pixel>
where
    I: ImageView,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> I::Pixel + Sync,
{
    let mut dst = Raster::from_view(src);
    Engine::default().read_write_into(&src.cells(), &mut dst.cells_mut(), delegate);
    dst
}

/// Fallible [`parallel_read_write_new`]; on error the new raster is dropped.
pub fn try_parallel_read_write_new<I, F, E>(
    src: &I,
    delegate: F,
) -> Result<Raster<I::Pixel>, CellError<E>>
where
    I: ImageView,
    I::Pixel: Send + Sync,
    F: Fn(usize, usize, I::Pixel) -> Result<I::Pixel, E> + Sync,
    E: Send,
{
    let mut dst = Raster::from_view(src);
    Engine::default().try_read_write_into(&src.cells(), &mut dst.cells_mut(), delegate)?;
    Ok(dst)
}
