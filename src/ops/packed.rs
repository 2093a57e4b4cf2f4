//! Entry points for packed 4-channel buffers.
//!
//! Delegates receive and return the four channel bytes of a pixel in buffer
//! order (`[r, g, b, a]`), read straight from the byte slice.
use crate::engine::{CellError, Engine};
use crate::image::{AlphaMode, PackedImage, CHANNELS};

/// Call `delegate(x, y, channels)` for every pixel of `src`, one task per row.
pub fn parallel_packed_read<M, F>(src: &PackedImage<M>, delegate: F)
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) + Sync,
{
    Engine::default().read(&src.view(), delegate)
}

/// Fallible [`parallel_packed_read`]; stops at the first error.
pub fn try_parallel_packed_read<M, F, E>(
    src: &PackedImage<M>,
    delegate: F,
) -> Result<(), CellError<E>>
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) -> Result<(), E> + Sync,
    E: Send,
{
    Engine::default().try_read(&src.view(), delegate)
}

/// Replace the channels of every pixel of `src` in place.
pub fn parallel_packed_read_write<M, F>(src: &mut PackedImage<M>, delegate: F)
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) -> [u8; CHANNELS] + Sync,
{
    Engine::default().read_write(&mut src.view_mut(), delegate)
}

/// Fallible [`parallel_packed_read_write`]. Pixels already rewritten when the
/// error is observed keep their new channels.
pub fn try_parallel_packed_read_write<M, F, E>(
    src: &mut PackedImage<M>,
    delegate: F,
) -> Result<(), CellError<E>>
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) -> Result<[u8; CHANNELS], E> + Sync,
    E: Send,
{
    Engine::default().try_read_write(&mut src.view_mut(), delegate)
}

/// Write the delegate's channels into a new buffer with the same alpha mode.
pub fn parallel_packed_read_write_new<M, F>(src: &PackedImage<M>, delegate: F) -> PackedImage<M>
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) -> [u8; CHANNELS] + Sync,
{
    let mut dst = PackedImage::new(src.width(), src.height());
    Engine::default().read_write_into(&src.view(), &mut dst.view_mut(), delegate);
    dst
}

/// Fallible [`parallel_packed_read_write_new`]; on error the new buffer is dropped.
pub fn try_parallel_packed_read_write_new<M, F, E>(
    src: &PackedImage<M>,
    delegate: F,
) -> Result<PackedImage<M>, CellError<E>>
where
    M: AlphaMode,
    F: Fn(usize, usize, [u8; CHANNELS]) -> Result<[u8; CHANNELS], E> + Sync,
    E: Send,
{
    let mut dst = PackedImage::new(src.width(), src.height());
    Engine::default().try_read_write_into(&src.view(), &mut dst.view_mut(), delegate)?;
    Ok(dst)
}
