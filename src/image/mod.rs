pub mod color;
pub mod io;
pub mod packed;
pub mod raster;
pub mod traits;

pub use self::color::Rgba8;
pub use self::packed::{
    AlphaMode, NrgbaBuffer, PackedImage, Premultiplied, RgbaBuffer, Straight, CHANNELS,
};
pub use self::raster::{Raster, RasterView};
pub use self::traits::{ImageView, ImageViewMut, Rows};
