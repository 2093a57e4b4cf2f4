use crate::access::{SliceView, SliceViewMut};
use std::ops::Range;

/// Read access to a row-major image whose rows are `stride` pixels apart.
pub trait ImageView {
    type Pixel: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn stride(&self) -> usize;

    /// Backing storage, row-major, `stride` pixels between row starts.
    fn pixels(&self) -> &[Self::Pixel];

    fn row(&self, y: usize) -> &[Self::Pixel] {
        let start = y * self.stride();
        &self.pixels()[start..start + self.width()]
    }

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows {
            image: self,
            ys: 0..self.height(),
        }
    }

    fn is_contiguous(&self) -> bool {
        self.stride() == self.width()
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        self.is_contiguous()
            .then(|| &self.pixels()[..self.width() * self.height()])
    }

    /// Read-only cell accessor for the parallel engine.
    fn cells(&self) -> SliceView<'_, Self::Pixel>
    where
        Self: Sized,
    {
        SliceView::new(self.pixels(), self.width(), self.height(), self.stride())
    }
}

pub trait ImageViewMut: ImageView {
    fn pixels_mut(&mut self) -> &mut [Self::Pixel];

    fn row_mut(&mut self, y: usize) -> &mut [Self::Pixel] {
        let start = y * self.stride();
        let end = start + self.width();
        &mut self.pixels_mut()[start..end]
    }

    /// Shared read-write cell accessor for the parallel engine.
    fn cells_mut(&mut self) -> SliceViewMut<'_, Self::Pixel>
    where
        Self: Sized,
    {
        let (w, h, stride) = (self.width(), self.height(), self.stride());
        SliceViewMut::new(self.pixels_mut(), w, h, stride)
    }
}

/// Iterator over the visible rows of an image, top to bottom.
pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    ys: Range<usize>,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        let image = self.image;
        self.ys.next().map(|y| image.row(y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ys.size_hint()
    }
}

impl<I: ImageView> ExactSizeIterator for Rows<'_, I> {}
