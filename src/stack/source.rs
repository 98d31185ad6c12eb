use crate::model::{BitDepth, Pixels, SliceImage};

use super::Result;

/// Indexed image source with 1-based slice numbers.
pub trait ImageSource {
    fn size(&self) -> usize;
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn bit_depth(&self) -> BitDepth;
    fn processor(&self, index: usize) -> Option<SliceImage>;
    fn delete_slice(&mut self, index: usize) -> Result<()>;

    fn pixels(&self, index: usize) -> Option<Pixels> {
        self.processor(index).map(|slice| slice.pixels)
    }

    fn set_pixels(&mut self, _pixels: Pixels, _index: usize) {}

    fn slice_label(&self, _index: usize) -> Option<String> {
        None
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
