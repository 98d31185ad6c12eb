use std::sync::Arc;

use rayon::prelude::*;

use crate::model::{BitDepth, SliceImage};
use crate::plot::{BincodePlotCodec, Plot, PlotCodec, PlotError};

use super::{ImageSource, PlotSnapshot, Result, StackError};

/// Receives the slice number and error whenever a snapshot fails to decode.
pub type DecodeFailureHook = Arc<dyn Fn(usize, &PlotError) + Send + Sync>;

/// Virtual stack whose slices are plots kept in serialized form and only
/// rendered when a slice is requested.
///
/// Every decoded slice is converted to the stack-wide bit depth, which turns
/// 24-bit as soon as a color plot is added and stays there until
/// [`PlotVirtualStack::set_bit_depth`] resets it.
pub struct PlotVirtualStack<C = BincodePlotCodec> {
    width: u32,
    height: u32,
    snapshots: Vec<PlotSnapshot>,
    bit_depth: BitDepth,
    codec: C,
    on_decode_failure: DecodeFailureHook,
}

impl<C> std::fmt::Debug for PlotVirtualStack<C> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PlotVirtualStack")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("slices", &self.snapshots.len())
            .field("bit_depth", &self.bit_depth)
            .finish()
    }
}

impl PlotVirtualStack<BincodePlotCodec> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_codec(width, height, BincodePlotCodec)
    }
}

impl<C: PlotCodec> PlotVirtualStack<C> {
    pub fn with_codec(width: u32, height: u32, codec: C) -> Self {
        Self {
            width,
            height,
            snapshots: Vec::new(),
            bit_depth: BitDepth::Gray8,
            codec,
            on_decode_failure: Arc::new(|slice: usize, error: &PlotError| {
                log::error!("failed to decode plot slice {slice}: {error}");
            }),
        }
    }

    pub fn with_failure_hook(mut self, hook: DecodeFailureHook) -> Self {
        self.on_decode_failure = hook;
        self
    }

    /// Serializes `plot` and appends it, returning the new slice count.
    pub fn add_plot(&mut self, plot: &Plot) -> Result<usize> {
        let snapshot = PlotSnapshot::capture(plot, &self.codec)?;
        Ok(self.add_snapshot(snapshot))
    }

    pub fn add_snapshot(&mut self, snapshot: PlotSnapshot) -> usize {
        if snapshot.is_color() {
            self.bit_depth = BitDepth::Rgb24;
        }
        self.snapshots.push(snapshot);
        self.snapshots.len()
    }

    pub fn set_bit_depth(&mut self, depth: BitDepth) {
        self.bit_depth = depth;
    }

    pub fn codec(&self) -> &C {
        &self.codec
    }

    fn decode(&self, index: usize, snapshot: &PlotSnapshot) -> Option<SliceImage> {
        let rendered = self
            .codec
            .decode(snapshot.bytes())
            .and_then(|plot| plot.render());
        match rendered {
            Ok(pixels) => Some(SliceImage::new(index, pixels.convert(self.bit_depth))),
            Err(error) => {
                (self.on_decode_failure)(index, &error);
                None
            }
        }
    }
}

impl<C: PlotCodec + Sync> PlotVirtualStack<C> {
    /// Decodes every slice in parallel; failed slices come back as `None`.
    pub fn materialize(&self) -> Vec<Option<SliceImage>> {
        (1..=self.snapshots.len())
            .into_par_iter()
            .map(|index| self.processor(index))
            .collect()
    }
}

impl<C: PlotCodec> ImageSource for PlotVirtualStack<C> {
    fn size(&self) -> usize {
        self.snapshots.len()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    fn processor(&self, index: usize) -> Option<SliceImage> {
        let Some(snapshot) = index.checked_sub(1).and_then(|slot| self.snapshots.get(slot)) else {
            log::debug!(
                "slice {index} requested from a stack of {} slices",
                self.snapshots.len()
            );
            return None;
        };
        if snapshot.is_empty() {
            return None;
        }
        self.decode(index, snapshot)
    }

    fn delete_slice(&mut self, index: usize) -> Result<()> {
        if self.snapshots.is_empty() {
            return Ok(());
        }
        if index < 1 || index > self.snapshots.len() {
            return Err(StackError::IndexOutOfRange {
                index,
                size: self.snapshots.len(),
            });
        }
        self.snapshots.remove(index - 1);
        Ok(())
    }
}
