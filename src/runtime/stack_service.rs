use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::StackSettings;
use crate::model::BitDepth;
use crate::plot::Plot;
use crate::stack::{ImageSource, PlotVirtualStack};

use super::document::read_document;
use super::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackSummary {
    pub size: usize,
    pub bit_depth: BitDepth,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default)]
pub struct StackService {
    settings: StackSettings,
}

impl StackService {
    pub fn new(settings: StackSettings) -> Self {
        Self { settings }
    }

    pub fn load_plots(&self, path: impl AsRef<Path>) -> Result<Vec<Plot>> {
        let plots: Vec<Plot> = read_document(path.as_ref())?;
        for plot in &plots {
            plot.validate()?;
        }
        Ok(plots)
    }

    pub fn build(&self, plots: &[Plot]) -> Result<PlotVirtualStack> {
        let mut stack = PlotVirtualStack::new(self.settings.width, self.settings.height);
        stack.set_bit_depth(self.settings.bit_depth);
        for plot in plots {
            stack.add_plot(plot)?;
        }
        log::info!(
            "built plot stack with {} slices at {}",
            stack.size(),
            stack.bit_depth()
        );
        Ok(stack)
    }

    pub fn summary(&self, stack: &impl ImageSource) -> StackSummary {
        StackSummary {
            size: stack.size(),
            bit_depth: stack.bit_depth(),
            width: stack.width(),
            height: stack.height(),
        }
    }

    pub fn render_slice(
        &self,
        stack: &impl ImageSource,
        index: usize,
        output: impl AsRef<Path>,
    ) -> Result<()> {
        let slice = stack
            .processor(index)
            .ok_or(AppError::SliceUnavailable(index))?;
        slice.pixels.into_dynamic().save(output.as_ref())?;
        Ok(())
    }

    /// Writes every decodable slice as `slice_NNNN.png`; undecodable slices are skipped.
    pub fn export(&self, stack: &PlotVirtualStack, directory: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory)?;
        let mut written = Vec::new();
        for (offset, slice) in stack.materialize().into_iter().enumerate() {
            let Some(slice) = slice else {
                log::warn!("skipping slice {} during export", offset + 1);
                continue;
            };
            let path = directory.join(format!("slice_{:04}.png", slice.slice));
            slice.pixels.into_dynamic().save(&path)?;
            written.push(path);
        }
        Ok(written)
    }
}
