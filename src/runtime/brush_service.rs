use std::path::Path;
use std::sync::mpsc;

use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::brush::{BrushMode, BrushSample, BrushTool, RoiHost, TargetImage, run_session};
use crate::config::{BrushSettings, StackSettings, validate_diameter};
use crate::roi::Roi;

use super::document::read_document;
use super::Result;

/// One recorded pointer position of a scripted brush stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub subtract: bool,
}

impl StrokePoint {
    fn sample(self) -> BrushSample {
        let mode = if self.subtract {
            BrushMode::Subtract
        } else {
            BrushMode::Union
        };
        BrushSample::Stroke {
            position: (self.x, self.y),
            mode,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub description: Option<String>,
    pub area: usize,
    pub samples: usize,
}

#[derive(Debug, Clone, Default)]
pub struct BrushService {
    brush: BrushSettings,
    canvas: StackSettings,
}

impl BrushService {
    pub fn new(brush: BrushSettings, canvas: StackSettings) -> Self {
        Self { brush, canvas }
    }

    pub fn load_stroke(&self, path: impl AsRef<Path>) -> Result<Vec<StrokePoint>> {
        read_document(path.as_ref())
    }

    /// Paints `stroke` onto a blank canvas the size of the configured stack.
    pub fn replay(
        &self,
        stroke: &[StrokePoint],
        diameter: Option<u32>,
    ) -> Result<(TargetImage, ReplayReport)> {
        let diameter = diameter.unwrap_or(self.brush.diameter);
        validate_diameter(diameter)?;
        let mut tool = BrushTool::new(diameter);
        let mut target = TargetImage::new(self.canvas.width, self.canvas.height);

        let (sender, receiver) = mpsc::channel();
        for point in stroke {
            sender.send(point.sample()).ok();
        }
        sender.send(BrushSample::Released).ok();
        drop(sender);

        let summary = run_session(Some(&mut target), &mut tool, &receiver)?;
        let report = ReplayReport {
            description: target.roi().map(|roi| roi.describe()),
            area: target.roi().map_or(0, |roi| roi.area()),
            samples: summary.samples,
        };
        log::info!(
            "replayed {} stroke samples with a {} px brush",
            report.samples,
            tool.diameter()
        );
        Ok((target, report))
    }

    /// Saves the target's ROI coverage as a black and white PNG.
    pub fn save_mask(&self, target: &TargetImage, path: impl AsRef<Path>) -> Result<()> {
        let promoted = match target.roi() {
            Some(roi) if roi.is_area() => Some(roi.clone().promote()?),
            _ => None,
        };
        let mask = promoted
            .as_ref()
            .and_then(Roi::composite)
            .map(|mask| mask.to_image(target.width, target.height))
            .unwrap_or_else(|| GrayImage::new(target.width, target.height));
        mask.save(path.as_ref())?;
        Ok(())
    }
}
