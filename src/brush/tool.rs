use crate::roi::{Polygon, Roi, RoiShape};

use super::{BrushMode, Result};

/// Widest brush a tool will build; larger requests are clamped.
pub const MAX_BRUSH_DIAMETER: u32 = 4096;

/// Circular brush that composes its footprint into an ROI.
#[derive(Debug, Clone)]
pub struct BrushTool {
    diameter: u32,
    template: Option<Polygon>,
}

impl BrushTool {
    pub fn new(diameter: u32) -> Self {
        Self {
            diameter: diameter.clamp(1, MAX_BRUSH_DIAMETER),
            template: None,
        }
    }

    pub fn diameter(&self) -> u32 {
        self.diameter
    }

    pub fn has_template(&self) -> bool {
        self.template.is_some()
    }

    /// Circle outline relative to the sampled position, built on first use.
    /// Odd diameters sit half a pixel right and down, matching [`Self::oval_at`].
    pub fn template(&mut self) -> &Polygon {
        let diameter = f64::from(self.diameter);
        let offset = diameter / 2.0 - f64::from(self.diameter / 2);
        self.template
            .get_or_insert_with(|| Polygon::circle(diameter).translated(offset, offset))
    }

    pub fn fragment(&mut self, (x, y): (i32, i32)) -> RoiShape {
        RoiShape::Polygon(self.template().translated(f64::from(x), f64::from(y)))
    }

    /// Applies one brush sample at `position` to `current`, returning the ROI to commit.
    pub fn apply(
        &mut self,
        current: Option<Roi>,
        position: (i32, i32),
        mode: BrushMode,
    ) -> Result<Option<Roi>> {
        let Some(roi) = current else {
            return Ok(match mode {
                BrushMode::Union => Some(self.oval_at(position)),
                BrushMode::Subtract => None,
            });
        };

        let fragment = self.fragment(position);
        let mut roi = roi.promote()?;
        if let Some(shape) = roi.composite_mut() {
            match mode {
                BrushMode::Union => shape.union(&fragment),
                BrushMode::Subtract => {
                    shape.subtract(&fragment);
                    shape.trim();
                }
            }
        }
        Ok(Some(roi))
    }

    fn oval_at(&self, (x, y): (i32, i32)) -> Roi {
        let half = i64::from(self.diameter / 2);
        let size = f64::from(self.diameter);
        Roi::oval(
            (i64::from(x) - half) as f64,
            (i64::from(y) - half) as f64,
            size,
            size,
        )
    }
}
