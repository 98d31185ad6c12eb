use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::brush::{CanvasButton, MAX_BRUSH_DIAMETER, SamplerConfig, SubtractModifier};
use crate::model::BitDepth;

use super::{ConfigError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BrushSettings {
    pub diameter: u32,
    pub poll_interval_ms: u64,
    pub trigger: CanvasButton,
    pub subtract_modifier: SubtractModifier,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            diameter: 20,
            poll_interval_ms: 1,
            trigger: CanvasButton::Primary,
            subtract_modifier: SubtractModifier::Alt,
        }
    }
}

impl BrushSettings {
    pub fn sampler(&self) -> SamplerConfig {
        SamplerConfig {
            interval: Duration::from_millis(self.poll_interval_ms),
            trigger: self.trigger,
            subtract_with: self.subtract_modifier,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StackSettings {
    pub width: u32,
    pub height: u32,
    pub bit_depth: BitDepth,
}

impl Default for StackSettings {
    fn default() -> Self {
        Self {
            width: 600,
            height: 400,
            bit_depth: BitDepth::Gray8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub brush: BrushSettings,
    pub stack: StackSettings,
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        validate_diameter(self.brush.diameter)?;
        if self.brush.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "brush poll interval must be at least 1 ms".to_string(),
            ));
        }
        if self.stack.width == 0 || self.stack.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "stack size {}x{} must be at least 1x1",
                self.stack.width, self.stack.height
            )));
        }
        Ok(())
    }
}

pub fn validate_diameter(diameter: u32) -> Result<()> {
    if diameter == 0 || diameter > MAX_BRUSH_DIAMETER {
        return Err(ConfigError::Invalid(format!(
            "brush diameter {diameter} must be between 1 and {MAX_BRUSH_DIAMETER}"
        )));
    }
    Ok(())
}
