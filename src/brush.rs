mod error;
mod host;
mod input;
mod sampler;
mod session;
mod tool;


pub use error::{BrushError, Result};
pub use host::{RoiHost, TargetImage};
pub use input::{BrushMode, BrushSample, CanvasButton, CanvasModifiers, PointerState, SubtractModifier};
pub use sampler::{PointerSource, SamplerConfig, sample_pointer, spawn_sampler};
pub use session::{Brush, SessionSummary, run_session};
pub use tool::{BrushTool, MAX_BRUSH_DIAMETER};
