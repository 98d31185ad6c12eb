mod brush_service;
mod context;
mod document;
mod error;
mod stack_service;

#[cfg(test)]
mod tests;

pub use brush_service::{BrushService, ReplayReport, StrokePoint};
pub use context::AppContext;
pub use error::{AppError, Result};
pub use stack_service::{StackService, StackSummary};
