use crate::roi::RoiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrushError>;

#[derive(Debug, Error)]
pub enum BrushError {
    #[error("brush ROI update failed: {0}")]
    Roi(#[from] RoiError),

    #[error("failed to start brush sampler thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("brush sampler thread panicked")]
    SamplerPanicked,
}
