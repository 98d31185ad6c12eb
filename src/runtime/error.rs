use crate::brush::BrushError;
use crate::config::ConfigError;
use crate::model::CoreError;
use crate::plot::PlotError;
use crate::roi::RoiError;
use crate::stack::StackError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("image error: {0}")]
    Core(#[from] CoreError),

    #[error("plot error: {0}")]
    Plot(#[from] PlotError),

    #[error("stack error: {0}")]
    Stack(#[from] StackError),

    #[error("ROI error: {0}")]
    Roi(#[from] RoiError),

    #[error("brush error: {0}")]
    Brush(#[from] BrushError),

    #[error("slice {0} could not be decoded")]
    SliceUnavailable(usize),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("image encode failure: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON failure: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("YAML failure: {0}")]
    SerdeYaml(#[from] serde_yaml::Error),
}
