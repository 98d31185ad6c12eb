use crate::model::CoreError;
use crate::plot::PlotError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StackError>;

#[derive(Debug, Error)]
pub enum StackError {
    #[error("argument out of range: slice {index} (stack has {size} slices)")]
    IndexOutOfRange { index: usize, size: usize },

    #[error("plot snapshot failure: {0}")]
    Plot(#[from] PlotError),

    #[error("stack image failure: {0}")]
    Core(#[from] CoreError),
}
