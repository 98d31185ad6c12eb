use crate::model::CoreError;

use super::MAX_PLOT_PIXELS;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("plot snapshot is too short ({0} bytes)")]
    Truncated(usize),

    #[error("plot snapshot has an unknown header {0:02x?}")]
    BadMagic([u8; 4]),

    #[error("plot serialization failure: {0}")]
    Serialization(#[from] bincode::Error),

    #[error("plot series `{label}` has {xs} x values but {ys} y values")]
    SeriesLength { label: String, xs: usize, ys: usize },

    #[error("plot frame {width}x{height} exceeds {} pixels", MAX_PLOT_PIXELS)]
    FrameTooLarge { width: u32, height: u32 },

    #[error("plot raster failure: {0}")]
    Core(#[from] CoreError),
}
