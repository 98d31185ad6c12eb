use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoiError>;

#[derive(Debug, Error)]
pub enum RoiError {
    #[error("{0} ROI does not enclose an area and cannot be combined")]
    NotAnArea(&'static str),
}
