use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid image dimensions {width}x{height}: width and height must be at least 1")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("unsupported bit depth {0}: expected 8 or 24")]
    UnsupportedBitDepth(u32),

    #[error("pixel buffer of {actual} bytes does not match {width}x{height} at {depth} bits")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        depth: u32,
        actual: usize,
    },
}
