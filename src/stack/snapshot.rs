use std::sync::Arc;

use crate::plot::{Plot, PlotCodec};

use super::Result;

/// Serialized plot bytes plus the color flag captured when the plot was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSnapshot {
    bytes: Arc<[u8]>,
    color: bool,
}

impl PlotSnapshot {
    pub fn capture(plot: &Plot, codec: &impl PlotCodec) -> Result<Self> {
        let bytes = codec.encode(plot)?;
        Ok(Self::from_bytes(bytes, plot.is_color()))
    }

    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>, color: bool) -> Self {
        Self {
            bytes: bytes.into(),
            color,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_color(&self) -> bool {
        self.color
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }
}
