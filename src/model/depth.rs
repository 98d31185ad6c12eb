use serde::{Deserialize, Serialize};

use super::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u32", into = "u32")]
pub enum BitDepth {
    #[default]
    Gray8,
    Rgb24,
}

impl BitDepth {
    pub const fn bits(self) -> u32 {
        match self {
            Self::Gray8 => 8,
            Self::Rgb24 => 24,
        }
    }

    pub const fn is_color(self) -> bool {
        matches!(self, Self::Rgb24)
    }

    pub const fn channels(self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb24 => 3,
        }
    }
}

impl TryFrom<u32> for BitDepth {
    type Error = CoreError;

    fn try_from(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(Self::Gray8),
            24 => Ok(Self::Rgb24),
            other => Err(CoreError::UnsupportedBitDepth(other)),
        }
    }
}

impl From<BitDepth> for u32 {
    fn from(depth: BitDepth) -> Self {
        depth.bits()
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}-bit", self.bits())
    }
}
