use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use super::{BitDepth, CoreError, Result};

/// Pixel buffer of a single image plane, either 8-bit gray or packed RGB.
#[derive(Debug, Clone, PartialEq)]
pub enum Pixels {
    Gray8(GrayImage),
    Rgb24(RgbImage),
}

impl Pixels {
    /// Allocates a buffer filled with `fill` (gray level, or white point for RGB).
    pub fn blank(width: u32, height: u32, depth: BitDepth, fill: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(match depth {
            BitDepth::Gray8 => Self::Gray8(GrayImage::from_pixel(width, height, Luma([fill]))),
            BitDepth::Rgb24 => {
                Self::Rgb24(RgbImage::from_pixel(width, height, Rgb([fill, fill, fill])))
            }
        })
    }

    pub fn from_raw(width: u32, height: u32, depth: BitDepth, bytes: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        let actual = bytes.len();
        let mismatch = || CoreError::BufferSizeMismatch {
            width,
            height,
            depth: depth.bits(),
            actual,
        };
        match depth {
            BitDepth::Gray8 => GrayImage::from_raw(width, height, bytes)
                .map(Self::Gray8)
                .ok_or_else(mismatch),
            BitDepth::Rgb24 => RgbImage::from_raw(width, height, bytes)
                .map(Self::Rgb24)
                .ok_or_else(mismatch),
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Gray8(buffer) => buffer.width(),
            Self::Rgb24(buffer) => buffer.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Gray8(buffer) => buffer.height(),
            Self::Rgb24(buffer) => buffer.height(),
        }
    }

    pub fn bit_depth(&self) -> BitDepth {
        match self {
            Self::Gray8(_) => BitDepth::Gray8,
            Self::Rgb24(_) => BitDepth::Rgb24,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Gray8(buffer) => buffer.as_raw(),
            Self::Rgb24(buffer) => buffer.as_raw(),
        }
    }

    /// Converts to `depth`. Gray to RGB replicates the level into all channels;
    /// RGB to gray takes the unweighted channel mean.
    pub fn convert(self, depth: BitDepth) -> Self {
        match (self, depth) {
            (pixels @ Self::Gray8(_), BitDepth::Gray8) | (pixels @ Self::Rgb24(_), BitDepth::Rgb24) => {
                pixels
            }
            (Self::Gray8(buffer), BitDepth::Rgb24) => {
                Self::Rgb24(DynamicImage::ImageLuma8(buffer).to_rgb8())
            }
            (Self::Rgb24(buffer), BitDepth::Gray8) => {
                let (width, height) = buffer.dimensions();
                let gray = GrayImage::from_fn(width, height, |x, y| {
                    let [r, g, b] = buffer.get_pixel(x, y).0;
                    let sum = u16::from(r) + u16::from(g) + u16::from(b);
                    Luma([(f32::from(sum) / 3.0).round() as u8])
                });
                Self::Gray8(gray)
            }
        }
    }

    pub fn into_dynamic(self) -> DynamicImage {
        match self {
            Self::Gray8(buffer) => DynamicImage::ImageLuma8(buffer),
            Self::Rgb24(buffer) => DynamicImage::ImageRgb8(buffer),
        }
    }
}

/// A decoded stack slice tagged with its 1-based position.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceImage {
    pub slice: usize,
    pub pixels: Pixels,
}

impl SliceImage {
    pub fn new(slice: usize, pixels: Pixels) -> Self {
        Self { slice, pixels }
    }

    pub fn bit_depth(&self) -> BitDepth {
        self.pixels.bit_depth()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.pixels.width(), self.pixels.height())
    }
}
