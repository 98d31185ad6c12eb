use serde::{Deserialize, Serialize};

use crate::model::CoreError;

use super::{PlotError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlotColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PlotColor {
    pub const BLACK: Self = Self::gray(0);
    pub const WHITE: Self = Self::gray(255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 160, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    pub const fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl Default for PlotColor {
    fn default() -> Self {
        Self::BLACK
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeriesStyle {
    #[default]
    Line,
    Dots,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSeries {
    #[serde(default)]
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    #[serde(default)]
    pub color: PlotColor,
    #[serde(default)]
    pub style: SeriesStyle,
}

impl PlotSeries {
    pub fn line(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>, color: PlotColor) -> Self {
        Self {
            label: label.into(),
            xs,
            ys,
            color,
            style: SeriesStyle::Line,
        }
    }

    pub fn dots(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>, color: PlotColor) -> Self {
        Self {
            style: SeriesStyle::Dots,
            ..Self::line(label, xs, ys, color)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.xs.len() != self.ys.len() {
            return Err(PlotError::SeriesLength {
                label: self.label.clone(),
                xs: self.xs.len(),
                ys: self.ys.len(),
            });
        }
        Ok(())
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs
            .iter()
            .copied()
            .zip(self.ys.iter().copied())
            .filter(|(x, y)| x.is_finite() && y.is_finite())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    #[serde(default)]
    pub title: String,
    pub width: u32,
    pub height: u32,
    #[serde(default = "default_background")]
    pub background: PlotColor,
    #[serde(default)]
    pub series: Vec<PlotSeries>,
}

/// Largest frame a plot may declare; bounds the raster allocated by `render`.
pub const MAX_PLOT_PIXELS: u64 = 1 << 26;

fn default_background() -> PlotColor {
    PlotColor::WHITE
}

impl Plot {
    pub fn new(title: impl Into<String>, width: u32, height: u32) -> Result<Self> {
        let plot = Self {
            title: title.into(),
            width,
            height,
            background: PlotColor::WHITE,
            series: Vec::new(),
        };
        plot.validate()?;
        Ok(plot)
    }

    pub fn add_series(&mut self, series: PlotSeries) -> Result<()> {
        series.validate()?;
        self.series.push(series);
        Ok(())
    }

    pub fn with_series(mut self, series: PlotSeries) -> Result<Self> {
        self.add_series(series)?;
        Ok(self)
    }

    pub fn is_color(&self) -> bool {
        !self.background.is_gray() || self.series.iter().any(|series| !series.color.is_gray())
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(CoreError::InvalidDimensions {
                width: self.width,
                height: self.height,
            }
            .into());
        }
        if u64::from(self.width) * u64::from(self.height) > MAX_PLOT_PIXELS {
            return Err(PlotError::FrameTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        self.series.iter().try_for_each(PlotSeries::validate)
    }

    /// Combined data range over all series, `None` when there are no finite points.
    pub fn data_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut points = self.series.iter().flat_map(PlotSeries::points);
        let (x, y) = points.next()?;
        let bounds = points.fold((x, x, y, y), |(x0, x1, y0, y1), (x, y)| {
            (x0.min(x), x1.max(x), y0.min(y), y1.max(y))
        });
        Some(bounds)
    }
}
