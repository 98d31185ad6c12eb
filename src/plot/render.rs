use image::{Rgb, RgbImage};

use crate::model::{BitDepth, Pixels};

use super::{Plot, PlotColor, Result, SeriesStyle};

const LEFT_MARGIN: u32 = 48;
const RIGHT_MARGIN: u32 = 12;
const TOP_MARGIN: u32 = 12;
const BOTTOM_MARGIN: u32 = 32;
const DOT_RADIUS: i64 = 1;

#[derive(Debug, Clone, Copy)]
struct Frame {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Frame {
    fn for_size(width: u32, height: u32) -> Self {
        let left = LEFT_MARGIN.min(width / 4);
        let right = RIGHT_MARGIN.min(width / 4);
        let top = TOP_MARGIN.min(height / 4);
        let bottom = BOTTOM_MARGIN.min(height / 4);
        Self {
            left: i64::from(left),
            top: i64::from(top),
            right: i64::from(width.saturating_sub(right + 1)),
            bottom: i64::from(height.saturating_sub(bottom + 1)),
        }
    }

    fn width(&self) -> f64 {
        (self.right - self.left).max(1) as f64
    }

    fn height(&self) -> f64 {
        (self.bottom - self.top).max(1) as f64
    }
}

impl Plot {
    /// Rasterizes the plot: 8-bit for grayscale plots, RGB otherwise.
    pub fn render(&self) -> Result<Pixels> {
        self.validate()?;
        let mut canvas = RgbImage::from_pixel(self.width, self.height, to_rgb(self.background));

        let frame = Frame::for_size(self.width, self.height);
        draw_frame(&mut canvas, frame);

        if let Some((x0, x1, y0, y1)) = self.data_bounds() {
            let x_span = if x1 > x0 { x1 - x0 } else { 1.0 };
            let y_span = if y1 > y0 { y1 - y0 } else { 1.0 };
            let project = |x: f64, y: f64| -> (i64, i64) {
                let px = frame.left as f64 + (x - x0) / x_span * frame.width();
                let py = frame.bottom as f64 - (y - y0) / y_span * frame.height();
                (px.round() as i64, py.round() as i64)
            };

            for series in &self.series {
                let color = to_rgb(series.color);
                let mut previous: Option<(i64, i64)> = None;
                for (x, y) in series.points() {
                    let point = project(x, y);
                    match series.style {
                        SeriesStyle::Line => {
                            match previous {
                                Some(start) => draw_line(&mut canvas, start, point, color),
                                None => put(&mut canvas, point.0, point.1, color),
                            }
                            previous = Some(point);
                        }
                        SeriesStyle::Dots => draw_dot(&mut canvas, point, color),
                    }
                }
            }
        }

        let pixels = Pixels::Rgb24(canvas);
        Ok(if self.is_color() {
            pixels
        } else {
            pixels.convert(BitDepth::Gray8)
        })
    }
}

fn to_rgb(color: PlotColor) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn put(canvas: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && x < i64::from(canvas.width()) && y < i64::from(canvas.height()) {
        canvas.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_frame(canvas: &mut RgbImage, frame: Frame) {
    let black = to_rgb(PlotColor::BLACK);
    draw_line(canvas, (frame.left, frame.top), (frame.right, frame.top), black);
    draw_line(canvas, (frame.right, frame.top), (frame.right, frame.bottom), black);
    draw_line(canvas, (frame.right, frame.bottom), (frame.left, frame.bottom), black);
    draw_line(canvas, (frame.left, frame.bottom), (frame.left, frame.top), black);
}

fn draw_dot(canvas: &mut RgbImage, (cx, cy): (i64, i64), color: Rgb<u8>) {
    for dy in -DOT_RADIUS..=DOT_RADIUS {
        for dx in -DOT_RADIUS..=DOT_RADIUS {
            put(canvas, cx + dx, cy + dy, color);
        }
    }
}

// Bresenham, all octants.
fn draw_line(canvas: &mut RgbImage, (x0, y0): (i64, i64), (x1, y1): (i64, i64), color: Rgb<u8>) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };
    let (mut x, mut y) = (x0, y0);
    let mut error = dx + dy;
    loop {
        put(canvas, x, y, color);
        if x == x1 && y == y1 {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            x += step_x;
        }
        if doubled <= dx {
            error += dx;
            y += step_y;
        }
    }
}
