use image::{GrayImage, Luma};

use super::{PixelBounds, RoiShape};

const COVERED: Luma<u8> = Luma([255]);
const CLEAR: Luma<u8> = Luma([0]);

/// Composite region stored as a coverage mask whose top-left pixel sits at
/// `origin` in image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMask {
    origin: (i32, i32),
    mask: GrayImage,
}

impl Default for ShapeMask {
    fn default() -> Self {
        Self {
            origin: (0, 0),
            mask: GrayImage::new(0, 0),
        }
    }
}

impl ShapeMask {
    pub fn from_shape(shape: &RoiShape) -> Self {
        let mut mask = Self::default();
        mask.union(shape);
        mask
    }

    pub fn bounds(&self) -> PixelBounds {
        let (x0, y0) = self.origin;
        PixelBounds {
            x0,
            y0,
            x1: x0 + self.mask.width() as i32,
            y1: y0 + self.mask.height() as i32,
        }
    }

    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        if !self.bounds().contains_pixel(x, y) {
            return false;
        }
        let (x0, y0) = self.origin;
        self.mask.get_pixel((x - x0) as u32, (y - y0) as u32).0[0] > 0
    }

    pub fn area(&self) -> usize {
        self.mask.pixels().filter(|pixel| pixel.0[0] > 0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    pub fn union(&mut self, shape: &RoiShape) {
        let region = shape.pixel_bounds();
        if region.is_empty() || !shape.is_area() {
            return;
        }
        self.grow_to(self.bounds().union(&region));
        for (x, y) in region.pixels() {
            if shape.covers_pixel(x, y) {
                self.set(x, y, COVERED);
            }
        }
    }

    pub fn subtract(&mut self, shape: &RoiShape) {
        let overlap = self.bounds().intersection(&shape.pixel_bounds());
        for (x, y) in overlap.pixels() {
            if shape.covers_pixel(x, y) {
                self.set(x, y, CLEAR);
            }
        }
    }

    /// Shrinks the mask to the tight bounds of its covered pixels.
    pub fn trim(&mut self) {
        let covered = self
            .bounds()
            .pixels()
            .filter(|&(x, y)| self.contains_pixel(x, y))
            .fold(None, |bounds: Option<PixelBounds>, (x, y)| {
                let pixel = PixelBounds {
                    x0: x,
                    y0: y,
                    x1: x + 1,
                    y1: y + 1,
                };
                Some(bounds.map_or(pixel, |bounds| bounds.union(&pixel)))
            });
        match covered {
            Some(bounds) if bounds != self.bounds() => self.resize(bounds),
            Some(_) => {}
            None => *self = Self::default(),
        }
    }

    /// Renders the coverage into an image-sized mask, clipping anything outside it.
    pub fn to_image(&self, width: u32, height: u32) -> GrayImage {
        let mut image = GrayImage::new(width, height);
        let frame = PixelBounds {
            x0: 0,
            y0: 0,
            x1: width as i32,
            y1: height as i32,
        };
        for (x, y) in self.bounds().intersection(&frame).pixels() {
            if self.contains_pixel(x, y) {
                image.put_pixel(x as u32, y as u32, COVERED);
            }
        }
        image
    }

    fn set(&mut self, x: i32, y: i32, value: Luma<u8>) {
        let (x0, y0) = self.origin;
        self.mask.put_pixel((x - x0) as u32, (y - y0) as u32, value);
    }

    fn grow_to(&mut self, bounds: PixelBounds) {
        if bounds != self.bounds() {
            self.resize(bounds);
        }
    }

    fn resize(&mut self, bounds: PixelBounds) {
        let mut mask = GrayImage::new(bounds.width(), bounds.height());
        for (x, y) in self.bounds().intersection(&bounds).pixels() {
            if self.contains_pixel(x, y) {
                mask.put_pixel((x - bounds.x0) as u32, (y - bounds.y0) as u32, COVERED);
            }
        }
        self.origin = (bounds.x0, bounds.y0);
        self.mask = mask;
    }
}
