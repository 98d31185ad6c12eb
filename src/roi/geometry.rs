#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn pixel_bounds(&self) -> PixelBounds {
        PixelBounds::enclosing(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Integer pixel extent, `x0..x1` by `y0..y1` (exclusive upper ends).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelBounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelBounds {
    pub fn enclosing(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            x0: min_x.floor() as i32,
            y0: min_y.floor() as i32,
            x1: max_x.ceil() as i32,
            y1: max_y.ceil() as i32,
        }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0).max(0) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    pub fn intersection(&self, other: &Self) -> Self {
        let bounds = Self {
            x0: self.x0.max(other.x0),
            y0: self.y0.max(other.y0),
            x1: self.x1.min(other.x1),
            y1: self.y1.min(other.y1),
        };
        if bounds.is_empty() {
            Self::default()
        } else {
            bounds
        }
    }

    pub fn contains_pixel(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && y >= self.y0 && x < self.x1 && y < self.y1
    }

    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> + use<> {
        let Self { x0, y0, x1, y1 } = *self;
        (y0..y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Regular polygon approximating the circle of `diameter` around the origin.
    pub fn circle(diameter: f64) -> Self {
        let radius = diameter / 2.0;
        let vertices = ((std::f64::consts::PI * diameter).ceil() as usize).max(16);
        let points = (0..vertices)
            .map(|index| {
                let angle = std::f64::consts::TAU * index as f64 / vertices as f64;
                Point::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.points
                .iter()
                .map(|point| point.translate(dx, dy))
                .collect(),
        )
    }

    pub fn pixel_bounds(&self) -> PixelBounds {
        let Some(first) = self.points.first() else {
            return PixelBounds::default();
        };
        let (min_x, min_y, max_x, max_y) = self.points.iter().fold(
            (first.x, first.y, first.x, first.y),
            |(min_x, min_y, max_x, max_y), point| {
                (
                    min_x.min(point.x),
                    min_y.min(point.y),
                    max_x.max(point.x),
                    max_y.max(point.y),
                )
            },
        );
        PixelBounds::enclosing(min_x, min_y, max_x, max_y)
    }

    /// Even-odd point in polygon test.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let mut inside = false;
        let mut previous = self.points[self.points.len() - 1];
        for &current in &self.points {
            if (current.y > y) != (previous.y > y) {
                let crossing =
                    (previous.x - current.x) * (y - current.y) / (previous.y - current.y) + current.x;
                if x < crossing {
                    inside = !inside;
                }
            }
            previous = current;
        }
        inside
    }
}
