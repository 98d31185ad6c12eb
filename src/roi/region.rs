use super::{PixelBounds, Point, Polygon, Rect, Result, RoiError, ShapeMask};

#[derive(Debug, Clone, PartialEq)]
pub enum RoiShape {
    Rectangle(Rect),
    Oval(Rect),
    Polygon(Polygon),
    Composite(ShapeMask),
    Line { start: Point, end: Point },
    Polyline(Vec<Point>),
    Points(Vec<Point>),
}

impl RoiShape {
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "Rectangle",
            Self::Oval(_) => "Oval",
            Self::Polygon(_) => "Polygon",
            Self::Composite(_) => "Composite",
            Self::Line { .. } => "Line",
            Self::Polyline(_) => "Polyline",
            Self::Points(_) => "Points",
        }
    }

    pub const fn is_area(&self) -> bool {
        matches!(
            self,
            Self::Rectangle(_) | Self::Oval(_) | Self::Polygon(_) | Self::Composite(_)
        )
    }

    /// Whether `(x, y)` lies inside the enclosed area. Always false for line and point ROIs.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        match self {
            Self::Rectangle(rect) => rect.contains(x, y),
            Self::Oval(rect) => {
                if rect.width <= 0.0 || rect.height <= 0.0 {
                    return false;
                }
                let center = rect.center();
                let dx = (x - center.x) / (rect.width / 2.0);
                let dy = (y - center.y) / (rect.height / 2.0);
                dx * dx + dy * dy <= 1.0
            }
            Self::Polygon(polygon) => polygon.contains(x, y),
            Self::Composite(mask) => mask.contains_pixel(x.floor() as i32, y.floor() as i32),
            Self::Line { .. } | Self::Polyline(_) | Self::Points(_) => false,
        }
    }

    /// A pixel is covered when its centre is inside the shape.
    pub fn covers_pixel(&self, x: i32, y: i32) -> bool {
        match self {
            Self::Composite(mask) => mask.contains_pixel(x, y),
            other => other.contains(f64::from(x) + 0.5, f64::from(y) + 0.5),
        }
    }

    pub fn pixel_bounds(&self) -> PixelBounds {
        match self {
            Self::Rectangle(rect) | Self::Oval(rect) => rect.pixel_bounds(),
            Self::Polygon(polygon) => polygon.pixel_bounds(),
            Self::Composite(mask) => mask.bounds(),
            Self::Line { start, end } => Polygon::new(vec![*start, *end]).pixel_bounds(),
            Self::Polyline(points) | Self::Points(points) => {
                Polygon::new(points.clone()).pixel_bounds()
            }
        }
    }

    /// Number of covered pixels.
    pub fn area(&self) -> usize {
        match self {
            Self::Composite(mask) => mask.area(),
            shape if shape.is_area() => shape
                .pixel_bounds()
                .pixels()
                .filter(|&(x, y)| shape.covers_pixel(x, y))
                .count(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoiAttributes {
    pub name: Option<String>,
    pub stroke_color: Option<[u8; 3]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Roi {
    pub shape: RoiShape,
    pub attributes: RoiAttributes,
}

impl Roi {
    pub fn new(shape: RoiShape) -> Self {
        Self {
            shape,
            attributes: RoiAttributes::default(),
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(RoiShape::Rectangle(Rect::new(x, y, width, height)))
    }

    pub fn oval(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(RoiShape::Oval(Rect::new(x, y, width, height)))
    }

    pub fn polygon(polygon: Polygon) -> Self {
        Self::new(RoiShape::Polygon(polygon))
    }

    pub fn line(start: Point, end: Point) -> Self {
        Self::new(RoiShape::Line { start, end })
    }

    pub fn with_attributes(mut self, attributes: RoiAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn is_area(&self) -> bool {
        self.shape.is_area()
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.shape, RoiShape::Composite(_))
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.shape.contains(x, y)
    }

    pub fn area(&self) -> usize {
        self.shape.area()
    }

    pub fn pixel_bounds(&self) -> PixelBounds {
        self.shape.pixel_bounds()
    }

    /// Converts an area ROI into its composite form. Composite ROIs pass through unchanged.
    pub fn promote(self) -> Result<Self> {
        let Self { shape, attributes } = self;
        let shape = match shape {
            composite @ RoiShape::Composite(_) => composite,
            simple if simple.is_area() => RoiShape::Composite(ShapeMask::from_shape(&simple)),
            other => return Err(RoiError::NotAnArea(other.kind_name())),
        };
        Ok(Self { shape, attributes })
    }

    pub fn composite(&self) -> Option<&ShapeMask> {
        match &self.shape {
            RoiShape::Composite(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn composite_mut(&mut self) -> Option<&mut ShapeMask> {
        match &mut self.shape {
            RoiShape::Composite(mask) => Some(mask),
            _ => None,
        }
    }

    pub fn describe(&self) -> String {
        let bounds = self.pixel_bounds();
        match &self.shape {
            RoiShape::Rectangle(rect) => format!("Rect {:.0}x{:.0}", rect.width, rect.height),
            RoiShape::Oval(rect) => format!("Oval {:.0}x{:.0}", rect.width, rect.height),
            RoiShape::Polygon(polygon) => format!("Polygon points: {}", polygon.len()),
            RoiShape::Composite(mask) => format!(
                "Composite {}x{} area {}",
                bounds.width(),
                bounds.height(),
                mask.area()
            ),
            RoiShape::Line { start, end } => format!("Line length {:.2}", start.distance(*end)),
            RoiShape::Polyline(points) => format!("Polyline points: {}", points.len()),
            RoiShape::Points(points) => format!("Point count {}", points.len()),
        }
    }
}
