mod error;
mod freehand;
mod geometry;
mod region;
mod shape;


pub use error::{Result, RoiError};
pub use freehand::{FreehandTracer, TraceMode};
pub use geometry::{PixelBounds, Point, Polygon, Rect};
pub use region::{Roi, RoiAttributes, RoiShape};
pub use shape::ShapeMask;
