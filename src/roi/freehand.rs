use super::{Point, Polygon, Roi, RoiShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraceMode {
    #[default]
    Area,
    Line,
}

/// Accumulates drag positions into a freehand outline.
#[derive(Debug, Clone)]
pub struct FreehandTracer {
    mode: TraceMode,
    points: Vec<Point>,
}

impl FreehandTracer {
    pub fn begin(start: Point, mode: TraceMode) -> Self {
        Self {
            mode,
            points: vec![start],
        }
    }

    /// Records a drag position; repeats of the last point are dropped.
    pub fn add(&mut self, point: Point) -> bool {
        if self.points.last() == Some(&point) {
            return false;
        }
        self.points.push(point);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn mode(&self) -> TraceMode {
        self.mode
    }

    /// Closes the trace. Area traces need three distinct points, line traces two.
    pub fn finish(self) -> Option<Roi> {
        match self.mode {
            TraceMode::Area if self.distinct_points_at_least(3) => {
                Some(Roi::polygon(Polygon::new(self.points)))
            }
            TraceMode::Line if self.points.len() >= 2 => {
                Some(Roi::new(RoiShape::Polyline(self.points)))
            }
            _ => None,
        }
    }

    fn distinct_points_at_least(&self, count: usize) -> bool {
        self.points
            .iter()
            .enumerate()
            .filter(|(index, point)| !self.points[..*index].contains(point))
            .take(count)
            .count()
            == count
    }
}
