//! Line segments and slope-intercept line equations.

use crate::frame::{DevicePoint, FramePoint};
use crate::vector::Vector;

/// Straight segment between two device points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: DevicePoint,
    pub end: DevicePoint,
}

impl LineSegment {
    pub fn new(start: DevicePoint, end: DevicePoint) -> Self {
        Self { start, end }
    }

    /// Device vector from `start` to `end`.
    pub fn vector(&self) -> Vector {
        self.start.vector_to(&self.end)
    }

    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    pub fn midpoint(&self) -> DevicePoint {
        let (x1, y1) = self.start.absolute();
        let (x2, y2) = self.end.absolute();
        DevicePoint::new((x1 + x2) / 2.0, (y1 + y2) / 2.0)
    }

    /// Shortest distance from `point` to any position on the segment.
    pub fn distance_to_point<P: FramePoint>(&self, point: &P) -> f64 {
        let seg = self.vector();
        let to_point = self.start.vector_to(point);
        if seg.is_zero() {
            return to_point.length();
        }
        let t = (to_point.dot(&seg) / seg.squared_length()).clamp(0.0, 1.0);
        to_point.subtract(&seg.multiply(t)).length()
    }

    /// Equation of the infinite line through the segment.
    pub fn equation(&self) -> LinearEquation {
        let (x1, y1) = self.start.absolute();
        let (x2, y2) = self.end.absolute();
        LinearEquation::from_points(x1, y1, x2, y2)
    }

    /// Intersection point of two segments, if they cross.
    pub fn intersection(&self, other: &LineSegment) -> Option<DevicePoint> {
        let r = self.vector();
        let s = other.vector();
        let denom = r.cross(&s);
        if denom == 0.0 {
            return None;
        }
        let qp = self.start.vector_to(&other.start);
        let t = qp.cross(&s) / denom;
        let u = qp.cross(&r) / denom;
        if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
            let (x, y) = self.start.absolute();
            Some(DevicePoint::new(x + r.x() * t, y + r.y() * t))
        } else {
            None
        }
    }
}

/// Line `y = slope * x + intercept` in absolute device coordinates.
///
/// Vertical lines have an infinite slope and an undefined intercept; every
/// result derived from them is undefined (NaN or infinite) rather than an
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearEquation {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearEquation {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let slope = (y2 - y1) / (x2 - x1);
        Self {
            slope,
            intercept: y1 - slope * x1,
        }
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Intersection with another line.
    ///
    /// Parallel lines divide by zero: distinct parallels give an infinite `x`,
    /// coincident lines give NaN.
    pub fn intersection(&self, other: &LinearEquation) -> (f64, f64) {
        let x = (other.intercept - self.intercept) / (self.slope - other.slope);
        (x, self.y_at(x))
    }
}
