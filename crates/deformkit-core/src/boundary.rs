//! Axis-aligned boundaries.

use crate::frame::{CoordinateFrame, DeviceFrame, DevicePoint, FramePoint};
use crate::vector::Vector;

/// Axis-aligned box `(left, top, right, bottom)` in a device frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub frame: DeviceFrame,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Boundary {
    /// Creates a boundary in the device origin frame.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::in_frame(DeviceFrame::ORIGIN, left, top, right, bottom)
    }

    pub fn in_frame(frame: DeviceFrame, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            frame,
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a boundary from a position and a size.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    /// Smallest boundary (device origin frame) containing every point.
    /// Returns `None` for an empty slice.
    pub fn from_points<P: FramePoint>(points: &[P]) -> Option<Self> {
        let mut iter = points.iter().map(|p| p.absolute());
        let (x, y) = iter.next()?;
        let (left, top, right, bottom) = iter.fold((x, y, x, y), |(l, t, r, b), (x, y)| {
            (l.min(x), t.min(y), r.max(x), b.max(y))
        });
        Some(Self::new(left, top, right, bottom))
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Same box expressed in the device origin frame.
    pub fn to_absolute(&self) -> Boundary {
        let (ox, oy) = self.frame.origin();
        Boundary::new(
            self.left + ox,
            self.top + oy,
            self.right + ox,
            self.bottom + oy,
        )
    }

    pub fn center(&self) -> DevicePoint {
        self.frame.point(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Grows every side outward by `padding` (shrinks for negative values).
    pub fn expand(&self, padding: f64) -> Boundary {
        Boundary {
            left: self.left - padding,
            top: self.top - padding,
            right: self.right + padding,
            bottom: self.bottom + padding,
            ..*self
        }
    }

    pub fn translate(&self, v: &Vector) -> Boundary {
        Boundary {
            left: self.left + v.x(),
            top: self.top + v.y(),
            right: self.right + v.x(),
            bottom: self.bottom + v.y(),
            ..*self
        }
    }

    /// True when the point lies inside or on the edge.
    pub fn contains_point<P: FramePoint>(&self, point: &P) -> bool {
        let abs = self.to_absolute();
        let (x, y) = point.absolute();
        x >= abs.left && x <= abs.right && y >= abs.top && y <= abs.bottom
    }

    /// True when `other` lies entirely inside this boundary.
    pub fn contains(&self, other: &Boundary) -> bool {
        let outer = self.to_absolute();
        let inner = other.to_absolute();
        inner.left >= outer.left
            && inner.right <= outer.right
            && inner.top >= outer.top
            && inner.bottom <= outer.bottom
    }

    /// Smallest translation that moves `other` inside this boundary.
    ///
    /// On an axis where `other` is larger than this boundary the correction
    /// aligns the leading (left/top) sides.
    pub fn correction_for(&self, other: &Boundary) -> Vector {
        let outer = self.to_absolute();
        let inner = other.to_absolute();
        let axis = |lo: f64, hi: f64, min: f64, max: f64| {
            if lo < min || hi - lo > max - min {
                min - lo
            } else if hi > max {
                max - hi
            } else {
                0.0
            }
        };
        Vector::new(
            axis(inner.left, inner.right, outer.left, outer.right),
            axis(inner.top, inner.bottom, outer.top, outer.bottom),
        )
    }
}
