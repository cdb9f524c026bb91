//! Editable contours.
//!
//! A closed set of shapes consumed through the [`ContourShape`] capability
//! trait. Each shape implements the edits it can express; the rest come back
//! as [`Error::Unsupported`] instead of silently doing nothing.

mod irregular_polygon;
mod quadrilateral;
mod regular_polygon;

pub use irregular_polygon::{IrregularPolygon, IrregularPolygonState};
pub use quadrilateral::{CornerIndex, Quadrilateral, QuadrilateralState};
pub use regular_polygon::{RegularPolygon, RegularPolygonState};

use std::fmt;

use deformkit_core::{
    Boundary, DeviceFrame, DevicePoint, Error, FramePoint, LineSegment, PolarPoint, Result,
    Vector,
};

use crate::side::Side;

/// Metadata describing the outcome of one edit, read by constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditResult {
    /// The edit pulled a side past its opposite and the side labels swapped.
    pub switched_side: bool,
}

impl EditResult {
    pub fn switched(switched_side: bool) -> Self {
        Self { switched_side }
    }

    /// Combines the outcomes of two edits applied in sequence.
    pub fn merge(self, other: EditResult) -> EditResult {
        EditResult {
            switched_side: self.switched_side || other.switched_side,
        }
    }
}

/// Shape kind tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Quadrilateral,
    RegularPolygon,
    IrregularPolygon,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Quadrilateral => "Quadrilateral",
            ShapeKind::RegularPolygon => "RegularPolygon",
            ShapeKind::IrregularPolygon => "IrregularPolygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capability interface every contour exposes.
///
/// Geometry is read in the device origin frame. Edits return the
/// [`EditResult`] constraints inspect; edits a shape cannot express return
/// [`Error::Unsupported`].
pub trait ContourShape {
    fn kind(&self) -> ShapeKind;

    /// Points in traversal order.
    fn points(&self) -> Vec<DevicePoint>;

    fn point_count(&self) -> usize;

    /// Point at a positional index.
    fn get_point(&self, index: usize) -> Result<DevicePoint>;

    fn center(&self) -> DevicePoint;

    /// Accumulated rotation in radians, counter-clockwise on screen.
    fn radian(&self) -> f64;

    /// Translates the points a side addresses. `Side::All` moves the contour.
    fn add_vector(&mut self, v: &Vector, side: Side) -> Result<EditResult>;

    /// Rotates around the center, counter-clockwise on screen.
    fn rotate(&mut self, radian: f64) -> Result<EditResult>;

    /// Scales around the center.
    fn scale(&mut self, ratio: f64) -> Result<EditResult>;

    /// Pushes a restore point.
    fn save(&mut self);

    /// Reinstates the newest restore point. Returns false when there is none.
    fn restore(&mut self) -> bool;

    /// Drops the newest restore point, keeping the current state.
    fn pop(&mut self) -> bool;

    /// Drops every restore point.
    fn apply(&mut self);

    /// Number of unmatched `save` calls.
    fn depth(&self) -> usize;

    /// Grows the contour outward by `delta`.
    fn expansion(&mut self, _delta: f64) -> Result<EditResult> {
        Err(Error::unsupported("expansion", self.kind().name()))
    }

    fn set_point(&mut self, _index: usize, _point: DevicePoint) -> Result<EditResult> {
        Err(Error::unsupported("set_point", self.kind().name()))
    }

    fn add_point(&mut self, _point: DevicePoint) -> Result<EditResult> {
        Err(Error::unsupported("add_point", self.kind().name()))
    }

    fn remove_point(&mut self, _index: usize) -> Result<EditResult> {
        Err(Error::unsupported("remove_point", self.kind().name()))
    }

    /// The handle position a side addresses. `Side::All` is the center.
    fn get_point_by_side(&self, side: Side) -> Result<DevicePoint> {
        match side {
            Side::All => Ok(self.center()),
            _ => Err(Error::unsupported("get_point_by_side", self.kind().name())),
        }
    }

    /// Unit vector from the center toward a side, if the shape has sides.
    fn side_normal(&self, _side: Side) -> Option<Vector> {
        None
    }

    fn boundary(&self) -> Boundary {
        Boundary::from_points(&self.points()).unwrap_or_else(|| {
            let (x, y) = self.center().absolute();
            Boundary::new(x, y, x, y)
        })
    }

    fn width(&self) -> f64 {
        self.boundary().width()
    }

    fn height(&self) -> f64 {
        self.boundary().height()
    }

    /// Closed edge loop in traversal order.
    fn edges(&self) -> Vec<LineSegment> {
        let points = self.points();
        let n = points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| LineSegment::new(points[i], points[(i + 1) % n]))
            .collect()
    }

    /// Ray-casting point-in-polygon test.
    fn contains_point(&self, point: &DevicePoint) -> bool {
        let points = self.points();
        let n = points.len();
        if n < 3 {
            return false;
        }
        let (px, py) = point.absolute();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = points[i].absolute();
            let (xj, yj) = points[j].absolute();
            if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

/// Converts a canonical polar point to the device origin frame.
pub(crate) fn to_device(point: &PolarPoint) -> DevicePoint {
    point.to_device(&DeviceFrame::ORIGIN)
}

/// Absolute device position of a canonical polar point.
pub(crate) fn absolute_of(points: &[PolarPoint]) -> Vec<(f64, f64)> {
    points.iter().map(|p| p.absolute()).collect()
}

/// Average of absolute device positions.
pub(crate) fn centroid(points: &[(f64, f64)]) -> (f64, f64) {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), (x, y)| (sx + x, sy + y));
    (sx / n, sy / n)
}

/// Any editable contour.
#[derive(Debug, Clone)]
pub enum Contour {
    Quadrilateral(Quadrilateral),
    RegularPolygon(RegularPolygon),
    IrregularPolygon(IrregularPolygon),
}

macro_rules! dispatch {
    ($self:ident, $shape:ident => $body:expr) => {
        match $self {
            Contour::Quadrilateral($shape) => $body,
            Contour::RegularPolygon($shape) => $body,
            Contour::IrregularPolygon($shape) => $body,
        }
    };
}

impl Contour {
    pub fn as_quadrilateral(&self) -> Option<&Quadrilateral> {
        match self {
            Contour::Quadrilateral(q) => Some(q),
            _ => None,
        }
    }

    pub fn as_regular_polygon(&self) -> Option<&RegularPolygon> {
        match self {
            Contour::RegularPolygon(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_irregular_polygon(&self) -> Option<&IrregularPolygon> {
        match self {
            Contour::IrregularPolygon(p) => Some(p),
            _ => None,
        }
    }
}

impl From<Quadrilateral> for Contour {
    fn from(q: Quadrilateral) -> Self {
        Contour::Quadrilateral(q)
    }
}

impl From<RegularPolygon> for Contour {
    fn from(p: RegularPolygon) -> Self {
        Contour::RegularPolygon(p)
    }
}

impl From<IrregularPolygon> for Contour {
    fn from(p: IrregularPolygon) -> Self {
        Contour::IrregularPolygon(p)
    }
}

impl ContourShape for Contour {
    fn kind(&self) -> ShapeKind {
        dispatch!(self, s => s.kind())
    }

    fn points(&self) -> Vec<DevicePoint> {
        dispatch!(self, s => s.points())
    }

    fn point_count(&self) -> usize {
        dispatch!(self, s => s.point_count())
    }

    fn get_point(&self, index: usize) -> Result<DevicePoint> {
        dispatch!(self, s => s.get_point(index))
    }

    fn center(&self) -> DevicePoint {
        dispatch!(self, s => s.center())
    }

    fn radian(&self) -> f64 {
        dispatch!(self, s => s.radian())
    }

    fn add_vector(&mut self, v: &Vector, side: Side) -> Result<EditResult> {
        dispatch!(self, s => s.add_vector(v, side))
    }

    fn rotate(&mut self, radian: f64) -> Result<EditResult> {
        dispatch!(self, s => s.rotate(radian))
    }

    fn scale(&mut self, ratio: f64) -> Result<EditResult> {
        dispatch!(self, s => s.scale(ratio))
    }

    fn save(&mut self) {
        dispatch!(self, s => s.save())
    }

    fn restore(&mut self) -> bool {
        dispatch!(self, s => s.restore())
    }

    fn pop(&mut self) -> bool {
        dispatch!(self, s => s.pop())
    }

    fn apply(&mut self) {
        dispatch!(self, s => s.apply())
    }

    fn depth(&self) -> usize {
        dispatch!(self, s => s.depth())
    }

    fn expansion(&mut self, delta: f64) -> Result<EditResult> {
        dispatch!(self, s => s.expansion(delta))
    }

    fn set_point(&mut self, index: usize, point: DevicePoint) -> Result<EditResult> {
        dispatch!(self, s => s.set_point(index, point))
    }

    fn add_point(&mut self, point: DevicePoint) -> Result<EditResult> {
        dispatch!(self, s => s.add_point(point))
    }

    fn remove_point(&mut self, index: usize) -> Result<EditResult> {
        dispatch!(self, s => s.remove_point(index))
    }

    fn get_point_by_side(&self, side: Side) -> Result<DevicePoint> {
        dispatch!(self, s => s.get_point_by_side(side))
    }

    fn side_normal(&self, side: Side) -> Option<Vector> {
        dispatch!(self, s => s.side_normal(side))
    }

    fn boundary(&self) -> Boundary {
        dispatch!(self, s => s.boundary())
    }

    fn width(&self) -> f64 {
        dispatch!(self, s => s.width())
    }

    fn height(&self) -> f64 {
        dispatch!(self, s => s.height())
    }

    fn edges(&self) -> Vec<LineSegment> {
        dispatch!(self, s => s.edges())
    }

    fn contains_point(&self, point: &DevicePoint) -> bool {
        dispatch!(self, s => s.contains_point(point))
    }
}
