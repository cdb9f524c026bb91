use deformkit_core::{
    CoordinateFrame, DevicePoint, Error, FramePoint, Memoized, PolarFrame, PolarPoint, Result,
    Vector,
};
use tracing::debug;

use super::{centroid, to_device, ContourShape, EditResult, ShapeKind};
use crate::side::Side;
use crate::transaction::TransactionStack;

/// Maps the four named corners onto positional point indices.
///
/// Always a permutation of `{0, 1, 2, 3}`. Swapping two entries relabels the
/// corners without touching any point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerIndex {
    pub left_top: usize,
    pub right_top: usize,
    pub right_bottom: usize,
    pub left_bottom: usize,
}

impl CornerIndex {
    pub const IDENTITY: CornerIndex = CornerIndex {
        left_top: 0,
        right_top: 1,
        right_bottom: 2,
        left_bottom: 3,
    };

    /// Index of a corner side. Edges and `All` have none.
    pub fn index_of(&self, corner: Side) -> Option<usize> {
        match corner {
            Side::LeftTop => Some(self.left_top),
            Side::RightTop => Some(self.right_top),
            Side::RightBottom => Some(self.right_bottom),
            Side::LeftBottom => Some(self.left_bottom),
            _ => None,
        }
    }

    /// Exchanges left and right.
    pub fn swap_horizontal(&mut self) {
        std::mem::swap(&mut self.left_top, &mut self.right_top);
        std::mem::swap(&mut self.left_bottom, &mut self.right_bottom);
    }

    /// Exchanges top and bottom.
    pub fn swap_vertical(&mut self) {
        std::mem::swap(&mut self.left_top, &mut self.left_bottom);
        std::mem::swap(&mut self.right_top, &mut self.right_bottom);
    }

    pub fn is_permutation(&self) -> bool {
        let mut seen = [false; 4];
        for i in [
            self.left_top,
            self.right_top,
            self.right_bottom,
            self.left_bottom,
        ] {
            if i >= 4 || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }
}

impl Default for CornerIndex {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Restore point of a [`Quadrilateral`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrilateralState {
    pub frame: PolarFrame,
    pub points: [PolarPoint; 4],
    pub corners: CornerIndex,
    pub radian: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Derived {
    center: (f64, f64),
    left: (f64, f64),
    right: (f64, f64),
    top: (f64, f64),
    bottom: (f64, f64),
    width: f64,
    height: f64,
}

fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (b.0 - a.0).hypot(b.1 - a.1)
}

/// Four-point contour with named corners.
///
/// Points live in a polar frame anchored at the initial center. Corners are
/// addressed through a [`CornerIndex`], so dragging a side past its opposite
/// only relabels the corners.
#[derive(Debug, Clone)]
pub struct Quadrilateral {
    frame: PolarFrame,
    points: [PolarPoint; 4],
    corners: CornerIndex,
    radian: f64,
    transactions: TransactionStack<QuadrilateralState>,
    derived: Memoized<[(f64, f64); 4], Derived>,
}

impl Quadrilateral {
    /// Axis-aligned rectangle. Corner 0 is the left-top, then clockwise on screen.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        let frame = PolarFrame::new(left + width / 2.0, top + height / 2.0);
        let points = [
            frame.from_absolute(left, top),
            frame.from_absolute(left + width, top),
            frame.from_absolute(left + width, top + height),
            frame.from_absolute(left, top + height),
        ];
        Self::with_points(frame, points, 0.0)
    }

    /// Quadrilateral from corners in left-top, right-top, right-bottom,
    /// left-bottom order. The rotation is read from the top edge.
    pub fn from_points(corners: [DevicePoint; 4]) -> Result<Self> {
        let absolute = corners.map(|p| p.absolute());
        if absolute.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::invalid_shape("quadrilateral corners must be finite"));
        }
        let (cx, cy) = centroid(&absolute);
        let frame = PolarFrame::new(cx, cy);
        let top = corners[0].vector_to(&corners[1]);
        let radian = if top.is_zero() {
            0.0
        } else {
            top.flip_y().angle()
        };
        Ok(Self::with_points(
            frame,
            corners.map(|p| frame.convert_from(&p)),
            radian,
        ))
    }

    fn with_points(frame: PolarFrame, points: [PolarPoint; 4], radian: f64) -> Self {
        Self {
            frame,
            points,
            corners: CornerIndex::IDENTITY,
            radian,
            transactions: TransactionStack::new(),
            derived: Memoized::new(),
        }
    }

    pub fn corner_index(&self) -> CornerIndex {
        self.corners
    }

    pub fn left_top(&self) -> DevicePoint {
        to_device(&self.points[self.corners.left_top])
    }

    pub fn right_top(&self) -> DevicePoint {
        to_device(&self.points[self.corners.right_top])
    }

    pub fn right_bottom(&self) -> DevicePoint {
        to_device(&self.points[self.corners.right_bottom])
    }

    pub fn left_bottom(&self) -> DevicePoint {
        to_device(&self.points[self.corners.left_bottom])
    }

    pub fn left_center(&self) -> DevicePoint {
        let (x, y) = self.derived().left;
        DevicePoint::new(x, y)
    }

    pub fn right_center(&self) -> DevicePoint {
        let (x, y) = self.derived().right;
        DevicePoint::new(x, y)
    }

    pub fn top_center(&self) -> DevicePoint {
        let (x, y) = self.derived().top;
        DevicePoint::new(x, y)
    }

    pub fn bottom_center(&self) -> DevicePoint {
        let (x, y) = self.derived().bottom;
        DevicePoint::new(x, y)
    }

    /// Corner positions in left-top, right-top, right-bottom, left-bottom order.
    fn named_absolute(&self) -> [(f64, f64); 4] {
        let c = self.corners;
        [c.left_top, c.right_top, c.right_bottom, c.left_bottom]
            .map(|i| self.points[i].absolute())
    }

    fn derived(&self) -> Derived {
        self.derived.get(self.named_absolute(), |&[lt, rt, rb, lb]| {
            let left = midpoint(lt, lb);
            let right = midpoint(rt, rb);
            let top = midpoint(lt, rt);
            let bottom = midpoint(lb, rb);
            Derived {
                center: centroid(&[lt, rt, rb, lb]),
                left,
                right,
                top,
                bottom,
                width: distance(left, right),
                height: distance(top, bottom),
            }
        })
    }

    /// Ground vector of a side: center to the side's handle position.
    fn ground_vector(&self, side: Side) -> Option<Vector> {
        let d = self.derived();
        let target = match side {
            Side::Left => d.left,
            Side::Right => d.right,
            Side::Top => d.top,
            Side::Bottom => d.bottom,
            corner => self.points[self.corners.index_of(corner)?].absolute(),
        };
        Some(Vector::from_points(d.center.0, d.center.1, target.0, target.1))
    }

    /// Side direction of the unrotated rectangle, turned by the contour rotation.
    fn axis_direction(&self, side: Side) -> Vector {
        let (x, y): (f64, f64) = match side {
            Side::Left => (-1.0, 0.0),
            Side::Right => (1.0, 0.0),
            Side::Top => (0.0, -1.0),
            Side::Bottom => (0.0, 1.0),
            Side::LeftTop => (-1.0, -1.0),
            Side::RightTop => (1.0, -1.0),
            Side::RightBottom => (1.0, 1.0),
            Side::LeftBottom => (-1.0, 1.0),
            Side::All => (0.0, 0.0),
        };
        Vector::new(x, y)
            .normalize()
            .flip_y()
            .rotate(self.radian)
            .flip_y()
    }

    /// Device vector expressed in the contour's unrotated orientation.
    fn unrotate(&self, v: &Vector) -> Vector {
        v.flip_y().rotate(-self.radian).flip_y()
    }

    fn translate_indices(&mut self, indices: &[usize], offset: &Vector) {
        for &i in indices {
            self.points[i] = self.points[i].add_vector(offset);
        }
    }

    /// Moves one edge along its ground vector and relabels the corners when
    /// the edge was pulled through its opposite.
    fn move_edge(&mut self, v: &Vector, edge: Side) -> bool {
        let Some(normal) = self.side_normal(edge) else {
            return false;
        };
        let offset = normal.multiply(v.dot(&normal));
        if offset.is_zero() {
            return false;
        }
        let extent = if edge.is_horizontal_edge() {
            self.width()
        } else {
            self.height()
        };

        let indices: Vec<usize> = edge
            .corners()
            .into_iter()
            .filter_map(|c| self.corners.index_of(c))
            .collect();
        self.translate_indices(&indices, &offset);

        let local = self.unrotate(&offset);
        let through = match edge {
            Side::Left => local.x() > 0.0,
            Side::Right => local.x() < 0.0,
            Side::Top => local.y() > 0.0,
            Side::Bottom => local.y() < 0.0,
            _ => false,
        };
        if !(through && offset.length() > extent) {
            return false;
        }
        if edge.is_horizontal_edge() {
            self.corners.swap_horizontal();
        } else {
            self.corners.swap_vertical();
        }
        debug!(side = %edge, offset = %offset, extent, "quadrilateral side swapped");
        true
    }

    fn state(&self) -> QuadrilateralState {
        QuadrilateralState {
            frame: self.frame,
            points: self.points,
            corners: self.corners,
            radian: self.radian,
        }
    }
}

impl ContourShape for Quadrilateral {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Quadrilateral
    }

    fn points(&self) -> Vec<DevicePoint> {
        self.points.iter().map(to_device).collect()
    }

    fn point_count(&self) -> usize {
        4
    }

    fn get_point(&self, index: usize) -> Result<DevicePoint> {
        self.points
            .get(index)
            .map(to_device)
            .ok_or(Error::PointIndexOutOfBounds { index, len: 4 })
    }

    fn center(&self) -> DevicePoint {
        let (x, y) = self.derived().center;
        DevicePoint::new(x, y)
    }

    fn radian(&self) -> f64 {
        self.radian
    }

    fn width(&self) -> f64 {
        self.derived().width
    }

    fn height(&self) -> f64 {
        self.derived().height
    }

    fn add_vector(&mut self, v: &Vector, side: Side) -> Result<EditResult> {
        match side {
            Side::All => {
                // Translating the frame moves every point by exactly `v`.
                self.frame.move_by_vector(v);
                let frame = self.frame;
                self.points = self.points.map(|p| frame.point(p.sita(), p.r()));
                Ok(EditResult::default())
            }
            edge if edge.is_edge() => Ok(EditResult::switched(self.move_edge(v, edge))),
            corner => {
                let (horizontal, vertical) = corner
                    .edges()
                    .ok_or_else(|| Error::unsupported("add_vector", "Quadrilateral"))?;
                let horizontal_swapped = self.move_edge(v, horizontal);
                let vertical_swapped = self.move_edge(v, vertical);
                Ok(EditResult::switched(horizontal_swapped || vertical_swapped))
            }
        }
    }

    fn rotate(&mut self, radian: f64) -> Result<EditResult> {
        let (cx, cy) = self.derived().center;
        self.points = self
            .points
            .map(|p| p.rotate_around_absolute(cx, cy, radian));
        self.radian = deformkit_core::normalize_radian(self.radian + radian);
        Ok(EditResult::default())
    }

    fn scale(&mut self, ratio: f64) -> Result<EditResult> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::invalid_shape(format!(
                "scale ratio must be positive, got {}",
                ratio
            )));
        }
        let (cx, cy) = self.derived().center;
        let frame = self.frame;
        self.points = self.points.map(|p| {
            let (x, y) = p.absolute();
            frame.from_absolute(cx + (x - cx) * ratio, cy + (y - cy) * ratio)
        });
        Ok(EditResult::default())
    }

    fn set_point(&mut self, index: usize, point: DevicePoint) -> Result<EditResult> {
        let slot = self
            .points
            .get_mut(index)
            .ok_or(Error::PointIndexOutOfBounds { index, len: 4 })?;
        *slot = self.frame.convert_from(&point);
        Ok(EditResult::default())
    }

    fn get_point_by_side(&self, side: Side) -> Result<DevicePoint> {
        let d = self.derived();
        let (x, y) = match side {
            Side::All => d.center,
            Side::Left => d.left,
            Side::Right => d.right,
            Side::Top => d.top,
            Side::Bottom => d.bottom,
            corner => {
                let index = self
                    .corners
                    .index_of(corner)
                    .ok_or_else(|| Error::unsupported("get_point_by_side", "Quadrilateral"))?;
                self.points[index].absolute()
            }
        };
        Ok(DevicePoint::new(x, y))
    }

    /// Unit ground vector of a side. A collapsed side falls back to the
    /// rotated axis direction.
    fn side_normal(&self, side: Side) -> Option<Vector> {
        if side == Side::All {
            return None;
        }
        let ground = self.ground_vector(side)?;
        if ground.length() > deformkit_core::ACCURACY {
            Some(ground.normalize())
        } else {
            Some(self.axis_direction(side))
        }
    }

    fn save(&mut self) {
        let state = self.state();
        self.transactions.save(state);
    }

    fn restore(&mut self) -> bool {
        match self.transactions.restore() {
            Some(state) => {
                self.frame = state.frame;
                self.points = state.points;
                self.corners = state.corners;
                self.radian = state.radian;
                true
            }
            None => {
                tracing::warn!("restore on an empty quadrilateral transaction stack");
                false
            }
        }
    }

    fn pop(&mut self) -> bool {
        self.transactions.pop()
    }

    fn apply(&mut self) {
        self.transactions.apply();
    }

    fn depth(&self) -> usize {
        self.transactions.depth()
    }
}
