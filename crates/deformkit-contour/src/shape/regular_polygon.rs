use std::f64::consts::{FRAC_PI_2, TAU};

use deformkit_core::{
    normalize_radian, CoordinateFrame, DevicePoint, Error, FramePoint, Memoized, PolarFrame,
    PolarPoint, Result, Vector,
};

use super::{to_device, ContourShape, EditResult, ShapeKind};
use crate::side::Side;
use crate::transaction::TransactionStack;

/// Restore point of a [`RegularPolygon`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygonState {
    pub frame: PolarFrame,
    pub r: f64,
    pub sides: usize,
    pub radian: f64,
}

type VertexDeps = ((f64, f64), f64, usize, f64);

/// Parametric polygon: center, radius, side count and rotation.
///
/// Vertices are derived on read. Vertex 0 sits straight above the center
/// when the rotation is zero; the rest follow counter-clockwise on screen.
#[derive(Debug, Clone)]
pub struct RegularPolygon {
    frame: PolarFrame,
    r: f64,
    sides: usize,
    radian: f64,
    transactions: TransactionStack<RegularPolygonState>,
    vertices: Memoized<VertexDeps, Vec<PolarPoint>>,
}

impl RegularPolygon {
    pub fn new(center: DevicePoint, r: f64, sides: usize) -> Result<Self> {
        validate_sides(sides)?;
        if !r.is_finite() || r < 0.0 {
            return Err(Error::invalid_shape(format!(
                "radius must be finite and non-negative, got {}",
                r
            )));
        }
        let (x, y) = center.absolute();
        Ok(Self {
            frame: PolarFrame::new(x, y),
            r,
            sides,
            radian: 0.0,
            transactions: TransactionStack::new(),
            vertices: Memoized::new(),
        })
    }

    pub fn radius(&self) -> f64 {
        self.r
    }

    pub fn sides(&self) -> usize {
        self.sides
    }

    /// Changes the side count, keeping center, radius and rotation.
    pub fn set_sides(&mut self, sides: usize) -> Result<EditResult> {
        validate_sides(sides)?;
        self.sides = sides;
        Ok(EditResult::default())
    }

    fn vertices(&self) -> Vec<PolarPoint> {
        let deps = (self.frame.origin(), self.r, self.sides, self.radian);
        self.vertices.get(deps, |&(origin, r, sides, radian)| {
            let frame = PolarFrame::new(origin.0, origin.1);
            let step = TAU / sides as f64;
            (0..sides)
                .map(|i| frame.point(radian + FRAC_PI_2 + step * i as f64, r))
                .collect()
        })
    }
}

fn validate_sides(sides: usize) -> Result<()> {
    if sides < 3 {
        return Err(Error::invalid_shape(format!(
            "a regular polygon needs at least 3 sides, got {}",
            sides
        )));
    }
    Ok(())
}

impl ContourShape for RegularPolygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::RegularPolygon
    }

    fn points(&self) -> Vec<DevicePoint> {
        self.vertices().iter().map(to_device).collect()
    }

    fn point_count(&self) -> usize {
        self.sides
    }

    fn get_point(&self, index: usize) -> Result<DevicePoint> {
        self.vertices()
            .get(index)
            .map(to_device)
            .ok_or(Error::PointIndexOutOfBounds {
                index,
                len: self.sides,
            })
    }

    fn center(&self) -> DevicePoint {
        let (x, y) = self.frame.origin();
        DevicePoint::new(x, y)
    }

    fn radian(&self) -> f64 {
        self.radian
    }

    fn add_vector(&mut self, v: &Vector, side: Side) -> Result<EditResult> {
        if side != Side::All {
            return Err(Error::unsupported("add_vector", "RegularPolygon"));
        }
        self.frame.move_by_vector(v);
        Ok(EditResult::default())
    }

    fn rotate(&mut self, radian: f64) -> Result<EditResult> {
        self.radian = normalize_radian(self.radian + radian);
        Ok(EditResult::default())
    }

    fn scale(&mut self, ratio: f64) -> Result<EditResult> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::invalid_shape(format!(
                "scale ratio must be positive, got {}",
                ratio
            )));
        }
        self.r *= ratio;
        Ok(EditResult::default())
    }

    /// Grows the radius by `delta`; the radius never drops below zero.
    fn expansion(&mut self, delta: f64) -> Result<EditResult> {
        self.r = (self.r + delta).max(0.0);
        Ok(EditResult::default())
    }

    fn save(&mut self) {
        self.transactions.save(RegularPolygonState {
            frame: self.frame,
            r: self.r,
            sides: self.sides,
            radian: self.radian,
        });
    }

    fn restore(&mut self) -> bool {
        let Some(state) = self.transactions.restore() else {
            tracing::warn!("restore on an empty regular polygon transaction stack");
            return false;
        };
        self.frame = state.frame;
        self.r = state.r;
        self.sides = state.sides;
        self.radian = state.radian;
        true
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
