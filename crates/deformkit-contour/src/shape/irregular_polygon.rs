use deformkit_core::{
    CoordinateFrame, DevicePoint, Error, FramePoint, Memoized, PolarFrame, PolarPoint, Result,
    Vector,
};

use super::{absolute_of, centroid, to_device, ContourShape, EditResult, ShapeKind};
use crate::side::Side;
use crate::transaction::TransactionStack;

/// Restore point of an [`IrregularPolygon`].
#[derive(Debug, Clone, PartialEq)]
pub struct IrregularPolygonState {
    pub frame: PolarFrame,
    pub points: Vec<PolarPoint>,
    pub radian: f64,
}

/// Free-form polygon with an editable point list.
///
/// The center is the plain average of the points.
#[derive(Debug, Clone)]
pub struct IrregularPolygon {
    frame: PolarFrame,
    points: Vec<PolarPoint>,
    radian: f64,
    transactions: TransactionStack<IrregularPolygonState>,
    centroid: Memoized<Vec<(f64, f64)>, (f64, f64)>,
}

impl IrregularPolygon {
    /// Creates a polygon from at least one finite point.
    pub fn new(points: Vec<DevicePoint>) -> Result<Self> {
        if points.is_empty() {
            return Err(Error::invalid_shape("an irregular polygon needs points"));
        }
        let absolute: Vec<(f64, f64)> = points.iter().map(|p| p.absolute()).collect();
        if absolute.iter().any(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(Error::invalid_shape("polygon points must be finite"));
        }
        let (cx, cy) = centroid(&absolute);
        let frame = PolarFrame::new(cx, cy);
        Ok(Self {
            frame,
            points: points.iter().map(|p| frame.convert_from(p)).collect(),
            radian: 0.0,
            transactions: TransactionStack::new(),
            centroid: Memoized::new(),
        })
    }

    /// Inserts a point before `index`; `index == len` appends.
    pub fn insert_point(&mut self, index: usize, point: DevicePoint) -> Result<EditResult> {
        if index > self.points.len() {
            return Err(Error::PointIndexOutOfBounds {
                index,
                len: self.points.len(),
            });
        }
        self.points.insert(index, self.frame.convert_from(&point));
        Ok(EditResult::default())
    }

    fn centroid(&self) -> (f64, f64) {
        self.centroid
            .get(absolute_of(&self.points), |points| centroid(points))
    }

    fn out_of_bounds(&self, index: usize) -> Error {
        Error::PointIndexOutOfBounds {
            index,
            len: self.points.len(),
        }
    }
}

impl ContourShape for IrregularPolygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::IrregularPolygon
    }

    fn points(&self) -> Vec<DevicePoint> {
        self.points.iter().map(to_device).collect()
    }

    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn get_point(&self, index: usize) -> Result<DevicePoint> {
        self.points
            .get(index)
            .map(to_device)
            .ok_or_else(|| self.out_of_bounds(index))
    }

    fn center(&self) -> DevicePoint {
        let (x, y) = self.centroid();
        DevicePoint::new(x, y)
    }

    fn radian(&self) -> f64 {
        self.radian
    }

    fn add_vector(&mut self, v: &Vector, side: Side) -> Result<EditResult> {
        if side != Side::All {
            return Err(Error::unsupported("add_vector", "IrregularPolygon"));
        }
        self.frame.move_by_vector(v);
        let frame = self.frame;
        for p in self.points.iter_mut() {
            *p = frame.point(p.sita(), p.r());
        }
        Ok(EditResult::default())
    }

    fn rotate(&mut self, radian: f64) -> Result<EditResult> {
        let (cx, cy) = self.centroid();
        for p in self.points.iter_mut() {
            *p = p.rotate_around_absolute(cx, cy, radian);
        }
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
        let (cx, cy) = self.centroid();
        let frame = self.frame;
        for p in self.points.iter_mut() {
            let (x, y) = p.absolute();
            *p = frame.from_absolute(cx + (x - cx) * ratio, cy + (y - cy) * ratio);
        }
        Ok(EditResult::default())
    }

    fn set_point(&mut self, index: usize, point: DevicePoint) -> Result<EditResult> {
        let converted = self.frame.convert_from(&point);
        let err = self.out_of_bounds(index);
        let slot = self.points.get_mut(index).ok_or(err)?;
        *slot = converted;
        Ok(EditResult::default())
    }

    fn add_point(&mut self, point: DevicePoint) -> Result<EditResult> {
        self.points.push(self.frame.convert_from(&point));
        Ok(EditResult::default())
    }

    fn remove_point(&mut self, index: usize) -> Result<EditResult> {
        if index >= self.points.len() {
            return Err(self.out_of_bounds(index));
        }
        if self.points.len() == 1 {
            return Err(Error::invalid_shape("cannot remove the last polygon point"));
        }
        self.points.remove(index);
        Ok(EditResult::default())
    }

    fn save(&mut self) {
        self.transactions.save(IrregularPolygonState {
            frame: self.frame,
            points: self.points.clone(),
            radian: self.radian,
        });
    }

    fn restore(&mut self) -> bool {
        let Some(state) = self.transactions.restore() else {
            tracing::warn!("restore on an empty irregular polygon transaction stack");
            return false;
        };
        self.frame = state.frame;
        self.points = state.points;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> IrregularPolygon {
        IrregularPolygon::new(vec![
            DevicePoint::new(0.0, 0.0),
            DevicePoint::new(30.0, 0.0),
            DevicePoint::new(0.0, 30.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_centroid() {
        assert!(triangle().center().approx_eq(&DevicePoint::new(10.0, 10.0), 1e-3));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            IrregularPolygon::new(Vec::new()),
            Err(Error::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_point_list_edits() {
        let mut p = triangle();
        p.add_point(DevicePoint::new(-10.0, 10.0)).unwrap();
        assert_eq!(p.point_count(), 4);

        p.insert_point(1, DevicePoint::new(15.0, -5.0)).unwrap();
        assert!(p.get_point(1).unwrap().approx_eq(&DevicePoint::new(15.0, -5.0), 1e-3));
        assert_eq!(p.point_count(), 5);

        p.set_point(0, DevicePoint::new(1.0, 1.0)).unwrap();
        assert!(p.get_point(0).unwrap().approx_eq(&DevicePoint::new(1.0, 1.0), 1e-3));

        p.remove_point(4).unwrap();
        assert_eq!(p.point_count(), 4);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut p = triangle();
        assert_eq!(
            p.get_point(3).unwrap_err(),
            Error::PointIndexOutOfBounds { index: 3, len: 3 }
        );
        assert!(p.set_point(9, DevicePoint::new(0.0, 0.0)).is_err());
        assert!(p.remove_point(3).is_err());
        assert!(p.insert_point(4, DevicePoint::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_last_point_cannot_be_removed() {
        let mut p = IrregularPolygon::new(vec![DevicePoint::new(5.0, 5.0)]).unwrap();
        assert!(matches!(p.remove_point(0), Err(Error::InvalidShape { .. })));
    }

    #[test]
    fn test_center_follows_point_edits() {
        let mut p = triangle();
        p.set_point(1, DevicePoint::new(60.0, 0.0)).unwrap();
        assert!(p.center().approx_eq(&DevicePoint::new(20.0, 10.0), 1e-3));
    }

    #[test]
    fn test_translate_rotate_scale() {
        let mut p = triangle();
        p.add_vector(&Vector::new(5.0, 5.0), Side::All).unwrap();
        assert!(p.center().approx_eq(&DevicePoint::new(15.0, 15.0), 1e-3));
        assert!(p.add_vector(&Vector::new(5.0, 5.0), Side::Top).is_err());

        p.rotate(std::f64::consts::PI).unwrap();
        assert!(p.center().approx_eq(&DevicePoint::new(15.0, 15.0), 1e-3));
        assert!(p
            .get_point(0)
            .unwrap()
            .approx_eq(&DevicePoint::new(25.0, 25.0), 1e-3));

        p.scale(2.0).unwrap();
        assert!(p
            .get_point(0)
            .unwrap()
            .approx_eq(&DevicePoint::new(35.0, 35.0), 1e-3));
    }

    #[test]
    fn test_restore_point_list() {
        let mut p = triangle();
        p.save();
        p.add_point(DevicePoint::new(50.0, 50.0)).unwrap();
        p.save();
        p.remove_point(0).unwrap();
        assert!(p.pop());
        assert_eq!(p.point_count(), 3);
        assert!(p.restore());
        assert_eq!(p.point_count(), 3);
        assert!(p.get_point(0).unwrap().approx_eq(&DevicePoint::new(0.0, 0.0), 1e-3));
    }
}
