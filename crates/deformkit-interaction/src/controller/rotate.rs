//! Rotation handle.

use deformkit_contour::{Contour, ContourShape, EditResult, Side};
use deformkit_core::{DevicePoint, FramePoint, Result, Vector};
use deformkit_settings::{ControllerKind, DeformerConfig};

use super::{mismatched, Controller, EditValue, HandleState};
use crate::event::EditorEvent;
use crate::render::{HandleRenderer, HandleShape};

const ROTATE: &str = "rotate";

/// Handle floating above the top edge that turns the contour around its center.
#[derive(Debug, Clone)]
pub struct RotateController {
    state: HandleState,
    distance: f64,
}

impl RotateController {
    pub fn new(config: &DeformerConfig) -> Self {
        Self {
            state: HandleState::new(ControllerKind::Rotate, &config.cursors.rotate, config),
            distance: config.rotation_handle_distance,
        }
    }

    /// Point on the contour the handle stem starts from, and the stem direction.
    fn stem(contour: &Contour) -> (DevicePoint, Vector) {
        if let (Some(normal), Ok(top)) = (
            contour.side_normal(Side::Top),
            contour.get_point_by_side(Side::Top),
        ) {
            return (top, normal);
        }
        let boundary = contour.boundary();
        let top = DevicePoint::new((boundary.left + boundary.right) / 2.0, boundary.top);
        (top, Vector::new(0.0, -1.0))
    }
}

impl Controller for RotateController {
    fn id(&self) -> &str {
        &self.state.id
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Rotate
    }

    fn z_index(&self) -> i32 {
        self.state.z_index
    }

    fn cursor(&self) -> &str {
        &self.state.cursor
    }

    fn anchor(&self, contour: &Contour) -> DevicePoint {
        let (top, direction) = Self::stem(contour);
        top.add_vector(&direction.multiply(self.distance))
    }

    fn hit_test(&mut self, contour: &Contour, pointer: &DevicePoint) -> bool {
        let anchor = self.anchor(contour);
        self.state.hit_anchor(&anchor, pointer)
    }

    fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.state.hovered = hovered;
    }

    fn handler_names(&self) -> &'static [&'static str] {
        &[ROTATE]
    }

    /// Angle swept around the center between the gesture start and the pointer.
    fn propose(&self, _handler: &str, contour: &Contour, event: &EditorEvent) -> EditValue {
        let center = contour.center();
        let pointer = event.position();
        let start = pointer.add_vector(&event.movement.negate());
        let from = center.vector_to(&start);
        let to = center.vector_to(&pointer);
        if from.is_zero() || to.is_zero() {
            return EditValue::Angle(0.0);
        }
        // Screen space grows y downward; angles are measured counter-clockwise.
        EditValue::Angle(from.flip_y().angle_between(&to.flip_y()))
    }

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue) -> Result<EditResult> {
        match value {
            EditValue::Angle(radian) => contour.rotate(*radian),
            _ => Err(mismatched(handler)),
        }
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer) {
        let (top, _) = Self::stem(contour);
        let anchor = self.anchor(contour);
        renderer.guide(&top, &anchor);
        renderer.handle(&anchor, HandleShape::Circle, self.state.radius, self.state.hovered);
    }
}
