//! Whole-contour translation.

use deformkit_contour::{Contour, ContourShape, EditResult, Side};
use deformkit_core::{DevicePoint, Result};
use deformkit_settings::{ControllerKind, DeformerConfig};

use super::{mismatched, Controller, EditValue, HandleState};
use crate::event::EditorEvent;
use crate::render::HandleRenderer;

const MOVE_X: &str = "move-x";
const MOVE_Y: &str = "move-y";

/// Drags the contour by grabbing anywhere inside it.
///
/// The two axes are separate handlers, so a box constraint that blocks one
/// axis still lets the contour slide along the other.
#[derive(Debug, Clone)]
pub struct MoveController {
    state: HandleState,
}

impl MoveController {
    pub fn new(config: &DeformerConfig) -> Self {
        Self {
            state: HandleState::new(ControllerKind::Move, &config.cursors.r#move, config),
        }
    }
}

impl Controller for MoveController {
    fn id(&self) -> &str {
        &self.state.id
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Move
    }

    fn z_index(&self) -> i32 {
        self.state.z_index
    }

    fn cursor(&self) -> &str {
        &self.state.cursor
    }

    fn anchor(&self, contour: &Contour) -> DevicePoint {
        contour.center()
    }

    fn hit_test(&mut self, contour: &Contour, pointer: &DevicePoint) -> bool {
        self.state.hovered = contour.contains_point(pointer);
        self.state.hovered
    }

    fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.state.hovered = hovered;
    }

    fn handler_names(&self) -> &'static [&'static str] {
        &[MOVE_X, MOVE_Y]
    }

    fn propose(&self, handler: &str, _contour: &Contour, event: &EditorEvent) -> EditValue {
        if handler == MOVE_Y {
            EditValue::Offset(event.movement.vertical())
        } else {
            EditValue::Offset(event.movement.horizontal())
        }
    }

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue) -> Result<EditResult> {
        match value {
            EditValue::Offset(v) => contour.add_vector(v, Side::All),
            _ => Err(mismatched(handler)),
        }
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer) {
        renderer.outline(&contour.points());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deformkit_contour::Quadrilateral;
    use deformkit_core::{FramePoint, Vector};

    #[test]
    fn test_hit_inside_contour() {
        let contour = Contour::from(Quadrilateral::from_rect(0.0, 0.0, 100.0, 50.0));
        let mut controller = MoveController::new(&DeformerConfig::default());
        assert!(controller.hit_test(&contour, &DevicePoint::new(50.0, 25.0)));
        assert!(controller.is_hovered());
        assert!(!controller.hit_test(&contour, &DevicePoint::new(150.0, 25.0)));
        assert!(!controller.is_hovered());
    }

    #[test]
    fn test_axes_are_split() {
        let mut contour = Contour::from(Quadrilateral::from_rect(0.0, 0.0, 100.0, 50.0));
        let controller = MoveController::new(&DeformerConfig::default());
        let event = EditorEvent::at(DevicePoint::new(10.0, 10.0), Vector::new(7.0, -3.0));

        let x = controller.propose(MOVE_X, &contour, &event);
        assert_eq!(x, EditValue::Offset(Vector::new(7.0, 0.0)));
        let y = controller.propose(MOVE_Y, &contour, &event);
        assert_eq!(y, EditValue::Offset(Vector::new(0.0, -3.0)));

        controller.apply(MOVE_X, &mut contour, &x).unwrap();
        controller.apply(MOVE_Y, &mut contour, &y).unwrap();
        let center = contour.center();
        assert!(center.approx_eq(&DevicePoint::new(57.0, 22.0), 1e-3));
    }

    #[test]
    fn test_wrong_value_is_rejected() {
        let mut contour = Contour::from(Quadrilateral::from_rect(0.0, 0.0, 10.0, 10.0));
        let controller = MoveController::new(&DeformerConfig::default());
        assert!(controller
            .apply(MOVE_X, &mut contour, &EditValue::Angle(1.0))
            .is_err());
    }
}
