//! Radius handle of a regular polygon.

use deformkit_contour::{Contour, ContourShape, EditResult};
use deformkit_core::{DevicePoint, FramePoint, Result};
use deformkit_settings::{ControllerKind, DeformerConfig};

use super::{mismatched, Controller, EditValue, HandleState};
use crate::event::EditorEvent;
use crate::render::{HandleRenderer, HandleShape};

const EXPAND: &str = "expand";

/// Grows or shrinks the contour by dragging its first vertex radially.
#[derive(Debug, Clone)]
pub struct ExpansionController {
    state: HandleState,
}

impl ExpansionController {
    pub fn new(config: &DeformerConfig) -> Self {
        Self {
            state: HandleState::new(ControllerKind::Expansion, &config.cursors.expansion, config),
        }
    }
}

impl Controller for ExpansionController {
    fn id(&self) -> &str {
        &self.state.id
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Expansion
    }

    fn z_index(&self) -> i32 {
        self.state.z_index
    }

    fn cursor(&self) -> &str {
        &self.state.cursor
    }

    fn anchor(&self, contour: &Contour) -> DevicePoint {
        contour.get_point(0).unwrap_or_else(|_| contour.center())
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
        &[EXPAND]
    }

    /// Movement component along the center-to-handle direction.
    fn propose(&self, _handler: &str, contour: &Contour, event: &EditorEvent) -> EditValue {
        let radial = contour.center().vector_to(&self.anchor(contour));
        if radial.is_zero() {
            return EditValue::Radius(event.movement.length());
        }
        EditValue::Radius(event.movement.dot(&radial.normalize()))
    }

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue) -> Result<EditResult> {
        match value {
            EditValue::Radius(delta) => contour.expansion(*delta),
            _ => Err(mismatched(handler)),
        }
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer) {
        let anchor = self.anchor(contour);
        renderer.guide(&contour.center(), &anchor);
        renderer.handle(&anchor, HandleShape::Circle, self.state.radius, self.state.hovered);
    }
}
