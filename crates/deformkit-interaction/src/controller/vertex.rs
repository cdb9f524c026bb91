//! Single point handle.

use deformkit_contour::{Contour, ContourShape, EditResult};
use deformkit_core::{DevicePoint, FramePoint, Result};
use deformkit_settings::{ControllerKind, DeformerConfig};

use super::{mismatched, Controller, EditValue, HandleState};
use crate::event::EditorEvent;
use crate::render::{HandleRenderer, HandleShape};

const DRAG: &str = "drag";

/// Drags the point at a fixed index.
#[derive(Debug, Clone)]
pub struct VertexController {
    state: HandleState,
    index: usize,
}

impl VertexController {
    pub fn new(index: usize, config: &DeformerConfig) -> Self {
        Self {
            state: HandleState::new(ControllerKind::Vertex, &config.cursors.vertex, config),
            index,
        }
    }
}

impl Controller for VertexController {
    fn id(&self) -> &str {
        &self.state.id
    }

    fn kind(&self) -> ControllerKind {
        ControllerKind::Vertex
    }

    fn z_index(&self) -> i32 {
        self.state.z_index
    }

    fn cursor(&self) -> &str {
        &self.state.cursor
    }

    fn anchor(&self, contour: &Contour) -> DevicePoint {
        contour
            .get_point(self.index)
            .unwrap_or_else(|_| contour.center())
    }

    fn hit_test(&mut self, contour: &Contour, pointer: &DevicePoint) -> bool {
        match contour.get_point(self.index) {
            Ok(point) => self.state.hit_anchor(&point, pointer),
            Err(_) => {
                self.state.hovered = false;
                false
            }
        }
    }

    fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.state.hovered = hovered;
    }

    fn handler_names(&self) -> &'static [&'static str] {
        &[DRAG]
    }

    fn propose(&self, _handler: &str, contour: &Contour, event: &EditorEvent) -> EditValue {
        EditValue::Position(self.anchor(contour).add_vector(&event.movement))
    }

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue) -> Result<EditResult> {
        match value {
            EditValue::Position(point) => contour.set_point(self.index, *point),
            _ => Err(mismatched(handler)),
        }
    }

    fn point_index(&self) -> Option<usize> {
        Some(self.index)
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer) {
        if let Ok(point) = contour.get_point(self.index) {
            renderer.handle(&point, HandleShape::Circle, self.state.radius, self.state.hovered);
        }
    }
}
