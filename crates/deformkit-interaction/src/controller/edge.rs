//! Edge and corner handles of a quadrilateral.

use deformkit_contour::{Contour, ContourShape, EditResult, Side};
use deformkit_core::{DevicePoint, LineSegment, Result};
use deformkit_settings::{ControllerKind, CursorHints, DeformerConfig};

use super::{mismatched, Controller, EditValue, HandleState};
use crate::event::EditorEvent;
use crate::render::{HandleRenderer, HandleShape};

const RESIZE: &str = "resize";
const RESIZE_HORIZONTAL: &str = "resize-horizontal";
const RESIZE_VERTICAL: &str = "resize-vertical";

fn cursor_for(side: Side, cursors: &CursorHints) -> &str {
    match side {
        Side::Left | Side::Right => &cursors.horizontal_resize,
        Side::Top | Side::Bottom => &cursors.vertical_resize,
        Side::LeftTop | Side::RightBottom => &cursors.diagonal_resize,
        Side::RightTop | Side::LeftBottom => &cursors.anti_diagonal_resize,
        Side::All => &cursors.r#move,
    }
}

/// Drags one side or one corner of a quadrilateral.
///
/// A corner is moved as its two edges in turn, each a separate handler, so a
/// size constraint on one axis does not freeze the other.
#[derive(Debug, Clone)]
pub struct EdgeController {
    state: HandleState,
    side: Side,
    edge_tolerance: f64,
}

impl EdgeController {
    pub fn new(side: Side, config: &DeformerConfig) -> Self {
        let kind = if side.is_corner() {
            ControllerKind::Corner
        } else {
            ControllerKind::Edge
        };
        Self {
            state: HandleState::new(kind, cursor_for(side, &config.cursors), config),
            side,
            edge_tolerance: config.edge_tolerance,
        }
    }

    /// Segment between the two corners of an edge.
    fn segment(&self, contour: &Contour) -> Option<LineSegment> {
        if !self.side.is_edge() {
            return None;
        }
        let corners = self.side.corners();
        let start = contour.get_point_by_side(*corners.first()?).ok()?;
        let end = contour.get_point_by_side(*corners.last()?).ok()?;
        Some(LineSegment::new(start, end))
    }

    fn target_side(&self, handler: &str) -> Side {
        match (handler, self.side.edges()) {
            (RESIZE_HORIZONTAL, Some((horizontal, _))) => horizontal,
            (RESIZE_VERTICAL, Some((_, vertical))) => vertical,
            _ => self.side,
        }
    }
}

impl Controller for EdgeController {
    fn id(&self) -> &str {
        &self.state.id
    }

    fn kind(&self) -> ControllerKind {
        if self.side.is_corner() {
            ControllerKind::Corner
        } else {
            ControllerKind::Edge
        }
    }

    fn z_index(&self) -> i32 {
        self.state.z_index
    }

    fn cursor(&self) -> &str {
        &self.state.cursor
    }

    fn anchor(&self, contour: &Contour) -> DevicePoint {
        contour
            .get_point_by_side(self.side)
            .unwrap_or_else(|_| contour.center())
    }

    fn hit_test(&mut self, contour: &Contour, pointer: &DevicePoint) -> bool {
        let Ok(anchor) = contour.get_point_by_side(self.side) else {
            self.state.hovered = false;
            return false;
        };
        if self.state.hit_anchor(&anchor, pointer) {
            return true;
        }
        self.state.hovered = self
            .segment(contour)
            .is_some_and(|segment| segment.distance_to_point(pointer) <= self.edge_tolerance);
        self.state.hovered
    }

    fn is_hovered(&self) -> bool {
        self.state.hovered
    }

    fn set_hovered(&mut self, hovered: bool) {
        self.state.hovered = hovered;
    }

    fn handler_names(&self) -> &'static [&'static str] {
        if self.side.is_corner() {
            &[RESIZE_HORIZONTAL, RESIZE_VERTICAL]
        } else {
            &[RESIZE]
        }
    }

    fn propose(&self, _handler: &str, _contour: &Contour, event: &EditorEvent) -> EditValue {
        EditValue::Offset(event.movement.clone())
    }

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue) -> Result<EditResult> {
        match value {
            EditValue::Offset(v) => contour.add_vector(v, self.target_side(handler)),
            _ => Err(mismatched(handler)),
        }
    }

    fn side(&self) -> Side {
        self.side
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer) {
        let Ok(anchor) = contour.get_point_by_side(self.side) else {
            return;
        };
        let shape = if self.side.is_corner() {
            HandleShape::Square
        } else {
            HandleShape::Diamond
        };
        renderer.handle(&anchor, shape, self.state.radius, self.state.hovered);
    }
}
