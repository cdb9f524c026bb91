//! Controllers: interactive handles bound to a contour.
//!
//! A controller turns an editor event into one or more named edits. Each
//! handler is proposed and applied separately so a constraint can accept the
//! horizontal part of a drag while rejecting the vertical one:
//!
//! ```text
//! propose(handler, contour, event) -> EditValue    pure, reads the contour
//! apply(handler, contour, value)   -> EditResult   mutates the contour
//! ```
//!
//! The engine replays the last accepted value of a handler through `apply`
//! when a later value is rejected, so `apply` must be deterministic.

mod edge;
mod expansion;
mod move_controller;
mod rotate;
mod vertex;

pub use edge::EdgeController;
pub use expansion::ExpansionController;
pub use move_controller::MoveController;
pub use rotate::RotateController;
pub use vertex::VertexController;

use deformkit_contour::{Contour, ContourShape, EditResult, ShapeKind, Side};
use deformkit_core::{DevicePoint, FramePoint, Result, Vector};
use deformkit_settings::{ControllerKind, DeformerConfig};
use uuid::Uuid;

use crate::event::EditorEvent;
use crate::limitator::LimitatorKind;
use crate::render::HandleRenderer;

/// Value one handler proposes for one gesture step.
#[derive(Debug, Clone, PartialEq)]
pub enum EditValue {
    /// Device translation.
    Offset(Vector),
    /// Rotation in radians, counter-clockwise on screen.
    Angle(f64),
    /// Radius delta.
    Radius(f64),
    /// New absolute position of a point.
    Position(DevicePoint),
}

/// Interactive handle.
pub trait Controller {
    /// Unique id assigned at construction.
    fn id(&self) -> &str;

    fn kind(&self) -> ControllerKind;

    /// Stacking order; higher values are hit-tested first.
    fn z_index(&self) -> i32;

    /// Cursor class hint shown while hovered.
    fn cursor(&self) -> &str;

    /// Where the handle glyph sits.
    fn anchor(&self, contour: &Contour) -> DevicePoint;

    /// Tests a pointer against the handle and updates the hover flag.
    fn hit_test(&mut self, contour: &Contour, pointer: &DevicePoint) -> bool;

    fn is_hovered(&self) -> bool;

    fn set_hovered(&mut self, hovered: bool);

    /// Called once every controller has been hit-tested.
    fn after_hit_test(&mut self, _hovered: Option<&str>) {}

    /// Names of the independently undoable edits this controller performs.
    fn handler_names(&self) -> &'static [&'static str];

    fn propose(&self, handler: &str, contour: &Contour, event: &EditorEvent) -> EditValue;

    fn apply(&self, handler: &str, contour: &mut Contour, value: &EditValue)
        -> Result<EditResult>;

    /// True when the handler enforces its limits itself and bypasses constraints.
    fn handles_limitation_itself(&self, _handler: &str) -> bool {
        false
    }

    /// Whether constraints of this kind take part in this controller's gestures.
    fn supports_limitator(&self, _kind: LimitatorKind) -> bool {
        true
    }

    /// Side of the contour the controller drags. `Side::All` for whole-contour edits.
    fn side(&self) -> Side {
        Side::All
    }

    /// Point index for controllers bound to a single point.
    fn point_index(&self) -> Option<usize> {
        None
    }

    fn render(&self, contour: &Contour, renderer: &mut dyn HandleRenderer);
}

/// State every controller carries.
#[derive(Debug, Clone)]
pub(crate) struct HandleState {
    pub id: String,
    pub hovered: bool,
    pub radius: f64,
    pub z_index: i32,
    pub cursor: String,
}

impl HandleState {
    pub fn new(kind: ControllerKind, cursor: &str, config: &DeformerConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            hovered: false,
            radius: config.effective_handle_radius(),
            z_index: config.z_index.get(kind),
            cursor: cursor.to_string(),
        }
    }

    /// Hit test against a round handle at `anchor`.
    pub fn hit_anchor(&mut self, anchor: &DevicePoint, pointer: &DevicePoint) -> bool {
        self.hovered = anchor.distance_to(pointer) <= self.radius;
        self.hovered
    }
}

/// Rejects a value of the wrong variant for a handler.
pub(crate) fn mismatched(handler: &str) -> deformkit_core::Error {
    deformkit_core::Error::invalid_shape(format!("unexpected edit value for handler '{}'", handler))
}

/// The standard controller set for a contour.
///
/// Every shape gets move and rotate handles. Quadrilaterals add four edge and
/// four corner handles, regular polygons an expansion handle and irregular
/// polygons one vertex handle per point.
pub fn default_controllers(contour: &Contour, config: &DeformerConfig) -> Vec<Box<dyn Controller>> {
    let mut controllers: Vec<Box<dyn Controller>> = vec![
        Box::new(MoveController::new(config)),
        Box::new(RotateController::new(config)),
    ];
    match contour.kind() {
        ShapeKind::Quadrilateral => {
            for side in Side::SIDES {
                controllers.push(Box::new(EdgeController::new(side, config)));
            }
        }
        ShapeKind::RegularPolygon => {
            controllers.push(Box::new(ExpansionController::new(config)));
        }
        ShapeKind::IrregularPolygon => {
            for index in 0..contour.point_count() {
                controllers.push(Box::new(VertexController::new(index, config)));
            }
        }
    }
    controllers
}
