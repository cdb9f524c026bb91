//! Bounding box containment.

use std::fmt;

use deformkit_contour::{Contour, ContourShape, EditResult, Side};
use deformkit_core::{Boundary, DevicePoint, FramePoint, ACCURACY};
use deformkit_settings::ControllerKind;
use tracing::trace;

use super::{Limitator, LimitatorKind};
use crate::controller::Controller;
use crate::event::EditorEvent;

/// Where the containing box comes from.
pub enum BoxSource {
    /// A fixed box.
    Static(Boundary),
    /// Re-read on every check, e.g. from the host's layout of a reference element.
    Provider(Box<dyn Fn() -> Boundary>),
}

impl fmt::Debug for BoxSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxSource::Static(boundary) => f.debug_tuple("Static").field(boundary).finish(),
            BoxSource::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// Keeps the contour's boundary inside a box.
#[derive(Debug)]
pub struct BoxLimitator {
    source: BoxSource,
    padding: f64,
}

impl BoxLimitator {
    pub fn new(boundary: Boundary) -> Self {
        Self {
            source: BoxSource::Static(boundary),
            padding: 0.0,
        }
    }

    pub fn with_provider(provider: impl Fn() -> Boundary + 'static) -> Self {
        Self {
            source: BoxSource::Provider(Box::new(provider)),
            padding: 0.0,
        }
    }

    /// Keeps the contour `padding` away from the box sides.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// The effective box, in the device origin frame.
    pub fn bounds(&self) -> Boundary {
        let boundary = match &self.source {
            BoxSource::Static(boundary) => *boundary,
            BoxSource::Provider(provider) => provider(),
        };
        boundary.to_absolute().expand(-self.padding)
    }

    fn clamp_point(bounds: &Boundary, point: &DevicePoint) -> DevicePoint {
        let (x, y) = point.absolute();
        DevicePoint::new(
            x.clamp(bounds.left, bounds.right.max(bounds.left)),
            y.clamp(bounds.top, bounds.bottom.max(bounds.top)),
        )
    }
}

impl Limitator for BoxLimitator {
    fn kind(&self) -> LimitatorKind {
        LimitatorKind::Box
    }

    fn handle_it(&self, _controller: &dyn Controller) -> bool {
        true
    }

    fn accept(&self, contour: &Contour, _result: &EditResult) -> bool {
        self.bounds().expand(ACCURACY).contains(&contour.boundary())
    }

    /// Moves, resizes or clamps back into the box depending on the controller.
    /// Rotation and expansion are left to the engine's rollback.
    fn adjust(
        &self,
        contour: &mut Contour,
        _event: &EditorEvent,
        controller: &dyn Controller,
        result: &EditResult,
    ) -> bool {
        let bounds = self.bounds();
        let outcome = match controller.kind() {
            ControllerKind::Move => {
                let correction = bounds.correction_for(&contour.boundary());
                contour.add_vector(&correction, Side::All)
            }
            ControllerKind::Edge | ControllerKind::Corner => {
                let correction = bounds.correction_for(&contour.boundary());
                contour.add_vector(&correction, controller.side())
            }
            ControllerKind::Vertex => {
                let Some(index) = controller.point_index() else {
                    return false;
                };
                match contour.get_point(index) {
                    Ok(point) => contour.set_point(index, Self::clamp_point(&bounds, &point)),
                    Err(err) => Err(err),
                }
            }
            ControllerKind::Rotate | ControllerKind::Expansion => return false,
        };
        if let Err(err) = outcome {
            trace!(error = %err, "box adjustment failed");
            return false;
        }
        self.accept(contour, result)
    }
}
