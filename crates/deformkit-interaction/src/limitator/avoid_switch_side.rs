//! Side swap veto.

use deformkit_contour::{Contour, EditResult};
use deformkit_settings::ControllerKind;

use super::{Limitator, LimitatorKind};
use crate::controller::Controller;

/// Rejects edge and corner drags that pull a side through its opposite.
///
/// Never adjusts: the engine rolls the edit back to the last accepted value,
/// leaving the dragged side pinned at its opposite.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AvoidSwitchSideLimitator;

impl AvoidSwitchSideLimitator {
    pub fn new() -> Self {
        Self
    }
}

impl Limitator for AvoidSwitchSideLimitator {
    fn kind(&self) -> LimitatorKind {
        LimitatorKind::AvoidSwitchSide
    }

    fn handle_it(&self, controller: &dyn Controller) -> bool {
        matches!(
            controller.kind(),
            ControllerKind::Edge | ControllerKind::Corner
        )
    }

    fn accept(&self, _contour: &Contour, result: &EditResult) -> bool {
        !result.switched_side
    }
}
