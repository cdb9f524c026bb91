//! Limitators: pluggable constraints on controller edits.
//!
//! A limitator governs the controllers it claims through
//! [`Limitator::handle_it`]. For those controllers the engine consults it at
//! three points of every gesture step:
//!
//! 1. [`Limitator::continue_handle`] before anything is edited. A `false`
//!    skips the whole step.
//! 2. [`Limitator::accept`] after a handler mutated the contour.
//! 3. [`Limitator::adjust`] when an edit was not accepted. The limitator may
//!    move the contour into the nearest acceptable state and report success.
//!
//! Rejections are ordinary outcomes, never errors.

mod avoid_switch_side;
mod box_limitator;
mod size;

pub use avoid_switch_side::AvoidSwitchSideLimitator;
pub use box_limitator::{BoxLimitator, BoxSource};
pub use size::SizeLimitator;

use deformkit_contour::{Contour, EditResult};
use std::fmt;

use crate::controller::Controller;
use crate::event::EditorEvent;

/// Limitator kinds a controller can opt in or out of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LimitatorKind {
    /// Keeps the contour inside a box.
    Box,
    /// Keeps width and height inside intervals.
    Size,
    /// Forbids side swaps.
    AvoidSwitchSide,
}

impl fmt::Display for LimitatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Box => write!(f, "box"),
            Self::Size => write!(f, "size"),
            Self::AvoidSwitchSide => write!(f, "avoid-switch-side"),
        }
    }
}

/// Constraint on the edits of the controllers it handles.
pub trait Limitator {
    fn kind(&self) -> LimitatorKind;

    /// True when this limitator governs `controller`.
    fn handle_it(&self, controller: &dyn Controller) -> bool;

    /// Gate evaluated before a step edits anything.
    fn continue_handle(&self, _event: &EditorEvent, _contour: &Contour) -> bool {
        true
    }

    /// Judges the contour after a speculative edit.
    fn accept(&self, contour: &Contour, result: &EditResult) -> bool;

    /// Moves a rejected contour into an acceptable state in place.
    ///
    /// Returns true when the contour is acceptable afterwards.
    fn adjust(
        &self,
        _contour: &mut Contour,
        _event: &EditorEvent,
        _controller: &dyn Controller,
        _result: &EditResult,
    ) -> bool {
        false
    }
}
