//! Width and height limits.

use deformkit_contour::{Contour, ContourShape, EditResult, Side};
use deformkit_core::{Interval, Result, ACCURACY};
use deformkit_settings::ControllerKind;
use tracing::trace;

use super::{Limitator, LimitatorKind};
use crate::controller::Controller;
use crate::event::EditorEvent;

/// Clamped targets land this far inside a violated limit.
const INSET: f64 = 2.0 * ACCURACY;

/// Keeps the contour's width and height inside intervals.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeLimitator {
    pub width: Interval,
    pub height: Interval,
}

impl SizeLimitator {
    pub fn new(width: Interval, height: Interval) -> Self {
        Self { width, height }
    }

    /// Closed `[min, max]` limits on both axes.
    pub fn between(min_width: f64, max_width: f64, min_height: f64, max_height: f64) -> Self {
        Self::new(
            Interval::closed(min_width, max_width),
            Interval::closed(min_height, max_height),
        )
    }

    /// Change that brings `value` back inside `interval`; zero when already inside.
    fn correction(interval: &Interval, value: f64) -> f64 {
        if interval.contains(value) {
            return 0.0;
        }
        let target = interval.clamp(value);
        if value < target {
            target + INSET - value
        } else {
            target - INSET - value
        }
    }

    /// Moves `edge` along its normal so the dimension it controls grows by `delta`.
    fn push_edge(contour: &mut Contour, edge: Side, delta: f64) -> Result<EditResult> {
        if delta == 0.0 {
            return Ok(EditResult::default());
        }
        match contour.side_normal(edge) {
            Some(normal) => contour.add_vector(&normal.multiply(delta), edge),
            None => Ok(EditResult::default()),
        }
    }

    fn resize(&self, contour: &mut Contour, side: Side) -> Result<EditResult> {
        let dw = Self::correction(&self.width, contour.width());
        let dh = Self::correction(&self.height, contour.height());
        match side.edges() {
            Some((horizontal, vertical)) => {
                let first = Self::push_edge(contour, horizontal, dw)?;
                let second = Self::push_edge(contour, vertical, dh)?;
                Ok(first.merge(second))
            }
            None if side.is_horizontal_edge() => Self::push_edge(contour, side, dw),
            None if side.is_vertical_edge() => Self::push_edge(contour, side, dh),
            None => Ok(EditResult::default()),
        }
    }

    /// Uniform scale toward the most violated limit.
    fn rescale(&self, contour: &mut Contour) -> Result<EditResult> {
        let (width, height) = (contour.width(), contour.height());
        let ratio = |interval: &Interval, value: f64| {
            let delta = Self::correction(interval, value);
            if delta == 0.0 || value <= 0.0 {
                1.0
            } else {
                (value + delta) / value
            }
        };
        let rw = ratio(&self.width, width);
        let rh = ratio(&self.height, height);
        let chosen = if (rw - 1.0).abs() >= (rh - 1.0).abs() { rw } else { rh };
        contour.scale(chosen)
    }
}

impl Limitator for SizeLimitator {
    fn kind(&self) -> LimitatorKind {
        LimitatorKind::Size
    }

    fn handle_it(&self, controller: &dyn Controller) -> bool {
        matches!(
            controller.kind(),
            ControllerKind::Edge
                | ControllerKind::Corner
                | ControllerKind::Vertex
                | ControllerKind::Expansion
        )
    }

    fn accept(&self, contour: &Contour, _result: &EditResult) -> bool {
        self.width.contains(contour.width()) && self.height.contains(contour.height())
    }

    /// Pulls the dragged edges back to the violated limit. Swapped edits are
    /// never adjusted.
    fn adjust(
        &self,
        contour: &mut Contour,
        _event: &EditorEvent,
        controller: &dyn Controller,
        result: &EditResult,
    ) -> bool {
        if result.switched_side {
            return false;
        }
        let outcome = match controller.kind() {
            ControllerKind::Edge | ControllerKind::Corner => self.resize(contour, controller.side()),
            ControllerKind::Expansion => self.rescale(contour),
            _ => return false,
        };
        match outcome {
            Ok(adjusted) if !adjusted.switched_side => self.accept(contour, &adjusted),
            Ok(_) => false,
            Err(err) => {
                trace!(error = %err, "size adjustment failed");
                false
            }
        }
    }
}
