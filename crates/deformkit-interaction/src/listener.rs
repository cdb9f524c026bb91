//! Deformer listener interface
//!
//! Defines the listener trait hosts implement to redraw after gestures.

use deformkit_contour::Contour;

use crate::event::DeformerEvent;

/// Handle for a registered deformer listener.
///
/// Uniquely identifies a listener subscription. Can be used to unsubscribe
/// from deformer events.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub String);

/// Listener trait for deformer events
///
/// Every callback receives the contour in its current state.
pub trait DeformerListener {
    /// Called when a gesture starts on a hovered controller
    fn on_gesture_started(&self, _contour: &Contour) {}

    /// Called after an edit was accepted or adjusted
    fn on_geometry_updated(&self, _contour: &Contour) {}

    /// Called when a gesture ends or is cancelled
    fn on_gesture_ended(&self, _contour: &Contour) {}

    /// Dispatches an event to the matching callback.
    fn on_event(&self, event: DeformerEvent, contour: &Contour) {
        match event {
            DeformerEvent::GestureStarted => self.on_gesture_started(contour),
            DeformerEvent::GeometryUpdated => self.on_geometry_updated(contour),
            DeformerEvent::GestureEnded => self.on_gesture_ended(contour),
        }
    }
}
