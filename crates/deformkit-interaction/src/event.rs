//! Input and output events of the interaction engine.
//!
//! The host translates its pointer/gesture stream into [`EditorEvent`]s and
//! receives [`DeformerEvent`]s back through listeners.

use bitflags::bitflags;
use deformkit_core::{DevicePoint, Vector};
use std::fmt;

bitflags! {
    /// Gesture direction flags, matching the usual gesture recognizer values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GestureDirection: u8 {
        const NONE       = 0b0000_0001;
        const LEFT       = 0b0000_0010;
        const RIGHT      = 0b0000_0100;
        const UP         = 0b0000_1000;
        const DOWN       = 0b0001_0000;
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const VERTICAL   = Self::UP.bits() | Self::DOWN.bits();
        const ALL        = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl GestureDirection {
    /// Dominant direction of a device movement.
    pub fn from_movement(movement: &Vector) -> Self {
        let (x, y) = (movement.x(), movement.y());
        if x == 0.0 && y == 0.0 {
            Self::NONE
        } else if x.abs() >= y.abs() {
            if x < 0.0 {
                Self::LEFT
            } else {
                Self::RIGHT
            }
        } else if y < 0.0 {
            Self::UP
        } else {
            Self::DOWN
        }
    }
}

impl Default for GestureDirection {
    fn default() -> Self {
        Self::NONE
    }
}

/// One pointer position seen from every host coordinate space.
///
/// The kernel reads `offset`, the position relative to the surface the
/// contour is drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiFrameSnapshot {
    pub client: DevicePoint,
    pub page: DevicePoint,
    pub screen: DevicePoint,
    pub offset: DevicePoint,
}

impl MultiFrameSnapshot {
    /// Snapshot for a host whose coordinate spaces coincide.
    pub fn from_offset(offset: DevicePoint) -> Self {
        Self {
            client: offset,
            page: offset,
            screen: offset,
            offset,
        }
    }
}

/// Normalized gesture tick.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorEvent {
    /// Pointer displacement since the gesture started.
    pub movement: Vector,
    pub pointer: MultiFrameSnapshot,
    pub direction: GestureDirection,
}

impl EditorEvent {
    pub fn new(movement: Vector, pointer: MultiFrameSnapshot, direction: GestureDirection) -> Self {
        Self {
            movement,
            pointer,
            direction,
        }
    }

    /// Event at `pointer` (surface coordinates), direction derived from the movement.
    pub fn at(pointer: DevicePoint, movement: Vector) -> Self {
        let direction = GestureDirection::from_movement(&movement);
        Self::new(movement, MultiFrameSnapshot::from_offset(pointer), direction)
    }

    /// Pointer position on the surface.
    pub fn position(&self) -> DevicePoint {
        self.pointer.offset
    }
}

/// Notifications produced for the host to redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeformerEvent {
    GestureStarted,
    /// Fired after every step in which an edit was accepted or adjusted.
    GeometryUpdated,
    GestureEnded,
}

impl fmt::Display for DeformerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeformerEvent::GestureStarted => write!(f, "gesture started"),
            DeformerEvent::GeometryUpdated => write!(f, "geometry updated"),
            DeformerEvent::GestureEnded => write!(f, "gesture ended"),
        }
    }
}
