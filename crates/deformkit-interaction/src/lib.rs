//! # Deformkit Interaction
//!
//! Gesture handling on top of the contour model:
//! - **Events**: editor input ticks and the notifications sent back to hosts
//! - **Controllers**: move, rotate, edge/corner, vertex and expansion handles
//! - **Limitators**: box, size and side-swap constraints on controller edits
//! - **Engine**: hover tracking and the transactional gesture protocol
//! - **Render**: handle drawing contract and a `lyon` path collector
//!
//! The engine is single-threaded and synchronous. Every input call runs to
//! completion before the next one is processed.

pub mod controller;
pub mod engine;
pub mod event;
pub mod limitator;
pub mod listener;
pub mod render;

pub use controller::{
    default_controllers, Controller, EdgeController, EditValue, ExpansionController,
    MoveController, RotateController, VertexController,
};
pub use deformkit_settings::{ControllerKind, DeformerConfig};
pub use engine::Interaction;
pub use event::{DeformerEvent, EditorEvent, GestureDirection, MultiFrameSnapshot};
pub use limitator::{
    AvoidSwitchSideLimitator, BoxLimitator, BoxSource, Limitator, LimitatorKind, SizeLimitator,
};
pub use listener::{DeformerListener, ListenerHandle};
pub use render::{HandleRenderer, HandleShape, PathRenderer, RenderedHandle};
