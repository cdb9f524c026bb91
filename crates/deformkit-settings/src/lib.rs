//! Deformkit Settings Crate
//!
//! Handles the interaction configuration and its JSON/TOML persistence.

pub mod config;
pub mod error;

pub use config::{ControllerKind, CursorHints, DeformerConfig, ZIndexTable};
pub use error::{Result, SettingsError};
