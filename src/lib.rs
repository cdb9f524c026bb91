//! # Deformkit
//!
//! An interactive shape-deformation kernel: the geometry and gesture logic
//! behind drag handles that move, resize, rotate and reshape contours on a
//! 2D canvas, with pluggable constraints on every edit.
//!
//! ## Architecture
//!
//! Deformkit is organized as a workspace with multiple crates:
//!
//! 1. **deformkit-core** - Vector algebra, coordinate frames, primitives, errors
//! 2. **deformkit-contour** - Side algebra, transaction stack, editable shapes
//! 3. **deformkit-settings** - Interaction configuration with JSON/TOML storage
//! 4. **deformkit-interaction** - Controllers, limitators and the gesture engine
//! 5. **deformkit** - This facade, re-exporting the crates above
//!
//! ## Example
//!
//! ```
//! use deformkit::{
//!     DeformerConfig, DevicePoint, EditorEvent, Interaction, MultiFrameSnapshot,
//!     Quadrilateral, SizeLimitator, Vector,
//! };
//!
//! let contour = Quadrilateral::from_rect(0.0, 0.0, 200.0, 200.0);
//! let mut interaction =
//!     Interaction::with_default_controllers(contour.into(), DeformerConfig::default());
//! interaction.attach().unwrap();
//! interaction.add_limitator(Box::new(SizeLimitator::between(50.0, 500.0, 50.0, 500.0)));
//!
//! // Hover the right edge and drag it 100 to the right.
//! let grab = DevicePoint::new(200.0, 100.0);
//! interaction.pointer_move(&[MultiFrameSnapshot::from_offset(grab)]);
//! interaction.pan_start(&EditorEvent::at(grab, Vector::zero())).unwrap();
//! interaction
//!     .pan_end(&EditorEvent::at(DevicePoint::new(300.0, 100.0), Vector::new(100.0, 0.0)))
//!     .unwrap();
//! ```

pub use deformkit_contour::{
    Contour, ContourShape, CornerIndex, EditResult, IrregularPolygon, Quadrilateral,
    RegularPolygon, ShapeKind, Side, TransactionStack,
};
pub use deformkit_core::{
    approx_eq, fix_accuracy, normalize_radian, Bound, Boundary, CartesianFrame, CartesianPoint,
    CoordinateFrame, DeviceFrame, DevicePoint, Error, FramePoint, Interval, LineSegment,
    LinearEquation, Memoized, PolarFrame, PolarPoint, Result, Vector, ACCURACY,
};
pub use deformkit_interaction::{
    default_controllers, AvoidSwitchSideLimitator, BoxLimitator, BoxSource, Controller,
    DeformerEvent, DeformerListener, EdgeController, EditValue, EditorEvent, ExpansionController,
    GestureDirection, HandleRenderer, HandleShape, Interaction, Limitator, LimitatorKind,
    ListenerHandle, MoveController, MultiFrameSnapshot, PathRenderer, RenderedHandle,
    RotateController, SizeLimitator, VertexController,
};
pub use deformkit_settings::{
    ControllerKind, CursorHints, DeformerConfig, SettingsError, ZIndexTable,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, INFO by default
///
/// Returns an error when a global subscriber is already installed.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(version = VERSION, build_date = BUILD_DATE, "deformkit logging initialised");
    Ok(())
}
