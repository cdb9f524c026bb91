//! # Deformkit Core
//!
//! Geometry kernel shared by every Deformkit crate:
//! - **Vector**: immutable 2D vector algebra with memoised lengths
//! - **Frames**: device, cartesian and polar frames with lossless point conversion
//! - **Primitives**: line segments, line equations, boundaries and intervals
//! - **Memoized**: value-diffing cache for derived geometry
//! - **Error**: usage and invariant violations
//!
//! ## Conventions
//!
//! Device frames grow `y` downward, cartesian frames grow `y` upward and polar
//! angles turn counter-clockwise on screen. Every frame origin is stored in
//! absolute device coordinates. Coordinates written into points are rounded
//! to [`ACCURACY`].

pub mod accuracy;
pub mod boundary;
pub mod error;
pub mod frame;
pub mod interval;
pub mod memo;
pub mod segment;
pub mod vector;

pub use accuracy::{approx_eq, approx_eq_radian, fix_accuracy, normalize_radian, ACCURACY};
pub use boundary::Boundary;
pub use error::{Error, Result};
pub use frame::{
    CartesianFrame, CartesianPoint, CoordinateFrame, DeviceFrame, DevicePoint, FramePoint,
    PolarFrame, PolarPoint,
};
pub use interval::{Bound, Interval};
pub use memo::Memoized;
pub use segment::{LineSegment, LinearEquation};
pub use vector::Vector;
