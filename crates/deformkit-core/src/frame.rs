//! Coordinate frames and frame-bound points.
//!
//! Three frame kinds coexist:
//! - **Device**: screen pixels, `y` grows downward.
//! - **Cartesian**: math convention, `y` grows upward.
//! - **Polar**: `(sita, r)` around the origin, `sita` counter-clockwise on
//!   screen (math convention).
//!
//! Every frame origin is expressed in device-absolute coordinates, so a point
//! from any frame can be turned into an absolute device position and from
//! there into any other frame:
//!
//! ```text
//! device     -> abs: (ox + x,          oy + y)
//! cartesian  -> abs: (ox + x,          oy - y)
//! polar      -> abs: (ox + r*cos(s),   oy - r*sin(s))
//!
//! abs -> device:    (ax - ox, ay - oy)
//! abs -> cartesian: (ax - ox, oy - ay)
//! abs -> polar:     sita = atan2(oy - ay, ax - ox), r = hypot(..)
//! ```
//!
//! Points copy their frame when created. Moving a frame afterwards never
//! changes the meaning of points that were already made from it.
//!
//! Cartesian/device components and polar radii are rounded with
//! [`fix_accuracy`]; polar angles are only normalised.

use std::fmt;

use crate::accuracy::{approx_eq, approx_eq_radian, fix_accuracy, normalize_radian};
use crate::vector::Vector;

/// A coordinate origin plus the convention points are expressed in.
pub trait CoordinateFrame: Copy + fmt::Debug + PartialEq {
    /// Point type bound to this frame.
    type Point: FramePoint<Frame = Self>;

    /// Origin in device-absolute coordinates.
    fn origin(&self) -> (f64, f64);

    /// Places the origin at absolute device coordinates.
    fn move_to(&mut self, x: f64, y: f64);

    /// Builds a point from raw components in this frame's own space.
    fn point(&self, a: f64, b: f64) -> Self::Point;

    /// Expresses an absolute device position in this frame.
    fn from_absolute(&self, x: f64, y: f64) -> Self::Point;

    /// Shifts the origin by a device delta.
    fn move_by(&mut self, dx: f64, dy: f64) {
        let (x, y) = self.origin();
        self.move_to(x + dx, y + dy);
    }

    /// Shifts the origin by a device vector.
    fn move_by_vector(&mut self, v: &Vector) {
        self.move_by(v.x(), v.y());
    }

    /// Converts a point of any frame kind into this frame.
    fn convert_from<P: FramePoint>(&self, point: &P) -> Self::Point {
        let (x, y) = point.absolute();
        self.from_absolute(x, y)
    }
}

/// Immutable point bound to a coordinate frame.
pub trait FramePoint: Copy + fmt::Debug + PartialEq {
    /// Frame type owning this point.
    type Frame: CoordinateFrame<Point = Self>;

    /// The frame this point is expressed in.
    fn frame(&self) -> Self::Frame;

    /// Absolute device position.
    fn absolute(&self) -> (f64, f64);

    fn to_device(&self, frame: &DeviceFrame) -> DevicePoint {
        frame.convert_from(self)
    }

    fn to_cartesian(&self, frame: &CartesianFrame) -> CartesianPoint {
        frame.convert_from(self)
    }

    fn to_polar(&self, frame: &PolarFrame) -> PolarPoint {
        frame.convert_from(self)
    }

    /// Device displacement from this point to `other`.
    fn vector_to<P: FramePoint>(&self, other: &P) -> Vector {
        let (x1, y1) = self.absolute();
        let (x2, y2) = other.absolute();
        Vector::from_points(x1, y1, x2, y2)
    }

    fn distance_to<P: FramePoint>(&self, other: &P) -> f64 {
        self.vector_to(other).length()
    }

    /// New point in the same frame, displaced by a device vector.
    fn add_vector(&self, v: &Vector) -> Self {
        let (x, y) = self.absolute();
        self.frame().from_absolute(x + v.x(), y + v.y())
    }

    /// Rotates counter-clockwise (on screen) around the frame origin.
    fn rotate(&self, radian: f64) -> Self {
        let (ox, oy) = self.frame().origin();
        self.rotate_around_absolute(ox, oy, radian)
    }

    /// Rotates counter-clockwise (on screen) around another point.
    fn rotate_around<P: FramePoint>(&self, pivot: &P, radian: f64) -> Self {
        let (px, py) = pivot.absolute();
        self.rotate_around_absolute(px, py, radian)
    }

    /// Rotates counter-clockwise (on screen) around an absolute position.
    fn rotate_around_absolute(&self, px: f64, py: f64, radian: f64) -> Self {
        let (ax, ay) = self.absolute();
        // Work in cartesian orientation so positive radians turn counter-clockwise.
        let dx = ax - px;
        let dy = py - ay;
        let (sin, cos) = radian.sin_cos();
        let rx = dx * cos - dy * sin;
        let ry = dx * sin + dy * cos;
        self.frame().from_absolute(px + rx, py - ry)
    }

    /// True when both points sit at the same absolute position within `tolerance`.
    fn approx_eq<P: FramePoint>(&self, other: &P, tolerance: f64) -> bool {
        let (x1, y1) = self.absolute();
        let (x2, y2) = other.absolute();
        approx_eq(x1, x2, tolerance) && approx_eq(y1, y2, tolerance)
    }
}

macro_rules! frame_origin {
    ($frame:ident) => {
        impl $frame {
            /// Frame anchored at device (0, 0).
            pub const ORIGIN: $frame = $frame { x: 0.0, y: 0.0 };

            /// Creates a frame whose origin sits at absolute device `(x, y)`.
            pub const fn new(x: f64, y: f64) -> Self {
                Self { x, y }
            }

            pub fn origin_x(&self) -> f64 {
                self.x
            }

            pub fn origin_y(&self) -> f64 {
                self.y
            }
        }

        impl Default for $frame {
            fn default() -> Self {
                Self::ORIGIN
            }
        }
    };
}

/// Screen frame, `y` downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceFrame {
    x: f64,
    y: f64,
}

/// Math frame, `y` upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianFrame {
    x: f64,
    y: f64,
}

/// Polar frame around an origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarFrame {
    x: f64,
    y: f64,
}

frame_origin!(DeviceFrame);
frame_origin!(CartesianFrame);
frame_origin!(PolarFrame);

impl CoordinateFrame for DeviceFrame {
    type Point = DevicePoint;

    fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn point(&self, x: f64, y: f64) -> DevicePoint {
        DevicePoint {
            frame: *self,
            x: fix_accuracy(x),
            y: fix_accuracy(y),
        }
    }

    fn from_absolute(&self, x: f64, y: f64) -> DevicePoint {
        self.point(x - self.x, y - self.y)
    }
}

impl CoordinateFrame for CartesianFrame {
    type Point = CartesianPoint;

    fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    fn point(&self, x: f64, y: f64) -> CartesianPoint {
        CartesianPoint {
            frame: *self,
            x: fix_accuracy(x),
            y: fix_accuracy(y),
        }
    }

    fn from_absolute(&self, x: f64, y: f64) -> CartesianPoint {
        self.point(x - self.x, self.y - y)
    }
}

impl CoordinateFrame for PolarFrame {
    type Point = PolarPoint;

    fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// `a` is the angle (sita) in radians, `b` the radius.
    fn point(&self, sita: f64, r: f64) -> PolarPoint {
        PolarPoint {
            frame: *self,
            sita: normalize_radian(sita),
            r: fix_accuracy(r),
        }
    }

    fn from_absolute(&self, x: f64, y: f64) -> PolarPoint {
        let dx = x - self.x;
        let dy = self.y - y;
        self.point(dy.atan2(dx), dx.hypot(dy))
    }
}

/// Point in a [`DeviceFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    frame: DeviceFrame,
    x: f64,
    y: f64,
}

impl DevicePoint {
    /// Point in the device origin frame.
    pub fn new(x: f64, y: f64) -> Self {
        DeviceFrame::ORIGIN.point(x, y)
    }

    /// Offset from the frame origin.
    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Point in a [`CartesianFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianPoint {
    frame: CartesianFrame,
    x: f64,
    y: f64,
}

impl CartesianPoint {
    /// Point in the cartesian origin frame.
    pub fn new(x: f64, y: f64) -> Self {
        CartesianFrame::ORIGIN.point(x, y)
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

/// Point in a [`PolarFrame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    frame: PolarFrame,
    sita: f64,
    r: f64,
}

impl PolarPoint {
    /// Point in the polar origin frame.
    pub fn new(sita: f64, r: f64) -> Self {
        PolarFrame::ORIGIN.point(sita, r)
    }

    /// Angle in radians, counter-clockwise on screen.
    pub fn sita(&self) -> f64 {
        self.sita
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    /// Same angle, different radius.
    pub fn with_radius(&self, r: f64) -> Self {
        self.frame.point(self.sita, r)
    }

    /// Compares angle and radius, treating angles a full turn apart as equal.
    pub fn approx_eq_polar(&self, other: &PolarPoint, tolerance: f64) -> bool {
        approx_eq(self.r, other.r, tolerance)
            && approx_eq_radian(self.sita, other.sita, tolerance)
    }
}

impl FramePoint for DevicePoint {
    type Frame = DeviceFrame;

    fn frame(&self) -> DeviceFrame {
        self.frame
    }

    fn absolute(&self) -> (f64, f64) {
        (self.frame.x + self.x, self.frame.y + self.y)
    }
}

impl FramePoint for CartesianPoint {
    type Frame = CartesianFrame;

    fn frame(&self) -> CartesianFrame {
        self.frame
    }

    fn absolute(&self) -> (f64, f64) {
        (self.frame.x + self.x, self.frame.y - self.y)
    }
}

impl FramePoint for PolarPoint {
    type Frame = PolarFrame;

    fn frame(&self) -> PolarFrame {
        self.frame
    }

    fn absolute(&self) -> (f64, f64) {
        let (sin, cos) = self.sita.sin_cos();
        (self.frame.x + self.r * cos, self.frame.y - self.r * sin)
    }

    fn rotate(&self, radian: f64) -> Self {
        self.frame.point(self.sita + radian, self.r)
    }
}

impl fmt::Display for DevicePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "device({}, {})", self.x, self.y)
    }
}

impl fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cartesian({}, {})", self.x, self.y)
    }
}

impl fmt::Display for PolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "polar({} rad, {})", self.sita, self.r)
    }
}
