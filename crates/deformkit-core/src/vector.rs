//! 2D vector algebra.
//!
//! Vectors are immutable values. Squared length, length and the normalised
//! form are computed at most once per instance and cached inside it; since a
//! vector never changes after construction the cache never goes stale.
//!
//! Components carry no frame convention of their own. Throughout the kernel a
//! vector describes a device displacement (x right, y down) unless a function
//! says otherwise; [`Vector::flip_y`] converts between device and cartesian
//! conventions.

use std::cell::OnceCell;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Immutable 2D vector with memoised derived quantities.
#[derive(Clone, Default)]
pub struct Vector {
    x: f64,
    y: f64,
    squared_length: OnceCell<f64>,
    length: OnceCell<f64>,
    normalized: OnceCell<(f64, f64)>,
}

impl Vector {
    /// The zero vector, with its own empty caches.
    pub const fn zero() -> Vector {
        Vector {
            x: 0.0,
            y: 0.0,
            squared_length: OnceCell::new(),
            length: OnceCell::new(),
            normalized: OnceCell::new(),
        }
    }

    /// Creates a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Vector pointing from `(x1, y1)` to `(x2, y2)`.
    pub fn from_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(x2 - x1, y2 - y1)
    }

    /// Unit vector at `radian` measured from the positive x axis.
    pub fn from_angle(radian: f64) -> Self {
        Self::new(radian.cos(), radian.sin())
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn add(&self, other: &Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Vector) -> Vector {
        Vector::new(self.x - other.x, self.y - other.y)
    }

    pub fn negate(&self) -> Vector {
        Vector::new(-self.x, -self.y)
    }

    /// Scales both components by `factor`.
    pub fn multiply(&self, factor: f64) -> Vector {
        Vector::new(self.x * factor, self.y * factor)
    }

    /// Component-wise product.
    pub fn multiply_components(&self, other: &Vector) -> Vector {
        Vector::new(self.x * other.x, self.y * other.y)
    }

    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product: `x1*y2 - x2*y1`.
    pub fn cross(&self, other: &Vector) -> f64 {
        self.x * other.y - other.x * self.y
    }

    pub fn squared_length(&self) -> f64 {
        *self
            .squared_length
            .get_or_init(|| self.x * self.x + self.y * self.y)
    }

    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| self.squared_length().sqrt())
    }

    /// Unit vector with the same direction.
    ///
    /// Normalising a zero-length vector is undefined: the components come back
    /// as NaN. Callers must guard with [`Vector::is_zero`].
    pub fn normalize(&self) -> Vector {
        let (x, y) = *self.normalized.get_or_init(|| {
            let len = self.length();
            (self.x / len, self.y / len)
        });
        Vector::new(x, y)
    }

    /// True when both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Projection of this vector onto `onto`: `dot(v, o) / |o|^2 * o`.
    ///
    /// Projecting onto a zero vector yields NaN components.
    pub fn projection(&self, onto: &Vector) -> Vector {
        onto.multiply(self.dot(onto) / onto.squared_length())
    }

    /// Angle from the positive x axis, `atan2(y, x)`.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Signed angle that rotates `self` onto `other`.
    pub fn angle_between(&self, other: &Vector) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Rotates by `radian` keeping the magnitude: the current angle is taken
    /// from `atan2`, `radian` is added and the components are rebuilt.
    pub fn rotate(&self, radian: f64) -> Vector {
        let len = self.length();
        let angle = self.angle() + radian;
        Vector::new(len * angle.cos(), len * angle.sin())
    }

    /// Moves the tip further along the vector's own direction by `length`.
    pub fn extend(&self, length: f64) -> Vector {
        if self.is_zero() {
            return self.clone();
        }
        self.add(&self.normalize().multiply(length))
    }

    /// Mirrors the y component, converting between device (y down) and
    /// cartesian (y up) conventions.
    pub fn flip_y(&self) -> Vector {
        Vector::new(self.x, -self.y)
    }

    /// Only the horizontal component.
    pub fn horizontal(&self) -> Vector {
        Vector::new(self.x, 0.0)
    }

    /// Only the vertical component.
    pub fn vertical(&self) -> Vector {
        Vector::new(0.0, self.y)
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: &Vector) -> Vector {
        Vector::add(self, rhs)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::add(&self, &rhs)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: &Vector) -> Vector {
        self.subtract(rhs)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self.subtract(&rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Mul<f64> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.multiply(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.multiply(rhs)
    }
}
