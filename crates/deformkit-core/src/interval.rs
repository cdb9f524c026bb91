//! Numeric ranges with independently open or closed endpoints.

use std::fmt;

use crate::accuracy::ACCURACY;

/// One end of an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// The value itself is part of the range.
    Closed(f64),
    /// The value is excluded from the range.
    Open(f64),
    /// No limit on this side.
    Unbounded,
}

/// Numeric range used by size constraints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Bound,
    pub max: Bound,
}

impl Interval {
    pub fn new(min: Bound, max: Bound) -> Self {
        Self { min, max }
    }

    /// `[min, max]`
    pub fn closed(min: f64, max: f64) -> Self {
        Self::new(Bound::Closed(min), Bound::Closed(max))
    }

    /// `(min, max)`
    pub fn open(min: f64, max: f64) -> Self {
        Self::new(Bound::Open(min), Bound::Open(max))
    }

    /// `[min, +inf)`
    pub fn at_least(min: f64) -> Self {
        Self::new(Bound::Closed(min), Bound::Unbounded)
    }

    /// `(-inf, max]`
    pub fn at_most(max: f64) -> Self {
        Self::new(Bound::Unbounded, Bound::Closed(max))
    }

    pub fn unbounded() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    pub fn contains(&self, value: f64) -> bool {
        let above_min = match self.min {
            Bound::Closed(m) => value >= m,
            Bound::Open(m) => value > m,
            Bound::Unbounded => true,
        };
        let below_max = match self.max {
            Bound::Closed(m) => value <= m,
            Bound::Open(m) => value < m,
            Bound::Unbounded => true,
        };
        above_min && below_max
    }

    /// Nearest value inside the interval. Open ends clamp one accuracy step
    /// inside the excluded limit.
    pub fn clamp(&self, value: f64) -> f64 {
        if self.contains(value) {
            return value;
        }
        let lowest = match self.min {
            Bound::Closed(m) => Some(m),
            Bound::Open(m) => Some(m + ACCURACY),
            Bound::Unbounded => None,
        };
        let highest = match self.max {
            Bound::Closed(m) => Some(m),
            Bound::Open(m) => Some(m - ACCURACY),
            Bound::Unbounded => None,
        };
        match (lowest, highest) {
            (Some(lo), _) if value < lo => lo,
            (_, Some(hi)) if value > hi => hi,
            _ => value,
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.min {
            Bound::Closed(m) => write!(f, "[{}", m)?,
            Bound::Open(m) => write!(f, "({}", m)?,
            Bound::Unbounded => write!(f, "(-inf")?,
        }
        match self.max {
            Bound::Closed(m) => write!(f, ", {}]", m),
            Bound::Open(m) => write!(f, ", {})", m),
            Bound::Unbounded => write!(f, ", +inf)"),
        }
    }
}
