//! Value-diffing memoisation for derived geometry.
//!
//! A [`Memoized`] slot keeps the last computed value together with the
//! dependency snapshot it was computed from. Reading with a fresh snapshot
//! recomputes only when the snapshot differs from the stored one.

use std::cell::RefCell;
use std::fmt;

/// Cached value keyed by a dependency snapshot.
pub struct Memoized<D, T> {
    slot: RefCell<Option<(D, T)>>,
}

impl<D: PartialEq, T: Clone> Memoized<D, T> {
    pub fn new() -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }

    /// Returns the cached value when `deps` equals the last seen snapshot,
    /// otherwise recomputes it with `compute` and caches the result.
    pub fn get(&self, deps: D, compute: impl FnOnce(&D) -> T) -> T {
        if let Some((seen, value)) = self.slot.borrow().as_ref() {
            if *seen == deps {
                return value.clone();
            }
        }
        let value = compute(&deps);
        *self.slot.borrow_mut() = Some((deps, value.clone()));
        value
    }
}

impl<D: PartialEq, T: Clone> Default for Memoized<D, T> {
    fn default() -> Self {
        Self::new()
    }
}

// Clones start cold: the copy recomputes on first read.
impl<D, T> Clone for Memoized<D, T> {
    fn clone(&self) -> Self {
        Self {
            slot: RefCell::new(None),
        }
    }
}

impl<D, T> fmt::Debug for Memoized<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.slot.borrow().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_recomputes_only_on_change() {
        let memo: Memoized<(f64, f64), f64> = Memoized::new();
        let calls = Cell::new(0);
        let compute = |d: &(f64, f64)| {
            calls.set(calls.get() + 1);
            d.0 + d.1
        };

        assert_eq!(memo.get((1.0, 2.0), compute), 3.0);
        assert_eq!(memo.get((1.0, 2.0), compute), 3.0);
        assert_eq!(calls.get(), 1);

        assert_eq!(memo.get((2.0, 2.0), compute), 4.0);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_clone_starts_cold() {
        let memo: Memoized<u32, u32> = Memoized::new();
        let calls = Cell::new(0);
        let compute = |d: &u32| {
            calls.set(calls.get() + 1);
            d * 10
        };

        assert_eq!(memo.get(1, compute), 10);
        let copy = memo.clone();
        assert_eq!(memo.get(1, compute), 10);
        assert_eq!(calls.get(), 1);

        assert_eq!(copy.get(1, compute), 10);
        assert_eq!(calls.get(), 2);
        assert_eq!(format!("{:?}", copy), "Memoized { cached: true }");
    }
}
