//! Transaction stack of typed state snapshots.
//!
//! Each shape keeps a stack of its own state records:
//! - `save` pushes a restore point
//! - `restore` pops the newest restore point and hands it back for reinstating
//! - `pop` drops the newest restore point, committing the edits made after it
//! - `apply` drops every restore point, committing the whole gesture
//!
//! The depth always equals the number of unmatched `save` calls.

use tracing::trace;

/// Stack of restore points.
#[derive(Debug, Clone)]
pub struct TransactionStack<S> {
    snapshots: Vec<S>,
}

impl<S> TransactionStack<S> {
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Pushes a restore point.
    pub fn save(&mut self, snapshot: S) {
        self.snapshots.push(snapshot);
        trace!(depth = self.snapshots.len(), "transaction saved");
    }

    /// Removes and returns the newest restore point.
    pub fn restore(&mut self) -> Option<S> {
        let snapshot = self.snapshots.pop();
        trace!(depth = self.snapshots.len(), "transaction restored");
        snapshot
    }

    /// Discards the newest restore point. Returns false when the stack was empty.
    pub fn pop(&mut self) -> bool {
        let popped = self.snapshots.pop().is_some();
        trace!(depth = self.snapshots.len(), "transaction popped");
        popped
    }

    /// Discards every restore point and returns how many were flushed.
    pub fn apply(&mut self) -> usize {
        let flushed = self.snapshots.len();
        self.snapshots.clear();
        trace!(flushed, "transaction applied");
        flushed
    }

    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<S> Default for TransactionStack<S> {
    fn default() -> Self {
        Self::new()
    }
}
