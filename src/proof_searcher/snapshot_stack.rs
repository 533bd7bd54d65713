use super::SearchError;

/// A last-in-first-out undo log of full state copies.
///
/// Every push made before a speculative move must be matched by exactly one
/// pop once that move's subtree has been explored.
#[derive(Clone, Debug)]
pub struct SnapshotStack<T> {
    stack: Vec<T>,
}

impl<T> Default for SnapshotStack<T> {
    fn default() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<T: Clone> SnapshotStack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an independent copy of `value`.
    pub fn push(&mut self, value: &T) {
        self.stack.push(value.clone());
    }

    pub fn pop(&mut self) -> Result<T, SearchError> {
        self.stack.pop().ok_or(SearchError::StackUnderflow)
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.last()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Drops snapshots above `depth`. Used to rebalance after an aborted search.
    pub(crate) fn truncate(&mut self, depth: usize) {
        self.stack.truncate(depth);
    }
}
