//! Position stack used by the stack-based scanner.
//!
//! [`BraceStack`] records the brace-position indexes of the opening braces
//! that are still waiting for a close. The scan in
//! [`balance`](crate::balance::balance) pushes on every `{`, pops on every
//! `}`, and reads [`bottom`](BraceStack::bottom) at end of input to find the
//! leftmost open that never matched.

#[cfg(not(test))]
use alloc::vec::Vec;

/// A stack of brace-position indexes.
///
/// Entries are pushed in scan order, so the bottom entry is always the
/// earliest still-unmatched opening brace.
#[derive(Clone, Debug, Default)]
pub struct BraceStack {
    positions: Vec<usize>,
}

impl BraceStack {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        BraceStack {
            positions: Vec::new(),
        }
    }

    /// Pushes an opening brace's position onto the stack.
    #[inline]
    pub fn push(&mut self, position: usize) {
        self.positions.push(position);
    }

    /// Removes and returns the most recent position.
    ///
    /// Returns `None` without mutating when the stack is empty. An empty pop
    /// is a normal scan outcome (an orphan closing brace), not an error.
    #[inline]
    pub fn pop(&mut self) -> Option<usize> {
        self.positions.pop()
    }

    /// Number of positions currently held.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// True when no positions are held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The earliest pushed position still on the stack, if any.
    #[inline]
    pub fn bottom(&self) -> Option<usize> {
        self.positions.first().copied()
    }
}

// =============================================================================
// Tests
// =============================================================================
