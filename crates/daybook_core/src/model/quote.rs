//! Quote rotation state.
//!
//! # Invariants
//! - `order` is a permutation of the quote pool's indices.
//! - `cursor` never exceeds `order.len()`; reaching the end draws a fresh
//!   permutation and resets the cursor, so every quote in the pool shows
//!   exactly once per cycle before any repeat.

use rand::Rng;

/// Built-in quote pool used when the caller does not supply one.
pub const DEFAULT_QUOTE_POOL: &[&str] = &[
    "Small steps every day add up to big results.",
    "Done is better than perfect.",
    "You don't have to see the whole staircase, just take the first step.",
    "The secret of getting ahead is getting started.",
    "Focus on progress, not perfection.",
    "A little progress each day adds up.",
    "Action is the foundational key to all success.",
    "What you do today can improve all your tomorrows.",
];

/// Shuffled walk over a fixed quote pool.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuoteRotation {
    order: Vec<usize>,
    cursor: usize,
}

impl QuoteRotation {
    /// Rebuilds rotation state from persisted parts.
    ///
    /// Anything that is not a permutation of `0..pool_len` with an in-range
    /// cursor degrades to the empty rotation, which reshuffles on the next
    /// [`advance`](Self::advance).
    pub fn from_stored(order: Vec<usize>, cursor: usize, pool_len: usize) -> Self {
        let restored = Self { order, cursor };
        if restored.is_consistent(pool_len) {
            restored
        } else {
            Self::default()
        }
    }

    /// Permutation of pool indices for the current cycle.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position of the next quote within the current cycle.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Yields the pool index of the next quote and moves the cursor.
    ///
    /// Draws a fresh permutation when the current cycle is exhausted (or the
    /// state was never initialized). Returns `None` only for an empty pool.
    pub fn advance<R: Rng>(&mut self, pool_len: usize, rng: &mut R) -> Option<usize> {
        if pool_len == 0 {
            return None;
        }
        if self.cursor >= self.order.len() || !self.is_consistent(pool_len) {
            self.order = shuffled_indices(pool_len, rng);
            self.cursor = 0;
        }
        let index = self.order[self.cursor];
        self.cursor += 1;
        Some(index)
    }

    fn is_consistent(&self, pool_len: usize) -> bool {
        if self.order.len() != pool_len || self.cursor > pool_len {
            return false;
        }
        let mut seen = vec![false; pool_len];
        for &index in &self.order {
            if index >= pool_len || seen[index] {
                return false;
            }
            seen[index] = true;
        }
        true
    }
}

/// Fisher-Yates permutation of `0..len`.
fn shuffled_indices<R: Rng>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    for i in (1..len).rev() {
        let j = rng.random_range(0..=i);
        order.swap(i, j);
    }
    order
}
