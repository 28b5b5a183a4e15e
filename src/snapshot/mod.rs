// Snapshot history for time travel

use crate::game::grid::Grid;
use crate::game::Mark;
use thiserror::Error;

/// A history entry that does not follow from its predecessor by a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("step {step} is not a single legal move from step {}", .step - 1)]
pub struct HistoryError {
    pub step: usize,
}

/// Ordered grid snapshots, index 0 being the empty starting grid
///
/// Never empty. Entries are only appended, or dropped from the tail when a
/// move is played from an earlier step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    pub fn new() -> Self {
        History {
            snapshots: vec![Grid::empty()],
        }
    }

    /// Keep snapshots `0..=step`, then append `grid`
    ///
    /// Returns how many snapshots were discarded from the old tail.
    pub fn branch(&mut self, step: usize, grid: Grid) -> usize {
        let keep = (step + 1).min(self.snapshots.len());
        let discarded = self.snapshots.len() - keep;
        self.snapshots.truncate(keep);
        self.snapshots.push(grid);
        discarded
    }

    /// Get a snapshot by step
    pub fn get(&self, step: usize) -> Option<&Grid> {
        self.snapshots.get(step)
    }

    /// Number of snapshots (always at least 1)
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the latest snapshot
    pub fn last_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Check that every snapshot is one legal move away from the one before it
    ///
    /// Step `k` must differ from step `k - 1` in exactly one cell, which went
    /// from empty to the mark of whoever moved at step `k - 1`.
    pub fn verify(&self) -> Result<(), HistoryError> {
        // `branch` always keeps step 0, so only the moves need checking
        for (step, pair) in self.snapshots.windows(2).enumerate() {
            let (before, after) = (&pair[0], &pair[1]);
            let changed = before.diff(after);
            let expected = Mark::for_turn(step % 2 == 0);
            let legal = match changed.as_slice() {
                [cell] => before.get(*cell).is_empty() && after.get(*cell) == expected,
                _ => false,
            };
            if !legal {
                return Err(HistoryError { step: step + 1 });
            }
        }
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
