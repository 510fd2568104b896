use std::mem;

use seq::Sequence;

use crate::{SortStats, merge};

/// LIFO of pending sorted runs awaiting combination.
///
/// After every push the stack is collapsed until, bottom-up, each run is
/// longer than the next two combined and the topmost run is shorter than
/// the one below it. Stacks of fewer than three or four runs skip the
/// conditions that need them; depth stays O(log n).
pub(crate) struct RunStack {
    runs: Vec<Sequence>,
}

impl RunStack {
    pub(crate) fn new() -> Self {
        Self {
            runs: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, run: Sequence, stats: &mut SortStats) {
        self.runs.push(run);
        self.collapse(stats);
    }

    /// Drain the stack down to one run and return it.
    pub(crate) fn finish(mut self, stats: &mut SortStats) -> Sequence {
        while self.runs.len() > 1 {
            let n = self.runs.len();
            if n >= 3 && self.runs[n - 3].len() < self.runs[n - 1].len() {
                self.merge_at(n - 3, stats);
            } else {
                self.merge_at(n - 2, stats);
            }
        }
        self.runs.pop().unwrap_or_default()
    }

    fn collapse(&mut self, stats: &mut SortStats) {
        while self.runs.len() > 1 {
            let n = self.runs.len();

            let overflow_top = n >= 3
                && self.runs[n - 3].len() <= self.runs[n - 2].len() + self.runs[n - 1].len();
            let overflow_below = n >= 4
                && self.runs[n - 4].len() <= self.runs[n - 3].len() + self.runs[n - 2].len();
            if overflow_top || overflow_below {
                // merge the middle run with its shorter neighbor
                if n >= 3 && self.runs[n - 3].len() < self.runs[n - 1].len() {
                    self.merge_at(n - 3, stats);
                } else {
                    self.merge_at(n - 2, stats);
                }
                continue;
            }

            if self.runs[n - 2].len() <= self.runs[n - 1].len() {
                self.merge_at(n - 2, stats);
                continue;
            }

            break;
        }
    }

    fn merge_at(&mut self, idx: usize, stats: &mut SortStats) {
        let right = self.runs.remove(idx + 1);
        let left = mem::take(&mut self.runs[idx]);
        stats.merges += 1;
        self.runs[idx] = merge::merge_runs(left, right, stats);
    }
}
