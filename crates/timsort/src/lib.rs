use std::mem;

pub use seq::Sequence;

mod insertion;
mod merge;
mod run;
mod stack;

#[derive(Clone, Copy, Debug)]
pub struct TuningParams {
    /// Inputs shorter than this sort as a single padded run.
    pub min_run_cap: usize,
    /// Consecutive same-side merge wins before switching to galloping.
    pub min_gallop: usize,
}

pub const TUNING: TuningParams = TuningParams {
    min_run_cap: 64,
    min_gallop: 7,
};

/// Counters accumulated across one or more [`sort_with_stats`] calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct SortStats {
    pub comparisons: u64,
    pub runs_detected: u64,
    pub merges: u64,
    pub gallop_entries: u64,
    pub galloped_elements: u64,
    pub insertion_swaps: u64,
}

pub fn sort(seq: &mut Sequence) {
    let mut stats = SortStats::default();
    sort_with_stats(seq, &mut stats);
}

/// Sort `seq` ascending in place, recording counters into `stats`.
pub fn sort_with_stats(seq: &mut Sequence, stats: &mut SortStats) {
    if seq.len() < 2 || is_sorted_non_decreasing(seq) {
        return;
    }

    let mut input = mem::take(seq);
    let min_run = run::min_run_length(input.len());
    let mut pending = stack::RunStack::new();
    while !input.is_empty() {
        let next = run::next_run(&mut input, min_run, stats);
        pending.push(next, stats);
    }
    *seq = pending.finish(stats);
}

fn is_sorted_non_decreasing(seq: &Sequence) -> bool {
    let mut iter = seq.iter();
    let Some(mut last) = iter.next() else {
        return true;
    };
    for value in iter {
        if value < last {
            return false;
        }
        last = value;
    }
    true
}
