use seq::Sequence;

use crate::{SortStats, TUNING};

/// Merge two ascending runs into one, consuming both.
///
/// Starts in linear interleave mode; equal keys take the left element
/// first. Once one side wins `TUNING.min_gallop` comparisons in a row the
/// merge gallops: the winning run's prefix that sorts before the losing
/// run's front is bulk-moved in one step, then one element from the losing
/// side restores linear mode with the streak reset.
pub(crate) fn merge_runs(
    mut left: Sequence,
    mut right: Sequence,
    stats: &mut SortStats,
) -> Sequence {
    if left.is_empty() {
        return right;
    }
    if right.is_empty() {
        return left;
    }

    let mut out = Sequence::with_capacity(left.len() + right.len());
    let mut streak = 0_usize;
    let mut left_winning = false;

    loop {
        let (Some(a), Some(b)) = (left.front(), right.front()) else {
            break;
        };
        stats.comparisons += 1;
        let take_left = a <= b;
        if streak > 0 && take_left == left_winning {
            streak += 1;
        } else {
            left_winning = take_left;
            streak = 1;
        }

        let source = if take_left { &mut left } else { &mut right };
        if let Some(value) = source.pop_front() {
            out.push_back(value);
        }

        if streak >= TUNING.min_gallop {
            gallop(&mut left, &mut right, left_winning, &mut out, stats);
            streak = 0;
        }
    }

    // at most one side still holds elements
    out.append(&mut left);
    out.append(&mut right);
    out
}

/// One galloping episode.
///
/// If the boundary search runs off the end of the winning run, the whole
/// remainder is bulk-moved and the main loop finishes the other side.
fn gallop(
    left: &mut Sequence,
    right: &mut Sequence,
    left_winning: bool,
    out: &mut Sequence,
    stats: &mut SortStats,
) {
    let (winner, loser, take_equal) = if left_winning {
        (left, right, true)
    } else {
        (right, left, false)
    };
    let Some(key) = loser.front() else {
        return;
    };
    stats.gallop_entries += 1;

    let cut = insertion_boundary(winner, key, take_equal, stats);
    for _ in 0..cut {
        if let Some(value) = winner.pop_front() {
            out.push_back(value);
        }
    }
    stats.galloped_elements += cut as u64;

    if winner.is_empty() {
        return;
    }
    if let Some(value) = loser.pop_front() {
        out.push_back(value);
    }
}

/// Index of the first element of `run` that does not sort before `key`.
///
/// `take_equal` keeps equal elements on the run's side of the boundary:
/// the left run uses `<=` and the right run `<`, so equal keys always
/// come out left-run-first.
fn insertion_boundary(run: &Sequence, key: i64, take_equal: bool, stats: &mut SortStats) -> usize {
    let mut lo = 0_usize;
    let mut hi = run.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        stats.comparisons += 1;
        let sorts_before = if take_equal {
            run[mid] <= key
        } else {
            run[mid] < key
        };
        if sorts_before {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}
