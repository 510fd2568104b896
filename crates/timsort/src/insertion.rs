use seq::Sequence;

use crate::SortStats;

/// In-place insertion sort over the run's node cursor.
///
/// Adjacent value swaps only; the comparison is strict `>`, so equal keys
/// never move past each other. O(k^2) in the run length, which stays at or
/// below the min-run cap.
pub(crate) fn sort_run(run: &mut Sequence, stats: &mut SortStats) {
    let Some(mut sorted_end) = run.first_node() else {
        return;
    };
    while let Some(next) = run.next_node(sorted_end) {
        let mut j = next;
        while let Some(p) = run.prev_node(j) {
            stats.comparisons += 1;
            if run.value(p) > run.value(j) {
                run.swap_values(p, j);
                stats.insertion_swaps += 1;
                j = p;
            } else {
                break;
            }
        }
        sorted_end = next;
    }
}
