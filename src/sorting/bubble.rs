use tracing::debug;

/// Sorts `arr` in place into non-decreasing order.
///
/// Equal elements are never swapped, so the sort is stable. Stops early once a
/// pass makes no swaps.
pub fn bubble_sort<T>(arr: &mut [T])
where
    T: Ord,
{
    let n = arr.len();
    if n < 2 {
        return;
    }

    let mut passes = 0usize;
    let mut swaps = 0usize;
    for i in 0..n - 1 {
        passes += 1;
        let mut was_swap = false;
        // tail arr[n - i..] is already in final position
        for j in 0..(n - 1 - i) {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swaps += 1;
                was_swap = true;
            }
        }
        if !was_swap {
            break;
        }
    }

    debug!(len = n, passes, swaps, "bubble sort finished");
}
