//! Quadratic comparison sorts and a sortedness check.
//!
//! Every sort copies its input and sorts the copy in place, so the
//! caller's slice is never touched. Elements only need `PartialOrd`,
//! which admits floats; ordering among NaNs is unspecified.

/// Bubble sort with early exit once a pass makes no swaps.
pub fn bubble_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let len = out.len();

    for pass in 0..len {
        let mut swapped = false;
        // The last `pass` elements are already in place.
        for j in 0..len - pass - 1 {
            if out[j] > out[j + 1] {
                out.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    out
}

/// Selection sort: repeatedly move the smallest remaining element forward.
pub fn selection_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let len = out.len();

    for i in 0..len {
        let mut min = i;
        for j in (i + 1)..len {
            if out[j] < out[min] {
                min = j;
            }
        }
        if min != i {
            out.swap(i, min);
        }
    }

    out
}

/// Insertion sort: grow a sorted prefix one element at a time.
pub fn insertion_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();

    for i in 1..out.len() {
        let mut j = i;
        while j > 0 && out[j - 1] > out[j] {
            out.swap(j - 1, j);
            j -= 1;
        }
    }

    out
}

/// Whether `items` is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}
