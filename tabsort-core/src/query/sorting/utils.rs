//! Utility functions for sorting operations
//!
//! This module provides the merge-sort kernel used by the permutation sorter
//! together with small helpers for building and checking permutations.

use std::cmp::Ordering;

/// Runs at or below this length are sorted by insertion.
const INSERTION_CUTOFF: usize = 32;

/// `[0, 1, ..., len - 1]`
pub fn identity_permutation(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// True when `indices` contains every value in `[0, indices.len())` exactly
/// once.
pub fn is_permutation(indices: &[usize]) -> bool {
    let mut seen = vec![false; indices.len()];
    for &idx in indices {
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

/// Stable merge sort.
///
/// Unlike `slice::sort_by`, this never panics when `compare` is not a total
/// order; an inconsistent comparator only yields an unspecified (but still
/// complete) arrangement of the input.
pub fn merge_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mut scratch = items.to_vec();
    merge_sort_into(items, &mut scratch, &mut compare);
}

fn merge_sort_into<T, F>(items: &mut [T], scratch: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= INSERTION_CUTOFF {
        insertion_sort_by(items, compare);
        return;
    }

    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_scratch, right_scratch) = scratch.split_at_mut(mid);
        merge_sort_into(left, left_scratch, compare);
        merge_sort_into(right, right_scratch, compare);
    }

    // Already in order across the seam.
    if compare(&items[mid - 1], &items[mid]) != Ordering::Greater {
        return;
    }

    scratch[..len].copy_from_slice(items);
    let (left, right) = scratch[..len].split_at(mid);
    let (mut l, mut r) = (0, 0);
    for slot in items.iter_mut() {
        let take_left = r >= right.len()
            || (l < left.len()
                && compare(&left[l], &right[r]) != Ordering::Greater);
        if take_left {
            *slot = left[l];
            l += 1;
        } else {
            *slot = right[r];
            r += 1;
        }
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], compare: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let key = items[i];
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &key) == Ordering::Greater {
            items[j] = items[j - 1];
            j -= 1;
        }
        items[j] = key;
    }
}
