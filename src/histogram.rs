//! Class-frequency histograms and the measures derived from them:
//! Shannon entropy, purity, and the majority class of a label vector.

use crate::data::FloatData;

/// Count the occurrences of each class code in `y`.
///
/// The table is dense: it has `max(y) + 1` slots, one per class code,
/// including codes that never occur. Callers must have validated the
/// class-code contract (finite, non-negative, integer-valued labels)
/// before indexing with raw label values.
pub fn bincount<T: FloatData<T>>(y: &[T]) -> Vec<usize> {
    let slots = y.iter().map(|v| v.as_usize()).max().map_or(0, |m| m + 1);
    let mut counts = vec![0_usize; slots];
    for v in y {
        counts[v.as_usize()] += 1;
    }
    counts
}

/// Shannon entropy, in bits, of the class distribution of `y`.
///
/// Computed as `-sum(p_c * log2(p_c))` over the classes present in `y`.
/// Zero-count classes are skipped outright, which keeps `log2` away from
/// zero proportions. A single-class vector has entropy exactly `0`.
pub fn entropy<T: FloatData<T>>(y: &[T]) -> T {
    let counts = bincount(y);
    let total = T::from_usize(y.len());
    let mut h = T::ZERO;
    for &count in counts.iter() {
        if count == 0 {
            continue;
        }
        let p = T::from_usize(count) / total;
        h += p * p.log2();
    }
    -h
}

/// Check whether every label in `y` has the same value.
///
/// Decided by counting distinct values rather than by comparing entropy
/// against zero, so no floating point equality is involved.
pub fn is_pure<T: FloatData<T>>(y: &[T]) -> bool {
    let mut seen: Vec<T> = Vec::new();
    for v in y {
        if !seen.contains(v) {
            seen.push(*v);
            if seen.len() > 1 {
                return false;
            }
        }
    }
    seen.len() == 1
}

/// The most frequent class code in `y`.
///
/// The scan keeps the first index with a strictly greater count, so ties
/// resolve to the smallest class code. `y` must be non-empty.
pub fn majority_class<T: FloatData<T>>(y: &[T]) -> T {
    let counts = bincount(y);
    let mut idx_max = 0;
    let mut curr_max = counts[0];
    for (class, &count) in counts.iter().enumerate() {
        if count > curr_max {
            idx_max = class;
            curr_max = count;
        }
    }
    T::from_usize(idx_max)
}
