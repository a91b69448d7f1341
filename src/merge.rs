//! Linear merge of the two sorted halves a parent gets back from its
//! children.

use crate::data_structures::Elem;

/// Merges a buffer whose halves `[0, n/2)` and `[n/2, n)` are each already
/// sorted into a fresh sorted buffer of length n. The split point is `n / 2`
/// by convention; it must be the same point the buffer was cut at when the
/// halves were handed out, which is why no explicit half lengths are taken.
pub fn interleave(buf: &[Elem]) -> Vec<Elem> {
    let (left, right) = buf.split_at(buf.len() / 2);
    let mut merged = Vec::with_capacity(buf.len());

    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    // One side ran dry; the other is sorted already.
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
