//! Pairwise interleaving of stage and inter-stage-device sequences.

use crate::error::{TopologyError, TopologyResult};

/// Interleave two sequences pairwise: `[a1, b1, a2, b2, ...]`.
///
/// `a` may be the same length as `b` or exactly one element longer, in which
/// case the trailing element of `a` closes the sequence. Any other length
/// combination is a `LengthMismatch` error; callers are responsible for
/// matching lengths.
pub fn interleave<T>(a: Vec<T>, b: Vec<T>) -> TopologyResult<Vec<T>> {
    if a.len() != b.len() && a.len() != b.len() + 1 {
        return Err(TopologyError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut out = Vec::with_capacity(a.len() + b.len());
    let mut b_iter = b.into_iter();
    for item in a {
        out.push(item);
        if let Some(next) = b_iter.next() {
            out.push(next);
        }
    }
    Ok(out)
}
