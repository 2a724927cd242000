//! Balance-point search
//!
//! Finds the index of a non-negative sequence that most evenly balances
//! the sequence's mass on either side, excluding the two endpoints. Used
//! by the subdivision extractor to choose split coordinates.

use crate::error::{ExtractError, ExtractResult};

/// Minimum sequence length for the balance search.
///
/// With fewer than 3 elements there is no interior index to return.
pub const MIN_BALANCE_LEN: usize = 3;

/// Find the interior index minimizing `|prefix_sum(i) - suffix_sum(i)|`.
///
/// `prefix_sum(i)` includes `v[0..=i]` and `suffix_sum(i)` includes
/// `v[i..n]`, so the element at the returned index is counted on both
/// sides. Only indices in `[1, n-2]` are candidates; on ties the smallest
/// index wins.
///
/// # Errors
///
/// Returns [`ExtractError::SequenceTooShort`] if `v.len() < 3`.
///
/// # Examples
///
/// ```
/// use glyphfeat_extract::balance::find_balance_point;
///
/// // Uniform mass balances at the center
/// assert_eq!(find_balance_point(&[1, 1, 1, 1, 1]).unwrap(), 2);
///
/// // A heavy head pulls the balance point left
/// assert_eq!(find_balance_point(&[5, 1, 1, 1, 1]).unwrap(), 1);
/// ```
pub fn find_balance_point(v: &[u32]) -> ExtractResult<usize> {
    let n = v.len();
    if n < MIN_BALANCE_LEN {
        return Err(ExtractError::SequenceTooShort {
            len: n,
            min: MIN_BALANCE_LEN,
        });
    }

    let mut prefix = vec![0i64; n];
    prefix[0] = i64::from(v[0]);
    for i in 1..n {
        prefix[i] = prefix[i - 1] + i64::from(v[i]);
    }

    let mut suffix = vec![0i64; n];
    suffix[n - 1] = i64::from(v[n - 1]);
    for i in (0..n - 1).rev() {
        suffix[i] = suffix[i + 1] + i64::from(v[i]);
    }

    let mut min_index = 0;
    let mut min_diff = i64::MAX;
    for i in 1..n - 1 {
        // strict < keeps the earliest index on ties
        let diff = (prefix[i] - suffix[i]).abs();
        if diff < min_diff {
            min_diff = diff;
            min_index = i;
        }
    }

    Ok(min_index)
}

/// Double the resolution of a density vector.
///
/// Produces a vector of length `2 * v0.len()` where odd positions carry
/// `v0[x / 2]` and even positions are zero. The doubled resolution lets
/// the balance point land between two original indices rather than only
/// on one.
pub fn upsample_density(v0: &[u32]) -> Vec<u32> {
    (0..v0.len() * 2)
        .map(|x| if x % 2 == 0 { 0 } else { v0[x / 2] })
        .collect()
}
