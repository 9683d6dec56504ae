//! Half-circle occupancy counts and their minimum over reference directions.
//!
//! - `half_circle_count`: angles within a quarter turn of a reference (inclusive).
//! - `min_half_circle_depth`: list-order scan with early exit at 1.
//! - `min_half_circle_depth_exhaustive`: same scan without the early exit.
//! - `min_half_circle_depth_sorted`: sorted angles, window counts by binary search.
//!
//! All three minima agree exactly: they evaluate the same `circular_distance <= modulus/4`
//! predicate on the same multiset of angles. An empty angle list has depth 0.

use super::angle::circular_distance;
use super::types::Scan;

/// Number of `angles` whose circular distance to `a0` is at most `modulus / 4`.
///
/// When `a0` is taken from `angles` it counts itself, so the result is at least 1.
pub fn half_circle_count(a0: f64, angles: &[f64], modulus: f64) -> usize {
    let quarter = modulus / 4.0;
    angles
        .iter()
        .filter(|&&a1| circular_distance(a0, a1, modulus) <= quarter)
        .count()
}

/// Minimal half-circle occupancy over all angles used as reference direction.
///
/// Scans in list order and stops once a count of 1 is seen.
pub fn min_half_circle_depth(angles: &[f64], modulus: f64) -> usize {
    let mut best = angles.len();
    for &a0 in angles {
        let count = half_circle_count(a0, angles, modulus);
        if count < best {
            best = count;
        }
        if count == 1 {
            break;
        }
    }
    best
}

/// `min_half_circle_depth` without the early exit.
pub fn min_half_circle_depth_exhaustive(angles: &[f64], modulus: f64) -> usize {
    angles
        .iter()
        .map(|&a0| half_circle_count(a0, angles, modulus))
        .min()
        .unwrap_or(0)
}

/// `min_half_circle_depth` on sorted angles, O(n log n).
///
/// For a reference `a0`, the angles above it (in sorted order) lie within the window on
/// a prefix (direct distance) and a suffix (wrapped distance); the angles below it
/// mirror this. Both boundaries are found with `partition_point` on the same floating
/// point predicate the direct count uses.
pub fn min_half_circle_depth_sorted(angles: &[f64], modulus: f64) -> usize {
    if angles.is_empty() {
        return 0;
    }
    let quarter = modulus / 4.0;
    let mut sorted = angles.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut best = sorted.len();
    for (i, &a0) in sorted.iter().enumerate() {
        let (below, above) = sorted.split_at(i);

        let near_up = above.partition_point(|&a1| (a1 - a0).abs() <= quarter);
        let wrap_up = above.partition_point(|&a1| modulus - (a1 - a0).abs() > quarter);
        let up = near_up + above.len() - wrap_up.max(near_up);

        let wrap_down = below.partition_point(|&a1| modulus - (a1 - a0).abs() <= quarter);
        let near_down = below.partition_point(|&a1| (a1 - a0).abs() > quarter);
        let down = wrap_down + below.len() - near_down.max(wrap_down);

        best = best.min(up + down);
        if best == 1 {
            break;
        }
    }
    best
}

/// Dispatch on `scan`.
#[inline]
pub fn min_depth(angles: &[f64], modulus: f64, scan: Scan) -> usize {
    match scan {
        Scan::EarlyExit => min_half_circle_depth(angles, modulus),
        Scan::Exhaustive => min_half_circle_depth_exhaustive(angles, modulus),
        Scan::Sorted => min_half_circle_depth_sorted(angles, modulus),
    }
}
