//! Non-maximum suppression over decoded candidates.

use crate::candidate::{sort_by_confidence_desc, Detection};

/// Applies greedy non-maximum suppression across all candidates in a frame.
///
/// Candidates are sorted by descending confidence and kept if no
/// already-kept box overlaps them at or above the suppression trigger
/// `IoU >= 1 - suppression_threshold`. Suppression is class-agnostic: boxes
/// of different classes compete like any others. The kept set is returned in
/// the order it was built (confidence descending).
pub fn suppress(candidates: &mut [Detection], suppression_threshold: f32) -> Vec<Detection> {
    if candidates.is_empty() {
        return Vec::new();
    }

    sort_by_confidence_desc(candidates);
    let trigger = 1.0 - suppression_threshold;
    let mut kept: Vec<Detection> = Vec::new();

    'outer: for cand in candidates.iter().copied() {
        for kept_det in kept.iter() {
            if kept_det.bbox.iou(&cand.bbox) >= trigger {
                continue 'outer;
            }
        }
        kept.push(cand);
    }

    kept
}
