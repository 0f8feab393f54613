//! Candidate records and pruning.
//!
//! Includes the detection record shared by both pipeline stages and greedy
//! overlap suppression.

pub(crate) mod nms;

use std::fmt;

use crate::geom::BBox;

/// A decoded detection: bounding box, class, and confidence.
///
/// The same record flows through both pipeline stages. `decode_frame`
/// produces candidates that passed the confidence filter; `suppress` returns
/// the subset that survived overlap suppression. Both carry identical fields,
/// so no separate post-suppression type exists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Detection {
    /// Bounding box in absolute pixel coordinates, top-left corner form.
    pub bbox: BBox,
    /// Index of the winning class in the label set.
    pub class_id: usize,
    /// Winning class probability, strictly above the confidence threshold.
    pub confidence: f32,
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "class {} ({:.4}) at ({}, {}) {}x{}",
            self.class_id,
            self.confidence,
            self.bbox.x,
            self.bbox.y,
            self.bbox.width,
            self.bbox.height
        )
    }
}

/// Sorts detections by descending confidence.
///
/// The sort is stable and compares confidence only, so detections with equal
/// confidence keep their decode scan order. Suppression depends on this for
/// deterministic earliest-wins tie-breaking.
pub(crate) fn sort_by_confidence_desc(detections: &mut [Detection]) {
    detections.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}
