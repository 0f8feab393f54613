//! Decoding of raw network output rows into pixel-space candidates.
//!
//! One raw row per anchor/cell: a normalized center-form box plus a per-class
//! score vector. Decoding picks the winning class, filters on confidence, and
//! de-normalizes the box into integer pixel coordinates. All arithmetic stays
//! in floating point until the four final box fields are truncated, so the
//! result never depends on intermediate rounding.

use crate::candidate::Detection;
use crate::geom::{BBox, FrameSize};
use crate::util::{DetPostError, DetPostResult};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// One candidate row emitted by the detection network for a single anchor.
///
/// Coordinates and sizes are normalized to [0, 1] relative to the frame;
/// `class_scores` holds one probability per class, indexed by class id.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDetection {
    /// Box center X, normalized to frame width.
    pub center_x: f32,
    /// Box center Y, normalized to frame height.
    pub center_y: f32,
    /// Box width, normalized to frame width.
    pub width: f32,
    /// Box height, normalized to frame height.
    pub height: f32,
    /// Per-class probabilities, indexed by class id.
    pub class_scores: Vec<f32>,
}

impl RawDetection {
    /// Creates a raw detection row.
    pub fn new(center_x: f32, center_y: f32, width: f32, height: f32, class_scores: Vec<f32>) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
            class_scores,
        }
    }
}

/// Finds the winning class with first-occurrence tie-breaking.
///
/// Scans in class-id order and replaces the running best only on a strictly
/// greater score, so the lowest class id wins exact ties. Errors on an empty
/// or non-finite score vector; `index` identifies the offending row.
fn argmax_scores(scores: &[f32], index: usize) -> DetPostResult<(usize, f32)> {
    if scores.is_empty() {
        return Err(DetPostError::EmptyScores { index });
    }

    let mut best_id = 0usize;
    let mut best_score = f32::NEG_INFINITY;
    for (class_id, &score) in scores.iter().enumerate() {
        if !score.is_finite() {
            return Err(DetPostError::NonFiniteScore {
                index,
                class_id,
                value: score,
            });
        }
        if score > best_score {
            best_id = class_id;
            best_score = score;
        }
    }

    Ok((best_id, best_score))
}

/// Decodes a single row, returning `None` when it falls below the threshold.
fn decode_row(
    raw: &RawDetection,
    index: usize,
    frame: FrameSize,
    confidence_threshold: f32,
) -> DetPostResult<Option<Detection>> {
    let (class_id, confidence) = argmax_scores(&raw.class_scores, index)?;
    if confidence <= confidence_threshold {
        return Ok(None);
    }

    let frame_w = frame.width() as f32;
    let frame_h = frame.height() as f32;
    let center_x = raw.center_x * frame_w;
    let center_y = raw.center_y * frame_h;
    let width = raw.width * frame_w;
    let height = raw.height * frame_h;

    // Truncation toward zero happens only here, on the final four fields.
    let bbox = BBox::new(
        (center_x - width / 2.0) as i32,
        (center_y - height / 2.0) as i32,
        width as i32,
        height as i32,
    );

    Ok(Some(Detection {
        bbox,
        class_id,
        confidence,
    }))
}

/// Decodes one frame's raw rows into confidence-filtered candidates.
///
/// Pure function of its inputs: rows whose winning score does not strictly
/// exceed `confidence_threshold` are dropped, the rest are de-normalized
/// against `frame` and returned in scan order. A malformed row (empty or
/// non-finite score vector) fails the whole frame; skipping the frame and
/// continuing the stream is the caller's policy.
pub fn decode_frame(
    raws: &[RawDetection],
    frame: FrameSize,
    confidence_threshold: f32,
) -> DetPostResult<Vec<Detection>> {
    let mut candidates = Vec::new();
    for (index, raw) in raws.iter().enumerate() {
        if let Some(det) = decode_row(raw, index, frame, confidence_threshold)? {
            candidates.push(det);
        }
    }
    Ok(candidates)
}

/// Decodes rows in parallel, yielding the same output as [`decode_frame`].
///
/// Rows are independent, and the order-preserving collect keeps the result
/// bit-identical to the sequential pass, including scan-order tie-breaks
/// downstream.
#[cfg(feature = "rayon")]
pub fn decode_frame_par(
    raws: &[RawDetection],
    frame: FrameSize,
    confidence_threshold: f32,
) -> DetPostResult<Vec<Detection>> {
    let rows: Vec<Option<Detection>> = raws
        .par_iter()
        .enumerate()
        .map(|(index, raw)| decode_row(raw, index, frame, confidence_threshold))
        .collect::<DetPostResult<_>>()?;
    Ok(rows.into_iter().flatten().collect())
}
