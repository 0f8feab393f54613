//! Per-frame pipeline facade.

use crate::candidate::nms::suppress;
use crate::candidate::Detection;
use crate::config::DetectConfig;
use crate::decode::{decode_frame, RawDetection};
#[cfg(feature = "rayon")]
use crate::decode::decode_frame_par;
use crate::geom::FrameSize;
use crate::trace::{trace_event, trace_span};
use crate::util::DetPostResult;

/// Runs the decode and suppression pipeline over successive frames.
///
/// The configuration is validated once at construction; processing a frame is
/// then a pure function of that frame's rows. No state survives between
/// frames, so one `Detector` can serve an entire stream.
pub struct Detector {
    cfg: DetectConfig,
}

impl Detector {
    /// Creates a detector, validating the configuration up front.
    pub fn new(cfg: DetectConfig) -> DetPostResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DetectConfig {
        &self.cfg
    }

    /// Processes one frame: decode, filter, and suppress.
    ///
    /// Returns the kept detections in confidence-descending order. Output is
    /// freshly allocated per frame; nothing is pooled or reused.
    pub fn process_frame(
        &self,
        raws: &[RawDetection],
        frame: FrameSize,
    ) -> DetPostResult<Vec<Detection>> {
        let _span = trace_span!("process_frame", rows = raws.len()).entered();

        let mut candidates = self.decode(raws, frame)?;
        let decoded = candidates.len();
        let kept = suppress(&mut candidates, self.cfg.suppression_threshold);
        trace_event!("frame_detections", decoded = decoded, kept = kept.len());
        Ok(kept)
    }

    #[cfg(feature = "rayon")]
    fn decode(&self, raws: &[RawDetection], frame: FrameSize) -> DetPostResult<Vec<Detection>> {
        if self.cfg.parallel {
            decode_frame_par(raws, frame, self.cfg.confidence_threshold)
        } else {
            decode_frame(raws, frame, self.cfg.confidence_threshold)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn decode(&self, raws: &[RawDetection], frame: FrameSize) -> DetPostResult<Vec<Detection>> {
        decode_frame(raws, frame, self.cfg.confidence_threshold)
    }
}
