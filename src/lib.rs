//! Detection decoding and suppression for live object-detection streams.
//!
//! Given one frame's raw network output rows and the frame dimensions, this
//! crate filters rows on class confidence, de-normalizes boxes into pixel
//! coordinates, and removes redundant overlaps with greedy non-maximum
//! suppression. Each frame is an independent unit of work; optional
//! parallelism over rows is available via the `rayon` feature.

mod candidate;
pub mod config;
mod decode;
mod detector;
pub mod geom;
pub mod labels;
mod trace;
pub mod util;

pub use candidate::nms::suppress;
pub use candidate::Detection;
pub use config::DetectConfig;
#[cfg(feature = "rayon")]
pub use decode::decode_frame_par;
pub use decode::{decode_frame, RawDetection};
pub use detector::Detector;
pub use geom::{BBox, FrameSize};
pub use labels::{ClassColors, LabelSet};
pub use util::{DetPostError, DetPostResult};
