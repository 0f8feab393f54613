//! Error types for detpost.

use thiserror::Error;

/// Result alias for detpost operations.
pub type DetPostResult<T> = std::result::Result<T, DetPostError>;

/// Errors that can occur while configuring or running the pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetPostError {
    /// A threshold lies outside the open interval (0, 1).
    #[error("invalid {name} {value}: must lie in the open interval (0, 1)")]
    InvalidThreshold {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Frame dimensions include a zero side.
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidFrame {
        /// Frame width in pixels.
        width: u32,
        /// Frame height in pixels.
        height: u32,
    },
    /// A raw detection carried an empty class score vector.
    #[error("empty class score vector in raw detection {index}")]
    EmptyScores {
        /// Index of the raw detection in the frame's scan order.
        index: usize,
    },
    /// A raw detection carried a non-finite class score.
    #[error("non-finite score {value} for class {class_id} in raw detection {index}")]
    NonFiniteScore {
        /// Index of the raw detection in the frame's scan order.
        index: usize,
        /// Class whose score is non-finite.
        class_id: usize,
        /// The offending score value.
        value: f32,
    },
}
