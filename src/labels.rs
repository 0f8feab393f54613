//! Class labels and per-class display colors.
//!
//! The label set is the ordered list of class names the model was trained
//! on, loaded once per process; `class_id` indexes into it. Colors exist for
//! presenters that annotate frames: one RGB triple per class, drawn from a
//! fixed-seed generator so the same class keeps the same color across runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed for the color generator; fixed so colors are reproducible.
const COLOR_SEED: u64 = 42;

/// Ordered, immutable set of class names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelSet {
    names: Vec<String>,
}

impl LabelSet {
    /// Builds a label set from an owned list of names.
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Parses a newline-separated names file's contents.
    ///
    /// Lines are trimmed and blank lines skipped; line order defines class
    /// ids. The caller performs the file read.
    pub fn from_lines(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect();
        Self { names }
    }

    /// Returns the name for a class id, if the id is in range.
    pub fn get(&self, class_id: usize) -> Option<&str> {
        self.names.get(class_id).map(String::as_str)
    }

    /// Returns the number of classes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when the set holds no classes.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One RGB color per class, stable across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassColors {
    colors: Vec<[u8; 3]>,
}

impl ClassColors {
    /// Generates `count` colors from the fixed seed.
    pub fn seeded(count: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(COLOR_SEED);
        let colors = (0..count)
            .map(|_| {
                [
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                ]
            })
            .collect();
        Self { colors }
    }

    /// Generates one color per class in `labels`.
    pub fn for_labels(labels: &LabelSet) -> Self {
        Self::seeded(labels.len())
    }

    /// Returns the color for a class id, if the id is in range.
    pub fn get(&self, class_id: usize) -> Option<[u8; 3]> {
        self.colors.get(class_id).copied()
    }

    /// Returns the number of colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true when no colors were generated.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
