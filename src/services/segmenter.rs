// src/services/segmenter.rs

//! Activity segmentation.
//!
//! A single pass over extracted fragments: digit-free fragments longer than
//! the title threshold open a new activity, fragments with a digit are date
//! tokens of the open activity, and everything else is skipped.

use crate::models::{Activity, ExtractionConfig};
use crate::utils::has_digit;

/// How a fragment is classified by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Title,
    DateToken,
    Noise,
}

/// Splits fragments into titled activities.
#[derive(Debug, Clone)]
pub struct ActivitySegmenter {
    min_title_chars: usize,
}

impl ActivitySegmenter {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_title_chars: config.min_title_chars,
        }
    }

    /// Classify a single fragment.
    pub fn classify(&self, fragment: &str) -> FragmentKind {
        if has_digit(fragment) {
            FragmentKind::DateToken
        } else if fragment.chars().count() > self.min_title_chars {
            FragmentKind::Title
        } else {
            FragmentKind::Noise
        }
    }

    /// Group fragments into activities.
    ///
    /// Date tokens seen before the first title are discarded. Activities
    /// without dates are kept.
    pub fn segment<S: AsRef<str>>(&self, fragments: &[S]) -> Vec<Activity> {
        let mut activities: Vec<Activity> = Vec::new();
        let mut orphaned = 0usize;

        for fragment in fragments {
            let fragment = fragment.as_ref();
            match self.classify(fragment) {
                FragmentKind::Title => activities.push(Activity::new(fragment)),
                FragmentKind::DateToken => match activities.last_mut() {
                    Some(current) => current.dates.push(fragment.to_string()),
                    None => orphaned += 1,
                },
                FragmentKind::Noise => {}
            }
        }

        if orphaned > 0 {
            log::debug!("Discarded {} date token(s) before the first title", orphaned);
        }
        activities
    }
}

impl Default for ActivitySegmenter {
    fn default() -> Self {
        Self::new(&ExtractionConfig::default())
    }
}
