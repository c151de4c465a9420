//! The quiz state machine.
//!
//! A session walks a shuffled copy of its plants once. It is *active* while
//! the cursor is below the number of plants and *done* once the cursor
//! reaches it; done is terminal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::matching::{is_match, DEFAULT_THRESHOLD};
use crate::model::{AnswerCheck, Plant, SessionSummary};

/// Points for a correct common name.
pub const COMMON_POINTS: u32 = 1;
/// Points for a correct scientific name.
pub const SCIENTIFIC_POINTS: u32 = 2;
/// Maximum points per question.
pub const POINTS_PER_QUESTION: u32 = COMMON_POINTS + SCIENTIFIC_POINTS;

/// One pass through a shuffled set of plants.
#[derive(Debug, Clone)]
pub struct QuizSession {
    plants: Vec<Plant>,
    index: usize,
    common_correct: u32,
    scientific_correct: u32,
    threshold: u8,
}

impl QuizSession {
    /// Start a session over a uniformly shuffled copy of `plants`.
    pub fn new(plants: Vec<Plant>) -> Self {
        Self::with_rng(plants, &mut rand::rng())
    }

    /// Start a session, shuffling with the given random source.
    pub fn with_rng<R: Rng + ?Sized>(mut plants: Vec<Plant>, rng: &mut R) -> Self {
        plants.shuffle(rng);
        tracing::debug!("starting quiz session with {} plants", plants.len());
        Self {
            plants,
            index: 0,
            common_correct: 0,
            scientific_correct: 0,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Override the match threshold (0-100).
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold.min(100);
        self
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// The plants in quiz order.
    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Zero-based cursor; equals [`len`](Self::len) when done.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.plants.len()
    }

    /// The plant being asked, or `None` once done.
    pub fn current(&self) -> Option<&Plant> {
        self.plants.get(self.index)
    }

    pub fn common_correct(&self) -> u32 {
        self.common_correct
    }

    pub fn scientific_correct(&self) -> u32 {
        self.scientific_correct
    }

    /// Check both answers for the current plant and score them.
    ///
    /// Does not advance. Each call scores again, so hosts must check at most
    /// once per plant. Once done, returns two `false`s and changes nothing.
    pub fn check(&mut self, common_input: &str, scientific_input: &str) -> AnswerCheck {
        let Some(plant) = self.plants.get(self.index) else {
            return AnswerCheck::default();
        };

        let result = AnswerCheck {
            common_correct: is_match(common_input, plant.common_names.as_slice(), self.threshold),
            scientific_correct: is_match(
                scientific_input,
                std::slice::from_ref(&plant.scientific_name),
                self.threshold,
            ),
        };

        if result.common_correct {
            self.common_correct += 1;
        }
        if result.scientific_correct {
            self.scientific_correct += 1;
        }

        tracing::debug!(
            "checked {}: common={} scientific={}",
            plant.scientific_name,
            result.common_correct,
            result.scientific_correct
        );
        result
    }

    /// Move to the next plant; a no-op once done.
    pub fn advance(&mut self) {
        if self.index < self.plants.len() {
            self.index += 1;
        }
    }

    /// Common names count once, scientific names twice.
    pub fn total_score(&self) -> u32 {
        self.common_correct * COMMON_POINTS + self.scientific_correct * SCIENTIFIC_POINTS
    }

    pub fn max_score(&self) -> u32 {
        self.plants.len() as u32 * POINTS_PER_QUESTION
    }

    /// Maximum score over the questions asked so far.
    pub fn max_score_so_far(&self) -> u32 {
        self.index as u32 * POINTS_PER_QUESTION
    }

    /// Grade on a 1.0 to 10.0 scale, rounded to one decimal with ties to
    /// even (3.25 grades 3.2).
    ///
    /// An empty session grades 1.0.
    pub fn grade(&self) -> f64 {
        let max = self.max_score();
        if max == 0 {
            return 1.0;
        }
        let raw = f64::from(self.total_score()) / f64::from(max) * 9.0 + 1.0;
        (raw * 10.0).round_ties_even() / 10.0
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            questions: self.plants.len(),
            common_correct: self.common_correct,
            scientific_correct: self.scientific_correct,
            total_score: self.total_score(),
            max_score: self.max_score(),
            grade: self.grade(),
        }
    }
}
