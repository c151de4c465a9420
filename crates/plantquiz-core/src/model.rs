//! Core data model types for plantquiz.
//!
//! These are the records shared between the catalog, the quiz session and
//! the progress store.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single quizzable plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Canonical scientific name; unique within a catalog.
    pub scientific_name: String,
    /// Accepted common-language names. Never empty for a loaded plant.
    pub common_names: Vec<String>,
}

impl Plant {
    pub fn new(scientific_name: impl Into<String>, common_names: Vec<String>) -> Self {
        Self {
            scientific_name: scientific_name.into(),
            common_names,
        }
    }

    /// The name shown to the user when their common-name answer was wrong.
    pub fn primary_common_name(&self) -> &str {
        self.common_names
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }
}

impl fmt::Display for Plant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.scientific_name, self.common_names.join(", "))
    }
}

/// Outcome of checking one question's two answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerCheck {
    pub common_correct: bool,
    pub scientific_correct: bool,
}

impl AnswerCheck {
    /// Both sub-answers were accepted.
    pub fn all_correct(&self) -> bool {
        self.common_correct && self.scientific_correct
    }
}

impl From<AnswerCheck> for (bool, bool) {
    fn from(check: AnswerCheck) -> Self {
        (check.common_correct, check.scientific_correct)
    }
}

/// One finished session, as stored in the progress history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Local calendar date the session was recorded.
    pub date: NaiveDate,
    pub score: u32,
    pub max_score: u32,
    pub grade: f64,
}

/// Final tally of a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Number of plants in the session.
    pub questions: usize,
    pub common_correct: u32,
    pub scientific_correct: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub grade: f64,
}
