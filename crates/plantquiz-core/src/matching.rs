//! Fuzzy answer matching.
//!
//! Answers are compared after normalization with a percentage similarity
//! based on indel distance (insertions and deletions only). A threshold of
//! 85 tolerates roughly one typo on typical plant-name lengths without
//! accepting a different word.

use serde::{Deserialize, Serialize};

/// Default minimum similarity (0-100) for an answer to be accepted.
pub const DEFAULT_THRESHOLD: u8 = 85;

/// The best scoring accepted option for an input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The accepted option as written in the catalog.
    pub option: String,
    /// Similarity between 0.0 and 100.0.
    pub score: f64,
}

impl MatchOutcome {
    pub fn passes(&self, threshold: u8) -> bool {
        self.score >= f64::from(threshold)
    }
}

/// Lowercase, drop everything that is neither alphanumeric nor whitespace
/// (underscores included), and trim.
pub fn normalize(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.trim().to_string()
}

/// Length of the longest common subsequence of two char slices.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Number of single-character insertions and deletions needed to turn `a`
/// into `b`.
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    a_chars.len() + b_chars.len() - 2 * lcs_len(&a_chars, &b_chars)
}

/// Normalized indel similarity in `[0.0, 100.0]`.
///
/// `ratio = 100 * (1 - indel / (len(a) + len(b)))`, which simplifies to
/// `200 * lcs / (len(a) + len(b))`. Two empty strings are identical (100).
pub fn ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 100.0;
    }

    let common = lcs_len(&a_chars, &b_chars);
    100.0 * (2 * common) as f64 / total as f64
}

/// Find the accepted option most similar to `input`.
///
/// Returns `None` when the normalized input is empty or there are no
/// options. Ties keep the first option.
pub fn best_match<S: AsRef<str>>(input: &str, accepted: &[S]) -> Option<MatchOutcome> {
    let user = normalize(input);
    if user.is_empty() {
        return None;
    }

    let mut best: Option<MatchOutcome> = None;
    for option in accepted {
        let option = option.as_ref();
        let score = ratio(&user, &normalize(option));
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(MatchOutcome {
                option: option.to_string(),
                score,
            });
        }
    }
    best
}

/// Whether `input` fuzzily equals any of the `accepted` strings.
///
/// An input that normalizes to the empty string never matches, even when an
/// accepted option is itself empty.
pub fn is_match<S: AsRef<str>>(input: &str, accepted: &[S], threshold: u8) -> bool {
    let user = normalize(input);
    if user.is_empty() {
        return false;
    }

    accepted
        .iter()
        .any(|option| ratio(&user, &normalize(option.as_ref())) >= f64::from(threshold))
}
