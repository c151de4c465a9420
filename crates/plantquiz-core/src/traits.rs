//! Trait definitions for the quiz's external collaborators.
//!
//! The progress store persists through a [`ProgressBackend`] and the host
//! looks up photos through an [`ImageSource`]. `plantquiz-core` ships a
//! JSON-directory backend and a directory image source; tests substitute
//! their own.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::model::SessionRecord;

// ---------------------------------------------------------------------------
// Progress persistence
// ---------------------------------------------------------------------------

/// Session history plus the running high score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressHistory {
    /// Recorded sessions, oldest first.
    #[serde(default)]
    pub sessions: Vec<SessionRecord>,
    /// Highest score ever recorded.
    #[serde(default)]
    pub high_score: u32,
}

/// Durable storage for the two progress collections.
///
/// Loads never fail: missing or unreadable state comes back as the empty
/// default. Saves overwrite the whole collection.
pub trait ProgressBackend {
    /// Read the session history.
    fn load_history(&self) -> ProgressHistory;

    /// Overwrite the session history.
    fn save_history(&self, history: &ProgressHistory) -> Result<()>;

    /// Read the mistake set.
    fn load_mistakes(&self) -> BTreeSet<String>;

    /// Overwrite the mistake set.
    fn save_mistakes(&self, mistakes: &BTreeSet<String>) -> Result<()>;
}

// ---------------------------------------------------------------------------
// Image lookup
// ---------------------------------------------------------------------------

/// Source of photographs for a plant.
pub trait ImageSource {
    /// Pick one image for the plant at random, or `None` when its pool is
    /// empty.
    fn random_image(&self, scientific_name: &str) -> Option<PathBuf>;
}
