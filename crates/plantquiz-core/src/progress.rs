//! Durable progress: session history, high score and the mistake set.
//!
//! Every mutation is a synchronous read-modify-write of its collection, so
//! nothing is cached between calls. The two collections are written
//! independently.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::model::{AnswerCheck, SessionRecord};
use crate::traits::{ProgressBackend, ProgressHistory};

const HISTORY_FILE: &str = "progress.json";
const MISTAKES_FILE: &str = "mistakes.json";

/// Stores both collections as pretty-printed JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonDirBackend {
    dir: PathBuf,
}

impl JsonDirBackend {
    /// Use `dir` for storage, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    pub fn mistakes_path(&self) -> PathBuf {
        self.dir.join(MISTAKES_FILE)
    }
}

/// Read a JSON file, falling back to the default on any failure.
fn load_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    if !path.exists() {
        return T::default();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            tracing::warn!("ignoring unreadable {}: {}", path.display(), e);
            return T::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("ignoring corrupt {}: {}", path.display(), e);
            T::default()
        }
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize progress")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!("saved {}", path.display());
    Ok(())
}

impl ProgressBackend for JsonDirBackend {
    fn load_history(&self) -> ProgressHistory {
        load_json(&self.history_path())
    }

    fn save_history(&self, history: &ProgressHistory) -> Result<()> {
        save_json(&self.history_path(), history)
    }

    fn load_mistakes(&self) -> BTreeSet<String> {
        load_json(&self.mistakes_path())
    }

    fn save_mistakes(&self, mistakes: &BTreeSet<String>) -> Result<()> {
        save_json(&self.mistakes_path(), mistakes)
    }
}

/// Session history and mistake tracking on top of a [`ProgressBackend`].
#[derive(Debug, Clone)]
pub struct ProgressStore<B = JsonDirBackend> {
    backend: B,
}

impl ProgressStore<JsonDirBackend> {
    /// Open (or create) the JSON store in `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(JsonDirBackend::new(dir)?))
    }
}

impl<B: ProgressBackend> ProgressStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Append a session dated today and raise the high score if beaten.
    pub fn record_session(&self, score: u32, max_score: u32, grade: f64) -> Result<SessionRecord> {
        self.record_session_on(Local::now().date_naive(), score, max_score, grade)
    }

    /// Append a session with an explicit date.
    pub fn record_session_on(
        &self,
        date: NaiveDate,
        score: u32,
        max_score: u32,
        grade: f64,
    ) -> Result<SessionRecord> {
        let record = SessionRecord {
            date,
            score,
            max_score,
            grade,
        };

        let mut history = self.backend.load_history();
        history.sessions.push(record.clone());
        history.high_score = history.high_score.max(score);
        self.backend.save_history(&history)?;

        tracing::debug!(
            "recorded session {}/{} (grade {}) on {}",
            score,
            max_score,
            grade,
            date
        );
        Ok(record)
    }

    /// Add a plant to the mistake set. Returns `true` if it was not there.
    pub fn mark_mistake(&self, scientific_name: &str) -> Result<bool> {
        let mut mistakes = self.backend.load_mistakes();
        if !mistakes.insert(scientific_name.to_string()) {
            return Ok(false);
        }
        self.backend.save_mistakes(&mistakes)?;
        tracing::debug!("marked mistake: {scientific_name}");
        Ok(true)
    }

    /// Remove a plant from the mistake set. Returns `true` if it was there.
    pub fn clear_mistake(&self, scientific_name: &str) -> Result<bool> {
        let mut mistakes = self.backend.load_mistakes();
        if !mistakes.remove(scientific_name) {
            return Ok(false);
        }
        self.backend.save_mistakes(&mistakes)?;
        tracing::debug!("cleared mistake: {scientific_name}");
        Ok(true)
    }

    /// Update the mistake set after a non-practice answer: any wrong
    /// sub-answer marks the plant, two right ones clear it.
    pub fn apply_answer(&self, scientific_name: &str, check: AnswerCheck) -> Result<()> {
        if check.all_correct() {
            self.clear_mistake(scientific_name)?;
        } else {
            self.mark_mistake(scientific_name)?;
        }
        Ok(())
    }

    /// Empty the mistake set.
    pub fn reset_mistakes(&self) -> Result<()> {
        self.backend.save_mistakes(&BTreeSet::new())
    }

    pub fn mistakes(&self) -> BTreeSet<String> {
        self.backend.load_mistakes()
    }

    pub fn history(&self) -> ProgressHistory {
        self.backend.load_history()
    }

    pub fn sessions(&self) -> Vec<SessionRecord> {
        self.backend.load_history().sessions
    }

    pub fn high_score(&self) -> u32 {
        self.backend.load_history().high_score
    }
}
