//! plantquiz-core: answer matching, quiz sessions, and progress tracking.
//!
//! This crate defines the plant catalog, the fuzzy answer matcher, the quiz
//! state machine and the durable progress store that the `plantquiz` CLI
//! builds on.

pub mod catalog;
pub mod config;
pub mod error;
pub mod images;
pub mod matching;
pub mod model;
pub mod progress;
pub mod session;
pub mod traits;

pub use catalog::{load_catalog, practice_plants, validate_catalog};
pub use config::{load_config, load_config_from, PlantQuizConfig};
pub use error::CatalogError;
pub use matching::{is_match, DEFAULT_THRESHOLD};
pub use model::{AnswerCheck, Plant, SessionRecord, SessionSummary};
pub use progress::{JsonDirBackend, ProgressStore};
pub use session::QuizSession;
