//! On-disk image pools.
//!
//! Each plant's photos live in a folder under a common root, named after the
//! scientific name by [`image_folder_name`]. Fetching the photos is done by
//! separate tooling; this module only picks from what is already there.

use std::path::{Path, PathBuf};

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::traits::ImageSource;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

fn is_cultivar_word(word: &str) -> bool {
    word.eq_ignore_ascii_case("cultivar") || word.eq_ignore_ascii_case("cultivars")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Remove every whitespace-prefixed "cultivar" or "cultivars" word.
fn strip_cultivar_words(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(ws_start) = rest.find(char::is_whitespace) {
        let (head, tail) = rest.split_at(ws_start);
        out.push_str(head);

        let word_start = tail.len() - tail.trim_start().len();
        let after_ws = &tail[word_start..];
        let word_len = after_ws
            .find(|c: char| !is_word_char(c))
            .unwrap_or(after_ws.len());

        if is_cultivar_word(&after_ws[..word_len]) {
            rest = &after_ws[word_len..];
        } else {
            out.push_str(&tail[..word_start]);
            rest = after_ws;
        }
    }
    out.push_str(rest);
    out
}

/// Split into alternating runs of whitespace and non-whitespace.
fn whitespace_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let ws = c.is_whitespace();
        if prev.is_some_and(|p| p != ws) {
            runs.push(&s[start..i]);
            start = i;
        }
        prev = Some(ws);
    }
    if start < s.len() {
        runs.push(&s[start..]);
    }
    runs
}

/// Replace a standalone hybrid marker ` x ` with `_x_`.
fn join_hybrid_marker(name: &str) -> String {
    let is_ws = |run: &str| run.starts_with(char::is_whitespace);
    let runs = whitespace_runs(name);

    let mut out = String::with_capacity(name.len());
    let mut i = 0;
    while i < runs.len() {
        let hybrid = is_ws(runs[i])
            && runs.get(i + 1) == Some(&"x")
            && runs.get(i + 2).is_some_and(|r| is_ws(*r));
        if hybrid {
            out.push_str("_x_");
            i += 3;
        } else {
            out.push_str(runs[i]);
            i += 1;
        }
    }
    out
}

/// Folder name for a plant's images.
///
/// Drops a quoted cultivar suffix and any "cultivar(s)" word after the
/// first, joins a hybrid ` x ` as `_x_`, keeps word characters, whitespace
/// and hyphens, then turns each space into `_` and lowercases. Runs of
/// spaces are not collapsed.
pub fn image_folder_name(scientific_name: &str) -> String {
    let base = match scientific_name.find(|c| c == '\'' || c == '\u{2019}') {
        Some(i) => scientific_name[..i].trim_end(),
        None => scientific_name,
    };

    let name = join_hybrid_marker(&strip_cultivar_words(base));
    let cleaned: String = name
        .chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace() || *c == '-')
        .collect();

    cleaned
        .replace(' ', "_")
        .to_lowercase()
        .trim_matches('_')
        .to_string()
}

fn is_image(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| IMAGE_EXTENSIONS.iter().any(|x| e.eq_ignore_ascii_case(x)))
}

/// Image pools stored as one folder per plant under `root`.
#[derive(Debug, Clone)]
pub struct DirectoryImageSource {
    root: PathBuf,
}

impl DirectoryImageSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The folder holding a plant's images.
    pub fn folder_for(&self, scientific_name: &str) -> PathBuf {
        self.root.join(image_folder_name(scientific_name))
    }

    /// All images for a plant, sorted by path. Empty if the folder is
    /// missing or unreadable.
    pub fn images_for(&self, scientific_name: &str) -> Vec<PathBuf> {
        let folder = self.folder_for(scientific_name);
        let entries = match std::fs::read_dir(&folder) {
            Ok(entries) => entries,
            Err(_) => {
                tracing::debug!("no image folder at {}", folder.display());
                return Vec::new();
            }
        };

        let mut images: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| is_image(p))
            .collect();
        images.sort();
        images
    }

    /// Pick an image using the given random source.
    pub fn random_image_with<R: Rng + ?Sized>(
        &self,
        scientific_name: &str,
        rng: &mut R,
    ) -> Option<PathBuf> {
        self.images_for(scientific_name).choose(rng).cloned()
    }
}

impl ImageSource for DirectoryImageSource {
    fn random_image(&self, scientific_name: &str) -> Option<PathBuf> {
        self.random_image_with(scientific_name, &mut rand::rng())
    }
}
