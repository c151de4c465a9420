//! plantquiz configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::matching::DEFAULT_THRESHOLD;

/// Top-level plantquiz configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantQuizConfig {
    /// CSV catalog of quizzable plants.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// Directory for progress and mistake files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Root of the per-plant image folders.
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,
    /// Minimum similarity (0-100) for an answer to count.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    /// How often the user may ask for another photo per question.
    #[serde(default = "default_image_refreshes")]
    pub max_image_refreshes: u32,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("data/plants.csv")
}
fn default_data_dir() -> PathBuf {
    PathBuf::from("cache")
}
fn default_images_dir() -> PathBuf {
    PathBuf::from("cache/images")
}
fn default_threshold() -> u8 {
    DEFAULT_THRESHOLD
}
fn default_image_refreshes() -> u32 {
    2
}

impl Default for PlantQuizConfig {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            data_dir: default_data_dir(),
            images_dir: default_images_dir(),
            threshold: default_threshold(),
            max_image_refreshes: default_image_refreshes(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

fn resolve_path(path: &Path) -> PathBuf {
    PathBuf::from(resolve_env_vars(&path.to_string_lossy()))
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `plantquiz.toml` in the current directory
/// 2. `~/.config/plantquiz/config.toml`
///
/// Environment variable overrides: `PLANTQUIZ_CATALOG`, `PLANTQUIZ_DATA_DIR`.
pub fn load_config() -> Result<PlantQuizConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<PlantQuizConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("plantquiz.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => PlantQuizConfig::default(),
    };

    if let Ok(catalog) = std::env::var("PLANTQUIZ_CATALOG") {
        config.catalog = PathBuf::from(catalog);
    }
    if let Ok(data_dir) = std::env::var("PLANTQUIZ_DATA_DIR") {
        config.data_dir = PathBuf::from(data_dir);
    }

    config.catalog = resolve_path(&config.catalog);
    config.data_dir = resolve_path(&config.data_dir);
    config.images_dir = resolve_path(&config.images_dir);

    Ok(config)
}

/// Parse a TOML config string and check value ranges.
pub fn parse_config_str(content: &str) -> Result<PlantQuizConfig> {
    let config: PlantQuizConfig = toml::from_str(content)?;
    anyhow::ensure!(
        config.threshold <= 100,
        "threshold must be between 0 and 100, got {}",
        config.threshold
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("plantquiz"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_PLANTQUIZ_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_PLANTQUIZ_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_PLANTQUIZ_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no_vars"), "no_vars");
        assert_eq!(resolve_env_vars("${unterminated"), "${unterminated");
        std::env::remove_var("_PLANTQUIZ_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = PlantQuizConfig::default();
        assert_eq!(config.threshold, 85);
        assert_eq!(config.max_image_refreshes, 2);
        assert_eq!(config.catalog, PathBuf::from("data/plants.csv"));
    }

    #[test]
    fn parse_partial_config() {
        let config = parse_config_str(
            r#"
catalog = "plants/trees.csv"
threshold = 90
"#,
        )
        .unwrap();
        assert_eq!(config.catalog, PathBuf::from("plants/trees.csv"));
        assert_eq!(config.threshold, 90);
        assert_eq!(config.data_dir, PathBuf::from("cache"));
        assert_eq!(config.max_image_refreshes, 2);
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        assert!(parse_config_str("threshold = 101").is_err());
        assert!(parse_config_str("threshold = 300").is_err());
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_expands_env_vars() {
        std::env::set_var("_PLANTQUIZ_IMAGES_ROOT", "/srv/photos");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plantquiz.toml");
        std::fs::write(&path, "images_dir = \"${_PLANTQUIZ_IMAGES_ROOT}/powo\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.images_dir, PathBuf::from("/srv/photos/powo"));
        std::env::remove_var("_PLANTQUIZ_IMAGES_ROOT");
    }
}
