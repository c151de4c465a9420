//! The `plantquiz mistakes` command.

use std::path::PathBuf;

use anyhow::Result;

use plantquiz_core::config::load_config_from;
use plantquiz_core::progress::ProgressStore;

pub fn execute(data_dir: Option<PathBuf>, clear: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = ProgressStore::open(data_dir.unwrap_or(config.data_dir))?;

    let mistakes = store.mistakes();

    if clear {
        store.reset_mistakes()?;
        println!("Cleared {} mistake(s).", mistakes.len());
        return Ok(());
    }

    if mistakes.is_empty() {
        println!("No mistakes recorded.");
        return Ok(());
    }

    println!("{} plant(s) to practice:", mistakes.len());
    for name in &mistakes {
        println!("  {name}");
    }

    Ok(())
}
