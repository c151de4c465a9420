//! The `plantquiz validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let plants = plantquiz_core::catalog::load_catalog(&catalog_path)
        .with_context(|| format!("invalid catalog {}", catalog_path.display()))?;

    println!(
        "Catalog: {} ({} plants)",
        catalog_path.display(),
        plants.len()
    );

    let warnings = plantquiz_core::catalog::validate_catalog(&plants);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.scientific_name, w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
