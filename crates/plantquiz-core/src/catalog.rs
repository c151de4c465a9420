//! CSV plant catalog loader.
//!
//! Loads the list of quizzable plants from a CSV file with a header row,
//! validates it, and selects the practice subset.

use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::matching::normalize;
use crate::model::Plant;

/// Accepted header names for the scientific-name column.
const SCIENTIFIC_COLUMNS: &[&str] = &["scientific_name", "latin"];
/// Accepted header names for the common-names column.
const COMMON_COLUMNS: &[&str] = &["accepted_common_names", "dutch"];
/// Separator between common names inside one cell.
pub const COMMON_NAME_SEPARATOR: char = ';';

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.eq_ignore_ascii_case(n)))
}

/// Load a catalog from a CSV file.
pub fn load_catalog(path: &Path) -> Result<Vec<Plant>, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let plants = parse_catalog(file)?;
    tracing::info!("loaded {} plants from {}", plants.len(), path.display());
    Ok(plants)
}

/// Parse a catalog from any reader (useful for testing).
pub fn parse_catalog<R: Read>(reader: R) -> Result<Vec<Plant>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let scientific_idx = find_column(&headers, SCIENTIFIC_COLUMNS)
        .ok_or(CatalogError::MissingColumn(SCIENTIFIC_COLUMNS[0]))?;
    let common_idx = find_column(&headers, COMMON_COLUMNS)
        .ok_or(CatalogError::MissingColumn(COMMON_COLUMNS[0]))?;

    let mut plants = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        // Row 1 is the header.
        let row = i + 2;

        let scientific_name = record.get(scientific_idx).unwrap_or_default().trim();
        if scientific_name.is_empty() {
            return Err(CatalogError::EmptyField {
                row,
                column: SCIENTIFIC_COLUMNS[0],
            });
        }

        let common_names = split_common_names(record.get(common_idx).unwrap_or_default());
        if common_names.is_empty() {
            return Err(CatalogError::EmptyField {
                row,
                column: COMMON_COLUMNS[0],
            });
        }

        plants.push(Plant::new(scientific_name, common_names));
    }

    Ok(plants)
}

/// Parse a catalog held in a string.
pub fn parse_catalog_str(content: &str) -> Result<Vec<Plant>, CatalogError> {
    parse_catalog(content.as_bytes())
}

fn split_common_names(cell: &str) -> Vec<String> {
    cell.split(COMMON_NAME_SEPARATOR)
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

/// The plants whose scientific name is in `mistakes`, in catalog order.
pub fn practice_plants(catalog: &[Plant], mistakes: &BTreeSet<String>) -> Vec<Plant> {
    catalog
        .iter()
        .filter(|p| mistakes.contains(&p.scientific_name))
        .cloned()
        .collect()
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The plant the warning refers to.
    pub scientific_name: String,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(plants: &[Plant]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate scientific names make mistake tracking ambiguous
    let mut seen = HashSet::new();
    for plant in plants {
        if !seen.insert(normalize(&plant.scientific_name)) {
            warnings.push(ValidationWarning {
                scientific_name: plant.scientific_name.clone(),
                message: format!("duplicate scientific name: {}", plant.scientific_name),
            });
        }
    }

    for plant in plants {
        let mut names = HashSet::new();
        for name in &plant.common_names {
            if !names.insert(normalize(name)) {
                warnings.push(ValidationWarning {
                    scientific_name: plant.scientific_name.clone(),
                    message: format!("common name listed twice: {name}"),
                });
            }
        }
    }

    // Names made only of punctuation can never be answered
    for plant in plants {
        if normalize(&plant.scientific_name).is_empty() {
            warnings.push(ValidationWarning {
                scientific_name: plant.scientific_name.clone(),
                message: "scientific name has no letters or digits".into(),
            });
        }
    }

    warnings
}
