//! Catalog loader for CSV tables.
//!
//! The table needs a header row naming at least a title column and a tags
//! column. Any other columns are ignored. The default column names match the
//! streaming-catalog export the recommender was first built against:
//!
//! ```text
//! show_id,type,title,listed inside,description
//! s1,TV Show,Dark,"International TV Shows, TV Dramas, TV Mysteries",...
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Catalog, CatalogEntry};

/// Header names of the columns the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Columns {
    pub title: String,
    pub tags: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            title: String::from("title"),
            tags: String::from("listed inside"),
        }
    }
}

/// Load a catalog from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, is not valid CSV, or lacks
/// one of the required columns.
pub fn load_catalog(path: &Path, columns: &Columns) -> Result<Catalog> {
    let file = File::open(path)?;
    let catalog = read_catalog(file, columns)?;
    log::info!(
        "Loaded {} catalog entries from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Cell values treated as missing, in addition to empty cells.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(value: &str) -> bool {
    value.is_empty() || MISSING_MARKERS.contains(&value)
}

/// Read a catalog from any CSV source.
///
/// Rows whose title or tags are empty, absent (short rows), or a missing
/// marker such as `NA` are dropped. When a title repeats, the first row wins.
///
/// # Errors
///
/// Returns an error if the input is not valid CSV, has no header, lacks one
/// of the required columns, or has a row with more fields than the header.
pub fn read_catalog<R: Read>(reader: R, columns: &Columns) -> Result<Catalog> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(Error::InvalidData(String::from("catalog has no header row")));
    }

    let title_pos = column_position(&headers, &columns.title)?;
    let tags_pos = column_position(&headers, &columns.tags)?;

    let mut rows = 0usize;
    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows += 1;

        if record.len() > headers.len() {
            return Err(Error::InvalidData(format!(
                "row {} has {} fields, header has {}",
                rows,
                record.len(),
                headers.len()
            )));
        }

        let title = record.get(title_pos).unwrap_or_default().trim();
        let tags = record.get(tags_pos).unwrap_or_default().trim();
        if is_missing(title) || is_missing(tags) {
            log::debug!("Skipping row {} with missing title or tags", rows);
            continue;
        }
        entries.push(CatalogEntry::new(title, tags));
    }

    let catalog = Catalog::from_entries(entries);
    log::debug!("Read {} rows, kept {} entries", rows, catalog.len());
    Ok(catalog)
}

fn column_position(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })
}
