use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

pub const DEFAULT_OUT_PATH: &str = "data.csv";

const HEADERS: [&str; 8] = ["", "Company", "Address", "City", "Zip", "Phone", "Fax", "Services"];

/// One company entry. Field order matches the output column order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub company: String,
    pub address: Option<String>,
    pub city: String,
    pub zip: Option<String>,
    pub phone: String,
    pub fax: String,
    pub services: Option<String>,
}

/// Write every batch into one table, page order then in-page order, with a
/// leading auto-increment index column. Absent fields become empty cells.
/// Returns the number of data rows written.
pub fn write_table(batches: &[Vec<Record>], path: &Path) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    writer.write_record(HEADERS)?;

    let mut rows = 0usize;
    for record in batches.iter().flatten() {
        writer.serialize((rows, record))?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

// ── Tests ──
