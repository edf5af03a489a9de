// File: src/persistence.rs
use crate::core::registry::CurrencyTable;
use crate::core::schema::CurrencyTableConfig;
use crate::error::Result;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Writes the table's source configuration as JSON. The file is written next
/// to `path` and renamed over it, so readers never see a partial table.
pub fn save_table(table: &CurrencyTable, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, table.config())?;
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), currencies = table.len(), "saved currency metadata");
    Ok(())
}

/// Reads and validates a table. Malformed metadata fails here, not during matching.
pub fn load_table(path: &Path) -> Result<CurrencyTable> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let config: CurrencyTableConfig = serde_json::from_reader(reader)?;
    CurrencyTable::from_config(config)
}
