// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};

use crate::edgar::models::AnnualFiling;
use crate::statements::StatementRow;
use crate::utils::error::StorageError;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Writes one statement as a single-row CSV table: a header of the
    /// present labels and one record of their values. An empty row still
    /// produces its (empty) file so a successful run always yields all
    /// three tables.
    pub fn save_statement(
        &self,
        ticker: &str,
        statement_name: &str,
        row: &StatementRow,
    ) -> Result<PathBuf, StorageError> {
        let filename = format!("{}_{}.csv", ticker, statement_name);
        let file_path = self.base_dir.join(filename);

        let mut writer = csv::Writer::from_path(&file_path)?;
        if row.is_empty() {
            tracing::warn!("No line items found for {}; table is empty", statement_name);
        } else {
            writer.write_record(row.values.iter().map(|(label, _)| *label))?;
            writer.write_record(row.values.iter().map(|(_, value)| value.to_string()))?;
        }
        writer.flush()?;

        tracing::info!("Saved {} to {}", statement_name, file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the processed filing in JSON format
    pub fn save_filing_metadata(
        &self,
        ticker: &str,
        company_name: &str,
        cik: &str,
        filing: &AnnualFiling,
    ) -> Result<PathBuf, StorageError> {
        let filename = format!("{}_filing_meta.json", ticker);
        let file_path = self.base_dir.join(filename);

        let metadata = serde_json::json!({
            "ticker": ticker,
            "company_name": company_name,
            "cik": cik,
            "accession_number": filing.accession_number,
            "filing_date": filing.filing_date,
            "retrieved_at": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        fs::write(&file_path, metadata_str)?;

        tracing::info!("Saved metadata to {}", file_path.display());

        Ok(file_path)
    }
}
