//! CSV reading and domain extraction.

use crate::error::AppError;
use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;
use std::io::Read;

/// Column holding company domains unless configured otherwise.
pub const DEFAULT_DOMAIN_COLUMN: &str = "domain";

/// One CSV data row keyed by header name.
pub type CsvRow = HashMap<String, String>;

/// Turns uploaded CSV content into an ordered list of domains.
pub struct CsvService {
    domain_column: String,
}

impl CsvService {
    /// Creates a new CSV service reading domains from `domain_column`.
    pub fn new(domain_column: impl Into<String>) -> Self {
        Self {
            domain_column: domain_column.into(),
        }
    }

    pub fn domain_column(&self) -> &str {
        &self.domain_column
    }

    /// Parses CSV content into rows keyed by the header row.
    ///
    /// Headers and fields are trimmed. Rows whose fields are all empty are
    /// skipped. Short rows simply lack the missing columns.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Data`] if the content is not valid CSV or not UTF-8.
    pub fn read_rows<R: Read>(input: R) -> Result<Vec<CsvRow>, AppError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(input);

        let headers = reader.headers().map_err(csv_error)?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let row = headers
                .iter()
                .zip(record.iter())
                .map(|(header, value)| (header.to_string(), value.to_string()))
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }

    /// Extracts non-empty domain values in row order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] if the first row has no domain column
    /// (including when there are no rows at all).
    /// Returns [`AppError::Data`] if no row carries a domain.
    pub fn extract_domains(&self, rows: &[CsvRow]) -> Result<Vec<String>, AppError> {
        let has_column = rows
            .first()
            .is_some_and(|row| row.contains_key(&self.domain_column));
        if !has_column {
            return Err(AppError::configuration(format!(
                "CSV must have a column named '{}'.",
                self.domain_column
            )));
        }

        let domains: Vec<String> = rows
            .iter()
            .filter_map(|row| row.get(&self.domain_column))
            .filter(|value| !value.is_empty())
            .cloned()
            .collect();

        if domains.is_empty() {
            return Err(AppError::data("No domains found in the specified column."));
        }

        Ok(domains)
    }

    /// Reads CSV content and extracts its domains in one step.
    pub fn domains_from_csv<R: Read>(&self, input: R) -> Result<Vec<String>, AppError> {
        let rows = Self::read_rows(input)?;
        tracing::debug!(rows = rows.len(), column = %self.domain_column, "CSV parsed");
        self.extract_domains(&rows)
    }
}

impl Default for CsvService {
    fn default() -> Self {
        Self::new(DEFAULT_DOMAIN_COLUMN)
    }
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::data(format!("Failed to parse CSV: {e}"))
}
