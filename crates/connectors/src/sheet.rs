use crate::error::SourceError;
use async_trait::async_trait;
use model::sheet::{Cell, SheetRow, SheetSnapshot};
use std::time::Duration;
use tracing::debug;

const EXPORT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
const FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Retrieves the full current snapshot of one sheet.
#[async_trait]
pub trait SheetSource: Send + Sync {
    async fn fetch(&self, sheet_id: &str) -> Result<SheetSnapshot, SourceError>;
}

/// Fetches a published spreadsheet through its CSV export endpoint.
pub struct CsvExportSource {
    client: reqwest::Client,
    base_url: String,
}

impl CsvExportSource {
    pub fn new() -> Result<Self, SourceError> {
        Self::with_base_url(EXPORT_BASE_URL)
    }

    /// Overrides the export base URL; used against local fixtures in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn export_url(&self, sheet_id: &str) -> String {
        format!("{}/{}/export?format=csv", self.base_url, sheet_id)
    }
}

#[async_trait]
impl SheetSource for CsvExportSource {
    async fn fetch(&self, sheet_id: &str) -> Result<SheetSnapshot, SourceError> {
        let url = self.export_url(sheet_id);
        debug!(sheet_id, url = %url, "Fetching sheet snapshot");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unreachable(format!(
                "sheet export returned HTTP {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Unreachable(e.to_string()))?;

        parse_snapshot(&body)
    }
}

/// Parses a CSV body into a snapshot. Column names are trimmed; cells missing
/// from short records become empty strings so absence never propagates as a
/// null-like sentinel downstream.
fn parse_snapshot(body: &str) -> Result<SheetSnapshot, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| SourceError::Malformed(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SourceError::Malformed(e.to_string()))?;
        let cells = columns
            .iter()
            .enumerate()
            .map(|(i, column)| Cell {
                column: column.clone(),
                value: record.get(i).unwrap_or("").to_string(),
            })
            .collect();
        rows.push(SheetRow::new(cells));
    }

    Ok(SheetSnapshot { columns, rows })
}
