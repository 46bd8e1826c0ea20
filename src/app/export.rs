use crate::core::engine::SourceRun;
use crate::core::table::default_header;
use crate::domain::model::SalaryReport;
use crate::domain::ports::Storage;
use crate::utils::error::{Result, SalaryError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub const JSON_REPORT_FILE: &str = "report.json";

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    generated_at: DateTime<Utc>,
    reports: Vec<&'a SalaryReport>,
}

pub fn csv_file_name(report: &SalaryReport) -> String {
    format!("{}_stats.csv", report.source)
}

/// CSV with the table header (or the default one) and empty cells for missing stats.
pub fn report_to_csv(report: &SalaryReport, header: Option<&[String]>) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    match header {
        Some(header) => writer.write_record(header)?,
        None => writer.write_record(default_header())?,
    }

    for entry in &report.entries {
        let mut record = vec![entry.keyword.clone()];
        record.extend(
            entry
                .stats
                .values()
                .iter()
                .map(|value| value.map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| SalaryError::IoError(e.into_error()))
}

pub struct ReportExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes one CSV per source plus a combined JSON document. Returns the file names.
    pub async fn export(&self, runs: &[SourceRun]) -> Result<Vec<String>> {
        let mut written = Vec::with_capacity(runs.len() + 1);

        for run in runs {
            let file_name = csv_file_name(&run.report);
            let data = report_to_csv(&run.report, run.header.as_deref())?;
            tracing::debug!("Writing {} ({} bytes)", file_name, data.len());
            self.storage.write_file(&file_name, &data).await?;
            written.push(file_name);
        }

        let document = ExportDocument {
            generated_at: Utc::now(),
            reports: runs.iter().map(|run| &run.report).collect(),
        };
        let json_data = serde_json::to_vec_pretty(&document)?;
        tracing::debug!("Writing {} ({} bytes)", JSON_REPORT_FILE, json_data.len());
        self.storage.write_file(JSON_REPORT_FILE, &json_data).await?;
        written.push(JSON_REPORT_FILE.to_string());

        Ok(written)
    }
}
