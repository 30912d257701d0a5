// plotting/export.rs
// Data export for the per-particle sample series

use super::SampleSeries;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

/// Render every series into one document in the requested format.
pub fn export_series(series: &[SampleSeries], format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Csv => Ok(export_delimited(series, ',')),
        ExportFormat::Tsv => Ok(export_delimited(series, '\t')),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(series)?),
    }
}

/// Write the export to `path`, creating parent directories as needed.
pub fn write_series<P: AsRef<Path>>(path: P, series: &[SampleSeries], format: ExportFormat) -> Result<()> {
    let path = path.as_ref();
    let content = export_series(series, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    tracing::info!(path = %path.display(), series = series.len(), "exported sample series");
    Ok(())
}

fn export_delimited(series: &[SampleSeries], sep: char) -> String {
    let mut content = String::new();

    content.push_str("# Sample Series Export\n");
    content.push_str(&format!("# Series: {}\n", series.len()));
    content.push_str("# Quantity: speed\n");
    content.push('\n');

    content.push_str(&format!("particle{sep}time{sep}value\n"));
    for s in series {
        for sample in s.iter() {
            content.push_str(&format!(
                "{}{sep}{}{sep}{}\n",
                s.particle.index(),
                sample.timestamp,
                sample.value
            ));
        }
    }
    content
}
