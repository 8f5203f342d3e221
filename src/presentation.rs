// src/presentation.rs
use std::{io::Write, path::Path};

use serde_json::json;
use sheet_scan_ports::filesystem::SkippedEntry;
use sheet_scan_shared_kernel::Result;
use sheet_scan_usecase::{CountOutcome, ScanOutcome, ScannedFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

pub fn write_scan(out: &mut impl Write, outcome: &ScanOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &outcome.envelope()),
        OutputFormat::Table => {
            if let Some(error) = &outcome.error {
                writeln!(out, "error: {error}")?;
                return Ok(());
            }
            write_table(out, &outcome.files)?;
            writeln!(out, "{} file(s)", outcome.count())?;
            Ok(())
        }
    }
}

pub fn write_count(out: &mut impl Write, outcome: &CountOutcome, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, outcome),
        OutputFormat::Table => {
            match &outcome.error {
                Some(error) => writeln!(out, "error: {error}")?,
                None => writeln!(out, "{}", outcome.count)?,
            }
            Ok(())
        }
    }
}

pub fn write_accessible(out: &mut impl Write, accessible: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &json!({ "accessible": accessible })),
        OutputFormat::Table => Ok(writeln!(out, "{}", if accessible { "accessible" } else { "not accessible" })?),
    }
}

pub fn write_root(out: &mut impl Write, root: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &json!({ "root": root.to_string_lossy() })),
        OutputFormat::Table => Ok(writeln!(out, "{}", root.display())?),
    }
}

/// Diagnostics for `--show-skipped`; one line per entry.
pub fn write_skipped(out: &mut impl Write, skipped: &[SkippedEntry]) -> Result<()> {
    for entry in skipped {
        writeln!(out, "skipped: {entry}")?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, value: &impl serde::Serialize) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_table(out: &mut impl Write, files: &[ScannedFile]) -> Result<()> {
    let sheet_width = files
        .iter()
        .filter_map(|f| f.sheet.as_deref())
        .map(str::len)
        .chain(std::iter::once("SHEET".len()))
        .max()
        .unwrap_or_default();
    let show_sheet = files.iter().any(|f| f.sheet.is_some());

    if show_sheet {
        writeln!(out, "{:<16}  {:>9}  {:<sheet_width$}  PATH", "MODIFIED", "SIZE", "SHEET")?;
    } else {
        writeln!(out, "{:<16}  {:>9}  PATH", "MODIFIED", "SIZE")?;
    }
    for file in files {
        let modified = file.modified.timestamp().format("%Y-%m-%d %H:%M").to_string();
        if show_sheet {
            let sheet = file.sheet.as_deref().unwrap_or("-");
            writeln!(out, "{modified:<16}  {:>9}  {sheet:<sheet_width$}  {}", file.size_label, file.relative_path)?;
        } else {
            writeln!(out, "{modified:<16}  {:>9}  {}", file.size_label, file.relative_path)?;
        }
    }
    Ok(())
}
