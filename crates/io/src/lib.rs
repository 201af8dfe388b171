//! `rollcall-io` — file I/O: roster tables (CSV/TSV, Excel) and
//! missing-list export.

pub mod csv;
pub mod xlsx;

use std::path::Path;

use rollcall_core::{RawTable, RosterEntry};

/// Load a roster table, picking the importer by file extension.
/// Anything that is not a spreadsheet format is treated as delimited text.
pub fn load_table(path: &Path) -> Result<RawTable, String> {
    match extension(path).as_deref() {
        Some("xlsx") | Some("xls") | Some("xlsb") | Some("ods") => xlsx::import(path),
        Some("tsv") => csv::import_tsv(path),
        _ => csv::import(path),
    }
}

/// Write the missing list, picking the exporter by file extension.
pub fn export_missing(path: &Path, entries: &[RosterEntry]) -> Result<(), String> {
    match extension(path).as_deref() {
        Some("xlsx") => xlsx::export_missing(path, entries),
        _ => csv::export_missing(path, entries),
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}
