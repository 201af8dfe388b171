// Excel roster import (calamine) and missing-list export (rust_xlsxwriter)

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Format, Workbook as XlsxWorkbook};

use rollcall_core::{RawTable, RosterEntry};

/// Import the first sheet of an Excel file (xlsx, xls, xlsb, ods) as cell
/// text. Rosters live on the first sheet; other sheets are ignored.
pub fn import(path: &Path) -> Result<RawTable, String> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| format!("failed to open Excel file: {e}"))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names
        .first()
        .ok_or_else(|| "Excel file contains no sheets".to_string())?;

    let range = workbook
        .worksheet_range(first)
        .map_err(|e| format!("failed to read sheet '{first}': {e}"))?;

    let mut table = RawTable::new();

    // Data may not begin at A1. Physical coordinates are preserved with
    // blank padding: the header scan works on physical rows.
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    for _ in 0..start_row {
        table.push_row(Vec::new());
    }

    for row in range.rows() {
        let mut cells: Vec<String> = vec![String::new(); start_col as usize];
        cells.extend(row.iter().map(cell_text));
        table.push_row(cells);
    }

    Ok(table)
}

/// Render a cell the way it reads in the grid. Floats with a zero fraction
/// print as integers, so numeric id cells come back as 9-digit strings
/// rather than "100000001.0".
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Write the missing list as a two-column workbook with a bold header row.
pub fn export_missing(path: &Path, entries: &[RosterEntry]) -> Result<(), String> {
    let mut workbook = XlsxWorkbook::new();
    let worksheet = workbook
        .add_worksheet()
        .set_name("missing")
        .map_err(|e| format!("failed to create sheet: {e}"))?;

    let header = Format::new().set_bold();
    worksheet
        .write_with_format(0, 0, "id", &header)
        .map_err(|e| e.to_string())?;
    worksheet
        .write_with_format(0, 1, "name", &header)
        .map_err(|e| e.to_string())?;

    for (i, entry) in entries.iter().enumerate() {
        let row = (i + 1) as u32;
        // Ids are written as text: a numeric cell would strip leading zeros.
        worksheet
            .write(row, 0, entry.id.as_str())
            .map_err(|e| e.to_string())?;
        worksheet
            .write(row, 1, entry.name.as_str())
            .map_err(|e| e.to_string())?;
    }

    workbook
        .save(path)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollcall_core::StudentId;

    fn entry(id: &str, name: &str) -> RosterEntry {
        RosterEntry {
            id: StudentId::parse(id).unwrap(),
            name: name.into(),
        }
    }

    #[test]
    fn export_then_import_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.xlsx");
        let entries = vec![entry("100000003", "C"), entry("100000007", "G")];

        export_missing(&path, &entries).unwrap();
        let table = import(&path).unwrap();

        assert_eq!(table.cell(0, 0), "id");
        assert_eq!(table.cell(0, 1), "name");
        assert_eq!(table.cell(1, 0), "100000003");
        assert_eq!(table.cell(1, 1), "C");
        assert_eq!(table.cell(2, 0), "100000007");
    }

    #[test]
    fn numeric_id_cells_read_as_digit_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");

        // Build a roster whose id column is numeric, the way spreadsheet
        // tools store it.
        let mut workbook = XlsxWorkbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write(0, 0, "学号").unwrap();
        worksheet.write(0, 1, "姓名").unwrap();
        worksheet.write(1, 0, 100000001.0).unwrap();
        worksheet.write(1, 1, "A").unwrap();
        workbook.save(&path).unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.cell(1, 0), "100000001");
    }

    #[test]
    fn title_rows_keep_physical_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.xlsx");

        let mut workbook = XlsxWorkbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write(0, 0, "2026 roster").unwrap();
        worksheet.write(4, 0, "学号").unwrap();
        worksheet.write(4, 1, "姓名").unwrap();
        worksheet.write(5, 0, "100000001").unwrap();
        worksheet.write(5, 1, "A").unwrap();
        workbook.save(&path).unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.cell(4, 0), "学号");
        assert_eq!(table.cell(5, 0), "100000001");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = import(Path::new("/nonexistent/roster.xlsx")).unwrap_err();
        assert!(err.contains("failed to open"));
    }
}
