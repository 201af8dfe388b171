use crate::config::RosterSpec;
use crate::error::RosterError;
use crate::extract::extract_id;
use crate::model::{Roster, RosterEntry};
use crate::table::RawTable;

// ---------------------------------------------------------------------------
// Header scan
// ---------------------------------------------------------------------------

/// Where the header row was found during the marker scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderLocation {
    /// A row containing the id marker was found at this index.
    Found(usize),
    /// No row contains the id marker; row 0 was used as the header.
    /// Row 0's labels cannot contain the marker either, so this path always
    /// ends in a `MissingColumn` error. The variant exists so the degraded
    /// path is distinguishable rather than silent.
    Fallback,
}

impl HeaderLocation {
    pub fn row(&self) -> usize {
        match self {
            Self::Found(row) => *row,
            Self::Fallback => 0,
        }
    }
}

/// First row with any cell containing the id marker.
fn locate_header(table: &RawTable, id_marker: &str) -> HeaderLocation {
    for (i, row) in table.rows().iter().enumerate() {
        if row.iter().any(|cell| cell.contains(id_marker)) {
            return HeaderLocation::Found(i);
        }
    }
    HeaderLocation::Fallback
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct NormalizedRoster {
    pub roster: Roster,
    pub header: HeaderLocation,
    /// Data rows dropped for an unextractable id or a blank name.
    pub rows_dropped: usize,
}

/// Clean a raw roster table into canonical (id, name) rows.
///
/// The first several rows of real rosters are often title or note text, so
/// the header row is located by scanning for the id marker. Rows up to and
/// including the header are discarded; among the header's cells, the first
/// containing each marker names its column. Data rows keep only a 9-digit
/// run extracted from the id cell and a non-blank name; everything else is
/// dropped and counted. Duplicate ids are preserved here; the engine
/// collapses them.
pub fn normalize_roster(
    table: &RawTable,
    spec: &RosterSpec,
) -> Result<NormalizedRoster, RosterError> {
    let header = locate_header(table, &spec.id_marker);
    let header_row = header.row();

    let labels = table.rows().get(header_row).map(Vec::as_slice).unwrap_or(&[]);

    let id_col = labels
        .iter()
        .position(|l| l.contains(&spec.id_marker))
        .ok_or_else(|| RosterError::MissingColumn {
            marker: spec.id_marker.clone(),
        })?;
    let name_col = labels
        .iter()
        .position(|l| l.contains(&spec.name_marker))
        .ok_or_else(|| RosterError::MissingColumn {
            marker: spec.name_marker.clone(),
        })?;

    let mut roster = Roster::new();
    let mut rows_dropped = 0;

    for row in header_row + 1..table.row_count() {
        let id_cell = table.cell(row, id_col);
        let name_cell = table.cell(row, name_col);

        match extract_id(id_cell) {
            Some(id) if !name_cell.trim().is_empty() => {
                roster.push(RosterEntry {
                    id,
                    name: name_cell.to_string(),
                });
            }
            _ => rows_dropped += 1,
        }
    }

    Ok(NormalizedRoster {
        roster,
        header,
        rows_dropped,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
