use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Identifier
// ---------------------------------------------------------------------------

/// Fixed-width 9-digit participant identifier.
///
/// Because the width is fixed, lexicographic order equals numeric order, so
/// sorted output needs no numeric parsing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentId(String);

impl StudentId {
    pub const LEN: usize = 9;

    /// Parse a string that must be exactly 9 ASCII digits.
    pub fn parse(s: &str) -> Option<Self> {
        if s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()) {
            Some(Self(s.to_string()))
        } else {
            None
        }
    }

    /// Wrap a substring already known to be a 9-digit run.
    pub(crate) fn from_digits(s: &str) -> Self {
        debug_assert!(s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit()));
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// One cleaned roster row: well-formed identifier plus free-form display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterEntry {
    pub id: StudentId,
    pub name: String,
}

/// Canonical roster in row order. Semantically a set keyed by id; duplicate
/// ids survive normalization and are collapsed by the engine.
pub type Roster = Vec<RosterEntry>;

/// Identifiers extracted from submitted file names, deduplicated.
pub type SubmissionSet = BTreeSet<StudentId>;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    Submitted,
    Missing,
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => write!(f, "submitted"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// Per-identifier row of the status table, one per expected id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub id: StudentId,
    pub name: String,
    pub status: SubmissionStatus,
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconcileSummary {
    pub total_expected: usize,
    pub submitted: usize,
    pub missing: usize,
    /// |submitted ∩ expected| / |expected|, 0.0 for an empty roster.
    pub submission_rate: f64,
    /// Submission ids with no roster entry (typo'd id, drop-in file).
    pub unmatched_submissions: usize,
    /// Submitted file names with no extractable id.
    pub unidentified_files: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconcileMeta {
    pub config_name: String,
    pub engine_version: String,
    pub run_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconcileResult {
    pub meta: ReconcileMeta,
    pub summary: ReconcileSummary,
    /// Every expected id, ascending, with its submission status.
    pub status: Vec<StatusRow>,
    /// Roster entries with no matching submission, ascending by id.
    pub missing: Vec<RosterEntry>,
    /// Submission ids absent from the roster, ascending.
    pub unmatched: Vec<StudentId>,
}
