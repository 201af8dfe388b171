use std::collections::BTreeMap;

use crate::extract::extract_id;
use crate::model::{
    ReconcileMeta, ReconcileResult, ReconcileSummary, Roster, RosterEntry, StatusRow, StudentId,
    SubmissionSet, SubmissionStatus,
};

// ---------------------------------------------------------------------------
// Submission scan
// ---------------------------------------------------------------------------

/// Identifiers pulled out of submitted file names.
#[derive(Debug, Clone, Default)]
pub struct SubmissionScan {
    pub ids: SubmissionSet,
    /// Names that yielded no 9-digit run. Excluded from matching, but
    /// counted so the signal is not lost.
    pub unidentified: usize,
}

/// Extract an id from each artifact name. Duplicate ids collapse into the
/// set; names with no extractable id are counted, never errors.
pub fn submission_scan<I, S>(names: I) -> SubmissionScan
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scan = SubmissionScan::default();
    for name in names {
        match extract_id(name.as_ref()) {
            Some(id) => {
                scan.ids.insert(id);
            }
            None => scan.unidentified += 1,
        }
    }
    scan
}

// ---------------------------------------------------------------------------
// Reconciliation
// ---------------------------------------------------------------------------

/// Match the roster against scanned submissions.
///
/// Duplicate roster ids collapse under first-occurrence-wins: the first row's
/// name represents the id everywhere downstream. Submission ids with no
/// roster entry land in `unmatched` instead of disappearing; they never
/// affect the status table or the submission rate.
///
/// Pure function over its inputs: identical roster and scan always produce
/// identical summary, status, missing, and unmatched values.
pub fn reconcile(config_name: &str, roster: &Roster, scan: &SubmissionScan) -> ReconcileResult {
    // First occurrence wins for duplicate ids; BTreeMap keeps output ascending.
    let mut expected: BTreeMap<&StudentId, &str> = BTreeMap::new();
    for entry in roster {
        expected.entry(&entry.id).or_insert(entry.name.as_str());
    }

    let mut status = Vec::with_capacity(expected.len());
    let mut missing = Vec::new();
    let mut submitted = 0;

    for (id, name) in &expected {
        if scan.ids.contains(*id) {
            submitted += 1;
            status.push(StatusRow {
                id: (*id).clone(),
                name: (*name).to_string(),
                status: SubmissionStatus::Submitted,
            });
        } else {
            status.push(StatusRow {
                id: (*id).clone(),
                name: (*name).to_string(),
                status: SubmissionStatus::Missing,
            });
            missing.push(RosterEntry {
                id: (*id).clone(),
                name: (*name).to_string(),
            });
        }
    }

    let unmatched: Vec<StudentId> = scan
        .ids
        .iter()
        .filter(|id| !expected.contains_key(id))
        .cloned()
        .collect();

    let total_expected = expected.len();
    let submission_rate = if total_expected == 0 {
        0.0
    } else {
        submitted as f64 / total_expected as f64
    };

    ReconcileResult {
        meta: ReconcileMeta {
            config_name: config_name.to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        },
        summary: ReconcileSummary {
            total_expected,
            submitted,
            missing: missing.len(),
            submission_rate,
            unmatched_submissions: unmatched.len(),
            unidentified_files: scan.unidentified,
        },
        status,
        missing,
        unmatched,
    }
}

// ---------------------------------------------------------------------------
// Status lookup
// ---------------------------------------------------------------------------

/// Status rows whose id or name contains the query (case-sensitive).
pub fn filter_status<'a>(result: &'a ReconcileResult, query: &str) -> Vec<&'a StatusRow> {
    result
        .status
        .iter()
        .filter(|row| row.id.as_str().contains(query) || row.name.contains(query))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
