//! `rollcall-core` — roster/submission reconciliation engine.
//!
//! Pure engine crate: receives a pre-loaded roster table and submitted file
//! names, returns reconciliation results. No CLI or IO dependencies.

pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod model;
pub mod normalize;
pub mod table;

pub use config::CheckConfig;
pub use engine::{filter_status, reconcile, submission_scan, SubmissionScan};
pub use error::RosterError;
pub use extract::extract_id;
pub use model::{
    ReconcileResult, Roster, RosterEntry, StatusRow, StudentId, SubmissionSet, SubmissionStatus,
};
pub use normalize::{normalize_roster, HeaderLocation, NormalizedRoster};
pub use table::RawTable;
