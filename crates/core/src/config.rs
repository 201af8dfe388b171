use serde::Deserialize;

use crate::error::RosterError;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct CheckConfig {
    pub name: String,
    pub roster: RosterSpec,
    pub submissions: SubmissionSpec,
    #[serde(default)]
    pub output: OutputConfig,
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Where the roster lives and which header markers identify its columns.
///
/// Markers are substring-matched against header cells, so `学号` finds
/// labels like `学号（9位）` and `id` finds `Student ID`. The scan is
/// case-sensitive.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterSpec {
    /// Roster file, resolved relative to the config file by the caller.
    pub file: String,
    pub id_marker: String,
    pub name_marker: String,
}

// ---------------------------------------------------------------------------
// Submissions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSpec {
    /// Directory whose file names are the submission artifacts.
    pub dir: String,
    /// Glob applied to file names, not paths.
    #[serde(default = "default_pattern")]
    pub pattern: String,
}

fn default_pattern() -> String {
    "*".into()
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Write the JSON report here.
    #[serde(default)]
    pub json: Option<String>,
    /// Write the missing list here (.csv or .xlsx by extension).
    #[serde(default)]
    pub missing: Option<String>,
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl CheckConfig {
    pub fn from_toml(input: &str) -> Result<Self, RosterError> {
        let config: CheckConfig =
            toml::from_str(input).map_err(|e| RosterError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RosterError> {
        if self.name.trim().is_empty() {
            return Err(RosterError::ConfigValidation("name must not be empty".into()));
        }
        if self.roster.file.trim().is_empty() {
            return Err(RosterError::ConfigValidation(
                "roster.file must not be empty".into(),
            ));
        }
        if self.roster.id_marker.is_empty() {
            return Err(RosterError::ConfigValidation(
                "roster.id_marker must not be empty".into(),
            ));
        }
        if self.roster.name_marker.is_empty() {
            return Err(RosterError::ConfigValidation(
                "roster.name_marker must not be empty".into(),
            ));
        }
        if self.submissions.dir.trim().is_empty() {
            return Err(RosterError::ConfigValidation(
                "submissions.dir must not be empty".into(),
            ));
        }
        if self.submissions.pattern.is_empty() {
            return Err(RosterError::ConfigValidation(
                "submissions.pattern must not be empty".into(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
