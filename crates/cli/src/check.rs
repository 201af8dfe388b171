//! `rollcall check` — config-driven roster/submission reconciliation.

use std::path::{Path, PathBuf};

use rollcall_core::{
    filter_status, normalize_roster, reconcile, submission_scan, CheckConfig,
};

use crate::exit_codes::{EXIT_INVALID_CONFIG, EXIT_MISSING, EXIT_ROSTER};
use crate::CliError;

pub fn cmd_check(
    config_path: PathBuf,
    json_output: bool,
    output_file: Option<PathBuf>,
    find: Option<String>,
) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::general(format!("cannot read config: {e}")))?;

    let config = CheckConfig::from_toml(&config_str)
        .map_err(|e| CliError::new(EXIT_INVALID_CONFIG, e.to_string()))?;

    // Resolve roster and submission paths relative to the config file's directory
    let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

    let roster_path = base_dir.join(&config.roster.file);
    let table = rollcall_io::load_table(&roster_path).map_err(|e| {
        CliError::new(
            EXIT_ROSTER,
            format!("cannot load {}: {e}", roster_path.display()),
        )
    })?;

    let normalized = normalize_roster(&table, &config.roster)
        .map_err(|e| CliError::new(EXIT_ROSTER, e.to_string()))?;

    if normalized.rows_dropped > 0 {
        eprintln!(
            "note: {} roster row(s) dropped (no 9-digit id or blank name)",
            normalized.rows_dropped
        );
    }

    let submissions_dir = base_dir.join(&config.submissions.dir);
    let names = discover_names(&submissions_dir, &config.submissions.pattern)?;

    let scan = submission_scan(&names);
    let result = reconcile(&config.name, &normalized.roster, &scan);

    // Output
    let json_str = serde_json::to_string_pretty(&result)
        .map_err(|e| CliError::general(format!("JSON serialization error: {e}")))?;

    let json_path = output_file.or_else(|| {
        config.output.json.as_ref().map(|p| base_dir.join(p))
    });
    if let Some(ref path) = json_path {
        std::fs::write(path, &json_str)
            .map_err(|e| CliError::general(format!("cannot write output: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    if let Some(ref missing_file) = config.output.missing {
        let path = base_dir.join(missing_file);
        rollcall_io::export_missing(&path, &result.missing)
            .map_err(|e| CliError::general(format!("cannot export missing list: {e}")))?;
        eprintln!("wrote {}", path.display());
    }

    // stdout payload: JSON, a status lookup, or the missing list
    if json_output {
        println!("{json_str}");
    } else if let Some(ref query) = find {
        for row in filter_status(&result, query) {
            println!("{}\t{}\t{}", row.id, row.name, row.status);
        }
    } else {
        for entry in &result.missing {
            println!("{}\t{}", entry.id, entry.name);
        }
    }

    // Human summary to stderr
    let s = &result.summary;
    eprintln!(
        "{}: {} expected, {} submitted, {} missing ({:.1}% turned in)",
        result.meta.config_name,
        s.total_expected,
        s.submitted,
        s.missing,
        s.submission_rate * 100.0,
    );
    if s.unmatched_submissions > 0 {
        eprintln!(
            "note: {} submission id(s) not on the roster",
            s.unmatched_submissions
        );
    }
    if s.unidentified_files > 0 {
        eprintln!(
            "note: {} file name(s) with no extractable id",
            s.unidentified_files
        );
    }

    if s.missing > 0 {
        return Err(CliError::new(
            EXIT_MISSING,
            format!("{} missing submitter(s)", s.missing),
        ));
    }

    Ok(())
}

pub fn cmd_validate(config_path: PathBuf) -> Result<(), CliError> {
    let config_str = std::fs::read_to_string(&config_path)
        .map_err(|e| CliError::general(format!("cannot read config: {e}")))?;

    match CheckConfig::from_toml(&config_str) {
        Ok(config) => {
            eprintln!(
                "valid: '{}' roster '{}' (markers '{}'/'{}'), submissions '{}' pattern '{}'",
                config.name,
                config.roster.file,
                config.roster.id_marker,
                config.roster.name_marker,
                config.submissions.dir,
                config.submissions.pattern,
            );
            Ok(())
        }
        Err(e) => Err(CliError::new(EXIT_INVALID_CONFIG, e.to_string())),
    }
}

/// File names in `dir` matching the glob, directories skipped. Only names
/// are collected; submission content is never read.
fn discover_names(dir: &Path, pattern: &str) -> Result<Vec<String>, CliError> {
    let pattern = glob::Pattern::new(pattern).map_err(|e| {
        CliError::new(EXIT_INVALID_CONFIG, format!("bad submissions.pattern: {e}"))
    })?;

    let match_opts = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let entries = std::fs::read_dir(dir).map_err(|e| {
        CliError::general(format!("cannot list {}: {e}", dir.display()))
            .with_hint("submissions.dir is resolved relative to the config file")
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| CliError::general(e.to_string()))?;
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_dir {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if pattern.matches_with(&name, match_opts) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}
