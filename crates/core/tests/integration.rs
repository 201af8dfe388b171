use rollcall_core::config::RosterSpec;
use rollcall_core::{
    filter_status, normalize_roster, reconcile, submission_scan, HeaderLocation, RawTable,
    RosterError, SubmissionStatus,
};

fn spec() -> RosterSpec {
    RosterSpec {
        file: "roster.xlsx".into(),
        id_marker: "学号".into(),
        name_marker: "姓名".into(),
    }
}

fn table(rows: &[&[&str]]) -> RawTable {
    RawTable::from_rows(
        rows.iter()
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect(),
    )
}

/// Roster export the way student-information systems produce them: four
/// title/blank rows, then a header row, then data.
fn registrar_table() -> RawTable {
    table(&[
        &["2026 春季 Python 课程", "", ""],
        &["", "", ""],
        &["考勤表", "", ""],
        &["", "", ""],
        &["序号", "学号", "姓名"],
        &["1", "100000001", "A"],
        &["2", "100000002", "B"],
        &["3", "100000003", "C"],
    ])
}

// -------------------------------------------------------------------------
// End-to-end scenarios
// -------------------------------------------------------------------------

#[test]
fn two_submitted_one_missing() {
    let normalized = normalize_roster(&registrar_table(), &spec()).unwrap();
    assert_eq!(normalized.header, HeaderLocation::Found(4));
    assert_eq!(normalized.roster.len(), 3);

    let scan = submission_scan(["100000001_hw1.py", "notes_100000002_final.txt"]);
    let result = reconcile("week 1", &normalized.roster, &scan);

    assert_eq!(result.summary.total_expected, 3);
    assert_eq!(result.summary.submitted, 2);
    assert_eq!(result.summary.missing, 1);
    assert!((result.summary.submission_rate - 0.667).abs() < 1e-3);

    assert_eq!(result.missing.len(), 1);
    assert_eq!(result.missing[0].id.as_str(), "100000003");
    assert_eq!(result.missing[0].name, "C");
}

#[test]
fn no_identifiable_submissions() {
    let normalized = normalize_roster(&registrar_table(), &spec()).unwrap();
    let scan = submission_scan(["randomfile.txt"]);
    let result = reconcile("week 1", &normalized.roster, &scan);

    assert_eq!(result.summary.submitted, 0);
    assert_eq!(result.summary.missing, 3);
    assert_eq!(result.summary.submission_rate, 0.0);
    assert_eq!(result.summary.unidentified_files, 1);
}

#[test]
fn everyone_submitted() {
    let normalized = normalize_roster(&registrar_table(), &spec()).unwrap();
    let scan = submission_scan([
        "100000001_hw1.py",
        "100000002_hw1.py",
        "hw1.100000003.final.py",
    ]);
    let result = reconcile("week 1", &normalized.roster, &scan);

    assert_eq!(result.summary.submission_rate, 1.0);
    assert!(result.missing.is_empty());
    assert!(result
        .status
        .iter()
        .all(|r| r.status == SubmissionStatus::Submitted));
}

#[test]
fn header_position_does_not_matter() {
    for k in 0..8 {
        let mut rows: Vec<Vec<String>> = (0..k)
            .map(|i| vec![format!("note {i}"), String::new(), String::new()])
            .collect();
        rows.push(vec!["序号".into(), "学号".into(), "姓名".into()]);
        rows.push(vec!["1".into(), "100000001".into(), "A".into()]);
        let normalized =
            normalize_roster(&RawTable::from_rows(rows), &spec()).unwrap();
        assert_eq!(normalized.header, HeaderLocation::Found(k));
        assert_eq!(normalized.roster.len(), 1);
    }
}

#[test]
fn shape_error_names_the_missing_marker() {
    let t = table(&[&["序号", "编码", "称呼"], &["1", "100000001", "A"]]);
    let err = normalize_roster(&t, &spec()).unwrap_err();
    match err {
        RosterError::MissingColumn { marker } => assert_eq!(marker, "学号"),
        other => panic!("expected MissingColumn, got {other}"),
    }
}

#[test]
fn json_report_shape() {
    let normalized = normalize_roster(&registrar_table(), &spec()).unwrap();
    let scan = submission_scan(["100000001_hw1.py", "999999999_stray.py"]);
    let result = reconcile("week 1", &normalized.roster, &scan);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["meta"]["config_name"], "week 1");
    assert_eq!(json["summary"]["total_expected"], 3);
    assert_eq!(json["summary"]["unmatched_submissions"], 1);
    assert_eq!(json["unmatched"][0], "999999999");
    assert_eq!(json["status"][0]["status"], "submitted");
    assert_eq!(json["missing"][0]["id"], "100000002");
}

#[test]
fn lookup_over_full_run() {
    let normalized = normalize_roster(&registrar_table(), &spec()).unwrap();
    let scan = submission_scan(["100000001_hw1.py"]);
    let result = reconcile("week 1", &normalized.roster, &scan);

    let hits = filter_status(&result, "100000003");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].status, SubmissionStatus::Missing);
}
