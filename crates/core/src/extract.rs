use std::sync::OnceLock;

use regex::Regex;

use crate::model::StudentId;

/// First run of 9 consecutive decimal digits, leftmost wins.
///
/// A longer digit run still matches on its first 9 digits. That is a known
/// source of false positives, kept on purpose: submitted file names routinely
/// embed the id among other digits (dates, phone numbers, counters), and
/// requiring digit-run boundaries would reject real submissions.
fn id_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{9}").unwrap())
}

/// Extract the first 9-digit identifier from an arbitrary string.
///
/// Total over adversarial input: returns `None` instead of failing when no
/// run exists.
pub fn extract_id(text: &str) -> Option<StudentId> {
    id_run().find(text).map(|m| StudentId::from_digits(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_id() {
        assert_eq!(extract_id("100000001").unwrap().as_str(), "100000001");
    }

    #[test]
    fn id_embedded_in_filename() {
        assert_eq!(
            extract_id("100000001_hw1.py").unwrap().as_str(),
            "100000001"
        );
        assert_eq!(
            extract_id("notes_100000002_final.txt").unwrap().as_str(),
            "100000002"
        );
    }

    #[test]
    fn leftmost_run_wins() {
        assert_eq!(
            extract_id("111111111_222222222.py").unwrap().as_str(),
            "111111111"
        );
    }

    #[test]
    fn longer_run_matches_first_nine() {
        // 10-digit run: the first 9 digits win, by policy.
        assert_eq!(extract_id("1234567890.py").unwrap().as_str(), "123456789");
    }

    #[test]
    fn no_run_is_none() {
        assert!(extract_id("randomfile.txt").is_none());
        assert!(extract_id("12345678.py").is_none()); // 8 digits
        assert!(extract_id("").is_none());
    }

    #[test]
    fn digits_split_by_separator_do_not_match() {
        assert!(extract_id("1234-5678-9.txt").is_none());
    }
}
