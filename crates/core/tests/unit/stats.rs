//! Statistics Verification.
//!
//! Checks the accuracy arithmetic and the exact report text.

use bpsim_core::stats::EvalStats;
use pretty_assertions::assert_eq;

fn report(stats: &EvalStats, detailed: bool) -> String {
    let mut out = Vec::new();
    stats
        .write_report(&mut out, "2-bit saturating counter", detailed)
        .unwrap();
    String::from_utf8(out).unwrap()
}

fn stats_from(pairs: &[(bool, bool)]) -> EvalStats {
    let mut stats = EvalStats::default();
    for &(predicted, taken) in pairs {
        stats.record(predicted, taken);
    }
    stats
}

#[test]
fn summary_matches_classic_output() {
    let stats = stats_from(&[(false, true), (false, true), (true, true)]);
    assert_eq!(
        report(&stats, false),
        "Branch count = 3\n2-bit saturating counter = 33.33%\n"
    );
}

#[test]
fn perfect_run_is_one_hundred_percent() {
    let stats = stats_from(&[(false, false)]);
    assert_eq!(stats.accuracy(), Some(100.0));
    assert_eq!(
        report(&stats, false),
        "Branch count = 1\n2-bit saturating counter = 100.00%\n"
    );
}

/// Zero branches never produce NaN.
#[test]
fn empty_run_reports_no_data() {
    let stats = EvalStats::default();
    assert_eq!(stats.accuracy(), None);
    assert_eq!(stats.taken_accuracy(), None);
    assert_eq!(stats.not_taken_accuracy(), None);
    assert_eq!(
        report(&stats, false),
        "Branch count = 0\n2-bit saturating counter = n/a (no branches)\n"
    );
}

#[test]
fn direction_breakdown() {
    // taken: 3 seen, 2 right; not taken: 2 seen, 1 right
    let stats = stats_from(&[
        (true, true),
        (true, true),
        (false, true),
        (false, false),
        (true, false),
    ]);
    assert_eq!(stats.taken_branches, 3);
    assert_eq!(stats.not_taken_branches(), 2);
    assert_eq!(stats.not_taken_accuracy(), Some(50.0));

    let text = report(&stats, true);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Branch count = 5");
    assert_eq!(lines[1], "2-bit saturating counter = 60.00%");
    assert_eq!(lines[3], "  bp.mispredicts         2");
    assert_eq!(lines[4], "  bp.taken               3 (66.67%)");
    assert_eq!(lines[5], "  bp.not_taken           2 (50.00%)");
}

#[test]
fn only_taken_branches_leave_not_taken_undefined() {
    let stats = stats_from(&[(true, true)]);
    assert_eq!(stats.taken_accuracy(), Some(100.0));
    assert_eq!(stats.not_taken_accuracy(), None);
}
