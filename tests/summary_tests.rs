mod common;
use common::{records, sample_records};
use ractivitylog::config::Config;
use ractivitylog::core::calculator::ranking::{most_frequent, rank_by_frequency};
use ractivitylog::core::filters::Selection;
use ractivitylog::core::pipeline::FilterChain;
use ractivitylog::core::summary::build_summary;
use ractivitylog::utils::formatting::hour_bucket;

fn final_rows() -> Vec<ractivitylog::models::record::ActivityRecord> {
    let chain = FilterChain::from_config(&Config::default()).unwrap();
    chain.run(sample_records(), &Selection::default()).non_role
}

#[test]
fn test_summary_of_sample_log() {
    let summary = build_summary(&final_rows(), 5).expect("summary");

    assert_eq!(summary.total, 6);
    assert_eq!(summary.distinct_users, 2);
    // andi and budi both have 3 rows: andi appears first
    assert_eq!(summary.top_user, ("andi".to_string(), 3));
    assert_eq!(summary.busiest_hour, Some((18, 4)));
    assert_eq!(hour_bucket(18), "18:00 - 19:00");
    assert_eq!(
        summary.top_programs,
        vec![
            ("Entry Nota".to_string(), 4),
            ("Cetak Laporan".to_string(), 1),
            ("Posting Jurnal".to_string(), 1),
        ]
    );

    let latest: Vec<(String, String)> = summary
        .latest
        .iter()
        .map(|r| (r.time_str(), r.user.clone()))
        .collect();
    assert_eq!(
        latest,
        vec![
            ("19:05:00".to_string(), "budi".to_string()),
            ("18:45:00".to_string(), "budi".to_string()),
            ("18:40:00".to_string(), "andi".to_string()),
            ("18:20:00".to_string(), "budi".to_string()),
            ("18:10:00".to_string(), "andi".to_string()),
        ]
    );
}

#[test]
fn test_summary_of_nothing_is_none() {
    assert!(build_summary(&[], 5).is_none());
}

#[test]
fn test_tied_users_resolve_the_same_way_every_run() {
    let rows = records(&[
        ["zaki", "2025-03-10", "18:00:00", "P"],
        ["andi", "2025-03-10", "18:05:00", "P"],
        ["andi", "2025-03-10", "18:10:00", "P"],
        ["zaki", "2025-03-10", "19:00:00", "P"],
    ]);

    for _ in 0..20 {
        let summary = build_summary(&rows, 5).unwrap();
        assert_eq!(summary.top_user, ("zaki".to_string(), 2));
        // hours 18 (3 rows) beats 19
        assert_eq!(summary.busiest_hour, Some((18, 3)));
    }
}

#[test]
fn test_latest_keeps_row_order_for_equal_times() {
    let rows = records(&[
        ["a", "2025-03-10", "18:00:00", "P"],
        ["b", "2025-03-11", "18:00:00", "P"],
        ["c", "2025-03-12", "18:00:00", "P"],
    ]);

    let summary = build_summary(&rows, 2).unwrap();
    let users: Vec<&str> = summary.latest.iter().map(|r| r.user.as_str()).collect();
    assert_eq!(users, vec!["a", "b"]);
}

#[test]
fn test_ranking_breaks_ties_by_first_occurrence() {
    let ranked = rank_by_frequency(vec!["c", "b", "a", "b", "a", "d"]);
    assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);

    assert_eq!(most_frequent(vec![3, 1, 1, 3]), Some((3, 2)));
    assert_eq!(most_frequent(Vec::<u32>::new()), None);
}
