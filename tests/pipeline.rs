// end-to-end runs over the sample fixtures in tests/data/

use std::fs;
use std::path::PathBuf;

use flowtag::{report, FlowAggregator, FlowTagError, TagResolver};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn run_sample() -> (Vec<(String, u64)>, Vec<((String, String), u64)>) {
    let resolver = TagResolver::from_file(fixture("sample_map_1.txt")).unwrap();
    let mut agg = FlowAggregator::new(&resolver);
    agg.process(fixture("sample_fl_1.txt")).unwrap();
    let tags = agg
        .tag_counts()
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    let pairs = agg
        .port_protocol_counts()
        .iter()
        .map(|(k, v)| (k.clone(), *v))
        .collect();
    (tags, pairs)
}

#[test]
fn sample_flow_log_counts_match() {
    let (tags, pairs) = run_sample();

    let expected_tags = [
        ("sv_P1", 2),
        ("sv_P2", 2),
        ("SV_P3", 1),
        ("Untagged", 1),
    ];
    assert_eq!(tags.len(), expected_tags.len());
    for (tag, count) in expected_tags {
        assert!(
            tags.iter().any(|(t, c)| t == tag && *c == count),
            "expected {}={} in {:?}",
            tag,
            count,
            tags
        );
    }

    assert_eq!(pairs.len(), 6);
    assert!(pairs.iter().all(|(_, c)| *c == 1));

    let tag_total: u64 = tags.iter().map(|(_, c)| c).sum();
    let pair_total: u64 = pairs.iter().map(|(_, c)| c).sum();
    assert_eq!(tag_total, pair_total);
    assert_eq!(tag_total, 6);
}

#[test]
fn report_written_to_disk_contains_both_sections() {
    let resolver = TagResolver::from_file(fixture("sample_map_1.txt")).unwrap();
    let mut agg = FlowAggregator::new(&resolver);
    agg.process(fixture("sample_fl_1.txt")).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.txt");
    report::write_report_file(agg.tag_counts(), agg.port_protocol_counts(), &out).unwrap();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Tag Counts:\n"));
    assert!(content.contains("\nPort/Protocol Combination Counts:\n"));
    // fixed-width rows, trailing padding included
    for row in [
        format!("{:<15}{:<10}", "sv_P1", 2),
        format!("{:<15}{:<10}", "sv_P2", 2),
        format!("{:<15}{:<10}", "SV_P3", 1),
        format!("{:<15}{:<10}", "Untagged", 1),
        format!("{:<10}{:<10}{:<10}", "25", "tcp", 1),
        format!("{:<10}{:<10}{:<10}", "80", "tcp", 1),
    ] {
        assert!(content.contains(&row), "missing row {:?}", row);
    }
}

#[test]
fn rerunning_the_formatter_is_byte_identical() {
    let resolver = TagResolver::from_file(fixture("sample_map_1.txt")).unwrap();
    let mut agg = FlowAggregator::new(&resolver);
    agg.process(fixture("sample_fl_1.txt")).unwrap();

    let mut first = Vec::new();
    let mut second = Vec::new();
    report::write_report(agg.tag_counts(), agg.port_protocol_counts(), &mut first).unwrap();
    report::write_report(agg.tag_counts(), agg.port_protocol_counts(), &mut second).unwrap();
    assert_eq!(first, second);
}

#[test]
fn resolver_is_reusable_across_aggregators() {
    let resolver = TagResolver::from_file(fixture("sample_map_1.txt")).unwrap();

    let mut first = FlowAggregator::new(&resolver);
    first.process(fixture("sample_fl_1.txt")).unwrap();
    let mut second = FlowAggregator::new(&resolver);
    second.process(fixture("sample_fl_1.txt")).unwrap();

    assert_eq!(
        first.tag_counts().get("sv_P1"),
        second.tag_counts().get("sv_P1")
    );
}

#[test]
fn missing_flow_log_surfaces_io_error() {
    let resolver = TagResolver::from_file(fixture("sample_map_1.txt")).unwrap();
    let mut agg = FlowAggregator::new(&resolver);
    let err = agg.process(fixture("does_not_exist.txt")).unwrap_err();
    assert!(matches!(err, FlowTagError::Io { .. }));
}
