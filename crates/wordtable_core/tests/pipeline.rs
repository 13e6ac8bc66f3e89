use std::num::NonZeroUsize;

use pretty_assertions::assert_eq;
use wordtable_core::{
    filter_records, is_temporal_key, page_count, parse_instant, sort_records, PageBounds, Record,
    SortDirection, SortSpec, Summary,
};

fn record(word: &str, count: u64, status: &str, first_seen: &str, last_updated: &str) -> Record {
    Record {
        word: word.to_string(),
        request_count: count,
        status: status.to_string(),
        status_label: status.to_uppercase(),
        first_seen: first_seen.to_string(),
        last_updated: last_updated.to_string(),
    }
}

fn dataset() -> Vec<Record> {
    vec![
        record("کتێب", 3, "pending", "2024-03-01T10:00:00", "2024-03-05T10:00:00"),
        record("Alpha", 7, "approved", "2023-12-31T23:59:59.500000", "2024-01-02T00:00:00"),
        record("beta", 3, "pending", "2024-01-15T09:30:00", "2024-04-01T12:00:00"),
        record("ALPHABET", 1, "rejected", "2024-02-10T00:00:00", "2024-02-11T00:00:00"),
        record("gamma", 7, "pending", "not a date", "2024-03-01T00:00:00"),
        record("delta", 3, "approved", "2024-01-15T09:30:00", "2024-01-16T00:00:00"),
    ]
}

fn spec(key: &str, direction: SortDirection) -> SortSpec {
    SortSpec {
        key: key.to_string(),
        direction,
    }
}

fn words(records: &[&Record]) -> Vec<String> {
    records.iter().map(|r| r.word.clone()).collect()
}

#[test]
fn filter_matches_folded_substring_exactly() {
    let data = dataset();
    for term in ["", "alpha", "ALP", "a", "کت", "zz", "Bet"] {
        let expected: Vec<&Record> = data
            .iter()
            .filter(|r| r.word.to_lowercase().contains(&term.to_lowercase()))
            .collect();
        assert_eq!(filter_records(&data, term), expected, "term {term:?}");
    }
}

#[test]
fn empty_term_keeps_dataset_in_order() {
    let data = dataset();
    let filtered = filter_records(&data, "");
    assert_eq!(filtered, data.iter().collect::<Vec<_>>());
}

#[test]
fn numeric_sort_is_stable_in_both_directions() {
    let data = dataset();
    let all = filter_records(&data, "");

    let asc = sort_records(all.clone(), &spec("request_count", SortDirection::Ascending));
    assert_eq!(
        words(&asc),
        vec!["ALPHABET", "کتێب", "beta", "delta", "Alpha", "gamma"]
    );

    let desc = sort_records(all, &spec("request_count", SortDirection::Descending));
    assert_eq!(
        words(&desc),
        vec!["Alpha", "gamma", "کتێب", "beta", "delta", "ALPHABET"]
    );
}

#[test]
fn text_sort_is_lexicographic() {
    let data = dataset();
    let sorted = sort_records(filter_records(&data, ""), &spec("word", SortDirection::Ascending));
    assert_eq!(
        words(&sorted),
        vec!["ALPHABET", "Alpha", "beta", "delta", "gamma", "کتێب"]
    );
}

#[test]
fn temporal_keys_compare_as_instants() {
    assert!(is_temporal_key("first_seen"));
    assert!(is_temporal_key("last_updated"));
    assert!(!is_temporal_key("request_count"));

    let data = dataset();
    let sorted = sort_records(
        filter_records(&data, ""),
        &spec("first_seen", SortDirection::Ascending),
    );
    // Unparseable timestamps order first; equal instants keep input order.
    assert_eq!(
        words(&sorted),
        vec!["gamma", "Alpha", "beta", "delta", "ALPHABET", "کتێب"]
    );

    let sorted = sort_records(
        filter_records(&data, ""),
        &spec("last_updated", SortDirection::Descending),
    );
    assert_eq!(
        words(&sorted),
        vec!["beta", "کتێب", "gamma", "ALPHABET", "delta", "Alpha"]
    );
}

#[test]
fn unknown_key_preserves_order() {
    let data = dataset();
    let all = filter_records(&data, "");
    let sorted = sort_records(all.clone(), &spec("colour", SortDirection::Descending));
    assert_eq!(sorted, all);
}

#[test]
fn sorting_twice_is_idempotent() {
    let data = dataset();
    for key in ["word", "request_count", "status", "status_label", "first_seen", "last_updated"] {
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let once = sort_records(filter_records(&data, ""), &spec(key, direction));
            let twice = sort_records(once.clone(), &spec(key, direction));
            assert_eq!(once, twice, "key {key} {direction:?}");
        }
    }
}

#[test]
fn sort_is_a_permutation() {
    let data = dataset();
    let sorted = sort_records(filter_records(&data, ""), &spec("status", SortDirection::Ascending));
    assert_eq!(sorted.len(), data.len());
    for record in &data {
        assert_eq!(sorted.iter().filter(|r| ***r == *record).count(), 1);
    }
}

#[test]
fn pages_partition_the_sequence() {
    let items: Vec<usize> = (0..23).collect();
    for size in 1..=25 {
        let page_size = NonZeroUsize::new(size).unwrap();
        let pages = page_count(items.len(), page_size);
        let rebuilt: Vec<usize> = (1..=pages)
            .flat_map(|page| PageBounds::new(page, page_size).slice(&items).to_vec())
            .collect();
        assert_eq!(rebuilt, items, "page size {size}");
        assert!(PageBounds::new(pages + 1, page_size).slice(&items).is_empty());
    }
}

#[test]
fn summary_reports_one_based_clipped_range() {
    let page_size = NonZeroUsize::new(5).unwrap();
    assert_eq!(Summary::new(0, PageBounds::new(1, page_size)), None);
    assert_eq!(
        Summary::new(12, PageBounds::new(3, page_size)),
        Some(Summary {
            start: 11,
            end: 12,
            total: 12
        })
    );
}

#[test]
fn parse_instant_accepts_server_shapes() {
    assert!(parse_instant("2024-05-01T10:20:30").is_some());
    assert!(parse_instant("2024-05-01T10:20:30.123456").is_some());
    assert!(parse_instant("2024-05-01 10:20:30").is_some());
    assert_eq!(
        parse_instant("2024-05-01T12:20:30+02:00"),
        parse_instant("2024-05-01T10:20:30")
    );
    assert_eq!(parse_instant("yesterday"), None);
}
