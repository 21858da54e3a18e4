use std::{sync::Arc, thread};

use bulletin_corpus::{Corpus, CorpusHandle, Error, PartitionData};
use bulletin_domain::Exchange;
use bulletin_testkit::{TempDataDir, announcement, category, corpus, january_series};

#[test]
fn iteration_concatenates_partitions_in_fixed_order() {
	let corpus = corpus(january_series("hk", 1, 2), january_series("sz", 1, 2))
		.expect("Failed to build corpus.");
	let ids: Vec<&str> = corpus.iter().map(|entry| entry.announcement.id.as_str()).collect();

	assert_eq!(ids, vec!["hk-01", "hk-02", "sz-01", "sz-02"]);
	assert_eq!(corpus.len(), 4);
	assert_eq!(corpus.entries(Exchange::Shenzhen)[0].exchange, Exchange::Shenzhen);
}

#[test]
fn rejects_duplicate_ids_within_a_partition() {
	let err = corpus(
		vec![announcement("dup", "2024-01-01"), announcement("dup", "2024-01-02")],
		vec![],
	)
		.expect_err("Expected duplicate id rejection.");

	assert!(matches!(
		err,
		bulletin_testkit::Error::Corpus(Error::DuplicateId { exchange: Exchange::HongKong, .. })
	));
}

#[test]
fn rejects_empty_ids() {
	let result = Corpus::from_partitions([(
		Exchange::Shenzhen,
		PartitionData { announcements: vec![announcement("  ", "2024-01-01")], categories: vec![] },
	)]);

	assert!(matches!(result, Err(Error::InvalidRecord { position: 0, .. })));
}

#[test]
fn cross_partition_ids_resolve_to_the_first_partition() {
	let corpus = corpus(
		vec![announcement("same", "2024-01-01")],
		vec![announcement("same", "2024-02-01")],
	)
		.expect("Cross-partition ids must be tolerated.");
	let entry = corpus.get("same").expect("Id must resolve.");

	assert_eq!(entry.exchange, Exchange::HongKong);
	assert_eq!(corpus.len(), 2);
	assert!(corpus.get("missing").is_none());
}

#[test]
fn unparseable_timestamps_are_counted_not_fatal() {
	let corpus = corpus(
		vec![announcement("good", "2024-01-01"), announcement("bad", "soon")],
		vec![],
	)
		.expect("A bad timestamp must not fail the load.");

	assert_eq!(corpus.invalid_timestamps(), 1);
	assert!(corpus.get("bad").expect("Bad record stays addressable.").published_at.is_none());
	assert!(corpus.get("good").expect("Good record resolves.").published_at.is_some());
}

#[test]
fn category_map_lists_every_exchange() {
	let corpus = Corpus::from_partitions([(
		Exchange::HongKong,
		PartitionData { announcements: vec![], categories: vec![category("div", "배당")] },
	)])
	.expect("Failed to build corpus.");
	let map = corpus.category_map();

	assert_eq!(map.len(), 2);
	assert_eq!(map[&Exchange::HongKong][0].kor, "배당");
	assert!(map[&Exchange::Shenzhen].is_empty());
}

#[test]
fn handle_swaps_whole_corpus() {
	let handle = CorpusHandle::new(Corpus::empty());
	let before = handle.snapshot();
	let replaced = handle.replace(
		corpus(january_series("hk", 1, 3), vec![]).expect("Failed to build corpus."),
	);

	assert!(Arc::ptr_eq(&before, &replaced));
	assert!(before.is_empty());
	assert_eq!(handle.snapshot().len(), 3);
}

#[test]
fn concurrent_readers_see_complete_snapshots() {
	let handle = Arc::new(CorpusHandle::default());
	let readers: Vec<_> = (0..4)
		.map(|_| {
			let handle = Arc::clone(&handle);

			thread::spawn(move || {
				for _ in 0..200 {
					let len = handle.snapshot().len();

					assert!(len == 0 || len == 10, "Observed a partial corpus of {len} records.");
				}
			})
		})
		.collect();

	for _ in 0..20 {
		let next = corpus(january_series("hk", 1, 10), vec![]).expect("Failed to build corpus.");

		handle.replace(next);
		handle.replace(Corpus::empty());
	}
	for reader in readers {
		reader.join().expect("Reader thread panicked.");
	}
}

#[test]
fn loads_feed_envelope_and_bare_arrays() {
	let dir = TempDataDir::new().expect("Failed to create data dir.");

	dir.write_feed_partition(
		Exchange::HongKong,
		&january_series("hk", 1, 3),
		&[category("div", "배당")],
	)
	.expect("Failed to write partition.");
	dir.write_partition(Exchange::Shenzhen, &january_series("sz", 1, 2), &[])
		.expect("Failed to write partition.");

	let corpus = bulletin_corpus::load(&dir.config().corpus).expect("Failed to load corpus.");

	assert_eq!(corpus.entries(Exchange::HongKong).len(), 3);
	assert_eq!(corpus.entries(Exchange::Shenzhen).len(), 2);
	assert_eq!(corpus.categories(Exchange::HongKong)[0].value, "div");
}

#[test]
fn load_reports_missing_and_malformed_files() {
	let dir = TempDataDir::new().expect("Failed to create data dir.");
	let mut cfg = dir.config();

	cfg.corpus.shenzhen.categories = dir.path().join("absent.json");

	assert!(matches!(bulletin_corpus::load(&cfg.corpus), Err(Error::Read { .. })));

	let broken = dir.write_raw("broken.json", "[{\"id\": 1}]").expect("Failed to write file.");
	let mut cfg = dir.config();

	cfg.corpus.hongkong.announcements = broken;

	assert!(matches!(bulletin_corpus::load(&cfg.corpus), Err(Error::Parse { .. })));
}
