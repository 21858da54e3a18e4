use bulletin_corpus::Entry;

#[derive(Debug)]
pub(crate) struct Window<'a> {
	pub(crate) items: Vec<&'a Entry>,
	pub(crate) total_count: usize,
	pub(crate) has_next_page: bool,
	pub(crate) next_cursor: Option<String>,
}

/// Most recent first. The sort is stable, so equal instants keep their selection order.
pub(crate) fn sort_newest_first(entries: &mut [&Entry]) {
	entries.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

/// Slices `[(page - 1) * limit, page * limit)` out of `sorted`, clamped to its bounds.
///
/// `page` and `limit` must both be at least one.
pub(crate) fn paginate(sorted: Vec<&Entry>, page: u32, limit: u32) -> Window<'_> {
	let total_count = sorted.len();
	let start = u64::from(page.saturating_sub(1)) * u64::from(limit);
	let end = start + u64::from(limit);
	let has_next_page = end < total_count as u64;
	let items = match usize::try_from(start) {
		Ok(start) if start < total_count => {
			let end = usize::try_from(end).map_or(total_count, |end| end.min(total_count));

			sorted[start..end].to_vec()
		},
		_ => Vec::new(),
	};

	Window {
		items,
		total_count,
		has_next_page,
		next_cursor: has_next_page.then(|| (u64::from(page) + 1).to_string()),
	}
}

#[cfg(test)]
mod tests {
	use bulletin_corpus::{Corpus, Entry, PartitionData};
	use bulletin_domain::{Analysis, Announcement, Details, Exchange};

	use crate::search::paginate::{paginate, sort_newest_first};

	fn corpus(dates: &[&str]) -> Corpus {
		let announcements = dates
			.iter()
			.enumerate()
			.map(|(i, data_date)| Announcement {
				id: format!("n{i}"),
				data_date: data_date.to_string(),
				company_name: None,
				details: Details::default(),
				analysis: Analysis::default(),
			})
			.collect();

		Corpus::from_partitions([(
			Exchange::HongKong,
			PartitionData { announcements, categories: vec![] },
		)])
		.expect("Failed to build corpus.")
	}

	fn ids(entries: &[&Entry]) -> Vec<String> {
		entries.iter().map(|entry| entry.announcement.id.clone()).collect()
	}

	#[test]
	fn sorts_descending_and_keeps_ties_in_input_order() {
		let corpus = corpus(&[
			"2024-01-01T00:00:00Z",
			"2024-01-03T00:00:00Z",
			"2024-01-02T00:00:00Z",
			"2024-01-03T00:00:00Z",
		]);
		let mut entries: Vec<&Entry> = corpus.iter().collect();

		sort_newest_first(&mut entries);

		assert_eq!(ids(&entries), vec!["n1", "n3", "n2", "n0"]);
	}

	#[test]
	fn sort_compares_instants_across_offsets() {
		let corpus = corpus(&["2024-01-01T10:00:00+09:00", "2024-01-01T02:00:00Z"]);
		let mut entries: Vec<&Entry> = corpus.iter().collect();

		sort_newest_first(&mut entries);

		assert_eq!(ids(&entries), vec!["n1", "n0"]);
	}

	#[test]
	fn windows_partition_the_sequence() {
		let dates: Vec<String> = (1..=7).map(|day| format!("2024-01-{day:02}T00:00:00Z")).collect();
		let dates: Vec<&str> = dates.iter().map(String::as_str).collect();
		let corpus = corpus(&dates);
		let entries: Vec<&Entry> = corpus.iter().collect();
		let first = paginate(entries.clone(), 1, 3);
		let second = paginate(entries.clone(), 2, 3);
		let third = paginate(entries.clone(), 3, 3);

		assert_eq!(ids(&first.items), vec!["n0", "n1", "n2"]);
		assert_eq!(first.next_cursor.as_deref(), Some("2"));
		assert_eq!(ids(&second.items), vec!["n3", "n4", "n5"]);
		assert_eq!(ids(&third.items), vec!["n6"]);
		assert!(!third.has_next_page);
		assert_eq!(third.next_cursor, None);
		assert_eq!(third.total_count, 7);
	}

	#[test]
	fn exact_fit_has_no_next_page() {
		let corpus = corpus(&["2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"]);
		let window = paginate(corpus.iter().collect(), 1, 2);

		assert_eq!(window.items.len(), 2);
		assert!(!window.has_next_page);
	}

	#[test]
	fn out_of_range_page_is_empty_not_an_error() {
		let corpus = corpus(&["2024-01-01T00:00:00Z"]);
		let window = paginate(corpus.iter().collect(), 5, 10);

		assert!(window.items.is_empty());
		assert_eq!(window.total_count, 1);
		assert!(!window.has_next_page);

		let window = paginate(corpus.iter().collect(), u32::MAX, u32::MAX);

		assert!(window.items.is_empty());
	}
}
