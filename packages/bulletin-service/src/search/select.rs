use bulletin_corpus::{Corpus, Entry};
use bulletin_domain::ExchangeScope;

/// Candidate records for a scope, in partition concatenation order. Unrecognized scopes select
/// nothing.
pub(crate) fn select<'a>(corpus: &'a Corpus, scope: &ExchangeScope) -> Vec<&'a Entry> {
	match scope {
		ExchangeScope::All => corpus.iter().collect(),
		ExchangeScope::Partition(exchange) => corpus.entries(*exchange).iter().collect(),
		ExchangeScope::Unrecognized(raw) => {
			tracing::debug!(scope = %raw, "Unrecognized exchange scope; selecting nothing.");

			Vec::new()
		},
	}
}

#[cfg(test)]
mod tests {
	use bulletin_corpus::{Corpus, PartitionData};
	use bulletin_domain::{Analysis, Announcement, Details, Exchange, ExchangeScope};

	use crate::search::select::select;

	fn announcement(id: &str) -> Announcement {
		Announcement {
			id: id.to_string(),
			data_date: "2024-01-01T00:00:00Z".to_string(),
			company_name: None,
			details: Details::default(),
			analysis: Analysis::default(),
		}
	}

	fn corpus() -> Corpus {
		Corpus::from_partitions([
			(
				Exchange::Shenzhen,
				PartitionData { announcements: vec![announcement("sz-1")], categories: vec![] },
			),
			(
				Exchange::HongKong,
				PartitionData {
					announcements: vec![announcement("hk-1"), announcement("hk-2")],
					categories: vec![],
				},
			),
		])
		.expect("Failed to build corpus.")
	}

	fn ids(scope: ExchangeScope) -> Vec<String> {
		let corpus = corpus();

		select(&corpus, &scope).into_iter().map(|entry| entry.announcement.id.clone()).collect()
	}

	#[test]
	fn all_concatenates_hongkong_before_shenzhen() {
		assert_eq!(ids(ExchangeScope::All), vec!["hk-1", "hk-2", "sz-1"]);
	}

	#[test]
	fn partition_selects_only_that_exchange() {
		assert_eq!(ids(ExchangeScope::Partition(Exchange::Shenzhen)), vec!["sz-1"]);
	}

	#[test]
	fn unrecognized_scope_is_empty() {
		assert!(ids(ExchangeScope::parse("tokyo")).is_empty());
	}
}
