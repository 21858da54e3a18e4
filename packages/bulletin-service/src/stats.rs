use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use bulletin_domain::{Exchange, timestamp};

use crate::BulletinService;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
	pub total_count: usize,
	pub today_count: usize,
	pub per_partition_counts: BTreeMap<Exchange, usize>,
}

impl BulletinService {
	pub fn stats(&self) -> StatsResponse {
		self.stats_on(OffsetDateTime::now_utc().date())
	}

	/// `today_count` is a prefix match of `dataDate` against `YYYY-MM-DD`, not an instant range,
	/// so records carrying a non-UTC offset are counted by their own calendar date.
	pub fn stats_on(&self, today: Date) -> StatsResponse {
		let corpus = self.corpus.snapshot();
		let prefix = timestamp::iso_date(today);
		let today_count =
			corpus.iter().filter(|entry| entry.announcement.data_date.starts_with(&prefix)).count();
		let per_partition_counts = Exchange::ALL
			.into_iter()
			.map(|exchange| (exchange, corpus.entries(exchange).len()))
			.collect();

		StatsResponse { total_count: corpus.len(), today_count, per_partition_counts }
	}
}
