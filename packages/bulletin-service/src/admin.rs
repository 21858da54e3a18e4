use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use bulletin_corpus::Corpus;
use bulletin_domain::Exchange;

use crate::{BulletinService, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadReport {
	pub total_count: usize,
	pub per_partition_counts: BTreeMap<Exchange, usize>,
	pub invalid_timestamps: usize,
}
impl ReloadReport {
	fn from_corpus(corpus: &Corpus) -> Self {
		Self {
			total_count: corpus.len(),
			per_partition_counts: Exchange::ALL
				.into_iter()
				.map(|exchange| (exchange, corpus.entries(exchange).len()))
				.collect(),
			invalid_timestamps: corpus.invalid_timestamps(),
		}
	}
}

impl BulletinService {
	/// Re-reads the configured corpus files and swaps them in. On failure the current corpus
	/// stays live.
	pub fn reload(&self) -> Result<ReloadReport> {
		let corpus = bulletin_corpus::load(&self.cfg.corpus)?;

		Ok(self.replace_corpus(corpus))
	}

	pub fn replace_corpus(&self, corpus: Corpus) -> ReloadReport {
		let report = ReloadReport::from_corpus(&corpus);

		self.corpus.replace(corpus);

		tracing::info!(
			total_count = report.total_count,
			invalid_timestamps = report.invalid_timestamps,
			"Corpus replaced."
		);

		report
	}
}
