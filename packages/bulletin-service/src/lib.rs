pub mod admin;
pub mod lookup;
pub mod search;
pub mod stats;

mod error;

pub use admin::ReloadReport;
pub use error::{Error, Result};
pub use lookup::category_name;
pub use search::{SearchRequest, SearchResponse};
pub use stats::StatsResponse;

use std::sync::Arc;

use bulletin_config::Config;
use bulletin_corpus::{Corpus, CorpusHandle};
use bulletin_domain::timestamp::DayBounds;

/// Read-only retrieval over an injected corpus.
///
/// Every call works on a single corpus snapshot and keeps no state between calls.
pub struct BulletinService {
	pub cfg: Config,
	corpus: CorpusHandle,
	day_bounds: DayBounds,
}
impl BulletinService {
	pub fn new(cfg: Config, corpus: Corpus) -> Result<Self> {
		let day_bounds = DayBounds::with_offset_minutes(cfg.search.boundary_offset_minutes)
			.map_err(|err| Error::Config { message: err.to_string() })?;

		Ok(Self { cfg, corpus: CorpusHandle::new(corpus), day_bounds })
	}

	pub fn corpus(&self) -> Arc<Corpus> {
		self.corpus.snapshot()
	}
}
