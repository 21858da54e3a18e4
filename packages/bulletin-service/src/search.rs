mod filter;
mod paginate;
mod select;

use serde::{Deserialize, Serialize};

use bulletin_domain::{Announcement, ExchangeScope};

use crate::{BulletinService, Error, Result};
use filter::{AnnouncementFilter, DropReason};

/// Query parameters. Empty `category`/`keyword` and absent or empty dates disable the matching
/// predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchRequest {
	pub exchange: ExchangeScope,
	pub category: String,
	pub keyword: String,
	pub start_date: Option<String>,
	pub end_date: Option<String>,
	pub page: Option<u32>,
	pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
	pub items: Vec<Announcement>,
	/// Matches after filtering, before pagination.
	pub total_count: usize,
	pub has_next_page: bool,
	/// Next page number, present only when `has_next_page`. Valid only while the corpus is
	/// unchanged.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub next_cursor: Option<String>,
}

impl BulletinService {
	pub fn search(&self, req: SearchRequest) -> Result<SearchResponse> {
		let page = req.page.unwrap_or(1);
		let limit = req.limit.unwrap_or(self.cfg.search.default_limit);

		if page == 0 {
			return Err(Error::InvalidQuery {
				message: "page must be greater than zero.".to_string(),
			});
		}
		if limit == 0 {
			return Err(Error::InvalidQuery {
				message: "limit must be greater than zero.".to_string(),
			});
		}
		if limit > self.cfg.search.max_limit {
			return Err(Error::InvalidQuery {
				message: format!("limit must be at most {}.", self.cfg.search.max_limit),
			});
		}

		let filter = AnnouncementFilter::from_request(&req, &self.day_bounds)?;
		let corpus = self.corpus.snapshot();
		let candidates = select::select(&corpus, &req.exchange);
		let (mut kept, impact) = filter.apply(candidates);

		tracing::debug!(
			exchange = req.exchange.as_str(),
			page,
			limit,
			candidates = impact.candidate_count_pre,
			kept = impact.candidate_count_post,
			dropped_category = impact.dropped_for(DropReason::Category),
			dropped_keyword = impact.dropped_for(DropReason::Keyword),
			dropped_date_range = impact.dropped_for(DropReason::DateRange),
			dropped_timestamp_invalid = impact.dropped_for(DropReason::TimestampInvalid),
			"Filtered announcements."
		);

		paginate::sort_newest_first(&mut kept);

		let window = paginate::paginate(kept, page, limit);

		Ok(SearchResponse {
			items: window.items.into_iter().map(|entry| entry.announcement.clone()).collect(),
			total_count: window.total_count,
			has_next_page: window.has_next_page,
			next_cursor: window.next_cursor,
		})
	}
}
