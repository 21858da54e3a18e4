use std::collections::BTreeMap;

use time::OffsetDateTime;

use bulletin_corpus::Entry;
use bulletin_domain::timestamp::{self, DayBounds};

use crate::{Error, Result, SearchRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum DropReason {
	Category,
	Keyword,
	TimestampInvalid,
	DateRange,
}

/// AND of the category, keyword, and date-range predicates. An inactive predicate passes
/// everything.
#[derive(Debug, Clone, Default)]
pub(crate) struct AnnouncementFilter {
	category: Option<String>,
	/// Already case-folded.
	keyword: Option<String>,
	start: Option<OffsetDateTime>,
	end: Option<OffsetDateTime>,
}
impl AnnouncementFilter {
	pub(crate) fn from_request(req: &SearchRequest, bounds: &DayBounds) -> Result<Self> {
		let category = (!req.category.is_empty()).then(|| req.category.clone());
		let keyword = (!req.keyword.is_empty()).then(|| req.keyword.to_lowercase());
		let start_day = parse_day("startDate", req.start_date.as_deref())?;
		let end_day = parse_day("endDate", req.end_date.as_deref())?;

		if let (Some(start_day), Some(end_day)) = (start_day, end_day)
			&& start_day > end_day
		{
			return Err(Error::InvalidQuery {
				message: "startDate must not be after endDate.".to_string(),
			});
		}

		Ok(Self {
			category,
			keyword,
			start: start_day.map(|day| bounds.start_of(day)),
			end: end_day.map(|day| bounds.end_of(day)),
		})
	}

	pub(crate) fn check(&self, entry: &Entry) -> Result<(), DropReason> {
		if let Some(category) = self.category.as_deref()
			&& entry.announcement.details.category_id.primary() != Some(category)
		{
			return Err(DropReason::Category);
		}
		if let Some(keyword) = self.keyword.as_deref()
			&& !entry.search_text().contains(keyword)
		{
			return Err(DropReason::Keyword);
		}

		let Some(published_at) = entry.published_at else {
			return Err(DropReason::TimestampInvalid);
		};

		if let Some(start) = self.start
			&& published_at < start
		{
			return Err(DropReason::DateRange);
		}
		if let Some(end) = self.end
			&& published_at > end
		{
			return Err(DropReason::DateRange);
		}

		Ok(())
	}

	/// Keeps matching entries in input order and tallies why the rest were dropped.
	pub(crate) fn apply<'a>(&self, candidates: Vec<&'a Entry>) -> (Vec<&'a Entry>, FilterImpact) {
		let candidate_count_pre = candidates.len();
		let mut kept = Vec::with_capacity(candidate_count_pre);
		let mut dropped = BTreeMap::new();

		for entry in candidates {
			match self.check(entry) {
				Ok(()) => kept.push(entry),
				Err(reason) => {
					dropped.entry(reason).and_modify(|count| *count += 1).or_insert(1_usize);
				},
			}
		}

		if let Some(count) = dropped.get(&DropReason::TimestampInvalid) {
			tracing::warn!(
				count,
				"Skipped announcements with unparseable dataDate values while searching."
			);
		}

		let impact =
			FilterImpact { candidate_count_pre, candidate_count_post: kept.len(), dropped };

		(kept, impact)
	}
}

#[derive(Debug, Clone)]
pub(crate) struct FilterImpact {
	pub(crate) candidate_count_pre: usize,
	pub(crate) candidate_count_post: usize,
	pub(crate) dropped: BTreeMap<DropReason, usize>,
}
impl FilterImpact {
	pub(crate) fn dropped_for(&self, reason: DropReason) -> usize {
		self.dropped.get(&reason).copied().unwrap_or(0)
	}
}

fn parse_day(field: &str, raw: Option<&str>) -> Result<Option<time::Date>> {
	let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
		return Ok(None);
	};

	timestamp::parse_calendar_date(raw)
		.map(Some)
		.map_err(|_| Error::InvalidQuery { message: format!("{field} must be a YYYY-MM-DD date.") })
}
