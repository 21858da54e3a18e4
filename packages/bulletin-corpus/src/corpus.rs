use std::collections::{BTreeMap, HashMap, HashSet, hash_map};

use time::OffsetDateTime;

use bulletin_domain::{Announcement, Category, CategoryMap, Exchange, timestamp};

use crate::{Error, Result};

/// Raw records and categories for one exchange, as handed over by a loader.
#[derive(Debug, Clone, Default)]
pub struct PartitionData {
	pub announcements: Vec<Announcement>,
	pub categories: Vec<Category>,
}

/// A loaded announcement with the values derived from it at load time.
#[derive(Debug, Clone)]
pub struct Entry {
	pub exchange: Exchange,
	pub announcement: Announcement,
	/// `None` when `dataDate` could not be parsed.
	pub published_at: Option<OffsetDateTime>,
	search_text: String,
}
impl Entry {
	fn new(exchange: Exchange, announcement: Announcement) -> Self {
		let published_at = match timestamp::parse_timestamp(&announcement.data_date) {
			Ok(instant) => Some(instant),
			Err(err) => {
				tracing::warn!(
					%exchange,
					id = %announcement.id,
					error = %err,
					"Announcement has an unparseable dataDate and is excluded from search."
				);

				None
			},
		};
		let search_text = announcement.search_text();

		Self { exchange, announcement, published_at, search_text }
	}

	/// Case-folded keyword haystack.
	pub fn search_text(&self) -> &str {
		&self.search_text
	}
}

#[derive(Debug, Default)]
struct Partition {
	entries: Vec<Entry>,
	categories: Vec<Category>,
}

/// Immutable, validated set of announcements across all exchange partitions.
#[derive(Debug, Default)]
pub struct Corpus {
	partitions: BTreeMap<Exchange, Partition>,
	index: HashMap<String, (Exchange, usize)>,
	invalid_timestamps: usize,
}
impl Corpus {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Builds a corpus, rejecting records with an empty id and ids repeated inside one partition.
	///
	/// Supplying the same exchange twice appends to that partition.
	pub fn from_partitions<I>(partitions: I) -> Result<Self>
	where
		I: IntoIterator<Item = (Exchange, PartitionData)>,
	{
		let mut raw: BTreeMap<Exchange, PartitionData> = BTreeMap::new();

		for (exchange, data) in partitions {
			let slot = raw.entry(exchange).or_default();

			slot.announcements.extend(data.announcements);
			slot.categories.extend(data.categories);
		}

		let mut corpus = Self::default();

		for (exchange, data) in raw {
			let mut seen = HashSet::with_capacity(data.announcements.len());
			let mut entries = Vec::with_capacity(data.announcements.len());

			for (position, announcement) in data.announcements.into_iter().enumerate() {
				if announcement.id.trim().is_empty() {
					return Err(Error::InvalidRecord {
						exchange,
						position,
						message: "id must be non-empty.".to_string(),
					});
				}
				if !seen.insert(announcement.id.clone()) {
					return Err(Error::DuplicateId { exchange, id: announcement.id });
				}

				let entry = Entry::new(exchange, announcement);

				if entry.published_at.is_none() {
					corpus.invalid_timestamps += 1;
				}

				match corpus.index.entry(entry.announcement.id.clone()) {
					hash_map::Entry::Occupied(first) => tracing::debug!(
						id = %entry.announcement.id,
						first = %first.get().0,
						duplicate = %exchange,
						"Announcement id appears in more than one partition."
					),
					hash_map::Entry::Vacant(slot) => {
						slot.insert((exchange, position));
					},
				}

				entries.push(entry);
			}

			corpus.partitions.insert(exchange, Partition { entries, categories: data.categories });
		}

		Ok(corpus)
	}

	/// Entries of one partition in load order.
	pub fn entries(&self, exchange: Exchange) -> &[Entry] {
		self.partitions.get(&exchange).map(|partition| partition.entries.as_slice()).unwrap_or(&[])
	}

	/// Every entry, partitions concatenated in [`Exchange`] order.
	pub fn iter(&self) -> impl Iterator<Item = &Entry> {
		Exchange::ALL.into_iter().flat_map(|exchange| self.entries(exchange))
	}

	pub fn len(&self) -> usize {
		self.partitions.values().map(|partition| partition.entries.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn get(&self, id: &str) -> Option<&Entry> {
		let (exchange, position) = self.index.get(id)?;

		self.entries(*exchange).get(*position)
	}

	pub fn categories(&self, exchange: Exchange) -> &[Category] {
		self.partitions
			.get(&exchange)
			.map(|partition| partition.categories.as_slice())
			.unwrap_or(&[])
	}

	/// Categories of every exchange, including exchanges with none.
	pub fn category_map(&self) -> CategoryMap {
		Exchange::ALL
			.into_iter()
			.map(|exchange| (exchange, self.categories(exchange).to_vec()))
			.collect()
	}

	/// Number of records whose `dataDate` failed to parse.
	pub fn invalid_timestamps(&self) -> usize {
		self.invalid_timestamps
	}
}
