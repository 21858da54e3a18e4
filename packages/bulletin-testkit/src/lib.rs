mod error;

pub use error::{Error, Result};

use std::{
	env, fs,
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use bulletin_config::{
	Catalog, Config, Corpus as CorpusSources, PartitionSource, Search, Security, Service,
};
use bulletin_corpus::{Corpus, PartitionData};
use bulletin_domain::{Analysis, Announcement, Category, CategoryId, Details, Exchange};

/// Fluent constructor for synthetic announcements.
#[derive(Debug, Clone)]
pub struct AnnouncementBuilder {
	announcement: Announcement,
}
impl AnnouncementBuilder {
	pub fn new(id: impl Into<String>, data_date: impl Into<String>) -> Self {
		Self {
			announcement: Announcement {
				id: id.into(),
				data_date: data_date.into(),
				company_name: None,
				details: Details::default(),
				analysis: Analysis::default(),
			},
		}
	}

	pub fn company(mut self, name: impl Into<String>) -> Self {
		self.announcement.company_name = Some(name.into());

		self
	}

	pub fn category(mut self, id: impl Into<String>) -> Self {
		self.announcement.details.category_id = CategoryId::Single(id.into());

		self
	}

	pub fn categories<I, S>(mut self, ids: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.announcement.details.category_id =
			CategoryId::List(ids.into_iter().map(Into::into).collect());

		self
	}

	pub fn security(mut self, name: impl Into<String>, code: impl Into<String>) -> Self {
		self.announcement.details.security_names.push(name.into());
		self.announcement.details.security_codes.push(code.into());

		self
	}

	pub fn file_link(mut self, link: impl Into<String>) -> Self {
		self.announcement.details.file_link = Some(link.into());

		self
	}

	pub fn topic(mut self, topic: impl Into<String>) -> Self {
		self.announcement.analysis.topic = topic.into();

		self
	}

	pub fn summaries(mut self, short: impl Into<String>, long: impl Into<String>) -> Self {
		self.announcement.analysis.summary_short = short.into();
		self.announcement.analysis.summary_long = long.into();

		self
	}

	pub fn build(self) -> Announcement {
		self.announcement
	}
}

pub fn announcement(id: &str, data_date: &str) -> Announcement {
	AnnouncementBuilder::new(id, data_date).build()
}

pub fn category(value: &str, kor: &str) -> Category {
	Category { value: value.to_string(), kor: kor.to_string(), org: format!("{value} (source)") }
}

/// One announcement per day, `days` days starting at `start_day` of January 2024, ids
/// `{prefix}-{day:02}`.
pub fn january_series(prefix: &str, start_day: u32, days: u32) -> Vec<Announcement> {
	(start_day..start_day + days)
		.map(|day| {
			announcement(&format!("{prefix}-{day:02}"), &format!("2024-01-{day:02}T09:00:00Z"))
		})
		.collect()
}

pub fn corpus(hongkong: Vec<Announcement>, shenzhen: Vec<Announcement>) -> Result<Corpus> {
	corpus_with_categories(hongkong, Vec::new(), shenzhen, Vec::new())
}

pub fn corpus_with_categories(
	hongkong: Vec<Announcement>,
	hongkong_categories: Vec<Category>,
	shenzhen: Vec<Announcement>,
	shenzhen_categories: Vec<Category>,
) -> Result<Corpus> {
	let corpus = Corpus::from_partitions([
		(
			Exchange::HongKong,
			PartitionData { announcements: hongkong, categories: hongkong_categories },
		),
		(
			Exchange::Shenzhen,
			PartitionData { announcements: shenzhen, categories: shenzhen_categories },
		),
	])?;

	Ok(corpus)
}

/// Config that points at `data_dir`, with the default search settings.
pub fn test_config(data_dir: &Path) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:0".to_string(),
			admin_bind: "127.0.0.1:0".to_string(),
			log_level: "info".to_string(),
		},
		security: Security { bind_localhost_only: true },
		corpus: CorpusSources {
			hongkong: partition_source(data_dir, Exchange::HongKong),
			shenzhen: partition_source(data_dir, Exchange::Shenzhen),
		},
		search: Search { default_limit: 20, max_limit: 100, boundary_offset_minutes: 0 },
		catalog: Catalog::default(),
	}
}

fn partition_source(data_dir: &Path, exchange: Exchange) -> PartitionSource {
	PartitionSource {
		announcements: data_dir.join(format!("{exchange}_announcements.json")),
		categories: data_dir.join(format!("{exchange}_categories.json")),
	}
}

/// Scratch directory holding corpus JSON files. Removed on drop.
pub struct TempDataDir {
	path: PathBuf,
}
impl TempDataDir {
	pub fn new() -> Result<Self> {
		static COUNTER: AtomicU64 = AtomicU64::new(0);

		let nanos = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map_err(|err| Error::Message(format!("System time is before the epoch: {err}.")))?
			.as_nanos();
		let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
		let path = env::temp_dir().join(format!(
			"bulletin_test_{nanos}_{}_{ordinal}",
			std::process::id()
		));

		fs::create_dir_all(&path)?;

		let dir = Self { path };

		for exchange in Exchange::ALL {
			dir.write_partition(exchange, &[], &[])?;
		}

		Ok(dir)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn config(&self) -> Config {
		test_config(&self.path)
	}

	/// Writes a partition as a bare JSON array of announcements.
	pub fn write_partition(
		&self,
		exchange: Exchange,
		announcements: &[Announcement],
		categories: &[Category],
	) -> Result<()> {
		self.write_files(exchange, serde_json::to_value(announcements)?, categories)
	}

	/// Writes a partition wrapped in the feed envelope `{"data": {"getDisclosure": [...]}}`.
	pub fn write_feed_partition(
		&self,
		exchange: Exchange,
		announcements: &[Announcement],
		categories: &[Category],
	) -> Result<()> {
		let envelope = serde_json::json!({ "data": { "getDisclosure": announcements } });

		self.write_files(exchange, envelope, categories)
	}

	pub fn write_raw(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
		let path = self.path.join(file_name);

		fs::write(&path, contents)?;

		Ok(path)
	}

	fn write_files(
		&self,
		exchange: Exchange,
		announcements: serde_json::Value,
		categories: &[Category],
	) -> Result<()> {
		let source = partition_source(&self.path, exchange);

		fs::write(&source.announcements, serde_json::to_vec_pretty(&announcements)?)?;
		fs::write(&source.categories, serde_json::to_vec_pretty(categories)?)?;

		Ok(())
	}
}
impl Drop for TempDataDir {
	fn drop(&mut self) {
		let _ = fs::remove_dir_all(&self.path);
	}
}
