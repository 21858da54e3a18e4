use std::{fs, path::Path};

use serde::de::DeserializeOwned;
use serde_json::Value;

use bulletin_config::PartitionSource;
use bulletin_domain::{Announcement, Category, Exchange};

use crate::{Corpus, Error, PartitionData, Result};

/// Reads every configured partition from disk and builds a validated corpus.
pub fn load(cfg: &bulletin_config::Corpus) -> Result<Corpus> {
	let mut partitions = Vec::with_capacity(Exchange::ALL.len());
	let sources = [(Exchange::HongKong, &cfg.hongkong), (Exchange::Shenzhen, &cfg.shenzhen)];

	for (exchange, source) in sources {
		let data = load_partition(source)?;

		tracing::info!(
			%exchange,
			announcements = data.announcements.len(),
			categories = data.categories.len(),
			"Loaded corpus partition."
		);

		partitions.push((exchange, data));
	}

	Corpus::from_partitions(partitions)
}

pub fn load_partition(source: &PartitionSource) -> Result<PartitionData> {
	let announcements = read_announcements(&source.announcements)?;
	let categories: Vec<Category> = read_json(&source.categories)?;

	Ok(PartitionData { announcements, categories })
}

/// Accepts either a bare array or the feed envelope `{"data": {"getDisclosure": [...]}}`.
fn read_announcements(path: &Path) -> Result<Vec<Announcement>> {
	let mut value: Value = read_json(path)?;

	if let Some(records) = value.pointer_mut("/data/getDisclosure") {
		value = records.take();
	}

	serde_json::from_value(value)
		.map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })
}

fn read_json<T>(path: &Path) -> Result<T>
where
	T: DeserializeOwned,
{
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::Read { path: path.to_path_buf(), source: err })?;

	serde_json::from_str(&raw).map_err(|err| Error::Parse { path: path.to_path_buf(), source: err })
}
