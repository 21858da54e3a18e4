use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub security: Security,
	pub corpus: Corpus,
	pub search: Search,
	#[serde(default)]
	pub catalog: Catalog,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub admin_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Security {
	pub bind_localhost_only: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Corpus {
	pub hongkong: PartitionSource,
	pub shenzhen: PartitionSource,
}

/// JSON files backing one exchange partition. Relative paths resolve against the directory of
/// the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct PartitionSource {
	pub announcements: PathBuf,
	pub categories: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	pub default_limit: u32,
	pub max_limit: u32,
	/// Fixed UTC offset, in minutes, used to turn `startDate`/`endDate` into instants.
	#[serde(default)]
	pub boundary_offset_minutes: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Catalog {
	pub popular_keywords: Vec<String>,
}
impl Default for Catalog {
	fn default() -> Self {
		Self {
			popular_keywords: [
				"배당금",
				"주주총회",
				"재무제표",
				"증자",
				"합병",
				"ESG",
				"지배구조",
				"공시",
			]
				.into_iter()
				.map(str::to_string)
				.collect(),
		}
	}
}
