use serde::{Deserialize, Serialize};

use crate::CategoryId;

pub const DEFAULT_TOPIC_COUNT: usize = 3;

/// One disclosure announcement. Immutable once loaded.
///
/// Serialized field names follow the public result shape; the source feed's names are accepted as
/// aliases on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
	pub id: String,
	pub data_date: String,
	#[serde(default, alias = "korName")]
	pub company_name: Option<String>,
	pub details: Details,
	#[serde(alias = "analysisDetails")]
	pub analysis: Analysis,
}
impl Announcement {
	/// Case-folded text the keyword predicate searches, in a fixed field order: company name,
	/// topic, short summary, long summary, security names, security codes.
	pub fn search_text(&self) -> String {
		let mut parts: Vec<&str> = Vec::with_capacity(
			4 + self.details.security_names.len() + self.details.security_codes.len(),
		);

		parts.push(self.company_name.as_deref().unwrap_or(""));
		parts.push(&self.analysis.topic);
		parts.push(&self.analysis.summary_short);
		parts.push(&self.analysis.summary_long);
		parts.extend(self.details.security_names.iter().map(String::as_str));
		parts.extend(self.details.security_codes.iter().map(String::as_str));

		parts.join(" ").to_lowercase()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
	#[serde(default, alias = "secName")]
	pub security_names: Vec<String>,
	#[serde(default, alias = "secCode")]
	pub security_codes: Vec<String>,
	#[serde(default)]
	pub category_id: CategoryId,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub file_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
	/// Comma-joined topic labels.
	#[serde(default, alias = "topicKor")]
	pub topic: String,
	#[serde(default, alias = "summarizeTinyKor")]
	pub summary_short: String,
	#[serde(default, alias = "summarizeLongKor")]
	pub summary_long: String,
}
impl Analysis {
	pub fn topics(&self, max: usize) -> Vec<&str> {
		self.topic.split(',').map(str::trim).filter(|topic| !topic.is_empty()).take(max).collect()
	}
}
