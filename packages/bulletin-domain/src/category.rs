use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Exchange;

pub type CategoryMap = BTreeMap<Exchange, Vec<Category>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub value: String,
	pub kor: String,
	pub org: String,
}

/// A category reference as it appears in the feed: usually one id, occasionally a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
	Single(String),
	List(Vec<String>),
}
impl CategoryId {
	/// The scalar id, or the first element of a list. Filtering and label lookup only ever see
	/// this form.
	pub fn primary(&self) -> Option<&str> {
		match self {
			Self::Single(id) => Some(id.as_str()),
			Self::List(ids) => ids.first().map(String::as_str),
		}
	}
}
impl Default for CategoryId {
	fn default() -> Self {
		Self::Single(String::new())
	}
}
impl From<&str> for CategoryId {
	fn from(id: &str) -> Self {
		Self::Single(id.to_string())
	}
}
