use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// One exchange partition of the corpus.
///
/// The declaration order is the partition order used whenever partitions are concatenated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
	HongKong,
	Shenzhen,
}
impl Exchange {
	pub const ALL: [Exchange; 2] = [Exchange::HongKong, Exchange::Shenzhen];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::HongKong => "hongkong",
			Self::Shenzhen => "shenzhen",
		}
	}

	pub fn parse(raw: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|exchange| exchange.as_str() == raw)
	}
}
impl Display for Exchange {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Which partitions a query reads from.
///
/// Decoding never fails. An empty value means `all`; anything that is neither `all` nor a known
/// exchange becomes [`ExchangeScope::Unrecognized`] and selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExchangeScope {
	#[default]
	All,
	Partition(Exchange),
	Unrecognized(String),
}
impl ExchangeScope {
	pub fn parse(raw: &str) -> Self {
		if raw.is_empty() || raw == "all" {
			return Self::All;
		}

		match Exchange::parse(raw) {
			Some(exchange) => Self::Partition(exchange),
			None => Self::Unrecognized(raw.to_string()),
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::All => "all",
			Self::Partition(exchange) => exchange.as_str(),
			Self::Unrecognized(raw) => raw,
		}
	}
}
impl From<String> for ExchangeScope {
	fn from(raw: String) -> Self {
		Self::parse(&raw)
	}
}
impl From<ExchangeScope> for String {
	fn from(scope: ExchangeScope) -> Self {
		scope.as_str().to_string()
	}
}
impl From<Exchange> for ExchangeScope {
	fn from(exchange: Exchange) -> Self {
		Self::Partition(exchange)
	}
}
