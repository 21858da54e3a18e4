use std::path::PathBuf;

use bulletin_domain::Exchange;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read corpus file at {path:?}.")]
	Read { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse corpus file at {path:?}: {source}")]
	Parse { path: PathBuf, source: serde_json::Error },
	#[error("Invalid record at {exchange}[{position}]: {message}")]
	InvalidRecord { exchange: Exchange, position: usize, message: String },
	#[error("Duplicate announcement id {id:?} in the {exchange} partition.")]
	DuplicateId { exchange: Exchange, id: String },
}
