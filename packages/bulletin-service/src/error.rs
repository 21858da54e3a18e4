pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid query: {message}")]
	InvalidQuery { message: String },
	#[error("Invalid configuration: {message}")]
	Config { message: String },
	#[error("Corpus error: {message}")]
	Corpus { message: String },
}
impl From<bulletin_corpus::Error> for Error {
	fn from(err: bulletin_corpus::Error) -> Self {
		Self::Corpus { message: err.to_string() }
	}
}
