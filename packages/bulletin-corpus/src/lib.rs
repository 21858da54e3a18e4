pub mod handle;
pub mod load;

mod corpus;
mod error;

pub use corpus::{Corpus, Entry, PartitionData};
pub use error::Error;
pub use handle::CorpusHandle;
pub use load::load;

pub type Result<T, E = Error> = std::result::Result<T, E>;
