use std::sync::{Arc, RwLock};

use crate::Corpus;

/// Shared reference to the live corpus.
///
/// Readers take a snapshot and keep using it for the whole request; a reload replaces the
/// reference in one step and never mutates a corpus that readers may hold.
#[derive(Debug)]
pub struct CorpusHandle {
	current: RwLock<Arc<Corpus>>,
}
impl CorpusHandle {
	pub fn new(corpus: Corpus) -> Self {
		Self { current: RwLock::new(Arc::new(corpus)) }
	}

	pub fn snapshot(&self) -> Arc<Corpus> {
		self.current.read().unwrap_or_else(|err| err.into_inner()).clone()
	}

	/// Installs `corpus` and returns the one it replaced.
	pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
		let mut current = self.current.write().unwrap_or_else(|err| err.into_inner());

		std::mem::replace(&mut *current, Arc::new(corpus))
	}
}
impl Default for CorpusHandle {
	fn default() -> Self {
		Self::new(Corpus::empty())
	}
}
