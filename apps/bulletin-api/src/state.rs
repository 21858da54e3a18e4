use std::sync::Arc;

use bulletin_service::BulletinService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<BulletinService>,
}
impl AppState {
	/// Loads the configured corpus and builds the service around it.
	pub fn new(config: bulletin_config::Config) -> color_eyre::Result<Self> {
		let corpus = bulletin_corpus::load(&config.corpus)?;
		let service = BulletinService::new(config, corpus)?;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: BulletinService) -> Self {
		Self { service: Arc::new(service) }
	}
}
