mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Catalog, Config, Corpus, PartitionSource, Search, Security, Service};

use std::{
	fs,
	path::{Path, PathBuf},
};

const MAX_BOUNDARY_OFFSET_MINUTES: u32 = 24 * 60;

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg, path.parent());

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	for (label, value) in [
		("service.http_bind", &cfg.service.http_bind),
		("service.admin_bind", &cfg.service.admin_bind),
		("service.log_level", &cfg.service.log_level),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	for (label, path) in [
		("corpus.hongkong.announcements", &cfg.corpus.hongkong.announcements),
		("corpus.hongkong.categories", &cfg.corpus.hongkong.categories),
		("corpus.shenzhen.announcements", &cfg.corpus.shenzhen.announcements),
		("corpus.shenzhen.categories", &cfg.corpus.shenzhen.categories),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if cfg.search.default_limit == 0 {
		return Err(Error::Validation {
			message: "search.default_limit must be greater than zero.".to_string(),
		});
	}
	if cfg.search.max_limit < cfg.search.default_limit {
		return Err(Error::Validation {
			message: "search.max_limit must be greater than or equal to search.default_limit."
				.to_string(),
		});
	}
	if cfg.search.boundary_offset_minutes.unsigned_abs() >= MAX_BOUNDARY_OFFSET_MINUTES {
		return Err(Error::Validation {
			message: "search.boundary_offset_minutes must be within one day of UTC.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config, base_dir: Option<&Path>) {
	if let Some(base_dir) = base_dir {
		for source in [&mut cfg.corpus.hongkong, &mut cfg.corpus.shenzhen] {
			source.announcements = resolve(base_dir, &source.announcements);
			source.categories = resolve(base_dir, &source.categories);
		}
	}

	cfg.catalog.popular_keywords = cfg
		.catalog
		.popular_keywords
		.iter()
		.map(|keyword| keyword.trim())
		.filter(|keyword| !keyword.is_empty())
		.map(str::to_string)
		.collect();
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
	if path.is_relative() && !path.as_os_str().is_empty() {
		base_dir.join(path)
	} else {
		path.to_path_buf()
	}
}
