use bulletin_domain::{Announcement, Category, CategoryId, CategoryMap, Exchange};

use crate::BulletinService;

impl BulletinService {
	pub fn list_categories(&self, exchange: Exchange) -> Vec<Category> {
		self.corpus.snapshot().categories(exchange).to_vec()
	}

	pub fn list_all_categories(&self) -> CategoryMap {
		self.corpus.snapshot().category_map()
	}

	/// First record with this id in partition order, or `None`.
	pub fn get_by_id(&self, id: &str) -> Option<Announcement> {
		self.corpus.snapshot().get(id).map(|entry| entry.announcement.clone())
	}

	/// Display label for a category id, resolved against the live category map.
	pub fn category_label(&self, category_id: &CategoryId) -> String {
		category_name(category_id, Some(&self.list_all_categories()))
	}

	pub fn popular_keywords(&self) -> Vec<String> {
		self.cfg.catalog.popular_keywords.clone()
	}
}

/// Resolves a category id to its `kor` label.
///
/// Only the primary id is used. Without a map, or when no exchange knows the id, the id itself is
/// returned; an id-less value resolves to an empty string.
pub fn category_name(category_id: &CategoryId, categories: Option<&CategoryMap>) -> String {
	let Some(target) = category_id.primary().filter(|id| !id.is_empty()) else {
		return String::new();
	};
	let Some(categories) = categories else {
		return target.to_string();
	};

	categories
		.values()
		.flatten()
		.find(|category| category.value == target)
		.map(|category| category.kor.clone())
		.unwrap_or_else(|| target.to_string())
}
