use crate::model::Category;
use crate::store::Collection;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub total: usize,
    pub official: usize,
    pub community: usize,
    pub categories: BTreeMap<Category, usize>,
    pub tags: BTreeMap<String, usize>,
}

/// Totals per source, category and tag in a single pass.
pub fn run(collection: &Collection) -> Stats {
    let mut stats = Stats {
        total: collection.len(),
        official: collection.official_count(),
        community: collection.community_count(),
        ..Default::default()
    };

    for entry in collection.get_all() {
        *stats
            .categories
            .entry(entry.proverb.category.clone())
            .or_default() += 1;
        for tag in &entry.proverb.tags {
            *stats.tags.entry(tag.clone()).or_default() += 1;
        }
    }

    stats
}
