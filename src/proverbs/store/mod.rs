//! # Storage Layer
//!
//! The whole proverb set lives in memory in a [`Collection`]: two ordered
//! mappings from identifier to [`Proverb`], one per [`Source`], plus the time the
//! collection was assembled.
//!
//! ## Lifecycle
//!
//! A collection is produced exactly once at startup by a [`CollectionSource`]
//! and is never mutated afterwards. Consumers receive it by value (the API
//! facade owns it) and only ever read from it, which is what lets the web layer
//! share it across request handlers without any locking.
//!
//! ## Sources
//!
//! - [`builtin::BuiltinSource`]: the definitions compiled into the binary, with
//!   code examples attached from an optional directory of example files
//! - [`fs::ExportFile`]: a JSON export previously written by
//!   [`fs::save_collection`]
//!
//! ## Ordering
//!
//! Both mappings are `BTreeMap`s, so [`Collection::get_all`] always yields
//! official entries sorted by id followed by community entries sorted by id.
//! Callers should only rely on "every entry exactly once", but the order is
//! stable for a given data set.

use crate::error::Result;
use crate::model::{Proverb, ProverbEntry, Source};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub mod builtin;
pub mod examples;
pub mod fs;

/// Anything that can produce the collection at startup.
pub trait CollectionSource {
    fn load(&self) -> Result<Collection>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub official: BTreeMap<String, Proverb>,
    #[serde(default)]
    pub community: BTreeMap<String, Proverb>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(
        official: BTreeMap<String, Proverb>,
        community: BTreeMap<String, Proverb>,
    ) -> Self {
        Self {
            official,
            community,
            updated_at: Utc::now(),
        }
    }

    /// Every proverb from both mappings, official first.
    pub fn get_all(&self) -> Vec<ProverbEntry> {
        let mut all = Vec::with_capacity(self.len());
        all.extend(entries(&self.official));
        all.extend(entries(&self.community));
        all
    }

    /// Looks the id up in the official mapping, then in the community one.
    pub fn get_by_id(&self, id: &str) -> Option<ProverbEntry> {
        self.official
            .get(id)
            .or_else(|| self.community.get(id))
            .map(|proverb| ProverbEntry::new(id, proverb.clone()))
    }

    /// Proverbs of one mapping. An unrecognized source yields the full merged
    /// set; existing API clients depend on that fallback.
    pub fn get_by_source(&self, source: &str) -> Vec<ProverbEntry> {
        match source.parse::<Source>() {
            Ok(Source::Official) => entries(&self.official).collect(),
            Ok(Source::Community) => entries(&self.community).collect(),
            _ => {
                debug!(source, "unrecognized source, returning all proverbs");
                self.get_all()
            }
        }
    }

    pub fn official_count(&self) -> usize {
        self.official.len()
    }

    pub fn community_count(&self) -> usize {
        self.community.len()
    }

    pub fn len(&self) -> usize {
        self.official.len() + self.community.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn entries(map: &BTreeMap<String, Proverb>) -> impl Iterator<Item = ProverbEntry> + '_ {
    map.iter()
        .map(|(id, proverb)| ProverbEntry::new(id.clone(), proverb.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test_utils::CollectionFixture;
    use std::collections::HashSet;

    fn fixture() -> Collection {
        CollectionFixture::new()
            .with_official("official-002", "Concurrency is not parallelism.", Category::Concurrency)
            .with_official("official-001", "Don't communicate by sharing memory.", Category::Concurrency)
            .with_community("community-001", "Make the zero value useful", Category::Design)
            .build()
    }

    #[test]
    fn get_all_contains_every_entry_once() {
        let collection = fixture();
        let all = collection.get_all();

        assert_eq!(
            all.len(),
            collection.official_count() + collection.community_count()
        );
        let ids: HashSet<_> = all.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), all.len());
    }

    #[test]
    fn get_all_orders_official_then_by_id() {
        let ids: Vec<_> = fixture().get_all().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["official-001", "official-002", "community-001"]);
    }

    #[test]
    fn get_by_id_source_matches_mapping() {
        let collection = fixture();
        for id in collection.official.keys() {
            let entry = collection.get_by_id(id).unwrap();
            assert_eq!(entry.proverb.source, Source::Official);
        }
        for id in collection.community.keys() {
            let entry = collection.get_by_id(id).unwrap();
            assert_eq!(entry.proverb.source, Source::Community);
        }
    }

    #[test]
    fn get_by_id_missing_is_none() {
        assert!(fixture().get_by_id("official-999").is_none());
    }

    #[test]
    fn get_by_id_prefers_official_mapping() {
        let mut collection = fixture();
        let mut shadow = collection.official["official-001"].clone();
        shadow.title = "Shadowed".into();
        shadow.source = Source::Community;
        collection.community.insert("official-001".into(), shadow);

        let entry = collection.get_by_id("official-001").unwrap();
        assert_eq!(entry.proverb.source, Source::Official);
    }

    #[test]
    fn get_by_source_filters_mapping() {
        let collection = fixture();
        assert_eq!(collection.get_by_source("official").len(), 2);
        assert_eq!(collection.get_by_source("community").len(), 1);
    }

    #[test]
    fn get_by_source_unrecognized_falls_back_to_all() {
        let collection = fixture();
        assert_eq!(collection.get_by_source("everyone").len(), 3);
        assert_eq!(collection.get_by_source("").len(), 3);
    }

    #[test]
    fn empty_collection() {
        let collection = Collection::default();
        assert!(collection.is_empty());
        assert!(collection.get_all().is_empty());
    }
}
