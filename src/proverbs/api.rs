//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! proverbs operation, whichever front end is asking. The web handlers and the
//! CLI both hold a [`ProverbsApi`] and nothing else from the core.
//!
//! The facade:
//! - **Owns** the loaded [`Collection`] for the lifetime of the process
//! - **Dispatches** each call to the matching `commands::*::run`
//! - **Returns** structured values, never strings meant for a terminal or a page
//!
//! It holds no business logic. Filtering, pagination and validation rules live
//! in `commands/*.rs` and are tested there; tests here only check that calls
//! reach the right command.
//!
//! ## Sharing
//!
//! Every method takes `&self`. The collection is never mutated after
//! construction, so the web layer shares one facade between request handlers
//! through an `Arc` without any lock.

use crate::commands;
use crate::error::Result;
use crate::model::ProverbEntry;
use crate::store::examples::ExampleStats;
use crate::store::Collection;
use rand::Rng;
use std::path::Path;
use tracing::warn;

pub struct ProverbsApi {
    collection: Collection,
    example_stats: ExampleStats,
}

impl ProverbsApi {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            example_stats: ExampleStats::default(),
        }
    }

    pub fn with_example_stats(mut self, stats: ExampleStats) -> Self {
        self.example_stats = stats;
        self
    }

    pub fn all(&self) -> Vec<ProverbEntry> {
        self.collection.get_all()
    }

    pub fn list(&self, filter: &ListFilter, page: Page) -> Result<CmdResult> {
        commands::list::run(&self.collection, filter, page)
    }

    pub fn get(&self, id: &str) -> Result<ProverbDetail> {
        commands::get::run(&self.collection, id)
    }

    pub fn find(&self, id: &str) -> Option<ProverbEntry> {
        self.collection.get_by_id(id)
    }

    pub fn by_category(&self, category: &str) -> Result<CmdResult> {
        commands::category::run(&self.collection, category)
    }

    pub fn by_tag(&self, tag: &str) -> Result<CmdResult> {
        commands::tag::run(&self.collection, tag)
    }

    pub fn by_source(&self, source: &str) -> Result<CmdResult> {
        commands::source::run(&self.collection, source)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.collection, query)
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> ProverbEntry {
        commands::random::run(&self.collection, rng)
    }

    pub fn stats(&self) -> Stats {
        commands::stats::run(&self.collection)
    }

    pub fn validate(&self) -> Result<CmdResult> {
        commands::validate::run(&self.collection)
    }

    pub fn export(&self, path: &Path) -> Result<CmdResult> {
        commands::export::run(&self.collection, path)
    }

    pub fn example_stats(&self) -> ExampleStats {
        self.example_stats
    }

    /// Logs every validation issue as a warning. The collection is served
    /// regardless; returns the number of issues found.
    pub fn warn_on_invalid(&self) -> Result<usize> {
        let result = self.validate()?;
        for issue in &result.issues {
            warn!(
                proverb = %issue.proverb_id,
                field = %issue.field,
                "{}",
                issue.message
            );
        }
        Ok(result.issues.len())
    }
}

pub use commands::get::ProverbDetail;
pub use commands::list::ListFilter;
pub use commands::stats::Stats;
pub use commands::validate::ValidationIssue;
pub use commands::{CmdMessage, CmdResult, MessageLevel, Page, DEFAULT_LIMIT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test_utils::{proverb, sample_collection};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn api() -> ProverbsApi {
        ProverbsApi::new(sample_collection())
    }

    #[test]
    fn dispatches_lookups() {
        let api = api();
        assert_eq!(api.all().len(), 2);
        assert_eq!(api.get("community-001").unwrap().entry.id, "community-001");
        assert!(api.find("official-404").is_none());
        assert_eq!(api.by_category("design").unwrap().listed.len(), 1);
        assert_eq!(api.by_tag("channels").unwrap().listed.len(), 1);
        assert_eq!(api.by_source("official").unwrap().listed.len(), 1);
        assert_eq!(api.search("zero").unwrap().listed.len(), 1);
        assert_eq!(api.stats().total, 2);
    }

    #[test]
    fn list_passes_filter_and_page() {
        let filter = ListFilter {
            source: Some("community".into()),
            ..Default::default()
        };
        let result = api().list(&filter, Page::new(1, 0)).unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.listed[0].id, "community-001");
    }

    #[test]
    fn random_uses_supplied_rng() {
        let entry = api().random(&mut StdRng::seed_from_u64(3));
        assert!(!entry.is_empty());
    }

    #[test]
    fn example_stats_default_to_zero() {
        assert_eq!(api().example_stats(), ExampleStats::default());
        let stats = ExampleStats {
            total: 3,
            official: 2,
            community: 1,
        };
        assert_eq!(api().with_example_stats(stats).example_stats(), stats);
    }

    #[test]
    fn warn_on_invalid_counts_issues() {
        assert_eq!(api().warn_on_invalid().unwrap(), 0);

        let mut collection = sample_collection();
        collection.official.insert(
            "official-002".into(),
            proverb("", Category::from("misc"), crate::model::Source::Official),
        );
        assert_eq!(ProverbsApi::new(collection).warn_on_invalid().unwrap(), 3);
    }
}
