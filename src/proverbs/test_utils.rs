use crate::model::{Category, Proverb, Source};
use crate::store::Collection;
use chrono::{TimeZone, Utc};

/// Builds small collections for tests without going through a loader.
#[derive(Default)]
pub struct CollectionFixture {
    collection: Collection,
}

impl CollectionFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_official(self, id: &str, title: &str, category: Category) -> Self {
        self.with_proverb(id, proverb(title, category, Source::Official))
    }

    pub fn with_community(self, id: &str, title: &str, category: Category) -> Self {
        self.with_proverb(id, proverb(title, category, Source::Community))
    }

    /// Inserts into the mapping matching the proverb's source; anything with an
    /// unrecognized source lands in the community mapping.
    pub fn with_proverb(mut self, id: &str, proverb: Proverb) -> Self {
        match proverb.source {
            Source::Official => self.collection.official.insert(id.to_string(), proverb),
            _ => self.collection.community.insert(id.to_string(), proverb),
        };
        self
    }

    pub fn build(self) -> Collection {
        self.collection
    }
}

pub fn proverb(title: &str, category: Category, source: Source) -> Proverb {
    Proverb {
        title: title.to_string(),
        text: title.to_string(),
        author: "Rob Pike".to_string(),
        category,
        created_at: Utc.with_ymd_and_hms(2015, 11, 18, 0, 0, 0).unwrap(),
        source,
        ..Default::default()
    }
}

/// The two-proverb collection used throughout the query tests.
pub fn sample_collection() -> Collection {
    let mut sharing = proverb(
        "Don't communicate by sharing memory, share memory by communicating.",
        Category::Concurrency,
        Source::Official,
    );
    sharing.tags = vec!["channels".into(), "goroutines".into()];

    let mut zero = proverb("Make the zero value useful", Category::Design, Source::Community);
    zero.author = "Community".into();
    zero.explanation = "Types should be usable without explicit initialization.".into();
    zero.tags = vec!["zero-value".into(), "design".into()];

    CollectionFixture::new()
        .with_proverb("official-001", sharing)
        .with_proverb("community-001", zero)
        .build()
}
