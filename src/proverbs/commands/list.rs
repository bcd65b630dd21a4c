use crate::commands::{search, CmdResult, Page};
use crate::error::Result;
use crate::model::ProverbEntry;
use crate::store::Collection;

/// Criteria combined with AND. `None` (or a blank query) leaves that criterion
/// out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub category: Option<String>,
    pub source: Option<String>,
    pub tag: Option<String>,
    pub query: Option<String>,
}

impl ListFilter {
    fn accepts(&self, entry: &ProverbEntry, needle: Option<&str>) -> bool {
        let proverb = &entry.proverb;
        if let Some(category) = &self.category {
            if proverb.category.as_str() != category {
                return false;
            }
        }
        if let Some(tag) = &self.tag {
            if !proverb.has_tag(tag) {
                return false;
            }
        }
        match needle {
            Some(needle) => search::matches(proverb, needle),
            None => true,
        }
    }
}

/// The filtered listing, windowed by `page`. `total` counts every match before
/// the window is applied.
pub fn run(collection: &Collection, filter: &ListFilter, page: Page) -> Result<CmdResult> {
    let base = match &filter.source {
        Some(source) => collection.get_by_source(source),
        None => collection.get_all(),
    };

    let needle = filter
        .query
        .as_deref()
        .filter(|q| !q.trim().is_empty())
        .map(str::to_lowercase);

    let matched: Vec<ProverbEntry> = base
        .into_iter()
        .filter(|entry| filter.accepts(entry, needle.as_deref()))
        .collect();

    let total = matched.len();
    let listed = page.slice(&matched).to_vec();

    Ok(CmdResult::default().with_listed(listed).with_total(total))
}
