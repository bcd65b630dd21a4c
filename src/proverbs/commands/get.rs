use crate::error::{ProverbsError, Result};
use crate::model::ProverbEntry;
use crate::store::Collection;
use serde::Serialize;

pub const MAX_RELATED: usize = 5;

/// One proverb with what its detail page shows around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProverbDetail {
    pub entry: ProverbEntry,
    /// Up to [`MAX_RELATED`] other proverbs in the same category.
    pub related: Vec<ProverbEntry>,
    /// Neighbours in collection order.
    pub previous: Option<ProverbEntry>,
    pub next: Option<ProverbEntry>,
}

pub fn run(collection: &Collection, id: &str) -> Result<ProverbDetail> {
    let entry = collection
        .get_by_id(id)
        .ok_or_else(|| ProverbsError::NotFound(id.to_string()))?;

    let all = collection.get_all();
    let related = all
        .iter()
        .filter(|other| other.id != entry.id && other.proverb.category == entry.proverb.category)
        .take(MAX_RELATED)
        .cloned()
        .collect();

    let position = all.iter().position(|e| e.id == entry.id);
    let previous = position
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| all.get(i))
        .cloned();
    let next = position.and_then(|i| all.get(i + 1)).cloned();

    Ok(ProverbDetail {
        entry,
        related,
        previous,
        next,
    })
}
