use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Proverb;
use crate::store::Collection;

/// Case-insensitive substring search over title, text, explanation and tags.
///
/// Results keep the collection's order; there is no ranking. A blank query
/// matches nothing rather than everything. Otherwise the query is matched as
/// given, surrounding whitespace included.
pub fn run(collection: &Collection, query: &str) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Ok(CmdResult::default());
    }
    let needle = query.to_lowercase();

    let listed = collection
        .get_all()
        .into_iter()
        .filter(|entry| matches(&entry.proverb, &needle))
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}

/// `needle` must already be lowercased.
pub fn matches(proverb: &Proverb, needle: &str) -> bool {
    [&proverb.title, &proverb.text, &proverb.explanation]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
        || proverb
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
