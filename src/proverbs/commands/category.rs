use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Collection;

/// Proverbs whose category is exactly `category`.
///
/// The argument is a free-form string: anything that is not a known category
/// simply matches nothing.
pub fn run(collection: &Collection, category: &str) -> Result<CmdResult> {
    let listed = collection
        .get_all()
        .into_iter()
        .filter(|entry| entry.proverb.category.as_str() == category)
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
