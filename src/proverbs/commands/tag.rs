use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Collection;

/// Proverbs carrying `tag`, compared exactly and case-sensitively.
pub fn run(collection: &Collection, tag: &str) -> Result<CmdResult> {
    let listed = collection
        .get_all()
        .into_iter()
        .filter(|entry| entry.proverb.has_tag(tag))
        .collect();

    Ok(CmdResult::default().with_listed(listed))
}
