use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Collection;

/// Proverbs from one source. Unrecognized sources list everything, see
/// [`Collection::get_by_source`].
pub fn run(collection: &Collection, source: &str) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed(collection.get_by_source(source)))
}
