use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::fs::save_collection;
use crate::store::Collection;
use std::path::Path;

/// Writes the collection to `path` in the format [`crate::store::fs::ExportFile`]
/// reads back.
pub fn run(collection: &Collection, path: &Path) -> Result<CmdResult> {
    save_collection(collection, path)?;

    let mut result = CmdResult::default().with_paths(vec![path.to_path_buf()]);
    result.add_message(CmdMessage::success(format!(
        "Exported {} proverbs to {}",
        collection.len(),
        path.display()
    )));
    Ok(result)
}
