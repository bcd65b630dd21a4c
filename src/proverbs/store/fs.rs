use super::{Collection, CollectionSource};
use crate::error::{ProverbsError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes the collection as pretty-printed JSON, creating parent directories
/// as needed.
pub fn save_collection(collection: &Collection, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ProverbsError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(collection).map_err(ProverbsError::Serialization)?;
    fs::write(path, content).map_err(ProverbsError::Io)?;
    Ok(())
}

pub fn load_collection(path: &Path) -> Result<Collection> {
    let content = fs::read_to_string(path).map_err(ProverbsError::Io)?;
    let collection: Collection =
        serde_json::from_str(&content).map_err(ProverbsError::Serialization)?;
    Ok(collection)
}

/// A collection previously written with [`save_collection`].
pub struct ExportFile {
    path: PathBuf,
}

impl ExportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CollectionSource for ExportFile {
    fn load(&self) -> Result<Collection> {
        load_collection(&self.path).map_err(|e| {
            ProverbsError::Load(format!("{}: {}", self.path.display(), e))
        })
    }
}
