//! Code examples kept next to the proverb definitions as plain files.
//!
//! Layout under the examples directory:
//!
//! ```text
//! examples/
//! ├── official/official-001.go
//! └── community/community-003.go
//! ```
//!
//! The proverb id is the file name with its extension stripped. Files directly
//! in the root are picked up too. Everything here is best effort: a missing
//! directory or an unreadable file is logged and skipped, and the proverb just
//! ends up without an example.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

const SOURCE_DIRS: [&str; 2] = ["official", "community"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExampleStats {
    pub total: usize,
    pub official: usize,
    pub community: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ExampleLibrary {
    examples: HashMap<String, String>,
}

impl ExampleLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads every example under `root` whose extension is one of `extensions`
    /// (given with or without the leading dot).
    pub fn load<P: AsRef<Path>>(root: P, extensions: &[String]) -> Self {
        let root = root.as_ref();
        let mut library = Self::new();

        if !root.is_dir() {
            warn!(dir = %root.display(), "examples directory not found, continuing without examples");
            return library;
        }

        library.load_dir(root, extensions);
        for sub in SOURCE_DIRS {
            let dir = root.join(sub);
            if dir.is_dir() {
                library.load_dir(&dir, extensions);
            }
        }

        debug!(count = library.examples.len(), dir = %root.display(), "loaded examples");
        library
    }

    fn load_dir(&mut self, dir: &Path, extensions: &[String]) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "failed to read examples directory");
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !has_extension(&path, extensions) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match fs::read_to_string(&path) {
                Ok(content) => {
                    self.examples.insert(id.to_string(), content);
                }
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "skipping unreadable example");
                }
            }
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, content: impl Into<String>) {
        self.examples.insert(id.into(), content.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.examples.get(id).map(String::as_str)
    }

    pub fn has(&self, id: &str) -> bool {
        self.examples.contains_key(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.examples.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Counts by id prefix; ids following neither convention only count
    /// towards the total.
    pub fn stats(&self) -> ExampleStats {
        let mut stats = ExampleStats {
            total: self.examples.len(),
            ..Default::default()
        };
        for id in self.examples.keys() {
            if id.starts_with("official-") {
                stats.official += 1;
            } else if id.starts_with("community-") {
                stats.community += 1;
            }
        }
        stats
    }
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}
