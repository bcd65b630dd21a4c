use super::examples::ExampleLibrary;
use super::{Collection, CollectionSource};
use crate::error::{ProverbsError, Result};
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// The proverb definitions shipped with the binary.
pub const DEFINITIONS: &str = include_str!("../../../data/proverbs.json");

/// Loads the compiled-in definitions and attaches code examples from
/// `examples_dir`, when one is configured.
///
/// An example file replaces the inline example of the proverb with the same
/// id. Examples for ids that are not defined are ignored.
pub struct BuiltinSource {
    examples_dir: Option<PathBuf>,
    example_extensions: Vec<String>,
}

impl BuiltinSource {
    pub fn new() -> Self {
        Self {
            examples_dir: None,
            example_extensions: Vec::new(),
        }
    }

    pub fn with_examples(mut self, dir: impl Into<PathBuf>, extensions: &[String]) -> Self {
        self.examples_dir = Some(dir.into());
        self.example_extensions = extensions.to_vec();
        self
    }

    pub fn examples(&self) -> ExampleLibrary {
        match &self.examples_dir {
            Some(dir) => ExampleLibrary::load(dir, &self.example_extensions),
            None => ExampleLibrary::new(),
        }
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinSource {
    /// Like [`CollectionSource::load`], but also hands back the example library
    /// so callers can report on it without reading the directory twice.
    pub fn load_with_examples(&self) -> Result<(Collection, ExampleLibrary)> {
        let mut collection = parse_definitions(DEFINITIONS)?;
        let examples = self.examples();
        attach_examples(&mut collection, &examples);

        let stats = examples.stats();
        info!(
            proverbs = collection.len(),
            examples = stats.total,
            official_examples = stats.official,
            community_examples = stats.community,
            "loaded builtin proverbs"
        );
        Ok((collection, examples))
    }
}

impl CollectionSource for BuiltinSource {
    fn load(&self) -> Result<Collection> {
        self.load_with_examples().map(|(collection, _)| collection)
    }
}

pub fn parse_definitions(raw: &str) -> Result<Collection> {
    let mut collection: Collection = serde_json::from_str(raw)
        .map_err(|e| ProverbsError::Load(format!("invalid proverb definitions: {}", e)))?;
    collection.updated_at = Utc::now();
    Ok(collection)
}

pub fn attach_examples(collection: &mut Collection, examples: &ExampleLibrary) {
    let mappings = [&mut collection.official, &mut collection.community];
    for mapping in mappings {
        for (id, proverb) in mapping.iter_mut() {
            if let Some(example) = examples.get(id) {
                proverb.example = example.to_string();
            }
        }
    }
}
