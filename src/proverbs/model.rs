use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topical classification of a proverb.
///
/// Data files may carry values outside the ten known categories. Those are kept
/// verbatim as `Unrecognized` so that validation can report them instead of the
/// whole load failing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Simplicity,
    Concurrency,
    Interfaces,
    Errors,
    Testing,
    Performance,
    Design,
    Idioms,
    Reflection,
    Packaging,
    Unrecognized(String),
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Simplicity,
        Category::Concurrency,
        Category::Interfaces,
        Category::Errors,
        Category::Testing,
        Category::Performance,
        Category::Design,
        Category::Idioms,
        Category::Reflection,
        Category::Packaging,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Category::Simplicity => "simplicity",
            Category::Concurrency => "concurrency",
            Category::Interfaces => "interfaces",
            Category::Errors => "errors",
            Category::Testing => "testing",
            Category::Performance => "performance",
            Category::Design => "design",
            Category::Idioms => "idioms",
            Category::Reflection => "reflection",
            Category::Packaging => "packaging",
            Category::Unrecognized(other) => other,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Category::Unrecognized(_))
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Unrecognized(String::new())
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::ALL
            .iter()
            .find(|c| c.as_str() == value)
            .cloned()
            .unwrap_or(Category::Unrecognized(value))
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Category::from(value.to_string())
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a proverb is curated (official) or community-contributed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Source {
    Official,
    Community,
    Unrecognized(String),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Official => "official",
            Source::Community => "community",
            Source::Unrecognized(other) => other,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Source::Unrecognized(_))
    }
}

impl Default for Source {
    fn default() -> Self {
        Source::Unrecognized(String::new())
    }
}

impl From<String> for Source {
    fn from(value: String) -> Self {
        match value.as_str() {
            "official" => Source::Official,
            "community" => Source::Community,
            _ => Source::Unrecognized(value),
        }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.as_str().to_string()
    }
}

/// Parses only the two known sources; anything else is an error so callers can
/// decide on their own fallback.
impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Source::from(s.to_string()) {
            Source::Unrecognized(other) => Err(format!("unknown source: {}", other)),
            known => Ok(known),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proverb {
    pub title: String,
    pub text: String,
    pub author: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub example: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub source: Source,
}

impl Proverb {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl fmt::Display for Proverb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (by {})", self.title, self.text, self.author)
    }
}

/// A proverb together with the identifier it is stored under.
///
/// Every query hands these out so the presentation layers never have to
/// recover an id from a proverb's contents. The default value (empty id and
/// fields) is the sentinel returned when there is nothing to return.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverbEntry {
    pub id: String,
    #[serde(flatten)]
    pub proverb: Proverb,
}

impl ProverbEntry {
    pub fn new(id: impl Into<String>, proverb: Proverb) -> Self {
        Self {
            id: id.into(),
            proverb,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}
