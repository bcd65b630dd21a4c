//! # Command Layer
//!
//! One module per read operation over a [`Collection`]. Every command takes the
//! collection by reference, never touches the terminal or the network, and
//! returns plain Rust values that the web and CLI layers turn into output.
//!
//! [`Collection`]: crate::store::Collection

use crate::model::ProverbEntry;
use std::path::PathBuf;

pub mod category;
pub mod export;
pub mod get;
pub mod list;
pub mod random;
pub mod search;
pub mod source;
pub mod stats;
pub mod tag;
pub mod validate;

pub const DEFAULT_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed: Vec<ProverbEntry>,
    /// Number of matches before pagination.
    pub total: usize,
    pub issues: Vec<validate::ValidationIssue>,
    pub paths: Vec<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Sets the listing and its total in one go, for unpaginated results.
    pub fn with_listed(mut self, entries: Vec<ProverbEntry>) -> Self {
        self.total = entries.len();
        self.listed = entries;
        self
    }

    pub fn with_total(mut self, total: usize) -> Self {
        self.total = total;
        self
    }

    pub fn with_issues(mut self, issues: Vec<validate::ValidationIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }
}

/// Offset/limit window over a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: usize,
    pub offset: usize,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl Page {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// The window into `items`; both ends are clamped to its length, so an
    /// overrun produces a short or empty slice rather than an error.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let total = items.len();
        let start = self.offset.min(total);
        let end = self.offset.saturating_add(self.limit).min(total);
        &items[start..end]
    }
}
