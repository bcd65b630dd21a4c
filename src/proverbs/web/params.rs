//! Query string handling.
//!
//! Every parameter arrives as an optional string and is parsed by hand, so a
//! malformed value falls back to its default instead of rejecting the request.

use crate::commands::list::ListFilter;
use crate::commands::{Page, DEFAULT_LIMIT};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub tag: Option<String>,
    pub q: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> Page {
        Page::new(
            parse_or(self.limit.as_deref(), DEFAULT_LIMIT),
            parse_or(self.offset.as_deref(), 0),
        )
    }

    pub fn filter(&self) -> ListFilter {
        ListFilter {
            category: non_empty(&self.category),
            source: non_empty(&self.source),
            tag: non_empty(&self.tag),
            query: non_empty(&self.q),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn query(&self) -> &str {
        self.q.as_deref().unwrap_or_default()
    }
}

/// Non-numeric and negative values yield `default`.
pub fn parse_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

/// Drops blank values; kept values are passed through untouched, since
/// category and tag matching is exact.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_numbers_fall_back() {
        assert_eq!(parse_or(None, 50), 50);
        assert_eq!(parse_or(Some("abc"), 50), 50);
        assert_eq!(parse_or(Some("-5"), 0), 0);
        assert_eq!(parse_or(Some(" 7 "), 50), 7);
    }

    #[test]
    fn page_from_params() {
        let params = ListParams {
            limit: Some("10".into()),
            offset: Some("oops".into()),
            ..Default::default()
        };
        assert_eq!(params.page(), Page::new(10, 0));
        assert_eq!(ListParams::default().page(), Page::default());
    }

    #[test]
    fn blank_filters_are_dropped() {
        let params = ListParams {
            category: Some("".into()),
            tag: Some(" channels ".into()),
            q: Some("   ".into()),
            ..Default::default()
        };
        let filter = params.filter();
        assert_eq!(filter.category, None);
        assert_eq!(filter.tag.as_deref(), Some(" channels "));
        assert_eq!(filter.query, None);
    }
}
