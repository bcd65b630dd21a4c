//! # CLI Templates
//!
//! Terminal output is rendered from standalone minijinja templates kept in
//! `templates/` and embedded here as string constants.
//!
//! Templates run with `trim_blocks` on: a block tag on its own line produces
//! no output, so every emitted line break is one written on a content line.
//! Layout math (widths, padding, truncation) is done in `render.rs`; templates
//! only pick styles and decide what to show.

pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const PROVERB_TEMPLATE: &str = include_str!("templates/proverb.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const ISSUES_TEMPLATE: &str = include_str!("templates/issues.tmp");
pub const EXAMPLES_TEMPLATE: &str = include_str!("templates/examples.tmp");
