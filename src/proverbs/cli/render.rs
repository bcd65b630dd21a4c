//! # Rendering Module
//!
//! Turns API results into terminal text. Layout calculations (widths,
//! truncation, padding) stay in Rust because they need Unicode-aware
//! measuring; the templates in `templates/` only choose styles and sections.
//!
//! Styles are applied through a `style("name")` template filter backed by
//! [`THEME`]. With color off the filter passes text through unchanged, which is
//! also what tests render with.

use super::styles::{names, THEME};
use super::templates::{
    EXAMPLES_TEMPLATE, ISSUES_TEMPLATE, LIST_TEMPLATE, PROVERB_TEMPLATE, STATS_TEMPLATE,
};
use chrono::{DateTime, Utc};
use colored::Colorize;
use minijinja::{Environment, Value};
use proverbs::api::{CmdMessage, MessageLevel, ProverbDetail, Stats, ValidationIssue};
use proverbs::error::Result;
use proverbs::model::{ProverbEntry, Source};
use proverbs::store::examples::ExampleStats;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;
const CATEGORY_WIDTH: usize = 12;
const ID_WIDTH: usize = 13;
const STATS_NAME_WIDTH: usize = 16;
const TOP_TAGS: usize = 10;

pub struct Renderer {
    env: Environment<'static>,
}

#[derive(Serialize)]
struct ListLine {
    index: String,
    title: String,
    padding: String,
    category: String,
    id: String,
}

#[derive(Serialize)]
struct ListData {
    proverbs: Vec<ListLine>,
    empty: bool,
    footer: String,
}

#[derive(Serialize)]
struct RelatedLine {
    id: String,
    title: String,
}

#[derive(Serialize)]
struct ProverbData {
    id: String,
    title: String,
    text: String,
    author: String,
    category: String,
    source: String,
    source_style: &'static str,
    added: String,
    explanation: String,
    example: String,
    tags: Vec<String>,
    related: Vec<RelatedLine>,
    previous: Option<String>,
    next: Option<String>,
}

#[derive(Serialize)]
struct CountLine {
    name: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct StatsData {
    total: usize,
    official: usize,
    community: usize,
    categories: Vec<CountLine>,
    tags: Vec<CountLine>,
}

#[derive(Serialize)]
struct IssuesData<'a> {
    issues: &'a [ValidationIssue],
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            THEME.apply(&name, &value.to_string(), use_color)
        });

        env.add_template("list", LIST_TEMPLATE)?;
        env.add_template("proverb", PROVERB_TEMPLATE)?;
        env.add_template("stats", STATS_TEMPLATE)?;
        env.add_template("issues", ISSUES_TEMPLATE)?;
        env.add_template("examples", EXAMPLES_TEMPLATE)?;
        Ok(Self { env })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }

    /// `offset` is where this page starts in the full result, so numbering
    /// continues across pages.
    pub fn proverb_list(&self, entries: &[ProverbEntry], total: usize, offset: usize) -> Result<String> {
        let fixed = INDEX_WIDTH + 1 + 2 + CATEGORY_WIDTH + 2 + ID_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed);

        let proverbs: Vec<ListLine> = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let title = truncate_to_width(&entry.proverb.title, available);
                let padding = " ".repeat(available.saturating_sub(title.width()));
                ListLine {
                    index: format!("{:>width$}", format!("{}.", offset + i + 1), width = INDEX_WIDTH),
                    title,
                    padding,
                    category: format!("{:<width$}", entry.proverb.category.as_str(), width = CATEGORY_WIDTH),
                    id: entry.id.clone(),
                }
            })
            .collect();

        let footer = if proverbs.is_empty() {
            String::new()
        } else {
            format!(
                "Showing {}-{} of {}",
                offset + 1,
                offset + proverbs.len(),
                total
            )
        };

        self.render(
            "list",
            &ListData {
                empty: proverbs.is_empty(),
                proverbs,
                footer,
            },
        )
    }

    pub fn proverb(&self, entry: &ProverbEntry) -> Result<String> {
        self.render("proverb", &proverb_data(entry))
    }

    pub fn proverb_detail(&self, detail: &ProverbDetail) -> Result<String> {
        let mut data = proverb_data(&detail.entry);
        data.related = detail
            .related
            .iter()
            .map(|r| RelatedLine {
                id: r.id.clone(),
                title: r.proverb.title.clone(),
            })
            .collect();
        data.previous = detail.previous.as_ref().map(|e| e.id.clone());
        data.next = detail.next.as_ref().map(|e| e.id.clone());
        self.render("proverb", &data)
    }

    pub fn stats(&self, stats: &Stats) -> Result<String> {
        let categories = stats
            .categories
            .iter()
            .map(|(name, count)| count_line(name.as_str(), *count))
            .collect();

        let mut tags: Vec<(&String, &usize)> = stats.tags.iter().collect();
        // Most used first, alphabetical among equals
        tags.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        let tags = tags
            .into_iter()
            .take(TOP_TAGS)
            .map(|(name, count)| count_line(name, *count))
            .collect();

        self.render(
            "stats",
            &StatsData {
                total: stats.total,
                official: stats.official,
                community: stats.community,
                categories,
                tags,
            },
        )
    }

    pub fn issues(&self, issues: &[ValidationIssue]) -> Result<String> {
        self.render("issues", &IssuesData { issues })
    }

    pub fn example_stats(&self, stats: &ExampleStats) -> Result<String> {
        self.render("examples", stats)
    }
}

fn proverb_data(entry: &ProverbEntry) -> ProverbData {
    let proverb = &entry.proverb;
    ProverbData {
        id: entry.id.clone(),
        title: proverb.title.clone(),
        text: proverb.text.clone(),
        author: proverb.author.clone(),
        category: proverb.category.to_string(),
        source: proverb.source.to_string(),
        source_style: match proverb.source {
            Source::Official => names::OFFICIAL,
            _ => names::COMMUNITY,
        },
        added: format_time_ago(proverb.created_at),
        explanation: proverb.explanation.clone(),
        example: proverb.example.clone(),
        tags: proverb.tags.clone(),
        related: Vec::new(),
        previous: None,
        next: None,
    }
}

fn count_line(name: &str, count: usize) -> CountLine {
    CountLine {
        name: name.to_string(),
        padding: " ".repeat(STATS_NAME_WIDTH.saturating_sub(name.width()).max(1)),
        count,
    }
}

/// Prints command messages to stdout, colored by level.
pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    timeago::Formatter::new().convert(duration.to_std().unwrap_or_default())
}
