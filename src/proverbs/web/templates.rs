//! # Page Templates
//!
//! HTML pages are minijinja templates kept as standalone files under
//! `web/templates/` and compiled into the binary with `include_str!`. Every
//! content template extends `base.html`; proverb cards come from the shared
//! `_proverb_card.html` partial.
//!
//! Auto-escaping is on for all `.html` templates. The only filters that emit
//! raw markup are `format_code` (which escapes first) and `markdown` (which
//! escapes any raw HTML in its input).
//!
//! Helpers registered on the environment:
//!
//! - `format_category`: `"concurrency"` → `"Concurrency"`
//! - `format_source`: `"official"` → `"Official"`
//! - `format_date`: RFC 3339 timestamp → `"November 18, 2015"`
//! - `truncate(n)`: at most `n` characters, then `...`
//! - `format_code`: escaped `<pre><code class="language-go">` block
//! - `markdown`: explanation text rendered to HTML

use crate::error::Result;
use chrono::DateTime;
use minijinja::{Environment, HtmlEscape, Value};
use pulldown_cmark::{html, Event, Parser};
use serde::Serialize;

const TEMPLATES: [(&str, &str); 11] = [
    ("base.html", include_str!("templates/base.html")),
    ("_proverb_card.html", include_str!("templates/_proverb_card.html")),
    ("index.html", include_str!("templates/index.html")),
    ("proverb.html", include_str!("templates/proverb.html")),
    ("categories.html", include_str!("templates/categories.html")),
    ("category.html", include_str!("templates/category.html")),
    ("tags.html", include_str!("templates/tags.html")),
    ("tag.html", include_str!("templates/tag.html")),
    ("source.html", include_str!("templates/source.html")),
    ("search.html", include_str!("templates/search.html")),
    ("not_found.html", include_str!("templates/not_found.html")),
];

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("format_category", format_category);
        env.add_filter("format_source", format_source);
        env.add_filter("format_date", format_date);
        env.add_filter("truncate", truncate);
        env.add_filter("format_code", format_code);
        env.add_filter("markdown", markdown);

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_category(value: String) -> String {
    value
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_source(value: String) -> String {
    capitalize(&value)
}

/// Unparseable input is returned as is.
pub fn format_date(value: String) -> String {
    match DateTime::parse_from_rfc3339(&value) {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => value,
    }
}

pub fn truncate(value: String, length: usize) -> String {
    if value.chars().count() <= length {
        return value;
    }
    let mut cut: String = value.chars().take(length).collect();
    cut.push_str("...");
    cut
}

pub fn format_code(code: String) -> Value {
    Value::from_safe_string(format!(
        "<pre><code class=\"language-go\">{}</code></pre>",
        HtmlEscape(&code)
    ))
}

/// Raw HTML in the source is rendered as escaped text; explanations may come
/// from an arbitrary export file.
pub fn markdown(text: String) -> Value {
    let events = Parser::new(&text).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    Value::from_safe_string(out)
}
