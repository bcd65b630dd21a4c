use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names referenced from the terminal templates.
pub mod names {
    pub const TITLE: &str = "title";
    pub const INDEX: &str = "index";
    pub const ID: &str = "id";
    pub const CATEGORY: &str = "category";
    pub const OFFICIAL: &str = "official";
    pub const COMMUNITY: &str = "community";
    pub const CODE: &str = "code";
    pub const DIM: &str = "dim";
    pub const FIELD: &str = "field";
}

/// Prepended when a template names a style that is not registered.
const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub struct Theme {
    styles: HashMap<&'static str, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    pub fn add(mut self, name: &'static str, style: Style) -> Self {
        self.styles.insert(name, style);
        self
    }

    /// Styles `text`, or returns it untouched when color is off. Unknown names
    /// are flagged in either mode so template typos show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::INDEX, Style::new().yellow())
        .add(names::ID, Style::new().color256(245))
        .add(names::CATEGORY, Style::new().cyan())
        .add(names::OFFICIAL, Style::new().blue())
        .add(names::COMMUNITY, Style::new().magenta())
        .add(names::CODE, Style::new().green())
        .add(names::DIM, Style::new().dim())
        .add(names::FIELD, Style::new().yellow().bold())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_leaves_text_alone() {
        assert_eq!(THEME.apply(names::TITLE, "Errors are values.", false), "Errors are values.");
    }

    #[test]
    fn color_mode_adds_ansi() {
        let styled = THEME.apply(names::TITLE, "bold", true);
        assert!(styled.contains("\u{1b}["));
        assert!(styled.contains("bold"));
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(THEME.apply("titel", "x", false), "(!?) x");
    }
}
