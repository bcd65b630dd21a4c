use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Proverb, Source};
use crate::store::Collection;
use serde::Serialize;
use std::fmt;

/// One broken invariant on one proverb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub proverb_id: String,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    fn new(id: &str, field: &str, message: impl Into<String>) -> Self {
        Self {
            proverb_id: id.to_string(),
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "proverb {}: {} - {}", self.proverb_id, self.field, self.message)
    }
}

/// Checks every proverb in both mappings and reports all problems found.
///
/// Nothing is fixed or removed: a collection with issues is still served, the
/// issues are only surfaced as warnings.
pub fn run(collection: &Collection) -> Result<CmdResult> {
    let mut issues = Vec::new();
    for (id, proverb) in &collection.official {
        issues.extend(check(id, proverb, &Source::Official));
    }
    for (id, proverb) in &collection.community {
        issues.extend(check(id, proverb, &Source::Community));
    }

    let mut result = CmdResult::default();
    if issues.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "All {} proverbs are valid.",
            collection.len()
        )));
    } else {
        result.add_message(CmdMessage::warning(format!(
            "Found {} validation issue(s).",
            issues.len()
        )));
    }

    Ok(result.with_issues(issues))
}

fn check(id: &str, proverb: &Proverb, mapping: &Source) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let required = [
        ("title", &proverb.title),
        ("text", &proverb.text),
        ("author", &proverb.author),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(ValidationIssue::new(id, field, format!("{} is required", field)));
        }
    }

    if !proverb.category.is_valid() {
        issues.push(ValidationIssue::new(
            id,
            "category",
            format!("invalid category: {}", proverb.category),
        ));
    }

    if !proverb.source.is_valid() {
        issues.push(ValidationIssue::new(
            id,
            "source",
            format!("invalid source: {}", proverb.source),
        ));
    } else if &proverb.source != mapping {
        issues.push(ValidationIssue::new(
            id,
            "source",
            format!(
                "source {} does not match the {} collection",
                proverb.source, mapping
            ),
        ));
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test_utils::{proverb, sample_collection};

    #[test]
    fn valid_collection_has_no_issues() {
        let result = run(&sample_collection()).unwrap();
        assert!(result.issues.is_empty());
        assert!(result.messages[0].content.contains("All 2 proverbs are valid"));
    }

    #[test]
    fn reports_every_issue_without_stopping() {
        let mut collection = sample_collection();
        let mut broken = proverb("", Category::from("astrology"), Source::Official);
        broken.text = "  ".into();
        broken.author = String::new();
        collection.official.insert("official-002".into(), broken);

        let result = run(&collection).unwrap();
        let fields: Vec<_> = result
            .issues
            .iter()
            .filter(|i| i.proverb_id == "official-002")
            .map(|i| i.field.as_str())
            .collect();

        assert_eq!(fields, vec!["title", "text", "author", "category"]);
        assert_eq!(result.issues.len(), 4);
        assert!(result.messages[0].content.contains("4 validation issue"));
    }

    #[test]
    fn reports_source_mismatch() {
        let mut collection = sample_collection();
        let stray = proverb("Stray", Category::Idioms, Source::Official);
        collection.community.insert("community-002".into(), stray);

        let result = run(&collection).unwrap();
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.proverb_id, "community-002");
        assert_eq!(issue.field, "source");
        assert!(issue.message.contains("does not match"));
    }

    #[test]
    fn reports_unrecognized_source() {
        let mut collection = sample_collection();
        let odd = proverb("Odd", Category::Idioms, Source::from("rumour".to_string()));
        collection.community.insert("community-002".into(), odd);

        let result = run(&collection).unwrap();
        assert_eq!(
            result.issues[0].to_string(),
            "proverb community-002: source - invalid source: rumour"
        );
    }

    #[test]
    fn does_not_mutate_collection() {
        let mut collection = sample_collection();
        collection
            .community
            .insert("community-002".into(), proverb("", Category::Idioms, Source::Community));
        let before = collection.clone();

        run(&collection).unwrap();
        assert_eq!(collection, before);
    }
}
