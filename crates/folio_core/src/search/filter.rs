//! Substring filter over content collections.
//!
//! # Responsibility
//! - Match records against a free-text query and an optional tag filter.
//! - Keep the result an order-preserving subsequence of the input.
//!
//! # Invariants
//! - Matching is case-insensitive; the query is never trimmed.
//! - Query match and tag match are combined with AND.
//! - No sorting, ranking or deduplication; the same input always yields the
//!   same output.

use crate::model::certification::Certification;
use crate::model::record::{ExperienceEntry, Project, Resource, ToolkitItem};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

/// Literal selector value meaning "no tag restriction".
pub const TAG_FILTER_ALL: &str = "all";

/// Record that can take part in query/tag filtering.
pub trait Searchable {
    /// Concatenated text used for query matching. Computed, never stored.
    fn searchable_text(&self) -> String;

    /// Tags used for tag filtering. Empty for untagged record kinds.
    fn tags(&self) -> &[String] {
        &[]
    }
}

/// Tag selector state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TagFilter {
    /// Matches every record regardless of tags.
    #[default]
    All,
    /// Matches records with at least one tag containing this value.
    Tag(String),
}

impl TagFilter {
    /// Parses selector input; the literal `all` maps to [`TagFilter::All`].
    pub fn parse(value: &str) -> Self {
        if value == TAG_FILTER_ALL {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    /// Selector value as shown in the tag dropdown.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => TAG_FILTER_ALL,
            Self::Tag(value) => value.as_str(),
        }
    }

    /// Whether any tag in `tags` satisfies this filter.
    ///
    /// Uses substring containment on lowercase forms, so `IR` also matches a
    /// tag like `Hiring`.
    pub fn matches(&self, tags: &[String]) -> bool {
        match self {
            Self::All => true,
            Self::Tag(value) => {
                let needle = value.to_lowercase();
                tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
            }
        }
    }
}

impl Display for TagFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TagFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Query plus tag selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    /// Free-text query, matched verbatim (whitespace included).
    pub query: String,
    pub tag_filter: TagFilter,
}

impl FilterCriteria {
    /// Criteria that match every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Query-only criteria with no tag restriction.
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            tag_filter: TagFilter::All,
        }
    }

    /// Replaces the tag selector.
    pub fn with_tag(mut self, tag_filter: impl Into<TagFilter>) -> Self {
        self.tag_filter = tag_filter.into();
        self
    }

    /// Whether one record satisfies both query and tag conditions.
    pub fn matches<R: Searchable + ?Sized>(&self, record: &R) -> bool {
        matches_query(record, &self.query) && self.tag_filter.matches(record.tags())
    }
}

/// Case-insensitive substring match against [`Searchable::searchable_text`].
///
/// An empty query matches every record.
pub fn matches_query<R: Searchable + ?Sized>(record: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record
        .searchable_text()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// Returns the records satisfying `criteria`, in their original order.
pub fn filter<'a, R: Searchable>(records: &'a [R], criteria: &FilterCriteria) -> Vec<&'a R> {
    records
        .iter()
        .filter(|record| criteria.matches(*record))
        .collect()
}

/// Distinct tags across `records` in first-seen order.
///
/// Used to build tag selector options; records themselves are untouched.
pub fn tag_options<R: Searchable>(records: &[R]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut options = Vec::new();
    for tag in records.iter().flat_map(|record| record.tags()) {
        if seen.insert(tag.as_str()) {
            options.push(tag.clone());
        }
    }
    options
}

impl Searchable for Resource {
    fn searchable_text(&self) -> String {
        format!("{}{}{}", self.title, self.note, self.tags.join(" "))
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for ToolkitItem {
    fn searchable_text(&self) -> String {
        format!("{}{}{}", self.title, self.note, self.tags.join(" "))
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for Certification {
    fn searchable_text(&self) -> String {
        format!("{}{}{}", self.name, self.desc, self.provider)
    }
}

impl Searchable for Project {
    fn searchable_text(&self) -> String {
        format!("{}{}{}", self.name, self.desc, self.tags.join(" "))
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

impl Searchable for ExperienceEntry {
    fn searchable_text(&self) -> String {
        format!(
            "{}{}{}{}",
            self.role,
            self.company,
            self.bullets.join(" "),
            self.tags.join(" ")
        )
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[cfg(test)]
mod tests {
    use super::{filter, matches_query, tag_options, FilterCriteria, Searchable, TagFilter};
    use crate::model::record::Resource;

    struct Plain(&'static str, Vec<String>);

    impl Searchable for Plain {
        fn searchable_text(&self) -> String {
            self.0.to_string()
        }

        fn tags(&self) -> &[String] {
            &self.1
        }
    }

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn tag_filter_parses_all_literal() {
        assert_eq!(TagFilter::parse("all"), TagFilter::All);
        assert_eq!(TagFilter::parse("All"), TagFilter::Tag("All".to_string()));
        assert_eq!(TagFilter::parse("Risk").as_str(), "Risk");
    }

    #[test]
    fn tag_filter_uses_lowercase_substring() {
        let filter = TagFilter::parse("ir");
        assert!(filter.matches(&tags(&["Hiring"])));
        assert!(filter.matches(&tags(&["IR", "Playbook"])));
        assert!(!filter.matches(&tags(&["Privacy"])));
        assert!(!filter.matches(&[]));
        assert!(TagFilter::All.matches(&[]));
    }

    #[test]
    fn whitespace_query_is_literal() {
        let record = Plain("PasswordManager", vec![]);
        assert!(!matches_query(&record, " "));
        assert!(matches_query(&record, ""));
        assert!(matches_query(&Plain("Password Manager", vec![]), "d m"));
    }

    #[test]
    fn query_can_match_across_field_boundary() {
        let resource = Resource {
            title: "Authy".to_string(),
            url: "https://authy.com/".to_string(),
            tags: tags(&["MFA"]),
            note: "Add factors".to_string(),
        };
        assert_eq!(resource.searchable_text(), "AuthyAdd factorsMFA");
        assert!(matches_query(&resource, "yadd"));
    }

    #[test]
    fn filter_requires_query_and_tag() {
        let records = vec![
            Plain("risk register", tags(&["Risk"])),
            Plain("risk questionnaire", tags(&["Vendor"])),
        ];
        let criteria = FilterCriteria::query("risk").with_tag("Vendor");
        let result = filter(&records, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "risk questionnaire");
    }

    #[test]
    fn tag_options_keep_first_seen_order() {
        let records = vec![
            Plain("a", tags(&["Risk", "Register"])),
            Plain("b", tags(&["Vendor", "Risk"])),
        ];
        assert_eq!(tag_options(&records), tags(&["Risk", "Register", "Vendor"]));
    }
}
