//! Command-centre registry: every documentation page and delivery story,
//! with search and cross-linking helpers.

mod data;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::ContentError;

pub use data::{PAGES, STORIES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Foundation,
    System,
    Content,
    Platform,
    Design,
    Tools,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Foundation,
        Self::System,
        Self::Content,
        Self::Platform,
        Self::Design,
        Self::Tools,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::System => "System",
            Self::Content => "Content",
            Self::Platform => "Platform",
            Self::Design => "Design",
            Self::Tools => "Tools",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_variant("category", s, Self::ALL.map(Self::as_str)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Complete,
    InProgress,
    Planned,
    NeedsReview,
}

impl Status {
    pub const ALL: [Self; 4] = [
        Self::Complete,
        Self::InProgress,
        Self::Planned,
        Self::NeedsReview,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::InProgress => "in-progress",
            Self::Planned => "planned",
            Self::NeedsReview => "needs-review",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| unknown_variant("status", s, Self::ALL.map(Self::as_str)))
    }
}

fn unknown_variant<const N: usize>(
    kind: &'static str,
    value: &str,
    names: [&'static str; N],
) -> ContentError {
    ContentError::UnknownVariant {
        kind,
        value: value.to_string(),
        expected: names.join(", "),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryPage {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub route: &'static str,
    pub status: Status,
    pub version: &'static str,
    pub last_updated: &'static str,
    pub owner: &'static str,
    pub description: &'static str,
    pub dependencies: &'static [&'static str],
    pub related_pages: &'static [&'static str],
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Story {
    /// `ST` followed by the story number, e.g. `ST42`.
    pub id: &'static str,
    pub number: u32,
    pub title: &'static str,
    pub status: Status,
    pub category: &'static str,
    pub description: &'static str,
    pub route: Option<&'static str>,
    pub dependencies: &'static [&'static str],
    pub related_stories: &'static [&'static str],
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResults {
    pub pages: Vec<&'static RegistryPage>,
    pub stories: Vec<&'static Story>,
}

impl SearchResults {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty() && self.stories.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub pages: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub pages: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub total_pages: usize,
    pub total_stories: usize,
    pub by_category: Vec<CategoryCount>,
    pub by_status: Vec<StatusCount>,
}

/// Case-insensitive substring search.
///
/// Pages match on title, description, tags, or id; stories on id, title,
/// description, or category.
#[must_use]
pub fn search(query: &str) -> SearchResults {
    let needle = query.to_lowercase();
    let hit = |text: &str| text.to_lowercase().contains(&needle);

    SearchResults {
        pages: PAGES
            .iter()
            .filter(|p| {
                hit(p.title) || hit(p.description) || p.tags.iter().any(|&t| hit(t)) || hit(p.id)
            })
            .collect(),
        stories: STORIES
            .iter()
            .filter(|s| hit(s.id) || hit(s.title) || hit(s.description) || hit(s.category))
            .collect(),
    }
}

#[must_use]
pub fn page_by_id(id: &str) -> Option<&'static RegistryPage> {
    PAGES.iter().find(|p| p.id == id)
}

/// First page served at `route`. Several pages can share a route.
#[must_use]
pub fn page_by_route(route: &str) -> Option<&'static RegistryPage> {
    PAGES.iter().find(|p| p.route == route)
}

#[must_use]
pub fn story_by_id(id: &str) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}

#[must_use]
pub fn pages_by_category(category: Category) -> Vec<&'static RegistryPage> {
    PAGES.iter().filter(|p| p.category == category).collect()
}

#[must_use]
pub fn pages_by_status(status: Status) -> Vec<&'static RegistryPage> {
    PAGES.iter().filter(|p| p.status == status).collect()
}

fn resolve_ids(ids: &[&str]) -> Vec<&'static RegistryPage> {
    ids.iter().filter_map(|id| page_by_id(id)).collect()
}

/// Pages linked from `page_id`. Links to ids not in the registry are skipped.
#[must_use]
pub fn related_pages(page_id: &str) -> Vec<&'static RegistryPage> {
    page_by_id(page_id).map_or_else(Vec::new, |p| resolve_ids(p.related_pages))
}

/// Pages `page_id` builds on. Unknown ids are skipped.
#[must_use]
pub fn page_dependencies(page_id: &str) -> Vec<&'static RegistryPage> {
    page_by_id(page_id).map_or_else(Vec::new, |p| resolve_ids(p.dependencies))
}

/// Page count for every category, including empty ones.
#[must_use]
pub fn category_summary() -> Vec<CategoryCount> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryCount {
            category,
            pages: PAGES.iter().filter(|p| p.category == category).count(),
        })
        .collect()
}

#[must_use]
pub fn stats() -> RegistryStats {
    RegistryStats {
        total_pages: PAGES.len(),
        total_stories: STORIES.len(),
        by_category: category_summary(),
        by_status: Status::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                pages: pages_by_status(status).len(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn ids(pages: &[&RegistryPage]) -> Vec<&'static str> {
        pages.iter().map(|p| p.id).collect()
    }

    #[test]
    fn ids_are_unique() {
        let pages: HashSet<_> = PAGES.iter().map(|p| p.id).collect();
        assert_eq!(pages.len(), PAGES.len());
        let stories: HashSet<_> = STORIES.iter().map(|s| s.id).collect();
        assert_eq!(stories.len(), STORIES.len());
    }

    #[test]
    fn story_ids_match_numbers() {
        for story in STORIES {
            assert_eq!(story.id, format!("ST{}", story.number));
        }
    }

    #[test]
    fn brand_anchor_lookup() {
        let page = page_by_id("brand-anchor").expect("brand anchor");
        assert_eq!(page.category, Category::Foundation);
        assert_eq!(page.version, "2.0");
        assert_eq!(page.tags, &["dna", "philosophy", "messaging", "brand", "values"]);
        // messaging-matrix shares the route; the first page wins.
        assert_eq!(page_by_route("docs-brand-anchor").map(|p| p.id), Some("brand-anchor"));
        assert!(page_by_id("nope").is_none());
    }

    #[test]
    fn story_lookup() {
        assert_eq!(story_by_id("ST42").map(|s| s.title), Some("Weekly ERA Sprints"));
        assert!(story_by_id("ST99").is_none());
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let results = search("NAVICUE");
        assert!(ids(&results.pages).contains(&"navicue-suite"));
        assert!(results.stories.iter().any(|s| s.id == "ST48"));

        // tag-only match
        assert_eq!(ids(&search("unsplash").pages), vec!["asset-manager"]);
        // story category match
        assert!(search("platform").stories.iter().any(|s| s.id == "ST52"));
        assert!(search("zzz-no-match").is_empty());
    }

    #[test]
    fn links_skip_unknown_ids() {
        // tech-stack is referenced but not registered.
        assert!(related_pages("how-we-build").is_empty());
        assert_eq!(ids(&page_dependencies("how-we-build")), vec!["brand-anchor"]);
        assert_eq!(ids(&related_pages("hcp")), vec!["era-flow", "sphere-principle"]);
        assert_eq!(ids(&page_dependencies("sphere-principle")), vec!["six-pillars"]);
        assert!(related_pages("missing").is_empty());
    }

    #[test]
    fn summary_covers_every_category() {
        let summary = category_summary();
        assert_eq!(summary.len(), Category::ALL.len());
        assert_eq!(summary.iter().map(|c| c.pages).sum::<usize>(), PAGES.len());
        assert_eq!(
            summary.iter().find(|c| c.category == Category::Foundation).map(|c| c.pages),
            Some(2)
        );
    }

    #[test]
    fn stats_zero_fill_statuses() {
        let stats = stats();
        assert_eq!(stats.total_pages, PAGES.len());
        assert_eq!(stats.total_stories, STORIES.len());
        assert_eq!(stats.by_status.len(), 4);
        assert_eq!(stats.by_status[0].pages, PAGES.len());
        assert!(stats.by_status[1..].iter().all(|s| s.pages == 0));
    }

    #[test]
    fn parse_category_and_status() {
        assert_eq!("design".parse::<Category>().unwrap(), Category::Design);
        assert_eq!("In-Progress".parse::<Status>().unwrap(), Status::InProgress);
        let err = "misc".parse::<Category>().unwrap_err();
        assert!(matches!(
            err,
            ContentError::UnknownVariant { kind: "category", ref value, .. } if value == "misc"
        ));
        assert_eq!(
            "archived".parse::<Status>().unwrap_err().to_string(),
            "unknown status 'archived' (expected one of: complete, in-progress, planned, needs-review)"
        );
    }
}
