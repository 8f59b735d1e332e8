//! Tab-driven category filtering for content lists.
//!
//! A list view owns a fixed set of labels and one active selection. Filtering
//! never touches the items and never refetches; it only picks which of the
//! already-loaded items are visible.

use crate::content::Categorized;

/// The fixed tabs of one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryView {
    pub labels: &'static [&'static str],
    pub initial: &'static str,
    /// Label that shows every item, if the view has one
    pub wildcard: Option<&'static str>,
}

/// Projects page: everything by default.
pub const PROJECTS_PAGE: CategoryView = CategoryView {
    labels: &["All", "Development", "Photography", "Graphic Design"],
    initial: "All",
    wildcard: Some("All"),
};

/// Home page projects section. `development` shows GitHub repositories instead of stored projects.
pub const HOME_PROJECTS: CategoryView = CategoryView {
    labels: &["development", "photography", "graphic design"],
    initial: "development",
    wildcard: None,
};

pub const EXPERIENCE_PAGE: CategoryView = CategoryView {
    labels: &["All", "Development", "Creative", "Impact"],
    initial: "All",
    wildcard: Some("All"),
};

impl CategoryView {
    /// The view's own spelling of `label`, if it is one of its tabs.
    pub fn find(&self, label: &str) -> Option<&'static str> {
        self.labels.iter().copied().find(|l| same_label(l, label))
    }

    pub fn selection(&self) -> CategorySelection {
        CategorySelection::new(*self)
    }
}

/// The active tab of a [`CategoryView`]. Always one of the view's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySelection {
    view: CategoryView,
    active: &'static str,
}

impl CategorySelection {
    pub fn new(view: CategoryView) -> Self {
        Self {
            view,
            active: view.initial,
        }
    }

    pub fn view(&self) -> CategoryView {
        self.view
    }

    pub fn active(&self) -> &'static str {
        self.active
    }

    pub fn is_active(&self, label: &str) -> bool {
        same_label(self.active, label)
    }

    pub fn is_wildcard(&self) -> bool {
        self.view.wildcard.is_some_and(|w| same_label(w, self.active))
    }

    /// Switch tabs. Labels outside the view are refused and leave the selection as it was.
    pub fn select(&mut self, label: &str) -> bool {
        match self.view.find(label) {
            Some(found) => {
                self.active = found;
                true
            }
            None => false,
        }
    }

    /// The visible subset of `items` for the active tab.
    pub fn apply<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter_by_category(items, self.active, self.view.wildcard)
    }
}

/// Items whose category equals `selection` ignoring case, in their original order.
///
/// When `selection` is the `wildcard` label every item is returned, including
/// items with no category at all. Uncategorized items never match a concrete label.
pub fn filter_by_category<'a, T: Categorized>(
    items: &'a [T],
    selection: &str,
    wildcard: Option<&str>,
) -> Vec<&'a T> {
    if wildcard.is_some_and(|w| same_label(w, selection)) {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| item.category().is_some_and(|c| same_label(c, selection)))
        .collect()
}

fn same_label(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Project;

    fn project(id: &str, category: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    fn ids(items: &[&Project]) -> Vec<String> {
        items.iter().map(|p| p.id.clone()).collect()
    }

    fn sample() -> Vec<Project> {
        vec![
            project("1", Some("Photography")),
            project("2", Some("photography")),
            project("3", Some("Development")),
            project("4", None),
            project("5", Some("graphic design")),
        ]
    }

    #[test]
    fn test_case_insensitive_match_preserves_order() {
        let items = sample();
        let visible = filter_by_category(&items, "photography", Some("All"));
        assert_eq!(ids(&visible), vec!["1", "2"]);
    }

    #[test]
    fn test_wildcard_returns_everything_in_order() {
        let items = sample();
        let visible = filter_by_category(&items, "All", Some("All"));
        assert_eq!(ids(&visible), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_missing_category_never_matches_concrete_label() {
        let items = sample();
        for label in ["Development", "Photography", "Graphic Design", ""] {
            let visible = filter_by_category(&items, label, Some("All"));
            assert!(!ids(&visible).contains(&"4".to_string()), "matched under {label:?}");
        }
    }

    #[test]
    fn test_no_wildcard_view_treats_all_as_plain_label() {
        let items = sample();
        assert!(filter_by_category(&items, "All", None).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let items = sample();
        for label in PROJECTS_PAGE.labels {
            let once = filter_by_category(&items, label, PROJECTS_PAGE.wildcard);
            let twice = filter_by_category(&once, label, PROJECTS_PAGE.wildcard);
            let once_ids: Vec<&str> = once.iter().map(|p| p.id.as_str()).collect();
            let twice_ids: Vec<&str> = twice.iter().map(|p| p.id.as_str()).collect();
            assert_eq!(once_ids, twice_ids, "label {label}");
        }
    }

    #[test]
    fn test_filter_does_not_mutate_input() {
        let items = sample();
        let before = items.clone();
        let _ = filter_by_category(&items, "development", None);
        assert_eq!(items, before);
    }

    #[test]
    fn test_selection_defaults_and_switches() {
        let mut selection = PROJECTS_PAGE.selection();
        assert_eq!(selection.active(), "All");
        assert!(selection.is_wildcard());

        assert!(selection.select("photography"));
        assert_eq!(selection.active(), "Photography");
        assert!(!selection.is_wildcard());
        assert!(selection.is_active("PHOTOGRAPHY"));

        let items = sample();
        assert_eq!(ids(&selection.apply(&items)), vec!["1", "2"]);

        // selecting again changes nothing
        assert!(selection.select("Photography"));
        assert_eq!(ids(&selection.apply(&items)), vec!["1", "2"]);
    }

    #[test]
    fn test_selection_rejects_unknown_label() {
        let mut selection = HOME_PROJECTS.selection();
        assert!(selection.select("photography"));
        assert!(!selection.select("Sculpture"));
        assert!(!selection.select("All"));
        assert_eq!(selection.active(), "photography");
    }

    #[test]
    fn test_empty_result_for_unused_category() {
        let items = vec![project("1", Some("development"))];
        let mut selection = HOME_PROJECTS.selection();
        selection.select("graphic design");
        assert!(selection.apply(&items).is_empty());
    }

    #[test]
    fn test_experience_view() {
        let mut selection = EXPERIENCE_PAGE.selection();
        assert!(selection.select("creative"));
        assert_eq!(selection.active(), "Creative");
    }
}
