//! Tab registry: ordered list of open tabs, the active pointer and the content
//! registry that records whether a tab body has rendered once.
//!
//! This is plain state. [`AppGlobalContext`](crate::layout::global_context::AppGlobalContext)
//! wraps it in a signal and is the only writer. Every operation leaves the
//! registry consistent: the list is never empty, ids are unique and the active
//! pointer names an open tab (except after an explicit `set_active_tab` to an
//! unknown id, which is the caller's responsibility).

use contracts::shared::tabs::{TabDescriptor, MAIN_TAB_ID};
use std::collections::HashMap;

use crate::shared::error::WorkspaceError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: String,
    pub name: String,
    pub group: Option<String>,
}

impl Tab {
    pub fn is_main(&self) -> bool {
        self.id == MAIN_TAB_ID
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabContentEntry {
    pub is_loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was appended and activated.
    Opened,
    /// The tab was already open; it was only activated.
    Activated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// The tab was removed. `activated` is set when the active pointer moved.
    Closed { activated: Option<String> },
    /// Attempt to close the main tab; nothing changed.
    Protected,
    NotOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRegistry {
    tabs: Vec<Tab>,
    active: String,
    contents: HashMap<String, TabContentEntry>,
    main_title: String,
}

impl TabRegistry {
    pub fn new(main_title: impl Into<String>) -> Self {
        let mut registry = Self {
            tabs: Vec::new(),
            active: MAIN_TAB_ID.to_string(),
            contents: HashMap::new(),
            main_title: main_title.into(),
        };
        registry.ensure_main();
        registry
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.tabs.iter().map(|t| t.id.clone()).collect()
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.get(&self.active)
    }

    /// Menu group of the active tab, used to expand the originating menu section.
    pub fn active_group(&self) -> Option<&str> {
        self.active_tab().and_then(|t| t.group.as_deref())
    }

    pub fn get(&self, id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.contents.contains_key(id)
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.contents.get(id).map(|c| c.is_loaded).unwrap_or(false)
    }

    /// Returns false when `id` has no content entry.
    pub fn mark_loaded(&mut self, id: &str) -> bool {
        match self.contents.get_mut(id) {
            Some(entry) => {
                entry.is_loaded = true;
                true
            }
            None => false,
        }
    }

    pub fn open_tab(&mut self, descriptor: &TabDescriptor) -> Result<OpenOutcome, WorkspaceError> {
        let Some(id) = descriptor.resolved_id() else {
            return Err(WorkspaceError::invalid_descriptor(format!(
                "tab '{}' has no id",
                descriptor.name
            )));
        };

        if self.contains(id) {
            // Name and group of an open tab are fixed at creation.
            self.active = id.to_string();
            return Ok(OpenOutcome::Activated);
        }

        self.tabs.push(Tab {
            id: id.to_string(),
            name: descriptor.name.clone(),
            group: descriptor.group.clone(),
        });
        self.contents
            .insert(id.to_string(), TabContentEntry::default());
        self.active = id.to_string();
        Ok(OpenOutcome::Opened)
    }

    pub fn close_tab(&mut self, id: &str) -> CloseOutcome {
        if id == MAIN_TAB_ID {
            return CloseOutcome::Protected;
        }
        let Some(pos) = self.tabs.iter().position(|t| t.id == id) else {
            return CloseOutcome::NotOpen;
        };

        self.tabs.remove(pos);
        self.contents.remove(id);

        if self.active != id {
            return CloseOutcome::Closed { activated: None };
        }

        // The tab now last in the list becomes active, not the closed tab's neighbour.
        let next = match self.tabs.last() {
            Some(tab) => tab.id.clone(),
            None => {
                self.ensure_main();
                MAIN_TAB_ID.to_string()
            }
        };
        self.active = next.clone();
        CloseOutcome::Closed {
            activated: Some(next),
        }
    }

    pub fn close_all_tabs(&mut self) {
        self.tabs.retain(|t| t.is_main());
        self.contents.retain(|id, _| id == MAIN_TAB_ID);
        self.ensure_main();
        self.active = MAIN_TAB_ID.to_string();
    }

    /// Moves the active pointer without touching membership.
    pub fn set_active_tab(&mut self, id: &str) {
        self.active = id.to_string();
    }

    fn ensure_main(&mut self) {
        if !self.tabs.iter().any(|t| t.is_main()) {
            self.tabs.insert(
                0,
                Tab {
                    id: MAIN_TAB_ID.to_string(),
                    name: self.main_title.clone(),
                    group: None,
                },
            );
        }
        self.contents.entry(MAIN_TAB_ID.to_string()).or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with(ids: &[&str]) -> TabRegistry {
        let mut registry = TabRegistry::new("Home");
        for id in ids {
            registry
                .open_tab(&TabDescriptor::new(*id, id.to_uppercase()))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_starts_with_main() {
        let registry = TabRegistry::new("Home");
        assert_eq!(registry.tab_ids(), vec!["main"]);
        assert_eq!(registry.active(), "main");
        assert_eq!(registry.get("main").map(|t| t.name.as_str()), Some("Home"));
        assert!(registry.contains("main"));
        assert!(!registry.is_loaded("main"));
    }

    #[test]
    fn test_open_same_tab_twice() {
        let mut registry = TabRegistry::new("Home");
        let first = registry.open_tab(&TabDescriptor::new("pi-product", "Product"));
        let second = registry.open_tab(&TabDescriptor::new("pi-product", "Product"));

        assert_eq!(first, Ok(OpenOutcome::Opened));
        assert_eq!(second, Ok(OpenOutcome::Activated));
        assert_eq!(registry.tab_ids(), vec!["main", "pi-product"]);
        assert_eq!(registry.active(), "pi-product");
    }

    #[test]
    fn test_reopen_activates_without_renaming() {
        let mut registry = registry_with(&["a", "b"]);
        registry
            .open_tab(&TabDescriptor::new("a", "Renamed").with_group("other"))
            .unwrap();
        assert_eq!(registry.active(), "a");
        assert_eq!(registry.get("a").map(|t| t.name.as_str()), Some("A"));
        assert_eq!(registry.get("a").and_then(|t| t.group.clone()), None);
        assert_eq!(registry.tab_ids(), vec!["main", "a", "b"]);
    }

    #[test]
    fn test_open_without_id_changes_nothing() {
        let mut registry = registry_with(&["a"]);
        let before = registry.clone();
        let result = registry.open_tab(&TabDescriptor::new("", "Nameless"));
        assert!(matches!(
            result,
            Err(WorkspaceError::InvalidTabDescriptor { .. })
        ));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_no_duplicates_over_many_opens() {
        let mut registry = TabRegistry::new("Home");
        let ids = ["a", "b", "a", "main", "c", "b", "c", "d", "a"];
        for id in ids {
            registry.open_tab(&TabDescriptor::new(id, id)).unwrap();
            let mut seen = registry.tab_ids();
            let total = seen.len();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), total);
            assert_eq!(registry.active(), id);
        }
        assert_eq!(registry.tab_ids(), vec!["main", "a", "b", "c", "d"]);
    }

    #[test]
    fn test_close_main_is_noop() {
        let mut registry = TabRegistry::new("Home");
        assert_eq!(registry.close_tab("main"), CloseOutcome::Protected);
        assert_eq!(registry.tab_ids(), vec!["main"]);

        let mut registry = registry_with(&["a"]);
        let before = registry.clone();
        assert_eq!(registry.close_tab("main"), CloseOutcome::Protected);
        assert_eq!(registry, before);
    }

    #[test]
    fn test_close_active_activates_last() {
        let mut registry = registry_with(&["a", "b"]);
        assert_eq!(registry.active(), "b");
        let outcome = registry.close_tab("b");
        assert_eq!(
            outcome,
            CloseOutcome::Closed {
                activated: Some("a".to_string())
            }
        );
        assert_eq!(registry.tab_ids(), vec!["main", "a"]);
        assert_eq!(registry.active(), "a");
        assert!(!registry.contains("b"));
    }

    #[test]
    fn test_close_active_in_middle_picks_last_not_neighbour() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry.set_active_tab("a");
        registry.close_tab("a");
        assert_eq!(registry.active(), "c");
    }

    #[test]
    fn test_close_inactive_keeps_active() {
        let mut registry = registry_with(&["a", "b", "c"]);
        registry.set_active_tab("b");
        assert_eq!(
            registry.close_tab("c"),
            CloseOutcome::Closed { activated: None }
        );
        assert_eq!(registry.active(), "b");
        assert_eq!(registry.close_tab("zzz"), CloseOutcome::NotOpen);
        assert_eq!(registry.active(), "b");
    }

    #[test]
    fn test_close_all_keeps_only_main() {
        let mut registry = registry_with(&["a", "b"]);
        registry.mark_loaded("main");
        registry.close_all_tabs();
        assert_eq!(registry.tab_ids(), vec!["main"]);
        assert_eq!(registry.active(), "main");
        assert!(registry.is_loaded("main"));
        assert!(!registry.contains("a"));
    }

    #[test]
    fn test_content_entries_follow_tabs() {
        let mut registry = registry_with(&["a"]);
        assert!(!registry.is_loaded("a"));
        assert!(registry.mark_loaded("a"));
        assert!(registry.is_loaded("a"));
        assert!(!registry.mark_loaded("missing"));

        registry.close_tab("a");
        registry.open_tab(&TabDescriptor::new("a", "A")).unwrap();
        assert!(!registry.is_loaded("a"));
    }

    #[test]
    fn test_active_group() {
        let mut registry = TabRegistry::new("Home");
        registry
            .open_tab(&TabDescriptor::new("wo-order", "Work orders").with_group("production"))
            .unwrap();
        assert_eq!(registry.active_group(), Some("production"));
        registry.set_active_tab("main");
        assert_eq!(registry.active_group(), None);
    }
}
