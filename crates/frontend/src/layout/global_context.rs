use contracts::shared::tabs::TabDescriptor;
use leptos::prelude::*;

use crate::layout::tabs::registry::{CloseOutcome, OpenOutcome, Tab, TabRegistry};
use crate::shared::error::expect_provided;
use crate::shared::storage::{save_flag, SIDEBAR_OPEN_KEY};

/// A request for the tab strip to bring a tab into view.
///
/// `seq` makes repeated requests for the same tab distinct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub tab_id: String,
    pub seq: u64,
}

/// Application-wide tab workspace, provided once at the root.
///
/// All tab mutations go through the named operations below; the registry
/// signal itself is private.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    registry: RwSignal<TabRegistry>,
    scroll_request: RwSignal<Option<ScrollRequest>>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new(main_title: &str, left_open: bool) -> Self {
        Self {
            registry: RwSignal::new(TabRegistry::new(main_title)),
            scroll_request: RwSignal::new(None),
            left_open: RwSignal::new(left_open),
        }
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.registry.with(|r| r.tabs().to_vec())
    }

    pub fn tab_ids(&self) -> Vec<String> {
        self.registry.with(|r| r.tab_ids())
    }

    pub fn active(&self) -> String {
        self.registry.with(|r| r.active().to_string())
    }

    pub fn active_untracked(&self) -> String {
        self.registry.with_untracked(|r| r.active().to_string())
    }

    pub fn active_group(&self) -> Option<String> {
        self.registry.with(|r| r.active_group().map(str::to_string))
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.registry.with_untracked(|r| r.contains(id))
    }

    pub fn scroll_request(&self) -> Option<ScrollRequest> {
        self.scroll_request.get()
    }

    pub fn snapshot(&self) -> TabRegistry {
        self.registry.get_untracked()
    }

    pub fn open_tab(&self, descriptor: &TabDescriptor) {
        log::debug!(
            "open_tab: id='{}', name='{}'",
            descriptor.id,
            descriptor.name
        );
        let mut result = None;
        self.registry.maybe_update(|r| {
            let outcome = r.open_tab(descriptor);
            let changed = outcome.is_ok();
            result = Some(outcome);
            changed
        });

        match result {
            Some(Ok(OpenOutcome::Opened)) => {
                log::debug!("tab '{}' opened", descriptor.id);
                self.scroll_to_tab(descriptor.id.trim());
            }
            Some(Ok(OpenOutcome::Activated)) => {
                log::debug!("tab '{}' already open, activated", descriptor.id);
                self.scroll_to_tab(descriptor.id.trim());
            }
            Some(Err(e)) => log::warn!("open_tab rejected: {}", e),
            None => {}
        }
    }

    pub fn close_tab(&self, id: &str) {
        let mut result = None;
        self.registry.maybe_update(|r| {
            let outcome = r.close_tab(id);
            let changed = matches!(outcome, CloseOutcome::Closed { .. });
            result = Some(outcome);
            changed
        });

        match result {
            Some(CloseOutcome::Closed { activated }) => {
                log::debug!("tab '{}' closed, next active: {:?}", id, activated);
            }
            Some(CloseOutcome::Protected) => log::debug!("close_tab: '{}' is protected", id),
            Some(CloseOutcome::NotOpen) => log::debug!("close_tab: '{}' is not open", id),
            None => {}
        }
    }

    pub fn close_all_tabs(&self) {
        log::debug!("close_all_tabs");
        self.registry.update(|r| r.close_all_tabs());
    }

    pub fn set_active_tab(&self, id: &str) {
        if !self.is_open(id) {
            log::debug!("set_active_tab: '{}' is not an open tab", id);
        }
        self.registry.update(|r| r.set_active_tab(id));
    }

    /// Asks the tab strip to bring `id` into view. No tab state changes.
    pub fn scroll_to_tab(&self, id: &str) {
        let tab_id = id.to_string();
        self.scroll_request.update(|req| {
            let seq = req.as_ref().map(|r| r.seq + 1).unwrap_or(1);
            *req = Some(ScrollRequest { tab_id, seq });
        });
    }

    pub fn is_loaded(&self, id: &str) -> bool {
        self.registry.with_untracked(|r| r.is_loaded(id))
    }

    pub fn mark_loaded(&self, id: &str) {
        self.registry
            .maybe_update(|r| !r.is_loaded(id) && r.mark_loaded(id));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
        save_flag(SIDEBAR_OPEN_KEY, self.left_open.get_untracked());
    }
}

pub fn use_app_context() -> AppGlobalContext {
    expect_provided::<AppGlobalContext>("AppGlobalContext")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_and_close_through_context() {
        let ctx = AppGlobalContext::new("Home", true);
        ctx.open_tab(&TabDescriptor::new("A", "A"));
        ctx.open_tab(&TabDescriptor::new("B", "B"));
        assert_eq!(ctx.active_untracked(), "B");

        ctx.close_tab("B");
        assert_eq!(ctx.snapshot().tab_ids(), vec!["main", "A"]);
        assert_eq!(ctx.active_untracked(), "A");

        ctx.close_tab("main");
        assert_eq!(ctx.snapshot().tab_ids(), vec!["main", "A"]);
    }

    #[test]
    fn test_invalid_descriptor_is_swallowed() {
        let ctx = AppGlobalContext::new("Home", true);
        let before = ctx.snapshot();
        ctx.open_tab(&TabDescriptor::new("", "No id"));
        assert_eq!(ctx.snapshot(), before);
        assert_eq!(ctx.scroll_request.get_untracked(), None);
    }

    #[test]
    fn test_open_requests_scroll_each_time() {
        let ctx = AppGlobalContext::new("Home", true);
        ctx.open_tab(&TabDescriptor::new("pi-product", "Product"));
        ctx.open_tab(&TabDescriptor::new("pi-product", "Product"));
        let request = ctx.scroll_request.get_untracked();
        assert_eq!(
            request,
            Some(ScrollRequest {
                tab_id: "pi-product".to_string(),
                seq: 2
            })
        );
        assert_eq!(ctx.snapshot().tab_ids(), vec!["main", "pi-product"]);
    }

    #[test]
    fn test_close_all_and_loaded_flags() {
        let ctx = AppGlobalContext::new("Home", false);
        ctx.open_tab(&TabDescriptor::new("A", "A"));
        ctx.mark_loaded("A");
        assert!(ctx.is_loaded("A"));
        ctx.close_all_tabs();
        assert_eq!(ctx.snapshot().tab_ids(), vec!["main"]);
        assert_eq!(ctx.active_untracked(), "main");
        assert!(!ctx.is_loaded("A"));
    }

    #[test]
    #[should_panic(expected = "AppGlobalContext is not provided")]
    fn test_missing_provider_panics() {
        let owner = Owner::new();
        owner.with(|| {
            use_app_context();
        });
    }

    #[test]
    fn test_provided_context_resolves() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(AppGlobalContext::new("Home", true));
            let ctx = use_app_context();
            assert_eq!(ctx.active_untracked(), "main");
        });
    }
}
