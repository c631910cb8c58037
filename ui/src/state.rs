use payloads::{Monitor, PageId, responses};
use std::collections::HashMap;
use yewdux::prelude::*;

use crate::status_page::SubmitOutcome;

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Pages (managed by use_page) ===
    pub pages: HashMap<PageId, responses::Page>,

    // === Monitors by workspace slug (managed by use_monitors) ===
    pub monitors: HashMap<String, Vec<Monitor>>,
}

impl State {
    pub fn get_page(&self, page_id: PageId) -> Option<&responses::Page> {
        self.pages.get(&page_id)
    }

    pub fn has_page_loaded(&self, page_id: PageId) -> bool {
        self.pages.contains_key(&page_id)
    }

    pub fn set_page(&mut self, page: responses::Page) {
        self.pages.insert(page.id, page);
    }

    /// Cache the page a submit just created, so the editor reopens it
    /// without fetching.
    pub fn cache_created_page(&mut self, outcome: &SubmitOutcome) {
        if let SubmitOutcome::Created(page) = outcome {
            self.set_page(page.clone());
        }
    }

    pub fn get_monitors(&self, workspace_slug: &str) -> Option<&Vec<Monitor>> {
        self.monitors.get(workspace_slug)
    }

    pub fn has_monitors_loaded(&self, workspace_slug: &str) -> bool {
        self.monitors.contains_key(workspace_slug)
    }

    pub fn set_monitors(
        &mut self,
        workspace_slug: String,
        monitors: Vec<Monitor>,
    ) {
        self.monitors.insert(workspace_slug, monitors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_helpers::{monitors_a, page_a};

    #[test]
    fn caches_pages_and_monitors() {
        let mut state = State::default();
        assert!(!state.has_page_loaded(PageId(1)));
        assert!(!state.has_monitors_loaded("acme"));

        state.set_page(page_a(PageId(1)));
        state.set_monitors("acme".into(), monitors_a());

        assert_eq!(state.get_page(PageId(1)).map(|p| p.id), Some(PageId(1)));
        assert_eq!(state.get_monitors("acme").map(Vec::len), Some(3));
        assert!(state.get_monitors("other").is_none());
    }

    #[test]
    fn created_page_is_cached() {
        let mut state = State::default();

        state.cache_created_page(&SubmitOutcome::Updated);
        state.cache_created_page(&SubmitOutcome::Failed("boom".into()));
        assert!(state.pages.is_empty());

        state.cache_created_page(&SubmitOutcome::Created(page_a(PageId(42))));
        assert!(state.has_page_loaded(PageId(42)));
        assert_eq!(
            state.get_page(PageId(42)).map(|p| p.slug.as_str()),
            Some("acme-status")
        );
    }
}
