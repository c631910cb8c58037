use payloads::{ClientError, PageId, WorkspaceId, requests, responses};
use reqwest::StatusCode;
use std::cell::{Cell, RefCell};

use super::PageBackend;

/// In-memory backend recording every call made by the form.
#[derive(Default)]
pub struct TestBackend {
    taken: Vec<String>,
    fail: bool,
    slug_checks: Cell<usize>,
    pub created: RefCell<Vec<requests::CreatePage>>,
    pub updated: RefCell<Vec<requests::UpdatePage>>,
}

impl TestBackend {
    pub fn with_taken(slugs: &[&str]) -> Self {
        Self {
            taken: slugs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Every call fails with an internal server error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn slug_checks(&self) -> usize {
        self.slug_checks.get()
    }

    fn check_failure(&self) -> Result<(), ClientError> {
        if self.fail {
            return Err(ClientError::APIError(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".into(),
            ));
        }
        Ok(())
    }
}

impl PageBackend for TestBackend {
    async fn is_slug_unique(&self, slug: &str) -> Result<bool, ClientError> {
        self.slug_checks.set(self.slug_checks.get() + 1);
        self.check_failure()?;
        Ok(!self.taken.iter().any(|taken| taken == slug))
    }

    async fn create_page(
        &self,
        details: &requests::CreatePage,
    ) -> Result<responses::Page, ClientError> {
        self.created.borrow_mut().push(details.clone());
        self.check_failure()?;
        let now = "2025-01-01T00:00:00Z".parse().unwrap();
        let page = &details.page;
        Ok(responses::Page {
            id: PageId(42),
            workspace_id: page.workspace_id.unwrap_or(WorkspaceId(1)),
            title: page.title.clone(),
            description: page.description.clone(),
            slug: page.slug.clone(),
            custom_domain: page.custom_domain.clone(),
            icon: page.icon.clone(),
            monitors: page.monitors.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    async fn update_page(
        &self,
        details: &requests::UpdatePage,
    ) -> Result<(), ClientError> {
        self.updated.borrow_mut().push(details.clone());
        self.check_failure()
    }
}
