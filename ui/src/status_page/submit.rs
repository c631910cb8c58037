use payloads::{PageDraftErrors, requests, responses, validate_page_draft};

use super::{PageBackend, PageForm, is_slug_available};
use crate::contexts::toast::ToastKey;

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Another page already uses `slug`; nothing was saved.
    SlugTaken { slug: String },
    /// The draft failed validation; nothing was saved.
    Invalid(PageDraftErrors),
    Created(responses::Page),
    Updated,
    /// A remote call failed.
    Failed(String),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Created(_) | Self::Updated)
    }

    /// The toast to show for this outcome. Validation errors are shown
    /// inline only.
    pub fn toast(&self) -> Option<ToastKey> {
        match self {
            Self::SlugTaken { .. } => Some(ToastKey::UniqueSlug),
            Self::Invalid(_) => None,
            Self::Created(_) | Self::Updated => Some(ToastKey::Saved),
            Self::Failed(_) => Some(ToastKey::Error),
        }
    }
}

/// Check the slug once more, validate, and create or update the page.
///
/// Creates when the draft has no id yet, otherwise updates. At most one of
/// the two mutations is called.
pub async fn submit_page<B: PageBackend>(
    backend: &B,
    form: &PageForm,
    workspace_slug: &str,
) -> SubmitOutcome {
    let draft = form.draft_for_submit();

    match is_slug_available(backend, &draft.slug, form.original_slug()).await {
        Ok(true) => {}
        Ok(false) => return SubmitOutcome::SlugTaken { slug: draft.slug },
        Err(e) => {
            tracing::error!("Slug check before submit failed: {e}");
            return SubmitOutcome::Failed(e.to_string());
        }
    }

    let errors = validate_page_draft(&draft);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }

    let result = match draft.id {
        None => {
            let details = requests::CreatePage {
                workspace_slug: workspace_slug.to_string(),
                page: draft,
            };
            backend.create_page(&details).await.map(|page| {
                tracing::info!("Created status page {}", page.id);
                SubmitOutcome::Created(page)
            })
        }
        Some(page_id) => {
            let details = requests::UpdatePage {
                page_id,
                page: draft,
            };
            backend.update_page(&details).await.map(|()| {
                tracing::info!("Updated status page {page_id}");
                SubmitOutcome::Updated
            })
        }
    };

    result.unwrap_or_else(|e| {
        tracing::error!("Saving status page failed: {e}");
        SubmitOutcome::Failed(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status_page::{PageFormAction, test_backend::TestBackend};
    use futures::executor::block_on;
    use payloads::PageId;
    use test_helpers::{mock::WORKSPACE_SLUG, monitors_a, page_a};

    fn filled_create_form() -> PageForm {
        let mut form = PageForm::new(None, &monitors_a(), true);
        form.apply(PageFormAction::SetTitle("Acme Status".into()));
        form.apply(PageFormAction::SetDescription("  All systems  ".into()));
        form
    }

    #[test]
    fn create_mode_calls_create_once() -> anyhow::Result<()> {
        let backend = TestBackend::default();
        let form = filled_create_form();

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        let SubmitOutcome::Created(page) = &outcome else {
            anyhow::bail!("expected a created page, got {outcome:?}");
        };
        assert_eq!(page.slug, "acme-status");
        assert_eq!(outcome.toast(), Some(ToastKey::Saved));

        let created = backend.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].workspace_slug, WORKSPACE_SLUG);
        assert_eq!(created[0].page.description, "All systems");
        assert_eq!(created[0].page.monitors.len(), 3);
        assert!(backend.updated.borrow().is_empty());
        Ok(())
    }

    #[test]
    fn edit_mode_calls_update_once() {
        let backend = TestBackend::default();
        let mut form = PageForm::new(
            Some(page_a(PageId(7)).to_draft()),
            &monitors_a(),
            false,
        );
        form.apply(PageFormAction::SetTitle("Acme Status (EU)".into()));

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        assert_eq!(outcome, SubmitOutcome::Updated);
        let updated = backend.updated.borrow();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].page_id, PageId(7));
        assert_eq!(updated[0].page.title, "Acme Status (EU)");
        assert!(backend.created.borrow().is_empty());
        // The page keeps its own slug without a round trip.
        assert_eq!(backend.slug_checks(), 0);
    }

    #[test]
    fn taken_slug_blocks_submit() {
        let backend = TestBackend::with_taken(&["acme-status"]);
        let mut form = filled_create_form();

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        assert_eq!(
            outcome,
            SubmitOutcome::SlugTaken {
                slug: "acme-status".into()
            }
        );
        assert_eq!(outcome.toast(), Some(ToastKey::UniqueSlug));
        assert!(backend.created.borrow().is_empty());
        assert!(backend.updated.borrow().is_empty());

        form.apply(PageFormAction::Submitted(outcome));
        assert!(form.slug_error().is_some());
    }

    #[test]
    fn invalid_draft_is_not_sent() {
        let backend = TestBackend::default();
        let mut form = PageForm::new(None, &[], false);
        form.apply(PageFormAction::SetSlug("ok-slug".into()));

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        let SubmitOutcome::Invalid(errors) = &outcome else {
            panic!("expected validation errors, got {outcome:?}");
        };
        assert_eq!(errors.title, Some("Please enter a title"));
        assert_eq!(outcome.toast(), None);
        assert!(backend.created.borrow().is_empty());
    }

    #[test]
    fn failed_mutation_keeps_draft() {
        let backend = TestBackend::failing();
        let mut form = PageForm::new(
            Some(page_a(PageId(7)).to_draft()),
            &monitors_a(),
            false,
        );
        form.apply(PageFormAction::SetDescription("Edited".into()));

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert!(!outcome.is_saved());
        assert_eq!(outcome.toast(), Some(ToastKey::Error));

        form.apply(PageFormAction::Submitted(outcome));
        assert_eq!(form.draft().description, "Edited");
    }

    #[test]
    fn second_submit_after_create_updates() {
        let backend = TestBackend::default();
        let mut form = filled_create_form();

        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));
        form.apply(PageFormAction::Submitted(outcome));
        let outcome = block_on(submit_page(&backend, &form, WORKSPACE_SLUG));

        assert_eq!(outcome, SubmitOutcome::Updated);
        assert_eq!(backend.created.borrow().len(), 1);
        assert_eq!(backend.updated.borrow().len(), 1);
        assert_eq!(backend.updated.borrow()[0].page_id, PageId(42));
    }
}
