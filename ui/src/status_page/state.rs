use payloads::{
    Monitor, MonitorId, PageDraft, PageDraftErrors, slugify,
    validate_page_draft,
};
use std::rc::Rc;
use yew::prelude::*;

use super::{SLUG_TAKEN_MESSAGE, SubmitOutcome};

/// What the icon field shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconMode {
    /// No icon yet, show the file picker.
    Picker,
    /// An uploaded icon, show the preview with a remove button.
    Preview(String),
}

/// Field values and error state of the status page form.
#[derive(Debug, Clone, PartialEq)]
pub struct PageForm {
    draft: PageDraft,
    /// Slug the page was loaded with. It never conflicts with itself.
    original_slug: Option<String>,
    /// Regenerate the slug from the title. Only while the page had no title
    /// when the form was opened.
    derive_slug: bool,
    /// Set once a submit attempt failed validation, after which every edit
    /// revalidates.
    submitted: bool,
    errors: PageDraftErrors,
    slug_taken: bool,
}

pub enum PageFormAction {
    SetTitle(String),
    SetDescription(String),
    SetSlug(String),
    SetIcon(String),
    RemoveIcon,
    ToggleMonitor(MonitorId, bool),
    /// Result of a uniqueness check for `slug`.
    SlugChecked { slug: String, available: bool },
    Submitted(SubmitOutcome),
}

impl PageForm {
    /// Start a form, from `default_values` when editing an existing page.
    pub fn new(
        default_values: Option<PageDraft>,
        all_monitors: &[Monitor],
        check_all_monitors: bool,
    ) -> Self {
        let derive_slug = default_values
            .as_ref()
            .is_none_or(|draft| draft.title.is_empty());
        let original_slug = default_values
            .as_ref()
            .map(|draft| draft.slug.clone())
            .filter(|slug| !slug.is_empty());

        let mut draft = default_values.unwrap_or_default();
        if check_all_monitors {
            draft.monitors = all_monitors.iter().map(|m| m.id).collect();
        }

        Self {
            draft,
            original_slug,
            derive_slug,
            submitted: false,
            errors: PageDraftErrors::default(),
            slug_taken: false,
        }
    }

    pub fn draft(&self) -> &PageDraft {
        &self.draft
    }

    pub fn original_slug(&self) -> Option<&str> {
        self.original_slug.as_deref()
    }

    /// Whether submitting updates an existing page rather than creating one.
    pub fn is_update(&self) -> bool {
        self.draft.is_persisted()
    }

    pub fn errors(&self) -> &PageDraftErrors {
        &self.errors
    }

    /// The error to show under the slug input, if any.
    pub fn slug_error(&self) -> Option<&'static str> {
        if self.slug_taken {
            Some(SLUG_TAKEN_MESSAGE)
        } else {
            self.errors.slug
        }
    }

    pub fn icon_mode(&self) -> IconMode {
        if self.draft.icon.is_empty() {
            IconMode::Picker
        } else {
            IconMode::Preview(self.draft.icon.clone())
        }
    }

    /// The draft as it should be sent to the backend.
    pub fn draft_for_submit(&self) -> PageDraft {
        let mut draft = self.draft.clone();
        draft.title = draft.title.trim().to_string();
        draft.description = draft.description.trim().to_string();
        draft
    }

    pub fn apply(&mut self, action: PageFormAction) {
        match action {
            PageFormAction::SetTitle(title) => {
                if self.derive_slug {
                    self.draft.slug = slugify(&title);
                    self.slug_taken = false;
                }
                self.draft.title = title;
            }
            PageFormAction::SetDescription(description) => {
                self.draft.description = description;
            }
            PageFormAction::SetSlug(slug) => {
                self.draft.slug = slug;
                self.slug_taken = false;
            }
            PageFormAction::SetIcon(url) => {
                self.draft.icon = url;
            }
            PageFormAction::RemoveIcon => {
                self.draft.icon.clear();
            }
            PageFormAction::ToggleMonitor(monitor_id, checked) => {
                if checked {
                    self.draft.monitors.insert(monitor_id);
                } else {
                    self.draft.monitors.remove(&monitor_id);
                }
            }
            PageFormAction::SlugChecked { slug, available } => {
                // A check that finished after the slug changed again is stale.
                if slug == self.draft.slug {
                    self.slug_taken = !available;
                }
                return;
            }
            PageFormAction::Submitted(outcome) => {
                self.apply_outcome(outcome);
                return;
            }
        }

        if self.submitted {
            self.errors = validate_page_draft(&self.draft);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::SlugTaken { slug } => {
                if slug == self.draft.slug {
                    self.slug_taken = true;
                }
            }
            SubmitOutcome::Invalid(errors) => {
                self.submitted = true;
                self.errors = errors;
            }
            SubmitOutcome::Created(page) => {
                self.draft.id = Some(page.id);
                self.draft.workspace_id = Some(page.workspace_id);
                self.original_slug = Some(page.slug);
                self.derive_slug = false;
                self.clear_errors();
            }
            SubmitOutcome::Updated => {
                self.original_slug = Some(self.draft.slug.clone());
                self.clear_errors();
            }
            SubmitOutcome::Failed(_) => {}
        }
    }

    fn clear_errors(&mut self) {
        self.submitted = false;
        self.errors = PageDraftErrors::default();
        self.slug_taken = false;
    }
}

impl Reducible for PageForm {
    type Action = PageFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
