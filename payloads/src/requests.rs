use crate::{PageDraft, PageId};
use serde::{Deserialize, Serialize};

pub const TITLE_MAX_LEN: usize = 256;
pub const DESCRIPTION_MAX_LEN: usize = 1000;
pub const SLUG_MIN_LEN: usize = 3;
/// A slug is used as a subdomain, so it is bound by the DNS label limit.
pub const SLUG_MAX_LEN: usize = 63;

/// Validation result for slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlugValidation {
    Valid,
    TooShort,
    TooLong,
    InvalidCharacters,
    HyphenAtEdge,
}

impl SlugValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::TooShort => Some("Slug must be at least 3 characters"),
            Self::TooLong => Some("Slug must be at most 63 characters"),
            Self::InvalidCharacters => Some(
                "Slug can only contain lowercase letters, numbers, and hyphens",
            ),
            Self::HyphenAtEdge => {
                Some("Slug cannot start or end with a hyphen")
            }
        }
    }
}

/// Validate a slug.
///
/// Rules:
/// - 3-63 characters
/// - lowercase ASCII letters, numbers, and hyphens only
/// - no leading or trailing hyphen
pub fn validate_slug(slug: &str) -> SlugValidation {
    if slug.len() < SLUG_MIN_LEN {
        return SlugValidation::TooShort;
    }
    if slug.len() > SLUG_MAX_LEN {
        return SlugValidation::TooLong;
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return SlugValidation::InvalidCharacters;
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return SlugValidation::HyphenAtEdge;
    }
    SlugValidation::Valid
}

/// Turn free text (usually a page title) into a slug.
///
/// Apostrophes are dropped, any other run of characters that are not ASCII
/// letters or digits collapses into a single hyphen.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c == '\'' || c == '\u{2019}' {
            continue;
        } else {
            pending_hyphen = true;
        }
    }

    if slug.len() > SLUG_MAX_LEN {
        // Only ASCII was pushed, so byte truncation is a char boundary.
        slug.truncate(SLUG_MAX_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}

/// First validation error per field of a page draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageDraftErrors {
    pub title: Option<&'static str>,
    pub description: Option<&'static str>,
    pub slug: Option<&'static str>,
    pub icon: Option<&'static str>,
}

impl PageDraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.slug.is_none()
            && self.icon.is_none()
    }
}

/// Validate a draft before it is sent to the backend.
pub fn validate_page_draft(draft: &PageDraft) -> PageDraftErrors {
    let title = draft.title.trim();
    let title_error = if title.is_empty() {
        Some("Please enter a title")
    } else if title.chars().count() > TITLE_MAX_LEN {
        Some("Title must be at most 256 characters")
    } else {
        None
    };

    let description_error =
        if draft.description.chars().count() > DESCRIPTION_MAX_LEN {
            Some("Description must be at most 1000 characters")
        } else {
            None
        };

    let icon = draft.icon.trim();
    let icon_error = if icon.is_empty()
        || icon.starts_with("https://")
        || icon.starts_with("http://")
    {
        None
    } else {
        Some("Icon must be a valid URL")
    };

    PageDraftErrors {
        title: title_error,
        description: description_error,
        slug: validate_slug(&draft.slug).error_message(),
        icon: icon_error,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlugUniqueness {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePage {
    pub workspace_slug: String,
    pub page: PageDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePage {
    pub page_id: PageId,
    pub page: PageDraft,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMonitors {
    pub workspace_slug: String,
}
