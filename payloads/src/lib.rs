use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

pub mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use requests::{
    DESCRIPTION_MAX_LEN, PageDraftErrors, SLUG_MAX_LEN, SLUG_MIN_LEN,
    SlugValidation, TITLE_MAX_LEN, slugify, validate_page_draft,
    validate_slug,
};

/// Id type wrapper helps ensure we don't mix up ids for different tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct PageId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct WorkspaceId(pub i64);

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct MonitorId(pub i64);

/// A monitored endpoint that can be shown on a status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: MonitorId,
    pub name: String,
    pub url: String,
}

/// The editable details of a status page.
///
/// A draft without an id has not been persisted yet. Older backends send
/// `0` for "no id", which is read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageDraft {
    #[serde(default, deserialize_with = "zero_id_as_none")]
    pub id: Option<PageId>,
    #[serde(default)]
    pub workspace_id: Option<WorkspaceId>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub slug: String,
    /// Custom domain serving the page. Carried through by the form.
    #[serde(default)]
    pub custom_domain: String,
    /// Favicon URL, empty when no icon is set.
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub monitors: BTreeSet<MonitorId>,
}

impl PageDraft {
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

fn zero_id_as_none<'de, D>(deserializer: D) -> Result<Option<PageId>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<i64>::deserialize(deserializer)?;
    Ok(id.filter(|id| *id != 0).map(PageId))
}
