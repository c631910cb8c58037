use crate::{MonitorId, PageDraft, PageId, WorkspaceId};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A persisted status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    pub workspace_id: WorkspaceId,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub custom_domain: String,
    pub icon: String,
    pub monitors: BTreeSet<MonitorId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Page {
    /// The editable details of this page, used to seed the form in edit mode.
    pub fn to_draft(&self) -> PageDraft {
        PageDraft {
            id: Some(self.id),
            workspace_id: Some(self.workspace_id),
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            custom_domain: self.custom_domain.clone(),
            icon: self.icon.clone(),
            monitors: self.monitors.clone(),
        }
    }
}

/// Location of a file stored by the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedBlob {
    pub url: String,
}
