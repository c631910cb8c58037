//! Fixture data for status page tests.
//!
//! A single workspace ("acme") with three monitors and one page that shows
//! two of them.

use jiff::Timestamp;
use payloads::{
    Monitor, MonitorId, PageDraft, PageId, WorkspaceId, responses,
};

pub const WORKSPACE_SLUG: &str = "acme";
pub const WORKSPACE_ID: WorkspaceId = WorkspaceId(1);

pub fn monitors_a() -> Vec<Monitor> {
    vec![
        Monitor {
            id: MonitorId(1),
            name: "Website".into(),
            url: "https://acme.example.com".into(),
        },
        Monitor {
            id: MonitorId(2),
            name: "API".into(),
            url: "https://api.acme.example.com/health".into(),
        },
        Monitor {
            id: MonitorId(3),
            name: "Docs".into(),
            url: "https://docs.acme.example.com".into(),
        },
    ]
}

/// A complete draft for a page that has not been created yet.
pub fn page_draft_a() -> PageDraft {
    PageDraft {
        id: None,
        workspace_id: Some(WORKSPACE_ID),
        title: "Acme Status".into(),
        description: "Live status of Acme services".into(),
        slug: "acme-status".into(),
        custom_domain: String::new(),
        icon: String::new(),
        monitors: [MonitorId(1), MonitorId(2)].into_iter().collect(),
    }
}

/// The persisted version of `page_draft_a`.
pub fn page_a(page_id: PageId) -> responses::Page {
    let draft = page_draft_a();
    let created_at: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
    responses::Page {
        id: page_id,
        workspace_id: WORKSPACE_ID,
        title: draft.title,
        description: draft.description,
        slug: draft.slug,
        custom_domain: draft.custom_domain,
        icon: draft.icon,
        monitors: draft.monitors,
        created_at,
        updated_at: created_at,
    }
}
