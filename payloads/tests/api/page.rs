use payloads::{MonitorId, PageId, requests};
use reqwest::StatusCode;
use test_helpers::{
    assert_status_code, mock::WORKSPACE_SLUG, page_a, page_draft_a, spawn_app,
};

#[tokio::test]
async fn slug_uniqueness() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let free = app.mock_slug_uniqueness("acme-status", true).await;
    let taken = app.mock_slug_uniqueness("taken", false).await;

    assert!(app.client.get_slug_uniqueness("acme-status").await?);
    assert!(!app.client.get_slug_uniqueness("taken").await?);

    free.assert_calls(1);
    taken.assert_calls(1);
    Ok(())
}

#[tokio::test]
async fn create_page_returns_persisted_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let request = requests::CreatePage {
        workspace_slug: WORKSPACE_SLUG.to_string(),
        page: page_draft_a(),
    };
    let expected = page_a(PageId(42));
    let mock = app.mock_create_page(&request, &expected).await;

    let page = app.client.create_page(&request).await?;
    assert_eq!(page, expected);
    assert_eq!(page.id, PageId(42));
    assert_eq!(page.to_draft().id, Some(PageId(42)));
    assert_eq!(page.to_draft().title, request.page.title);

    mock.assert_calls(1);
    Ok(())
}

#[tokio::test]
async fn update_page_sends_page_id_and_draft() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mut page = page_a(PageId(42)).to_draft();
    page.title = "Acme Status (EU)".into();
    page.monitors.insert(MonitorId(3));
    let request = requests::UpdatePage {
        page_id: PageId(42),
        page,
    };
    let mock = app.mock_update_page(&request).await;

    app.client.update_page(&request).await?;

    mock.assert_calls(1);
    Ok(())
}

#[tokio::test]
async fn create_page_conflict_is_an_api_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mock_error("create_page", 409, "Slug already taken").await;

    let request = requests::CreatePage {
        workspace_slug: WORKSPACE_SLUG.to_string(),
        page: page_draft_a(),
    };
    let result = app.client.create_page(&request).await;
    assert!(
        result
            .as_ref()
            .unwrap_err()
            .to_string()
            .contains("Slug already taken")
    );
    assert_status_code(result, StatusCode::CONFLICT);

    Ok(())
}
