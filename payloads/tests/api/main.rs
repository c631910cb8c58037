mod page;
mod upload;

use test_helpers::spawn_app;

#[tokio::test]
async fn error_status_and_text_are_returned() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.mock_error("page/slug_unique", 503, "backend unavailable")
        .await;

    let error = app.client.get_slug_uniqueness("acme").await.unwrap_err();
    assert_eq!(error.to_string(), "backend unavailable");
    test_helpers::assert_status_code(
        Err::<(), _>(error),
        reqwest::StatusCode::SERVICE_UNAVAILABLE,
    );

    Ok(())
}
