use reqwest::StatusCode;
use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn upload_returns_blob_url() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mock = app
        .mock_upload("favicon.png", "icon-bytes", "https://x/y.png")
        .await;

    let blob = app
        .client
        .upload_blob("favicon.png", b"icon-bytes".to_vec())
        .await?;
    assert_eq!(blob.url, "https://x/y.png");

    mock.assert_calls(1);
    Ok(())
}

#[tokio::test]
async fn upload_sends_file_bytes_as_body() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mock = app
        .mock_upload("favicon.png", "icon-bytes", "https://x/y.png")
        .await;

    // No stub matches a different body, so the mock server answers 404.
    let result = app
        .client
        .upload_blob("favicon.png", b"something else".to_vec())
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);

    mock.assert_calls(0);
    Ok(())
}

#[tokio::test]
async fn upload_filename_is_url_encoded() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let mock = app
        .mock_upload("my icon.png", "icon-bytes", "https://x/my-icon.png")
        .await;

    let blob = app
        .client
        .upload_blob("my icon.png", b"icon-bytes".to_vec())
        .await?;
    assert_eq!(blob.url, "https://x/my-icon.png");

    mock.assert_calls(1);
    Ok(())
}

#[tokio::test]
async fn malformed_upload_response_is_a_network_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.server
        .mock_async(|when, then| {
            when.path("/api/upload");
            then.status(200).body("not json");
        })
        .await;

    let result = app.client.upload_blob("favicon.png", vec![1, 2, 3]).await;
    assert!(matches!(result, Err(payloads::ClientError::Network(_))));

    Ok(())
}
