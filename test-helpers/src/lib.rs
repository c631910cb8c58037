pub mod mock;

use httpmock::Method::POST;
use httpmock::{Mock, MockServer};
use payloads::{APIClient, requests, responses};
use reqwest::StatusCode;
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use mock::{monitors_a, page_a, page_draft_a};

/// A mock status page backend and a client pointed at it.
pub struct TestApp {
    pub server: MockServer,
    pub client: APIClient,
}

/// Route stubs for the backend endpoints the status page form talks to.
impl TestApp {
    pub async fn mock_slug_uniqueness(&self, slug: &str, unique: bool) -> Mock<'_> {
        let body = json!({ "slug": slug });
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/api/page/slug_unique").json_body(body);
                then.status(200).json_body(json!(unique));
            })
            .await
    }

    pub async fn mock_create_page(
        &self,
        request: &requests::CreatePage,
        created: &responses::Page,
    ) -> Mock<'_> {
        let body = serde_json::to_value(request).unwrap();
        let created = serde_json::to_value(created).unwrap();
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/api/create_page").json_body(body);
                then.status(200).json_body(created);
            })
            .await
    }

    pub async fn mock_update_page(
        &self,
        request: &requests::UpdatePage,
    ) -> Mock<'_> {
        let body = serde_json::to_value(request).unwrap();
        self.server
            .mock_async(|when, then| {
                when.method(POST).path("/api/update_page").json_body(body);
                then.status(200);
            })
            .await
    }

    /// Accepts an upload of exactly `contents` under `filename`.
    pub async fn mock_upload(
        &self,
        filename: &str,
        contents: &str,
        url: &str,
    ) -> Mock<'_> {
        let url = url.to_string();
        let filename = filename.to_string();
        let contents = contents.to_string();
        self.server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/upload")
                    .query_param("filename", filename)
                    .body(contents);
                then.status(200).json_body(json!({ "url": url }));
            })
            .await
    }

    /// Respond to any request on `path` with an error status and message.
    pub async fn mock_error(
        &self,
        path: &str,
        status: u16,
        message: &str,
    ) -> Mock<'_> {
        let path = format!("/api/{path}");
        let message = message.to_string();
        self.server
            .mock_async(|when, then| {
                when.method(POST).path(path);
                then.status(status).body(message);
            })
            .await
    }
}

/// Set up test logging. Output is suppressed unless RUST_LOG is set.
fn init_test_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("error"));
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Start a mock backend on an OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    init_test_logging();

    let server = MockServer::start_async().await;
    let client = APIClient {
        address: server.base_url(),
        inner_client: reqwest::Client::new(),
    };
    tracing::debug!("Mock backend listening on {}", client.address);

    TestApp { server, client }
}

/// Assert that the result of an API action results in a specific status code.
pub fn assert_status_code<T>(
    result: Result<T, payloads::ClientError>,
    expected: StatusCode,
) {
    match result {
        Err(payloads::ClientError::APIError(code, _)) => {
            assert_eq!(code, expected)
        }
        _ => panic!("Expected APIError"),
    };
}
