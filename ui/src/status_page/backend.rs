use payloads::{APIClient, ClientError, requests, responses};

/// The remote calls the status page form depends on.
#[allow(async_fn_in_trait)]
pub trait PageBackend {
    async fn is_slug_unique(&self, slug: &str) -> Result<bool, ClientError>;

    async fn create_page(
        &self,
        details: &requests::CreatePage,
    ) -> Result<responses::Page, ClientError>;

    async fn update_page(
        &self,
        details: &requests::UpdatePage,
    ) -> Result<(), ClientError>;
}

impl PageBackend for APIClient {
    async fn is_slug_unique(&self, slug: &str) -> Result<bool, ClientError> {
        APIClient::get_slug_uniqueness(self, slug).await
    }

    async fn create_page(
        &self,
        details: &requests::CreatePage,
    ) -> Result<responses::Page, ClientError> {
        APIClient::create_page(self, details).await
    }

    async fn update_page(
        &self,
        details: &requests::UpdatePage,
    ) -> Result<(), ClientError> {
        APIClient::update_page(self, details).await
    }
}
