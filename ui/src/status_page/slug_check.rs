use payloads::ClientError;

use super::PageBackend;

pub const SLUG_TAKEN_MESSAGE: &str =
    "This slug is already taken. Please choose another one.";

/// Whether `slug` can be used for the page being edited.
///
/// A page keeps its own slug, compared case-insensitively, without asking
/// the backend.
pub async fn is_slug_available<B: PageBackend>(
    backend: &B,
    slug: &str,
    original_slug: Option<&str>,
) -> Result<bool, ClientError> {
    if original_slug
        .is_some_and(|original| original.to_lowercase() == slug.to_lowercase())
    {
        return Ok(true);
    }
    let unique = backend.is_slug_unique(slug).await?;
    tracing::debug!("Slug {slug:?} unique: {unique}");
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status_page::test_backend::TestBackend;
    use futures::executor::block_on;

    #[test]
    fn own_slug_is_available_regardless_of_backend() {
        let backend = TestBackend::with_taken(&["acme-status"]);
        for slug in ["acme-status", "Acme-Status", "ACME-STATUS"] {
            let available =
                block_on(is_slug_available(&backend, slug, Some("acme-status")))
                    .unwrap();
            assert!(available, "{slug}");
        }
        assert_eq!(backend.slug_checks(), 0);
    }

    #[test]
    fn other_slugs_ask_the_backend() {
        let backend = TestBackend::with_taken(&["taken"]);
        assert!(
            !block_on(is_slug_available(&backend, "taken", Some("acme")))
                .unwrap()
        );
        assert!(block_on(is_slug_available(&backend, "free", None)).unwrap());
        assert_eq!(backend.slug_checks(), 2);
    }

    #[test]
    fn backend_failure_is_returned() {
        let backend = TestBackend::failing();
        assert!(block_on(is_slug_available(&backend, "acme", None)).is_err());
    }
}
