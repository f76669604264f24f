pub mod fetch;
pub mod list;
pub mod put;

pub use fetch::FetchContentRequest;
pub use list::ListContentRequest;
pub use put::PutContentRequest;

use url::Url;

use crate::api::client::ApiError;

const CONTENT_PATH: [&str; 3] = ["api", "v0", "content"];

/// `{base}/api/v0/content/{target}`, keeping any path already on the base.
///
/// `/` in the target becomes separate path segments; every other character
/// is percent-encoded as needed.
pub(crate) fn content_url(base_url: &Url, target: &str) -> Result<Url, ApiError> {
    let mut url = base_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| ApiError::InvalidBaseUrl(base_url.clone()))?
        .pop_if_empty()
        .extend(CONTENT_PATH)
        .extend(target.split('/'));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_url_from_bare_host() {
        let base = Url::parse("https://magda.example.com").unwrap();
        let url = content_url(&base, "all").unwrap();
        assert_eq!(url.as_str(), "https://magda.example.com/api/v0/content/all");
    }

    #[test]
    fn test_content_url_keeps_base_path() {
        let base = Url::parse("https://example.com/magda/").unwrap();
        let url = content_url(&base, "header/logo.text").unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/magda/api/v0/content/header/logo.text"
        );
    }

    #[test]
    fn test_content_url_encodes_segments() {
        let base = Url::parse("http://localhost:6101").unwrap();
        let url = content_url(&base, "odd name?.json").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:6101/api/v0/content/odd%20name%3F.json"
        );
    }

    #[test]
    fn test_content_url_rejects_opaque_base() {
        let base = Url::parse("mailto:admin@example.com").unwrap();
        assert!(matches!(
            content_url(&base, "all"),
            Err(ApiError::InvalidBaseUrl(_))
        ));
    }
}
