use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaStoreError {
    #[error("media listing failed: {0}")]
    Retrieval(String),
    #[error("retrieval url minting failed: {0}")]
    Minting(String),
}

/// Capability interface over the object store holding the media files.
///
/// Implementations must list every object under the store's prefix (paging
/// until exhaustion) and mint a fresh time-boxed retrieval URL on every call.
/// Neither operation is retried here.
pub trait MediaStore {
    fn list_keys(&self) -> Result<Vec<String>, MediaStoreError>;

    fn mint_retrieval_url(&self, key: &str, ttl_secs: u64) -> Result<String, MediaStoreError>;
}

/// Drains a paginated listing by following continuation tokens until the
/// backend reports no further page, so large buckets are never truncated.
///
/// `fetch_page` receives the continuation token to resume from (`None` for
/// the first page) and returns that page's keys plus the next token, if any.
/// A failure on any page fails the whole listing.
pub fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<String>, MediaStoreError>
where
    F: FnMut(Option<String>) -> Result<(Vec<String>, Option<String>), MediaStoreError>,
{
    let mut keys = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let (page_keys, next_token) = fetch_page(continuation_token.take())?;
        keys.extend(page_keys);
        match next_token {
            Some(token) => continuation_token = Some(token),
            None => break,
        }
    }

    Ok(keys)
}
