use std::future::Future;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Minimal HTTP seam the persistence adapter is generic over.
///
/// Implementations carry the base URL and authentication; callers pass API
/// paths. Keeping this a trait lets tests drive the adapter with an
/// in-memory client and assert exactly which requests a save produced.
pub trait HttpClient: Send + Sync {
    fn get(&self, path: &str) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post(
        &self,
        path: &str,
        body: Vec<u8>,
        content_type: &str,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn put(&self, path: &str, body: Vec<u8>)
    -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}
