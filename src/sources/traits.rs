use crate::domain::FetchRequest;
use crate::errors::ShopResult;

/// Issues a directory request and returns the response body.
#[cfg_attr(test, mockall::automock)]
pub trait PageFetcher: Send + Sync {
    /// Fetch the page for `request`; non-success statuses are errors
    fn fetch(&self, request: &FetchRequest) -> ShopResult<String>;
}
