use crate::domain::ScrapeResult;
use crate::errors::ShopResult;

#[cfg_attr(test, mockall::automock)]
pub trait ResultSink: Send + Sync {
    /// Persist one result as a single row.
    fn append(&self, result: &ScrapeResult) -> ShopResult<()>;
}
