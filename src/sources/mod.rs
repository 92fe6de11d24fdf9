pub mod traits;
pub mod http;
pub mod extractor;

pub use traits::PageFetcher;
pub use http::HttpFetcher;
pub use extractor::ResultExtractor;
