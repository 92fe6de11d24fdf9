pub mod line;
pub mod catalog;
pub mod source;
pub mod task;

pub use line::{mrt_lines, Line};
pub use catalog::StationCatalog;
pub use source::{FetchRequest, Source};
pub use task::{CrawlTask, OutputRow, ScrapeResult, OPTIONS_SEPARATOR};
