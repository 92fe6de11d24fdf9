pub mod planner;
pub mod crawl_service;

pub use planner::plan;
pub use crawl_service::{CrawlService, CrawlStats};
