use serde::Serialize;

use crate::domain::{FetchRequest, Source};

/// Separator used to flatten options into the single `Options` column.
pub const OPTIONS_SEPARATOR: &str = ", ";

/// One station to search on one source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrawlTask {
    pub station: String,
    pub source: Source,
}

impl CrawlTask {
    pub fn new<S: Into<String>>(station: S, source: Source) -> Self {
        Self {
            station: station.into(),
            source,
        }
    }

    pub fn request(&self) -> FetchRequest {
        self.source.request(&self.station)
    }
}

/// Options extracted for a fetched task, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeResult {
    pub station: String,
    pub source: Source,
    pub options: Vec<String>,
}

impl ScrapeResult {
    pub fn new(task: CrawlTask, options: Vec<String>) -> Self {
        Self {
            station: task.station,
            source: task.source,
            options,
        }
    }

    pub fn to_row(&self) -> OutputRow<'_> {
        OutputRow {
            station: &self.station,
            options: self.options.join(OPTIONS_SEPARATOR),
            source: self.source.as_str(),
        }
    }
}

/// A CSV line as persisted. Fragments containing the separator cannot be
/// told apart from two fragments once joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow<'a> {
    #[serde(rename = "Station")]
    pub station: &'a str,
    #[serde(rename = "Options")]
    pub options: String,
    #[serde(rename = "Source")]
    pub source: &'a str,
}

impl OutputRow<'_> {
    pub const HEADER: [&'static str; 3] = ["Station", "Options", "Source"];
}
