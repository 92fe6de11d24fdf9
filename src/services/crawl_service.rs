use rayon::iter::{ParallelBridge, ParallelIterator};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, error, info, warn};

use crate::domain::{CrawlTask, ScrapeResult, Source, StationCatalog};
use crate::errors::{ShopError, ShopResult};
use crate::services::planner;
use crate::sources::{PageFetcher, ResultExtractor};
use crate::storage::ResultSink;

/// Counters for one source's crawl.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub planned: usize,
    pub fetched: usize,
    pub failed: usize,
    pub written: usize,
    pub sink_errors: usize,
}

impl CrawlStats {
    fn record(mut self, outcome: TaskOutcome) -> Self {
        self.planned += 1;
        match outcome {
            TaskOutcome::FetchFailed => self.failed += 1,
            TaskOutcome::Written => {
                self.fetched += 1;
                self.written += 1;
            }
            TaskOutcome::SinkFailed => {
                self.fetched += 1;
                self.sink_errors += 1;
            }
        }
        self
    }

    fn merge(self, other: Self) -> Self {
        Self {
            planned: self.planned + other.planned,
            fetched: self.fetched + other.fetched,
            failed: self.failed + other.failed,
            written: self.written + other.written,
            sink_errors: self.sink_errors + other.sink_errors,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskOutcome {
    Written,
    FetchFailed,
    SinkFailed,
}

pub struct CrawlService<F: PageFetcher, S: ResultSink> {
    fetcher: F,
    sink: S,
    extractor: ResultExtractor,
    pool: ThreadPool,
}

impl<F: PageFetcher, S: ResultSink> CrawlService<F, S> {
    pub fn new(fetcher: F, sink: S, concurrency: usize) -> ShopResult<Self> {
        // rayon reads 0 as "one thread per core"
        if concurrency == 0 {
            return Err(ShopError::Config("Concurrency must be at least 1".to_string()));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(concurrency)
            .thread_name(|i| format!("crawl-{}", i))
            .build()
            .map_err(|e| ShopError::Config(format!("Could not start worker pool: {}", e)))?;

        Ok(Self {
            fetcher,
            sink,
            extractor: ResultExtractor::new()?,
            pool,
        })
    }

    /// Crawl every catalog station on `source`. Tasks run concurrently and in
    /// no particular order; failed fetches are dropped, failed appends are
    /// counted and do not stop the crawl.
    pub fn crawl(&self, source: Source, catalog: &StationCatalog) -> CrawlStats {
        info!(%source, stations = catalog.len(), "starting crawl");

        let stats = self.pool.install(|| {
            planner::plan(source, catalog)
                .par_bridge()
                .map(|task| self.run_task(task))
                .fold(CrawlStats::default, CrawlStats::record)
                .reduce(CrawlStats::default, CrawlStats::merge)
        });

        info!(
            %source,
            planned = stats.planned,
            written = stats.written,
            failed = stats.failed,
            sink_errors = stats.sink_errors,
            "crawl finished"
        );

        stats
    }

    /// Crawl each source in turn.
    pub fn crawl_all(&self, sources: &[Source], catalog: &StationCatalog) -> Vec<(Source, CrawlStats)> {
        sources
            .iter()
            .map(|source| (*source, self.crawl(*source, catalog)))
            .collect()
    }

    fn run_task(&self, task: CrawlTask) -> TaskOutcome {
        let page = match self.fetcher.fetch(&task.request()) {
            Ok(page) => page,
            Err(e) => {
                warn!(station = %task.station, source = %task.source, error = %e, "fetch failed");
                return TaskOutcome::FetchFailed;
            }
        };

        let options = self.extractor.extract(task.source, &page);
        debug!(station = %task.station, source = %task.source, options = options.len(), "extracted");

        let result = ScrapeResult::new(task, options);
        match self.sink.append(&result) {
            Ok(()) => TaskOutcome::Written,
            Err(e) => {
                error!(station = %result.station, source = %result.source, error = %e, "write failed");
                TaskOutcome::SinkFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FetchRequest;
    use crate::sources::traits::MockPageFetcher;
    use crate::storage::traits::MockResultSink;
    use crate::storage::CsvSink;
    use tempfile::TempDir;

    const BISHAN_PAGE: &str = r#"<html><body>
        <h3 class="gb-headline gb-headline-d819c2b1 gb-headline-text">Shop1</h3>
        <h3 class="gb-headline gb-headline-d819c2b1 gb-headline-text">Shop2</h3>
    </body></html>"#;

    fn station_of(request: &FetchRequest) -> String {
        match request {
            FetchRequest::Form { fields, .. } => fields[0].1.clone(),
            FetchRequest::Get { query, .. } => query[0].1.clone(),
        }
    }

    fn io_error(message: &str) -> ShopError {
        ShopError::Io(std::io::Error::other(message.to_string()))
    }

    #[test]
    fn test_end_to_end_two_stations() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(Source::StellarLifestyle.output_file_name());

        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(2).returning(|request| {
            match station_of(request).as_str() {
                "Bishan" => Ok(BISHAN_PAGE.to_string()),
                _ => Ok("<html><body></body></html>".to_string()),
            }
        });

        let sink = CsvSink::open(&path).unwrap();
        let service = CrawlService::new(fetcher, sink, 2).unwrap();
        let catalog: StationCatalog = ["Bishan", "Yishun"].into_iter().collect();

        let stats = service.crawl(Source::StellarLifestyle, &catalog);

        assert_eq!(
            stats,
            CrawlStats {
                planned: 2,
                fetched: 2,
                failed: 0,
                written: 2,
                sink_errors: 0
            }
        );

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<&str> = reader.headers().unwrap().iter().collect();
        assert_eq!(headers, vec!["Station", "Options", "Source"]);

        let mut rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect())
            .collect();
        rows.sort();

        assert_eq!(
            rows,
            vec![
                vec!["Bishan", "Shop1, Shop2", "stellarlifestyle"],
                vec!["Yishun", "", "stellarlifestyle"],
            ]
        );
    }

    #[test]
    fn test_fetch_failure_drops_task() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().returning(|request| {
            if station_of(request) == "Bishan" {
                Err(io_error("timed out"))
            } else {
                Ok(String::new())
            }
        });

        let mut sink = MockResultSink::new();
        sink.expect_append()
            .withf(|result: &ScrapeResult| result.station == "Yishun")
            .times(1)
            .returning(|_| Ok(()));

        let service = CrawlService::new(fetcher, sink, 2).unwrap();
        let catalog: StationCatalog = ["Bishan", "Yishun"].into_iter().collect();

        let stats = service.crawl(Source::SbsTransit, &catalog);

        assert_eq!(stats.planned, 2);
        assert_eq!(stats.failed, 1);
        assert_eq!(stats.written, 1);
    }

    #[test]
    fn test_sink_failure_is_counted_and_crawl_continues() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(3).returning(|_| Ok(String::new()));

        let mut sink = MockResultSink::new();
        sink.expect_append().times(3).returning(|result| {
            if result.station == "Kovan" {
                Err(io_error("disk full"))
            } else {
                Ok(())
            }
        });

        let service = CrawlService::new(fetcher, sink, 3).unwrap();
        let catalog: StationCatalog = ["Kovan", "Hougang", "Punggol"].into_iter().collect();

        let stats = service.crawl(Source::StellarLifestyle, &catalog);

        assert_eq!(stats.fetched, 3);
        assert_eq!(stats.written, 2);
        assert_eq!(stats.sink_errors, 1);
    }

    #[test]
    fn test_requests_follow_source_shape() {
        let mut fetcher = MockPageFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|request: &FetchRequest| matches!(request, FetchRequest::Get { .. }))
            .times(1)
            .returning(|_| Ok(String::new()));

        let mut sink = MockResultSink::new();
        sink.expect_append()
            .withf(|result: &ScrapeResult| result.source == Source::SbsTransit && result.options.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let service = CrawlService::new(fetcher, sink, 1).unwrap();
        let catalog: StationCatalog = ["Bishan"].into_iter().collect();

        service.crawl(Source::SbsTransit, &catalog);
    }

    #[test]
    fn test_crawl_all_covers_each_source() {
        let mut fetcher = MockPageFetcher::new();
        fetcher.expect_fetch().times(4).returning(|_| Ok(String::new()));

        let mut sink = MockResultSink::new();
        sink.expect_append().times(4).returning(|_| Ok(()));

        let service = CrawlService::new(fetcher, sink, 2).unwrap();
        let catalog: StationCatalog = ["Bishan", "Yishun"].into_iter().collect();

        let results = service.crawl_all(&Source::ALL, &catalog);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, Source::StellarLifestyle);
        assert_eq!(results[1].0, Source::SbsTransit);
        assert!(results.iter().all(|(_, stats)| stats.written == 2));
    }

    #[test]
    fn test_zero_concurrency_is_a_config_error() {
        let result = CrawlService::new(MockPageFetcher::new(), MockResultSink::new(), 0);
        assert!(matches!(result, Err(ShopError::Config(_))));
    }
}
