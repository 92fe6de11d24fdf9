use crate::domain::{CrawlTask, Source, StationCatalog};

/// Lazily yields one task per catalog station, tagged with `source`.
pub fn plan(source: Source, catalog: &StationCatalog) -> impl Iterator<Item = CrawlTask> + Send + '_ {
    catalog
        .iter()
        .map(move |station| CrawlTask::new(station, source))
}
