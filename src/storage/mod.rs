pub mod traits;
pub mod csv_sink;

pub use traits::ResultSink;
pub use csv_sink::{CsvSink, SourceSinks};
