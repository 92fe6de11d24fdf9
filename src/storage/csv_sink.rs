use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use csv::{Terminator, Writer, WriterBuilder};

use crate::domain::{OutputRow, ScrapeResult, Source};
use crate::errors::{ShopError, ShopResult};
use crate::storage::traits::ResultSink;

struct SinkState {
    writer: Writer<File>,
    header_written: bool,
}

/// Append-only CSV file. Appends are serialized through one lock per file so
/// the header is written exactly once and rows never interleave.
pub struct CsvSink {
    path: PathBuf,
    state: Mutex<SinkState>,
}

impl CsvSink {
    /// Open (creating if absent) `path` for appending. A non-empty file is
    /// assumed to already carry its header.
    pub fn open<P: AsRef<Path>>(path: P) -> ShopResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let header_written = file.metadata()?.len() > 0;
        let writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::CRLF)
            .from_writer(file);

        Ok(Self {
            path,
            state: Mutex::new(SinkState {
                writer,
                header_written,
            }),
        })
    }

    fn state(&self) -> ShopResult<MutexGuard<'_, SinkState>> {
        self.state.lock().map_err(|_| {
            ShopError::Io(io::Error::other(format!(
                "sink lock poisoned: {}",
                self.path.display()
            )))
        })
    }
}

impl ResultSink for CsvSink {
    fn append(&self, result: &ScrapeResult) -> ShopResult<()> {
        let mut state = self.state()?;

        if !state.header_written {
            state.writer.write_record(OutputRow::HEADER)?;
            state.header_written = true;
        }

        state.writer.serialize(result.to_row())?;
        state.writer.flush()?;

        Ok(())
    }
}

/// One [`CsvSink`] per source, each at `{dir}/{source}_lifestyle.csv`.
pub struct SourceSinks {
    sinks: HashMap<Source, CsvSink>,
}

impl SourceSinks {
    pub fn open<P: AsRef<Path>>(dir: P, sources: &[Source]) -> ShopResult<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let mut sinks = HashMap::new();
        for source in sources {
            sinks.insert(*source, CsvSink::open(dir.join(source.output_file_name()))?);
        }

        Ok(Self { sinks })
    }
}

impl ResultSink for SourceSinks {
    fn append(&self, result: &ScrapeResult) -> ShopResult<()> {
        self.sinks
            .get(&result.source)
            .ok_or_else(|| ShopError::UnknownSource(result.source.to_string()))?
            .append(result)
    }
}
