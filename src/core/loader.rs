//! One-shot loading of the data directory.
//!
//! Layout:
//!
//! ```text
//! data/
//! ├── 01-01.yaml    # facts for 1 January, one YAML document per fact
//! ├── ...
//! ├── 12-31.yaml
//! ├── quotes.yaml
//! └── books.yaml
//! ```
//!
//! Loading is a single blocking pass. The store and indexes are built in
//! locals and only returned once every file has been read and parsed, so a
//! failure anywhere leaves nothing half-built for readers to observe.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::DayKey;
use crate::parser::{self, ParseError};

use super::almanac::Almanac;
use super::index::IndexBuilder;
use super::store::FactStore;

/// Default extension of data files
pub const DEFAULT_EXTENSION: &str = "yaml";

/// Errors that abort a load
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("Invalid day-file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

/// Location and file extension of a data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub dir: PathBuf,
    pub extension: String,
}

impl DataSource {
    /// Data directory with the default extension
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Glob pattern matching day-files ("*-*.<ext>")
    pub fn day_pattern(&self) -> String {
        let dir = glob::Pattern::escape(&self.dir.to_string_lossy());
        format!("{}/*-*.{}", dir, self.extension)
    }

    pub fn quotes_path(&self) -> PathBuf {
        self.dir.join(format!("quotes.{}", self.extension))
    }

    pub fn books_path(&self) -> PathBuf {
        self.dir.join(format!("books.{}", self.extension))
    }

    /// Day-file paths in lexicographic order
    pub fn day_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let mut files = Vec::new();
        for entry in glob::glob(&self.day_pattern())? {
            let path = entry.map_err(|e| LoadError::Io {
                path: e.path().to_path_buf(),
                source: e.into(),
            })?;
            files.push(path);
        }
        files.sort();
        Ok(files)
    }
}

/// Day key encoded in a day-file name ("05-03.yaml" → 05-03)
pub fn day_key_from_path(path: &Path) -> Option<DayKey> {
    path.file_stem()?.to_str()?.parse().ok()
}

fn read_records<T>(
    path: &Path,
    parse: impl FnOnce(&[u8]) -> Result<T, ParseError>,
) -> Result<T, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load every day-file plus quotes and books into a ready almanac
pub fn load(source: &DataSource) -> Result<Almanac, LoadError> {
    info!(dir = %source.dir.display(), "Loading facts");

    let mut store = FactStore::new();
    let mut builder = IndexBuilder::new();
    let mut fact_count = 0;

    for path in source.day_files()? {
        let Some(day) = day_key_from_path(&path) else {
            warn!(file = %path.display(), "Skipping file without a MM-DD name");
            continue;
        };

        let facts = read_records(&path, parser::parse_facts)?;

        for fact in facts.iter().filter(|f| f.day_key() != Some(day)) {
            warn!(
                %day,
                id = %fact.id,
                month = fact.month,
                day_of_month = fact.day,
                "Fact date does not match its day-file"
            );
        }

        builder.add_facts(&facts);
        builder.mark_day(day);
        fact_count += facts.len();

        debug!(%day, facts = facts.len(), "Loaded day-file");
        store.put_day(day, facts);
    }

    let indexes = builder.finish();

    info!("Loading quotes");
    let quotes = read_records(&source.quotes_path(), parser::parse_quotes)?;
    let quote_count = quotes.len();
    store.put_quotes(quotes);

    info!("Loading books");
    let books = read_records(&source.books_path(), parser::parse_books)?;
    let book_count = books.len();
    store.put_books(books);

    info!(
        days = indexes.days().count(),
        facts = fact_count,
        quotes = quote_count,
        books = book_count,
        "Data loaded"
    );

    Ok(Almanac::new(store, indexes, fact_count))
}
