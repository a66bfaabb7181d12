//! File catalog - one attribute record per regular file under a root
//!
//! The catalog is built once by [`CatalogBuilder`], enriched once by
//! [`crate::enrich::Enricher`] and then filtered any number of times through
//! the filter engine methods in [`crate::filter`].

mod builder;
mod error;
mod record;

pub use builder::CatalogBuilder;
pub use error::CatalogError;
pub use record::{Attribute, FileRecord, split_extension};

use crate::logging::SharedLogger;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Ordered collection of [`FileRecord`]s keyed by path
pub struct Catalog {
    root: PathBuf,
    records: Vec<FileRecord>,
    seen: HashSet<PathBuf>,
    pub(crate) logger: SharedLogger,
}

impl Catalog {
    /// Create an empty catalog for `root`
    pub fn new(root: impl Into<PathBuf>, logger: SharedLogger) -> Self {
        Self {
            root: root.into(),
            records: Vec::new(),
            seen: HashSet::new(),
            logger,
        }
    }

    /// Build a catalog from records that already exist, e.g. from a previous
    /// listing. Records with a path already present are dropped.
    pub fn from_records(
        root: impl Into<PathBuf>,
        records: impl IntoIterator<Item = FileRecord>,
        logger: SharedLogger,
    ) -> Self {
        let mut catalog = Self::new(root, logger);
        for record in records {
            catalog.push(record);
        }
        catalog
    }

    /// Append a record. Returns false if its path is already catalogued.
    pub(crate) fn push(&mut self, record: FileRecord) -> bool {
        if !self.seen.insert(record.path().to_path_buf()) {
            self.logger.warn_file(record.path(), "Duplicate path ignored");
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&FileRecord> {
        let path = path.as_ref();
        self.records.iter().find(|r| r.path() == path)
    }

    pub(crate) fn records_mut(&mut self) -> &mut [FileRecord] {
        &mut self.records
    }

    /// Counts of records and of distinct attribute values
    pub fn summary(&self) -> CatalogSummary {
        let mut summary = CatalogSummary {
            total: self.records.len(),
            ..CatalogSummary::default()
        };

        for record in &self.records {
            if record.passes() {
                summary.passing += 1;
            }
            *summary
                .extensions
                .entry(record.extension().to_string())
                .or_default() += 1;
            if let Some(encoding) = record.encoding() {
                *summary.encodings.entry(encoding.to_string()).or_default() += 1;
            }
            if let Some(content_type) = record.content_type() {
                *summary
                    .content_types
                    .entry(content_type.to_string())
                    .or_default() += 1;
            }
        }

        summary
    }
}

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("root", &self.root)
            .field("records", &self.records)
            .finish()
    }
}

/// Aggregate view of a catalog
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub total: usize,
    pub passing: usize,
    pub extensions: BTreeMap<String, usize>,
    pub encodings: BTreeMap<String, usize>,
    pub content_types: BTreeMap<String, usize>,
}
