//! Attribute enrichment - fills encoding and content type on every record
//!
//! Enrichment is a best-effort pass: a file that cannot be read or sniffed
//! ends up with `None` for the affected field and a warning in the log, and
//! the pass moves on to the next record.

mod content_type;
mod encoding;

pub use content_type::{ContentTypeSniffer, SIGNATURE_BYTES, SignatureSniffer};
pub use encoding::{CharsetSniffer, EncodingSniffer};

use crate::catalog::{Catalog, FileRecord};
use crate::config::EnrichConfig;
use crate::logging::SharedLogger;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Read};
use std::ops::AddAssign;
use std::path::Path;

/// Default prefix length handed to the encoding sniffer
pub const DEFAULT_SNIFF_BYTES: usize = 4096;

/// Read at most `limit` bytes from the start of `path`
pub(crate) fn read_prefix(path: &Path, limit: usize) -> io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buffer = Vec::with_capacity(limit.min(64 * 1024));
    file.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Counters from one enrichment pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EnrichStats {
    pub files_enriched: usize,
    /// Records that were already enriched and left alone
    pub files_skipped: usize,
    pub encoding_failures: usize,
    pub content_type_failures: usize,
}

impl AddAssign for EnrichStats {
    fn add_assign(&mut self, other: Self) {
        self.files_enriched += other.files_enriched;
        self.files_skipped += other.files_skipped;
        self.encoding_failures += other.encoding_failures;
        self.content_type_failures += other.content_type_failures;
    }
}

/// Runs the encoding and content-type sniffers over a catalog
pub struct Enricher {
    encoding_sniffer: Box<dyn EncodingSniffer>,
    content_type_sniffer: Box<dyn ContentTypeSniffer>,
    sniff_bytes: usize,
    parallel: bool,
    max_threads: Option<usize>,
    logger: SharedLogger,
}

impl Enricher {
    /// Enricher with the default sniffers
    pub fn new(logger: SharedLogger) -> Self {
        Self::with_sniffers(
            Box::new(CharsetSniffer),
            Box::new(SignatureSniffer::default()),
            logger,
        )
    }

    /// Enricher with caller-supplied sniffers
    pub fn with_sniffers(
        encoding_sniffer: Box<dyn EncodingSniffer>,
        content_type_sniffer: Box<dyn ContentTypeSniffer>,
        logger: SharedLogger,
    ) -> Self {
        Self {
            encoding_sniffer,
            content_type_sniffer,
            sniff_bytes: DEFAULT_SNIFF_BYTES,
            parallel: false,
            max_threads: None,
            logger,
        }
    }

    /// Apply the `[enrich]` configuration section
    pub fn configure(mut self, config: &EnrichConfig) -> Self {
        self.sniff_bytes = config.sniff_bytes;
        self.parallel = config.parallel;
        self.max_threads = config.max_threads;
        self
    }

    /// Length of the prefix read for encoding detection
    pub fn sniff_bytes(mut self, bytes: usize) -> Self {
        self.sniff_bytes = bytes;
        self
    }

    /// Enrich records on a rayon pool instead of sequentially
    pub fn parallel(mut self, parallel: bool, max_threads: Option<usize>) -> Self {
        self.parallel = parallel;
        self.max_threads = max_threads;
        self
    }

    /// Detect the encoding of one file; failures are logged and yield `None`
    pub fn detect_encoding(&self, path: &Path) -> Option<String> {
        self.try_detect_encoding(path)
            .inspect_err(|e| {
                self.logger.warn_file(
                    path,
                    &format!("Failed to detect encoding ({}): {:#}", self.encoding_sniffer.name(), e),
                )
            })
            .ok()
            .flatten()
    }

    /// Detect the content type of one file; failures are logged and yield `None`
    pub fn detect_content_type(&self, path: &Path) -> Option<String> {
        self.content_type_sniffer
            .detect_content_type(path)
            .inspect_err(|e| {
                self.logger.warn_file(
                    path,
                    &format!("Failed to detect content type ({}): {:#}", self.content_type_sniffer.name(), e),
                )
            })
            .ok()
            .flatten()
    }

    fn try_detect_encoding(&self, path: &Path) -> Result<Option<String>> {
        let prefix = read_prefix(path, self.sniff_bytes)
            .context("Failed to read file")?;
        self.encoding_sniffer.detect_encoding(&prefix)
    }

    /// Fill `encoding` and `content_type` on every record not yet enriched
    pub fn enrich(&self, catalog: &mut Catalog) -> EnrichStats {
        let stats = if self.parallel {
            self.enrich_parallel(catalog.records_mut())
        } else {
            self.enrich_sequential(catalog.records_mut())
        };

        self.logger.info(&format!(
            "Analyzed {} files for encoding and content type ({} already enriched).",
            stats.files_enriched, stats.files_skipped
        ));
        stats
    }

    fn enrich_sequential(&self, records: &mut [FileRecord]) -> EnrichStats {
        let mut stats = EnrichStats::default();
        for record in records.iter_mut() {
            stats += self.enrich_record(record);
        }
        stats
    }

    /// Each worker gets a disjoint `&mut FileRecord`, so no record is
    /// written by two workers
    fn enrich_parallel(&self, records: &mut [FileRecord]) -> EnrichStats {
        use rayon::prelude::*;

        let run = |records: &mut [FileRecord]| {
            records
                .par_iter_mut()
                .map(|record| self.enrich_record(record))
                .reduce(EnrichStats::default, |mut acc, stats| {
                    acc += stats;
                    acc
                })
        };

        match self.max_threads {
            Some(threads) => match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
                Ok(pool) => pool.install(|| run(records)),
                Err(e) => {
                    self.logger.warn(&format!(
                        "Could not build a {}-thread pool ({}); enriching sequentially",
                        threads, e
                    ));
                    self.enrich_sequential(records)
                }
            },
            None => run(records),
        }
    }

    fn enrich_record(&self, record: &mut FileRecord) -> EnrichStats {
        if record.is_enriched() {
            return EnrichStats {
                files_skipped: 1,
                ..EnrichStats::default()
            };
        }

        let encoding = self.detect_encoding(record.path());
        let content_type = self.detect_content_type(record.path());

        let stats = EnrichStats {
            files_enriched: 1,
            files_skipped: 0,
            encoding_failures: usize::from(encoding.is_none()),
            content_type_failures: usize::from(content_type.is_none()),
        };
        record.set_enrichment(encoding, content_type);
        stats
    }
}
