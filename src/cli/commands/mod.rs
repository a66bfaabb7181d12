//! Command implementations for the filesift CLI

pub mod config;
pub mod filter;
pub mod list;

use crate::catalog::{Catalog, CatalogBuilder};
use crate::cli::{OutputFormat, Output};
use crate::config::FilesiftConfig;
use crate::enrich::Enricher;
use crate::logging::TracingLogger;
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Load config, then build and enrich the catalog for `root`
pub(crate) fn load_catalog(root: &Path, config_path: Option<&str>, output: &Output) -> Result<Catalog> {
    let config = FilesiftConfig::load(config_path)?;
    let logger = TracingLogger::shared();

    let mut catalog = CatalogBuilder::new(root, logger.clone())?
        .follow_symlinks(config.scan.follow_symlinks)
        .build();

    let stats = Enricher::new(logger).configure(&config.enrich).enrich(&mut catalog);
    output.verbose(&format!(
        "Enriched {} files ({} encoding failures, {} content type failures)",
        stats.files_enriched, stats.encoding_failures, stats.content_type_failures
    ));

    Ok(catalog)
}

/// Print `value` as JSON or YAML; text callers render themselves
pub(crate) fn print_structured<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml | OutputFormat::Text => print!("{}", serde_yml::to_string(value)?),
    }
    Ok(())
}
