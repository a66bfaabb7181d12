//! # filesift - catalog, sniff and filter the files under a directory
//!
//! filesift walks a directory tree into a [`catalog::Catalog`] with one
//! record per regular file, fills in each file's character encoding and
//! content type by sniffing its bytes, and then selects files through
//! composable attribute filters.
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use filesift::catalog::CatalogBuilder;
//! use filesift::enrich::Enricher;
//! use filesift::filter::CategoryConditions;
//! use filesift::logging::TracingLogger;
//!
//! let logger = TracingLogger::shared();
//! let mut catalog = CatalogBuilder::new("project/", logger.clone())?.build();
//! Enricher::new(logger).enrich(&mut catalog);
//!
//! catalog.apply_filters(
//!     CategoryConditions::new()
//!         .extensions([".cpp", ".h", ".hpp"])
//!         .encodings(["utf-8", "ascii"]),
//! );
//! for path in catalog.get_filtered_files() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Command Line
//!
//! ```bash
//! # Every file with its extension, encoding and content type
//! filesift list src/
//!
//! # Labelled conditions are AND-ed together
//! filesift filter src/ --ext .cpp,.h --encoding utf-8
//!
//! # Unlabeled values: the attribute is inferred from the catalog
//! filesift filter src/ image/png
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod enrich;
pub mod filter;
pub mod logging;

pub use catalog::{Catalog, CatalogBuilder, CatalogError, FileRecord};
pub use cli::{Cli, Output};
pub use config::FilesiftConfig;

/// Result type alias for filesift operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
