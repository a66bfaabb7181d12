//! Filter engine - narrows the per-record pass flag
//!
//! Each call to [`Catalog::apply_filters`] starts a fresh session: every
//! pass flag is reset to `true`, then the requested conditions are AND-ed
//! in. Within one call, several categories narrow monotonically; across
//! calls nothing carries over.
//!
//! ```rust,no_run
//! use filesift::catalog::CatalogBuilder;
//! use filesift::enrich::Enricher;
//! use filesift::filter::CategoryConditions;
//! use filesift::logging::TracingLogger;
//!
//! let logger = TracingLogger::shared();
//! let mut catalog = CatalogBuilder::new("src/", logger.clone())?.build();
//! Enricher::new(logger).enrich(&mut catalog);
//!
//! // Labelled conditions
//! catalog.apply_filters(CategoryConditions::new().extensions([".rs"]).encodings(["utf-8"]));
//!
//! // Unlabeled - the attribute is inferred from what the catalog contains
//! catalog.apply_filters("ascii");
//!
//! for path in catalog.get_filtered_files() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod conditions;
mod inference;

pub use conditions::{CategoryConditions, Conditions};
pub use inference::{infer_attribute, observed_values};

use crate::catalog::{Attribute, Catalog};
use std::collections::HashSet;
use std::path::Path;

impl Catalog {
    /// Start a filtering session and apply `conditions`
    ///
    /// Returns the attributes that were actually filtered on, in the order
    /// applied. An empty result for unlabeled values means inference failed
    /// and every record passes.
    pub fn apply_filters(&mut self, conditions: impl Into<Conditions>) -> Vec<Attribute> {
        self.reset_filters();

        match conditions.into() {
            Conditions::ByCategory(categories) => {
                let mut applied = Vec::new();
                if let Some(values) = &categories.extensions {
                    self.by_extension(values.as_slice());
                    applied.push(Attribute::Extension);
                }
                if let Some(values) = &categories.encodings {
                    self.by_encoding(values.as_slice());
                    applied.push(Attribute::Encoding);
                }
                if let Some(values) = &categories.content_types {
                    self.by_content_type(values.as_slice());
                    applied.push(Attribute::ContentType);
                }
                applied
            }
            Conditions::Unlabeled(values) => match infer_attribute(self.records(), values.as_slice()) {
                Some(attribute) => {
                    self.logger
                        .info(&format!("Inferred {} filter for {:?}", attribute, values));
                    self.filter_by(attribute, values.as_slice());
                    vec![attribute]
                }
                None => {
                    self.logger
                        .warn("Could not infer condition type. No filters applied.");
                    Vec::new()
                }
            },
        }
    }

    /// Start a filtering session from JSON in any of the three condition
    /// shapes. Malformed input is logged and leaves every record passing.
    pub fn apply_filters_json(&mut self, raw: &str) -> Vec<Attribute> {
        match serde_json::from_str::<Conditions>(raw) {
            Ok(conditions) => self.apply_filters(conditions),
            Err(e) => {
                self.reset_filters();
                self.logger.warn(&format!(
                    "Invalid conditions provided. No filters applied. ({})",
                    e
                ));
                Vec::new()
            }
        }
    }

    /// Reset every pass flag to `true`
    pub fn reset_filters(&mut self) {
        for record in self.records_mut() {
            record.reset_pass();
        }
    }

    /// Narrow to records whose extension is one of `extensions`
    pub fn by_extension<S: AsRef<str>>(&mut self, extensions: &[S]) {
        self.filter_by(Attribute::Extension, extensions);
    }

    /// Narrow to records whose encoding is one of `encodings`
    pub fn by_encoding<S: AsRef<str>>(&mut self, encodings: &[S]) {
        self.filter_by(Attribute::Encoding, encodings);
    }

    /// Narrow to records whose content type is one of `content_types`
    pub fn by_content_type<S: AsRef<str>>(&mut self, content_types: &[S]) {
        self.filter_by(Attribute::ContentType, content_types);
    }

    /// Case-insensitive membership test, AND-ed into each pass flag.
    /// Records without a value for `attribute` never match.
    fn filter_by<S: AsRef<str>>(&mut self, attribute: Attribute, values: &[S]) {
        let accepted: HashSet<String> = values.iter().map(|v| v.as_ref().to_lowercase()).collect();

        for record in self.records_mut() {
            let matched = record
                .attribute(attribute)
                .is_some_and(|value| accepted.contains(&value.to_lowercase()));
            record.narrow_pass(matched);
        }

        let mut listed: Vec<&String> = accepted.iter().collect();
        listed.sort();
        self.logger
            .info(&format!("Applied {} filter: {:?}", attribute, listed));
    }

    /// Paths of every record that passes, in catalog order
    pub fn get_filtered_files(&self) -> Vec<&Path> {
        let paths: Vec<&Path> = self
            .records()
            .iter()
            .filter(|record| record.passes())
            .map(|record| record.path())
            .collect();
        self.logger
            .info(&format!("Number of files after filtering: {}", paths.len()));
        paths
    }
}
