//! Attribute inference for unlabeled condition values

use crate::catalog::{Attribute, FileRecord};
use std::collections::HashSet;

/// Lower-cased distinct non-null values of `attribute` across `records`
pub fn observed_values(records: &[FileRecord], attribute: Attribute) -> HashSet<String> {
    records
        .iter()
        .filter_map(|record| record.attribute(attribute))
        .map(str::to_lowercase)
        .collect()
}

/// Decide which attribute a list of unlabeled values describes
///
/// Each attribute is tried in [`Attribute::PRECEDENCE`] order and the first
/// whose observed values share at least one member with `values` wins,
/// compared case-insensitively. `None` when nothing overlaps.
pub fn infer_attribute<S: AsRef<str>>(records: &[FileRecord], values: &[S]) -> Option<Attribute> {
    let wanted: HashSet<String> = values.iter().map(|v| v.as_ref().to_lowercase()).collect();
    if wanted.is_empty() {
        return None;
    }

    Attribute::PRECEDENCE
        .into_iter()
        .find(|&attribute| !observed_values(records, attribute).is_disjoint(&wanted))
}
