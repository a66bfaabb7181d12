//! `filesift list` - show every catalogued file with its attributes

use super::{load_catalog, print_structured};
use crate::catalog::{CatalogSummary, FileRecord};
use crate::cli::{ListArgs, Output, OutputFormat};
use anyhow::Result;
use serde::Serialize;

#[derive(Serialize)]
struct Listing<'a> {
    records: &'a [FileRecord],
    summary: CatalogSummary,
}

pub fn execute(args: ListArgs, config_path: Option<&str>, format: OutputFormat, output: &Output) -> Result<()> {
    output.info(&format!("Cataloguing {}", args.root.display()));
    let catalog = load_catalog(&args.root, config_path, output)?;

    if format != OutputFormat::Text {
        return print_structured(
            &Listing {
                records: catalog.records(),
                summary: catalog.summary(),
            },
            format,
        );
    }

    for record in catalog.records() {
        output.record_row(
            &record.path().display().to_string(),
            record.extension(),
            record.encoding().unwrap_or("-"),
            record.content_type().unwrap_or("-"),
        );
    }

    let summary = catalog.summary();
    output.header("Summary");
    output.summary_stats("Files:", summary.total);
    for (label, counts) in [
        ("Extensions", &summary.extensions),
        ("Encodings", &summary.encodings),
        ("Content types", &summary.content_types),
    ] {
        output.summary_stats(&format!("{}:", label), counts.len());
        for (value, count) in counts {
            let value = if value.is_empty() { "(none)" } else { value.as_str() };
            output.table_row(value, &count.to_string());
        }
    }

    Ok(())
}
