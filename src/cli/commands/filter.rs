//! `filesift filter` - print the files that pass a set of conditions

use super::{load_catalog, print_structured};
use crate::catalog::Attribute;
use crate::cli::{FilterArgs, Output, OutputFormat};
use crate::filter::{CategoryConditions, Conditions};
use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;

#[derive(Serialize)]
struct FilterReport<'a> {
    applied: Vec<Attribute>,
    total: usize,
    files: Vec<Cow<'a, str>>,
}

pub fn execute(args: FilterArgs, config_path: Option<&str>, format: OutputFormat, output: &Output) -> Result<()> {
    let mut catalog = load_catalog(&args.root, config_path, output)?;

    // Malformed or uninferable conditions are reported through the logger
    let applied = match (&args.conditions, resolve_conditions(&args)) {
        (Some(raw), _) => catalog.apply_filters_json(raw),
        (None, Some(conditions)) => catalog.apply_filters(conditions),
        (None, None) => Vec::new(),
    };

    let total = catalog.len();
    let files = catalog.get_filtered_files();

    if format != OutputFormat::Text {
        let count = files.len();
        if args.count_only {
            return print_structured(&serde_json::json!({ "count": count, "total": total }), format);
        }
        let files = files.iter().map(|path| path.to_string_lossy()).collect();
        return print_structured(&FilterReport { applied, total, files }, format);
    }

    if args.count_only {
        println!("{}", files.len());
        return Ok(());
    }

    for path in &files {
        println!("{}", path.display());
    }
    output.success(&format!("{} of {} files matched", files.len(), total));

    Ok(())
}

/// Turn the labelled flags or bare values into filter conditions; `None`
/// means none were given. `--where` JSON is parsed by the catalog itself.
fn resolve_conditions(args: &FilterArgs) -> Option<Conditions> {
    let labelled = [&args.extensions, &args.encodings, &args.content_types];
    if labelled.iter().any(|values| !values.is_empty()) {
        let non_empty = |values: &Vec<String>| (!values.is_empty()).then(|| values.clone());
        return Some(Conditions::ByCategory(CategoryConditions {
            extensions: non_empty(&args.extensions),
            encodings: non_empty(&args.encodings),
            content_types: non_empty(&args.content_types),
        }));
    }

    if !args.values.is_empty() {
        return Some(Conditions::Unlabeled(args.values.clone()));
    }

    None
}
