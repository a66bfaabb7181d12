//! Styled terminal output for filesift
//!
//! Status lines (success, info) respect `--quiet`; errors are always
//! shown. Data lines such as file paths go through plain `println!` so they
//! stay pipe-friendly.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        // Errors are always shown, even in quiet mode
        eprintln!("{} {}", style("✖").red(), message);
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a message only in verbose mode
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print one catalogued file with its attributes
    pub fn record_row(&self, path: &str, extension: &str, encoding: &str, content_type: &str) {
        println!(
            "{}  {}  {}  {}",
            path,
            style(format!("[{}]", extension)).cyan(),
            style(encoding).yellow(),
            style(content_type).dim()
        );
    }

    /// Print a `label: value` statistic line
    pub fn summary_stats(&self, label: &str, value: usize) {
        if !self.quiet {
            println!("  {} {}", style(label).dim(), style(value.to_string()).bold());
        }
    }

    /// Print a key-value pair
    pub fn table_row(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("    {:<28} {}", style(key).dim(), value);
        }
    }
}
