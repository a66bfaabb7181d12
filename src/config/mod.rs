//! Configuration management for filesift
//!
//! Settings are layered with figment: embedded defaults, then the user
//! config, then the project config (or a file given on the command line),
//! then `FILESIFT_` environment variables.

mod loader;

use crate::enrich::DEFAULT_SNIFF_BYTES;
use serde::{Deserialize, Serialize};

/// Complete filesift configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilesiftConfig {
    /// Directory traversal
    pub scan: ScanConfig,

    /// Attribute enrichment
    pub enrich: EnrichConfig,
}

/// Directory traversal settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

/// Enrichment settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Prefix length read for encoding detection
    pub sniff_bytes: usize,

    /// Sniff on a rayon pool
    pub parallel: bool,

    /// Pool size when `parallel` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_threads: Option<usize>,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            sniff_bytes: DEFAULT_SNIFF_BYTES,
            parallel: false,
            max_threads: None,
        }
    }
}
