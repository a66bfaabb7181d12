//! Content-type sniffing by file signature

use super::read_prefix;
use anyhow::{Context, Result};
use std::path::Path;

/// Bytes read for signature matching
pub const SIGNATURE_BYTES: usize = 8192;

/// Determines a MIME-style content type from what a file contains, never
/// from its name
pub trait ContentTypeSniffer: Send + Sync {
    fn detect_content_type(&self, path: &Path) -> Result<Option<String>>;

    /// Name of this sniffer for logging
    fn name(&self) -> &'static str;
}

/// Default content-type sniffer
///
/// Magic numbers are matched with `infer`. Anything it does not recognise
/// falls back to `inode/x-empty`, `text/plain` or `application/octet-stream`.
#[derive(Debug, Clone, Copy)]
pub struct SignatureSniffer {
    limit: usize,
}

impl Default for SignatureSniffer {
    fn default() -> Self {
        Self {
            limit: SIGNATURE_BYTES,
        }
    }
}

impl ContentTypeSniffer for SignatureSniffer {
    fn detect_content_type(&self, path: &Path) -> Result<Option<String>> {
        let prefix = read_prefix(path, self.limit)
            .context("Failed to read file")?;

        if let Some(kind) = infer::get(&prefix) {
            return Ok(Some(kind.mime_type().to_string()));
        }

        let fallback = if prefix.is_empty() {
            "inode/x-empty"
        } else if content_inspector::inspect(&prefix).is_text() {
            "text/plain"
        } else {
            "application/octet-stream"
        };

        Ok(Some(fallback.to_string()))
    }

    fn name(&self) -> &'static str {
        "SignatureSniffer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sniff(bytes: &[u8]) -> Option<String> {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("sample");
        fs::write(&path, bytes).unwrap();
        SignatureSniffer::default().detect_content_type(&path).unwrap()
    }

    #[test]
    fn png_signature() {
        let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
        assert_eq!(sniff(&png).as_deref(), Some("image/png"));
    }

    #[test]
    fn gzip_signature() {
        assert_eq!(sniff(&[0x1f, 0x8b, 0x08, 0x00]).as_deref(), Some("application/gzip"));
    }

    #[test]
    fn text_falls_back_to_plain() {
        assert_eq!(sniff(b"int main() { return 0; }\n").as_deref(), Some("text/plain"));
    }

    #[test]
    fn empty_file() {
        assert_eq!(sniff(b"").as_deref(), Some("inode/x-empty"));
    }

    #[test]
    fn unknown_binary() {
        assert_eq!(
            sniff(&[0x00, 0x13, 0x37, 0x00, 0x42]).as_deref(),
            Some("application/octet-stream")
        );
    }

    #[test]
    fn signature_wins_over_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("looks_like.txt");
        fs::write(&path, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
        let detected = SignatureSniffer::default().detect_content_type(&path).unwrap();
        assert_eq!(detected.as_deref(), Some("image/png"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let result = SignatureSniffer::default().detect_content_type(&temp_dir.path().join("gone"));
        assert!(result.is_err());
    }
}
