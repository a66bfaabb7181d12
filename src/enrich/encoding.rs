//! Character-set sniffing over a bounded byte prefix

use anyhow::Result;
use chardetng::EncodingDetector;

/// Guesses the character set of a file from its leading bytes
pub trait EncodingSniffer: Send + Sync {
    /// Best-guess charset label, or `None` when the bytes carry no text
    fn detect_encoding(&self, prefix: &[u8]) -> Result<Option<String>>;

    /// Name of this sniffer for logging
    fn name(&self) -> &'static str;
}

/// Default encoding sniffer
///
/// BOMs and binary content are classified by `content_inspector`. Text
/// without a BOM is reported as `ascii` or `utf-8` when it decodes as such,
/// and handed to `chardetng` otherwise. Labels are lower-case.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharsetSniffer;

impl EncodingSniffer for CharsetSniffer {
    fn detect_encoding(&self, prefix: &[u8]) -> Result<Option<String>> {
        if prefix.is_empty() {
            return Ok(None);
        }

        let kind = content_inspector::inspect(prefix);
        if kind.is_binary() {
            return Ok(None);
        }

        let label = match kind {
            content_inspector::ContentType::UTF_8_BOM => "utf-8-sig".to_string(),
            content_inspector::ContentType::UTF_16LE | content_inspector::ContentType::UTF_16BE => {
                "utf-16".to_string()
            }
            content_inspector::ContentType::UTF_32LE | content_inspector::ContentType::UTF_32BE => {
                "utf-32".to_string()
            }
            _ => classify_text(prefix),
        };

        Ok(Some(label))
    }

    fn name(&self) -> &'static str {
        "CharsetSniffer"
    }
}

fn classify_text(prefix: &[u8]) -> String {
    if prefix.is_ascii() {
        return "ascii".to_string();
    }

    match std::str::from_utf8(prefix) {
        Ok(_) => "utf-8".to_string(),
        // A multibyte sequence cut off by the prefix bound
        Err(e) if e.error_len().is_none() => "utf-8".to_string(),
        Err(_) => {
            let mut detector = EncodingDetector::new();
            detector.feed(prefix, true);
            detector.guess(None, true).name().to_ascii_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff(bytes: &[u8]) -> Option<String> {
        CharsetSniffer.detect_encoding(bytes).unwrap()
    }

    #[test]
    fn empty_prefix_is_undecidable() {
        assert_eq!(sniff(b""), None);
    }

    #[test]
    fn plain_ascii() {
        assert_eq!(sniff(b"int main() { return 0; }\n").as_deref(), Some("ascii"));
    }

    #[test]
    fn utf8_text() {
        assert_eq!(sniff("héllo wörld\n".as_bytes()).as_deref(), Some("utf-8"));
    }

    #[test]
    fn utf8_truncated_at_prefix_bound() {
        let text = "naïve café".as_bytes();
        // Cut inside the two-byte 'é'
        let cut = &text[..text.len() - 1];
        assert_eq!(sniff(cut).as_deref(), Some("utf-8"));
    }

    #[test]
    fn byte_order_marks() {
        assert_eq!(sniff(b"\xEF\xBB\xBFhello").as_deref(), Some("utf-8-sig"));
        assert_eq!(sniff(b"\xFF\xFEh\x00i\x00").as_deref(), Some("utf-16"));
    }

    #[test]
    fn binary_has_no_encoding() {
        assert_eq!(sniff(&[0x00, 0x01, 0x02, 0x00, 0xFF]), None);
    }

    #[test]
    fn legacy_single_byte_text_gets_a_guess() {
        // Latin-1 'é' (0xE9) is not valid UTF-8
        let guess = sniff(b"caf\xE9 cr\xE8me br\xFBl\xE9e").unwrap();
        assert_ne!(guess, "utf-8");
        assert_ne!(guess, "ascii");
        assert_eq!(guess, guess.to_ascii_lowercase());
    }
}
