//! Per-file attribute record

use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the three filterable attributes of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Extension,
    Encoding,
    ContentType,
}

impl Attribute {
    /// Fixed inference precedence: extension, then encoding, then content type
    pub const PRECEDENCE: [Attribute; 3] =
        [Attribute::Extension, Attribute::Encoding, Attribute::ContentType];
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Attribute::Extension => "extension",
            Attribute::Encoding => "encoding",
            Attribute::ContentType => "content type",
        };
        f.write_str(name)
    }
}

/// Identity, enrichment and filter state of a single catalogued file
///
/// Identity fields are fixed at construction. The enrichment fields are
/// written once by the enricher, and the pass flag is only ever narrowed
/// inside a filtering session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    filename: String,
    #[serde(serialize_with = "serialize_path_lossy")]
    path: PathBuf,
    extension: String,
    encoding: Option<String>,
    content_type: Option<String>,
    #[serde(rename = "passes")]
    pass_flag: bool,
    #[serde(skip)]
    enriched: bool,
}

impl FileRecord {
    /// Create an unenriched record for a file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = split_extension(&filename).to_string();

        Self {
            filename,
            path,
            extension,
            encoding: None,
            content_type: None,
            pass_flag: true,
            enriched: false,
        }
    }

    /// Create a record whose enrichment is already known
    pub fn with_attributes(
        path: impl Into<PathBuf>,
        encoding: Option<&str>,
        content_type: Option<&str>,
    ) -> Self {
        let mut record = Self::new(path);
        record.set_enrichment(encoding.map(str::to_string), content_type.map(str::to_string));
        record
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn passes(&self) -> bool {
        self.pass_flag
    }

    pub fn is_enriched(&self) -> bool {
        self.enriched
    }

    /// Value of the given attribute; the extension is always present
    pub fn attribute(&self, attribute: Attribute) -> Option<&str> {
        match attribute {
            Attribute::Extension => Some(self.extension()),
            Attribute::Encoding => self.encoding(),
            Attribute::ContentType => self.content_type(),
        }
    }

    /// Write the enrichment fields. Returns false, leaving the record
    /// untouched, when it was already enriched.
    pub(crate) fn set_enrichment(
        &mut self,
        encoding: Option<String>,
        content_type: Option<String>,
    ) -> bool {
        if self.enriched {
            return false;
        }
        self.encoding = encoding;
        self.content_type = content_type;
        self.enriched = true;
        true
    }

    pub(crate) fn reset_pass(&mut self) {
        self.pass_flag = true;
    }

    pub(crate) fn narrow_pass(&mut self, matched: bool) {
        self.pass_flag &= matched;
    }
}

/// Paths that are not valid UTF-8 are written with replacement characters
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

/// Suffix of `filename` starting at its last dot
///
/// Leading dots belong to the stem, so `.bashrc` has no extension while
/// `archive.tar.gz` has `.gz`. A trailing dot yields `"."`.
pub fn split_extension(filename: &str) -> &str {
    let stem_start = filename.len() - filename.trim_start_matches('.').len();
    match filename[stem_start..].rfind('.') {
        Some(idx) => &filename[stem_start + idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_last_dot_suffix() {
        assert_eq!(split_extension("archive.tar.gz"), ".gz");
        assert_eq!(split_extension("main.cpp"), ".cpp");
        assert_eq!(split_extension("Header.H"), ".H");
    }

    #[test]
    fn extension_empty_without_dot() {
        assert_eq!(split_extension("README"), "");
        assert_eq!(split_extension(""), "");
    }

    #[test]
    fn leading_dots_belong_to_stem() {
        assert_eq!(split_extension(".bashrc"), "");
        assert_eq!(split_extension("..hidden"), "");
        assert_eq!(split_extension("..."), "");
        assert_eq!(split_extension(".config.toml"), ".toml");
    }

    #[test]
    fn trailing_dot_is_its_own_extension() {
        assert_eq!(split_extension("notes."), ".");
    }

    #[test]
    fn new_record_derives_identity() {
        let record = FileRecord::new("/tmp/project/src/lib.rs");
        assert_eq!(record.filename(), "lib.rs");
        assert_eq!(record.extension(), ".rs");
        assert_eq!(record.path(), Path::new("/tmp/project/src/lib.rs"));
        assert_eq!(record.encoding(), None);
        assert_eq!(record.content_type(), None);
        assert!(record.passes());
        assert!(!record.is_enriched());
    }

    #[test]
    fn enrichment_is_written_once() {
        let mut record = FileRecord::new("a.txt");
        assert!(record.set_enrichment(Some("utf-8".into()), Some("text/plain".into())));
        assert!(!record.set_enrichment(Some("ascii".into()), None));
        assert_eq!(record.encoding(), Some("utf-8"));
        assert_eq!(record.content_type(), Some("text/plain"));
    }

    #[test]
    fn pass_flag_only_narrows_until_reset() {
        let mut record = FileRecord::new("a.txt");
        record.narrow_pass(false);
        record.narrow_pass(true);
        assert!(!record.passes());
        record.reset_pass();
        assert!(record.passes());
    }

    #[test]
    fn attribute_lookup() {
        let record = FileRecord::with_attributes("x.h", Some("ascii"), None);
        assert_eq!(record.attribute(Attribute::Extension), Some(".h"));
        assert_eq!(record.attribute(Attribute::Encoding), Some("ascii"));
        assert_eq!(record.attribute(Attribute::ContentType), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_path_serializes_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new("/r").join(OsStr::from_bytes(b"bad\xff.txt"));
        let value = serde_json::to_value(FileRecord::new(path)).unwrap();

        assert_eq!(value["path"], "/r/bad\u{FFFD}.txt");
        assert_eq!(value["filename"], "bad\u{FFFD}.txt");
        assert_eq!(value["extension"], ".txt");
    }
}
