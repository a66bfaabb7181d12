use super::{Catalog, CatalogError, FileRecord};
use crate::logging::SharedLogger;
use ignore::{DirEntry, WalkBuilder};
use std::io;
use std::path::{Path, PathBuf};

/// Catalog builder - walks a directory tree into a [`Catalog`]
///
/// Responsibilities:
/// - Root validation (exists, is a directory)
/// - Recursive traversal in a stable, name-sorted order
/// - One unenriched record per regular file
/// - Skipping unreadable subdirectories without aborting
pub struct CatalogBuilder {
    root: PathBuf,
    follow_symlinks: bool,
    logger: SharedLogger,
}

impl CatalogBuilder {
    /// Validate `root` and prepare a builder for it
    pub fn new(root: impl Into<PathBuf>, logger: SharedLogger) -> Result<Self, CatalogError> {
        let root = root.into();

        let metadata = match std::fs::metadata(&root) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                logger.error(&format!("Path does not exist: {}", root.display()));
                return Err(CatalogError::DirectoryNotFound(root));
            }
            Err(e) => {
                logger.error(&format!("Cannot access path {}: {}", root.display(), e));
                return Err(CatalogError::Inaccessible { path: root, source: e });
            }
        };
        if !metadata.is_dir() {
            logger.error(&format!("Path is not a directory: {}", root.display()));
            return Err(CatalogError::NotADirectory(root));
        }

        logger.info(&format!("Initialized catalog for directory: {}", root.display()));
        Ok(Self {
            root,
            follow_symlinks: false,
            logger,
        })
    }

    /// Descend into symlinked directories
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the root and produce the populated catalog
    pub fn build(&self) -> Catalog {
        let mut catalog = Catalog::new(self.root.clone(), self.logger.clone());

        for entry in self.build_walker() {
            match entry {
                Ok(entry) => {
                    if self.is_regular_file(&entry) {
                        catalog.push(FileRecord::new(entry.into_path()));
                    }
                }
                Err(e) => {
                    // Partial visibility is expected; keep walking
                    self.logger.warn(&format!("Skipping unreadable entry: {}", e));
                }
            }
        }

        self.logger
            .info(&format!("Populated catalog with {} files.", catalog.len()));
        catalog
    }

    /// Plain recursive walk: no gitignore, no hidden-file filtering
    fn build_walker(&self) -> ignore::Walk {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .standard_filters(false)
            .follow_links(self.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b));
        builder.build()
    }

    fn is_regular_file(&self, entry: &DirEntry) -> bool {
        let Some(file_type) = entry.file_type() else {
            return false;
        };
        if file_type.is_file() {
            return true;
        }
        if !file_type.is_symlink() {
            return false;
        }

        // Unfollowed symlink: catalogue it only when it resolves to a file
        match std::fs::metadata(entry.path()) {
            Ok(target) => target.is_file(),
            Err(e) => {
                self.logger.info(&format!(
                    "Skipping dangling symlink {}: {}",
                    entry.path().display(),
                    e
                ));
                false
            }
        }
    }
}
