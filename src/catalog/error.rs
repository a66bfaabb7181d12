use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a catalog from being built at all
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Path does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Cannot access path {}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
