use std::path::PathBuf;

use thiserror::Error;

use crate::duplicate::ConflictReport;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Archive error in {path:?}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Unknown lookup context: {0}")]
    UnknownContext(String),

    #[error("Lookup path unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("No version metadata and no artifact path for {0}")]
    MetadataUnavailable(String),

    #[error("Artifact for {identity} is not an archive: {path}")]
    NotAnArchive { identity: String, path: String },

    #[error("No version token in artifact name {0}")]
    EmptyToken(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Error)]
pub enum DuplicateError {
    #[error("{0}")]
    Conflict(Box<ConflictReport>),
}
