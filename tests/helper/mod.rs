//! Shared helpers for integration tests

mod archive;

pub use archive::{ArchiveBuilder, write_class_dir};
