//! Version resolution for components
//!
//! A component's version is looked up through an ordered fallback chain:
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐   ┌──────────────────────┐   ┌─────────┐
//! │ Implementation-      │──▶│ Specification-       │──▶│ archive file name    │──▶│ default │
//! │ Version (manifest)   │   │ Version (manifest)   │   │ (core-1.2.3.jar)     │   │         │
//! └──────────────────────┘   └──────────────────────┘   └──────────────────────┘   └─────────┘
//! ```
//!
//! # Modules
//!
//! - [`filename`]: version token extraction from archive file names
//! - [`record`]: resolved version plus the tier that produced it
//! - [`resolver`]: memoizing resolver over a [`crate::catalog::ResourceCatalog`]
//! - [`semver`]: lenient semver parsing of resolved versions

pub mod filename;
pub mod record;
pub mod resolver;
pub mod semver;

pub use filename::version_from_archive_name;
pub use record::{VersionRecord, VersionSource};
pub use resolver::VersionResolver;
