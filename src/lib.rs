//! Component version resolution and duplicate artifact detection
//!
//! # Modules
//!
//! - [`catalog`]: [`catalog::ResourceCatalog`] seam over the module-loading environment
//! - [`version`]: version resolution through manifest metadata and archive names
//! - [`duplicate`]: detection of resources provided by more than one location
//! - [`process`]: process-scoped registry performing the one-time startup checks
//! - [`diagnostics`]: leveled diagnostic sink (backed by `tracing`)
//! - [`identity`]: component identities and resource keys
//! - [`config`]: JSON configuration and data paths
//! - [`logging`]: tracing subscriber setup for the CLI

pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod duplicate;
pub mod error;
pub mod identity;
pub mod logging;
pub mod process;
pub mod version;

pub use catalog::{ArtifactMetadata, LookupContext, ResourceCatalog};
pub use duplicate::{ConflictReport, DuplicateChecker, Severity};
pub use identity::{ComponentId, LogicalResource, ResourceLocation};
pub use process::{BootstrapOptions, ProcessRegistry};
pub use version::{VersionRecord, VersionResolver, VersionSource};
