//! Lookup-path introspection seam
//!
//! The resolver and the duplicate checker never touch the environment
//! directly. Everything they know about loadable units comes from a
//! [`ResourceCatalog`].
//!
//! # Modules
//!
//! - [`filesystem`]: catalog over directories and `.jar`/`.zip` archives on disk
//! - [`memory`]: in-memory catalog for hosts that already hold an index, and for tests
//! - [`manifest`]: `META-INF/MANIFEST.MF` main-section parser

pub mod filesystem;
pub mod manifest;
pub mod memory;

pub use filesystem::FsCatalog;
pub use memory::InMemoryCatalog;

#[cfg(test)]
use mockall::automock;

use crate::error::CatalogError;
use crate::identity::{ComponentId, LogicalResource, ResourceLocation};

/// Loading context a lookup is scoped to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LookupContext {
    /// The lookup path the catalog itself was built from
    Own,
    /// The loading context of the component invoking the check.
    /// Catalogs without a registered caller context treat this as [`LookupContext::Own`].
    Caller,
    /// A context registered under an explicit name
    Named(String),
}

/// Version metadata attached to the artifact providing a component
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactMetadata {
    /// `Implementation-Version` attribute
    pub implementation_version: Option<String>,
    /// `Specification-Version` attribute
    pub specification_version: Option<String>,
    /// Physical path of the archive or directory backing the component
    pub artifact_path: Option<String>,
}

/// Trait for querying the ambient module-loading environment
#[cfg_attr(test, automock)]
pub trait ResourceCatalog: Send + Sync {
    /// Every location providing `resource` in the given context.
    ///
    /// Order is not meaningful; duplicates are allowed and collapsed by callers.
    fn locations_of(
        &self,
        resource: &LogicalResource,
        context: &LookupContext,
    ) -> Result<Vec<ResourceLocation>, CatalogError>;

    /// Metadata of the artifact that provides `identity`
    ///
    /// # Returns
    /// * `Ok(None)` - The identity is not provided by any artifact
    /// * `Ok(Some(metadata))` - Attributes found on the providing artifact (possibly all empty)
    fn metadata_of(&self, identity: &ComponentId) -> Result<Option<ArtifactMetadata>, CatalogError>;
}
