//! Memoizing version resolver
//!
//! Resolution never fails outward: every failure is reported to the
//! [`DiagnosticSink`] and collapses to the caller's default version.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::catalog::ResourceCatalog;
use crate::diagnostics::{DiagnosticLevel, DiagnosticSink, TracingSink};
use crate::error::ResolveError;
use crate::identity::ComponentId;
use crate::version::filename::{ARCHIVE_EXTENSION, version_from_archive_name};
use crate::version::record::{VersionRecord, VersionSource};

pub struct VersionResolver {
    catalog: Arc<dyn ResourceCatalog>,
    sink: Arc<dyn DiagnosticSink>,
    cache: RwLock<HashMap<ComponentId, Arc<VersionRecord>>>,
}

impl VersionResolver {
    pub fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self::with_sink(catalog, Arc::new(TracingSink))
    }

    pub fn with_sink(catalog: Arc<dyn ResourceCatalog>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            catalog,
            sink,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the version of `identity`, falling back to `default_version`.
    ///
    /// The first completed resolution for an identity is kept for the lifetime
    /// of the resolver; later calls return the same record even if the
    /// environment or `default_version` changed in between.
    pub fn resolve(&self, identity: &ComponentId, default_version: &str) -> Arc<VersionRecord> {
        if let Some(record) = self.cached(identity) {
            return record;
        }

        let record = match self.try_resolve(identity) {
            Ok(record) => record,
            Err(e) => {
                self.report(identity, default_version, &e);
                VersionRecord::fallback(default_version)
            }
        };

        // Concurrent callers may both get here; the first insert wins
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(
            cache
                .entry(identity.clone())
                .or_insert_with(|| Arc::new(record)),
        )
    }

    /// Walk the fallback chain once, without caching or defaults
    pub fn try_resolve(&self, identity: &ComponentId) -> Result<VersionRecord, ResolveError> {
        let metadata = self
            .catalog
            .metadata_of(identity)?
            .ok_or_else(|| ResolveError::MetadataUnavailable(identity.to_string()))?;

        if let Some(version) = non_empty(metadata.implementation_version.as_deref())
            .or_else(|| non_empty(metadata.specification_version.as_deref()))
        {
            return Ok(VersionRecord::new(version, VersionSource::Explicit));
        }

        let path = metadata
            .artifact_path
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ResolveError::MetadataUnavailable(identity.to_string()))?;

        if !path.ends_with(ARCHIVE_EXTENSION) {
            return Err(ResolveError::NotAnArchive {
                identity: identity.to_string(),
                path,
            });
        }

        version_from_archive_name(&path)
            .map(|version| VersionRecord::new(version, VersionSource::Inferred))
            .ok_or(ResolveError::EmptyToken(path))
    }

    fn cached(&self, identity: &ComponentId) -> Option<Arc<VersionRecord>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identity)
            .cloned()
    }

    fn report(&self, identity: &ComponentId, default_version: &str, error: &ResolveError) {
        match error {
            ResolveError::Catalog(cause) => self.sink.emit(
                DiagnosticLevel::Error,
                &format!(
                    "Failed to resolve version of {}, use default version {}",
                    identity, default_version
                ),
                Some(cause as &dyn std::error::Error),
            ),
            other => self.sink.emit(
                DiagnosticLevel::Info,
                &format!("{}, use default version {}", other, default_version),
                None,
            ),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
