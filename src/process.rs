//! Process-scoped registry
//!
//! Constructed explicitly by the host during startup. It runs the duplicate
//! check for the module's own identity and evaluates feature markers once, and
//! resolves the module's own version on first use.

use std::sync::{Arc, OnceLock};

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::catalog::ResourceCatalog;
use crate::config::{AppConfig, DEFAULT_VERSION};
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::duplicate::{ConflictReport, DuplicateChecker};
use crate::error::DuplicateError;
use crate::identity::{ComponentId, IdentityError, LogicalResource};
use crate::version::{VersionRecord, VersionResolver};

/// What the registry checks and resolves at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapOptions {
    pub identity: ComponentId,
    pub default_version: String,
    pub fail_on_duplicate: bool,
    /// Feature name -> marker resource whose presence enables it
    pub features: IndexMap<String, LogicalResource>,
}

impl BootstrapOptions {
    pub fn new(identity: ComponentId) -> Self {
        Self {
            identity,
            default_version: DEFAULT_VERSION.to_string(),
            fail_on_duplicate: false,
            features: IndexMap::new(),
        }
    }

    pub fn with_default_version(mut self, version: &str) -> Self {
        self.default_version = version.to_string();
        self
    }

    pub fn fail_on_duplicate(mut self, fail: bool) -> Self {
        self.fail_on_duplicate = fail;
        self
    }

    pub fn with_feature(mut self, name: &str, marker: LogicalResource) -> Self {
        self.features.insert(name.to_string(), marker);
        self
    }

    /// Build options from a loaded config; the config must name an identity
    pub fn from_config(config: &AppConfig) -> Result<Self, IdentityError> {
        let identity = ComponentId::new(config.identity.clone().unwrap_or_default())?;
        let mut options = Self::new(identity)
            .with_default_version(&config.default_version)
            .fail_on_duplicate(config.fail_on_duplicate);
        for (name, marker) in &config.features {
            options = options.with_feature(name, LogicalResource::new(marker.as_str())?);
        }
        Ok(options)
    }
}

pub struct ProcessRegistry {
    identity: ComponentId,
    default_version: String,
    resolver: VersionResolver,
    checker: DuplicateChecker,
    version: OnceLock<Arc<VersionRecord>>,
    duplicate_report: ConflictReport,
    features: IndexMap<String, bool>,
}

impl ProcessRegistry {
    /// Bring up the registry, logging through `tracing`.
    ///
    /// Fails only when `fail_on_duplicate` is set and the module's own
    /// identity is provided by more than one location.
    pub fn bootstrap(
        catalog: Arc<dyn ResourceCatalog>,
        options: BootstrapOptions,
    ) -> Result<Self, DuplicateError> {
        Self::bootstrap_with_sink(catalog, Arc::new(TracingSink), options)
    }

    pub fn bootstrap_with_sink(
        catalog: Arc<dyn ResourceCatalog>,
        sink: Arc<dyn DiagnosticSink>,
        options: BootstrapOptions,
    ) -> Result<Self, DuplicateError> {
        let resolver = VersionResolver::with_sink(Arc::clone(&catalog), Arc::clone(&sink));
        let checker = DuplicateChecker::with_sink(catalog, sink);

        let features: IndexMap<String, bool> = options
            .features
            .iter()
            .map(|(name, marker)| (name.clone(), checker.has_resource(marker)))
            .collect();
        debug!("Feature markers for {}: {:?}", options.identity, features);

        let duplicate_report = checker.check_duplicate(
            &LogicalResource::for_component(&options.identity),
            options.fail_on_duplicate,
        )?;

        info!("Process registry initialized for {}", options.identity);

        Ok(Self {
            identity: options.identity,
            default_version: options.default_version,
            resolver,
            checker,
            version: OnceLock::new(),
            duplicate_report,
            features,
        })
    }

    pub fn identity(&self) -> &ComponentId {
        &self.identity
    }

    /// Version of the bootstrapping module, resolved once
    pub fn version(&self) -> &VersionRecord {
        self.version
            .get_or_init(|| self.resolver.resolve(&self.identity, &self.default_version))
    }

    /// Whether the marker resource of feature `name` was present at startup
    pub fn is_enabled(&self, name: &str) -> bool {
        self.features.get(name).copied().unwrap_or(false)
    }

    pub fn features(&self) -> &IndexMap<String, bool> {
        &self.features
    }

    /// Result of the startup duplicate check of the module's own identity
    pub fn duplicate_report(&self) -> &ConflictReport {
        &self.duplicate_report
    }

    pub fn resolver(&self) -> &VersionResolver {
        &self.resolver
    }

    pub fn checker(&self) -> &DuplicateChecker {
        &self.checker
    }
}
