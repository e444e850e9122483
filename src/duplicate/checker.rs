//! Lookup-path duplicate checker

use std::sync::Arc;

use crate::catalog::{LookupContext, ResourceCatalog};
use crate::diagnostics::{DiagnosticLevel, DiagnosticSink, TracingSink};
use crate::duplicate::report::{ConflictReport, Severity};
use crate::error::DuplicateError;
use crate::identity::{ComponentId, LogicalResource};

pub struct DuplicateChecker {
    catalog: Arc<dyn ResourceCatalog>,
    sink: Arc<dyn DiagnosticSink>,
}

impl DuplicateChecker {
    pub fn new(catalog: Arc<dyn ResourceCatalog>) -> Self {
        Self::with_sink(catalog, Arc::new(TracingSink))
    }

    pub fn with_sink(catalog: Arc<dyn ResourceCatalog>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { catalog, sink }
    }

    /// Check `resource` as seen from the caller's loading context.
    ///
    /// # Returns
    /// * `Ok(report)` - No conflict, or an advisory conflict that has been logged
    /// * `Err(DuplicateError::Conflict)` - A conflict while `fail_on_error` is set
    pub fn check_duplicate(
        &self,
        resource: &LogicalResource,
        fail_on_error: bool,
    ) -> Result<ConflictReport, DuplicateError> {
        self.check_duplicate_in(resource, &LookupContext::Caller, fail_on_error)
    }

    /// Check `resource` within an explicit loading context
    pub fn check_duplicate_in(
        &self,
        resource: &LogicalResource,
        context: &LookupContext,
        fail_on_error: bool,
    ) -> Result<ConflictReport, DuplicateError> {
        let severity = if fail_on_error {
            Severity::Fatal
        } else {
            Severity::Advisory
        };

        let locations = match self.catalog.locations_of(resource, context) {
            Ok(locations) => locations,
            Err(e) => {
                // A failing diagnostic must not abort the caller's startup
                self.sink.emit(
                    DiagnosticLevel::Error,
                    &format!("Failed to enumerate locations of {}", resource),
                    Some(&e as &dyn std::error::Error),
                );
                return Ok(ConflictReport::empty(resource.clone(), severity));
            }
        };

        let report = ConflictReport::new(
            resource.clone(),
            locations
                .into_iter()
                .filter(|location| !location.as_str().is_empty()),
            severity,
        );

        if !report.is_conflict() {
            return Ok(report);
        }

        match severity {
            Severity::Fatal => Err(DuplicateError::Conflict(Box::new(report))),
            Severity::Advisory => {
                self.sink
                    .emit(DiagnosticLevel::Error, &report.to_string(), None);
                Ok(report)
            }
        }
    }

    /// Advisory check of the resource backing `identity`
    pub fn check_component(&self, identity: &ComponentId) -> ConflictReport {
        match self.check_duplicate(&LogicalResource::for_component(identity), false) {
            Ok(report) => report,
            Err(DuplicateError::Conflict(report)) => *report,
        }
    }

    /// Whether `resource` is present on the catalog's own lookup path.
    ///
    /// Any enumeration failure counts as absent.
    pub fn has_resource(&self, resource: &LogicalResource) -> bool {
        self.catalog
            .locations_of(resource, &LookupContext::Own)
            .map(|locations| locations.iter().any(|l| !l.as_str().is_empty()))
            .unwrap_or(false)
    }
}
