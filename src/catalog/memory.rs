//! In-memory resource catalog

use std::collections::HashMap;

use crate::catalog::{ArtifactMetadata, LookupContext, ResourceCatalog};
use crate::error::CatalogError;
use crate::identity::{ComponentId, LogicalResource, ResourceLocation};

/// Catalog backed by plain maps.
///
/// Useful when the host already keeps a module index, and as a deterministic
/// stand-in for a real lookup path in tests.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    locations: HashMap<(LookupContext, LogicalResource), Vec<ResourceLocation>>,
    metadata: HashMap<ComponentId, ArtifactMetadata>,
    failing_contexts: HashMap<LookupContext, String>,
    failing_metadata: HashMap<ComponentId, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location providing `resource` in `context`
    pub fn with_location(
        mut self,
        context: LookupContext,
        resource: LogicalResource,
        location: impl Into<ResourceLocation>,
    ) -> Self {
        self.locations
            .entry((context, resource))
            .or_default()
            .push(location.into());
        self
    }

    pub fn with_metadata(mut self, identity: ComponentId, metadata: ArtifactMetadata) -> Self {
        self.metadata.insert(identity, metadata);
        self
    }

    /// Make every enumeration in `context` fail with `message`
    pub fn with_failing_context(mut self, context: LookupContext, message: &str) -> Self {
        self.failing_contexts.insert(context, message.to_string());
        self
    }

    /// Make metadata access for `identity` fail with `message`
    pub fn with_failing_metadata(mut self, identity: ComponentId, message: &str) -> Self {
        self.failing_metadata.insert(identity, message.to_string());
        self
    }

    fn effective_context(&self, context: &LookupContext) -> LookupContext {
        if *context == LookupContext::Caller && !self.knows_context(context) {
            LookupContext::Own
        } else {
            context.clone()
        }
    }

    fn knows_context(&self, context: &LookupContext) -> bool {
        self.failing_contexts.contains_key(context)
            || self.locations.keys().any(|(ctx, _)| ctx == context)
    }
}

impl ResourceCatalog for InMemoryCatalog {
    fn locations_of(
        &self,
        resource: &LogicalResource,
        context: &LookupContext,
    ) -> Result<Vec<ResourceLocation>, CatalogError> {
        let context = self.effective_context(context);
        if let Some(message) = self.failing_contexts.get(&context) {
            return Err(CatalogError::Unavailable(message.clone()));
        }

        Ok(self
            .locations
            .get(&(context, resource.clone()))
            .cloned()
            .unwrap_or_default())
    }

    fn metadata_of(&self, identity: &ComponentId) -> Result<Option<ArtifactMetadata>, CatalogError> {
        if let Some(message) = self.failing_metadata.get(identity) {
            return Err(CatalogError::Unavailable(message.clone()));
        }
        Ok(self.metadata.get(identity).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource() -> LogicalResource {
        LogicalResource::new("com/example/Service.class").unwrap()
    }

    #[test]
    fn caller_falls_back_to_own_when_unregistered() {
        let catalog = InMemoryCatalog::new().with_location(LookupContext::Own, resource(), "a.jar");

        let locations = catalog
            .locations_of(&resource(), &LookupContext::Caller)
            .unwrap();

        assert_eq!(locations, vec![ResourceLocation::from("a.jar")]);
    }

    #[test]
    fn caller_context_is_isolated_once_registered() {
        let catalog = InMemoryCatalog::new()
            .with_location(LookupContext::Own, resource(), "own.jar")
            .with_location(LookupContext::Caller, resource(), "caller.jar");

        let locations = catalog
            .locations_of(&resource(), &LookupContext::Caller)
            .unwrap();

        assert_eq!(locations, vec![ResourceLocation::from("caller.jar")]);
    }

    #[test]
    fn unknown_resource_yields_no_locations() {
        let catalog = InMemoryCatalog::new();

        let locations = catalog
            .locations_of(&resource(), &LookupContext::Named("plugins".into()))
            .unwrap();

        assert!(locations.is_empty());
    }

    #[test]
    fn failing_context_returns_error() {
        let catalog =
            InMemoryCatalog::new().with_failing_context(LookupContext::Own, "index corrupted");

        let result = catalog.locations_of(&resource(), &LookupContext::Own);

        assert!(matches!(result, Err(CatalogError::Unavailable(msg)) if msg == "index corrupted"));
    }
}
