//! Identity keys for loadable units
//!
//! A component is named by its fully-qualified dotted name. The lookup path is
//! queried with the [`LogicalResource`] derived from that name.

use std::fmt;

/// Suffix appended to a component's slash-separated name to form its resource key
pub const RESOURCE_SUFFIX: &str = ".class";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Component identity must not be empty")]
    Empty,

    #[error("Resource key must not be empty")]
    EmptyResource,
}

/// Fully-qualified component name (e.g., "com.example.core.Service")
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentId(String);

impl ComponentId {
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(IdentityError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ComponentId {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Normalized slash-separated key identifying a resource on the lookup path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalResource(String);

impl LogicalResource {
    /// Wrap a raw resource path such as `com/example/registry/Remote.class`.
    ///
    /// A single leading `/` is dropped so absolute-style keys match the
    /// entries stored inside archives.
    pub fn new(path: impl Into<String>) -> Result<Self, IdentityError> {
        let path = path.into();
        let key = path.strip_prefix('/').unwrap_or(&path);
        if key.is_empty() {
            return Err(IdentityError::EmptyResource);
        }
        Ok(Self(key.to_string()))
    }

    /// Map a component identity to its resource key.
    ///
    /// `com.example.Service` -> `com/example/Service.class`
    pub fn for_component(id: &ComponentId) -> Self {
        Self(format!("{}{}", id.as_str().replace('.', "/"), RESOURCE_SUFFIX))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&ComponentId> for LogicalResource {
    fn from(id: &ComponentId) -> Self {
        Self::for_component(id)
    }
}

impl fmt::Display for LogicalResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a lookup-path entry physically provides a resource.
///
/// Opaque to the checker: two locations are the same only when their strings match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceLocation(String);

impl ResourceLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ResourceLocation {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceLocation {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
