use std::fmt;

use indexmap::IndexSet;

use crate::identity::{LogicalResource, ResourceLocation};

/// How a conflict is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged, startup continues
    Advisory,
    /// Propagated to the caller as an error
    Fatal,
}

/// Outcome of a duplicate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictReport {
    pub resource: LogicalResource,
    /// Distinct locations in discovery order
    pub locations: IndexSet<ResourceLocation>,
    pub severity: Severity,
}

impl ConflictReport {
    pub fn new(
        resource: LogicalResource,
        locations: impl IntoIterator<Item = ResourceLocation>,
        severity: Severity,
    ) -> Self {
        Self {
            resource,
            locations: locations.into_iter().collect(),
            severity,
        }
    }

    /// Report for a check that found nothing (or could not enumerate)
    pub fn empty(resource: LogicalResource, severity: Severity) -> Self {
        Self {
            resource,
            locations: IndexSet::new(),
            severity,
        }
    }

    pub fn count(&self) -> usize {
        self.locations.len()
    }

    pub fn is_conflict(&self) -> bool {
        self.locations.len() > 1
    }
}

impl fmt::Display for ConflictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Duplicate resource {} in {} locations [",
            self.resource,
            self.count()
        )?;
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", location)?;
        }
        f.write_str("]")
    }
}
