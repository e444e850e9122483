//! Resolved version records

use std::fmt;

use crate::version::semver::parse_version;

/// Which tier of the fallback chain produced a version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionSource {
    /// `Implementation-Version` or `Specification-Version` metadata
    Explicit,
    /// Token taken from the archive file name
    Inferred,
    /// Caller-supplied default
    Default,
}

impl VersionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionSource::Explicit => "explicit",
            VersionSource::Inferred => "inferred",
            VersionSource::Default => "default",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved version and the tier it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub version: String,
    pub source: VersionSource,
}

impl VersionRecord {
    pub fn new(version: impl Into<String>, source: VersionSource) -> Self {
        Self {
            version: version.into(),
            source,
        }
    }

    pub fn fallback(default_version: &str) -> Self {
        Self::new(default_version, VersionSource::Default)
    }

    /// The version as semver, when it parses after padding partial versions
    pub fn semver(&self) -> Option<semver::Version> {
        parse_version(&self.version)
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.version, self.source)
    }
}
