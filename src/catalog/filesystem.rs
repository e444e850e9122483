//! Resource catalog over lookup-path entries on disk
//!
//! Each entry is either a directory, where a resource is a plain file below
//! it, or an archive (`.jar` / `.zip`), where a resource is an archive entry.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::catalog::manifest::{MANIFEST_PATH, Manifest};
use crate::catalog::{ArtifactMetadata, LookupContext, ResourceCatalog};
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::identity::{ComponentId, LogicalResource, ResourceLocation};

/// Separator between an archive path and the entry inside it
const ARCHIVE_ENTRY_SEPARATOR: &str = "!/";

const ARCHIVE_EXTENSIONS: &[&str] = &["jar", "zip"];

pub struct FsCatalog {
    lookup_path: Vec<PathBuf>,
    contexts: HashMap<String, Vec<PathBuf>>,
    caller_context: Option<String>,
}

impl FsCatalog {
    pub fn new(lookup_path: Vec<PathBuf>) -> Self {
        Self {
            lookup_path,
            contexts: HashMap::new(),
            caller_context: None,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        let catalog = Self {
            lookup_path: config.lookup_path.clone(),
            contexts: config.contexts.clone().into_iter().collect(),
            caller_context: None,
        };
        match &config.caller_context {
            Some(name) => catalog.with_caller_context(name),
            None => catalog,
        }
    }

    /// Register an additional lookup path under `name`
    pub fn with_context(mut self, name: &str, lookup_path: Vec<PathBuf>) -> Self {
        self.contexts.insert(name.to_string(), lookup_path);
        self
    }

    /// Use the named context whenever [`LookupContext::Caller`] is requested
    pub fn with_caller_context(mut self, name: &str) -> Self {
        self.caller_context = Some(name.to_string());
        self
    }

    fn entries(&self, context: &LookupContext) -> Result<&[PathBuf], CatalogError> {
        let name = match context {
            LookupContext::Own => return Ok(self.lookup_path.as_slice()),
            LookupContext::Caller => match &self.caller_context {
                Some(name) => name,
                None => return Ok(self.lookup_path.as_slice()),
            },
            LookupContext::Named(name) => name,
        };

        self.contexts
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CatalogError::UnknownContext(name.clone()))
    }

    /// Location of `resource` inside a single lookup-path entry, if present
    fn probe(entry: &Path, resource: &LogicalResource) -> Result<Option<ResourceLocation>, CatalogError> {
        if entry.is_dir() {
            let candidate = entry.join(resource.as_str());
            return Ok(candidate
                .is_file()
                .then(|| ResourceLocation::new(candidate.display().to_string())));
        }

        if !is_archive(entry) {
            return Ok(None);
        }

        let Some(archive) = open_archive(entry)? else {
            return Ok(None);
        };
        let found = archive.file_names().any(|name| name == resource.as_str());

        Ok(found.then(|| {
            ResourceLocation::new(format!(
                "{}{}{}",
                entry.display(),
                ARCHIVE_ENTRY_SEPARATOR,
                resource
            ))
        }))
    }

    /// Versions for `resource` from the archive manifest, preferring the
    /// section named after the resource's package
    fn archive_metadata(entry: &Path, resource: &LogicalResource) -> Result<ArtifactMetadata, CatalogError> {
        let mut metadata = ArtifactMetadata {
            artifact_path: Some(entry.display().to_string()),
            ..ArtifactMetadata::default()
        };

        let Some(mut archive) = open_archive(entry)? else {
            return Ok(metadata);
        };

        let mut bytes = Vec::new();
        match archive.by_name(MANIFEST_PATH) {
            Ok(mut file) => {
                file.read_to_end(&mut bytes)
                    .map_err(|source| CatalogError::Io {
                        path: entry.to_path_buf(),
                        source,
                    })?;
            }
            Err(ZipError::FileNotFound) => {
                debug!("No manifest in {:?}", entry);
                return Ok(metadata);
            }
            Err(source) => {
                return Err(CatalogError::Archive {
                    path: entry.to_path_buf(),
                    source,
                });
            }
        }

        // Manifests written by older tools are not always UTF-8
        let manifest = Manifest::parse(&String::from_utf8_lossy(&bytes));
        let (implementation, specification) = manifest.package_versions(package_path(resource));
        metadata.implementation_version = implementation.map(str::to_string);
        metadata.specification_version = specification.map(str::to_string);
        Ok(metadata)
    }
}

impl ResourceCatalog for FsCatalog {
    fn locations_of(
        &self,
        resource: &LogicalResource,
        context: &LookupContext,
    ) -> Result<Vec<ResourceLocation>, CatalogError> {
        let mut locations = Vec::new();

        for entry in self.entries(context)? {
            match Self::probe(entry, resource) {
                Ok(Some(location)) => locations.push(location),
                Ok(None) => {}
                Err(e) => warn!("Skipping unreadable lookup path entry {:?}: {}", entry, e),
            }
        }

        debug!(
            "Found {} location(s) for {} in {:?}",
            locations.len(),
            resource,
            context
        );
        Ok(locations)
    }

    fn metadata_of(&self, identity: &ComponentId) -> Result<Option<ArtifactMetadata>, CatalogError> {
        let resource = LogicalResource::for_component(identity);

        for entry in &self.lookup_path {
            match Self::probe(entry, &resource) {
                Ok(Some(_)) => {}
                Ok(None) => continue,
                Err(e) => {
                    warn!("Skipping unreadable lookup path entry {:?}: {}", entry, e);
                    continue;
                }
            }

            if entry.is_dir() {
                return Ok(Some(ArtifactMetadata {
                    artifact_path: Some(entry.display().to_string()),
                    ..ArtifactMetadata::default()
                }));
            }
            return Self::archive_metadata(entry, &resource).map(Some);
        }

        Ok(None)
    }
}

/// Directory part of a resource key including the trailing slash, e.g.
/// `com/example/core/` for `com/example/core/Service.class`
fn package_path(resource: &LogicalResource) -> &str {
    let key = resource.as_str();
    key.rfind('/').map_or("", |end| &key[..=end])
}

fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARCHIVE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// Open an archive, `Ok(None)` when it does not exist
fn open_archive(path: &Path) -> Result<Option<ZipArchive<BufReader<File>>>, CatalogError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("Lookup path entry does not exist: {:?}", path);
            return Ok(None);
        }
        Err(source) => {
            return Err(CatalogError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    ZipArchive::new(BufReader::new(file))
        .map(Some)
        .map_err(|source| CatalogError::Archive {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("lib/core-1.0.jar", true)]
    #[case("lib/core-1.0.JAR", true)]
    #[case("lib/bundle.zip", true)]
    #[case("lib/classes", false)]
    #[case("lib/core-1.0.tar.gz", false)]
    fn is_archive_checks_extension(#[case] path: &str, #[case] expected: bool) {
        assert_eq!(is_archive(Path::new(path)), expected);
    }

    #[rstest]
    #[case("com/example/core/Service.class", "com/example/core/")]
    #[case("Service.class", "")]
    fn package_path_keeps_trailing_slash(#[case] key: &str, #[case] expected: &str) {
        let resource = LogicalResource::new(key).unwrap();
        assert_eq!(package_path(&resource), expected);
    }

    #[test]
    fn directory_entry_provides_plain_files() {
        let temp_dir = TempDir::new().unwrap();
        let classes = temp_dir.path().join("classes");
        std::fs::create_dir_all(classes.join("com/example")).unwrap();
        std::fs::write(classes.join("com/example/Service.class"), b"").unwrap();

        let catalog = FsCatalog::new(vec![classes.clone()]);
        let resource = LogicalResource::new("com/example/Service.class").unwrap();

        let locations = catalog
            .locations_of(&resource, &LookupContext::Own)
            .unwrap();

        assert_eq!(
            locations,
            vec![ResourceLocation::new(
                classes.join("com/example/Service.class").display().to_string()
            )]
        );
    }

    #[test]
    fn missing_entries_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = FsCatalog::new(vec![
            temp_dir.path().join("absent"),
            temp_dir.path().join("absent.jar"),
        ]);
        let resource = LogicalResource::new("com/example/Service.class").unwrap();

        let locations = catalog
            .locations_of(&resource, &LookupContext::Own)
            .unwrap();

        assert!(locations.is_empty());
    }

    #[test]
    fn corrupt_archive_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let broken = temp_dir.path().join("broken-1.0.jar");
        std::fs::write(&broken, b"not a zip").unwrap();

        let catalog = FsCatalog::new(vec![broken]);
        let resource = LogicalResource::new("com/example/Service.class").unwrap();

        let locations = catalog
            .locations_of(&resource, &LookupContext::Own)
            .unwrap();

        assert!(locations.is_empty());
    }

    #[test]
    fn unknown_named_context_is_an_error() {
        let catalog = FsCatalog::new(vec![]);
        let resource = LogicalResource::new("com/example/Service.class").unwrap();

        let result = catalog.locations_of(&resource, &LookupContext::Named("plugins".into()));

        assert!(matches!(result, Err(CatalogError::UnknownContext(name)) if name == "plugins"));
    }

    #[test]
    fn caller_context_uses_registered_name() {
        let temp_dir = TempDir::new().unwrap();
        let own = temp_dir.path().join("own");
        let caller = temp_dir.path().join("caller");
        for dir in [&own, &caller] {
            std::fs::create_dir_all(dir.join("com/example")).unwrap();
            std::fs::write(dir.join("com/example/Service.class"), b"").unwrap();
        }

        let catalog = FsCatalog::new(vec![own])
            .with_context("app", vec![caller.clone()])
            .with_caller_context("app");
        let resource = LogicalResource::new("com/example/Service.class").unwrap();

        let locations = catalog
            .locations_of(&resource, &LookupContext::Caller)
            .unwrap();

        assert_eq!(
            locations,
            vec![ResourceLocation::new(
                caller.join("com/example/Service.class").display().to_string()
            )]
        );
    }

    #[test]
    fn metadata_of_directory_reports_path_without_versions() {
        let temp_dir = TempDir::new().unwrap();
        let classes = temp_dir.path().join("classes");
        std::fs::create_dir_all(classes.join("com/example")).unwrap();
        std::fs::write(classes.join("com/example/Service.class"), b"").unwrap();

        let catalog = FsCatalog::new(vec![classes.clone()]);
        let id = ComponentId::new("com.example.Service").unwrap();

        let metadata = catalog.metadata_of(&id).unwrap();

        assert_eq!(
            metadata,
            Some(ArtifactMetadata {
                implementation_version: None,
                specification_version: None,
                artifact_path: Some(classes.display().to_string()),
            })
        );
    }

    #[test]
    fn metadata_of_unknown_identity_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = FsCatalog::new(vec![temp_dir.path().to_path_buf()]);
        let id = ComponentId::new("com.example.Missing").unwrap();

        assert_eq!(catalog.metadata_of(&id).unwrap(), None);
    }
}
