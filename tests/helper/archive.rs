//! Archive and directory fixtures on disk

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Builds a `.jar` with the given entries and optional manifest
pub struct ArchiveBuilder {
    entries: Vec<(String, Vec<u8>)>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_resource(mut self, name: &str) -> Self {
        self.entries.push((name.to_string(), Vec::new()));
        self
    }

    pub fn with_manifest(self, content: &str) -> Self {
        self.with_manifest_bytes(content.as_bytes())
    }

    /// Manifest with raw, possibly non-UTF-8 content
    pub fn with_manifest_bytes(mut self, content: &[u8]) -> Self {
        self.entries
            .push(("META-INF/MANIFEST.MF".to_string(), content.to_vec()));
        self
    }

    pub fn write(self, path: &Path) -> PathBuf {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        let mut writer = ZipWriter::new(File::create(path).unwrap());
        for (name, content) in &self.entries {
            writer
                .start_file(name.as_str(), SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        path.to_path_buf()
    }
}

/// Create a directory entry containing the given resources
pub fn write_class_dir(dir: &Path, resources: &[&str]) -> PathBuf {
    for resource in resources {
        let path = dir.join(resource);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"").unwrap();
    }
    dir.to_path_buf()
}
