//! Archive manifest parser
//!
//! The main section holds archive-wide attributes. Each following section
//! starts with a `Name:` header and holds attributes for that entry, e.g. a
//! package path such as `com/example/core/`. Header names compare
//! case-insensitively and continuation lines (a line starting with a single
//! space) are appended to the preceding value.

use indexmap::IndexMap;

/// Path of the manifest inside an archive
pub const MANIFEST_PATH: &str = "META-INF/MANIFEST.MF";

pub const IMPLEMENTATION_VERSION: &str = "Implementation-Version";
pub const SPECIFICATION_VERSION: &str = "Specification-Version";

const SECTION_NAME: &str = "name";

type Attributes = IndexMap<String, String>;

/// Main-section and per-entry attributes of a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    main: Attributes,
    sections: IndexMap<String, Attributes>,
}

impl Manifest {
    pub fn parse(content: &str) -> Self {
        let mut manifest = Self::default();
        let mut section: Attributes = IndexMap::new();
        let mut in_main = true;
        let mut current: Option<String> = None;

        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                manifest.close_section(std::mem::take(&mut section), in_main);
                in_main = false;
                current = None;
                continue;
            }

            if let Some(rest) = line.strip_prefix(' ') {
                if let Some(value) = current.as_ref().and_then(|key| section.get_mut(key)) {
                    value.push_str(rest);
                }
                continue;
            }

            match line.split_once(':') {
                Some((name, value)) => {
                    let key = name.trim().to_ascii_lowercase();
                    let value = value.strip_prefix(' ').unwrap_or(value).to_string();
                    section.insert(key.clone(), value);
                    current = Some(key);
                }
                None => current = None,
            }
        }
        manifest.close_section(section, in_main);

        manifest
    }

    fn close_section(&mut self, attributes: Attributes, main: bool) {
        if main {
            self.main.extend(attributes);
            return;
        }
        // Sections without a name header carry nothing addressable
        let Some(name) = attributes.get(SECTION_NAME).map(|n| n.trim().to_string()) else {
            return;
        };
        self.sections.entry(name).or_default().extend(attributes);
    }

    /// Main-section attribute value, `None` when missing or blank
    pub fn get(&self, name: &str) -> Option<&str> {
        lookup(&self.main, name)
    }

    /// Attribute of the section named `entry`, falling back to the main section
    pub fn get_for(&self, entry: &str, name: &str) -> Option<&str> {
        self.sections
            .get(entry)
            .and_then(|attributes| lookup(attributes, name))
            .or_else(|| self.get(name))
    }

    /// Versions for a package path like `com/example/core/`
    pub fn package_versions(&self, package: &str) -> (Option<&str>, Option<&str>) {
        (
            self.get_for(package, IMPLEMENTATION_VERSION),
            self.get_for(package, SPECIFICATION_VERSION),
        )
    }
}

fn lookup<'a>(attributes: &'a Attributes, name: &str) -> Option<&'a str> {
    attributes
        .get(&name.to_ascii_lowercase())
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
