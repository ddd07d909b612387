//! Descriptor file loading

use crate::constants::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::descriptor::ModuleDescriptor;
use crate::error::{Error, Result};
use crate::ext::PathExt;
use log::debug;
use std::path::Path;

/// Loads a module descriptor from a YAML or JSON file, chosen by extension.
///
/// # Arguments
/// * `path` - Path to a `.yaml`, `.yml` or `.json` file
///
/// # Returns
/// * `Result<ModuleDescriptor>` - The descriptor as written in the file; nothing is defaulted
pub fn load_descriptor<P: AsRef<Path>>(path: P) -> Result<ModuleDescriptor> {
    let path = path.as_ref();
    let display = path.to_str_checked()?.to_string();

    if !path.is_file() {
        return Err(Error::DescriptorNotFound { path: display });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let content = std::fs::read_to_string(path)?;
    debug!("Loading descriptor from {display}");

    if YAML_EXTENSIONS.contains(&extension.as_str()) {
        Ok(serde_yaml::from_str(&content)?)
    } else if JSON_EXTENSIONS.contains(&extension.as_str()) {
        Ok(serde_json::from_str(&content)?)
    } else {
        Err(Error::UnsupportedDescriptorFormat { path: display })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn loads_yaml_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filled.yaml");
        fs::write(
            &path,
            r#"
module_name: Filled
author: Spencer Russell
year: 2015
system_includes: [stdio.h, stdbool.h]
exported_functions:
  - "void *something(void *thing)"
  - return_type: float
    name: point2_length
    parameters:
      - { type: point2, name: p }
"#,
        )
        .unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.module_name, "Filled");
        assert_eq!(descriptor.year, 2015);
        assert_eq!(descriptor.system_includes.len(), 2);
        assert_eq!(descriptor.exported_functions[0].to_string(), "void *something(void *thing)");
        assert_eq!(descriptor.exported_functions[1].to_string(), "float point2_length(point2 p)");
    }

    #[test]
    fn loads_json_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("noop.JSON");
        fs::write(
            &path,
            r#"{"module_name": "Noop", "author": "a", "year": 2020, "static_functions": ["static void process(void)"]}"#,
        )
        .unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.static_functions[0].return_type(), "static void");
    }

    #[test]
    fn rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("module.toml");
        fs::write(&path, "module_name = 'x'").unwrap();
        assert!(matches!(
            load_descriptor(&path),
            Err(Error::UnsupportedDescriptorFormat { .. })
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_descriptor(dir.path().join("absent.yaml")),
            Err(Error::DescriptorNotFound { .. })
        ));
    }

    #[test]
    fn malformed_prototype_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "module_name: Bad\nexported_functions: [\"not a prototype\"]\n").unwrap();
        assert!(matches!(load_descriptor(&path), Err(Error::YAMLParseError(_))));
    }
}
