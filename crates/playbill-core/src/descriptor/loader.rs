//! Descriptor loading.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::DescriptorError;

use super::defaults::descriptor_file_names;
use super::types::Descriptor;

/// Load a descriptor from a file.
///
/// The format is chosen by extension: `.toml` parses as TOML, `.yaml` and
/// `.yml` as YAML. Parsing does not validate field contents; run
/// [`super::validate_descriptor`] on the result for that.
pub fn load_descriptor(path: &Path) -> Result<Descriptor, DescriptorError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    info!(path = %path.display(), format = extension, "loading descriptor");

    let content = std::fs::read_to_string(path).map_err(DescriptorError::Io)?;

    let descriptor: Descriptor = match extension {
        "toml" => toml::from_str(&content).map_err(DescriptorError::Toml)?,
        "yaml" | "yml" => serde_yaml::from_str(&content).map_err(DescriptorError::Yaml)?,
        other => return Err(DescriptorError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), id = descriptor.id.as_str(), "descriptor loaded");
    Ok(descriptor)
}

/// Find a descriptor file in a directory or its parents.
///
/// At each level the names from
/// [`super::defaults::descriptor_file_names`] are tried in order; the
/// first match wins. Parents are walked until the filesystem root.
pub fn find_descriptor(start_dir: &Path) -> Option<PathBuf> {
    debug!(start_dir = %start_dir.display(), "searching for descriptor");
    let mut current = start_dir.to_path_buf();

    loop {
        for name in descriptor_file_names() {
            let candidate = current.join(name);
            if candidate.exists() {
                info!(path = %candidate.display(), "found descriptor");
                return Some(candidate);
            }
        }

        if !current.pop() {
            break;
        }
    }

    debug!("no descriptor found");
    None
}

/// Load a descriptor from a directory, searching parent directories.
pub fn load_from_dir(dir: &Path) -> Result<(Descriptor, PathBuf), DescriptorError> {
    let path = find_descriptor(dir).ok_or_else(|| DescriptorError::NotFound(dir.to_path_buf()))?;
    let descriptor = load_descriptor(&path)?;
    Ok((descriptor, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL_TOML: &str = r#"
id = "com.example.app"
name = "App"
version = "1.0.0"
guid = "4b4f2f2e-1b1a-4f6e-9c2d-8a8d2f1e0c3b"
"#;

    #[test]
    fn test_load_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("playbill.toml");
        std::fs::write(&path, MINIMAL_TOML).unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.id, "com.example.app");
    }

    #[test]
    fn test_load_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("playbill.yaml");
        std::fs::write(
            &path,
            "id: com.example.app\nname: App\nversion: 1.0.0\nguid: 4b4f2f2e-1b1a-4f6e-9c2d-8a8d2f1e0c3b\n",
        )
        .unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        assert_eq!(descriptor.name, "App");
    }

    #[test]
    fn test_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("playbill.xml");
        std::fs::write(&path, "<app/>").unwrap();

        let result = load_descriptor(&path);
        assert!(matches!(result, Err(DescriptorError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_find_descriptor_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src").join("views");
        std::fs::create_dir_all(&nested).unwrap();
        let path = temp.path().join("playbill.toml");
        std::fs::write(&path, MINIMAL_TOML).unwrap();

        let found = find_descriptor(&nested).unwrap();
        assert_eq!(found, path);
    }

    #[test]
    fn test_find_descriptor_prefers_toml_over_yaml() {
        let temp = TempDir::new().unwrap();
        let toml_path = temp.path().join("playbill.toml");
        let yaml_path = temp.path().join("playbill.yaml");
        std::fs::write(&toml_path, MINIMAL_TOML).unwrap();
        std::fs::write(&yaml_path, "id: other.app\n").unwrap();

        let found = find_descriptor(temp.path()).unwrap();
        assert_eq!(found, toml_path);
    }

    #[test]
    fn test_load_from_dir_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_from_dir(temp.path());
        assert!(matches!(result, Err(DescriptorError::NotFound(_))));
    }
}
