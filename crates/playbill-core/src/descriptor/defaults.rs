//! Default descriptor values and file names.

/// Default descriptor file name (TOML).
pub const DEFAULT_DESCRIPTOR_TOML: &str = "playbill.toml";

/// Default descriptor file name (YAML).
pub const DEFAULT_DESCRIPTOR_YAML: &str = "playbill.yaml";

/// Get list of descriptor file names to search for.
pub fn descriptor_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_DESCRIPTOR_TOML,
        DEFAULT_DESCRIPTOR_YAML,
        "playbill.yml",
        ".playbill.toml",
    ]
}

/// Generate a starter descriptor in TOML form.
///
/// Used by `playbill init`; `guid` should be a freshly generated UUID so
/// the identifier stays stable for the lifetime of the application.
pub fn descriptor_template(id: &str, name: &str, guid: &str) -> String {
    format!(
        r#"# Playbill application descriptor
# See https://github.com/example/playbill for documentation

id = "{id}"
name = "{name}"
version = "1.0.0"
publisher = ""
url = ""
description = "No description provided"
icon = "appicon.png"
analytics = true
guid = "{guid}"

[display]
fullscreen = false
nav_bar_hidden = false
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::types::Descriptor;

    #[test]
    fn test_template_parses() {
        let content = descriptor_template(
            "com.example.app",
            "App",
            "4b4f2f2e-1b1a-4f6e-9c2d-8a8d2f1e0c3b",
        );
        let descriptor: Descriptor = toml::from_str(&content).unwrap();
        assert_eq!(descriptor.id, "com.example.app");
        assert_eq!(descriptor.guid, "4b4f2f2e-1b1a-4f6e-9c2d-8a8d2f1e0c3b");
        assert!(descriptor.analytics);
    }

    #[test]
    fn test_toml_searched_before_yaml() {
        let names = descriptor_file_names();
        let toml_idx = names.iter().position(|n| *n == DEFAULT_DESCRIPTOR_TOML);
        let yaml_idx = names.iter().position(|n| *n == DEFAULT_DESCRIPTOR_YAML);
        assert!(toml_idx < yaml_idx);
    }
}
